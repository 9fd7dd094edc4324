// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Toolbar surface. Derived from the active theme background.
pub fn toolbar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Title and date band at the bottom of a grid cell.
pub fn cell_caption(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.cell_overlay;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: iced::border::Radius::default()
                .bottom_left(radius::MD)
                .bottom_right(radius::MD),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Flat card shown while a picture is still loading.
pub fn pending(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let fill = colors.placeholder_fill;
    let ink = colors.placeholder_ink;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(fill)),
        text_color: Some(ink),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Full-window lightbox backdrop.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Alt text tooltip under the open photo.
pub fn alt_label(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
