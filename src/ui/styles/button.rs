// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary toolbar action.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        _ => button::Style::default(),
    }
}

/// Secondary toolbar action. Adapts to light/dark theme.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (bg_color, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_800, WHITE)
    };

    let border_color = match status {
        button::Status::Hovered => palette::PRIMARY_500,
        _ => palette::GRAY_600,
    };

    button::Style {
        background: Some(Background::Color(bg_color)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Lightbox controls drawn over the backdrop (prev, next, close).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OPAQUE,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Grid cell: no chrome, a brand-colored ring on hover.
pub fn cell(_theme: &Theme, status: button::Status) -> button::Style {
    let border = match status {
        button::Status::Hovered | button::Status::Pressed => Border {
            color: palette::PRIMARY_500,
            width: 2.0,
            radius: radius::MD.into(),
        },
        _ => Border {
            color: Color::TRANSPARENT,
            width: 2.0,
            radius: radius::MD.into(),
        },
    };

    button::Style {
        background: None,
        text_color: WHITE,
        border,
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_highlights_only_on_interaction() {
        let idle = cell(&Theme::Light, button::Status::Active);
        let hovered = cell(&Theme::Light, button::Status::Hovered);
        assert_eq!(idle.border.color, Color::TRANSPARENT);
        assert_eq!(hovered.border.color, palette::PRIMARY_500);
    }

    #[test]
    fn overlay_darkens_on_hover() {
        let style = overlay(WHITE, opacity::OVERLAY_MEDIUM, opacity::OVERLAY_HOVER);
        let idle = style(&Theme::Dark, button::Status::Active);
        let hovered = style(&Theme::Dark, button::Status::Hovered);
        let alpha = |s: &button::Style| match s.background {
            Some(Background::Color(c)) => c.a,
            _ => 0.0,
        };
        assert!(alpha(&hovered) > alpha(&idle));
    }

    #[test]
    fn secondary_follows_theme_brightness() {
        let light = secondary(&Theme::Light, button::Status::Active);
        let dark = secondary(&Theme::Dark, button::Status::Active);
        assert_eq!(light.text_color, palette::GRAY_900);
        assert_eq!(dark.text_color, WHITE);
    }
}
