// SPDX-License-Identifier: MPL-2.0
//! Light/dark appearance and the colors derived from it.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub text_muted: Color,

    /// Caption band over grid cells.
    pub cell_overlay: Color,
    pub placeholder_fill: Color,
    pub placeholder_ink: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            text_muted: palette::GRAY_600,

            cell_overlay: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },
            placeholder_fill: palette::GRAY_800,
            placeholder_ink: palette::GRAY_600,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            text_muted: palette::GRAY_200,

            cell_overlay: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
            placeholder_fill: palette::GRAY_800,
            placeholder_ink: palette::GRAY_600,
        }
    }
}

/// Persisted appearance preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The other of the two modes.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    #[must_use]
    pub fn colors(self) -> ColorScheme {
        match self {
            ThemeMode::Light => ColorScheme::light(),
            ThemeMode::Dark => ColorScheme::dark(),
        }
    }

    #[must_use]
    pub fn iced_theme(self) -> Theme {
        match self {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }

    /// Fluent key of the toggle label, naming the mode a press switches to.
    #[must_use]
    pub fn toggle_label_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "toolbar-theme-dark",
            ThemeMode::Dark => "toolbar-theme-light",
        }
    }
}
