// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.

use super::config;
use crate::ui::theming::ThemeMode;
use std::path::PathBuf;

/// Writes the theme preference to `settings.toml`, keeping the other
/// settings as they are on disk, even when one of them does not parse.
///
/// Runs synchronously so the value is stored before the next frame. Guarded
/// during tests to keep isolation: tests call [`persist_theme_to`] with a
/// temporary directory instead.
pub fn persist_theme(theme_mode: ThemeMode) {
    if cfg!(test) {
        return;
    }
    persist_theme_to(theme_mode, None);
}

/// Same as [`persist_theme`] but against an explicit config directory.
pub fn persist_theme_to(theme_mode: ThemeMode, config_dir: Option<PathBuf>) {
    if let Err(error) = config::save_theme_with_override(theme_mode, config_dir) {
        log::error!("Failed to save config: {error}");
    }
}
