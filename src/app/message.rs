// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::gallery::{lightbox, Photo};
use crate::ui::toolbar;
use iced::widget::image;
use std::sync::Arc;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// The photo source published the canonical list.
    PhotosReady(Arc<[Photo]>),
    Lightbox(lightbox::Message),
    Toolbar(toolbar::Message),
    ThumbnailLoaded {
        src: String,
        result: Result<image::Handle, Error>,
    },
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `ko`, `en-US`).
    pub lang: Option<String>,
    /// Gallery root: a directory or an `http(s)` URL. Falls back to the
    /// config file, then the current directory.
    pub root: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
