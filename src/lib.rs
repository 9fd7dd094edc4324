// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a photo gallery built with the Iced GUI framework.
//!
//! It reads a JSON manifest of filenames (with a built-in fallback list),
//! shows the photos as a shuffled grid, and opens any of them in a lightbox
//! with keyboard and swipe navigation. The light/dark theme preference is
//! persisted between runs.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod icon;
pub mod ui;
