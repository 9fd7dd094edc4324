// SPDX-License-Identifier: MPL-2.0
//! Gallery domain: where photos come from and how they are browsed.
//!
//! Loading side: [`root`] locates resources, [`manifest`] resolves filenames
//! (with a fallback), [`photo`] derives display records, and [`source`]
//! publishes the canonical list once per process. [`assets`] and
//! [`placeholder`] produce the pixels.
//!
//! Browsing side: [`grid`] shuffles the display order while keeping
//! canonical indices, [`lightbox`] is the viewer state machine, and
//! [`swipe`] turns touches into navigation.

pub mod assets;
pub mod grid;
pub mod lightbox;
pub mod manifest;
pub mod photo;
pub mod placeholder;
pub mod root;
pub mod source;
pub mod swipe;

pub use photo::Photo;
pub use root::GalleryRoot;
