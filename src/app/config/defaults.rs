// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Gallery**: Root location and fallback content
//! - **Thumbnails**: Grid thumbnail size bounds
//! - **Placeholder**: Generated "image not found" graphic sizes
//! - **Input**: Gesture thresholds

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Gallery root used when neither the CLI nor the config names one.
pub const DEFAULT_GALLERY_ROOT: &str = ".";

/// Filenames shown when the manifest cannot be read.
pub const FALLBACK_FILES: [&str; 4] = [
    "IMG_5751.JPG",
    "IMG_5755.JPG",
    "IMG_5764.JPG",
    "IMG_5814.JPG",
];

// ==========================================================================
// Thumbnail Defaults
// ==========================================================================

/// Default longest edge of a grid thumbnail, in pixels.
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 400;

/// Minimum allowed thumbnail edge.
pub const MIN_THUMBNAIL_SIZE: u32 = 64;

/// Maximum allowed thumbnail edge.
pub const MAX_THUMBNAIL_SIZE: u32 = 1024;

// ==========================================================================
// Placeholder Defaults
// ==========================================================================

/// Size of the placeholder drawn in a grid cell.
pub const CELL_PLACEHOLDER_SIZE: (u32, u32) = (400, 300);

/// Size of the placeholder drawn in the lightbox.
pub const VIEWER_PLACEHOLDER_SIZE: (u32, u32) = (800, 600);

// ==========================================================================
// Input Defaults
// ==========================================================================

/// Minimum horizontal travel, in logical pixels, for a touch to count as a
/// swipe.
pub const SWIPE_THRESHOLD: f32 = 50.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnail_default_within_bounds() {
        assert!(DEFAULT_THUMBNAIL_SIZE >= MIN_THUMBNAIL_SIZE);
        assert!(DEFAULT_THUMBNAIL_SIZE <= MAX_THUMBNAIL_SIZE);
    }

    #[test]
    fn fallback_files_are_images() {
        for name in FALLBACK_FILES {
            assert!(crate::gallery::photo::is_image_file(name));
        }
    }
}
