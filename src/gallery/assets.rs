// SPDX-License-Identifier: MPL-2.0
//! Reading and decoding photo assets.
//!
//! Bytes come from the [`GalleryRoot`]; decoding runs on tokio's blocking
//! pool so the UI thread never touches compressed image data.

use super::root::{Freshness, GalleryRoot};
use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use std::collections::HashMap;

/// Decodes `bytes` into an RGBA handle, shrinking it to fit `max_edge`
/// when given.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the bytes are not a supported image.
pub fn decode(bytes: &[u8], max_edge: Option<u32>) -> Result<image::Handle> {
    let decoded = image_rs::load_from_memory(bytes)?;
    let (width, height) = decoded.dimensions();
    let decoded = match max_edge {
        Some(edge) if width > edge || height > edge => decoded.thumbnail(edge, edge),
        _ => decoded,
    };

    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(image::Handle::from_rgba(width, height, rgba.into_raw()))
}

/// Reads `src` from `root` and decodes it.
///
/// # Errors
///
/// Returns read errors from the root and decode errors from [`decode`].
pub async fn load(root: GalleryRoot, src: String, max_edge: Option<u32>) -> Result<image::Handle> {
    let bytes = root.read(&src, Freshness::Cached).await?;
    tokio::task::spawn_blocking(move || decode(&bytes, max_edge))
        .await
        .map_err(|e| Error::Decode(e.to_string()))?
}

/// Grid thumbnail state for one `src`.
#[derive(Debug, Clone)]
pub enum CellImage {
    Loading,
    Ready(image::Handle),
    /// Loading failed; the cell shows the placeholder.
    Missing,
}

/// Thumbnails keyed by `src`, kept across re-shuffles.
#[derive(Debug, Default)]
pub struct Thumbnails {
    entries: HashMap<String, CellImage>,
}

impl Thumbnails {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `src` as loading. Returns false if it is already known, in
    /// which case no new load should be started.
    pub fn request(&mut self, src: &str) -> bool {
        if self.entries.contains_key(src) {
            return false;
        }
        self.entries.insert(src.to_string(), CellImage::Loading);
        true
    }

    /// Stores the outcome of a load started with [`Self::request`].
    pub fn finish(&mut self, src: String, result: Result<image::Handle>) {
        let entry = match result {
            Ok(handle) => CellImage::Ready(handle),
            Err(err) => {
                log::warn!("thumbnail {src} unavailable: {err}");
                CellImage::Missing
            }
        };
        self.entries.insert(src, entry);
    }

    #[must_use]
    pub fn get(&self, src: &str) -> Option<&CellImage> {
        self.entries.get(src)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;
    use tempfile::tempdir;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([200, 100, 50, 255]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png)
            .expect("encode failed");
        out.into_inner()
    }

    #[test]
    fn decode_valid_png() {
        assert!(decode(&png_bytes(8, 4), None).is_ok());
    }

    #[test]
    fn decode_rejects_garbage() {
        let err = decode(b"definitely not an image", None).expect_err("should fail");
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn thumbnails_request_only_once() {
        let mut thumbs = Thumbnails::new();
        assert!(thumbs.request("images/a.jpg"));
        assert!(!thumbs.request("images/a.jpg"));
        assert!(matches!(thumbs.get("images/a.jpg"), Some(CellImage::Loading)));
    }

    #[test]
    fn failed_thumbnail_is_missing_and_others_unaffected() {
        let mut thumbs = Thumbnails::new();
        thumbs.request("images/a.jpg");
        thumbs.request("images/b.jpg");

        thumbs.finish("images/a.jpg".into(), Err(Error::Decode("bad".into())));
        thumbs.finish("images/b.jpg".into(), decode(&png_bytes(2, 2), None));

        assert!(matches!(thumbs.get("images/a.jpg"), Some(CellImage::Missing)));
        assert!(matches!(thumbs.get("images/b.jpg"), Some(CellImage::Ready(_))));
        assert_eq!(thumbs.len(), 2);
    }

    #[tokio::test]
    async fn load_reads_from_local_root() {
        let dir = tempdir().expect("failed to create temp dir");
        std::fs::create_dir_all(dir.path().join("images")).expect("mkdir failed");
        std::fs::write(dir.path().join("images/p.png"), png_bytes(600, 300)).expect("write failed");
        let root = GalleryRoot::Local(dir.path().to_path_buf());

        assert!(load(root.clone(), "images/p.png".into(), Some(100)).await.is_ok());
        assert!(load(root, "images/missing.png".into(), None).await.is_err());
    }
}
