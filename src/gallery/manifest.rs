// SPDX-License-Identifier: MPL-2.0
//! Manifest retrieval with a hardcoded fallback.
//!
//! Static hosting cannot list a directory, so the gallery reads
//! `images/manifest.json`, a JSON array of filenames. The two failure paths
//! resolve differently:
//!
//! - the manifest cannot be read or is not JSON: use [`FALLBACK_FILES`]
//! - the manifest is JSON but not an array of strings: use an empty list

use super::root::{Freshness, GalleryRoot};
use crate::app::config::FALLBACK_FILES;
use crate::error::Result;
use serde_json::Value;

/// Manifest location relative to the gallery root.
pub const MANIFEST_PATH: &str = "images/manifest.json";

/// Parses a manifest body into filenames.
///
/// # Errors
///
/// Returns [`crate::error::Error::Manifest`] if `bytes` is not valid JSON.
/// Valid JSON of any shape other than an array of strings yields `Ok` with
/// an empty list.
pub fn parse_manifest(bytes: &[u8]) -> Result<Vec<String>> {
    let value: Value = serde_json::from_slice(bytes)?;

    let Value::Array(entries) = value else {
        log::debug!("manifest is not an array, treating as empty");
        return Ok(Vec::new());
    };

    let names: Option<Vec<String>> = entries
        .into_iter()
        .map(|entry| match entry {
            Value::String(name) => Some(name),
            _ => None,
        })
        .collect();

    Ok(names.unwrap_or_else(|| {
        log::debug!("manifest contains non-string entries, treating as empty");
        Vec::new()
    }))
}

/// Reads and parses the manifest under `root`, bypassing caches.
///
/// # Errors
///
/// Propagates read failures ([`crate::error::Error::Io`],
/// [`crate::error::Error::Http`]) and JSON syntax errors.
pub async fn fetch_manifest(root: &GalleryRoot) -> Result<Vec<String>> {
    let bytes = root.read(MANIFEST_PATH, Freshness::Bypass).await?;
    parse_manifest(&bytes)
}

/// Returns the fallback filename list.
#[must_use]
pub fn fallback_filenames() -> Vec<String> {
    FALLBACK_FILES.iter().map(|name| (*name).to_string()).collect()
}

/// Resolves the filename list for `root`. Never fails: any error while
/// fetching or parsing the manifest selects [`fallback_filenames`].
pub async fn resolve_filenames(root: &GalleryRoot) -> Vec<String> {
    match fetch_manifest(root).await {
        Ok(names) => {
            log::info!(
                "loaded manifest {} ({} entries)",
                root.describe(MANIFEST_PATH),
                names.len()
            );
            names
        }
        Err(err) => {
            log::warn!(
                "manifest {} unavailable ({}), using fallback list",
                root.describe(MANIFEST_PATH),
                err
            );
            fallback_filenames()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn parses_array_of_strings() {
        let names = parse_manifest(br#"["a.jpg", "b.png"]"#).expect("parse failed");
        assert_eq!(names, vec!["a.jpg".to_string(), "b.png".to_string()]);
    }

    #[test]
    fn empty_array_is_empty_list() {
        assert!(parse_manifest(b"[]").expect("parse failed").is_empty());
    }

    #[test]
    fn wrong_shape_is_empty_list() {
        assert!(parse_manifest(br#"{"files": ["a.jpg"]}"#).expect("parse failed").is_empty());
        assert!(parse_manifest(b"42").expect("parse failed").is_empty());
        assert!(parse_manifest(br#"["a.jpg", 7]"#).expect("parse failed").is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = parse_manifest(b"[\"a.jpg\",").expect_err("should fail");
        assert!(matches!(err, Error::Manifest(_)));
    }

    #[tokio::test]
    async fn missing_manifest_resolves_to_fallback() {
        let dir = tempdir().expect("failed to create temp dir");
        let root = GalleryRoot::Local(dir.path().to_path_buf());

        let names = resolve_filenames(&root).await;
        assert_eq!(
            names,
            vec!["IMG_5751.JPG", "IMG_5755.JPG", "IMG_5764.JPG", "IMG_5814.JPG"]
        );
    }

    #[tokio::test]
    async fn malformed_manifest_resolves_to_fallback() {
        let dir = tempdir().expect("failed to create temp dir");
        std::fs::create_dir_all(dir.path().join("images")).expect("mkdir failed");
        std::fs::write(dir.path().join(MANIFEST_PATH), b"not json").expect("write failed");
        let root = GalleryRoot::Local(dir.path().to_path_buf());

        assert_eq!(resolve_filenames(&root).await, fallback_filenames());
    }

    #[tokio::test]
    async fn wrong_shaped_manifest_resolves_to_empty() {
        let dir = tempdir().expect("failed to create temp dir");
        std::fs::create_dir_all(dir.path().join("images")).expect("mkdir failed");
        std::fs::write(dir.path().join(MANIFEST_PATH), br#"{"a": 1}"#).expect("write failed");
        let root = GalleryRoot::Local(dir.path().to_path_buf());

        assert!(resolve_filenames(&root).await.is_empty());
    }
}
