// SPDX-License-Identifier: MPL-2.0
//! Location the gallery reads its manifest and images from.
//!
//! A root is either a local directory or an HTTP(S) base URL. Every resource
//! is addressed by a path relative to the root (`images/manifest.json`,
//! `images/IMG_5751.JPG`), mirroring how a static site resolves them against
//! the page URL.

use crate::error::{Error, Result};
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::Url;
use std::fmt;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Whether a read may be served from an intermediate cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Caches may answer the request.
    Cached,
    /// Force a round trip to the origin.
    Bypass,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryRoot {
    Local(PathBuf),
    Remote(Url),
}

impl Default for GalleryRoot {
    fn default() -> Self {
        GalleryRoot::Local(PathBuf::from("."))
    }
}

impl fmt::Display for GalleryRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryRoot::Local(path) => write!(f, "{}", path.display()),
            GalleryRoot::Remote(url) => write!(f, "{}", url),
        }
    }
}

impl GalleryRoot {
    /// Interprets a CLI or config value: `http://` and `https://` prefixes
    /// select a remote root, anything else is a directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] if a remote root is not a valid URL.
    pub fn parse(value: &str) -> Result<Self> {
        if value.starts_with("http://") || value.starts_with("https://") {
            // A base without a trailing slash would make `join` replace its
            // last segment instead of appending to it.
            let normalized = if value.ends_with('/') {
                value.to_string()
            } else {
                format!("{value}/")
            };
            let url = Url::parse(&normalized).map_err(|e| Error::Http(e.to_string()))?;
            Ok(GalleryRoot::Remote(url))
        } else {
            Ok(GalleryRoot::Local(PathBuf::from(value)))
        }
    }

    /// Human-readable location of `relative`, used in log lines.
    #[must_use]
    pub fn describe(&self, relative: &str) -> String {
        match self {
            GalleryRoot::Local(dir) => dir.join(relative).display().to_string(),
            GalleryRoot::Remote(base) => base
                .join(relative)
                .map(|url| url.to_string())
                .unwrap_or_else(|_| format!("{base}{relative}")),
        }
    }

    /// Reads the full contents of `relative`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] for local read failures and [`Error::Http`] for
    /// transport errors or non-success status codes.
    pub async fn read(&self, relative: &str, freshness: Freshness) -> Result<Vec<u8>> {
        match self {
            GalleryRoot::Local(dir) => Ok(tokio::fs::read(dir.join(relative)).await?),
            GalleryRoot::Remote(base) => {
                let url = base
                    .join(relative)
                    .map_err(|e| Error::Http(e.to_string()))?;
                let mut request = http_client().get(url);
                if freshness == Freshness::Bypass {
                    request = request
                        .header(CACHE_CONTROL, "no-store")
                        .header(PRAGMA, "no-cache");
                }
                let response = request.send().await?.error_for_status()?;
                Ok(response.bytes().await?.to_vec())
            }
        }
    }
}

fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(reqwest::Client::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parse_plain_path_is_local() {
        let root = GalleryRoot::parse("site/docs").expect("parse failed");
        assert_eq!(root, GalleryRoot::Local(PathBuf::from("site/docs")));
    }

    #[test]
    fn parse_url_appends_trailing_slash() {
        let root = GalleryRoot::parse("https://example.com/gallery").expect("parse failed");
        match root {
            GalleryRoot::Remote(url) => assert_eq!(url.as_str(), "https://example.com/gallery/"),
            other => panic!("expected remote root, got {other:?}"),
        }
    }

    #[test]
    fn remote_describe_joins_relative_path() {
        let root = GalleryRoot::parse("https://example.com/site/").expect("parse failed");
        assert_eq!(
            root.describe("images/manifest.json"),
            "https://example.com/site/images/manifest.json"
        );
    }

    #[tokio::test]
    async fn local_read_returns_file_contents() {
        let dir = tempdir().expect("failed to create temp dir");
        std::fs::write(dir.path().join("hello.txt"), b"hi").expect("write failed");
        let root = GalleryRoot::Local(dir.path().to_path_buf());

        let bytes = root
            .read("hello.txt", Freshness::Bypass)
            .await
            .expect("read failed");
        assert_eq!(bytes, b"hi");
    }

    #[tokio::test]
    async fn local_read_of_missing_file_is_io_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let root = GalleryRoot::Local(dir.path().to_path_buf());

        let err = root
            .read("missing.json", Freshness::Cached)
            .await
            .expect_err("read should fail");
        assert!(matches!(err, Error::Io(_)));
    }
}
