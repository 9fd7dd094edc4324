// SPDX-License-Identifier: MPL-2.0
//! Single-assignment publication of the canonical photo list.
//!
//! The list moves through [`Phase::Uninitialized`] → [`Phase::Pending`] →
//! [`Phase::Ready`] exactly once per process and is never reset. Readers can
//! either peek at the current value or await readiness; awaiting a list that
//! is already published completes immediately.

use super::manifest;
use super::photo::{photos_from_filenames, Photo};
use super::root::GalleryRoot;
use crate::error::{Error, Result};
use std::sync::{Arc, OnceLock};
use tokio::sync::watch;

#[derive(Debug, Clone, Default)]
pub enum Phase {
    #[default]
    Uninitialized,
    Pending,
    Ready(Arc<[Photo]>),
}

impl Phase {
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Phase::Ready(_))
    }
}

/// Process-wide holder for the resolved photo list.
#[derive(Debug)]
pub struct PhotoSource {
    tx: watch::Sender<Phase>,
}

impl Default for PhotoSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PhotoSource {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Phase::Uninitialized);
        Self { tx }
    }

    /// Marks the load as started.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyLoaded`] if a load was already started.
    pub fn begin(&self) -> Result<()> {
        let mut started = false;
        self.tx.send_if_modified(|phase| {
            if matches!(phase, Phase::Uninitialized) {
                *phase = Phase::Pending;
                started = true;
            }
            started
        });
        if started {
            Ok(())
        } else {
            Err(Error::AlreadyLoaded)
        }
    }

    /// Stores `photos` as the canonical list and wakes every waiter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyLoaded`] if a list was already published.
    pub fn publish(&self, photos: Vec<Photo>) -> Result<Arc<[Photo]>> {
        let photos: Arc<[Photo]> = photos.into();
        let mut published = false;
        self.tx.send_if_modified(|phase| {
            if !phase.is_ready() {
                *phase = Phase::Ready(Arc::clone(&photos));
                published = true;
            }
            published
        });
        if published {
            Ok(photos)
        } else {
            Err(Error::AlreadyLoaded)
        }
    }

    /// Returns the published list, or `None` while it is not ready.
    #[must_use]
    pub fn current(&self) -> Option<Arc<[Photo]>> {
        match &*self.tx.borrow() {
            Phase::Ready(photos) => Some(Arc::clone(photos)),
            _ => None,
        }
    }

    /// Waits until the list is published and returns it.
    pub async fn ready(&self) -> Arc<[Photo]> {
        let mut rx = self.tx.subscribe();
        let photos = match rx.wait_for(Phase::is_ready).await {
            Ok(phase) => match &*phase {
                Phase::Ready(photos) => Arc::clone(photos),
                _ => Arc::from(Vec::new()),
            },
            // The sender lives as long as `self`.
            Err(_) => Arc::from(Vec::new()),
        };
        photos
    }
}

/// The process-wide source used by the application.
pub fn global() -> &'static PhotoSource {
    static SOURCE: OnceLock<PhotoSource> = OnceLock::new();
    SOURCE.get_or_init(PhotoSource::new)
}

/// Resolves the manifest under `root` and publishes the resulting photos.
///
/// # Errors
///
/// Returns [`Error::AlreadyLoaded`] if `source` already started a load.
/// Manifest problems are never reported: they select the fallback list.
pub async fn load_once(source: &PhotoSource, root: &GalleryRoot) -> Result<Arc<[Photo]>> {
    source.begin()?;
    let names = manifest::resolve_filenames(root).await;
    let photos = photos_from_filenames(&names);
    log::info!("resolved {} photos from {}", photos.len(), root);
    source.publish(photos)
}

/// Startup entry point: loads into [`global`] once, or joins the load that
/// is already in flight.
pub async fn startup(root: GalleryRoot) -> Arc<[Photo]> {
    let source = global();
    match load_once(source, &root).await {
        Ok(photos) => photos,
        Err(_) => source.ready().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::tempdir;

    fn sample(names: &[&str]) -> Vec<Photo> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| Photo::from_filename(n, i))
            .collect()
    }

    #[test]
    fn new_source_is_uninitialized() {
        let source = PhotoSource::new();
        assert!(matches!(*source.tx.borrow(), Phase::Uninitialized));
        assert!(source.current().is_none());
    }

    #[test]
    fn begin_moves_to_pending_once() {
        let source = PhotoSource::new();
        source.begin().expect("first begin should succeed");
        assert!(matches!(*source.tx.borrow(), Phase::Pending));
        assert!(matches!(source.begin(), Err(Error::AlreadyLoaded)));
        assert!(source.current().is_none());
    }

    #[test]
    fn publish_is_single_assignment() {
        let source = PhotoSource::new();
        source.begin().expect("begin failed");
        source.publish(sample(&["a.jpg"])).expect("publish failed");

        let second = source.publish(sample(&["b.jpg", "c.jpg"]));
        assert!(matches!(second, Err(Error::AlreadyLoaded)));

        let current = source.current().expect("list should be ready");
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].src, "images/a.jpg");
    }

    #[tokio::test]
    async fn ready_returns_immediately_when_published() {
        let source = PhotoSource::new();
        source.begin().expect("begin failed");
        source.publish(Vec::new()).expect("publish failed");

        let photos = tokio::time::timeout(Duration::from_secs(1), source.ready())
            .await
            .expect("ready should not block");
        assert!(photos.is_empty());
    }

    #[tokio::test]
    async fn ready_wakes_when_published_later() {
        let source = Arc::new(PhotoSource::new());
        source.begin().expect("begin failed");

        let waiter = {
            let source = Arc::clone(&source);
            tokio::spawn(async move { source.ready().await })
        };
        tokio::task::yield_now().await;
        source.publish(sample(&["x.png", "y.png"])).expect("publish failed");

        let photos = waiter.await.expect("waiter panicked");
        assert_eq!(photos.len(), 2);
    }

    #[tokio::test]
    async fn load_once_publishes_manifest_photos() {
        let dir = tempdir().expect("failed to create temp dir");
        std::fs::create_dir_all(dir.path().join("images")).expect("mkdir failed");
        std::fs::write(
            dir.path().join("images/manifest.json"),
            br#"["sunset-beach_2024.png", "notes.txt", "IMG_0001.jpg"]"#,
        )
        .expect("write failed");
        let root = GalleryRoot::Local(dir.path().to_path_buf());
        let source = PhotoSource::new();

        let photos = load_once(&source, &root).await.expect("load failed");
        let titles: Vec<&str> = photos.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Sunset Beach 2024", "0001"]);
        assert!(source.current().is_some());

        assert!(matches!(
            load_once(&source, &root).await,
            Err(Error::AlreadyLoaded)
        ));
    }
}
