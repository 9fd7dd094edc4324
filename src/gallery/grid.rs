// SPDX-License-Identifier: MPL-2.0
//! Shuffled grid layout bound to canonical indices.
//!
//! The grid shows photos in a random display order, but every cell remembers
//! where its photo sits in the canonical list. The lightbox only ever sees
//! canonical indices, so prev/next follows manifest order whatever the
//! on-screen arrangement is.

use super::photo::Photo;
use rand::Rng;

/// Returns a shuffled copy of `items` (Fisher–Yates). `items` is untouched.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.random_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}

/// Position of the photo with `src` in the canonical list.
#[must_use]
pub fn canonical_index(photos: &[Photo], src: &str) -> Option<usize> {
    photos.iter().position(|photo| photo.src == src)
}

/// One rendered grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    /// Index into the canonical list; this is what opening the cell uses.
    pub canonical_index: usize,
    pub src: String,
    pub title: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Grid {
    /// The photo list is not resolved yet.
    #[default]
    Loading,
    /// The photo list resolved to nothing.
    Empty,
    /// Cells in display order.
    Cells(Vec<GridCell>),
}

impl Grid {
    /// Builds a fresh grid for `photos`, replacing whatever was shown before.
    pub fn render<R: Rng + ?Sized>(photos: &[Photo], rng: &mut R) -> Self {
        if photos.is_empty() {
            return Grid::Empty;
        }

        let cells = shuffle(photos, rng)
            .into_iter()
            .filter_map(|photo| {
                let canonical_index = canonical_index(photos, &photo.src)?;
                Some(GridCell {
                    canonical_index,
                    src: photo.src,
                    title: photo.title,
                    date: photo.date,
                })
            })
            .collect();

        Grid::Cells(cells)
    }

    #[must_use]
    pub fn cells(&self) -> &[GridCell] {
        match self {
            Grid::Cells(cells) => cells,
            Grid::Loading | Grid::Empty => &[],
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Grid::Empty)
    }
}
