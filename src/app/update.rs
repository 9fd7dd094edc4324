// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Each handler receives an [`UpdateContext`] borrowing the fields of `App`
//! it may touch, applies the state change, and returns the follow-up
//! [`Task`] for any asset loading it started.

use super::{persistence, Message};
use crate::error::Error;
use crate::gallery::assets::{self, Thumbnails};
use crate::gallery::grid::Grid;
use crate::gallery::lightbox::{self, Effect};
use crate::gallery::{GalleryRoot, Photo};
use crate::ui::theming::ThemeMode;
use crate::ui::toolbar;
use iced::widget::image;
use iced::Task;
use rand::Rng;
use std::sync::Arc;

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub root: &'a GalleryRoot,
    pub photos: &'a mut Option<Arc<[Photo]>>,
    pub grid: &'a mut Grid,
    pub lightbox: &'a mut lightbox::State,
    pub thumbnails: &'a mut Thumbnails,
    pub theme_mode: &'a mut ThemeMode,
    pub thumbnail_size: u32,
}

impl UpdateContext<'_> {
    fn photos(&self) -> &[Photo] {
        self.photos.as_deref().unwrap_or(&[])
    }
}

/// Stores the published list and performs the initial render.
pub fn handle_photos_ready<R: Rng + ?Sized>(
    ctx: &mut UpdateContext<'_>,
    photos: Arc<[Photo]>,
    rng: &mut R,
) -> Task<Message> {
    if ctx.photos.is_some() {
        log::debug!("photo list already received, ignoring");
        return Task::none();
    }
    log::info!("{} photos ready", photos.len());
    *ctx.photos = Some(photos);
    render_grid(ctx, rng)
}

/// Re-renders the grid with a fresh display order.
pub fn handle_shuffle<R: Rng + ?Sized>(ctx: &mut UpdateContext<'_>, rng: &mut R) -> Task<Message> {
    if ctx.photos.is_none() {
        return Task::none();
    }
    render_grid(ctx, rng)
}

pub fn handle_toolbar_message<R: Rng + ?Sized>(
    ctx: &mut UpdateContext<'_>,
    message: toolbar::Message,
    rng: &mut R,
) -> Task<Message> {
    match message {
        toolbar::Message::Shuffle => handle_shuffle(ctx, rng),
        toolbar::Message::ToggleTheme => {
            handle_toggle_theme(ctx, persistence::persist_theme);
            Task::none()
        }
    }
}

/// Flips the theme and hands the new value to `persist` right away.
pub fn handle_toggle_theme(ctx: &mut UpdateContext<'_>, persist: impl FnOnce(ThemeMode)) {
    let next = ctx.theme_mode.toggled();
    *ctx.theme_mode = next;
    persist(next);
}

pub fn handle_lightbox_message(
    ctx: &mut UpdateContext<'_>,
    message: lightbox::Message,
) -> Task<Message> {
    let photos = ctx.photos.clone().unwrap_or_else(|| Arc::from(Vec::new()));
    match ctx.lightbox.update(message, &photos) {
        Effect::None => Task::none(),
        Effect::LoadImage { src } => {
            let root = ctx.root.clone();
            let task_src = src.clone();
            Task::perform(assets::load(root, task_src, None), move |result| {
                Message::Lightbox(lightbox::Message::ImageLoaded {
                    src: src.clone(),
                    result,
                })
            })
        }
    }
}

pub fn handle_thumbnail_loaded(
    ctx: &mut UpdateContext<'_>,
    src: String,
    result: Result<image::Handle, Error>,
) -> Task<Message> {
    ctx.thumbnails.finish(src, result);
    Task::none()
}

/// Replaces the grid content and starts loads for thumbnails not seen yet.
fn render_grid<R: Rng + ?Sized>(ctx: &mut UpdateContext<'_>, rng: &mut R) -> Task<Message> {
    let grid = Grid::render(ctx.photos(), rng);

    let mut loads = Vec::new();
    for cell in grid.cells() {
        if ctx.thumbnails.request(&cell.src) {
            let root = ctx.root.clone();
            let src = cell.src.clone();
            let max_edge = Some(ctx.thumbnail_size);
            loads.push(Task::perform(
                assets::load(root, src.clone(), max_edge),
                move |result| Message::ThumbnailLoaded {
                    src: src.clone(),
                    result,
                },
            ));
        }
    }

    *ctx.grid = grid;
    Task::batch(loads)
}
