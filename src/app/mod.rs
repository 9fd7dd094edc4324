// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the grid and the lightbox.
//!
//! The `App` struct wires together the domains (photo source, grid, viewer,
//! localization, theme) and translates messages into side effects like
//! asset loading or config persistence.

pub mod config;
mod message;
pub mod paths;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use persistence::persist_theme_to;

use crate::gallery::assets::Thumbnails;
use crate::gallery::grid::Grid;
use crate::gallery::lightbox;
use crate::gallery::placeholder::Placeholders;
use crate::gallery::{source, GalleryRoot, Photo};
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    root: GalleryRoot,
    /// Longest edge requested for grid thumbnails.
    thumbnail_size: u32,
    /// Canonical list, set once the photo source publishes it.
    photos: Option<Arc<[Photo]>>,
    grid: Grid,
    lightbox: lightbox::State,
    thumbnails: Thumbnails,
    placeholders: Placeholders,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("root", &self.root)
            .field("theme_mode", &self.theme_mode)
            .field("photos", &self.photos.as_ref().map(|p| p.len()))
            .field("lightbox", &self.lightbox.mode())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 420;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon: crate::icon::load_window_icon(),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());

    // iced 0.14 requires the boot function to be Fn; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            theme_mode: ThemeMode::default(),
            root: GalleryRoot::default(),
            thumbnail_size: config::DEFAULT_THUMBNAIL_SIZE,
            photos: None,
            grid: Grid::default(),
            lightbox: lightbox::State::new(),
            thumbnails: Thumbnails::new(),
            placeholders: Placeholders::new(
                config::CELL_PLACEHOLDER_SIZE,
                config::VIEWER_PLACEHOLDER_SIZE,
            ),
        }
    }
}

impl App {
    /// Applies the persisted preferences, then starts resolving the photo
    /// list. The theme is known before the first frame is drawn.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);

        if let Some(key) = config_warning {
            log::warn!("{}", i18n.tr(&key));
        }

        let root_arg = flags
            .root
            .or_else(|| config.gallery.root.clone())
            .unwrap_or_else(|| config::DEFAULT_GALLERY_ROOT.to_string());
        let root = GalleryRoot::parse(&root_arg).unwrap_or_else(|err| {
            log::error!("invalid gallery root {root_arg:?}: {err}");
            GalleryRoot::default()
        });
        log::info!("gallery root: {root}");

        let app = App {
            i18n,
            theme_mode: config.general.theme,
            root: root.clone(),
            thumbnail_size: config.gallery.thumbnail_size(),
            ..Self::default()
        };

        let task = Task::perform(source::startup(root), Message::PhotosReady);
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.lightbox.is_open())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut rng = rand::rng();
        let mut ctx = update::UpdateContext {
            root: &self.root,
            photos: &mut self.photos,
            grid: &mut self.grid,
            lightbox: &mut self.lightbox,
            thumbnails: &mut self.thumbnails,
            theme_mode: &mut self.theme_mode,
            thumbnail_size: self.thumbnail_size,
        };

        match message {
            Message::PhotosReady(photos) => update::handle_photos_ready(&mut ctx, photos, &mut rng),
            Message::Lightbox(lightbox_message) => {
                update::handle_lightbox_message(&mut ctx, lightbox_message)
            }
            Message::Toolbar(toolbar_message) => {
                update::handle_toolbar_message(&mut ctx, toolbar_message, &mut rng)
            }
            Message::ThumbnailLoaded { src, result } => {
                update::handle_thumbnail_loaded(&mut ctx, src, result)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            theme_mode: self.theme_mode,
            photos: self.photos.as_deref().unwrap_or(&[]),
            grid: &self.grid,
            lightbox: &self.lightbox,
            thumbnails: &self.thumbnails,
            placeholders: &self.placeholders,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::gallery::assets::CellImage;
    use crate::gallery::lightbox::{Mode, NavKey};
    use crate::ui::toolbar;
    use iced::widget::image::Handle;

    fn photos(names: &[&str]) -> Arc<[Photo]> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| Photo::from_filename(n, i))
            .collect::<Vec<_>>()
            .into()
    }

    fn app_with(names: &[&str]) -> App {
        let mut app = App::default();
        let _ = app.update(Message::PhotosReady(photos(names)));
        app
    }

    fn handle() -> Handle {
        Handle::from_rgba(1, 1, vec![0, 0, 0, 255])
    }

    #[test]
    fn starts_loading_with_light_theme() {
        let app = App::default();
        assert!(matches!(app.grid, Grid::Loading));
        assert_eq!(app.theme(), Theme::Light);
        assert!(!app.lightbox.is_open());
    }

    #[test]
    fn persisted_dark_theme_is_applied_at_boot() {
        let _lock = paths::ENV_MUTEX.lock().unwrap();
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        std::fs::write(
            dir.path().join("settings.toml"),
            "[general]\ntheme = \"dark\"\n",
        )
        .expect("write failed");
        std::env::set_var(paths::ENV_CONFIG_DIR, dir.path());

        let (app, _task) = App::new(Flags::default());

        std::env::remove_var(paths::ENV_CONFIG_DIR);
        assert_eq!(app.theme(), Theme::Dark);
        assert!(matches!(app.grid, Grid::Loading));
    }

    #[test]
    fn photos_ready_renders_every_photo_once() {
        let app = app_with(&["a.jpg", "b.jpg", "c.jpg"]);
        let mut indices: Vec<usize> = app.grid.cells().iter().map(|c| c.canonical_index).collect();
        indices.sort_unstable();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(app.thumbnails.len(), 3);
    }

    #[test]
    fn empty_list_shows_empty_state_and_viewer_stays_closed() {
        let mut app = app_with(&[]);
        assert!(app.grid.is_empty());

        let _ = app.update(Message::Lightbox(lightbox::Message::OpenAt(0)));
        assert!(!app.lightbox.is_open());
    }

    #[test]
    fn clicked_cell_opens_its_canonical_photo() {
        let mut app = app_with(&["a.jpg", "b.jpg", "c.jpg", "d.jpg"]);
        let cell = app.grid.cells()[2].clone();

        let _ = app.update(Message::Lightbox(lightbox::Message::OpenAt(cell.canonical_index)));

        let projection = app
            .lightbox
            .projection(app.photos.as_deref().unwrap_or(&[]))
            .expect("viewer should be open");
        assert_eq!(projection.src, cell.src);
        assert_eq!(projection.caption, cell.title);
    }

    #[test]
    fn keyboard_navigation_wraps() {
        let mut app = app_with(&["a.jpg", "b.jpg", "c.jpg"]);
        let _ = app.update(Message::Lightbox(lightbox::Message::OpenAt(0)));
        let _ = app.update(Message::Lightbox(lightbox::Message::Key(NavKey::ArrowLeft)));
        assert_eq!(app.lightbox.mode(), Mode::Open { cursor: 2 });

        let _ = app.update(Message::Lightbox(lightbox::Message::Key(NavKey::ArrowRight)));
        assert_eq!(app.lightbox.mode(), Mode::Open { cursor: 0 });

        let _ = app.update(Message::Lightbox(lightbox::Message::Key(NavKey::Escape)));
        assert_eq!(app.lightbox.mode(), Mode::Closed);
    }

    #[test]
    fn second_publication_is_ignored() {
        let mut app = app_with(&["a.jpg"]);
        let _ = app.update(Message::PhotosReady(photos(&["x.jpg", "y.jpg"])));
        assert_eq!(app.photos.as_ref().map(|p| p.len()), Some(1));
    }

    #[test]
    fn shuffle_keeps_the_same_photos_and_thumbnails() {
        let mut app = app_with(&["a.jpg", "b.jpg", "c.jpg", "d.jpg", "e.jpg"]);
        let _ = app.update(Message::ThumbnailLoaded {
            src: "images/a.jpg".into(),
            result: Ok(handle()),
        });

        let _ = app.update(Message::Toolbar(toolbar::Message::Shuffle));

        let mut srcs: Vec<String> = app.grid.cells().iter().map(|c| c.src.clone()).collect();
        srcs.sort();
        assert_eq!(srcs.len(), 5);
        assert_eq!(srcs[0], "images/a.jpg");
        assert!(matches!(
            app.thumbnails.get("images/a.jpg"),
            Some(CellImage::Ready(_))
        ));
        assert_eq!(app.thumbnails.len(), 5);
    }

    #[test]
    fn failed_thumbnail_marks_only_that_cell() {
        let mut app = app_with(&["a.jpg", "b.jpg"]);
        let _ = app.update(Message::ThumbnailLoaded {
            src: "images/a.jpg".into(),
            result: Err(Error::Decode("broken".into())),
        });
        assert!(matches!(
            app.thumbnails.get("images/a.jpg"),
            Some(CellImage::Missing)
        ));
        assert!(matches!(
            app.thumbnails.get("images/b.jpg"),
            Some(CellImage::Loading)
        ));
    }

    #[test]
    fn theme_toggle_flips_and_persists() {
        let mut app = App::default();
        let mut saved = Vec::new();
        {
            let mut ctx = update::UpdateContext {
                root: &app.root,
                photos: &mut app.photos,
                grid: &mut app.grid,
                lightbox: &mut app.lightbox,
                thumbnails: &mut app.thumbnails,
                theme_mode: &mut app.theme_mode,
                thumbnail_size: app.thumbnail_size,
            };
            update::handle_toggle_theme(&mut ctx, |mode| saved.push(mode));
            update::handle_toggle_theme(&mut ctx, |mode| saved.push(mode));
        }
        assert_eq!(saved, vec![ThemeMode::Dark, ThemeMode::Light]);
        assert_eq!(app.theme(), Theme::Light);

        let _ = app.update(Message::Toolbar(toolbar::Message::ToggleTheme));
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn subscription_follows_viewer_state() {
        let mut app = app_with(&["a.jpg"]);
        assert!(!app.lightbox.is_open());
        let _ = app.update(Message::Lightbox(lightbox::Message::OpenAt(0)));
        assert!(app.lightbox.is_open());
        assert!(app.lightbox.scroll_locked());
        let _ = app.update(Message::Lightbox(lightbox::Message::BackdropPressed));
        assert!(!app.lightbox.scroll_locked());
    }

    #[test]
    fn window_title_is_localized() {
        let app = App::default();
        assert!(!app.title().starts_with("MISSING"));
    }
}
