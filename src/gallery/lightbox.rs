// SPDX-License-Identifier: MPL-2.0
//! Full-window single-photo viewer.
//!
//! The viewer is a two-state machine, `Closed` or `Open { cursor }`, where the
//! cursor is an index into the canonical photo list. Every input (buttons,
//! keys, swipes, backdrop clicks) arrives as a [`Message`] and is applied by
//! [`State::update`]; the widget layer renders [`State::projection`] after
//! each transition.

use super::photo::Photo;
use super::swipe::{SwipeDirection, SwipeTracker};
use crate::error::Error;
use iced::touch::Finger;
use iced::widget::image;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Closed,
    Open {
        cursor: usize,
    },
}

/// Keys the viewer reacts to while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

/// Pixels currently shown for the open photo.
#[derive(Debug, Clone, Default)]
pub enum ViewerImage {
    /// Viewer closed: nothing is kept so a reopen never flashes old content.
    #[default]
    Cleared,
    Loading {
        src: String,
    },
    Ready {
        src: String,
        handle: image::Handle,
    },
    /// Loading failed; the placeholder graphic is shown.
    Missing {
        src: String,
    },
}

impl ViewerImage {
    fn src(&self) -> Option<&str> {
        match self {
            ViewerImage::Cleared => None,
            ViewerImage::Loading { src }
            | ViewerImage::Ready { src, .. }
            | ViewerImage::Missing { src } => Some(src),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    /// A grid cell bound to this canonical index was clicked.
    OpenAt(usize),
    Next,
    Previous,
    Close,
    /// Mouse click on the backdrop around the photo.
    BackdropPressed,
    /// Finger landed on the backdrop; a tap closes, a swipe navigates.
    BackdropTouched {
        finger: Finger,
        x: f32,
    },
    /// Click on the photo itself; swallowed so it does not reach the backdrop.
    ImagePressed,
    Key(NavKey),
    TouchStarted {
        finger: Finger,
        x: f32,
    },
    TouchEnded {
        finger: Finger,
        x: f32,
    },
    TouchLost {
        finger: Finger,
    },
    ImageLoaded {
        src: String,
        result: Result<image::Handle, Error>,
    },
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Fetch and decode the full-size image at `src`.
    LoadImage { src: String },
}

/// What the viewer should display for the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerProjection {
    pub cursor: usize,
    pub src: String,
    pub alt: String,
    pub caption: String,
}

/// `title`, or `title - caption` when the caption is not empty.
#[must_use]
pub fn caption_for(photo: &Photo) -> String {
    if photo.caption.is_empty() {
        photo.title.clone()
    } else {
        format!("{} - {}", photo.title, photo.caption)
    }
}

#[derive(Debug, Clone, Default)]
pub struct State {
    mode: Mode,
    image: ViewerImage,
    swipe: SwipeTracker,
    /// A finger landed on the backdrop; decided on lift (tap closes, swipe navigates).
    close_on_lift: bool,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.mode, Mode::Open { .. })
    }

    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        match self.mode {
            Mode::Open { cursor } => Some(cursor),
            Mode::Closed => None,
        }
    }

    /// Background grid scrolling is disabled exactly while the viewer is open.
    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }

    #[must_use]
    pub fn image(&self) -> &ViewerImage {
        &self.image
    }

    /// Applies `message` against the canonical `photos` list.
    pub fn update(&mut self, message: Message, photos: &[Photo]) -> Effect {
        match message {
            Message::OpenAt(index) => self.show(index, photos),
            Message::Next => self.step(photos, Step::Forward),
            Message::Previous => self.step(photos, Step::Backward),
            Message::Close | Message::BackdropPressed => {
                self.close();
                Effect::None
            }
            Message::BackdropTouched { finger, x } => {
                if self.is_open() {
                    self.swipe.start(finger, x);
                    self.close_on_lift = true;
                }
                Effect::None
            }
            Message::ImagePressed => Effect::None,
            Message::Key(key) => {
                if !self.is_open() {
                    return Effect::None;
                }
                match key {
                    NavKey::Escape => {
                        self.close();
                        Effect::None
                    }
                    NavKey::ArrowLeft => self.step(photos, Step::Backward),
                    NavKey::ArrowRight => self.step(photos, Step::Forward),
                }
            }
            Message::TouchStarted { finger, x } => {
                // The backdrop reports its own touches before this arrives.
                if self.is_open() && !self.swipe.tracks(finger) {
                    self.swipe.start(finger, x);
                    self.close_on_lift = false;
                }
                Effect::None
            }
            Message::TouchEnded { finger, x } => {
                let tapped_backdrop =
                    self.swipe.tracks(finger) && std::mem::take(&mut self.close_on_lift);
                match self.swipe.end(finger, x) {
                    Some(SwipeDirection::Next) => self.step(photos, Step::Forward),
                    Some(SwipeDirection::Previous) => self.step(photos, Step::Backward),
                    None if tapped_backdrop => {
                        self.close();
                        Effect::None
                    }
                    None => Effect::None,
                }
            }
            Message::TouchLost { finger } => {
                if self.swipe.tracks(finger) {
                    self.close_on_lift = false;
                }
                self.swipe.cancel(finger);
                Effect::None
            }
            Message::ImageLoaded { src, result } => {
                self.apply_loaded(src, result);
                Effect::None
            }
        }
    }

    /// Display data for the open photo, `None` while closed.
    #[must_use]
    pub fn projection(&self, photos: &[Photo]) -> Option<ViewerProjection> {
        let cursor = self.cursor()?;
        let photo = photos.get(cursor)?;
        Some(ViewerProjection {
            cursor,
            src: photo.src.clone(),
            alt: photo.alt_text().to_string(),
            caption: caption_for(photo),
        })
    }

    fn show(&mut self, index: usize, photos: &[Photo]) -> Effect {
        let Some(photo) = photos.get(index) else {
            log::debug!("ignoring open request for index {index} of {}", photos.len());
            return Effect::None;
        };
        self.mode = Mode::Open { cursor: index };
        self.image = ViewerImage::Loading {
            src: photo.src.clone(),
        };
        Effect::LoadImage {
            src: photo.src.clone(),
        }
    }

    fn step(&mut self, photos: &[Photo], step: Step) -> Effect {
        let Mode::Open { cursor } = self.mode else {
            return Effect::None;
        };
        let len = photos.len();
        if len == 0 {
            return Effect::None;
        }
        let next = match step {
            Step::Forward => (cursor + 1) % len,
            Step::Backward => (cursor + len - 1) % len,
        };
        self.show(next, photos)
    }

    fn close(&mut self) {
        self.mode = Mode::Closed;
        self.image = ViewerImage::Cleared;
        self.swipe = SwipeTracker::new();
        self.close_on_lift = false;
    }

    fn apply_loaded(&mut self, src: String, result: Result<image::Handle, Error>) {
        if self.image.src() != Some(src.as_str()) {
            // Arrived after the viewer moved on or closed.
            return;
        }
        self.image = match result {
            Ok(handle) => ViewerImage::Ready { src, handle },
            Err(err) => {
                log::warn!("failed to load {src}: {err}");
                ViewerImage::Missing { src }
            }
        };
    }
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Forward,
    Backward,
}
