// SPDX-License-Identifier: MPL-2.0
//! Horizontal swipe detection for the lightbox.

use crate::app::config::SWIPE_THRESHOLD;
use iced::touch::Finger;

/// Navigation a completed swipe asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved right to left.
    Next,
    /// Finger moved left to right.
    Previous,
}

/// Tracks one finger from touch start to touch end.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start: Option<(Finger, f32)>,
}

impl SwipeTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records where `finger` touched down. A new touch replaces any
    /// unfinished one.
    pub fn start(&mut self, finger: Finger, x: f32) {
        self.start = Some((finger, x));
    }

    /// Completes the gesture for `finger` lifted at `x`.
    ///
    /// Returns `None` for short motions, for fingers that were never
    /// started, and for a different finger than the one being tracked.
    pub fn end(&mut self, finger: Finger, x: f32) -> Option<SwipeDirection> {
        let (tracked, start_x) = self.start?;
        if tracked != finger {
            return None;
        }
        self.start = None;

        let diff = start_x - x;
        if diff.abs() > SWIPE_THRESHOLD {
            Some(if diff > 0.0 {
                SwipeDirection::Next
            } else {
                SwipeDirection::Previous
            })
        } else {
            None
        }
    }

    /// Forgets the tracked finger (e.g. the OS cancelled the touch).
    pub fn cancel(&mut self, finger: Finger) {
        if self.tracks(finger) {
            self.start = None;
        }
    }

    /// Whether `finger` is the one currently tracked.
    #[must_use]
    pub fn tracks(&self, finger: Finger) -> bool {
        matches!(self.start, Some((tracked, _)) if tracked == finger)
    }
}
