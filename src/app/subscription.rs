// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native keyboard and touch events are routed to the lightbox. The
//! subscription is only active while the lightbox is open; with it closed,
//! keys and touches are left to the widgets.

use super::Message;
use crate::gallery::lightbox::{self, NavKey};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, touch, Event, Subscription};

/// Creates the lightbox input subscription.
pub fn create_event_subscription(lightbox_open: bool) -> Subscription<Message> {
    if !lightbox_open {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window_id| {
        route_event(&event, status).map(Message::Lightbox)
    })
}

/// Maps a native event to a lightbox message.
///
/// Keys already consumed by a widget are skipped. Touches are always
/// forwarded because the photo and buttons capture finger presses, and a
/// swipe still has to be seen across them.
fn route_event(event: &Event, status: event::Status) -> Option<lightbox::Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            if status == event::Status::Captured {
                return None;
            }
            nav_key(key).map(lightbox::Message::Key)
        }
        Event::Touch(touch::Event::FingerPressed { id, position }) => {
            Some(lightbox::Message::TouchStarted {
                finger: *id,
                x: position.x,
            })
        }
        Event::Touch(touch::Event::FingerLifted { id, position }) => {
            Some(lightbox::Message::TouchEnded {
                finger: *id,
                x: position.x,
            })
        }
        Event::Touch(touch::Event::FingerLost { id, .. }) => {
            Some(lightbox::Message::TouchLost { finger: *id })
        }
        _ => None,
    }
}

fn nav_key(key: &Key) -> Option<NavKey> {
    match key {
        Key::Named(Named::Escape) => Some(NavKey::Escape),
        Key::Named(Named::ArrowLeft) => Some(NavKey::ArrowLeft),
        Key::Named(Named::ArrowRight) => Some(NavKey::ArrowRight),
        _ => None,
    }
}
