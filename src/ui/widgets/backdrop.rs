// SPDX-License-Identifier: MPL-2.0
//! A click-through area behind modal content.
//!
//! Presses the content captures are left alone. Uncaptured presses inside the
//! bounds are reported, with mouse clicks and finger touches kept apart so a
//! touch can still turn into a swipe.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{touch, Element, Event, Length, Rectangle, Size};

/// An uncaptured press that landed on the backdrop.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Press {
    Mouse,
    Finger(touch::Finger, f32),
}

pub struct Backdrop<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    on_click: Message,
    on_touch: Box<dyn Fn(touch::Finger, f32) -> Message + 'a>,
}

impl<'a, Message, Theme, Renderer> Backdrop<'a, Message, Theme, Renderer> {
    pub fn new(
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
        on_click: Message,
        on_touch: impl Fn(touch::Finger, f32) -> Message + 'a,
    ) -> Self {
        Self {
            content: content.into(),
            on_click,
            on_touch: Box::new(on_touch),
        }
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Backdrop<'_, Message, Theme, Renderer>
where
    Message: Clone,
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );

        if shell.is_event_captured() {
            return;
        }

        match classify(event, layout.bounds(), cursor) {
            Some(Press::Mouse) => {
                shell.publish(self.on_click.clone());
                shell.capture_event();
            }
            Some(Press::Finger(finger, x)) => {
                shell.publish((self.on_touch)(finger, x));
                shell.capture_event();
            }
            None => {}
        }
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<Backdrop<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(backdrop: Backdrop<'a, Message, Theme, Renderer>) -> Self {
        Self::new(backdrop)
    }
}

/// Wraps `content`, reporting bare clicks as `on_click` and bare finger
/// presses as `on_touch(finger, x)`.
pub fn backdrop<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    on_click: Message,
    on_touch: impl Fn(touch::Finger, f32) -> Message + 'a,
) -> Backdrop<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    Backdrop::new(content, on_click, on_touch)
}

fn classify(event: &Event, bounds: Rectangle, cursor: mouse::Cursor) -> Option<Press> {
    match event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
            if cursor.is_over(bounds) =>
        {
            Some(Press::Mouse)
        }
        Event::Touch(touch::Event::FingerPressed { id, position }) if bounds.contains(*position) => {
            Some(Press::Finger(*id, position.x))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Point;

    fn bounds() -> Rectangle {
        Rectangle::new(Point::ORIGIN, Size::new(800.0, 600.0))
    }

    #[test]
    fn left_click_inside_is_a_mouse_press() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        let cursor = mouse::Cursor::Available(Point::new(10.0, 10.0));
        assert_eq!(classify(&event, bounds(), cursor), Some(Press::Mouse));
    }

    #[test]
    fn click_outside_or_right_button_is_ignored() {
        let left = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        let outside = mouse::Cursor::Available(Point::new(900.0, 10.0));
        assert_eq!(classify(&left, bounds(), outside), None);

        let right = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Right));
        let inside = mouse::Cursor::Available(Point::new(10.0, 10.0));
        assert_eq!(classify(&right, bounds(), inside), None);
    }

    #[test]
    fn finger_press_keeps_finger_and_x() {
        let event = Event::Touch(touch::Event::FingerPressed {
            id: touch::Finger(4),
            position: Point::new(320.0, 50.0),
        });
        assert_eq!(
            classify(&event, bounds(), mouse::Cursor::Unavailable),
            Some(Press::Finger(touch::Finger(4), 320.0))
        );
    }

    #[test]
    fn finger_lift_is_not_a_press() {
        let event = Event::Touch(touch::Event::FingerLifted {
            id: touch::Finger(4),
            position: Point::new(320.0, 50.0),
        });
        assert_eq!(classify(&event, bounds(), mouse::Cursor::Unavailable), None);
    }
}
