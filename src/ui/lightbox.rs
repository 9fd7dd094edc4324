// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay: the open photo over a dimmed backdrop.
//!
//! The backdrop wraps everything else. The photo and the controls capture
//! their own presses, so only presses that land on bare backdrop produce
//! [`Message::BackdropPressed`] (mouse) or [`Message::BackdropTouched`].

use crate::gallery::lightbox::{Message, State, ViewerImage, ViewerProjection};
use crate::gallery::placeholder::Placeholders;
use crate::gallery::Photo;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::backdrop;
use iced::widget::{
    button, image, mouse_area, tooltip, Column, Container, Row, Space, Text,
};
use iced::{alignment, ContentFit, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub photos: &'a [Photo],
    pub placeholders: &'a Placeholders,
}

/// Renders the overlay, or `None` while the viewer is closed.
pub fn view<'a>(ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    let projection = ctx.state.projection(ctx.photos)?;

    let close = Row::new()
        .push(Space::new().width(Length::Fill))
        .push(nav_button("✕", ctx.i18n.tr("lightbox-close"), Message::Close));

    let stage = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .height(Length::Fill)
        .push(nav_button("◀", ctx.i18n.tr("lightbox-previous"), Message::Previous))
        .push(
            Container::new(view_picture(&ctx, &projection))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center),
        )
        .push(nav_button("▶", ctx.i18n.tr("lightbox-next"), Message::Next));

    let counter = ctx.i18n.tr_with_args(
        "viewer-counter",
        &[
            ("current", &(projection.cursor + 1).to_string()),
            ("total", &ctx.photos.len().to_string()),
        ],
    );

    let footer = Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill)
        .push(Text::new(projection.caption).size(typography::BODY_LG))
        .push(
            Text::new(counter)
                .size(typography::CAPTION)
                .color(palette::GRAY_200),
        );

    let layout = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::LG)
        .push(close)
        .push(stage)
        .push(footer);

    let dimmed = Container::new(layout)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::backdrop);

    Some(
        backdrop(dimmed, Message::BackdropPressed, |finger, x| {
            Message::BackdropTouched { finger, x }
        })
        .into(),
    )
}

fn view_picture<'a>(ctx: &ViewContext<'a>, projection: &ViewerProjection) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match ctx.state.image() {
        ViewerImage::Ready { handle, .. } => {
            image(handle.clone()).content_fit(ContentFit::Contain).into()
        }
        ViewerImage::Missing { .. } => Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(image(ctx.placeholders.viewer.clone()).content_fit(ContentFit::Contain))
            .push(Text::new(ctx.i18n.tr("image-not-found")).size(typography::BODY_LG))
            .into(),
        ViewerImage::Loading { .. } | ViewerImage::Cleared => {
            Text::new(ctx.i18n.tr("viewer-loading"))
                .size(typography::BODY_LG)
                .color(palette::GRAY_200)
                .into()
        }
    };

    let alt = alt_text(ctx.i18n, ctx.state.image(), projection);

    mouse_area(tooltip(picture, label(alt), tooltip::Position::Bottom))
        .on_press(Message::ImagePressed)
        .into()
}

/// A photo that failed to load is described as missing, not by its title.
fn alt_text(i18n: &I18n, image: &ViewerImage, projection: &ViewerProjection) -> String {
    match image {
        ViewerImage::Missing { .. } => i18n.tr("image-not-found"),
        _ => projection.alt.clone(),
    }
}

fn label<'a>(content: String) -> Container<'a, Message> {
    Container::new(Text::new(content).size(typography::CAPTION))
        .padding(spacing::XS)
        .style(styles::container::alt_label)
}

fn nav_button<'a>(glyph: &'a str, hint: String, message: Message) -> Element<'a, Message> {
    let control = button(
        Container::new(Text::new(glyph).size(typography::GLYPH))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .width(sizing::NAV_BUTTON)
    .height(sizing::NAV_BUTTON)
    .style(styles::button::overlay(
        palette::WHITE,
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_HOVER,
    ))
    .on_press(message);

    tooltip(control, label(hint), tooltip::Position::Bottom)
        .gap(spacing::XXS)
        .into()
}
