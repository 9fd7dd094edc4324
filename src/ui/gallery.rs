// SPDX-License-Identifier: MPL-2.0
//! Photo grid: one clickable card per photo in display order.
//!
//! Cells emit [`lightbox::Message::OpenAt`] with the canonical index they
//! were bound to at render time, so the display shuffle never leaks into
//! the viewer's cursor.

use crate::gallery::assets::{CellImage, Thumbnails};
use crate::gallery::grid::{Grid, GridCell};
use crate::gallery::lightbox::Message;
use crate::gallery::placeholder::Placeholders;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::scroll_lock;
use iced::widget::{button, image, Column, Container, Row, Scrollable, Stack, Text};
use iced::{alignment, ContentFit, Element, Length, Padding};

/// Contextual data needed to render the grid.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub grid: &'a Grid,
    pub thumbnails: &'a Thumbnails,
    pub placeholders: &'a Placeholders,
    pub colors: ColorScheme,
    /// The lightbox is open on top of the grid.
    pub scroll_locked: bool,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    match ctx.grid {
        Grid::Loading => centered_notice(ctx.i18n.tr("gallery-loading"), &ctx.colors),
        Grid::Empty => centered_notice(ctx.i18n.tr("gallery-empty"), &ctx.colors),
        Grid::Cells(cells) => {
            let cards: Vec<Element<'a, Message>> =
                cells.iter().map(|cell| view_cell(&ctx, cell)).collect();

            let wrapped = Row::with_children(cards).spacing(spacing::MD).wrap();

            let content = Container::new(wrapped)
                .width(Length::Fill)
                .padding(spacing::MD)
                .align_x(alignment::Horizontal::Center);

            scroll_lock(
                Scrollable::new(content)
                    .width(Length::Fill)
                    .height(Length::Fill),
                ctx.scroll_locked,
            )
            .into()
        }
    }
}

fn view_cell<'a>(ctx: &ViewContext<'a>, cell: &'a GridCell) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match ctx.thumbnails.get(&cell.src) {
        Some(CellImage::Ready(handle)) => image(handle.clone())
            .width(sizing::CELL_WIDTH)
            .height(sizing::CELL_HEIGHT)
            .content_fit(ContentFit::Cover)
            .into(),
        Some(CellImage::Missing) => missing_picture(ctx),
        Some(CellImage::Loading) | None => Container::new(Text::new(""))
            .width(sizing::CELL_WIDTH)
            .height(sizing::CELL_HEIGHT)
            .style(styles::container::pending(&ctx.colors))
            .into(),
    };

    let mut caption = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(cell.title.as_str()).size(typography::TITLE_SM));
    if !cell.date.is_empty() {
        caption = caption.push(Text::new(cell.date.as_str()).size(typography::CAPTION));
    }

    let caption_band = Container::new(caption)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::SM])
        .style(styles::container::cell_caption(&ctx.colors));

    let overlay = Container::new(caption_band)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Bottom);

    let card = Stack::new()
        .width(sizing::CELL_WIDTH)
        .height(sizing::CELL_HEIGHT)
        .push(picture)
        .push(overlay);

    button(card)
        .padding(Padding::ZERO)
        .style(styles::button::cell)
        .on_press(Message::OpenAt(cell.canonical_index))
        .into()
}

/// Placeholder graphic with the localized "Image not found" line.
fn missing_picture<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let graphic = image(ctx.placeholders.cell.clone())
        .width(sizing::CELL_WIDTH)
        .height(sizing::CELL_HEIGHT)
        .content_fit(ContentFit::Cover);

    let label = Container::new(
        Text::new(ctx.i18n.tr("image-not-found"))
            .size(typography::CAPTION)
            .color(ctx.colors.placeholder_ink),
    )
    .width(Length::Fill)
    .padding(spacing::XS)
    .align_x(alignment::Horizontal::Center);

    Stack::new()
        .width(sizing::CELL_WIDTH)
        .height(sizing::CELL_HEIGHT)
        .push(graphic)
        .push(label)
        .into()
}

fn centered_notice<'a>(message: String, colors: &ColorScheme) -> Element<'a, Message> {
    Container::new(
        Text::new(message)
            .size(typography::BODY_LG)
            .color(colors.text_muted),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}
