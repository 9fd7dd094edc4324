// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The toolbar sits above the grid. While the lightbox is open it is stacked
//! over both as an opaque layer, so no press reaches the widgets beneath.

use super::Message;
use crate::gallery::assets::Thumbnails;
use crate::gallery::grid::Grid;
use crate::gallery::lightbox;
use crate::gallery::placeholder::Placeholders;
use crate::gallery::Photo;
use crate::i18n::fluent::I18n;
use crate::ui::gallery::{self, ViewContext as GalleryViewContext};
use crate::ui::lightbox::{self as lightbox_view, ViewContext as LightboxViewContext};
use crate::ui::theming::ThemeMode;
use crate::ui::toolbar::{self, ViewContext as ToolbarViewContext};
use iced::widget::{opaque, Column, Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
    pub photos: &'a [Photo],
    pub grid: &'a Grid,
    pub lightbox: &'a lightbox::State,
    pub thumbnails: &'a Thumbnails,
    pub placeholders: &'a Placeholders,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let toolbar_view = toolbar::view(ToolbarViewContext {
        i18n: ctx.i18n,
        theme_mode: ctx.theme_mode,
        can_shuffle: !ctx.grid.cells().is_empty(),
    })
    .map(Message::Toolbar);

    let grid_view = gallery::view(GalleryViewContext {
        i18n: ctx.i18n,
        grid: ctx.grid,
        thumbnails: ctx.thumbnails,
        placeholders: ctx.placeholders,
        colors: ctx.theme_mode.colors(),
        scroll_locked: ctx.lightbox.scroll_locked(),
    })
    .map(Message::Lightbox);

    let page = Column::new()
        .push(toolbar_view)
        .push(
            Container::new(grid_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    let overlay = lightbox_view::view(LightboxViewContext {
        i18n: ctx.i18n,
        state: ctx.lightbox,
        photos: ctx.photos,
        placeholders: ctx.placeholders,
    });

    match overlay {
        Some(overlay) => Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(page)
            .push(opaque(overlay.map(Message::Lightbox)))
            .into(),
        None => page.into(),
    }
}
