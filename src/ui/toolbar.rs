// SPDX-License-Identifier: MPL-2.0
//! Toolbar shown above the grid: app title, shuffle, and theme toggle.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the toolbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
    /// Shuffling is offered only once there are photos to shuffle.
    pub can_shuffle: bool,
}

/// Messages emitted by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Shuffle,
    ToggleTheme,
}

/// Render the toolbar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_MD);

    let shuffle = button(Text::new(ctx.i18n.tr("toolbar-shuffle")))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .on_press_maybe(ctx.can_shuffle.then_some(Message::Shuffle));

    let theme_toggle = button(Text::new(ctx.i18n.tr(ctx.theme_mode.toggle_label_key())))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::secondary)
        .on_press(Message::ToggleTheme);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::XS, spacing::MD])
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(shuffle)
        .push(theme_toggle);

    Container::new(row)
        .width(Length::Fill)
        .height(sizing::TOOLBAR_HEIGHT)
        .align_y(Vertical::Center)
        .style(styles::container::toolbar)
        .into()
}
