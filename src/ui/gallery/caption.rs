// SPDX-License-Identifier: MPL-2.0
//! Caption card with the photo title, its caption, and the position counter.

use super::component::Message;
use super::{ViewContext, ViewModel};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{text, Column, Container, Text};
use iced::{Color, Element, Length, Theme};

pub fn view<'a>(ctx: &ViewContext<'a>, model: &ViewModel<'a>) -> Element<'a, Message> {
    let title = Text::new(model.photo.title.as_str()).size(typography::TITLE_LG);

    let caption = Text::new(model.photo.caption.as_str())
        .size(typography::BODY)
        .style(secondary_text);

    let current = model.position.to_string();
    let total = model.total.to_string();
    let position = Text::new(ctx.i18n.tr_with_args(
        "photo-position",
        &[("current", current.as_str()), ("total", total.as_str())],
    ))
    .size(typography::CAPTION)
    .style(secondary_text);

    let content = Column::new()
        .spacing(spacing::CAPTION_GAP)
        .push(title)
        .push(caption)
        .push(position);

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}

fn secondary_text(theme: &Theme) -> text::Style {
    let base = theme.extended_palette().background.base.text;
    text::Style {
        color: Some(Color { a: 0.72, ..base }),
    }
}
