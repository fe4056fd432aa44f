// SPDX-License-Identifier: MPL-2.0
//! Previous/Next controls, two equally weighted buttons side by side.

use super::component::Message;
use super::ViewContext;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Container, Row, Text};
use iced::{Element, Length};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let previous = button(label(ctx.i18n.tr("gallery-previous")))
        .on_press(Message::PreviousPressed)
        .width(Length::FillPortion(1))
        .height(sizing::BUTTON_HEIGHT)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::outlined);

    let next = button(label(ctx.i18n.tr("gallery-next")))
        .on_press(Message::NextPressed)
        .width(Length::FillPortion(1))
        .height(sizing::BUTTON_HEIGHT)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    Row::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .push(previous)
        .push(next)
        .into()
}

fn label<'a>(content: String) -> Element<'a, Message> {
    Container::new(Text::new(content).size(typography::BODY))
        .center(Length::Fill)
        .into()
}
