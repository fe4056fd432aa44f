// SPDX-License-Identifier: MPL-2.0
//! Photo area: the current image filling its pane, the title banner on top,
//! and the pointer tracking used for swipe navigation.

use super::component::Message;
use super::{ViewContext, ViewModel};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::image::{Handle, Image};
use iced::widget::{mouse_area, Column, Container, Stack, Text};
use iced::{ContentFit, Element, Length};

pub fn view<'a>(ctx: &ViewContext<'a>, model: &ViewModel<'a>) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match model.image {
        // Cover crops to fill the pane without distorting the photo
        Some(handle) => Image::<Handle>::new(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => {
            let placeholder = Text::new(ctx.i18n.tr("photo-missing")).size(typography::BODY);
            Container::new(placeholder).center(Length::Fill).into()
        }
    };

    let banner = Container::new(Text::new(ctx.screen_title).size(typography::TITLE_MD))
        .width(Length::Fill)
        .padding([spacing::BANNER_VERTICAL, spacing::MD])
        .align_x(Horizontal::Center)
        .style(styles::overlay::title_banner);

    let layered = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(picture)
        .push(Column::new().width(Length::Fill).push(banner));

    let framed = Container::new(layered)
        .width(Length::Fill)
        .height(Length::Fill)
        .clip(true)
        .style(styles::container::photo_frame);

    mouse_area(framed)
        .on_press(Message::PointerPressed)
        .on_release(Message::PointerReleased)
        .on_move(Message::PointerMoved)
        .on_exit(Message::PointerLeft)
        .into()
}
