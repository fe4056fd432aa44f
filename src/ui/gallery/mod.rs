// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: photo area, caption card, and navigation controls arranged
//! according to the available width.
//!
//! The layout is recomputed from the width on every evaluation of the
//! `responsive` closure; no layout state survives a switch between modes.

pub mod caption;
pub mod component;
pub mod controls;
pub mod photo_area;

pub use component::{Effect, Message, State};

use crate::domain::ui::{select_layout, Breakpoint, LayoutMode};
use crate::gallery::PhotoRecord;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use iced::widget::image::Handle;
use iced::widget::{responsive, Column, Container, Row, Space};
use iced::{Element, Length, Size};

/// Environment shared by all gallery widgets.
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub breakpoint: Breakpoint,
    /// Screen title drawn in the photo banner.
    pub screen_title: &'a str,
}

/// Data for the photo currently on screen.
#[derive(Clone, Copy)]
pub struct ViewModel<'a> {
    pub photo: &'a PhotoRecord,
    pub image: Option<&'a Handle>,
    /// 1-based position of the photo.
    pub position: usize,
    pub total: usize,
}

pub fn view<'a>(ctx: ViewContext<'a>, model: ViewModel<'a>) -> Element<'a, Message> {
    responsive(move |available: Size| view_for_size(&ctx, &model, available)).into()
}

/// Renders the screen for a known viewport size.
pub fn view_for_size<'a>(
    ctx: &ViewContext<'a>,
    model: &ViewModel<'a>,
    available: Size,
) -> Element<'a, Message> {
    let content = match select_layout(available.width, ctx.breakpoint) {
        LayoutMode::TwoPane => two_pane(ctx, model),
        LayoutMode::SingleColumn => single_column(ctx, model),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .into()
}

fn two_pane<'a>(ctx: &ViewContext<'a>, model: &ViewModel<'a>) -> Element<'a, Message> {
    let photo = Container::new(photo_area::view(ctx, model))
        .width(Length::FillPortion(sizing::PHOTO_PANE_PORTION))
        .height(Length::Fill);

    // Spacer pins the controls to the bottom of the info pane
    let info = Column::new()
        .spacing(spacing::MD)
        .width(Length::FillPortion(sizing::INFO_PANE_PORTION))
        .height(Length::Fill)
        .push(caption::view(ctx, model))
        .push(Space::new().height(Length::Fill))
        .push(controls::view(ctx));

    Row::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(photo)
        .push(info)
        .into()
}

fn single_column<'a>(ctx: &ViewContext<'a>, model: &ViewModel<'a>) -> Element<'a, Message> {
    let photo = Container::new(photo_area::view(ctx, model))
        .width(Length::Fill)
        .height(Length::Fill);

    Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(photo)
        .push(caption::view(ctx, model))
        .push(controls::view(ctx))
        .into()
}
