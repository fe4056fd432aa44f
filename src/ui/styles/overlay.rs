// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for elements drawn on top of the photo.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
};
use iced::widget::container;
use iced::{Background, Color, Theme};

fn banner_background() -> Color {
    Color {
        a: opacity::BANNER,
        ..BLACK
    }
}

/// Semi-transparent strip carrying the screen title at the top of the photo.
pub fn title_banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(banner_background())),
        text_color: Some(WHITE),
        ..Default::default()
    }
}
