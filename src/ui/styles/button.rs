// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled button for the primary action ("Next").
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        button::Status::Pressed => palette::PRIMARY_700,
        button::Status::Active => palette::PRIMARY_500,
        button::Status::Disabled => palette::GRAY_200,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::PRIMARY_600,
            width: border::WIDTH_SM,
            radius: radius::BUTTON.into(),
        },
        shadow: if status == button::Status::Hovered {
            shadow::SM
        } else {
            shadow::NONE
        },
        snap: true,
    }
}

/// Outlined button for the secondary action ("Previous").
/// Transparent fill, brand-colored label and border.
pub fn outlined(theme: &Theme, status: button::Status) -> button::Style {
    let is_dark = theme.extended_palette().is_dark;
    let accent = if is_dark {
        palette::PRIMARY_400
    } else {
        palette::PRIMARY_600
    };

    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color { a: 0.08, ..accent })),
        button::Status::Pressed => Some(Background::Color(Color { a: 0.16, ..accent })),
        _ => None,
    };
    let text_color = if status == button::Status::Disabled {
        palette::GRAY_400
    } else {
        accent
    };

    button::Style {
        background,
        text_color,
        border: Border {
            color: if status == button::Status::Disabled {
                palette::GRAY_400
            } else {
                accent
            },
            width: border::WIDTH_SM,
            radius: radius::BUTTON.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
