// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Elevated, bordered card holding the photo title and caption.
///
/// Colors are derived from the active Iced `Theme` so the card stays
/// readable in both light and dark modes.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::CARD.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Frame around the photo area. Clips nothing by itself; the rounded
/// corners come from the border radius.
pub fn photo_frame(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            radius: radius::PHOTO.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}
