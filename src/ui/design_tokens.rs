// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the gallery's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid plus the caption gap)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions (card elevation)

## Examples

```
use ued_gallery::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

// Create the banner color drawn over photos
let banner_bg = Color {
    a: opacity::BANNER,
    ..palette::BLACK
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0); // Medium light blue
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9); // Primary blue
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8); // Medium dark blue
    pub const PRIMARY_700: Color = Color::from_rgb(0.15, 0.4, 0.7); // Dark blue
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Title banner drawn over the photo.
    pub const BANNER: f32 = 0.45;

    /// Card shadow tint.
    pub const SHADOW: f32 = 0.25;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units

    /// Gap between a photo title and its caption.
    pub const CAPTION_GAP: f32 = 6.0;

    /// Vertical padding of the title banner.
    pub const BANNER_VERTICAL: f32 = 10.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Height of the Previous/Next buttons.
    pub const BUTTON_HEIGHT: f32 = 40.0;

    // Window
    pub const WINDOW_DEFAULT_WIDTH: f32 = 900.0;
    pub const WINDOW_DEFAULT_HEIGHT: f32 = 650.0;
    pub const WINDOW_MIN_WIDTH: f32 = 360.0;
    pub const WINDOW_MIN_HEIGHT: f32 = 480.0;

    /// Relative width of the photo pane in the two-pane layout (1.2 : 1).
    pub const PHOTO_PANE_PORTION: u16 = 6;
    /// Relative width of the info pane in the two-pane layout.
    pub const INFO_PANE_PORTION: u16 = 5;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale following Material Design 3 type scale principles.

    /// Large title - Photo title in the caption card
    pub const TITLE_LG: f32 = 22.0;

    /// Medium title - Screen title in the photo banner
    pub const TITLE_MD: f32 = 16.0;

    /// Standard body - Captions, button labels
    pub const BODY: f32 = 14.0;

    /// Caption - Position indicator
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Card outlines, outlined buttons
    pub const WIDTH_SM: f32 = 1.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const BUTTON: f32 = 20.0;
    pub const CARD: f32 = 16.0;
    pub const PHOTO: f32 = 18.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    const TINT: Color = Color {
        a: opacity::SHADOW,
        ..palette::BLACK
    };

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Caption card elevation.
    pub const SM: Shadow = Shadow {
        color: TINT,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    /// Photo card elevation.
    pub const MD: Shadow = Shadow {
        color: TINT,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::CAPTION_GAP < spacing::XS);

    // Opacity validation
    assert!(opacity::BANNER > 0.0 && opacity::BANNER < 1.0);

    // Sizing validation
    assert!(sizing::PHOTO_PANE_PORTION > sizing::INFO_PANE_PORTION);
    assert!(sizing::WINDOW_DEFAULT_WIDTH >= sizing::WINDOW_MIN_WIDTH);
    assert!(sizing::WINDOW_DEFAULT_HEIGHT >= sizing::WINDOW_MIN_HEIGHT);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // Radius validation
    assert!(radius::PHOTO >= radius::CARD);
};
