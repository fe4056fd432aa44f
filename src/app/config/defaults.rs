// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Gallery**: Display label shown in the title bar and photo banner
//! - **Layout**: Responsive breakpoint
//! - **Gesture**: Swipe detection

use crate::domain::ui::newtypes::{breakpoint_bounds, swipe_bounds};

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Display label used when neither the CLI nor the config provides one.
pub const DEFAULT_GROUP_NAME: &str = "Nhóm 13";

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Minimum viewport width (logical pixels) for the two-pane layout.
pub const DEFAULT_TWO_PANE_MIN_WIDTH: f32 = breakpoint_bounds::DEFAULT;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Horizontal displacement per pointer sample needed to navigate.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = swipe_bounds::DEFAULT;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_TWO_PANE_MIN_WIDTH >= breakpoint_bounds::MIN);
    assert!(DEFAULT_TWO_PANE_MIN_WIDTH <= breakpoint_bounds::MAX);
    assert!(DEFAULT_SWIPE_THRESHOLD >= swipe_bounds::MIN);
    assert!(DEFAULT_SWIPE_THRESHOLD <= swipe_bounds::MAX);
};
