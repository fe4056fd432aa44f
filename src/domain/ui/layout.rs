// SPDX-License-Identifier: MPL-2.0
//! Responsive layout decision for the gallery screen.

use super::newtypes::Breakpoint;

/// Arrangement of the gallery screen for a given viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Photo pane on the left, caption and controls on the right.
    TwoPane,
    /// Photo, caption, and controls stacked vertically.
    SingleColumn,
}

/// Picks the layout for `width`. Widths equal to the breakpoint use
/// [`LayoutMode::TwoPane`].
#[must_use]
pub fn select_layout(width: f32, breakpoint: Breakpoint) -> LayoutMode {
    if width >= breakpoint.value() {
        LayoutMode::TwoPane
    } else {
        LayoutMode::SingleColumn
    }
}
