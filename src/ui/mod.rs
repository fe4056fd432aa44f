// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Follows the Elm-style "state down, messages up" pattern: widgets render
//! from borrowed data and emit messages that the application turns into
//! navigation calls.
//!
//! - [`gallery`] - The gallery screen and its responsive layout
//! - [`state`] - Reusable interaction state (swipe tracking)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery;
pub mod state;
pub mod styles;
pub mod theming;
