// SPDX-License-Identifier: MPL-2.0
//! `ued_gallery` is a single-screen photo gallery built with the Iced GUI framework.
//!
//! It shows a fixed set of photos one at a time with cyclic previous/next
//! navigation, switches between a two-pane and a single-column layout based
//! on the window width, and accepts horizontal swipe gestures.

pub mod app;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod ui;
