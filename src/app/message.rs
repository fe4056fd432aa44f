// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::gallery;
use iced::keyboard;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Gallery(gallery::Message),
    /// A key press not captured by any widget.
    KeyPressed(keyboard::Key),
}

/// Runtime flags passed from the launcher into the application.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP47 format (e.g., "fr", "en-US").
    pub lang: Option<String>,
    /// Display label appended to the title; overrides `[gallery] group_name`.
    pub group: Option<String>,
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<String>,
}
