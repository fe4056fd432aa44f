// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core rules with ZERO external dependencies.
//!
//! This module contains pure value objects and decisions that do not depend
//! on the GUI toolkit, so they can be tested in isolation.
//!
//! # Modules
//!
//! - [`ui`]: UI value objects ([`Breakpoint`](ui::newtypes::Breakpoint),
//!   [`SwipeThreshold`](ui::newtypes::SwipeThreshold)) and the responsive
//!   layout decision ([`select_layout`](ui::layout::select_layout))

pub mod ui;
