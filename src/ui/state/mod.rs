// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains the interaction state kept by UI components,
//! separated from the main App struct.

pub mod swipe;

// Re-export commonly used types for convenience
pub use swipe::SwipeDetector;
