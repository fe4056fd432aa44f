// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Breakpoint Bounds
// =============================================================================

/// Two-pane breakpoint bounds, in logical pixels.
pub mod breakpoint_bounds {
    /// Smallest accepted breakpoint.
    pub const MIN: f32 = 320.0;
    /// Largest accepted breakpoint.
    pub const MAX: f32 = 4096.0;
    /// Default breakpoint.
    pub const DEFAULT: f32 = 700.0;
}

// =============================================================================
// Breakpoint
// =============================================================================

/// Minimum viewport width at which the two-pane layout is used.
///
/// This type ensures the value is always within 320–4096 logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint(f32);

impl Breakpoint {
    /// Creates a new breakpoint, clamping the value to the valid range.
    /// Non-finite values fall back to the default.
    #[must_use]
    pub fn new(width: f32) -> Self {
        if !width.is_finite() {
            return Self::default();
        }
        Self(width.clamp(breakpoint_bounds::MIN, breakpoint_bounds::MAX))
    }

    /// Returns the raw width value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self(breakpoint_bounds::DEFAULT)
    }
}

// =============================================================================
// Swipe Threshold Bounds
// =============================================================================

/// Swipe threshold bounds, in logical pixels per pointer sample.
pub mod swipe_bounds {
    /// Minimum threshold.
    pub const MIN: f32 = 1.0;
    /// Maximum threshold.
    pub const MAX: f32 = 200.0;
    /// Default threshold.
    pub const DEFAULT: f32 = 18.0;
}

// =============================================================================
// SwipeThreshold
// =============================================================================

/// Horizontal displacement a single drag sample must exceed to navigate.
///
/// Always strictly positive (1–200).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a new threshold, clamping the value to the valid range.
    /// Non-finite values fall back to the default.
    #[must_use]
    pub fn new(pixels: f32) -> Self {
        if !pixels.is_finite() {
            return Self::default();
        }
        Self(pixels.clamp(swipe_bounds::MIN, swipe_bounds::MAX))
    }

    /// Returns the raw threshold value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(swipe_bounds::DEFAULT)
    }
}

// =============================================================================
// SwipePolicy
// =============================================================================

/// How many navigation commands a single continuous drag may emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwipePolicy {
    /// At most one command per press/release cycle.
    #[default]
    OncePerGesture,
    /// One command for every sample whose delta exceeds the threshold.
    PerSample,
}
