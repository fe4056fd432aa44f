// SPDX-License-Identifier: MPL-2.0
//! Swipe gesture state
//!
//! Turns horizontal pointer samples over the photo area into navigation
//! commands. A rightward step larger than the threshold means "previous",
//! a leftward one means "next". Only the displacement since the last sample
//! counts, never the total distance of the drag.

use crate::domain::ui::{SwipePolicy, SwipeThreshold};
use crate::gallery::navigator::Direction;

/// Tracks pointer samples for swipe detection.
#[derive(Debug, Clone, Default)]
pub struct SwipeDetector {
    threshold: SwipeThreshold,
    policy: SwipePolicy,

    /// Whether the pointer is currently pressed over the photo area
    is_pressed: bool,

    /// Last sampled horizontal position, used as the delta baseline
    last_x: Option<f32>,

    /// Set once a command fired during the current gesture
    fired: bool,
}

impl SwipeDetector {
    #[must_use]
    pub fn new(threshold: SwipeThreshold, policy: SwipePolicy) -> Self {
        Self {
            threshold,
            policy,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn threshold(&self) -> SwipeThreshold {
        self.threshold
    }

    #[must_use]
    pub fn policy(&self) -> SwipePolicy {
        self.policy
    }

    /// Whether a gesture is in progress.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.is_pressed
    }

    /// Starts a gesture at the last known pointer position.
    pub fn press(&mut self) {
        self.is_pressed = true;
        self.fired = false;
    }

    /// Ends the gesture. Never emits a command.
    pub fn release(&mut self) {
        self.is_pressed = false;
        self.fired = false;
    }

    /// Forgets the baseline, e.g. when the pointer leaves the photo area.
    pub fn cancel(&mut self) {
        self.release();
        self.last_x = None;
    }

    /// Feeds an absolute pointer position. The first sample only sets the
    /// baseline; later samples are converted to a delta.
    pub fn track(&mut self, x: f32) -> Option<Direction> {
        let previous = self.last_x.replace(x)?;
        self.drag_by(x - previous)
    }

    /// Feeds an incremental horizontal displacement.
    pub fn drag_by(&mut self, delta_x: f32) -> Option<Direction> {
        if !self.is_pressed {
            return None;
        }
        if self.fired && self.policy == SwipePolicy::OncePerGesture {
            return None;
        }

        let threshold = self.threshold.value();
        let direction = if delta_x > threshold {
            Direction::Previous
        } else if delta_x < -threshold {
            Direction::Next
        } else {
            return None;
        };

        self.fired = true;
        Some(direction)
    }
}
