// SPDX-License-Identifier: MPL-2.0
//! Gallery screen component: turns button presses and pointer samples into
//! navigation effects for the application to apply.

use crate::domain::ui::{SwipePolicy, SwipeThreshold};
use crate::gallery::navigator::Direction;
use crate::ui::state::SwipeDetector;
use iced::Point;

/// Messages emitted by the gallery view.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    PreviousPressed,
    NextPressed,
    /// Pointer pressed over the photo area.
    PointerPressed,
    /// Pointer moved over the photo area (position relative to the area).
    PointerMoved(Point),
    PointerReleased,
    PointerLeft,
}

/// Effects produced by gallery messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Navigate(Direction),
}

/// Interaction state of the gallery screen. The photo index itself lives in
/// the view model, not here.
#[derive(Debug, Clone, Default)]
pub struct State {
    swipe: SwipeDetector,
}

impl State {
    #[must_use]
    pub fn new(threshold: SwipeThreshold, policy: SwipePolicy) -> Self {
        Self {
            swipe: SwipeDetector::new(threshold, policy),
        }
    }

    #[must_use]
    pub fn swipe(&self) -> &SwipeDetector {
        &self.swipe
    }

    /// Handle a gallery message.
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::PreviousPressed => Effect::Navigate(Direction::Previous),
            Message::NextPressed => Effect::Navigate(Direction::Next),
            Message::PointerPressed => {
                self.swipe.press();
                Effect::None
            }
            Message::PointerMoved(position) => match self.swipe.track(position.x) {
                Some(direction) => Effect::Navigate(direction),
                None => Effect::None,
            },
            Message::PointerReleased => {
                self.swipe.release();
                Effect::None
            }
            Message::PointerLeft => {
                self.swipe.cancel();
                Effect::None
            }
        }
    }
}
