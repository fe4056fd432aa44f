// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Only keyboard presses that no widget captured are routed; pointer input
//! over the photo is handled by the photo area's `mouse_area`.

use super::Message;
use iced::{event, keyboard, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match (event, status) {
        (
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }),
            event::Status::Ignored,
        ) => Some(Message::KeyPressed(key)),
        _ => None,
    })
}
