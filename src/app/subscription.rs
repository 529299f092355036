// SPDX-License-Identifier: MPL-2.0
//! Window event subscription.
//!
//! Keyboard events only reach the lightbox when no widget captured them.
//! Finger press/lift events are forwarded whatever their status, since the
//! overlay buttons capture touches that may still end a swipe.

use super::Message;
use crate::lightbox::input;
use iced::{event, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        let wanted = match &event {
            event::Event::Keyboard(..) => matches!(status, event::Status::Ignored),
            event::Event::Touch(..) => true,
            _ => false,
        };

        if wanted && input::from_event(&event).is_some() {
            Some(Message::RawEvent(event))
        } else {
            None
        }
    })
}
