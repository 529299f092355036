// SPDX-License-Identifier: MPL-2.0
//! Input kinds understood by the lightbox and their mapping from Iced events.
//!
//! Pointer clicks arrive as widget messages (grid items, controls, backdrop);
//! keyboard and touch input arrive as raw window events and are translated by
//! [`from_event`]. Either way they end up as one [`Input`] value handed to
//! [`Lightbox::handle`](super::Lightbox::handle).

use crate::catalog::GlobalIndex;
use iced::{keyboard, touch, Event};

/// Minimum horizontal travel, in logical pixels, for a touch to count as a swipe.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Every input the lightbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    /// A thumbnail in the gallery grid was clicked.
    GridItemClicked(GlobalIndex),
    CloseClicked,
    NextClicked,
    PreviousClicked,
    /// A click landed on the overlay background rather than the photo or a control.
    BackdropClicked,
    KeyPressed(LightboxKey),
    TouchStarted { x: f32 },
    TouchEnded { x: f32 },
}

/// Keys bound to lightbox transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    ArrowRight,
    ArrowLeft,
}

impl LightboxKey {
    /// Returns the binding for a key, if any.
    #[must_use]
    pub fn from_key(key: &keyboard::Key) -> Option<Self> {
        match key {
            keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Self::Escape),
            keyboard::Key::Named(keyboard::key::Named::ArrowRight) => Some(Self::ArrowRight),
            keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => Some(Self::ArrowLeft),
            _ => None,
        }
    }
}

/// Navigation requested by a horizontal swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved right-to-left.
    Next,
    /// Finger moved left-to-right.
    Previous,
}

/// Classifies a gesture from its horizontal start and end coordinates.
///
/// Vertical movement is not considered. Travel of exactly
/// [`SWIPE_THRESHOLD`] or less is not a swipe.
#[must_use]
pub fn classify_swipe(start_x: f32, end_x: f32) -> Option<SwipeDirection> {
    let delta = start_x - end_x;
    if delta.abs() > SWIPE_THRESHOLD {
        if delta > 0.0 {
            Some(SwipeDirection::Next)
        } else {
            Some(SwipeDirection::Previous)
        }
    } else {
        None
    }
}

/// Remembers where the current touch started.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Ends the gesture. A lift with no recorded start is not a swipe.
    pub fn finish(&mut self, end_x: f32) -> Option<SwipeDirection> {
        let start_x = self.start_x.take()?;
        classify_swipe(start_x, end_x)
    }

    pub fn reset(&mut self) {
        self.start_x = None;
    }
}

/// Translates a raw window event into a lightbox input.
///
/// Only bound keys and finger press/lift events produce an input.
#[must_use]
pub fn from_event(event: &Event) -> Option<Input> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            LightboxKey::from_key(key).map(Input::KeyPressed)
        }
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Input::TouchStarted { x: position.x })
        }
        Event::Touch(touch::Event::FingerLifted { position, .. }) => {
            Some(Input::TouchEnded { x: position.x })
        }
        _ => None,
    }
}
