// SPDX-License-Identifier: MPL-2.0
//! Dismissable layer placed behind a popup (the lightbox photo, the menu).
//!
//! A backdrop reports a dismissal only for a completed tap or click that both
//! starts and ends on the backdrop itself:
//! - mouse: left button pressed and released over the backdrop;
//! - touch: finger pressed over the backdrop and lifted within
//!   [`SWIPE_THRESHOLD`](crate::lightbox::SWIPE_THRESHOLD) of where it went down.
//!
//! A finger that travels further is a swipe and belongs to whoever tracks
//! gestures, so the backdrop stays silent. Wheel and finger-drag events over
//! the backdrop are captured, which keeps whatever lies underneath from
//! scrolling.

use crate::lightbox::classify_swipe;
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{touch, Element, Event, Length, Rectangle, Size, Vector};

pub struct Backdrop<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    on_dismiss: Option<Message>,
}

impl<'a, Message, Theme, Renderer> Backdrop<'a, Message, Theme, Renderer> {
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            content: content.into(),
            on_dismiss: None,
        }
    }

    /// Message published when the backdrop is tapped or clicked.
    #[must_use]
    pub fn on_dismiss(self, message: Message) -> Self {
        self.on_dismiss_maybe(Some(message))
    }

    /// Like [`Self::on_dismiss`]; `None` leaves a backdrop that only blocks input.
    #[must_use]
    pub fn on_dismiss_maybe(mut self, message: Option<Message>) -> Self {
        self.on_dismiss = message;
        self
    }
}

/// Press that may still turn into a dismissal.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Press {
    Mouse,
    Finger { id: touch::Finger, x: f32 },
}

#[derive(Debug, Default)]
struct State {
    press: Option<Press>,
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Backdrop<'_, Message, Theme, Renderer>
where
    Message: Clone,
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
        if shell.is_event_captured() {
            return;
        }

        let state = tree.state.downcast_mut::<State>();
        let is_over = cursor.is_over(layout.bounds());

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) if is_over => {
                state.press = Some(Press::Mouse);
                shell.capture_event();
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if state.press == Some(Press::Mouse) {
                    state.press = None;
                    if is_over {
                        self.dismiss(shell);
                    }
                }
            }
            Event::Touch(touch::Event::FingerPressed { id, position }) if is_over => {
                state.press = Some(Press::Finger {
                    id: *id,
                    x: position.x,
                });
            }
            Event::Touch(touch::Event::FingerLifted { id, position }) => {
                if let Some(Press::Finger { id: pressed, x }) = state.press {
                    if pressed == *id {
                        state.press = None;
                        if classify_swipe(x, position.x).is_none() {
                            self.dismiss(shell);
                        }
                    }
                }
            }
            Event::Touch(touch::Event::FingerLost { id, .. }) => {
                if matches!(state.press, Some(Press::Finger { id: pressed, .. }) if pressed == *id)
                {
                    state.press = None;
                }
            }
            Event::Mouse(mouse::Event::WheelScrolled { .. })
            | Event::Touch(touch::Event::FingerMoved { .. })
                if is_over =>
            {
                shell.capture_event();
            }
            _ => {}
        }
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        let interaction = self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        );

        // Layers below a hovered backdrop must see a levitating cursor.
        if interaction == mouse::Interaction::None && cursor.is_over(layout.bounds()) {
            mouse::Interaction::Idle
        } else {
            interaction
        }
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<Message: Clone, Theme, Renderer> Backdrop<'_, Message, Theme, Renderer> {
    fn dismiss(&self, shell: &mut Shell<'_, Message>) {
        if let Some(message) = &self.on_dismiss {
            shell.publish(message.clone());
        }
        shell.capture_event();
    }
}

impl<'a, Message, Theme, Renderer> From<Backdrop<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(backdrop: Backdrop<'a, Message, Theme, Renderer>) -> Self {
        Self::new(backdrop)
    }
}

pub fn backdrop<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
) -> Backdrop<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    Backdrop::new(content)
}
