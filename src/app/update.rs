// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Every lightbox transition is followed, in the same call, by applying its
//! [`Effect`](crate::lightbox::Effect) to the page scroll lock.

use super::Message;
use crate::catalog::RenderPlan;
use crate::lightbox::{input, Input, Lightbox};
use crate::ui::gallery;
use crate::ui::lightbox as overlay;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::state::{LockHolder, PageScroll};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub plan: &'a RenderPlan,
    pub lightbox: &'a mut Lightbox,
    pub page_scroll: &'a mut PageScroll,
    pub menu_open: &'a mut bool,
    pub notice: &'a mut Option<String>,
}

fn apply_input(ctx: &mut UpdateContext<'_>, input: Input) {
    let effect = ctx.lightbox.handle(input);
    ctx.page_scroll.apply(effect);
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    match message {
        gallery::Message::ThumbnailClicked(index) => {
            apply_input(ctx, Input::GridItemClicked(index));
        }
    }
    Task::none()
}

pub fn handle_lightbox_message(
    ctx: &mut UpdateContext<'_>,
    message: overlay::Message,
) -> Task<Message> {
    let input = match message {
        overlay::Message::Close => Input::CloseClicked,
        overlay::Message::Next => Input::NextClicked,
        overlay::Message::Previous => Input::PreviousClicked,
        overlay::Message::Backdrop => Input::BackdropClicked,
    };
    apply_input(ctx, input);
    Task::none()
}

pub fn handle_raw_event(ctx: &mut UpdateContext<'_>, event: &iced::Event) -> Task<Message> {
    if let Some(input) = input::from_event(event) {
        apply_input(ctx, input);
    }
    Task::none()
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    let event = navbar::update(message, ctx.menu_open);
    ctx.page_scroll.set(LockHolder::Menu, *ctx.menu_open);

    match event {
        NavbarEvent::None => Task::none(),
        NavbarEvent::JumpToSection(section) => match ctx.plan.section_offset(section) {
            Some(y) => operation::snap_to(
                Id::new(gallery::SCROLLABLE_ID),
                RelativeOffset { x: 0.0, y },
            ),
            None => {
                log::debug!("ignoring link to unknown section {section}");
                Task::none()
            }
        },
    }
}

pub fn handle_dismiss_notice(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.notice = None;
    Task::none()
}
