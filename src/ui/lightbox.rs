// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay renderer.
//!
//! Layers, bottom to top:
//! 1. a full-window [`backdrop`] that reports a click or tap as
//!    [`Message::Backdrop`] and lets swipes through to the gesture tracker;
//! 2. the photo with its label and position counter, made opaque so presses
//!    on them never reach the backdrop;
//! 3. previous/next arrows and the close button.
//!
//! The view is generic over the renderer so it can be laid out and driven
//! headless.

use crate::i18n::fluent::I18n;
use crate::lightbox::{Displayed, PositionIndicator};
use crate::ui::design_tokens::{opacity, palette::WHITE, radius, sizing, spacing, typography};
use crate::ui::gallery::resolve_source;
use crate::ui::styles;
use crate::ui::widgets::backdrop;
use iced::widget::image::{self, Handle};
use iced::widget::{button, opaque, tooltip, Column, Container, Space, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length, Theme,
};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Close,
    Next,
    Previous,
    Backdrop,
}

/// Renderers able to draw the overlay: text for labels, images for the photo.
pub trait OverlayRenderer:
    iced::advanced::text::Renderer + iced::advanced::image::Renderer<Handle = Handle>
{
}

impl<R> OverlayRenderer for R where
    R: iced::advanced::text::Renderer + iced::advanced::image::Renderer<Handle = Handle>
{
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub displayed: Displayed<'a>,
    pub asset_root: &'a Path,
}

/// Localized "current / total" text.
#[must_use]
pub fn indicator_text(i18n: &I18n, indicator: PositionIndicator) -> String {
    let total = indicator.total.to_string();
    match indicator.current {
        Some(current) => i18n.tr_with_args(
            "lightbox-position",
            &[("current", current.to_string().as_str()), ("total", total.as_str())],
        ),
        None => i18n.tr_with_args("lightbox-position-closed", &[("total", total.as_str())]),
    }
}

pub fn view<'a, Renderer>(ctx: ViewContext<'a>) -> Element<'a, Message, Theme, Renderer>
where
    Renderer: OverlayRenderer + 'a,
{
    let surface = Container::new(Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::overlay::backdrop);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop(surface).on_dismiss(Message::Backdrop))
        .push(view_photo(&ctx))
        .push(arrow_zone(
            &ctx,
            "◀",
            "lightbox-previous",
            Message::Previous,
            Horizontal::Left,
        ))
        .push(arrow_zone(
            &ctx,
            "▶",
            "lightbox-next",
            Message::Next,
            Horizontal::Right,
        ))
        .push(close_zone(&ctx))
        .into()
}

fn view_photo<'a, Renderer>(ctx: &ViewContext<'a>) -> Element<'a, Message, Theme, Renderer>
where
    Renderer: OverlayRenderer + 'a,
{
    let photo = ctx.displayed.photo;
    let path = resolve_source(ctx.asset_root, &photo.source);

    let picture = image::Image::new(Handle::from_path(path))
        .content_fit(ContentFit::Contain)
        .width(Length::Shrink)
        .height(Length::Fill);

    let label: Text<'a, Theme, Renderer> = Text::new(photo.label.as_str())
        .size(typography::BODY)
        .color(WHITE);

    let counter: Text<'a, Theme, Renderer> =
        Text::new(indicator_text(ctx.i18n, ctx.displayed.indicator))
            .size(typography::CAPTION)
            .color(WHITE);

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(picture)
        .push(label)
        .push(
            Container::new(counter)
                .padding([spacing::XXS, spacing::SM])
                .style(styles::overlay::indicator(radius::FULL)),
        );

    Container::new(opaque(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding([spacing::XXL, sizing::OVERLAY_BUTTON + spacing::XL])
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn overlay_button<'a, Renderer>(
    ctx: &ViewContext<'a>,
    glyph: &'a str,
    tooltip_key: &str,
    message: Message,
) -> Element<'a, Message, Theme, Renderer>
where
    Renderer: OverlayRenderer + 'a,
{
    let control = button(
        Container::new(Text::new(glyph).size(typography::TITLE_SM))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .on_press(message)
    .width(Length::Fixed(sizing::OVERLAY_BUTTON))
    .height(Length::Fixed(sizing::OVERLAY_BUTTON))
    .style(styles::button_overlay(
        WHITE,
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_HOVER,
    ));

    tooltip(
        control,
        Text::new(ctx.i18n.tr(tooltip_key)),
        tooltip::Position::Bottom,
    )
    .gap(4)
    .into()
}

fn arrow_zone<'a, Renderer>(
    ctx: &ViewContext<'a>,
    glyph: &'a str,
    tooltip_key: &str,
    message: Message,
    side: Horizontal,
) -> Element<'a, Message, Theme, Renderer>
where
    Renderer: OverlayRenderer + 'a,
{
    Container::new(overlay_button(ctx, glyph, tooltip_key, message))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(side)
        .align_y(Vertical::Center)
        .into()
}

fn close_zone<'a, Renderer>(ctx: &ViewContext<'a>) -> Element<'a, Message, Theme, Renderer>
where
    Renderer: OverlayRenderer + 'a,
{
    Container::new(overlay_button(ctx, "✕", "lightbox-close", Message::Close))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Top)
        .into()
}

/// Headless driver for the overlay, shared with the application tests.
#[cfg(test)]
pub(crate) mod headless {
    use super::{view, Message, ViewContext};
    use iced::advanced::clipboard;
    use iced::{mouse, Event, Point, Size, Theme};
    use iced_runtime::user_interface::{Cache, UserInterface};

    /// Window the overlay is laid out in.
    pub(crate) const WINDOW: Size = Size {
        width: 1100.0,
        height: 800.0,
    };

    /// Away from the photo column and the controls.
    pub(crate) const BACKDROP: Point = Point { x: 300.0, y: 300.0 };
    /// Below the counter, still backdrop.
    pub(crate) const BACKDROP_BOTTOM: Point = Point { x: 550.0, y: 785.0 };
    /// Middle of the photo.
    pub(crate) const PHOTO: Point = Point { x: 550.0, y: 300.0 };
    /// Between the photo and the counter, inside the opaque column.
    pub(crate) const CAPTION: Point = Point { x: 550.0, y: 730.0 };
    pub(crate) const PREVIOUS: Point = Point { x: 40.0, y: 400.0 };
    pub(crate) const NEXT: Point = Point { x: 1060.0, y: 400.0 };
    pub(crate) const CLOSE: Point = Point { x: 1060.0, y: 40.0 };

    /// Feeds each event with the cursor at its paired point and collects the
    /// published messages.
    pub(crate) fn interact(ctx: ViewContext<'_>, events: &[(Event, Point)]) -> Vec<Message> {
        let mut renderer = ();
        let mut ui =
            UserInterface::<Message, Theme, ()>::build(view::<()>(ctx), WINDOW, Cache::new(), &mut renderer);
        let mut messages = Vec::new();
        for (event, at) in events {
            let _ = ui.update(
                std::slice::from_ref(event),
                mouse::Cursor::Available(*at),
                &mut renderer,
                &mut clipboard::Null,
                &mut messages,
            );
        }
        messages
    }

    pub(crate) fn click(at: Point) -> Vec<(Event, Point)> {
        vec![
            (Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)), at),
            (Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)), at),
        ]
    }

    /// Finger down at `from`, lifted at `to`.
    pub(crate) fn touch(from: Point, to: Point) -> Vec<(Event, Point)> {
        use iced::touch;

        let id = touch::Finger(1);
        vec![
            (
                Event::Touch(touch::Event::FingerPressed { id, position: from }),
                from,
            ),
            (
                Event::Touch(touch::Event::FingerLifted { id, position: to }),
                to,
            ),
        ]
    }
}
