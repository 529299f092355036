// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is the navbar over the gallery. While the page scroll is locked a
//! backdrop covers the gallery, and while the lightbox is open its overlay is
//! stacked over the whole page.

use super::Message;
use crate::catalog::RenderPlan;
use crate::i18n::fluent::I18n;
use crate::lightbox::Lightbox;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::gallery::{self, ViewContext as GalleryViewContext};
use crate::ui::lightbox::{self as overlay, ViewContext as OverlayViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::state::PageScroll;
use crate::ui::styles;
use crate::ui::widgets::backdrop;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Space, Stack, Text},
    Element, Length, Theme,
};
use std::path::Path;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub plan: &'a RenderPlan,
    pub lightbox: &'a Lightbox,
    pub page_scroll: PageScroll,
    pub menu_open: bool,
    pub columns: u16,
    pub thumbnail_height: f32,
    pub asset_root: &'a Path,
    pub notice: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        menu_open: ctx.menu_open,
        sections: ctx.plan.sections(),
    })
    .map(Message::Navbar);

    let gallery_view = gallery::view(GalleryViewContext {
        i18n: ctx.i18n,
        plan: ctx.plan,
        asset_root: ctx.asset_root,
        columns: ctx.columns,
        thumbnail_height: ctx.thumbnail_height,
    })
    .map(Message::Gallery);

    let body: Element<'_, Message> = if ctx.page_scroll.is_locked() {
        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(gallery_view)
            .push(scrim::<iced::Renderer>(ctx.menu_open))
            .into()
    } else {
        gallery_view
    };

    let mut page = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(navbar_view);

    if let Some(key) = ctx.notice {
        page = page.push(view_notice(ctx.i18n, key));
    }

    page = page.push(body);

    let Some(displayed) = ctx.lightbox.displayed() else {
        return page.into();
    };

    let overlay_view: Element<'_, Message> = overlay::view(OverlayViewContext {
        i18n: ctx.i18n,
        displayed,
        asset_root: ctx.asset_root,
    })
    .map(Message::Lightbox);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page)
        .push(overlay_view)
        .into()
}

fn view_notice<'a>(i18n: &I18n, key: &str) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(i18n.tr(key)).size(typography::BODY))
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new("✕").size(typography::BODY))
                .on_press(Message::DismissNotice)
                .padding([spacing::XXS, spacing::XS])
                .style(button::text),
        );

    Container::new(row)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .style(styles::container::notice)
        .into()
}

/// Transparent layer over the locked gallery. It swallows scrolling, and a tap
/// on it closes the menu when the menu is what holds the lock.
pub(super) fn scrim<'a, Renderer>(menu_open: bool) -> Element<'a, Message, Theme, Renderer>
where
    Renderer: iced::advanced::Renderer + 'a,
{
    backdrop(Space::new().width(Length::Fill).height(Length::Fill))
        .on_dismiss_maybe(menu_open.then_some(Message::Navbar(navbar::Message::CloseMenu)))
        .into()
}
