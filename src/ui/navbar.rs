// SPDX-License-Identifier: MPL-2.0
//! Navigation bar with the site title and the menu toggle.
//!
//! The dropdown lists one link per gallery section. Picking a link closes the
//! menu and asks the application to scroll to that section.

use crate::catalog::Section;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub menu_open: bool,
    pub sections: &'a [Section],
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    ToggleMenu,
    /// Sent by the scrim covering the gallery while the menu is open.
    CloseMenu,
    JumpToSection(usize),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    JumpToSection(usize),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::JumpToSection(section) => {
            *menu_open = false;
            Event::JumpToSection(section)
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);
    content = content.push(build_top_bar(&ctx));

    if ctx.menu_open {
        content = content.push(build_dropdown(&ctx));
    }

    content.into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("site-title")).size(typography::TITLE_LG);

    let menu_button = button(Text::new(ctx.i18n.tr("navbar-menu")).size(typography::BODY))
        .on_press(Message::ToggleMenu)
        .padding([spacing::XS, spacing::SM])
        .style(if ctx.menu_open {
            button::primary
        } else {
            button::secondary
        });

    let row = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::XS, spacing::MD])
        .height(sizing::NAVBAR_HEIGHT)
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(menu_button);

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .style(styles::container::toolbar)
        .into()
}

fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let heading = Text::new(ctx.i18n.tr("menu-sections")).size(typography::CAPTION);

    let links = ctx
        .sections
        .iter()
        .enumerate()
        .fold(Column::new().spacing(spacing::XXS), |column, (idx, section)| {
            column.push(build_menu_item(section.title.clone(), Message::JumpToSection(idx)))
        });

    let menu_column = Column::new()
        .spacing(spacing::XS)
        .push(heading)
        .push(links);

    let dropdown = Container::new(menu_column)
        .padding(spacing::XS)
        .width(sizing::MENU_WIDTH)
        .style(styles::container::dropdown);

    Container::new(dropdown)
        .width(Length::Fill)
        .align_x(Horizontal::Right)
        .padding([0.0, spacing::MD])
        .into()
}

fn build_menu_item<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .style(styles::button::menu_item)
        .into()
}
