// SPDX-License-Identifier: MPL-2.0
//! Gallery renderer.
//!
//! Materializes a [`RenderPlan`] as titled sections of thumbnail rows inside
//! one scrollable. Each thumbnail is a button whose message carries the
//! photo's [`GlobalIndex`], so a click maps straight back to the lightbox
//! sequence without any lookup table.

use crate::catalog::{GlobalIndex, PlannedItem, RenderPlan, Section};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{self, Handle};
use iced::widget::{button, Column, Container, Id, Row, Scrollable, Space, Text};
use iced::{alignment::Horizontal, ContentFit, Element, Length, Padding};
use std::path::{Path, PathBuf};

/// Id of the gallery scrollable, used by section links to scroll it.
pub const SCROLLABLE_ID: &str = "gallery-scrollable";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    ThumbnailClicked(GlobalIndex),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub plan: &'a RenderPlan,
    /// Directory relative photo sources are resolved against.
    pub asset_root: &'a Path,
    pub columns: u16,
    pub thumbnail_height: f32,
}

/// Resolves a catalog source to a file path.
///
/// Absolute sources are kept as they are; relative ones are joined to `root`.
#[must_use]
pub fn resolve_source(root: &Path, source: &str) -> PathBuf {
    let path = Path::new(source);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::XL)
        .padding(spacing::LG)
        .max_width(sizing::GALLERY_MAX_WIDTH)
        .width(Length::Fill);

    if ctx.plan.sections().is_empty() {
        content = content.push(Text::new(ctx.i18n.tr("gallery-empty")).size(typography::BODY));
    }

    for section in ctx.plan.sections() {
        content = content.push(view_section(&ctx, section));
    }

    let centered = Container::new(content)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    Scrollable::new(centered)
        .id(Id::new(SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_section<'a>(ctx: &ViewContext<'a>, section: &'a Section) -> Element<'a, Message> {
    let title = Text::new(section.title.as_str()).size(typography::TITLE_MD);

    let columns = usize::from(ctx.columns.max(1));
    let grid = section
        .items
        .chunks(columns)
        .fold(Column::new().spacing(spacing::XS), |grid, chunk| {
            grid.push(view_row(ctx, chunk, columns))
        });

    Column::new()
        .spacing(spacing::SM)
        .push(title)
        .push(grid)
        .into()
}

fn view_row<'a>(
    ctx: &ViewContext<'a>,
    chunk: &'a [PlannedItem],
    columns: usize,
) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XS).width(Length::Fill);

    for item in chunk {
        row = row.push(view_thumbnail(ctx, item));
    }

    // Pad the last row so thumbnails keep the same width.
    for _ in chunk.len()..columns {
        row = row.push(Space::new().width(Length::Fill));
    }

    row.into()
}

fn view_thumbnail<'a>(ctx: &ViewContext<'a>, item: &'a PlannedItem) -> Element<'a, Message> {
    let path = resolve_source(ctx.asset_root, &item.photo.source);

    let picture = image::Image::new(Handle::from_path(path))
        .content_fit(ContentFit::Cover)
        .width(Length::Fill)
        .height(Length::Fixed(ctx.thumbnail_height));

    button(picture)
        .on_press(Message::ThumbnailClicked(item.index))
        .padding(Padding::ZERO)
        .width(Length::FillPortion(1))
        .style(styles::button_thumbnail)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{self, Catalog, Category, Photo};

    #[test]
    fn relative_sources_are_joined_to_root() {
        let root = Path::new("/srv/portfolio");
        assert_eq!(
            resolve_source(root, "images/Paris/IMG_6108.jpg"),
            PathBuf::from("/srv/portfolio/images/Paris/IMG_6108.jpg")
        );
    }

    #[test]
    fn absolute_sources_are_kept() {
        let root = Path::new("/srv/portfolio");
        let absolute = std::env::temp_dir().join("photo.jpg");
        let source = absolute.to_string_lossy().to_string();
        assert_eq!(resolve_source(root, &source), absolute);
    }

    #[test]
    fn gallery_view_renders() {
        let i18n = I18n::default();
        let catalog = Catalog::builtin().expect("built-in catalog parses");
        let (plan, _) = catalog::build(&catalog);
        let ctx = ViewContext {
            i18n: &i18n,
            plan: &plan,
            asset_root: Path::new("."),
            columns: 3,
            thumbnail_height: 220.0,
        };
        let _element = view(ctx);
    }

    #[test]
    fn gallery_view_renders_empty_sections() {
        let i18n = I18n::default();
        let catalog = Catalog::new(vec![
            Category::new("empty", "Empty", Vec::new()),
            Category::new("one", "One", vec![Photo::new("a.jpg", "One")]),
        ]);
        let (plan, _) = catalog::build(&catalog);
        let ctx = ViewContext {
            i18n: &i18n,
            plan: &plan,
            asset_root: Path::new("."),
            columns: 4,
            thumbnail_height: 120.0,
        };
        let _element = view(ctx);
    }

    #[test]
    fn gallery_view_renders_empty_plan() {
        let i18n = I18n::default();
        let plan = RenderPlan::default();
        let ctx = ViewContext {
            i18n: &i18n,
            plan: &plan,
            asset_root: Path::new("."),
            columns: 3,
            thumbnail_height: 220.0,
        };
        let _element = view(ctx);
    }
}
