// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery, the
//! lightbox and the navigation menu.
//!
//! Startup resolves the config and the catalog, flattens the catalog once and
//! hands the resulting sequence to the lightbox. After that the render plan
//! and the sequence never change for the lifetime of the window.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::catalog::{self, Catalog, RenderPlan};
use crate::i18n::fluent::I18n;
use crate::lightbox::Lightbox;
use crate::ui::state::PageScroll;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    plan: RenderPlan,
    lightbox: Lightbox,
    page_scroll: PageScroll,
    /// Whether the navigation menu is open.
    menu_open: bool,
    theme_mode: ThemeMode,
    columns: u16,
    thumbnail_height: f32,
    /// Directory relative photo sources are resolved against.
    asset_root: PathBuf,
    /// i18n key of a startup warning, shown until dismissed.
    notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("photos", &self.plan.len())
            .field("lightbox_open", &self.lightbox.is_open())
            .field("menu_open", &self.menu_open)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 480;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants an Fn boot closure; the flags are consumed on first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_catalog(&Catalog::default(), PathBuf::from("."))
    }
}

/// Picks the catalog to show: CLI path, then configured path, then built-in.
///
/// Returns the catalog, the directory its relative sources live in, and the
/// i18n key of a warning when a requested file could not be loaded.
pub fn resolve_catalog(
    cli_path: Option<PathBuf>,
    configured_path: Option<PathBuf>,
) -> (Catalog, PathBuf, Option<String>) {
    let mut warning = None;

    if let Some(path) = cli_path.or(configured_path) {
        match catalog::load_from_path(&path) {
            Ok(catalog) => {
                let root = path
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| PathBuf::from("."));
                return (catalog, root, None);
            }
            Err(err) => {
                log::warn!("falling back to built-in catalog: {err}");
                warning = Some("catalog-load-error".to_string());
            }
        }
    }

    let catalog = Catalog::builtin().unwrap_or_else(|err| {
        log::warn!("built-in catalog is unusable: {err}");
        Catalog::default()
    });
    let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    (catalog, root, warning)
}

impl App {
    /// Builds a closed, unlocked page over `catalog`.
    fn with_catalog(catalog: &Catalog, asset_root: PathBuf) -> Self {
        let (plan, sequence) = catalog::build(catalog);
        Self {
            i18n: I18n::default(),
            plan,
            lightbox: Lightbox::new(sequence),
            page_scroll: PageScroll::default(),
            menu_open: false,
            theme_mode: ThemeMode::System,
            columns: config::DEFAULT_COLUMNS,
            thumbnail_height: config::DEFAULT_THUMBNAIL_HEIGHT,
            asset_root,
            notice: None,
        }
    }

    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);

        let (catalog, asset_root, catalog_warning) = resolve_catalog(
            flags.catalog_path.map(PathBuf::from),
            config.gallery.catalog.clone(),
        );
        log::info!(
            "showing {} photos in {} sections",
            catalog.photo_count(),
            catalog.categories().len()
        );

        let mut app = Self::with_catalog(&catalog, asset_root);
        app.i18n = i18n;
        app.theme_mode = config.general.theme_mode;
        app.columns = config.gallery.effective_columns();
        app.thumbnail_height = config.gallery.effective_thumbnail_height();
        app.notice = catalog_warning.or(config_warning);

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.lightbox.displayed() {
            Some(displayed) => format!("{} - {app_name}", displayed.photo.label),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            plan: &self.plan,
            lightbox: &mut self.lightbox,
            page_scroll: &mut self.page_scroll,
            menu_open: &mut self.menu_open,
            notice: &mut self.notice,
        };

        match message {
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Lightbox(overlay_message) => {
                update::handle_lightbox_message(&mut ctx, overlay_message)
            }
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::RawEvent(event) => update::handle_raw_event(&mut ctx, &event),
            Message::DismissNotice => update::handle_dismiss_notice(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            plan: &self.plan,
            lightbox: &self.lightbox,
            page_scroll: self.page_scroll,
            menu_open: self.menu_open,
            columns: self.columns,
            thumbnail_height: self.thumbnail_height,
            asset_root: &self.asset_root,
            notice: self.notice.as_deref(),
        })
    }
}
