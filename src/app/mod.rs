// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery and the lightbox.
//!
//! The `App` struct wires together the catalog, localization and settings,
//! and turns gallery effects into lightbox openings or persisted theme
//! changes. Window policy (default and minimum size) lives here too.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::catalog::{Catalog, CATALOG_FILE};
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::gallery::{self, Effect};
use crate::ui::lightbox::{self, LightboxSettings};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    /// Directory `settings.toml` is written to; `None` uses the default lookup.
    config_dir: Option<PathBuf>,
    theme_mode: ThemeMode,
    gallery: gallery::State,
    lightbox: lightbox::component::State,
    /// i18n key of a warning shown above the gallery until dismissed.
    notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("catalog_items", &self.gallery.catalog().items.len())
            .field("lightbox_visible", &self.lightbox.is_visible())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Builds the main window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: default_window_size(),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

fn default_window_size() -> Size {
    Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32)
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced calls boot through `Fn`; the flags are consumed on the first call.
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

impl App {
    /// Loads settings and the catalog described by `flags`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load_with_override(flags.config_dir.clone());
        let i18n = I18n::new(flags.lang.clone(), &config);

        let catalog_path = flags.catalog_path.clone().or_else(|| {
            paths::get_app_config_dir_with_override(flags.config_dir.clone())
                .map(|dir| dir.join(CATALOG_FILE))
        });

        let gallery = match catalog_path {
            Some(path) => match Catalog::load(&path) {
                Ok(catalog) => {
                    tracing::debug!(path = %path.display(), "catalog ready");
                    gallery::State::new(catalog)
                }
                Err(err) => {
                    tracing::error!(path = %path.display(), error = %err, "failed to load catalog");
                    gallery::State::failed(err.i18n_key())
                }
            },
            None => {
                tracing::error!("no config directory available to look up the catalog");
                gallery::State::failed("error-catalog-missing")
            }
        };

        let app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            lightbox: lightbox::component::State::new(
                LightboxSettings::from(&config),
                default_window_size(),
            ),
            gallery,
            config,
            config_dir: flags.config_dir,
            notice: config_warning,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.lightbox.is_visible());
        let slideshow_sub = self.lightbox.subscription().map(Message::Lightbox);

        Subscription::batch([event_sub, slideshow_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(gallery_message) => {
                match self.gallery.handle_message(gallery_message, &self.i18n) {
                    Effect::None => Task::none(),
                    Effect::OpenLightbox {
                        images,
                        start_index,
                        price_label,
                    } => self
                        .lightbox
                        .open(images, start_index, price_label)
                        .map(Message::Lightbox),
                    Effect::ToggleTheme => {
                        self.toggle_theme();
                        Task::none()
                    }
                }
            }
            Message::Lightbox(lightbox_message) => self
                .lightbox
                .handle_message(lightbox_message)
                .map(Message::Lightbox),
            Message::DismissNotice => {
                self.notice = None;
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            theme_mode: self.theme_mode,
            gallery: &self.gallery,
            lightbox: &self.lightbox,
            notice: self.notice.as_deref(),
        })
    }

    /// Flips light/dark and persists the choice.
    fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggled();
        self.config.general.theme_mode = self.theme_mode;
        tracing::debug!(theme = ?self.theme_mode, "theme toggled");

        if let Err(err) = config::save_with_override(&self.config, self.config_dir.clone()) {
            tracing::error!(error = %err, "failed to save settings");
        }
    }
}
