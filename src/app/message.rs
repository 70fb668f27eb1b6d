// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{gallery, lightbox};
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Lightbox(lightbox::component::Message),
    /// Hides the config load warning banner.
    DismissNotice,
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override (e.g. `fr`).
    pub lang: Option<String>,
    /// Optional config directory override (already registered with
    /// [`super::paths::init_cli_overrides`] when launched from `main`).
    pub config_dir: Option<PathBuf>,
    /// Catalog file; defaults to `catalog.toml` in the config directory.
    pub catalog_path: Option<PathBuf>,
}
