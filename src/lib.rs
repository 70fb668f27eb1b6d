// SPDX-License-Identifier: MPL-2.0
//! `gallery_lightbox` is a gallery of handmade creations with a fullscreen
//! lightbox, built with the Iced GUI framework.
//!
//! The lightbox logic is a headless controller ([`ui::lightbox::LightboxController`])
//! rendering through the [`ui::lightbox::ModalSurface`] trait, so it can be
//! driven and tested without a window.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;

#[cfg(test)]
mod test_utils;
