// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! - [`gallery`] - Catalog grid, category filter and reviews strip
//! - [`lightbox`] - Fullscreen image viewer with zoom, swipe and slideshow
//! - [`state`] - Plain state types shared by the lightbox (zoom, gestures, focus)
//! - [`styles`] - Centralized widget styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode

pub mod design_tokens;
pub mod gallery;
pub mod lightbox;
pub mod state;
pub mod styles;
pub mod theming;
