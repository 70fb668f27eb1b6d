// SPDX-License-Identifier: MPL-2.0
//! Fullscreen lightbox for gallery images.
//!
//! - [`controller`] - headless state machine (open, navigate, zoom, slideshow, gestures, focus)
//! - [`surface`] - output contract and the retained regions the view renders
//! - [`component`] - iced message routing, timers and transitions
//! - [`view`] - widget tree and hit-testing geometry

pub mod component;
pub mod controller;
pub mod surface;
pub mod view;


pub use controller::{LightboxController, LightboxSettings, ModalKey, Reaction, Transition};
pub use surface::{ModalRegions, ModalSurface};
