// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the gallery and lightbox widgets.

pub mod button;
pub mod container;
