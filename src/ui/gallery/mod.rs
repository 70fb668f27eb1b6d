// SPDX-License-Identifier: MPL-2.0
//! Gallery page: catalog items grouped by category and the customer reviews strip.

pub mod component;
pub mod view;

pub use component::{Effect, Message, State};
