// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains the lightbox state logic, kept free of widget code so
//! every transition can be exercised without a window.

pub mod focus;
pub mod gesture;
pub mod modal;
pub mod slideshow;
pub mod zoom;

// Re-export commonly used types for convenience
pub use focus::{FocusTrap, ModalControl};
pub use gesture::{
    ClickTracker, GestureOutcome, GestureSample, GestureTracker, HitTarget, PinchSample,
    PointerInput, PointerSource, SwipeThreshold,
};
pub use modal::{Direction, ImageRef, ImageSet, ModalState, Phase, TransitionId};
pub use slideshow::{Slideshow, SlideshowAffordance, SlideshowInterval};
pub use zoom::{ZoomChange, ZoomLevel, ZoomStep};
