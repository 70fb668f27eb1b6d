// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom**: Lightbox zoom bounds and wheel step
//! - **Gestures**: Swipe threshold and double-click window
//! - **Slideshow**: Auto-advance interval
//! - **Transitions**: Open/close animation delays

use std::time::Duration;

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Zoom factor applied when an image is first displayed (1.0 = fit).
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Minimum allowed zoom factor.
pub const MIN_ZOOM: f32 = 1.0;

/// Maximum allowed zoom factor.
pub const MAX_ZOOM: f32 = 3.0;

/// Default zoom change per discrete wheel step.
pub const DEFAULT_WHEEL_ZOOM_STEP: f32 = 0.1;

/// Minimum allowed wheel zoom step.
pub const MIN_WHEEL_ZOOM_STEP: f32 = 0.05;

/// Maximum allowed wheel zoom step.
pub const MAX_WHEEL_ZOOM_STEP: f32 = 0.5;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Minimum pointer displacement (in logical pixels) that counts as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Minimum configurable swipe threshold.
pub const MIN_SWIPE_THRESHOLD_PX: f32 = 10.0;

/// Maximum configurable swipe threshold.
pub const MAX_SWIPE_THRESHOLD_PX: f32 = 200.0;

/// Two presses closer than this in time form a double click / double tap.
pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(350);

/// Two presses farther apart than this (in pixels) never form a double click.
pub const DOUBLE_CLICK_MAX_DISTANCE_PX: f32 = 10.0;

// ==========================================================================
// Slideshow Defaults
// ==========================================================================

/// Default slideshow auto-advance period in milliseconds.
pub const DEFAULT_SLIDESHOW_INTERVAL_MS: u64 = 2000;

/// Minimum slideshow period in milliseconds.
pub const MIN_SLIDESHOW_INTERVAL_MS: u64 = 500;

/// Maximum slideshow period in milliseconds.
pub const MAX_SLIDESHOW_INTERVAL_MS: u64 = 10_000;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Delay before an opening lightbox gets its "opened" marker.
pub const OPEN_TRANSITION_DELAY: Duration = Duration::from_millis(10);

/// Duration of the closing fade before the lightbox is fully closed.
pub const CLOSE_TRANSITION_DELAY: Duration = Duration::from_millis(300);
