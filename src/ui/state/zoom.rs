// SPDX-License-Identifier: MPL-2.0
//! Zoom state management
//!
//! This module handles lightbox zoom values:
//! - Zoom factor clamped to 1.0–3.0
//! - Wheel step configuration
//! - Pinch scaling relative to the zoom captured at pinch start

pub use crate::config::{
    DEFAULT_WHEEL_ZOOM_STEP, DEFAULT_ZOOM, MAX_WHEEL_ZOOM_STEP, MAX_ZOOM, MIN_WHEEL_ZOOM_STEP,
    MIN_ZOOM,
};

/// Zoom factor, guaranteed to be within valid range (1.0–3.0).
///
/// This type ensures that zoom values are always valid, eliminating
/// the need for manual clamping at usage sites.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ZoomLevel(f32);

impl ZoomLevel {
    /// Creates a new zoom level, clamping the value to the valid range.
    ///
    /// Non-finite input collapses to the default level.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        if factor.is_finite() {
            Self(factor.clamp(MIN_ZOOM, MAX_ZOOM))
        } else {
            Self::default()
        }
    }

    /// Returns the raw factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether the zoom is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_ZOOM
    }

    /// Returns whether the zoom is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_ZOOM
    }

    /// Applies `steps` wheel notches; positive steps zoom in.
    #[must_use]
    pub fn scrolled(self, steps: f32, step: ZoomStep) -> Self {
        Self::new(self.0 + steps * step.value())
    }

    /// Scales `base` by the ratio of the current to the initial pinch distance.
    ///
    /// A degenerate initial distance leaves the base unchanged.
    #[must_use]
    pub fn pinched(base: ZoomLevel, initial_distance: f32, current_distance: f32) -> Self {
        if initial_distance <= f32::EPSILON || !current_distance.is_finite() {
            return base;
        }
        Self::new(base.0 * (current_distance / initial_distance))
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self(DEFAULT_ZOOM)
    }
}

/// Zoom change per wheel step, guaranteed to be within valid range (0.05–0.5).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomStep(f32);

impl ZoomStep {
    /// Creates a new zoom step, clamping the value to the valid range.
    ///
    /// Non-finite input collapses to the default step.
    #[must_use]
    pub fn new(step: f32) -> Self {
        if step.is_finite() {
            Self(step.clamp(MIN_WHEEL_ZOOM_STEP, MAX_WHEEL_ZOOM_STEP))
        } else {
            Self::default()
        }
    }

    /// Returns the raw step value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for ZoomStep {
    fn default() -> Self {
        Self(DEFAULT_WHEEL_ZOOM_STEP)
    }
}

/// A requested zoom change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomChange {
    /// Discrete wheel notches; positive zooms in.
    Wheel(f32),
    /// Set an absolute factor (clamped).
    Absolute(f32),
    /// Double click / double tap.
    Reset,
}

impl ZoomChange {
    /// Resolves the change against the current level.
    #[must_use]
    pub fn apply(self, current: ZoomLevel, step: ZoomStep) -> ZoomLevel {
        match self {
            ZoomChange::Wheel(steps) => current.scrolled(steps, step),
            ZoomChange::Absolute(factor) => ZoomLevel::new(factor),
            ZoomChange::Reset => ZoomLevel::default(),
        }
    }
}

/// Formats a zoom factor as a percentage for display (e.g. `2.5` → `"250%"`).
#[must_use]
pub fn format_percent(zoom: ZoomLevel) -> String {
    format!("{:.0}%", zoom.value() * 100.0)
}
