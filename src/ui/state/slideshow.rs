// SPDX-License-Identifier: MPL-2.0
//! Slideshow timer state.
//!
//! The timer itself is an iced subscription that only exists while
//! [`Slideshow::is_active`] is true, so stopping is synchronous: a tick that
//! was already queued is dropped by the controller.

use crate::config::{
    DEFAULT_SLIDESHOW_INTERVAL_MS, MAX_SLIDESHOW_INTERVAL_MS, MIN_SLIDESHOW_INTERVAL_MS,
};
use std::time::Duration;

/// Auto-advance period, guaranteed to be within 500–10000 ms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlideshowInterval(u64);

impl SlideshowInterval {
    /// Creates a new interval, clamping the value to the valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(MIN_SLIDESHOW_INTERVAL_MS, MAX_SLIDESHOW_INTERVAL_MS))
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for SlideshowInterval {
    fn default() -> Self {
        Self(DEFAULT_SLIDESHOW_INTERVAL_MS)
    }
}

/// What the play/pause control currently offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideshowAffordance {
    /// Slideshow stopped; the control starts it.
    Play,
    /// Slideshow running; the control pauses it.
    Pause,
}

impl SlideshowAffordance {
    /// i18n key of the control's accessible label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            SlideshowAffordance::Play => "lightbox-play-slideshow",
            SlideshowAffordance::Pause => "lightbox-pause-slideshow",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Slideshow {
    active: bool,
    interval: SlideshowInterval,
}

impl Slideshow {
    #[must_use]
    pub fn new(interval: SlideshowInterval) -> Self {
        Self {
            active: false,
            interval,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn interval(&self) -> SlideshowInterval {
        self.interval
    }

    pub fn set_interval(&mut self, interval: SlideshowInterval) {
        self.interval = interval;
    }

    /// Arms the timer. Returns `false` if it was already running.
    pub fn start(&mut self) -> bool {
        !std::mem::replace(&mut self.active, true)
    }

    /// Disarms the timer. Returns `false` if it was not running.
    pub fn stop(&mut self) -> bool {
        std::mem::replace(&mut self.active, false)
    }

    #[must_use]
    pub fn affordance(&self) -> SlideshowAffordance {
        if self.active {
            SlideshowAffordance::Pause
        } else {
            SlideshowAffordance::Play
        }
    }
}
