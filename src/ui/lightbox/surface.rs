// SPDX-License-Identifier: MPL-2.0
//! Output side of the lightbox controller.
//!
//! The controller never reaches into widgets. It pushes region updates through
//! a [`ModalSurface`], and the iced view renders whatever [`ModalRegions`]
//! currently holds.

use crate::ui::state::{ImageRef, ModalControl, Phase, SlideshowAffordance, ZoomLevel};

/// Regions of the lightbox the controller can update.
pub trait ModalSurface {
    /// Shows or hides the whole lightbox.
    fn set_visible(&mut self, visible: bool);

    /// Sets the animation marker for the current lifecycle phase.
    fn set_phase(&mut self, phase: Phase);

    /// Displays an image, or clears the image region with `None`.
    fn show_image(&mut self, image: Option<&ImageRef>);

    /// Shows a price label, or hides the price region with `None`.
    fn show_price(&mut self, label: Option<&str>);

    /// Rebuilds the preview dots. A `count` of zero hides the region.
    fn show_previews(&mut self, count: usize, active: Option<usize>);

    /// Moves the active marker among existing preview dots.
    fn set_active_preview(&mut self, index: usize);

    /// Shows or hides the previous/next arrows and the play/pause control.
    fn show_navigation(&mut self, visible: bool);

    fn set_slideshow_affordance(&mut self, affordance: SlideshowAffordance);

    fn apply_zoom(&mut self, zoom: ZoomLevel);

    /// Moves keyboard focus to a control, or clears it.
    fn focus(&mut self, control: Option<ModalControl>);
}

/// Retained region state rendered by the lightbox view.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalRegions {
    pub visible: bool,
    pub phase: Phase,
    pub image: Option<ImageRef>,
    pub price: Option<String>,
    pub preview_count: usize,
    pub active_preview: Option<usize>,
    pub navigation: bool,
    pub affordance: SlideshowAffordance,
    pub zoom: ZoomLevel,
    pub focused: Option<ModalControl>,
}

impl Default for ModalRegions {
    fn default() -> Self {
        Self {
            visible: false,
            phase: Phase::Closed,
            image: None,
            price: None,
            preview_count: 0,
            active_preview: None,
            navigation: false,
            affordance: SlideshowAffordance::Play,
            zoom: ZoomLevel::default(),
            focused: None,
        }
    }
}

impl ModalRegions {
    /// Whether anything should be drawn. A closing lightbox stays on screen
    /// until its fade-out completes.
    #[must_use]
    pub fn is_on_screen(&self) -> bool {
        self.visible || self.phase == Phase::Closing
    }

    /// Whether the preview dots are shown.
    #[must_use]
    pub fn has_previews(&self) -> bool {
        self.preview_count > 0
    }
}

impl ModalSurface for ModalRegions {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    fn show_image(&mut self, image: Option<&ImageRef>) {
        self.image = image.cloned();
    }

    fn show_price(&mut self, label: Option<&str>) {
        self.price = label.map(str::to_owned);
    }

    fn show_previews(&mut self, count: usize, active: Option<usize>) {
        self.preview_count = count;
        self.active_preview = active.filter(|index| *index < count);
    }

    fn set_active_preview(&mut self, index: usize) {
        if index < self.preview_count {
            self.active_preview = Some(index);
        }
    }

    fn show_navigation(&mut self, visible: bool) {
        self.navigation = visible;
    }

    fn set_slideshow_affordance(&mut self, affordance: SlideshowAffordance) {
        self.affordance = affordance;
    }

    fn apply_zoom(&mut self, zoom: ZoomLevel) {
        self.zoom = zoom;
    }

    fn focus(&mut self, control: Option<ModalControl>) {
        self.focused = control;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previews_ignore_out_of_range_active() {
        let mut regions = ModalRegions::default();
        regions.show_previews(3, Some(5));
        assert_eq!(regions.active_preview, None);
        regions.set_active_preview(2);
        assert_eq!(regions.active_preview, Some(2));
        regions.set_active_preview(3);
        assert_eq!(regions.active_preview, Some(2));
    }

    #[test]
    fn closing_lightbox_stays_on_screen() {
        let regions = ModalRegions {
            phase: Phase::Closing,
            ..ModalRegions::default()
        };
        assert!(regions.is_on_screen());
        assert!(!ModalRegions::default().is_on_screen());
    }
}
