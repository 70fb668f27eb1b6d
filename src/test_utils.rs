// SPDX-License-Identifier: MPL-2.0
//! Test helpers shared by unit tests.

use crate::ui::lightbox::surface::{ModalRegions, ModalSurface};
use crate::ui::state::{ImageRef, ModalControl, Phase, SlideshowAffordance, ZoomLevel};

/// Default epsilon for f32 comparisons.
pub const F32_EPSILON: f32 = 1e-6;

/// Asserts that two `f32` values are within [`F32_EPSILON`] of each other.
#[track_caller]
pub fn assert_f32_eq(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() <= F32_EPSILON,
        "expected {expected}, got {actual}"
    );
}

/// One call made on a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Visible(bool),
    Phase(Phase),
    Image(Option<ImageRef>),
    Price(Option<String>),
    Previews { count: usize, active: Option<usize> },
    ActivePreview(usize),
    Navigation(bool),
    Affordance(SlideshowAffordance),
    Zoom(ZoomLevel),
    Focus(Option<ModalControl>),
}

/// Surface that keeps the retained regions and a log of every update.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub regions: ModalRegions,
    pub calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl ModalSurface for RecordingSurface {
    fn set_visible(&mut self, visible: bool) {
        self.calls.push(SurfaceCall::Visible(visible));
        self.regions.set_visible(visible);
    }

    fn set_phase(&mut self, phase: Phase) {
        self.calls.push(SurfaceCall::Phase(phase));
        self.regions.set_phase(phase);
    }

    fn show_image(&mut self, image: Option<&ImageRef>) {
        self.calls.push(SurfaceCall::Image(image.cloned()));
        self.regions.show_image(image);
    }

    fn show_price(&mut self, label: Option<&str>) {
        self.calls.push(SurfaceCall::Price(label.map(str::to_owned)));
        self.regions.show_price(label);
    }

    fn show_previews(&mut self, count: usize, active: Option<usize>) {
        self.calls.push(SurfaceCall::Previews { count, active });
        self.regions.show_previews(count, active);
    }

    fn set_active_preview(&mut self, index: usize) {
        self.calls.push(SurfaceCall::ActivePreview(index));
        self.regions.set_active_preview(index);
    }

    fn show_navigation(&mut self, visible: bool) {
        self.calls.push(SurfaceCall::Navigation(visible));
        self.regions.show_navigation(visible);
    }

    fn set_slideshow_affordance(&mut self, affordance: SlideshowAffordance) {
        self.calls.push(SurfaceCall::Affordance(affordance));
        self.regions.set_slideshow_affordance(affordance);
    }

    fn apply_zoom(&mut self, zoom: ZoomLevel) {
        self.calls.push(SurfaceCall::Zoom(zoom));
        self.regions.apply_zoom(zoom);
    }

    fn focus(&mut self, control: Option<ModalControl>) {
        self.calls.push(SurfaceCall::Focus(control));
        self.regions.focus(control);
    }
}
