// SPDX-License-Identifier: MPL-2.0
//! Headless lightbox controller.
//!
//! Every operation runs to completion and is a no-op when it does not apply
//! to the current state. Operations that start or end the lightbox return a
//! [`Transition`] that the caller must complete after its delay with
//! [`LightboxController::finish_transition`].

use super::surface::ModalSurface;
use crate::config::{Config, CLOSE_TRANSITION_DELAY, OPEN_TRANSITION_DELAY};
use crate::ui::state::{
    ClickTracker, Direction, GestureOutcome, GestureTracker, HitTarget, ImageRef, ImageSet,
    ModalControl, ModalState, PointerInput, SlideshowInterval, SwipeThreshold, TransitionId,
    ZoomChange, ZoomStep,
};
use std::time::{Duration, Instant};

/// Tuning values read from the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LightboxSettings {
    pub swipe_threshold: SwipeThreshold,
    pub wheel_step: ZoomStep,
    pub slideshow_interval: SlideshowInterval,
}

impl From<&Config> for LightboxSettings {
    fn from(config: &Config) -> Self {
        Self {
            swipe_threshold: config.swipe_threshold(),
            wheel_step: config.wheel_zoom_step(),
            slideshow_interval: config.slideshow_interval(),
        }
    }
}

/// A phase change to complete once `delay` has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub id: TransitionId,
    pub delay: Duration,
}

/// Keys the lightbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKey {
    ArrowLeft,
    ArrowRight,
    Escape,
    Tab,
    /// Enter or Space.
    Activate,
}

/// How an input was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    /// Not for the lightbox; let it through.
    Ignored,
    /// Handled; default behavior should be suppressed.
    Consumed,
    /// Handled, and a phase change must be scheduled.
    Transition(Transition),
}

impl From<Option<Transition>> for Reaction {
    fn from(transition: Option<Transition>) -> Self {
        transition.map_or(Reaction::Consumed, Reaction::Transition)
    }
}

pub struct LightboxController<S> {
    state: ModalState,
    surface: S,
    settings: LightboxSettings,
    gestures: GestureTracker,
    clicks: ClickTracker,
}

impl<S: ModalSurface> LightboxController<S> {
    pub fn new(surface: S, settings: LightboxSettings) -> Self {
        let mut controller = Self {
            state: ModalState::new(settings.slideshow_interval),
            surface,
            settings,
            gestures: GestureTracker::new(settings.swipe_threshold),
            clicks: ClickTracker::default(),
        };
        controller.render_all();
        controller
    }

    #[must_use]
    pub fn state(&self) -> &ModalState {
        &self.state
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn settings(&self) -> LightboxSettings {
        self.settings
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    /// Opens the lightbox on `images`, starting at `start_index`.
    ///
    /// An empty list leaves the lightbox closed. An out-of-range start index is
    /// clamped to the last image. Opening while already open starts over with
    /// the new set.
    pub fn open(
        &mut self,
        images: Vec<ImageRef>,
        start_index: usize,
        price_label: Option<String>,
    ) -> Option<Transition> {
        let Some(set) = ImageSet::new(images) else {
            tracing::warn!("ignoring request to open an empty image set");
            return None;
        };

        let len = set.len();
        self.gestures.reset();
        self.clicks = ClickTracker::default();
        let id = self.state.open(set, start_index, price_label);
        tracing::debug!(len, index = ?self.state.current_index(), "lightbox opened");

        self.render_all();
        Some(Transition {
            id,
            delay: OPEN_TRANSITION_DELAY,
        })
    }

    /// Closes the lightbox and stops the slideshow. No-op when closed.
    pub fn close(&mut self) -> Option<Transition> {
        let id = self.state.close()?;
        self.gestures.reset();
        tracing::debug!("lightbox closed");

        self.render_all();
        Some(Transition {
            id,
            delay: CLOSE_TRANSITION_DELAY,
        })
    }

    /// Completes a phase change scheduled by `open` or `close`.
    pub fn finish_transition(&mut self, id: TransitionId) {
        match self.state.finish_transition(id) {
            Some(phase) => self.surface.set_phase(phase),
            None => tracing::trace!(id = id.value(), "stale transition ignored"),
        }
    }

    /// Steps to the neighboring image and stops the slideshow.
    pub fn navigate(&mut self, direction: Direction) {
        if !self.state.is_visible() {
            return;
        }
        self.stop_slideshow();
        if self.state.step(direction) {
            self.render_position();
        }
    }

    /// Jumps to `index` (wrapped into range) and stops the slideshow.
    pub fn show_image(&mut self, index: usize) {
        if !self.state.is_visible() {
            return;
        }
        self.stop_slideshow();
        if self.state.go_to(index) {
            self.render_position();
        }
    }

    /// Applies a zoom change and stops the slideshow. No-op when closed.
    pub fn set_zoom(&mut self, change: ZoomChange) {
        if !self.state.is_visible() {
            return;
        }
        self.stop_slideshow();
        let zoom = change.apply(self.state.zoom(), self.settings.wheel_step);
        self.state.set_zoom(zoom);
        self.surface.apply_zoom(zoom);
    }

    /// Starts auto-advancing. Requires an open set of two or more images.
    pub fn start_slideshow(&mut self) {
        if !self.state.is_visible() || !self.state.has_navigation() {
            return;
        }
        if self.state.slideshow_mut().start() {
            tracing::debug!(
                interval_ms = self.state.slideshow().interval().as_millis(),
                "slideshow started"
            );
            self.surface
                .set_slideshow_affordance(self.state.slideshow().affordance());
        }
    }

    pub fn stop_slideshow(&mut self) {
        if self.state.slideshow_mut().stop() {
            tracing::debug!("slideshow stopped");
            self.surface
                .set_slideshow_affordance(self.state.slideshow().affordance());
        }
    }

    pub fn toggle_slideshow(&mut self) {
        if self.state.is_slideshow_active() {
            self.stop_slideshow();
        } else {
            self.start_slideshow();
        }
    }

    /// Advances one image if the slideshow is still running.
    ///
    /// Ticks that arrive after a stop are dropped.
    pub fn on_slideshow_tick(&mut self) {
        if !self.state.is_visible() || !self.state.is_slideshow_active() {
            return;
        }
        if self.state.step(Direction::Next) {
            self.render_position();
        }
    }

    /// Runs the action behind a control.
    pub fn activate(&mut self, control: ModalControl) -> Reaction {
        if !self.state.is_visible() {
            return Reaction::Ignored;
        }
        match control {
            ModalControl::Close => self.close().into(),
            ModalControl::Previous => {
                self.navigate(Direction::Previous);
                Reaction::Consumed
            }
            ModalControl::Next => {
                self.navigate(Direction::Next);
                Reaction::Consumed
            }
            ModalControl::PlayPause => {
                self.toggle_slideshow();
                Reaction::Consumed
            }
        }
    }

    pub fn handle_key(&mut self, key: ModalKey, shift: bool) -> Reaction {
        if !self.state.is_visible() {
            return Reaction::Ignored;
        }
        match key {
            ModalKey::ArrowLeft => {
                self.navigate(Direction::Previous);
                Reaction::Consumed
            }
            ModalKey::ArrowRight => {
                self.navigate(Direction::Next);
                Reaction::Consumed
            }
            ModalKey::Escape => self.close().into(),
            ModalKey::Tab => {
                let controls = self.state.controls();
                let focused = self.state.focus_mut().cycle(controls, shift);
                self.surface.focus(focused);
                Reaction::Consumed
            }
            ModalKey::Activate => match self.state.focused() {
                Some(control) => self.activate(control),
                None => Reaction::Ignored,
            },
        }
    }

    /// Wheel input in notches; positive zooms in.
    pub fn handle_wheel(&mut self, steps: f32) -> Reaction {
        if !self.state.is_visible() || steps == 0.0 || !steps.is_finite() {
            return Reaction::Ignored;
        }
        self.set_zoom(ZoomChange::Wheel(steps));
        Reaction::Consumed
    }

    /// Interprets pointer and touch input. `at` is the time of the event.
    pub fn handle_pointer(&mut self, input: PointerInput, at: Instant) -> Reaction {
        if !self.state.is_visible() {
            return Reaction::Ignored;
        }

        let pressed_on_image = match input {
            PointerInput::MousePressed {
                position,
                target: HitTarget::Image,
            }
            | PointerInput::FingerPressed {
                position,
                target: HitTarget::Image,
                ..
            } => Some(position),
            _ => None,
        };
        if let Some(position) = pressed_on_image {
            if self.clicks.register(at, position) {
                tracing::trace!("double click resets zoom");
                self.set_zoom(ZoomChange::Reset);
            }
        }

        match self.gestures.process(input, self.state.zoom()) {
            GestureOutcome::None => match input {
                PointerInput::MousePressed { .. } | PointerInput::FingerPressed { .. } => {
                    Reaction::Consumed
                }
                _ => Reaction::Ignored,
            },
            GestureOutcome::SuppressScroll => Reaction::Consumed,
            GestureOutcome::Swipe(direction) => {
                tracing::trace!(?direction, "swipe");
                self.navigate(direction);
                Reaction::Consumed
            }
            GestureOutcome::Pinch(zoom) => {
                self.set_zoom(ZoomChange::Absolute(zoom.value()));
                Reaction::Consumed
            }
            GestureOutcome::DismissDown => {
                tracing::trace!("swipe down dismiss");
                self.close().into()
            }
            GestureOutcome::BackdropTap => {
                tracing::trace!("backdrop tap");
                self.close().into()
            }
        }
    }

    fn render_position(&mut self) {
        self.surface.show_image(self.state.current_image());
        if let Some(index) = self.state.current_index() {
            if self.state.has_navigation() {
                self.surface.set_active_preview(index);
            }
        }
        self.surface.apply_zoom(self.state.zoom());
    }

    fn render_all(&mut self) {
        let navigation = self.state.has_navigation();
        self.surface.set_visible(self.state.is_visible());
        self.surface.set_phase(self.state.phase());
        self.surface.show_image(self.state.current_image());
        self.surface.show_price(self.state.price_label());
        if navigation {
            self.surface
                .show_previews(self.state.len(), self.state.current_index());
        } else {
            self.surface.show_previews(0, None);
        }
        self.surface.show_navigation(navigation);
        self.surface
            .set_slideshow_affordance(self.state.slideshow().affordance());
        self.surface.apply_zoom(self.state.zoom());
        self.surface.focus(self.state.focused());
    }
}
