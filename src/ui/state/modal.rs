// SPDX-License-Identifier: MPL-2.0
//! Lightbox state: the captured image set, position, zoom and lifecycle.
//!
//! One [`ModalState`] exists per controller. It is created closed, mutated
//! only by the controller and reset (never dropped) on close. While visible,
//! `current_index` is always a valid index into `current_set`; while closed
//! both are empty.

use super::focus::{visible_controls, FocusTrap, ModalControl};
use super::slideshow::{Slideshow, SlideshowInterval};
use super::zoom::ZoomLevel;
use std::fmt;

/// Opaque reference to a displayable image (a path or URL).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageRef {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<String> for ImageRef {
    fn from(source: String) -> Self {
        Self(source)
    }
}

/// Ordered, non-empty sequence of images belonging to one gallery item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSet(Vec<ImageRef>);

impl ImageSet {
    /// Captures a set. Returns `None` for an empty list.
    #[must_use]
    pub fn new(images: Vec<ImageRef>) -> Option<Self> {
        if images.is_empty() {
            None
        } else {
            Some(Self(images))
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ImageRef> {
        self.0.get(index)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ImageRef] {
        &self.0
    }
}

/// Navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// Index reached from `index` in a set of `len` images, wrapping around.
    #[must_use]
    pub fn step(self, index: usize, len: usize) -> usize {
        match self {
            Direction::Next => (index + 1) % len,
            Direction::Previous => (index + len - 1) % len,
        }
    }
}

/// Presentation lifecycle of the lightbox.
///
/// State changes are immediate; the phase only tells the view which
/// animation marker to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

/// Identifies a scheduled phase change. Only the latest one is honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TransitionId(u64);

impl TransitionId {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ModalState {
    visible: bool,
    current_set: Option<ImageSet>,
    current_index: Option<usize>,
    zoom: ZoomLevel,
    slideshow: Slideshow,
    price_label: Option<String>,
    phase: Phase,
    transition: TransitionId,
    focus: FocusTrap,
}

impl ModalState {
    #[must_use]
    pub fn new(interval: SlideshowInterval) -> Self {
        Self {
            slideshow: Slideshow::new(interval),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn current_set(&self) -> Option<&ImageSet> {
        self.current_set.as_ref()
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Image currently on display, if any.
    #[must_use]
    pub fn current_image(&self) -> Option<&ImageRef> {
        let index = self.current_index?;
        self.current_set.as_ref()?.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.current_set.as_ref().map_or(0, ImageSet::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current_set.is_none()
    }

    /// Previews and arrows are only shown for sets of two or more.
    #[must_use]
    pub fn has_navigation(&self) -> bool {
        self.len() > 1
    }

    #[must_use]
    pub fn zoom(&self) -> ZoomLevel {
        self.zoom
    }

    #[must_use]
    pub fn slideshow(&self) -> &Slideshow {
        &self.slideshow
    }

    #[must_use]
    pub fn is_slideshow_active(&self) -> bool {
        self.slideshow.is_active()
    }

    #[must_use]
    pub fn price_label(&self) -> Option<&str> {
        self.price_label.as_deref()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn transition(&self) -> TransitionId {
        self.transition
    }

    #[must_use]
    pub fn focused(&self) -> Option<ModalControl> {
        self.focus.focused()
    }

    /// Controls currently reachable by keyboard.
    #[must_use]
    pub fn controls(&self) -> &'static [ModalControl] {
        visible_controls(self.has_navigation())
    }

    /// Captures a new set and enters `Opening`. Any previous state is dropped.
    pub(crate) fn open(
        &mut self,
        set: ImageSet,
        start_index: usize,
        price_label: Option<String>,
    ) -> TransitionId {
        let index = start_index.min(set.len() - 1);
        self.visible = true;
        self.current_set = Some(set);
        self.current_index = Some(index);
        self.zoom = ZoomLevel::default();
        self.slideshow.stop();
        self.price_label = price_label.filter(|label| !label.trim().is_empty());
        self.focus.clear();
        self.begin_transition(Phase::Opening)
    }

    /// Resets to the closed state and enters `Closing`.
    ///
    /// Returns `None` when already closed.
    pub(crate) fn close(&mut self) -> Option<TransitionId> {
        if !self.visible {
            return None;
        }
        self.visible = false;
        self.current_set = None;
        self.current_index = None;
        self.zoom = ZoomLevel::default();
        self.slideshow.stop();
        self.price_label = None;
        self.focus.clear();
        Some(self.begin_transition(Phase::Closing))
    }

    /// Completes a scheduled phase change. Stale ids are ignored.
    pub(crate) fn finish_transition(&mut self, id: TransitionId) -> Option<Phase> {
        if id != self.transition {
            return None;
        }
        let settled = match self.phase {
            Phase::Opening => Phase::Open,
            Phase::Closing => Phase::Closed,
            Phase::Open | Phase::Closed => return None,
        };
        self.phase = settled;
        Some(settled)
    }

    /// Moves one image in `direction`. Returns `false` if nothing changed.
    pub(crate) fn step(&mut self, direction: Direction) -> bool {
        let len = self.len();
        match self.current_index {
            Some(index) if self.visible && len > 1 => {
                self.show(direction.step(index, len));
                true
            }
            _ => false,
        }
    }

    /// Jumps to `index` (wrapped into range). Returns `false` while closed.
    pub(crate) fn go_to(&mut self, index: usize) -> bool {
        let len = self.len();
        if !self.visible || len == 0 {
            return false;
        }
        self.show(index % len);
        true
    }

    pub(crate) fn set_zoom(&mut self, zoom: ZoomLevel) {
        self.zoom = zoom;
    }

    pub(crate) fn slideshow_mut(&mut self) -> &mut Slideshow {
        &mut self.slideshow
    }

    pub(crate) fn focus_mut(&mut self) -> &mut FocusTrap {
        &mut self.focus
    }

    fn show(&mut self, index: usize) {
        self.current_index = Some(index);
        self.zoom = ZoomLevel::default();
    }

    fn begin_transition(&mut self, phase: Phase) -> TransitionId {
        self.phase = phase;
        self.transition = self.transition.next();
        self.transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(len: usize) -> ImageSet {
        ImageSet::new((0..len).map(|i| ImageRef::new(format!("img-{i}.jpg"))).collect())
            .expect("non-empty set")
    }

    #[test]
    fn empty_list_is_not_a_set() {
        assert!(ImageSet::new(Vec::new()).is_none());
    }

    #[test]
    fn captured_set_reports_its_length() {
        let images = set(3);
        assert_eq!(images.len(), 3);
        assert!(!images.is_empty());
    }

    #[test]
    fn direction_wraps_both_ways() {
        assert_eq!(Direction::Next.step(2, 3), 0);
        assert_eq!(Direction::Previous.step(0, 3), 2);
    }

    #[test]
    fn open_clamps_start_index() {
        let mut state = ModalState::default();
        state.open(set(3), 9, None);
        assert_eq!(state.current_index(), Some(2));
        assert_eq!(state.phase(), Phase::Opening);
    }

    #[test]
    fn blank_price_is_hidden() {
        let mut state = ModalState::default();
        state.open(set(1), 0, Some("   ".into()));
        assert_eq!(state.price_label(), None);
    }

    #[test]
    fn close_resets_everything() {
        let mut state = ModalState::default();
        state.open(set(3), 1, Some("40 €".into()));
        state.set_zoom(ZoomLevel::new(2.0));
        state.slideshow_mut().start();

        assert!(state.close().is_some());
        assert!(!state.is_visible());
        assert!(state.current_set().is_none());
        assert_eq!(state.current_index(), None);
        assert_eq!(state.zoom(), ZoomLevel::default());
        assert!(!state.is_slideshow_active());
        assert_eq!(state.price_label(), None);
        assert_eq!(state.phase(), Phase::Closing);
        assert!(state.close().is_none());
    }

    #[test]
    fn stale_transition_is_ignored() {
        let mut state = ModalState::default();
        let opening = state.open(set(2), 0, None);
        let closing = state.close().expect("was open");

        assert_eq!(state.finish_transition(opening), None);
        assert_eq!(state.phase(), Phase::Closing);
        assert_eq!(state.finish_transition(closing), Some(Phase::Closed));
        assert_eq!(state.finish_transition(closing), None);
    }

    #[test]
    fn step_is_noop_for_single_image() {
        let mut state = ModalState::default();
        state.open(set(1), 0, None);
        assert!(!state.step(Direction::Next));
        assert_eq!(state.current_index(), Some(0));
    }

    #[test]
    fn step_resets_zoom() {
        let mut state = ModalState::default();
        state.open(set(3), 0, None);
        state.set_zoom(ZoomLevel::new(2.2));
        assert!(state.step(Direction::Previous));
        assert_eq!(state.current_index(), Some(2));
        assert_eq!(state.zoom(), ZoomLevel::default());
    }
}
