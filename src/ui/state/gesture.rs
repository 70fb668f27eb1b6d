// SPDX-License-Identifier: MPL-2.0
//! Gesture interpretation for the lightbox surface.
//!
//! Raw pointer and touch input is folded into a small set of outcomes:
//! horizontal swipes navigate, a vertical touch swipe dismisses, two touch
//! points pinch-zoom, and a short tap on the backdrop closes. A pinch always
//! wins over a pending swipe.

use super::zoom::ZoomLevel;
use super::Direction;
use crate::config::{
    DEFAULT_SWIPE_THRESHOLD_PX, DOUBLE_CLICK_MAX_DISTANCE_PX, DOUBLE_CLICK_WINDOW,
    MAX_SWIPE_THRESHOLD_PX, MIN_SWIPE_THRESHOLD_PX,
};
use iced::Point;
use std::time::Instant;

/// Swipe threshold in logical pixels, guaranteed to be within 10–200.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a new threshold, clamping the value to the valid range.
    ///
    /// Non-finite input collapses to the default threshold.
    #[must_use]
    pub fn new(pixels: f32) -> Self {
        if pixels.is_finite() {
            Self(pixels.clamp(MIN_SWIPE_THRESHOLD_PX, MAX_SWIPE_THRESHOLD_PX))
        } else {
            Self::default()
        }
    }

    /// Returns the raw pixel value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(DEFAULT_SWIPE_THRESHOLD_PX)
    }
}

/// Region of the lightbox a press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The dimmed area around the image.
    Backdrop,
    /// The displayed image itself.
    Image,
}

/// Device that started a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Finger(u64),
}

/// Start of a single-pointer gesture, kept until the pointer is released.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub start: Point,
    pub target: HitTarget,
    pub source: PointerSource,
}

/// Reference values captured when a second touch point lands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchSample {
    pub initial_distance: f32,
    pub base_zoom: ZoomLevel,
}

/// Raw input delivered to the tracker, in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    MousePressed { position: Point, target: HitTarget },
    MouseMoved { position: Point },
    MouseReleased { position: Point },
    FingerPressed { id: u64, position: Point, target: HitTarget },
    FingerMoved { id: u64, position: Point },
    FingerLifted { id: u64, position: Point },
    FingerLost { id: u64 },
}

/// What a processed input means for the lightbox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// Nothing to do.
    None,
    /// A swipe is in progress; default scrolling should be suppressed.
    SuppressScroll,
    /// Horizontal swipe completed.
    Swipe(Direction),
    /// Two-finger pinch produced a new zoom level.
    Pinch(ZoomLevel),
    /// Touch swipe down past the threshold.
    DismissDown,
    /// Short press and release on the backdrop.
    BackdropTap,
}

/// Tracks in-flight pointer and touch gestures.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    threshold: SwipeThreshold,
    sample: Option<GestureSample>,
    fingers: Vec<(u64, Point)>,
    pinch: Option<PinchSample>,
}

impl GestureTracker {
    #[must_use]
    pub fn new(threshold: SwipeThreshold) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    /// Whether a single-pointer gesture is being tracked.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.sample.is_some()
    }

    /// Whether two touch points are currently pinching.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinch.is_some()
    }

    #[must_use]
    pub fn sample(&self) -> Option<&GestureSample> {
        self.sample.as_ref()
    }

    #[must_use]
    pub fn threshold(&self) -> SwipeThreshold {
        self.threshold
    }

    /// Drops every tracked pointer.
    pub fn reset(&mut self) {
        self.sample = None;
        self.fingers.clear();
        self.pinch = None;
    }

    /// Folds one input into the tracker. `current_zoom` seeds a new pinch.
    pub fn process(&mut self, input: PointerInput, current_zoom: ZoomLevel) -> GestureOutcome {
        match input {
            PointerInput::MousePressed { position, target } => {
                self.sample = Some(GestureSample {
                    start: position,
                    target,
                    source: PointerSource::Mouse,
                });
                GestureOutcome::None
            }
            PointerInput::MouseMoved { .. } => {
                if self.sample_from(PointerSource::Mouse) {
                    GestureOutcome::SuppressScroll
                } else {
                    GestureOutcome::None
                }
            }
            PointerInput::MouseReleased { position } => {
                if self.sample_from(PointerSource::Mouse) {
                    self.sample
                        .take()
                        .map_or(GestureOutcome::None, |sample| self.classify(sample, position))
                } else {
                    GestureOutcome::None
                }
            }
            PointerInput::FingerPressed {
                id,
                position,
                target,
            } => {
                self.track_finger(id, position);
                if let Some(distance) = self.pinch_distance() {
                    // A second finger turns any pending swipe into a pinch.
                    self.sample = None;
                    if self.pinch.is_none() {
                        self.pinch = Some(PinchSample {
                            initial_distance: distance,
                            base_zoom: current_zoom,
                        });
                        tracing::trace!(distance, "pinch started");
                    }
                } else {
                    self.sample = Some(GestureSample {
                        start: position,
                        target,
                        source: PointerSource::Finger(id),
                    });
                }
                GestureOutcome::None
            }
            PointerInput::FingerMoved { id, position } => {
                self.track_finger(id, position);
                if let Some(pinch) = self.pinch {
                    return match self.pinch_distance() {
                        Some(distance) => GestureOutcome::Pinch(ZoomLevel::pinched(
                            pinch.base_zoom,
                            pinch.initial_distance,
                            distance,
                        )),
                        None => GestureOutcome::None,
                    };
                }
                match self.sample {
                    Some(sample) if sample.source == PointerSource::Finger(id) => {
                        let dx = position.x - sample.start.x;
                        let dy = position.y - sample.start.y;
                        if dy > self.threshold.value() && dy > dx.abs() {
                            self.sample = None;
                            GestureOutcome::DismissDown
                        } else {
                            GestureOutcome::SuppressScroll
                        }
                    }
                    _ => GestureOutcome::None,
                }
            }
            PointerInput::FingerLifted { id, position } => {
                self.untrack_finger(id);
                if self.pinch.is_some() {
                    if self.fingers.len() < 2 {
                        self.pinch = None;
                    }
                    return GestureOutcome::None;
                }
                if self.sample_from(PointerSource::Finger(id)) {
                    self.sample
                        .take()
                        .map_or(GestureOutcome::None, |sample| self.classify(sample, position))
                } else {
                    GestureOutcome::None
                }
            }
            PointerInput::FingerLost { id } => {
                self.untrack_finger(id);
                if self.fingers.len() < 2 {
                    self.pinch = None;
                }
                if self.sample_from(PointerSource::Finger(id)) {
                    self.sample = None;
                }
                GestureOutcome::None
            }
        }
    }

    fn classify(&self, sample: GestureSample, end: Point) -> GestureOutcome {
        let dx = end.x - sample.start.x;
        let dy = end.y - sample.start.y;
        let threshold = self.threshold.value();

        if dx.abs() > threshold && dx.abs() > dy.abs() {
            if dx < 0.0 {
                GestureOutcome::Swipe(Direction::Next)
            } else {
                GestureOutcome::Swipe(Direction::Previous)
            }
        } else if dx.abs() <= threshold
            && dy.abs() <= threshold
            && sample.target == HitTarget::Backdrop
        {
            GestureOutcome::BackdropTap
        } else {
            GestureOutcome::None
        }
    }

    fn sample_from(&self, source: PointerSource) -> bool {
        self.sample.is_some_and(|sample| sample.source == source)
    }

    fn track_finger(&mut self, id: u64, position: Point) {
        match self.fingers.iter_mut().find(|(finger, _)| *finger == id) {
            Some(entry) => entry.1 = position,
            None => self.fingers.push((id, position)),
        }
    }

    fn untrack_finger(&mut self, id: u64) {
        self.fingers.retain(|(finger, _)| *finger != id);
    }

    fn pinch_distance(&self) -> Option<f32> {
        match self.fingers.as_slice() {
            [(_, a), (_, b), ..] => Some(a.distance(*b)),
            _ => None,
        }
    }
}

/// Detects double clicks / double taps from successive presses.
#[derive(Debug, Clone, Default)]
pub struct ClickTracker {
    last: Option<(Instant, Point)>,
}

impl ClickTracker {
    /// Registers a press and reports whether it completes a double click.
    pub fn register(&mut self, at: Instant, position: Point) -> bool {
        let is_double = self.last.is_some_and(|(previous_at, previous_position)| {
            at.saturating_duration_since(previous_at) <= DOUBLE_CLICK_WINDOW
                && previous_position.distance(position) <= DOUBLE_CLICK_MAX_DISTANCE_PX
        });

        self.last = if is_double { None } else { Some((at, position)) };
        is_double
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn tracker() -> GestureTracker {
        GestureTracker::new(SwipeThreshold::default())
    }

    fn mouse_drag(tracker: &mut GestureTracker, from: Point, to: Point) -> GestureOutcome {
        tracker.process(
            PointerInput::MousePressed {
                position: from,
                target: HitTarget::Image,
            },
            ZoomLevel::default(),
        );
        tracker.process(PointerInput::MouseMoved { position: to }, ZoomLevel::default());
        tracker.process(
            PointerInput::MouseReleased { position: to },
            ZoomLevel::default(),
        )
    }

    #[test]
    fn swipe_left_navigates_next() {
        let mut tracker = tracker();
        let outcome = mouse_drag(&mut tracker, Point::new(200.0, 100.0), Point::new(120.0, 100.0));
        assert_eq!(outcome, GestureOutcome::Swipe(Direction::Next));
        assert!(!tracker.is_active());
    }

    #[test]
    fn swipe_right_navigates_previous() {
        let mut tracker = tracker();
        let outcome = mouse_drag(&mut tracker, Point::new(100.0, 100.0), Point::new(180.0, 110.0));
        assert_eq!(outcome, GestureOutcome::Swipe(Direction::Previous));
    }

    #[test]
    fn drag_at_threshold_is_not_a_swipe() {
        let mut tracker = tracker();
        let outcome = mouse_drag(&mut tracker, Point::new(100.0, 100.0), Point::new(50.0, 100.0));
        assert_eq!(outcome, GestureOutcome::None);
        assert!(!tracker.is_active());
    }

    #[test]
    fn vertical_dominant_drag_is_not_a_swipe() {
        let mut tracker = tracker();
        let outcome = mouse_drag(&mut tracker, Point::new(100.0, 100.0), Point::new(40.0, 200.0));
        assert_eq!(outcome, GestureOutcome::None);
    }

    #[test]
    fn mouse_move_during_drag_suppresses_scroll() {
        let mut tracker = tracker();
        assert_eq!(
            tracker.process(
                PointerInput::MouseMoved {
                    position: Point::ORIGIN
                },
                ZoomLevel::default()
            ),
            GestureOutcome::None
        );
        tracker.process(
            PointerInput::MousePressed {
                position: Point::ORIGIN,
                target: HitTarget::Image,
            },
            ZoomLevel::default(),
        );
        assert_eq!(
            tracker.process(
                PointerInput::MouseMoved {
                    position: Point::new(10.0, 0.0)
                },
                ZoomLevel::default()
            ),
            GestureOutcome::SuppressScroll
        );
    }

    #[test]
    fn release_without_press_does_nothing() {
        let mut tracker = tracker();
        let outcome = tracker.process(
            PointerInput::MouseReleased {
                position: Point::new(500.0, 0.0),
            },
            ZoomLevel::default(),
        );
        assert_eq!(outcome, GestureOutcome::None);
    }

    #[test]
    fn short_tap_on_backdrop_is_reported() {
        let mut tracker = tracker();
        tracker.process(
            PointerInput::MousePressed {
                position: Point::new(5.0, 5.0),
                target: HitTarget::Backdrop,
            },
            ZoomLevel::default(),
        );
        let outcome = tracker.process(
            PointerInput::MouseReleased {
                position: Point::new(8.0, 6.0),
            },
            ZoomLevel::default(),
        );
        assert_eq!(outcome, GestureOutcome::BackdropTap);
    }

    #[test]
    fn short_tap_on_image_is_ignored() {
        let mut tracker = tracker();
        tracker.process(
            PointerInput::FingerPressed {
                id: 1,
                position: Point::new(5.0, 5.0),
                target: HitTarget::Image,
            },
            ZoomLevel::default(),
        );
        let outcome = tracker.process(
            PointerInput::FingerLifted {
                id: 1,
                position: Point::new(5.0, 5.0),
            },
            ZoomLevel::default(),
        );
        assert_eq!(outcome, GestureOutcome::None);
    }

    #[test]
    fn touch_swipe_down_dismisses() {
        let mut tracker = tracker();
        tracker.process(
            PointerInput::FingerPressed {
                id: 7,
                position: Point::new(100.0, 100.0),
                target: HitTarget::Image,
            },
            ZoomLevel::default(),
        );
        let moved = tracker.process(
            PointerInput::FingerMoved {
                id: 7,
                position: Point::new(100.0, 140.0),
            },
            ZoomLevel::default(),
        );
        assert_eq!(moved, GestureOutcome::SuppressScroll);

        let dismissed = tracker.process(
            PointerInput::FingerMoved {
                id: 7,
                position: Point::new(105.0, 170.0),
            },
            ZoomLevel::default(),
        );
        assert_eq!(dismissed, GestureOutcome::DismissDown);
        assert!(!tracker.is_active());
    }

    #[test]
    fn touch_swipe_up_does_not_dismiss() {
        let mut tracker = tracker();
        tracker.process(
            PointerInput::FingerPressed {
                id: 1,
                position: Point::new(100.0, 200.0),
                target: HitTarget::Backdrop,
            },
            ZoomLevel::default(),
        );
        let outcome = tracker.process(
            PointerInput::FingerMoved {
                id: 1,
                position: Point::new(100.0, 100.0),
            },
            ZoomLevel::default(),
        );
        assert_eq!(outcome, GestureOutcome::SuppressScroll);
    }

    #[test]
    fn second_finger_turns_swipe_into_pinch() {
        let mut tracker = tracker();
        let base = ZoomLevel::default();
        tracker.process(
            PointerInput::FingerPressed {
                id: 1,
                position: Point::new(100.0, 100.0),
                target: HitTarget::Image,
            },
            base,
        );
        tracker.process(
            PointerInput::FingerPressed {
                id: 2,
                position: Point::new(200.0, 100.0),
                target: HitTarget::Image,
            },
            base,
        );
        assert!(tracker.is_pinching());
        assert!(!tracker.is_active());

        let outcome = tracker.process(
            PointerInput::FingerMoved {
                id: 2,
                position: Point::new(350.0, 100.0),
            },
            base,
        );
        match outcome {
            GestureOutcome::Pinch(zoom) => assert!((zoom.value() - 2.5).abs() < 1e-5),
            other => panic!("expected pinch, got {other:?}"),
        }

        // Lifting one finger ends the pinch without producing a swipe.
        let lifted = tracker.process(
            PointerInput::FingerLifted {
                id: 1,
                position: Point::new(0.0, 100.0),
            },
            base,
        );
        assert_eq!(lifted, GestureOutcome::None);
        assert!(!tracker.is_pinching());
    }

    #[test]
    fn lost_finger_clears_sample() {
        let mut tracker = tracker();
        tracker.process(
            PointerInput::FingerPressed {
                id: 3,
                position: Point::ORIGIN,
                target: HitTarget::Image,
            },
            ZoomLevel::default(),
        );
        tracker.process(PointerInput::FingerLost { id: 3 }, ZoomLevel::default());
        assert!(!tracker.is_active());
    }

    #[test]
    fn custom_threshold_is_respected() {
        let mut tracker = GestureTracker::new(SwipeThreshold::new(100.0));
        let outcome = mouse_drag(&mut tracker, Point::new(200.0, 0.0), Point::new(120.0, 0.0));
        assert_eq!(outcome, GestureOutcome::None);
    }

    #[test]
    fn double_click_within_window() {
        let mut clicks = ClickTracker::default();
        let start = Instant::now();
        assert!(!clicks.register(start, Point::new(10.0, 10.0)));
        assert!(clicks.register(start + Duration::from_millis(200), Point::new(12.0, 11.0)));
        // The pair is consumed; a third press starts over.
        assert!(!clicks.register(start + Duration::from_millis(300), Point::new(12.0, 11.0)));
    }

    #[test]
    fn slow_or_distant_clicks_are_single() {
        let mut clicks = ClickTracker::default();
        let start = Instant::now();
        clicks.register(start, Point::ORIGIN);
        assert!(!clicks.register(start + Duration::from_millis(900), Point::ORIGIN));
        assert!(!clicks.register(
            start + Duration::from_millis(1000),
            Point::new(80.0, 0.0)
        ));
    }
}
