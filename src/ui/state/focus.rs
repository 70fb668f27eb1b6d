// SPDX-License-Identifier: MPL-2.0
//! Keyboard focus trap for the open lightbox.

/// Interactive controls of the lightbox, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalControl {
    Close,
    Previous,
    Next,
    PlayPause,
}

const CLOSE_ONLY: [ModalControl; 1] = [ModalControl::Close];
const ALL_CONTROLS: [ModalControl; 4] = [
    ModalControl::Close,
    ModalControl::Previous,
    ModalControl::Next,
    ModalControl::PlayPause,
];

/// Controls that are visible for the given navigation state.
///
/// Previous, next and play/pause only make sense with more than one image.
#[must_use]
pub fn visible_controls(navigation: bool) -> &'static [ModalControl] {
    if navigation {
        &ALL_CONTROLS
    } else {
        &CLOSE_ONLY
    }
}

/// Tracks which control holds keyboard focus while the lightbox is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusTrap {
    focused: Option<ModalControl>,
}

impl FocusTrap {
    #[must_use]
    pub fn focused(&self) -> Option<ModalControl> {
        self.focused
    }

    pub fn clear(&mut self) {
        self.focused = None;
    }

    /// Moves focus to `control` if it is one of `controls`.
    pub fn focus(&mut self, control: ModalControl, controls: &[ModalControl]) {
        if controls.contains(&control) {
            self.focused = Some(control);
        }
    }

    /// Moves focus one step, wrapping at both ends.
    ///
    /// With nothing focused, Tab lands on the first control and Shift+Tab on
    /// the last.
    pub fn cycle(&mut self, controls: &[ModalControl], backwards: bool) -> Option<ModalControl> {
        let len = controls.len();
        if len == 0 {
            self.focused = None;
            return None;
        }

        let current = self
            .focused
            .and_then(|focused| controls.iter().position(|c| *c == focused));

        let next = match (current, backwards) {
            (None, false) => 0,
            (None, true) => len - 1,
            (Some(index), false) => (index + 1) % len,
            (Some(index), true) => (index + len - 1) % len,
        };

        self.focused = Some(controls[next]);
        self.focused
    }
}
