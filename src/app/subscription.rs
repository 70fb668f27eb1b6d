// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native events (keyboard, mouse, touch, window) to the lightbox.
//! The gallery only uses widget messages, so nothing but window geometry is
//! forwarded while the lightbox is closed.

use super::Message;
use crate::ui::lightbox::component;
use iced::{event, mouse, touch, window, Subscription};

/// Creates the native event subscription for the current lightbox state.
///
/// While the lightbox is open:
/// - Pointer moves, releases, wheel and finger moves/lifts are always routed
///   so a gesture started on the image completes even over a button.
/// - Presses are routed only when no widget captured them, so clicking a
///   lightbox control does not also start a swipe.
/// - Keyboard events are routed only when no widget captured them.
pub fn create_event_subscription(lightbox_visible: bool) -> Subscription<Message> {
    if lightbox_visible {
        event::listen_with(|event, status, window_id| {
            let always = matches!(
                event,
                event::Event::Window(window::Event::Opened { .. } | window::Event::Resized(_))
                    | event::Event::Mouse(
                        mouse::Event::CursorMoved { .. }
                            | mouse::Event::CursorLeft
                            | mouse::Event::ButtonReleased(mouse::Button::Left)
                            | mouse::Event::WheelScrolled { .. }
                    )
                    | event::Event::Touch(
                        touch::Event::FingerMoved { .. }
                            | touch::Event::FingerLifted { .. }
                            | touch::Event::FingerLost { .. }
                    )
            );

            if always || status == event::Status::Ignored {
                Some(raw(window_id, event))
            } else {
                None
            }
        })
    } else {
        event::listen_with(|event, _status, window_id| match event {
            event::Event::Window(window::Event::Opened { .. } | window::Event::Resized(_)) => {
                Some(raw(window_id, event))
            }
            _ => None,
        })
    }
}

fn raw(window: window::Id, event: event::Event) -> Message {
    Message::Lightbox(component::Message::RawEvent { window, event })
}
