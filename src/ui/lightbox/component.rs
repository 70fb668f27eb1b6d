// SPDX-License-Identifier: MPL-2.0
//! Lightbox component: wires the headless controller into iced.

use super::controller::{LightboxController, LightboxSettings, ModalKey, Reaction, Transition};
use super::surface::ModalRegions;
use super::view::{self, ViewContext};
use crate::i18n::fluent::I18n;
use crate::ui::state::{HitTarget, ImageRef, ModalControl, PointerInput, TransitionId};
use iced::{event, keyboard, mouse, time, touch, window, Element, Point, Size, Subscription, Task};
use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;

/// Messages handled by the lightbox.
#[derive(Debug, Clone)]
pub enum Message {
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
    /// A lightbox button was pressed.
    Control(ModalControl),
    SelectPreview(usize),
    TransitionElapsed(TransitionId),
    SlideshowTick,
    /// Intrinsic pixel size of `image`, read from its file header.
    PictureMeasured {
        image: ImageRef,
        size: Option<Size>,
    },
}

/// Complete lightbox component state.
pub struct State {
    controller: LightboxController<ModalRegions>,
    window_size: Size,
    cursor_position: Option<Point>,
    /// Pixel sizes of images shown so far; `None` while unknown or unreadable.
    picture_sizes: HashMap<ImageRef, Option<Size>>,
}

impl State {
    #[must_use]
    pub fn new(settings: LightboxSettings, window_size: Size) -> Self {
        Self {
            controller: LightboxController::new(ModalRegions::default(), settings),
            window_size,
            cursor_position: None,
            picture_sizes: HashMap::new(),
        }
    }

    #[must_use]
    pub fn controller(&self) -> &LightboxController<ModalRegions> {
        &self.controller
    }

    #[must_use]
    pub fn regions(&self) -> &ModalRegions {
        self.controller.surface()
    }

    /// Whether the lightbox currently accepts input.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.controller.is_visible()
    }

    /// Whether the lightbox covers the window, including its fade-out.
    #[must_use]
    pub fn is_on_screen(&self) -> bool {
        self.regions().is_on_screen()
    }

    #[must_use]
    pub fn window_size(&self) -> Size {
        self.window_size
    }

    /// Opens the lightbox on a gallery item or a single review image.
    pub fn open(
        &mut self,
        images: Vec<ImageRef>,
        start_index: usize,
        price_label: Option<String>,
    ) -> Task<Message> {
        let transition = self
            .controller
            .open(images, start_index, price_label)
            .map_or_else(Task::none, schedule);
        Task::batch([transition, self.measure_current()])
    }

    /// Intrinsic size of the displayed image, once known.
    #[must_use]
    pub fn current_picture_size(&self) -> Option<Size> {
        self.regions()
            .image
            .as_ref()
            .and_then(|image| self.picture_sizes.get(image).copied().flatten())
    }

    pub fn handle_message(&mut self, message: Message) -> Task<Message> {
        let task = self.dispatch(message);
        Task::batch([task, self.measure_current()])
    }

    fn dispatch(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::RawEvent { event, .. } => self.handle_raw_event(event),
            Message::Control(control) => reaction_task(self.controller.activate(control)),
            Message::SelectPreview(index) => {
                self.controller.show_image(index);
                Task::none()
            }
            Message::TransitionElapsed(id) => {
                self.controller.finish_transition(id);
                Task::none()
            }
            Message::SlideshowTick => {
                self.controller.on_slideshow_tick();
                Task::none()
            }
            Message::PictureMeasured { image, size } => {
                self.picture_sizes.insert(image, size);
                Task::none()
            }
        }
    }

    /// Reads the displayed image's dimensions the first time it is shown.
    fn measure_current(&mut self) -> Task<Message> {
        let Some(image) = self.regions().image.clone() else {
            return Task::none();
        };
        if self.picture_sizes.contains_key(&image) {
            return Task::none();
        }
        self.picture_sizes.insert(image.clone(), None);
        if image.as_str().contains("://") {
            return Task::none();
        }

        Task::perform(
            async move {
                let size = picture_size(Path::new(image.as_str()));
                (image, size)
            },
            |(image, size)| Message::PictureMeasured { image, size },
        )
    }

    fn hit_target(&self, position: Point) -> HitTarget {
        view::hit_target(
            self.window_size,
            position,
            self.current_picture_size(),
            self.regions().zoom,
        )
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        view::view(ViewContext {
            i18n,
            regions: self.regions(),
            window: self.window_size,
        })
    }

    /// Slideshow timer; only exists while the slideshow runs.
    pub fn subscription(&self) -> Subscription<Message> {
        let state = self.controller.state();
        if state.is_visible() && state.is_slideshow_active() {
            time::every(state.slideshow().interval().as_duration()).map(|_| Message::SlideshowTick)
        } else {
            Subscription::none()
        }
    }

    fn handle_raw_event(&mut self, event: event::Event) -> Task<Message> {
        let now = Instant::now();
        let reaction = match event {
            event::Event::Window(
                window::Event::Opened { size, .. } | window::Event::Resized(size),
            ) => {
                self.window_size = size;
                Reaction::Ignored
            }
            event::Event::Mouse(mouse_event) => match mouse_event {
                mouse::Event::CursorMoved { position } => {
                    self.cursor_position = Some(position);
                    self.controller
                        .handle_pointer(PointerInput::MouseMoved { position }, now)
                }
                mouse::Event::CursorLeft => {
                    self.cursor_position = None;
                    Reaction::Ignored
                }
                mouse::Event::ButtonPressed(mouse::Button::Left) => match self.cursor_position {
                    Some(position) => self.controller.handle_pointer(
                        PointerInput::MousePressed {
                            position,
                            target: self.hit_target(position),
                        },
                        now,
                    ),
                    None => Reaction::Ignored,
                },
                mouse::Event::ButtonReleased(mouse::Button::Left) => match self.cursor_position {
                    Some(position) => self
                        .controller
                        .handle_pointer(PointerInput::MouseReleased { position }, now),
                    None => Reaction::Ignored,
                },
                mouse::Event::WheelScrolled { delta } => match self.cursor_position {
                    Some(position) if self.hit_target(position) == HitTarget::Image => {
                        self.controller.handle_wheel(scroll_steps(&delta))
                    }
                    _ => Reaction::Ignored,
                },
                _ => Reaction::Ignored,
            },
            event::Event::Touch(touch_event) => {
                let input = match touch_event {
                    touch::Event::FingerPressed { id, position } => PointerInput::FingerPressed {
                        id: id.0,
                        position,
                        target: self.hit_target(position),
                    },
                    touch::Event::FingerMoved { id, position } => {
                        PointerInput::FingerMoved { id: id.0, position }
                    }
                    touch::Event::FingerLifted { id, position } => {
                        PointerInput::FingerLifted { id: id.0, position }
                    }
                    touch::Event::FingerLost { id, .. } => PointerInput::FingerLost { id: id.0 },
                };
                self.controller.handle_pointer(input, now)
            }
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                match modal_key(&key) {
                    Some(modal_key) => self.controller.handle_key(modal_key, modifiers.shift()),
                    None => Reaction::Ignored,
                }
            }
            _ => Reaction::Ignored,
        };

        reaction_task(reaction)
    }
}

fn schedule(transition: Transition) -> Task<Message> {
    let Transition { id, delay } = transition;
    Task::perform(
        async move { tokio::time::sleep(delay).await },
        move |()| Message::TransitionElapsed(id),
    )
}

fn reaction_task(reaction: Reaction) -> Task<Message> {
    match reaction {
        Reaction::Transition(transition) => schedule(transition),
        Reaction::Ignored | Reaction::Consumed => Task::none(),
    }
}

fn modal_key(key: &keyboard::Key) -> Option<ModalKey> {
    use keyboard::key::Named;

    match key {
        keyboard::Key::Named(Named::ArrowLeft) => Some(ModalKey::ArrowLeft),
        keyboard::Key::Named(Named::ArrowRight) => Some(ModalKey::ArrowRight),
        keyboard::Key::Named(Named::Escape) => Some(ModalKey::Escape),
        keyboard::Key::Named(Named::Tab) => Some(ModalKey::Tab),
        keyboard::Key::Named(Named::Enter | Named::Space) => Some(ModalKey::Activate),
        _ => None,
    }
}

/// Pixel dimensions from the image header, without decoding the pixels.
fn picture_size(path: &Path) -> Option<Size> {
    match image_rs::image_dimensions(path) {
        Ok((width, height)) => Some(Size::new(width as f32, height as f32)),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "cannot read image dimensions");
            None
        }
    }
}

/// Normalizes mouse wheel units (lines vs. pixels) into wheel notches.
fn scroll_steps(delta: &mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } => *y,
        mouse::ScrollDelta::Pixels { y, .. } => *y / 120.0,
    }
}
