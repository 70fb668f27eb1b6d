// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for lightbox controller operations.
//!
//! Measures the performance of:
//! - Opening a large image set
//! - Navigation operations (next/previous) with surface updates
//! - A full swipe gesture from press to release

use criterion::{criterion_group, criterion_main, Criterion};
use gallery_lightbox::ui::lightbox::{LightboxController, LightboxSettings, ModalRegions};
use gallery_lightbox::ui::state::{Direction, HitTarget, ImageRef, PointerInput};
use iced::Point;
use std::hint::black_box;
use std::time::Instant;

fn image_set(len: usize) -> Vec<ImageRef> {
    (0..len)
        .map(|i| ImageRef::new(format!("gallery/item-{i}.jpg")))
        .collect()
}

fn open_controller(len: usize) -> LightboxController<ModalRegions> {
    let mut controller =
        LightboxController::new(ModalRegions::default(), LightboxSettings::default());
    controller.open(image_set(len), 0, Some("Price: 35 €".into()));
    controller
}

fn bench_open(c: &mut Criterion) {
    let mut group = c.benchmark_group("lightbox_open");
    let images = image_set(500);

    group.bench_function("open_500", |b| {
        let mut controller =
            LightboxController::new(ModalRegions::default(), LightboxSettings::default());
        b.iter(|| {
            let transition = controller.open(black_box(images.clone()), black_box(250), None);
            black_box(transition);
        });
    });

    group.finish();
}

fn bench_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("lightbox_navigation");

    group.bench_function("next", |b| {
        let mut controller = open_controller(50);
        b.iter(|| {
            controller.navigate(black_box(Direction::Next));
            black_box(controller.state().current_index());
        });
    });

    group.bench_function("next_then_previous", |b| {
        let mut controller = open_controller(50);
        b.iter(|| {
            controller.navigate(Direction::Next);
            controller.navigate(Direction::Previous);
            black_box(controller.surface().active_preview);
        });
    });

    group.finish();
}

fn bench_swipe(c: &mut Criterion) {
    let mut group = c.benchmark_group("lightbox_gestures");

    group.bench_function("mouse_swipe", |b| {
        let mut controller = open_controller(10);
        let mut now = Instant::now();
        b.iter(|| {
            // Space presses apart so they never pair into a double click.
            now += std::time::Duration::from_secs(1);
            controller.handle_pointer(
                PointerInput::MousePressed {
                    position: Point::new(600.0, 400.0),
                    target: HitTarget::Image,
                },
                now,
            );
            controller.handle_pointer(
                PointerInput::MouseMoved {
                    position: Point::new(540.0, 402.0),
                },
                now,
            );
            let reaction = controller.handle_pointer(
                PointerInput::MouseReleased {
                    position: Point::new(500.0, 405.0),
                },
                now,
            );
            black_box(reaction);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_open, bench_navigation, bench_swipe);
criterion_main!(benches);
