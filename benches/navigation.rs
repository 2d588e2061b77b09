// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for lightbox navigation.
//!
//! Measures the performance of:
//! - Opening the viewer on a populated sequence
//! - Wraparound next/previous stepping
//! - Swipe gesture resolution

use criterion::{criterion_group, criterion_main, Criterion};
use gallery_lens::gallery::{GallerySequence, ImageDescriptor};
use gallery_lens::lightbox::{swipe, Lightbox, ScrollLock};
use std::hint::black_box;

fn sequence(n: usize) -> GallerySequence {
    GallerySequence::from_images(
        (0..n)
            .map(|i| ImageDescriptor::new(format!("img-{i}"), format!("/gallery/{i}.jpg")))
            .collect(),
    )
}

/// Benchmark opening the viewer, including the scroll lock handshake.
fn bench_open(c: &mut Criterion) {
    let mut group = c.benchmark_group("lightbox");

    let images = sequence(500);

    group.bench_function("open_500_images", |b| {
        b.iter(|| {
            let mut lightbox = Lightbox::new(ScrollLock::new());
            lightbox.open(images.clone(), 250);
            black_box(&lightbox);
        });
    });

    group.finish();
}

/// Benchmark pure index stepping, including the wraparound path.
fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("lightbox");

    let mut lightbox = Lightbox::new(ScrollLock::new());
    lightbox.open(sequence(500), 499);

    group.bench_function("next_with_wraparound", |b| {
        b.iter(|| {
            lightbox.next();
            black_box(lightbox.current_index());
        });
    });

    group.bench_function("previous_with_wraparound", |b| {
        b.iter(|| {
            lightbox.previous();
            black_box(lightbox.current_index());
        });
    });

    group.finish();
}

/// Benchmark resolving a complete swipe gesture.
fn bench_swipe(c: &mut Criterion) {
    let mut group = c.benchmark_group("lightbox");

    group.bench_function("swipe_gesture", |b| {
        b.iter(|| {
            let mut tracker = swipe::State::new();
            tracker.handle(swipe::Message::Started(300.0));
            tracker.handle(swipe::Message::Moved(180.0));
            black_box(tracker.handle(swipe::Message::Ended));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_open, bench_step, bench_swipe);
criterion_main!(benches);
