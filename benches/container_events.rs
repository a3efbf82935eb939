// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the manager-to-container event path.
//!
//! Measures the performance of:
//! - Queue/dismiss round trips without animation
//! - Fade ticking with a full set of visible toasts

use criterion::{criterion_group, criterion_main, Criterion};
use iced_toasts::domain::{FadeDuration, MaxVisible};
use iced_toasts::notifications::{Manager, Notification, NotificationContainer};
use std::hint::black_box;
use std::time::{Duration, Instant};

fn bound_pair(max_visible: usize) -> (Manager<Notification>, NotificationContainer<Notification>) {
    let mut manager = Manager::with_max_visible(MaxVisible::new(max_visible));
    let mut container = NotificationContainer::new();
    container.set_manager(Some(&mut manager)).unwrap();
    (manager, container)
}

/// Benchmark pushing and dismissing plain toasts.
fn bench_queue_dismiss(c: &mut Criterion) {
    let mut group = c.benchmark_group("container_events");
    let (mut manager, mut container) = bound_pair(3);

    group.bench_function("queue_dismiss_plain", |b| {
        b.iter(|| {
            let toast = Notification::info("benchmark").without_fade();
            let id = toast.id();
            manager.push(toast);
            container.pump(Instant::now()).unwrap();
            manager.dismiss(id);
            container.pump(Instant::now()).unwrap();
            black_box(container.len());
        });
    });

    group.finish();
}

/// Benchmark advancing fades for a screen full of toasts.
fn bench_fade_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("container_events");
    let (mut manager, mut container) = bound_pair(10);
    let start = Instant::now();
    for i in 0..10 {
        manager.push(Notification::info(format!("toast {i}")).with_fade(FadeDuration::from_millis(5000)));
    }
    container.pump(start).unwrap();

    group.bench_function("tick_ten_fades", |b| {
        b.iter(|| {
            let removed = container.tick(black_box(start + Duration::from_millis(1000)));
            black_box(removed);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_queue_dismiss, bench_fade_tick);
criterion_main!(benches);
