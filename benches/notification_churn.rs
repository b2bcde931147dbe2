// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for notification store churn.
//!
//! Measures the cost of:
//! - Showing toasts into a full store (eviction + timer cancellation)
//! - Dismissing toasts by ID
//! - Projecting the store for rendering

use criterion::{criterion_group, criterion_main, Criterion};
use pharmacy_toasts::notifications::{
    presentation, Manager, ManualScheduler, NotificationSettings, ToastPosition,
};
use std::hint::black_box;
use std::sync::Arc;

fn manager() -> Manager {
    Manager::new(
        NotificationSettings::default(),
        Arc::new(ManualScheduler::new()),
    )
}

/// Benchmark `show` against a store that is already at capacity.
fn bench_show_with_eviction(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_churn");
    let manager = manager();
    for i in 0..5 {
        manager.info(format!("warmup-{i}"));
    }

    group.bench_function("show_with_eviction", |b| {
        b.iter(|| black_box(manager.success("Patient created")));
    });

    group.finish();
}

/// Benchmark a show/hide pair.
fn bench_show_then_hide(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_churn");
    let manager = manager();

    group.bench_function("show_then_hide", |b| {
        b.iter(|| {
            let id = manager.error("Network error");
            black_box(manager.hide(id));
        });
    });

    group.finish();
}

/// Benchmark projecting a full store into toast views.
fn bench_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_churn");
    let manager = manager();
    for i in 0..5 {
        manager.warning(format!("Low stock {i}"));
    }

    group.bench_function("project_full_store", |b| {
        b.iter(|| {
            let views = presentation::project(&manager.notifications(), ToastPosition::default());
            black_box(views);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_show_with_eviction,
    bench_show_then_hide,
    bench_projection
);
criterion_main!(benches);
