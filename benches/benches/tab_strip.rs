// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use understory_tab_strip::{
    PageDataset, Sample, ScrollSource, SelectionRequest, TabStrip, TransitionTracker,
};

struct Pager(usize);

impl ScrollSource for Pager {
    fn current_item(&self) -> Option<usize> {
        Some(self.0)
    }

    fn scroll_to(&mut self, index: usize, _animated: bool) {
        self.0 = index;
    }
}

struct Pages(usize);

impl PageDataset for Pages {
    fn item_count(&self) -> usize {
        self.0
    }

    fn item_label(&self, _index: usize) -> Option<String> {
        None
    }
}

/// Samples for a drag across `pages` pages, `steps` samples per page.
fn sweep(pages: usize, steps: usize) -> Vec<Sample> {
    (0..pages.saturating_sub(1))
        .flat_map(|page| {
            (0..steps).map(move |step| {
                Sample::new(page, step as f32 / steps as f32).expect("offset in range")
            })
        })
        .collect()
}

fn bench_tracker_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("tab_strip/tracker_sweep");

    for pages in [4usize, 32, 256] {
        let samples = sweep(pages, 60);
        group.throughput(Throughput::Elements(samples.len() as u64));

        group.bench_with_input(BenchmarkId::new("observe", pages), &samples, |b, samples| {
            b.iter_batched(
                TransitionTracker::new,
                |mut tracker| {
                    for &sample in samples {
                        black_box(tracker.observe(sample));
                    }
                    black_box(tracker);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_strip_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("tab_strip/fan_out");

    // Observers that do nothing isolate the dispatch cost.
    struct Idle;
    impl understory_tab_strip::PageObserver for Idle {}

    for observers in [1usize, 4, 16] {
        let samples = sweep(8, 60);
        group.throughput(Throughput::Elements(samples.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("on_page_scrolled", observers),
            &samples,
            |b, samples| {
                b.iter_batched(
                    || {
                        let mut strip = TabStrip::<Pager, Pages>::new();
                        strip.bind(Pager(0), Some(Pages(8)));
                        for _ in 0..observers {
                            strip.add_observer(Idle);
                        }
                        strip
                    },
                    |mut strip| {
                        for sample in samples {
                            black_box(strip.on_page_scrolled(sample.position, sample.offset))
                                .expect("valid sample");
                        }
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_instant_jumps(c: &mut Criterion) {
    let mut group = c.benchmark_group("tab_strip/jumps");

    for pages in [8usize, 128] {
        group.throughput(Throughput::Elements(pages as u64));
        group.bench_with_input(BenchmarkId::new("select", pages), &pages, |b, &pages| {
            b.iter_batched(
                || {
                    let mut strip = TabStrip::<Pager, Pages>::new();
                    strip.bind(Pager(0), Some(Pages(pages)));
                    strip
                },
                |mut strip| {
                    for index in (0..pages).rev() {
                        black_box(strip.select(SelectionRequest::silent(index)))
                            .expect("index in range");
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_tracker_sweep,
    bench_strip_fan_out,
    bench_instant_jumps
);
criterion_main!(benches);
