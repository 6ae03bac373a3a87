//! Layout benchmarks: display-tree builds, refreshes, and hit testing on
//! a hall-sized grid.

use criterion::{Criterion, criterion_group, criterion_main};
use seatmap_core::{Point, SeatGrid, SeatState, Size};
use seatmap_layout::{ArcLayout, LayoutStrategy, RectLayout, SeatMetrics, SizingResolver};
use std::hint::black_box;

/// A 40-row hall with a 30-seat stall block and jagged edges.
fn hall_grid() -> SeatGrid {
    let rows = (0..40)
        .map(|r| {
            let len = 30 - (r % 5);
            (0..len)
                .map(|c| {
                    if c < 2 || c >= len - 2 {
                        SeatState::Empty
                    } else if (r + c) % 7 == 0 {
                        SeatState::Booked
                    } else {
                        SeatState::Free
                    }
                })
                .collect()
        })
        .collect();
    SeatGrid::from_rows(rows)
}

fn bench_prepare(c: &mut Criterion) {
    let grid = hall_grid();
    let metrics = SeatMetrics::default();

    c.bench_function("rect_prepare_40x30", |b| {
        b.iter(|| {
            let mut layout = RectLayout::new(metrics);
            layout.prepare(black_box(&grid));
            black_box(layout.rows().len())
        })
    });

    c.bench_function("arc_prepare_40x30", |b| {
        b.iter(|| {
            let mut layout = ArcLayout::new(metrics);
            layout.prepare(black_box(&grid));
            black_box(layout.rows().len())
        })
    });
}

fn bench_refresh(c: &mut Criterion) {
    let grid = hall_grid();
    let mut layout = RectLayout::new(SeatMetrics::default());
    layout.prepare(&grid);

    c.bench_function("rect_refresh_40x30", |b| {
        b.iter(|| {
            layout.refresh(black_box(&grid));
            black_box(layout.rows().len())
        })
    });
}

fn bench_resolve(c: &mut Criterion) {
    let grid = hall_grid();
    let metrics = SeatMetrics::default();

    let mut rect = RectLayout::new(metrics);
    rect.prepare(&grid);
    c.bench_function("rect_resolve", |b| {
        b.iter(|| black_box(rect.resolve(&grid, black_box(Point::new(2_100, 2_100)))))
    });

    let mut arc = ArcLayout::new(metrics);
    arc.prepare(&grid);
    c.bench_function("arc_resolve", |b| {
        b.iter(|| black_box(arc.resolve(&grid, black_box(Point::new(2_100, 2_100)))))
    });
}

fn bench_fit(c: &mut Criterion) {
    let grid = hall_grid();

    c.bench_function("resolver_fit_cold", |b| {
        b.iter(|| {
            let mut layout = RectLayout::new(SeatMetrics::default());
            layout.prepare(&grid);
            let mut resolver = SizingResolver::new();
            black_box(resolver.fit(&mut layout, &grid, Size::new(1280, 720)))
        })
    });
}

criterion_group!(benches, bench_prepare, bench_refresh, bench_resolve, bench_fit);
criterion_main!(benches);
