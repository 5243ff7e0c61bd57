// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use overlook_placement::compute_placement;
use overlook_placement::popover::{Popover, PopoverEvent};
use overlook_placement::types::{Side, StaticGeometry};

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1280.0, 800.0);

/// Triggers tiled across the viewport, so flipped and edge-aligned placements are both hit.
fn gen_trigger_grid(n: usize) -> Vec<Rect> {
    let cell_w = VIEWPORT.width() / n as f64;
    let cell_h = VIEWPORT.height() / n as f64;
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell_w;
            let y0 = y as f64 * cell_h;
            out.push(Rect::new(x0, y0, x0 + cell_w * 0.5, y0 + cell_h * 0.5));
        }
    }
    out
}

fn bench_compute_placement(c: &mut Criterion) {
    let triggers = gen_trigger_grid(32);
    let content = Rect::new(0.0, 0.0, 240.0, 160.0);
    let mut group = c.benchmark_group("compute_placement");
    group.throughput(Throughput::Elements(triggers.len() as u64));
    for side in [Side::Top, Side::Bottom, Side::Left, Side::Right] {
        group.bench_function(format!("{side:?}"), |b| {
            b.iter(|| {
                for &t in &triggers {
                    black_box(compute_placement(
                        black_box(t),
                        content,
                        VIEWPORT,
                        side,
                        5.0,
                    ));
                }
            });
        });
    }
    group.finish();
}

// A burst of scroll events followed by one frame, as during fast scrolling.
fn bench_scroll_burst(c: &mut Criterion) {
    let geometry = StaticGeometry::new(
        Rect::new(600.0, 400.0, 680.0, 430.0),
        Rect::new(0.0, 0.0, 240.0, 160.0),
        VIEWPORT,
    );
    let mut popover = Popover::default();
    popover.open();
    c.bench_function("popover_scroll_burst_64", |b| {
        b.iter(|| {
            for _ in 0..64 {
                popover.handle(PopoverEvent::Scroll, &geometry);
            }
            black_box(popover.on_animation_frame(&geometry));
        });
    });
}

criterion_group!(benches, bench_compute_placement, bench_scroll_burst);
criterion_main!(benches);
