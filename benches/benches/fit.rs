// Copyright 2026 the Wayfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};
use wayfinder_fit::{FitParams, compute_fit, fit_points, try_compute_fit};
use wayfinder_view::MapView;

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }

    fn point(&mut self, extent: f64) -> Point {
        Point::new(self.next_f64() * extent, self.next_f64() * extent)
    }
}

fn bench_pair_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit/pair");
    let mut rng = Lcg(7);
    let pairs: Vec<(Point, Point)> = (0..1_024)
        .map(|_| (rng.point(4_000.0), rng.point(4_000.0)))
        .collect();
    let view = Size::new(1080.0, 1920.0);
    let params = FitParams::default();
    group.throughput(Throughput::Elements(pairs.len() as u64));

    group.bench_function("compute_fit", |b| {
        b.iter(|| {
            for &(a, p) in &pairs {
                black_box(compute_fit(black_box(a), black_box(p), view, params));
            }
        });
    });

    group.bench_function("try_compute_fit", |b| {
        b.iter(|| {
            for &(a, p) in &pairs {
                black_box(try_compute_fit(black_box(a), black_box(p), view, params).ok());
            }
        });
    });

    group.bench_function("map_view_fit_points", |b| {
        let mut map = MapView::new(Rect::new(0.0, 0.0, view.width, view.height));
        map.set_floor_bounds(Some(Rect::new(0.0, 0.0, 4_000.0, 4_000.0)));
        b.iter(|| {
            for &(a, p) in &pairs {
                black_box(map.fit_points(a, p, params));
            }
        });
    });

    group.finish();
}

fn bench_route_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit/route");
    let view = Size::new(1080.0, 1920.0);

    for len in [8_usize, 64, 512] {
        let mut rng = Lcg(len as u64);
        let route: Vec<Point> = (0..len).map(|_| rng.point(4_000.0)).collect();
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("fit_points", len), &route, |b, route| {
            b.iter(|| black_box(fit_points(route.iter().copied(), view, FitParams::default())));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pair_fit, bench_route_fit);
criterion_main!(benches);
