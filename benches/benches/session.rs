// Copyright 2026 the Wayfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use wayfinder_session::{Destination, KioskSession, SessionConfig};

fn bench_session_cycle(c: &mut Criterion) {
    let floors: Vec<u16> = (0..12).collect();
    let destinations: Vec<Destination<u32, u16>> = (0..256_u32)
        .map(|i| Destination {
            id: i,
            floor: (i % 12) as u16,
            location: Point::new(f64::from(i * 37 % 2_000), f64::from(i * 91 % 1_500)),
        })
        .collect();

    c.bench_function("session/select_switch_focus", |b| {
        b.iter_batched(
            || {
                KioskSession::new(
                    floors.clone(),
                    3,
                    Point::new(900.0, 700.0),
                    SessionConfig::default(),
                )
                .unwrap()
            },
            |mut session| {
                let mut now = 0;
                for dest in &destinations {
                    now += 1_000;
                    session.select_destination(dest.clone(), now).unwrap();
                    black_box(session.focus_transform());
                    session.switch_floor(3, now).unwrap();
                    black_box(session.focus_transform());
                    black_box(session.poll_idle(now));
                }
                black_box(session);
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_session_cycle);
criterion_main!(benches);
