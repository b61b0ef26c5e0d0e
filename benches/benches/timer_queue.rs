// Copyright 2026 the Corbel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the timer queue under debounce-like load.

use corbel_timing::TimerQueue;
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};

fn bench_schedule_drain(c: &mut Criterion) {
    c.bench_function("timer_queue/schedule_drain_256", |b| {
        b.iter_batched(
            TimerQueue::<u32>::new,
            |mut queue| {
                for i in 0..256_u32 {
                    queue.schedule(u64::from(i % 16), i);
                }
                while let Some(fired) = queue.pop_expired(16) {
                    black_box(fired);
                }
                queue
            },
            BatchSize::SmallInput,
        );
    });
}

// The overlay idiom: every leave cancels the previous hide and schedules a
// new one, so the queue mostly holds a single entry per overlay.
fn bench_cancel_reschedule(c: &mut Criterion) {
    c.bench_function("timer_queue/cancel_reschedule", |b| {
        b.iter_batched(
            TimerQueue::<u32>::new,
            |mut queue| {
                let mut pending = queue.schedule(150, 1);
                for now in 1..512_u64 {
                    queue.cancel(pending);
                    pending = queue.schedule(now + 150, 1);
                }
                black_box(queue)
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_schedule_drain, bench_cancel_reschedule);
criterion_main!(benches);
