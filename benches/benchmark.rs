use std::hint::black_box;

use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use itertools::Itertools;
use vocab_srs::{MemoryState, NextStates, Rating, Scheduler, Stage, due_for_review};

const NOW: i64 = 1_700_000_000_000;

pub(crate) fn review_sequence(scheduler: &Scheduler, reviews: usize) -> MemoryState {
    let ratings = [Rating::Good, Rating::Good, Rating::Hard, Rating::Again, Rating::Easy];
    ratings
        .iter()
        .cycle()
        .take(reviews)
        .enumerate()
        .fold(MemoryState::new(), |state, (i, rating)| {
            scheduler.next_state(state, *rating, NOW + i as i64 * 86_400_000)
        })
}

pub(crate) fn next_states(scheduler: &Scheduler) -> NextStates {
    scheduler.next_states(
        MemoryState {
            stage: Stage::Review,
            stability: 51.344814,
            difficulty: 3.4,
            repetitions: 6,
            ..Default::default()
        },
        NOW,
    )
}

pub(crate) fn due_queue(records: &[(usize, MemoryState)]) -> Vec<usize> {
    due_for_review(records.iter().copied(), NOW, 20)
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let scheduler = Scheduler::default();
    let records = (0..10_000)
        .map(|i| {
            let state = MemoryState {
                stage: Stage::Review,
                next_review_at: NOW - 86_400_000 + (i as i64 * 7919) % 172_800_000,
                ..Default::default()
            };
            (i, state)
        })
        .collect_vec();
    c.bench_function("review_sequence", |b| {
        b.iter(|| black_box(review_sequence(&scheduler, 100)))
    });
    c.bench_function("next_states", |b| {
        b.iter(|| black_box(next_states(&scheduler)))
    });
    c.bench_function("due_queue", |b| b.iter(|| black_box(due_queue(&records))));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
