use criterion::{criterion_group, criterion_main, Criterion};

use elig_composite::{And, Not, Or, WarnIf};
use elig_core::{BoxedEvaluationFunction, EvaluationFunction, EvaluationResult};
use test_fixtures::evaluations::minimal_patient;
use test_fixtures::TestEvaluation;

const RESULTS: [EvaluationResult; 5] = [
    EvaluationResult::Pass,
    EvaluationResult::Warn,
    EvaluationResult::Undetermined,
    EvaluationResult::Fail,
    EvaluationResult::NotEvaluated,
];

/// `n` leaf functions cycling through every result, half of them with molecular events.
fn leaves(n: usize) -> Vec<BoxedEvaluationFunction> {
    (0..n)
        .map(|i| {
            let leaf = TestEvaluation::new(RESULTS[i % RESULTS.len()], i).recoverable(i % 3 == 0);
            if i % 2 == 0 {
                leaf.molecular().function()
            } else {
                leaf.function()
            }
        })
        .collect()
}

fn bench_flat_and(c: &mut Criterion) {
    let and = And::new(leaves(100)).unwrap();
    let patient = minimal_patient();
    c.bench_function("and_100_leaves", |b| {
        b.iter(|| and.evaluate(&patient));
    });
}

fn bench_flat_or(c: &mut Criterion) {
    let or = Or::new(leaves(100)).unwrap();
    let patient = minimal_patient();
    c.bench_function("or_100_leaves", |b| {
        b.iter(|| or.evaluate(&patient));
    });
}

fn bench_nested_tree(c: &mut Criterion) {
    // 10 ORs of (10 leaves) under an AND, each OR wrapped in NOT and WarnIf alternately.
    let branches: Vec<BoxedEvaluationFunction> = (0..10)
        .map(|i| {
            let or: BoxedEvaluationFunction = Box::new(Or::new(leaves(10)).unwrap());
            let wrapped: BoxedEvaluationFunction = if i % 2 == 0 {
                Box::new(Not::new(or))
            } else {
                Box::new(WarnIf::new(or))
            };
            wrapped
        })
        .collect();
    let tree = And::new(branches).unwrap();
    let patient = minimal_patient();
    c.bench_function("nested_and_or_100_leaves", |b| {
        b.iter(|| tree.evaluate(&patient));
    });
}

criterion_group!(benches, bench_flat_and, bench_flat_or, bench_nested_tree);
criterion_main!(benches);
