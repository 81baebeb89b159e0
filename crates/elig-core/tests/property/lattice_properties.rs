//! Property tests for the result lattice folds.

use proptest::prelude::*;

use elig_core::EvaluationResult;

fn result_strategy() -> impl Strategy<Value = EvaluationResult> {
    prop::sample::select(EvaluationResult::ALL.to_vec())
}

proptest! {
    #[test]
    fn folds_are_order_independent(
        results in prop::collection::vec(result_strategy(), 1..12)
    ) {
        let mut reversed = results.clone();
        reversed.reverse();
        prop_assert_eq!(
            EvaluationResult::worst_of(results.iter().copied()),
            EvaluationResult::worst_of(reversed.iter().copied())
        );
        prop_assert_eq!(
            EvaluationResult::best_of(results.iter().copied()),
            EvaluationResult::best_of(reversed.iter().copied())
        );
    }

    #[test]
    fn folds_are_associative(
        left in prop::collection::vec(result_strategy(), 1..6),
        right in prop::collection::vec(result_strategy(), 1..6)
    ) {
        let all: Vec<_> = left.iter().chain(right.iter()).copied().collect();
        let nested_worst = EvaluationResult::worst_of([
            EvaluationResult::worst_of(left.iter().copied()).unwrap(),
            EvaluationResult::worst_of(right.iter().copied()).unwrap(),
        ]);
        prop_assert_eq!(nested_worst, EvaluationResult::worst_of(all.iter().copied()));

        let nested_best = EvaluationResult::best_of([
            EvaluationResult::best_of(left.iter().copied()).unwrap(),
            EvaluationResult::best_of(right.iter().copied()).unwrap(),
        ]);
        prop_assert_eq!(nested_best, EvaluationResult::best_of(all.iter().copied()));
    }

    #[test]
    fn fold_ignores_duplicates(
        results in prop::collection::vec(result_strategy(), 1..12)
    ) {
        let distinct: std::collections::BTreeSet<_> = results.iter().copied().collect();
        prop_assert_eq!(
            EvaluationResult::worst_of(results.iter().copied()),
            distinct.iter().next().copied()
        );
        prop_assert_eq!(
            EvaluationResult::best_of(results.iter().copied()),
            distinct.iter().next_back().copied()
        );
    }
}

#[test]
fn empty_folds_are_none() {
    assert_eq!(EvaluationResult::worst_of(Vec::new()), None);
    assert_eq!(EvaluationResult::best_of(Vec::new()), None);
}
