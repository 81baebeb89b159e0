//! Property tests for the combinator laws over random evaluations.

use proptest::prelude::*;

use elig_composite::{And, Not, Or, WarnIf};
use elig_core::{BoxedEvaluationFunction, Evaluation, EvaluationFunction, EvaluationResult};
use test_fixtures::evaluations::{fixed, minimal_patient};
use test_fixtures::TestEvaluation;

/// Results a criterion can produce. NOT_IMPLEMENTED has no producer.
fn result_strategy() -> impl Strategy<Value = EvaluationResult> {
    prop::sample::select(vec![
        EvaluationResult::Fail,
        EvaluationResult::Warn,
        EvaluationResult::Undetermined,
        EvaluationResult::Pass,
        EvaluationResult::NotEvaluated,
    ])
}

fn evaluation_strategy() -> impl Strategy<Value = Evaluation> {
    (
        result_strategy(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        0usize..4,
    )
        .prop_map(|(result, recoverable, molecular, missing, index)| {
            let mut evaluation = TestEvaluation::new(result, index)
                .recoverable(recoverable)
                .missing_molecular_result(missing);
            if molecular {
                evaluation = evaluation.molecular();
            }
            evaluation.evaluation()
        })
}

fn functions(evaluations: &[Evaluation]) -> Vec<BoxedEvaluationFunction> {
    evaluations.iter().cloned().map(fixed).collect()
}

proptest! {
    #[test]
    fn warn_if_only_passes_or_warns(evaluation in evaluation_strategy()) {
        let result = WarnIf::new(fixed(evaluation)).evaluate(&minimal_patient());
        prop_assert!(matches!(result.result, EvaluationResult::Pass | EvaluationResult::Warn));
        prop_assert!(!result.has_molecular_events());
    }

    #[test]
    fn double_negation_is_identity(evaluation in evaluation_strategy()) {
        let once: BoxedEvaluationFunction = Box::new(Not::new(fixed(evaluation.clone())));
        let twice = Not::new(once).evaluate(&minimal_patient());
        prop_assert_eq!(twice, evaluation);
    }

    #[test]
    fn and_result_is_the_worst_input(
        evaluations in prop::collection::vec(evaluation_strategy(), 1..6)
    ) {
        let expected = EvaluationResult::worst_of(evaluations.iter().map(|e| e.result));
        let combined = And::new(functions(&evaluations)).unwrap().evaluate(&minimal_patient());
        prop_assert_eq!(Some(combined.result), expected);
    }

    #[test]
    fn or_result_is_the_best_input_up_to_promotion(
        evaluations in prop::collection::vec(evaluation_strategy(), 1..6)
    ) {
        let best = EvaluationResult::best_of(evaluations.iter().map(|e| e.result)).unwrap();
        let combined = Or::new(functions(&evaluations)).unwrap().evaluate(&minimal_patient());
        if best == EvaluationResult::Undetermined {
            prop_assert!(matches!(
                combined.result,
                EvaluationResult::Undetermined | EvaluationResult::Warn
            ));
        } else {
            prop_assert_eq!(combined.result, best);
        }
    }

    #[test]
    fn and_or_do_not_depend_on_order(
        evaluations in prop::collection::vec(evaluation_strategy(), 1..6)
    ) {
        let mut reversed = evaluations.clone();
        reversed.reverse();
        let patient = minimal_patient();

        let and = And::new(functions(&evaluations)).unwrap().evaluate(&patient);
        let and_reversed = And::new(functions(&reversed)).unwrap().evaluate(&patient);
        prop_assert_eq!(and, and_reversed);

        let or = Or::new(functions(&evaluations)).unwrap().evaluate(&patient);
        let or_reversed = Or::new(functions(&reversed)).unwrap().evaluate(&patient);
        prop_assert_eq!(or, or_reversed);
    }

    #[test]
    fn singleton_is_identity(evaluation in evaluation_strategy()) {
        let patient = minimal_patient();
        let mut expected = evaluation.clone();
        if expected.result == EvaluationResult::Pass {
            expected.is_missing_molecular_result_for_evaluation = false;
        }
        let and = And::new(vec![fixed(evaluation.clone())]).unwrap().evaluate(&patient);
        let or = Or::new(vec![fixed(evaluation)]).unwrap().evaluate(&patient);
        prop_assert_eq!(and, expected.clone());
        prop_assert_eq!(or, expected);
    }
}
