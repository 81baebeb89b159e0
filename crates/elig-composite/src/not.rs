//! NOT: inverts a single function.

use elig_core::{
    BoxedEvaluationFunction, Evaluation, EvaluationFunction, EvaluationResult, PatientRecord,
};

/// Negates the wrapped function.
///
/// | inner           | outer           | messages          | events  |
/// |-----------------|-----------------|-------------------|---------|
/// | PASS            | FAIL            | pass ↔ fail       | swapped |
/// | FAIL            | PASS            | pass ↔ fail       | swapped |
/// | NOT_EVALUATED   | NOT_EVALUATED   | pass ↔ fail       | swapped |
/// | any other       | unchanged       | unchanged         | swapped |
///
/// Recoverability and the missing-molecular flag are carried through.
pub struct Not {
    function: BoxedEvaluationFunction,
}

impl Not {
    pub fn new(function: BoxedEvaluationFunction) -> Self {
        Self { function }
    }
}

impl EvaluationFunction for Not {
    fn evaluate(&self, record: &PatientRecord) -> Evaluation {
        let evaluation = self.function.evaluate(record);
        match evaluation.result {
            EvaluationResult::Pass => swap_messages_and_events(evaluation, EvaluationResult::Fail),
            EvaluationResult::Fail => swap_messages_and_events(evaluation, EvaluationResult::Pass),
            EvaluationResult::NotEvaluated => {
                swap_messages_and_events(evaluation, EvaluationResult::NotEvaluated)
            }
            _ => swap_events(evaluation),
        }
    }
}

fn swap_messages_and_events(evaluation: Evaluation, negated: EvaluationResult) -> Evaluation {
    let mut negated_evaluation = swap_events(evaluation);
    negated_evaluation.result = negated;
    std::mem::swap(
        &mut negated_evaluation.pass_messages,
        &mut negated_evaluation.fail_messages,
    );
    negated_evaluation
}

fn swap_events(mut evaluation: Evaluation) -> Evaluation {
    std::mem::swap(
        &mut evaluation.inclusion_molecular_events,
        &mut evaluation.exclusion_molecular_events,
    );
    evaluation
}
