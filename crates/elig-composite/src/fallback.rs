//! Fallback: a second opinion when the first one cannot decide.

use elig_core::{
    BoxedEvaluationFunction, Evaluation, EvaluationFunction, EvaluationResult, PatientRecord,
};

/// Returns the primary evaluation unless it is UNDETERMINED, in which case the
/// secondary function is evaluated and returned as is. The two are never merged.
pub struct Fallback {
    primary: BoxedEvaluationFunction,
    secondary: BoxedEvaluationFunction,
}

impl Fallback {
    pub fn new(primary: BoxedEvaluationFunction, secondary: BoxedEvaluationFunction) -> Self {
        Self { primary, secondary }
    }
}

impl EvaluationFunction for Fallback {
    fn evaluate(&self, record: &PatientRecord) -> Evaluation {
        let evaluation = self.primary.evaluate(record);
        if evaluation.result == EvaluationResult::Undetermined {
            tracing::trace!("primary undetermined, evaluating fallback");
            self.secondary.evaluate(record)
        } else {
            evaluation
        }
    }
}
