//! WarnIf: turns a positive finding into a warning.

use elig_core::{
    BoxedEvaluationFunction, Evaluation, EvaluationFunction, EvaluationResult, PatientRecord,
};

/// Warns when the wrapped function passes or warns, passes otherwise.
///
/// The output is always PASS or WARN and never carries molecular events.
pub struct WarnIf {
    function: BoxedEvaluationFunction,
}

impl WarnIf {
    pub fn new(function: BoxedEvaluationFunction) -> Self {
        Self { function }
    }
}

impl EvaluationFunction for WarnIf {
    fn evaluate(&self, record: &PatientRecord) -> Evaluation {
        let evaluation = self.function.evaluate(record);
        match evaluation.result {
            EvaluationResult::Pass => Evaluation {
                warn_messages: evaluation.pass_messages,
                ..Evaluation::new(EvaluationResult::Warn, evaluation.recoverable)
            },
            EvaluationResult::Warn => {
                let mut warned = evaluation;
                warned.inclusion_molecular_events.clear();
                warned.exclusion_molecular_events.clear();
                warned
            }
            _ => {
                let mut pass_messages = evaluation.pass_messages;
                pass_messages.extend(evaluation.warn_messages);
                pass_messages.extend(evaluation.undetermined_messages);
                pass_messages.extend(evaluation.fail_messages);
                Evaluation {
                    pass_messages,
                    is_missing_molecular_result_for_evaluation: evaluation
                        .is_missing_molecular_result_for_evaluation,
                    ..Evaluation::new(EvaluationResult::Pass, evaluation.recoverable)
                }
            }
        }
    }
}
