use crate::evaluation::Evaluation;
use crate::patient::PatientRecord;

/// The contract every leaf criterion and every combinator satisfies.
///
/// Evaluation is pure: the same record always yields the same evaluation.
pub trait EvaluationFunction: Send + Sync {
    fn evaluate(&self, record: &PatientRecord) -> Evaluation;
}

/// Owned, type-erased evaluation function, the unit combinators are built from.
pub type BoxedEvaluationFunction = Box<dyn EvaluationFunction>;

impl<F> EvaluationFunction for F
where
    F: Fn(&PatientRecord) -> Evaluation + Send + Sync,
{
    fn evaluate(&self, record: &PatientRecord) -> Evaluation {
        self(record)
    }
}
