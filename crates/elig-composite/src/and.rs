//! AND: the worst result wins.

use std::fmt;

use tracing::trace;

use elig_core::errors::{CompositeError, EligResult};
use elig_core::{
    BoxedEvaluationFunction, Evaluation, EvaluationFunction, EvaluationResult, PatientRecord,
};

use crate::grouping;

/// Combines functions pessimistically.
///
/// Within the worst result, unrecoverable evaluations dominate: the aggregate is
/// recoverable only when every evaluation of the worst result is recoverable.
/// Molecular events of passing and warning evaluations are always kept, so the
/// evidence surfaces even when the AND as a whole fails.
pub struct And {
    functions: Vec<BoxedEvaluationFunction>,
}

impl And {
    /// Fails when `functions` is empty: a vacuous AND is a composition bug.
    pub fn new(functions: Vec<BoxedEvaluationFunction>) -> EligResult<Self> {
        if functions.is_empty() {
            return Err(CompositeError::NoFunctions { operator: "AND" }.into());
        }
        Ok(Self { functions })
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl EvaluationFunction for And {
    fn evaluate(&self, record: &PatientRecord) -> Evaluation {
        let groups = grouping::evaluate_grouped(&self.functions, record);
        let Some((&worst, worst_group)) = groups.first_key_value() else {
            unreachable!("AND is never constructed without functions");
        };

        let (recoverable_evaluations, unrecoverable_evaluations): (
            Vec<&Evaluation>,
            Vec<&Evaluation>,
        ) = worst_group
            .iter()
            .partition(|evaluation| evaluation.recoverable);
        let recoverable = unrecoverable_evaluations.is_empty();
        let selected = if recoverable {
            recoverable_evaluations
        } else {
            unrecoverable_evaluations
        };

        let mut combined = selected
            .iter()
            .fold(Evaluation::new(worst, recoverable), |acc, evaluation| {
                acc.merge(evaluation)
            });

        let additional = grouping::with_molecular_events(
            &groups,
            &[EvaluationResult::Pass, EvaluationResult::Warn],
        );
        for evaluation in &additional {
            combined
                .inclusion_molecular_events
                .extend(evaluation.inclusion_molecular_events.iter().cloned());
            combined
                .exclusion_molecular_events
                .extend(evaluation.exclusion_molecular_events.iter().cloned());
        }

        trace!(
            result = %combined.result,
            recoverable,
            merged = selected.len(),
            harvested = additional.len(),
            "AND evaluated"
        );
        combined
    }
}

impl fmt::Debug for And {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("And")
            .field("functions", &self.functions.len())
            .finish()
    }
}
