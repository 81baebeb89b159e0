//! OR: the best result wins.

use std::fmt;

use tracing::trace;

use elig_core::errors::{CompositeError, EligResult};
use elig_core::{
    BoxedEvaluationFunction, Evaluation, EvaluationFunction, EvaluationResult, PatientRecord,
};

use crate::grouping::{self, GroupedEvaluations};

/// Combines functions optimistically.
///
/// An UNDETERMINED best result is promoted to WARN when it stems from a missing
/// molecular result while a warning evaluation carries molecular events.
/// Evaluations with molecular events from the PASS, WARN and UNDETERMINED groups
/// are merged in as well. A failing OR that has recoverable failures only reports
/// those.
pub struct Or {
    functions: Vec<BoxedEvaluationFunction>,
}

impl Or {
    /// Fails when `functions` is empty.
    pub fn new(functions: Vec<BoxedEvaluationFunction>) -> EligResult<Self> {
        if functions.is_empty() {
            return Err(CompositeError::NoFunctions { operator: "OR" }.into());
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

impl EvaluationFunction for Or {
    fn evaluate(&self, record: &PatientRecord) -> Evaluation {
        let groups = grouping::evaluate_grouped(&self.functions, record);
        let Some(&best) = groups.keys().next_back() else {
            unreachable!("OR is never constructed without functions");
        };

        let final_result = if best == EvaluationResult::Undetermined
            && undetermined_missing_molecular_and_warn_with_events(&groups)
        {
            EvaluationResult::Warn
        } else {
            best
        };

        let additional = grouping::with_molecular_events(
            &groups,
            &[
                EvaluationResult::Pass,
                EvaluationResult::Warn,
                EvaluationResult::Undetermined,
            ],
        );
        let evaluations: Vec<&Evaluation> = groups
            .get(&final_result)
            .into_iter()
            .flatten()
            .chain(additional.iter().copied())
            .collect();

        let recoverable = evaluations.iter().any(|evaluation| evaluation.recoverable);
        let filtered: Vec<&Evaluation> = if final_result == EvaluationResult::Fail && recoverable {
            evaluations
                .into_iter()
                .filter(|evaluation| evaluation.recoverable)
                .collect()
        } else {
            evaluations
        };

        let combined = filtered
            .iter()
            .fold(Evaluation::new(final_result, recoverable), |acc, evaluation| {
                acc.merge(evaluation)
            });

        trace!(
            best = %best,
            result = %combined.result,
            recoverable,
            merged = filtered.len(),
            "OR evaluated"
        );
        combined
    }
}

fn undetermined_missing_molecular_and_warn_with_events(groups: &GroupedEvaluations) -> bool {
    let undetermined_missing_molecular = groups
        .get(&EvaluationResult::Undetermined)
        .is_some_and(|group| {
            group
                .iter()
                .any(|evaluation| evaluation.is_missing_molecular_result_for_evaluation)
        });
    let warn_with_events = groups
        .get(&EvaluationResult::Warn)
        .is_some_and(|group| group.iter().any(Evaluation::has_molecular_events));
    undetermined_missing_molecular && warn_with_events
}

impl fmt::Debug for Or {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Or")
            .field("functions", &self.functions.len())
            .finish()
    }
}
