//! Shared evaluate-dedupe-group step of AND and OR.

use std::collections::BTreeMap;

use elig_core::{
    BoxedEvaluationFunction, Evaluation, EvaluationFunction, EvaluationResult, PatientRecord,
};

/// Evaluations keyed by result, in lattice order. Exact duplicates are dropped,
/// first occurrence wins, evaluation order is kept within a group.
pub(crate) type GroupedEvaluations = BTreeMap<EvaluationResult, Vec<Evaluation>>;

pub(crate) fn evaluate_grouped(
    functions: &[BoxedEvaluationFunction],
    record: &PatientRecord,
) -> GroupedEvaluations {
    let mut groups = GroupedEvaluations::new();
    for function in functions {
        let evaluation = function.evaluate(record);
        let group = groups.entry(evaluation.result).or_default();
        if !group.contains(&evaluation) {
            group.push(evaluation);
        }
    }
    groups
}

/// Evaluations in the given result groups that carry inclusion or exclusion events.
pub(crate) fn with_molecular_events<'a>(
    groups: &'a GroupedEvaluations,
    results: &[EvaluationResult],
) -> Vec<&'a Evaluation> {
    results
        .iter()
        .filter_map(|result| groups.get(result))
        .flatten()
        .filter(|evaluation| evaluation.has_molecular_events())
        .collect()
}
