use serde::{Deserialize, Serialize};
use std::fmt;

/// The six possible outcomes of evaluating a criterion.
///
/// Variants are declared in lattice order, so the derived `Ord` is the order
/// used by the combinators:
///
/// `NotImplemented < Fail < Warn < Undetermined < Pass < NotEvaluated`
///
/// `NotEvaluated` sits above `Pass`: a deliberately skipped criterion never
/// hides a genuine outcome found elsewhere in an AND, and wins an OR.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EvaluationResult {
    NotImplemented,
    Fail,
    Warn,
    Undetermined,
    Pass,
    NotEvaluated,
}

impl EvaluationResult {
    /// All variants, low to high.
    pub const ALL: [EvaluationResult; 6] = [
        EvaluationResult::NotImplemented,
        EvaluationResult::Fail,
        EvaluationResult::Warn,
        EvaluationResult::Undetermined,
        EvaluationResult::Pass,
        EvaluationResult::NotEvaluated,
    ];

    /// Strictly lower in the lattice than `other`.
    pub fn is_worse_than(self, other: EvaluationResult) -> bool {
        self < other
    }

    /// Pessimistic fold (used by AND). `None` for an empty input.
    pub fn worst_of<I>(results: I) -> Option<EvaluationResult>
    where
        I: IntoIterator<Item = EvaluationResult>,
    {
        results.into_iter().min()
    }

    /// Optimistic fold (used by OR). `None` for an empty input.
    pub fn best_of<I>(results: I) -> Option<EvaluationResult>
    where
        I: IntoIterator<Item = EvaluationResult>,
    {
        results.into_iter().max()
    }

    /// Upper-case display name, as used in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            EvaluationResult::NotImplemented => "NOT_IMPLEMENTED",
            EvaluationResult::Fail => "FAIL",
            EvaluationResult::Warn => "WARN",
            EvaluationResult::Undetermined => "UNDETERMINED",
            EvaluationResult::Pass => "PASS",
            EvaluationResult::NotEvaluated => "NOT_EVALUATED",
        }
    }
}

impl fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
