//! The `Evaluation` value produced by every criterion and every combinator.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::message::Message;
use crate::result::EvaluationResult;

/// Outcome of evaluating a criterion against a patient record.
///
/// Leaf criteria fill exactly the message bucket matching `result`.
/// Combinators may fill several buckets so that the near-misses stay visible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Evaluation {
    pub result: EvaluationResult,
    /// An unfavorable outcome that should not block eligibility on its own.
    pub recoverable: bool,
    #[serde(default)]
    pub inclusion_molecular_events: BTreeSet<String>,
    #[serde(default)]
    pub exclusion_molecular_events: BTreeSet<String>,
    #[serde(default)]
    pub pass_messages: BTreeSet<Message>,
    #[serde(default)]
    pub warn_messages: BTreeSet<Message>,
    #[serde(default)]
    pub undetermined_messages: BTreeSet<Message>,
    #[serde(default)]
    pub fail_messages: BTreeSet<Message>,
    /// Only meaningful for `Undetermined`; never set on a merged `Pass`.
    #[serde(default)]
    pub is_missing_molecular_result_for_evaluation: bool,
}

impl Evaluation {
    /// An evaluation with no messages, no events and the missing flag cleared.
    pub fn new(result: EvaluationResult, recoverable: bool) -> Self {
        Self {
            result,
            recoverable,
            inclusion_molecular_events: BTreeSet::new(),
            exclusion_molecular_events: BTreeSet::new(),
            pass_messages: BTreeSet::new(),
            warn_messages: BTreeSet::new(),
            undetermined_messages: BTreeSet::new(),
            fail_messages: BTreeSet::new(),
            is_missing_molecular_result_for_evaluation: false,
        }
    }

    pub fn pass(message: impl Into<Message>) -> Self {
        let mut evaluation = Self::new(EvaluationResult::Pass, false);
        evaluation.pass_messages.insert(message.into());
        evaluation
    }

    pub fn warn(message: impl Into<Message>) -> Self {
        let mut evaluation = Self::new(EvaluationResult::Warn, false);
        evaluation.warn_messages.insert(message.into());
        evaluation
    }

    pub fn undetermined(message: impl Into<Message>) -> Self {
        let mut evaluation = Self::new(EvaluationResult::Undetermined, false);
        evaluation.undetermined_messages.insert(message.into());
        evaluation
    }

    pub fn fail(message: impl Into<Message>) -> Self {
        let mut evaluation = Self::new(EvaluationResult::Fail, false);
        evaluation.fail_messages.insert(message.into());
        evaluation
    }

    /// A fail that should be treated as informational by the caller.
    pub fn recoverable_fail(message: impl Into<Message>) -> Self {
        Self::fail(message).with_recoverable(true)
    }

    /// Undetermined because the molecular test needed to decide is missing.
    pub fn undetermined_missing_molecular_result(message: impl Into<Message>) -> Self {
        let mut evaluation = Self::undetermined(message);
        evaluation.is_missing_molecular_result_for_evaluation = true;
        evaluation
    }

    /// Skipped on purpose. Messages go to the pass bucket.
    pub fn not_evaluated(message: impl Into<Message>) -> Self {
        let mut evaluation = Self::new(EvaluationResult::NotEvaluated, false);
        evaluation.pass_messages.insert(message.into());
        evaluation
    }

    pub fn with_recoverable(mut self, recoverable: bool) -> Self {
        self.recoverable = recoverable;
        self
    }

    pub fn with_inclusion_events<I, S>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inclusion_molecular_events
            .extend(events.into_iter().map(Into::into));
        self
    }

    pub fn with_exclusion_events<I, S>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclusion_molecular_events
            .extend(events.into_iter().map(Into::into));
        self
    }

    pub fn with_missing_molecular_result(mut self, missing: bool) -> Self {
        self.is_missing_molecular_result_for_evaluation = missing;
        self
    }

    /// True when this evaluation supports inclusion or exclusion on molecular grounds.
    pub fn has_molecular_events(&self) -> bool {
        !self.inclusion_molecular_events.is_empty() || !self.exclusion_molecular_events.is_empty()
    }

    /// Merge `other`'s messages and events into this evaluation.
    ///
    /// `result` and `recoverable` are kept from `self`. The missing-molecular flag is
    /// cleared when `self` is a pass, otherwise it is the OR of both flags.
    pub fn merge(mut self, other: &Evaluation) -> Evaluation {
        self.inclusion_molecular_events
            .extend(other.inclusion_molecular_events.iter().cloned());
        self.exclusion_molecular_events
            .extend(other.exclusion_molecular_events.iter().cloned());
        self.pass_messages.extend(other.pass_messages.iter().cloned());
        self.warn_messages.extend(other.warn_messages.iter().cloned());
        self.undetermined_messages
            .extend(other.undetermined_messages.iter().cloned());
        self.fail_messages.extend(other.fail_messages.iter().cloned());
        self.is_missing_molecular_result_for_evaluation = if self.result == EvaluationResult::Pass {
            false
        } else {
            self.is_missing_molecular_result_for_evaluation
                || other.is_missing_molecular_result_for_evaluation
        };
        self
    }

    pub fn pass_messages_strings(&self) -> BTreeSet<String> {
        render_all(&self.pass_messages)
    }

    pub fn warn_messages_strings(&self) -> BTreeSet<String> {
        render_all(&self.warn_messages)
    }

    pub fn undetermined_messages_strings(&self) -> BTreeSet<String> {
        render_all(&self.undetermined_messages)
    }

    pub fn fail_messages_strings(&self) -> BTreeSet<String> {
        render_all(&self.fail_messages)
    }
}

fn render_all(messages: &BTreeSet<Message>) -> BTreeSet<String> {
    messages.iter().map(Message::render).collect()
}
