//! Fixed-result evaluation functions and patient records.

use elig_core::{BoxedEvaluationFunction, Evaluation, EvaluationResult, Message, PatientRecord};

/// A patient with curated tumor doids.
pub fn proper_patient() -> PatientRecord {
    load_patient("golden/patients/proper_patient.json")
}

/// A patient with nothing curated.
pub fn minimal_patient() -> PatientRecord {
    PatientRecord::new("minimal")
}

fn load_patient(relative_path: &str) -> PatientRecord {
    crate::load_fixture(relative_path)
}

/// Always returns `evaluation`.
pub fn fixed(evaluation: Evaluation) -> BoxedEvaluationFunction {
    Box::new(move |_: &PatientRecord| evaluation.clone())
}

/// Always returns an unrecoverable evaluation of `result` with a single message.
pub fn with_result(result: EvaluationResult) -> BoxedEvaluationFunction {
    let mut evaluation = Evaluation::new(result, false);
    let message = Message::new(format!("{} message", result.as_str().to_lowercase()));
    match result {
        EvaluationResult::Warn => evaluation.warn_messages.insert(message),
        EvaluationResult::Undetermined => evaluation.undetermined_messages.insert(message),
        EvaluationResult::Fail | EvaluationResult::NotImplemented => {
            evaluation.fail_messages.insert(message)
        }
        EvaluationResult::Pass | EvaluationResult::NotEvaluated => {
            evaluation.pass_messages.insert(message)
        }
    };
    fixed(evaluation)
}

pub fn pass() -> BoxedEvaluationFunction {
    with_result(EvaluationResult::Pass)
}

pub fn warn() -> BoxedEvaluationFunction {
    with_result(EvaluationResult::Warn)
}

pub fn undetermined() -> BoxedEvaluationFunction {
    with_result(EvaluationResult::Undetermined)
}

pub fn fail() -> BoxedEvaluationFunction {
    with_result(EvaluationResult::Fail)
}

pub fn not_evaluated() -> BoxedEvaluationFunction {
    with_result(EvaluationResult::NotEvaluated)
}

/// Evaluation with every message bucket filled, tagged with `index`.
///
/// Useful for checking which buckets a combinator keeps: messages read
/// `"pass 1"`, `"warn 1"`, `"undetermined 1"`, `"fail 1"` and events
/// `"inclusion event 1"`, `"exclusion event 1"`.
#[derive(Debug, Clone, Copy)]
pub struct TestEvaluation {
    pub result: EvaluationResult,
    pub recoverable: bool,
    pub include_molecular: bool,
    pub missing_molecular_result: bool,
    pub index: usize,
}

impl Default for TestEvaluation {
    fn default() -> Self {
        Self {
            result: EvaluationResult::Pass,
            recoverable: false,
            include_molecular: false,
            missing_molecular_result: false,
            index: 1,
        }
    }
}

impl TestEvaluation {
    pub fn new(result: EvaluationResult, index: usize) -> Self {
        Self {
            result,
            index,
            ..Self::default()
        }
    }

    pub fn recoverable(mut self, recoverable: bool) -> Self {
        self.recoverable = recoverable;
        self
    }

    pub fn molecular(mut self) -> Self {
        self.include_molecular = true;
        self
    }

    pub fn missing_molecular_result(mut self, missing: bool) -> Self {
        self.missing_molecular_result = missing;
        self
    }

    pub fn evaluation(&self) -> Evaluation {
        let index = self.index;
        let mut evaluation = Evaluation::new(self.result, self.recoverable)
            .with_missing_molecular_result(self.missing_molecular_result);
        evaluation.pass_messages.insert(Message::new(format!("pass {index}")));
        evaluation.warn_messages.insert(Message::new(format!("warn {index}")));
        evaluation
            .undetermined_messages
            .insert(Message::new(format!("undetermined {index}")));
        evaluation.fail_messages.insert(Message::new(format!("fail {index}")));
        if self.include_molecular {
            evaluation = evaluation
                .with_inclusion_events([format!("inclusion event {index}")])
                .with_exclusion_events([format!("exclusion event {index}")]);
        }
        evaluation
    }

    pub fn function(&self) -> BoxedEvaluationFunction {
        fixed(self.evaluation())
    }
}
