//! # elig-core
//!
//! Foundation crate for the eligibility evaluation core.
//! Defines the result lattice, the `Evaluation` value, messages, the patient record
//! pass-through type, traits, errors, config, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod evaluation;
pub mod message;
pub mod patient;
pub mod result;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{DoidManualConfig, EligConfig};
pub use errors::{EligError, EligResult};
pub use evaluation::Evaluation;
pub use message::Message;
pub use patient::PatientRecord;
pub use result::EvaluationResult;
pub use traits::{BoxedEvaluationFunction, EvaluationFunction};
