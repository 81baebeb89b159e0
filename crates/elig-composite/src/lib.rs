//! # elig-composite
//!
//! The evaluation algebra. Each combinator is itself an [`EvaluationFunction`],
//! so criteria nest to any depth.
//!
//! - [`And`]: worst result wins, unrecoverable verdicts dominate.
//! - [`Or`]: best result wins, with molecular-evidence promotion of UNDETERMINED to WARN.
//! - [`Not`]: inverts PASS/FAIL, flips molecular events for every result.
//! - [`WarnIf`]: PASS becomes WARN, anything that is not a warning becomes PASS.
//! - [`Fallback`]: secondary function only when the primary is UNDETERMINED.
//!
//! [`EvaluationFunction`]: elig_core::EvaluationFunction

pub mod and;
pub mod fallback;
mod grouping;
pub mod not;
pub mod or;
pub mod warn_if;

pub use and::And;
pub use fallback::Fallback;
pub use not::Not;
pub use or::Or;
pub use warn_if::WarnIf;
