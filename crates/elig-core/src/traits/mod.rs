mod evaluation_function;
mod icd_matcher;

pub use evaluation_function::{BoxedEvaluationFunction, EvaluationFunction};
pub use icd_matcher::{HasIcdCodes, IcdCode, IcdMatcher, IcdMatches};
