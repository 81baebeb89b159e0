/// Errors raised while composing evaluation functions.
#[derive(Debug, thiserror::Error)]
pub enum CompositeError {
    #[error("could not determine {operator} result: no functions to evaluate")]
    NoFunctions { operator: &'static str },
}
