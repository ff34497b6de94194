use thiserror::Error;

/// Error type for the invoker library.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvokerError {
    /// The given verb does not name any dog action.
    #[error("Unknown dog action `{0}`")]
    UnknownAction(String),
}
