use thiserror::Error;

/// Failures of a reactive-binding call. None of these are fatal: the server
/// reports them to the caller and keeps serving.
#[derive(Debug, Error, PartialEq)]
pub enum BindingError {
    #[error("no binding produces output '{0}'")]
    UnknownOutput(String),

    #[error("output '{0}' is already bound")]
    DuplicateOutput(String),

    #[error("layout has no component '{0}'")]
    UnknownComponent(String),

    #[error("missing value for input '{0}'")]
    MissingInput(String),

    #[error("input '{id}': {reason}")]
    InvalidInput { id: String, reason: String },
}

impl BindingError {
    pub fn invalid(id: &str, reason: impl Into<String>) -> Self {
        BindingError::InvalidInput {
            id: id.to_string(),
            reason: reason.into(),
        }
    }
}
