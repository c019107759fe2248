use thiserror::Error;

use crate::classifier::ClassifierError;

/// Recoverable failures surfaced at the session boundary. None of these
/// leave a partial record behind; the log only ever changes on success.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The input (or a record built from it) broke an admission rule.
    #[error("validation error: {0}")]
    Validation(String),

    /// The classifier backend failed; nothing was stored.
    #[error("classification error: {0}")]
    Classification(String),

    /// A classification is already in flight; retry once it settles.
    #[error("a classification is already in progress")]
    Busy,
}

impl From<ClassifierError> for SessionError {
    fn from(err: ClassifierError) -> Self {
        let message = match &err {
            ClassifierError::BackendUnavailable { source } => format!("{err}: {source}"),
            ClassifierError::EmptyText => err.to_string(),
        };
        SessionError::Classification(message)
    }
}
