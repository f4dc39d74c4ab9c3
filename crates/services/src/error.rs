use hostelhub_store::StoreError;
use thiserror::Error;

/// Failures any workflow action can surface. All of them are recovered at
/// the route boundary and converted into a tagged response; nothing
/// propagates past a handler.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    InvalidTransition(String),
}

pub type WorkflowResult<T> = Result<T, WorkflowError>;

impl WorkflowError {
    /// Maps a store failure onto the workflow taxonomy, naming the entity
    /// the caller was acting on.
    pub(crate) fn store(entity: &'static str, err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => WorkflowError::NotFound { entity },
            StoreError::DuplicateId { .. } => WorkflowError::Validation(err.to_string()),
        }
    }
}

/// Trims `value` and rejects the empty result with `message`.
pub(crate) fn non_empty(value: &str, message: &str) -> WorkflowResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(WorkflowError::Validation(message.to_string()));
    }
    Ok(trimmed.to_string())
}
