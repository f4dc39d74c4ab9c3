use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{collection} record not found: {id}")]
    NotFound { collection: &'static str, id: String },
    #[error("duplicate {collection} id: {id}")]
    DuplicateId { collection: &'static str, id: String },
}

pub type StoreResult<T> = Result<T, StoreError>;
