use thiserror::Error;
use uuid::Uuid;

use crate::schema::ValidationFailure;

#[derive(Error, Debug)]
pub enum BackofficeError {
    #[error("Unknown entity: {0}")]
    UnknownEntity(String),

    #[error("{entity} not found: {id}")]
    RecordNotFound { entity: String, id: Uuid },

    #[error("{entity} with id {id} already exists")]
    DuplicateId { entity: String, id: Uuid },

    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    #[error("Invalid {entity} record #{index}: {source}")]
    InvalidCollection {
        entity: String,
        index: usize,
        source: ValidationFailure,
    },

    #[error("Malformed collection data: {0}")]
    Malformed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),
}

impl BackofficeError {
    /// The per-field validation failure carried by this error, if any.
    pub fn validation(&self) -> Option<&ValidationFailure> {
        match self {
            BackofficeError::Validation(failure) => Some(failure),
            BackofficeError::InvalidCollection { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, BackofficeError>;
