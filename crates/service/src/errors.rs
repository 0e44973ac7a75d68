use models::errors::ModelError;
use thiserror::Error;

pub const INVALID_ID_MSG: &str = "Invalid product ID";

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn invalid_id() -> Self { Self::Validation(INVALID_ID_MSG.into()) }

    /// Message without the kind prefix, suitable for a response body.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(m) | Self::NotFound(m) | Self::Storage(m) => m,
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(m) => Self::Validation(m),
            ModelError::Db(m) => Self::Storage(m),
        }
    }
}
