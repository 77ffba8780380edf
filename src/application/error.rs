// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The view result handed over by the database client is not shaped
    /// like `{ "rows": [...] }`.
    #[error("invalid document: {0}")]
    InvalidDocument(String),

    /// An upload request is missing a parameter or names a file type we
    /// cannot store.
    #[error("invalid image request: {0}")]
    InvalidImageRequest(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    pub fn invalid_document(msg: impl Into<String>) -> Self {
        Self::InvalidDocument(msg.into())
    }

    pub fn invalid_image_request(msg: impl Into<String>) -> Self {
        Self::InvalidImageRequest(msg.into())
    }

    /// Generic failure for route handlers that have nothing more specific
    /// to report.
    pub fn internal() -> Self {
        Self::Internal("internal server error".into())
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::InvalidImageRequest(msg),
        }
    }
}
