//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;

/// Errors emitted by `ContentClient`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    #[error("invalid content base URL: {0}")]
    BaseUrl(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `DifficultyService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DifficultyServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}
