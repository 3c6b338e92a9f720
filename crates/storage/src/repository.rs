use async_trait::async_trait;
use lesson_core::model::Difficulty;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for the single persisted viewer preference.
#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    /// Fetch the stored difficulty, or `None` if nothing was ever saved.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the slot cannot be read or holds an
    /// unrecognized value.
    async fn get_difficulty(&self) -> Result<Option<Difficulty>, StorageError>;

    /// Persist the difficulty, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the slot cannot be written.
    async fn save_difficulty(&self, difficulty: Difficulty) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    difficulty: Arc<Mutex<Option<Difficulty>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferenceRepository for InMemoryRepository {
    async fn get_difficulty(&self) -> Result<Option<Difficulty>, StorageError> {
        let guard = self
            .difficulty
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(*guard)
    }

    async fn save_difficulty(&self, difficulty: Difficulty) -> Result<(), StorageError> {
        let mut guard = self
            .difficulty
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(difficulty);
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub preferences: Arc<dyn PreferenceRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            preferences: Arc::new(InMemoryRepository::new()),
        }
    }
}
