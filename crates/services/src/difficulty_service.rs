use std::sync::Arc;

use log::warn;

use lesson_core::model::Difficulty;
use storage::repository::PreferenceRepository;

use crate::error::DifficultyServiceError;

/// Reads and writes the single persisted difficulty preference.
#[derive(Clone)]
pub struct DifficultyService {
    repo: Arc<dyn PreferenceRepository>,
}

impl DifficultyService {
    #[must_use]
    pub fn new(repo: Arc<dyn PreferenceRepository>) -> Self {
        Self { repo }
    }

    /// Load the preference. An empty or unreadable slot falls back to the
    /// default (`easy`) so reading stages can always render.
    pub async fn load(&self) -> Difficulty {
        match self.repo.get_difficulty().await {
            Ok(stored) => stored.unwrap_or_default(),
            Err(err) => {
                warn!("could not load difficulty preference: {err}");
                Difficulty::default()
            }
        }
    }

    /// Persist a new preference. Written only on explicit user selection.
    ///
    /// # Errors
    ///
    /// Returns `DifficultyServiceError` on storage failures.
    pub async fn save(&self, difficulty: Difficulty) -> Result<(), DifficultyServiceError> {
        self.repo.save_difficulty(difficulty).await?;
        Ok(())
    }
}
