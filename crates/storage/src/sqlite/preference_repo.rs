use async_trait::async_trait;
use sqlx::Row;

use crate::repository::{PreferenceRepository, StorageError};
use lesson_core::model::Difficulty;

use super::SqliteRepository;

#[async_trait]
impl PreferenceRepository for SqliteRepository {
    async fn get_difficulty(&self) -> Result<Option<Difficulty>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT difficulty
            FROM viewer_settings
            WHERE id = 1
            ",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let raw: String = row
            .try_get("difficulty")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        raw.parse::<Difficulty>()
            .map(Some)
            .map_err(|err| StorageError::Serialization(err.to_string()))
    }

    async fn save_difficulty(&self, difficulty: Difficulty) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO viewer_settings (id, difficulty)
            VALUES (?1, ?2)
            ON CONFLICT(id) DO UPDATE SET
                difficulty = excluded.difficulty
            ",
        )
        .bind(1_i64)
        .bind(difficulty.as_str())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}
