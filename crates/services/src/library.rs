use std::sync::Arc;

use log::warn;

use lesson_core::model::{LessonId, LessonRef};

use crate::content::{TextSource, fetch_maybe};

/// The manifest listing available lesson folders, e.g. `["001","002"]`.
pub const MANIFEST_PATH: &str = "lessons.json";

/// Loads the lesson manifest and derives picker entries from it.
#[derive(Clone)]
pub struct LibraryService {
    source: Arc<dyn TextSource>,
}

impl LibraryService {
    #[must_use]
    pub fn new(source: Arc<dyn TextSource>) -> Self {
        Self { source }
    }

    /// Load the manifest. `None` means "no manifest": the picker shows its
    /// instructional placeholder. A single attempt, nothing thrown outward.
    pub async fn load_lessons(&self) -> Option<Vec<LessonRef>> {
        let raw = fetch_maybe(self.source.as_ref(), MANIFEST_PATH).await?;
        let ids: Vec<String> = match serde_json::from_str(&raw) {
            Ok(ids) => ids,
            Err(err) => {
                warn!("malformed {MANIFEST_PATH}: {err}");
                return None;
            }
        };
        Some(
            ids.into_iter()
                .map(|id| LessonRef::from_id(LessonId::new(id)))
                .collect(),
        )
    }
}
