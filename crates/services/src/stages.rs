use std::sync::Arc;

use lesson_core::model::{Difficulty, StageDescriptor};
use lesson_core::{reading, video};

use crate::content::{TextSource, fetch_maybe};

/// Fetched and derived content for one stage, ready for display.
///
/// Missing resources arrive as placeholders, never as errors; an empty
/// watch file arrives as `WatchSkipped` so the renderer can advance past it
/// without user action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StageContent {
    Reading {
        title: &'static str,
        markdown: String,
    },
    Dialogue {
        image_url: String,
    },
    Watch {
        embed_url: String,
    },
    WatchSkipped,
    Qanda {
        markdown: String,
        image_url: String,
    },
}

/// Resolves a stage descriptor into displayable content.
#[derive(Clone)]
pub struct StageService {
    source: Arc<dyn TextSource>,
}

impl StageService {
    #[must_use]
    pub fn new(source: Arc<dyn TextSource>) -> Self {
        Self { source }
    }

    /// Fetch and derive the content for one stage. Infallible by design:
    /// every failure mode degrades to a placeholder.
    pub async fn load(&self, descriptor: &StageDescriptor, difficulty: Difficulty) -> StageContent {
        let source = self.source.as_ref();
        match descriptor {
            StageDescriptor::Reading { role, path } => {
                let markdown = match fetch_maybe(source, path).await {
                    Some(raw) => reading::extract_difficulty(&raw, difficulty),
                    None => format!("*Missing file:* `{path}`"),
                };
                StageContent::Reading {
                    title: role.title(),
                    markdown,
                }
            }
            StageDescriptor::Dialogue { image_path } => StageContent::Dialogue {
                image_url: source.resource_url(image_path),
            },
            StageDescriptor::Watch { path } => {
                let text = fetch_maybe(source, path).await.unwrap_or_default();
                let reference = text.trim();
                if reference.is_empty() {
                    StageContent::WatchSkipped
                } else {
                    StageContent::Watch {
                        embed_url: video::embed_url(reference),
                    }
                }
            }
            StageDescriptor::Qanda {
                markdown_path,
                image_path,
            } => {
                let markdown = fetch_maybe(source, markdown_path)
                    .await
                    .unwrap_or_else(|| "*Create a `qanda.md` in the content root.*".to_string());
                StageContent::Qanda {
                    markdown,
                    image_url: source.resource_url(image_path),
                }
            }
        }
    }
}
