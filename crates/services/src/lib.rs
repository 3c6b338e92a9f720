#![forbid(unsafe_code)]

pub mod content;
pub mod difficulty_service;
pub mod error;
pub mod library;
pub mod stages;

pub use content::{ContentClient, TextSource, fetch_maybe};
pub use difficulty_service::DifficultyService;
pub use error::{ContentError, DifficultyServiceError};
pub use library::LibraryService;
pub use stages::{StageContent, StageService};
