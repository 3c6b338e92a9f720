mod lesson;
mod playback;
mod preferences;
mod stage;

pub use lesson::{LessonId, LessonRef};
pub use playback::Playback;
pub use preferences::{Difficulty, DifficultyParseError};
pub use stage::{QANDA_IMAGE, QANDA_MARKDOWN, ReadingRole, StageDescriptor, stage_plan};
