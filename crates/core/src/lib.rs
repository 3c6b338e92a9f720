#![forbid(unsafe_code)]

pub mod fragment;
pub mod model;
pub mod reading;
pub mod video;

pub use model::{
    Difficulty, DifficultyParseError, LessonId, LessonRef, Playback, ReadingRole, StageDescriptor,
    stage_plan,
};
