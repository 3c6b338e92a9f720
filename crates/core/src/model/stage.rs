use serde::{Deserialize, Serialize};

use crate::model::LessonId;

/// Q&A resources are shared across all lessons and live in the content root.
pub const QANDA_MARKDOWN: &str = "qanda.md";
pub const QANDA_IMAGE: &str = "qanda.png";

/// Which voice a reading stage belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReadingRole {
    Teacher,
    Pupil,
}

impl ReadingRole {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            ReadingRole::Teacher => "Teacher Reading",
            ReadingRole::Pupil => "Pupil Reading",
        }
    }

    fn file_name(self) -> &'static str {
        match self {
            ReadingRole::Teacher => "dialogue_teacher.md",
            ReadingRole::Pupil => "dialogue_pupil.md",
        }
    }
}

/// One unit of a lesson's fixed playback sequence, carrying the locators
/// needed to fetch its content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageDescriptor {
    Reading { role: ReadingRole, path: String },
    Dialogue { image_path: String },
    Watch { path: String },
    Qanda { markdown_path: String, image_path: String },
}

impl StageDescriptor {
    /// The difficulty dock is hidden on the dialogue stage only.
    #[must_use]
    pub fn shows_difficulty_dock(&self) -> bool {
        !matches!(self, StageDescriptor::Dialogue { .. })
    }

}

/// Build the fixed, total stage order for a lesson: teacher reading, pupil
/// reading, dialogue image, watch (optional at render time), Q&A. All
/// locators except the shared Q&A pair are interpolated from the lesson id.
#[must_use]
pub fn stage_plan(lesson_id: &LessonId) -> Vec<StageDescriptor> {
    let folder = lesson_id.as_str();
    vec![
        StageDescriptor::Reading {
            role: ReadingRole::Teacher,
            path: format!("{folder}/{}", ReadingRole::Teacher.file_name()),
        },
        StageDescriptor::Reading {
            role: ReadingRole::Pupil,
            path: format!("{folder}/{}", ReadingRole::Pupil.file_name()),
        },
        StageDescriptor::Dialogue {
            image_path: format!("{folder}/dialogue_image.png"),
        },
        StageDescriptor::Watch {
            path: format!("{folder}/watch_together.txt"),
        },
        StageDescriptor::Qanda {
            markdown_path: QANDA_MARKDOWN.to_string(),
            image_path: QANDA_IMAGE.to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_has_five_stages_in_fixed_order() {
        let stages = stage_plan(&LessonId::new("003"));
        assert_eq!(stages.len(), 5);
        assert!(matches!(
            &stages[0],
            StageDescriptor::Reading { role: ReadingRole::Teacher, path } if path == "003/dialogue_teacher.md"
        ));
        assert!(matches!(
            &stages[1],
            StageDescriptor::Reading { role: ReadingRole::Pupil, path } if path == "003/dialogue_pupil.md"
        ));
        assert!(matches!(
            &stages[2],
            StageDescriptor::Dialogue { image_path } if image_path == "003/dialogue_image.png"
        ));
        assert!(matches!(
            &stages[3],
            StageDescriptor::Watch { path } if path == "003/watch_together.txt"
        ));
        assert!(matches!(
            &stages[4],
            StageDescriptor::Qanda { markdown_path, image_path }
                if markdown_path == "qanda.md" && image_path == "qanda.png"
        ));
    }

    #[test]
    fn dock_is_hidden_on_dialogue_only() {
        let stages = stage_plan(&LessonId::new("001"));
        let hidden: Vec<bool> = stages
            .iter()
            .map(|stage| !stage.shows_difficulty_dock())
            .collect();
        assert_eq!(hidden, vec![false, false, true, false, false]);
    }
}
