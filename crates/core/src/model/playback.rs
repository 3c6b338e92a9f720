use crate::model::{LessonId, StageDescriptor, stage_plan};

/// The playback position inside one lesson: the lesson, its fixed stage
/// sequence, and the current index.
///
/// The index is always within `0..stages.len()`; the plan is never empty,
/// so `current()` is total.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Playback {
    lesson_id: LessonId,
    stage_index: usize,
    stages: Vec<StageDescriptor>,
}

impl Playback {
    /// Start a lesson at its first stage.
    #[must_use]
    pub fn start(lesson_id: LessonId) -> Self {
        Self::start_at(lesson_id, 0)
    }

    /// Start a lesson at the requested stage, clamped into bounds. Used when
    /// booting from a decoded fragment.
    #[must_use]
    pub fn start_at(lesson_id: LessonId, requested: usize) -> Self {
        let stages = stage_plan(&lesson_id);
        let stage_index = requested.min(stages.len() - 1);
        Self {
            lesson_id,
            stage_index,
            stages,
        }
    }

    #[must_use]
    pub fn lesson_id(&self) -> &LessonId {
        &self.lesson_id
    }

    #[must_use]
    pub fn stage_index(&self) -> usize {
        self.stage_index
    }

    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    #[must_use]
    pub fn current(&self) -> &StageDescriptor {
        &self.stages[self.stage_index]
    }

    #[must_use]
    pub fn stages(&self) -> &[StageDescriptor] {
        &self.stages
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.stage_index == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.stage_index + 1 == self.stages.len()
    }

    /// Advance one stage. A no-op at the last stage.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.stage_index += 1;
        true
    }

    /// Step back one stage. A no-op at the first stage.
    pub fn prev(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.stage_index -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_first_stage() {
        let playback = Playback::start(LessonId::new("001"));
        assert_eq!(playback.stage_index(), 0);
        assert!(playback.is_first());
        assert!(!playback.is_last());
    }

    #[test]
    fn next_stops_at_last_stage() {
        let mut playback = Playback::start(LessonId::new("001"));
        for _ in 0..playback.stage_count() - 1 {
            assert!(playback.next());
        }
        assert!(playback.is_last());
        assert!(!playback.next());
        assert_eq!(playback.stage_index(), playback.stage_count() - 1);
    }

    #[test]
    fn prev_stops_at_first_stage() {
        let mut playback = Playback::start(LessonId::new("001"));
        assert!(!playback.prev());
        assert_eq!(playback.stage_index(), 0);
    }

    #[test]
    fn start_at_clamps_out_of_range_index() {
        let playback = Playback::start_at(LessonId::new("001"), 99);
        assert_eq!(playback.stage_index(), playback.stage_count() - 1);
    }
}
