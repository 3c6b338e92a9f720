//! Address-fragment codec for deep links: `#lesson=<id>&stage=<index>`.
//!
//! The fragment names a lesson and a stage index. Decoding is lenient: a
//! missing or unparsable stage falls back to 0, and clamping into the
//! lesson's stage bounds is the caller's job (`Playback::start_at`).

use crate::model::LessonId;

/// A decoded fragment position, before clamping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub lesson: LessonId,
    pub stage: usize,
}

/// Encode the current position into a fragment string.
#[must_use]
pub fn encode(lesson: &LessonId, stage: usize) -> String {
    format!("#lesson={lesson}&stage={stage}")
}

/// Decode a fragment string. Returns `None` when no lesson is referenced,
/// which routes to the picker.
#[must_use]
pub fn decode(fragment: &str) -> Option<Position> {
    let body = fragment.strip_prefix('#').unwrap_or(fragment);

    let mut lesson = None;
    let mut stage = 0;
    for pair in body.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        match key {
            "lesson" if !value.is_empty() => lesson = Some(LessonId::new(value)),
            "stage" => stage = value.parse().unwrap_or(0),
            _ => {}
        }
    }

    lesson.map(|lesson| Position { lesson, stage })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_lesson_and_stage() {
        let lesson = LessonId::new("003");
        let fragment = encode(&lesson, 2);
        assert_eq!(fragment, "#lesson=003&stage=2");
        let position = decode(&fragment).unwrap();
        assert_eq!(position.lesson, lesson);
        assert_eq!(position.stage, 2);
    }

    #[test]
    fn decodes_without_leading_hash() {
        let position = decode("lesson=001&stage=4").unwrap();
        assert_eq!(position.lesson.as_str(), "001");
        assert_eq!(position.stage, 4);
    }

    #[test]
    fn missing_stage_defaults_to_zero() {
        let position = decode("#lesson=002").unwrap();
        assert_eq!(position.stage, 0);
    }

    #[test]
    fn unparsable_stage_defaults_to_zero() {
        let position = decode("#lesson=002&stage=abc").unwrap();
        assert_eq!(position.stage, 0);
    }

    #[test]
    fn absent_lesson_routes_to_picker() {
        assert_eq!(decode("#stage=3"), None);
        assert_eq!(decode(""), None);
        assert_eq!(decode("#"), None);
    }
}
