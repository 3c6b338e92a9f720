use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque folder-name token identifying one lesson (e.g. `"001"`).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LessonId(String);

impl LessonId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw folder token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LessonId({})", self.0)
    }
}

impl fmt::Display for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A lesson as listed by the manifest: the folder token plus a derived
/// human-readable title.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonRef {
    pub id: LessonId,
    pub title: String,
}

impl LessonRef {
    /// Derive the display title from the folder token: `"001"` becomes
    /// `"Lesson 1"`. Tokens that are not numeric keep their raw form.
    #[must_use]
    pub fn from_id(id: LessonId) -> Self {
        let title = match id.as_str().parse::<u64>() {
            Ok(n) => format!("Lesson {n}"),
            Err(_) => id.as_str().to_string(),
        };
        Self { id, title }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_token_drops_leading_zeros_in_title() {
        let lesson = LessonRef::from_id(LessonId::new("001"));
        assert_eq!(lesson.title, "Lesson 1");
        assert_eq!(lesson.id.as_str(), "001");
    }

    #[test]
    fn non_numeric_token_keeps_raw_form() {
        let lesson = LessonRef::from_id(LessonId::new("intro"));
        assert_eq!(lesson.title, "intro");
    }
}
