//! Difficulty-section extraction for reading files.
//!
//! Reading markdown is partitioned by bracketed markers (`[easy]`,
//! `[medium]`, `[hard]`) that stand alone on a line, case-insensitively.
//! Each marker switches the active bucket; lines before the first marker
//! belong to no bucket and are dropped. A marker may appear more than once;
//! its sections concatenate in file order.

use crate::model::Difficulty;

/// Returns the trimmed content of the requested difficulty bucket, or a
/// placeholder naming the difficulty when the bucket is empty or absent.
#[must_use]
pub fn extract_difficulty(markdown: &str, difficulty: Difficulty) -> String {
    let mut current: Option<Difficulty> = None;
    let mut bucket: Vec<&str> = Vec::new();

    for line in markdown.lines() {
        if let Some(marker) = parse_marker(line) {
            current = Some(marker);
            continue;
        }
        if current == Some(difficulty) {
            bucket.push(line);
        }
    }

    let body = bucket.join("\n").trim().to_string();
    if body.is_empty() {
        missing_placeholder(difficulty)
    } else {
        body
    }
}

/// The placeholder shown when a reading has no content for a difficulty.
#[must_use]
pub fn missing_placeholder(difficulty: Difficulty) -> String {
    format!("*No content for **{difficulty}** found.*")
}

fn parse_marker(line: &str) -> Option<Difficulty> {
    let trimmed = line.trim();
    let inner = trimmed.strip_prefix('[')?.strip_suffix(']')?;
    inner.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Preamble that belongs to no bucket.

[easy]
Easy line one.
Easy line two.

[MEDIUM]
Medium line.

[hard]
Hard line.
";

    #[test]
    fn returns_only_the_requested_bucket() {
        let easy = extract_difficulty(SAMPLE, Difficulty::Easy);
        assert_eq!(easy, "Easy line one.\nEasy line two.");
        let hard = extract_difficulty(SAMPLE, Difficulty::Hard);
        assert_eq!(hard, "Hard line.");
    }

    #[test]
    fn markers_match_case_insensitively() {
        let medium = extract_difficulty(SAMPLE, Difficulty::Medium);
        assert_eq!(medium, "Medium line.");
    }

    #[test]
    fn preamble_before_first_marker_is_discarded() {
        let easy = extract_difficulty(SAMPLE, Difficulty::Easy);
        assert!(!easy.contains("Preamble"));
    }

    #[test]
    fn repeated_markers_concatenate_in_file_order() {
        let text = "[easy]\nfirst\n[hard]\nignored\n[easy]\nsecond\n";
        assert_eq!(
            extract_difficulty(text, Difficulty::Easy),
            "first\nsecond"
        );
    }

    #[test]
    fn absent_bucket_yields_placeholder_naming_the_difficulty() {
        let text = "[easy]\nonly easy here\n";
        assert_eq!(
            extract_difficulty(text, Difficulty::Hard),
            "*No content for **hard** found.*"
        );
    }

    #[test]
    fn whitespace_only_bucket_yields_placeholder() {
        let text = "[medium]\n   \n\n";
        assert_eq!(
            extract_difficulty(text, Difficulty::Medium),
            "*No content for **medium** found.*"
        );
    }

    #[test]
    fn marker_with_trailing_whitespace_still_switches_buckets() {
        let text = "[easy]   \ncontent\n";
        assert_eq!(extract_difficulty(text, Difficulty::Easy), "content");
    }

    #[test]
    fn bracketed_text_that_is_not_a_marker_stays_in_the_bucket() {
        let text = "[easy]\n[note] keep this line\n";
        assert_eq!(
            extract_difficulty(text, Difficulty::Easy),
            "[note] keep this line"
        );
    }

    #[test]
    fn handles_crlf_input() {
        let text = "[easy]\r\nwindows line\r\n";
        assert_eq!(extract_difficulty(text, Difficulty::Easy), "windows line");
    }
}
