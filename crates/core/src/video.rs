//! Watch-stage video reference normalization.
//!
//! A `watch_together.txt` may hold a full watch URL, a short-link URL, a
//! shorts URL, an existing embed URL, or a bare video identifier. All forms
//! normalize to the canonical embeddable URL.

use url::Url;

const SHORT_HOST: &str = "youtu.be";
const MAIN_HOST: &str = "youtube.com";

/// Normalize a free-form video reference into an embeddable URL.
///
/// Inputs that do not parse as URLs at all are treated as bare video
/// identifiers; malformed references never surface an error.
#[must_use]
pub fn embed_url(input: &str) -> String {
    let raw = input.trim();

    if let Ok(url) = Url::parse(raw) {
        if host_matches(&url, SHORT_HOST) {
            let id = url.path().trim_start_matches('/');
            if !id.is_empty() {
                return embed_for(id);
            }
        }
        if host_matches(&url, MAIN_HOST) {
            if let Some(id) = shorts_id(&url) {
                return embed_for(id);
            }
            if let Some((_, id)) = url.query_pairs().find(|(key, _)| key == "v") {
                return embed_for(&id);
            }
            if url.path().starts_with("/embed/") {
                return url.to_string();
            }
        }
    }

    // Bare identifier, or a reference no rule recognized.
    embed_for(raw)
}

fn embed_for(id: &str) -> String {
    format!("https://www.youtube.com/embed/{id}")
}

fn host_matches(url: &Url, host: &str) -> bool {
    url.host_str()
        .is_some_and(|h| h == host || h.ends_with(&format!(".{host}")))
}

fn shorts_id(url: &Url) -> Option<&str> {
    let mut segments = url.path_segments()?;
    if segments.next()? != "shorts" {
        return None;
    }
    let id = segments.next()?;
    (!id.is_empty()).then_some(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED: &str = "https://www.youtube.com/embed/abc123";

    #[test]
    fn short_link_resolves_to_embed() {
        assert_eq!(embed_url("https://youtu.be/abc123"), EXPECTED);
    }

    #[test]
    fn watch_url_resolves_to_embed() {
        assert_eq!(
            embed_url("https://www.youtube.com/watch?v=abc123"),
            EXPECTED
        );
    }

    #[test]
    fn shorts_url_resolves_to_embed() {
        assert_eq!(
            embed_url("https://www.youtube.com/shorts/abc123"),
            EXPECTED
        );
    }

    #[test]
    fn bare_identifier_resolves_to_embed() {
        assert_eq!(embed_url("abc123"), EXPECTED);
        assert_eq!(embed_url("  abc123\n"), EXPECTED);
    }

    #[test]
    fn existing_embed_url_passes_through() {
        assert_eq!(embed_url(EXPECTED), EXPECTED);
    }

    #[test]
    fn watch_url_with_extra_params_picks_v() {
        assert_eq!(
            embed_url("https://www.youtube.com/watch?t=42&v=abc123"),
            EXPECTED
        );
    }

    #[test]
    fn unrecognized_url_is_treated_as_bare_reference() {
        let out = embed_url("https://example.com/clip/xyz");
        assert_eq!(out, "https://www.youtube.com/embed/https://example.com/clip/xyz");
    }
}
