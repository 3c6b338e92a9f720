//! Text and media addressing against the static server hosting the lesson
//! folders.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::{CACHE_CONTROL, HeaderValue};
use reqwest::{Client, Url};

use crate::error::ContentError;

/// Source of lesson content. The HTTP client implements this; tests swap in
/// an in-memory map.
#[async_trait]
pub trait TextSource: Send + Sync {
    /// Fetch a text resource. `Ok(None)` means the resource does not exist;
    /// transport failures surface as errors for the caller to absorb.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` when the request cannot be completed at all.
    async fn fetch_text(&self, path: &str) -> Result<Option<String>, ContentError>;

    /// Absolute URL for a resource, for elements that load it themselves
    /// (images, iframes).
    fn resource_url(&self, path: &str) -> String;
}

/// Fetch a text resource, absorbing every failure into `None`.
///
/// Playback never halts on missing or unreachable content; the renderer
/// substitutes placeholders instead.
pub async fn fetch_maybe(source: &dyn TextSource, path: &str) -> Option<String> {
    match source.fetch_text(path).await {
        Ok(found) => found,
        Err(err) => {
            warn!("fetch failed for {path}: {err}");
            None
        }
    }
}

/// HTTP content client rooted at the server's base URL.
#[derive(Clone)]
pub struct ContentClient {
    client: Client,
    base: Url,
}

impl ContentClient {
    /// Build a client for the given base URL. A missing trailing slash is
    /// added so relative joins resolve under the base rather than beside it.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::BaseUrl` if the base URL does not parse.
    pub fn new(base_url: &str) -> Result<Self, ContentError> {
        let mut raw = base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let base = Url::parse(&raw).map_err(|_| ContentError::BaseUrl(base_url.to_string()))?;
        Ok(Self {
            client: Client::new(),
            base,
        })
    }

    #[must_use]
    pub fn base(&self) -> &Url {
        &self.base
    }
}

#[async_trait]
impl TextSource for ContentClient {
    async fn fetch_text(&self, path: &str) -> Result<Option<String>, ContentError> {
        let url = self
            .base
            .join(path)
            .map_err(|_| ContentError::BaseUrl(path.to_string()))?;

        let response = self
            .client
            .get(url)
            .header(CACHE_CONTROL, HeaderValue::from_static("no-store"))
            .send()
            .await?;

        if !response.status().is_success() {
            debug!("{path}: {}", response.status());
            return Ok(None);
        }

        Ok(Some(response.text().await?))
    }

    fn resource_url(&self, path: &str) -> String {
        self.base
            .join(path)
            .map_or_else(|_| path.to_string(), |url| url.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gains_a_trailing_slash() {
        let client = ContentClient::new("http://localhost:8000/lessons").unwrap();
        assert_eq!(
            client.resource_url("001/dialogue_image.png"),
            "http://localhost:8000/lessons/001/dialogue_image.png"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(ContentClient::new("not a url").is_err());
    }
}
