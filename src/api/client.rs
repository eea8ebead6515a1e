//! Genius HTTP client
//!
//! Handles both request families the provider exposes:
//! - structured JSON API calls against `api.genius.com`, authenticated
//!   with a bearer token
//! - raw HTML page fetches against `genius.com`, unauthenticated (lyrics
//!   are only available as rendered pages)
//!
//! Retry policy: 5xx responses and network-level failures are retried up
//! to the configured bound with a fixed delay between attempts; 4xx
//! responses are terminal and propagate immediately.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use super::dto;
use crate::config::{GeniusConfig, TextFormat};
use crate::error::{Error, Result};

const API_BASE: &str = "https://api.genius.com";
const WEB_BASE: &str = "https://genius.com";

/// User agent sent on every request
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Sort order for artist song listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Most popular first (default)
    #[default]
    Popularity,
    /// Alphabetical by title
    Title,
}

impl SortOrder {
    /// Parameter value sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Popularity => "popularity",
            Self::Title => "title",
        }
    }
}

/// Genius API client
pub struct ApiClient {
    http: reqwest::Client,
    token: Option<String>,
    api_base: String,
    web_base: String,
    text_format: TextFormat,
    retries: u32,
    retry_delay: Duration,
}

impl ApiClient {
    /// Create a client from the given configuration.
    ///
    /// The underlying HTTP client is configured with the crate user agent,
    /// gzip response support and the per-request timeout; it is shared by
    /// both request families.
    pub fn new(config: &GeniusConfig) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .gzip(true)
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            token: config.resolve_token(),
            api_base: API_BASE.to_string(),
            web_base: WEB_BASE.to_string(),
            text_format: config.response_format,
            retries: config.retries,
            retry_delay: Duration::from_millis(config.retry_delay_ms),
        }
    }

    /// Create a client for testing with custom base URLs
    #[cfg(test)]
    pub(crate) fn with_base_urls(
        config: &GeniusConfig,
        api_base: impl Into<String>,
        web_base: impl Into<String>,
    ) -> Self {
        let mut client = Self::new(config);
        client.api_base = api_base.into();
        client.web_base = web_base.into();
        client
    }

    /// Whether a bearer token is available for API calls
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    // ------------------------------------------------------------------
    // Structured API endpoints
    // ------------------------------------------------------------------

    /// `/search` - all catalogs, tagged hits
    pub async fn search(&self, term: &str) -> Result<dto::SearchResponse> {
        let url = format!("{}/search?q={}", self.api_base, urlencoding::encode(term));
        self.get_api(&url).await
    }

    /// `/songs/{id}` - full song detail
    pub async fn song(&self, song_id: u64) -> Result<dto::SongResponse> {
        let url = format!("{}/songs/{}?", self.api_base, song_id);
        self.get_api(&url).await
    }

    /// `/artists/{id}` - full artist detail
    pub async fn artist(&self, artist_id: u64) -> Result<dto::ArtistResponse> {
        let url = format!("{}/artists/{}?", self.api_base, artist_id);
        self.get_api(&url).await
    }

    /// `/artists/{id}/songs` - one page of an artist's song listing
    pub async fn artist_songs(
        &self,
        artist_id: u64,
        sort: SortOrder,
        per_page: u32,
        page: u32,
    ) -> Result<dto::ArtistSongsResponse> {
        let url = format!(
            "{}/artists/{}/songs?sort={}&per_page={}&page={}",
            self.api_base,
            artist_id,
            sort.as_str(),
            per_page,
            page
        );
        self.get_api(&url).await
    }

    /// `/albums/{id}` - full album detail
    pub async fn album(&self, album_id: u64) -> Result<dto::AlbumResponse> {
        let url = format!("{}/albums/{}?", self.api_base, album_id);
        self.get_api(&url).await
    }

    /// `/albums/{id}/tracks` - one page of an album's track listing
    pub async fn album_tracks(
        &self,
        album_id: u64,
        per_page: u32,
        page: u32,
    ) -> Result<dto::AlbumTracksResponse> {
        let url = format!(
            "{}/albums/{}/tracks?per_page={}&page={}",
            self.api_base, album_id, per_page, page
        );
        self.get_api(&url).await
    }

    /// `/annotations/{id}` - a single annotation
    pub async fn annotation(&self, annotation_id: u64) -> Result<dto::AnnotationResponse> {
        let url = format!("{}/annotations/{}?", self.api_base, annotation_id);
        self.get_api(&url).await
    }

    /// `/account` - the authenticated user; requires a token
    pub async fn account(&self) -> Result<dto::AccountResponse> {
        if self.token.is_none() {
            return Err(Error::MissingToken("account"));
        }
        let url = format!("{}/account?", self.api_base);
        self.get_api(&url).await
    }

    // ------------------------------------------------------------------
    // HTML page fetches
    // ------------------------------------------------------------------

    /// Fetch a rendered page by its site-relative path (e.g.
    /// "/Adele-hello-lyrics"). No credential is attached.
    pub async fn web_page(&self, path: &str) -> Result<String> {
        let path = path.strip_prefix('/').unwrap_or(path);
        let url = format!("{}/{}", self.web_base, path);
        self.get_with_retry(&url, true).await
    }

    // ------------------------------------------------------------------
    // Transport
    // ------------------------------------------------------------------

    /// GET an API URL, unwrap the `{meta, response}` envelope and
    /// deserialize the payload.
    ///
    /// Endpoint methods build their URLs with a trailing `?` or existing
    /// query string so the `text_format` parameter can always be appended.
    async fn get_api<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let sep = if url.ends_with('?') { "" } else { "&" };
        let url = format!("{}{}text_format={}", url, sep, self.text_format.as_str());

        let body = self.get_with_retry(&url, false).await?;
        let envelope: dto::ApiEnvelope<T> =
            serde_json::from_str(&body).map_err(|e| Error::Parse(e.to_string()))?;
        Ok(envelope.response)
    }

    /// Issue a GET with the retry policy and return the raw body.
    ///
    /// `web` switches the Accept header and drops the credential; the two
    /// families share everything else.
    async fn get_with_retry(&self, url: &str, web: bool) -> Result<String> {
        let mut last_err = None;

        for attempt in 0..=self.retries {
            if attempt > 0 {
                tokio::time::sleep(self.retry_delay).await;
                debug!(attempt, url, "retrying request");
            }

            let mut request = self.http.get(url);
            if web {
                request = request.header(
                    reqwest::header::ACCEPT,
                    "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
                );
            } else {
                request = request.header(reqwest::header::ACCEPT, "application/json");
                if let Some(ref token) = self.token {
                    request = request.bearer_auth(token);
                }
            }

            match request.send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        match response.text().await {
                            Ok(body) => return Ok(body),
                            // Body read failures are network-level: retryable
                            Err(e) => last_err = Some(Error::Network(e.to_string())),
                        }
                        continue;
                    }

                    let body = response.text().await.unwrap_or_default();
                    let message = if body.is_empty() {
                        status.canonical_reason().unwrap_or("Unknown").to_string()
                    } else {
                        body.chars().take(200).collect()
                    };

                    let err = Error::from_status(status.as_u16(), message);
                    if !err.is_retryable() {
                        return Err(err);
                    }
                    last_err = Some(err);
                }
                Err(e) => last_err = Some(Error::Network(e.to_string())),
            }
        }

        Err(last_err.unwrap_or_else(|| Error::Network("request failed".to_string())))
    }
}
