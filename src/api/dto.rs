//! Genius API Data Transfer Objects
//!
//! These types match EXACTLY what the Genius API returns.
//! DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the api module - convert to domain types.
//!
//! Every structured endpoint wraps its payload in the same envelope:
//! `{"meta": {"status": 200}, "response": {...}}`. Search hits carry their
//! payload as raw JSON because its shape depends on the sibling `index`
//! tag; typed extraction lives in `adapter.rs`.

use serde::Deserialize;

/// Envelope common to every structured API response
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub meta: Meta,
    pub response: T,
}

/// Envelope status block
#[derive(Debug, Clone, Deserialize)]
pub struct Meta {
    pub status: u16,
    pub message: Option<String>,
}

/// `/search` payload
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub hits: Vec<Hit>,
}

/// One search hit: a type tag plus a payload whose shape depends on the tag
#[derive(Debug, Clone, Deserialize)]
pub struct Hit {
    /// Which catalog the hit came from ("song", "artist", "album", ...)
    pub index: String,
    #[serde(rename = "type")]
    pub hit_type: Option<String>,
    /// Raw payload; parse via the adapter once the index is known
    pub result: serde_json::Value,
}

/// Song payload, shared by `/songs/{id}`, search hits, artist song listings
/// and album tracks. Listing variants omit some of the detail fields.
#[derive(Debug, Clone, Deserialize)]
pub struct SongDto {
    pub id: u64,
    pub title: String,
    pub url: String,
    /// Site-relative lyrics page path, e.g. "/Artist-title-lyrics"
    pub path: Option<String>,
    /// Provider-reported lyrics completeness ("complete", "incomplete", ...)
    pub lyrics_state: Option<String>,
    #[serde(default)]
    pub instrumental: bool,
    pub primary_artist: ArtistRefDto,
    #[serde(default)]
    pub featured_artists: Vec<ArtistRefDto>,
    #[serde(default)]
    pub producer_artists: Vec<ArtistRefDto>,
    #[serde(default)]
    pub writer_artists: Vec<ArtistRefDto>,
    pub album: Option<AlbumRefDto>,
    /// ISO date, detail responses only
    pub release_date: Option<String>,
    pub release_date_for_display: Option<String>,
    pub song_art_image_url: Option<String>,
    pub stats: Option<StatsDto>,
}

/// Abbreviated artist reference embedded in song payloads
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistRefDto {
    pub id: u64,
    pub name: String,
    pub url: Option<String>,
    pub header_image_url: Option<String>,
}

/// Full artist payload from `/artists/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistDto {
    pub id: u64,
    pub name: String,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub header_image_url: Option<String>,
    pub instagram_name: Option<String>,
    pub twitter_name: Option<String>,
    pub facebook_name: Option<String>,
    pub followers_count: Option<u64>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub is_meme_verified: bool,
}

/// Abbreviated album reference embedded in song payloads
#[derive(Debug, Clone, Deserialize)]
pub struct AlbumRefDto {
    pub id: u64,
    pub name: String,
    pub url: Option<String>,
    pub full_title: Option<String>,
}

/// Full album payload from `/albums/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct AlbumDto {
    pub id: u64,
    pub name: String,
    pub url: Option<String>,
    pub full_title: Option<String>,
    pub cover_art_url: Option<String>,
    pub release_date_for_display: Option<String>,
    pub artist: ArtistDto,
    pub description: Option<BodyDto>,
    pub song_pageviews: Option<u64>,
}

/// Track entry from `/albums/{id}/tracks`
#[derive(Debug, Clone, Deserialize)]
pub struct TrackDto {
    /// Position on the album; null for bonus/unordered entries
    pub number: Option<u32>,
    pub song: SongDto,
}

/// Text body rendered in the configured `text_format`
#[derive(Debug, Clone, Deserialize)]
pub struct BodyDto {
    pub plain: Option<String>,
    pub html: Option<String>,
}

/// Engagement counters on song payloads
#[derive(Debug, Clone, Deserialize)]
pub struct StatsDto {
    #[serde(default)]
    pub hot: bool,
    pub unreviewed_annotations: Option<u64>,
    pub concurrents: Option<u64>,
    pub pageviews: Option<u64>,
}

/// Annotation payload from `/annotations/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct AnnotationDto {
    pub id: u64,
    pub url: Option<String>,
    pub body: Option<BodyDto>,
    pub verified: Option<bool>,
    pub votes_total: Option<i64>,
}

/// Authenticated user payload from `/account`
#[derive(Debug, Clone, Deserialize)]
pub struct UserDto {
    pub id: u64,
    pub name: Option<String>,
    pub login: Option<String>,
    pub email: Option<String>,
}

/// `/songs/{id}` payload; `song` observed null for withdrawn entries
#[derive(Debug, Clone, Deserialize)]
pub struct SongResponse {
    pub song: Option<SongDto>,
}

/// `/artists/{id}` payload
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistResponse {
    pub artist: ArtistDto,
}

/// `/artists/{id}/songs` payload
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistSongsResponse {
    #[serde(default)]
    pub songs: Vec<SongDto>,
    /// Next page number; null when the listing is exhausted
    pub next_page: Option<u32>,
}

/// `/albums/{id}` payload
#[derive(Debug, Clone, Deserialize)]
pub struct AlbumResponse {
    pub album: Option<AlbumDto>,
}

/// `/albums/{id}/tracks` payload
#[derive(Debug, Clone, Deserialize)]
pub struct AlbumTracksResponse {
    #[serde(default)]
    pub tracks: Vec<TrackDto>,
    pub next_page: Option<u32>,
}

/// `/annotations/{id}` payload
#[derive(Debug, Clone, Deserialize)]
pub struct AnnotationResponse {
    pub annotation: AnnotationDto,
}

/// `/account` payload
#[derive(Debug, Clone, Deserialize)]
pub struct AccountResponse {
    pub user: UserDto,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================
