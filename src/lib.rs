//! lyric-minder - a Genius client with lyrics extraction.
//!
//! Resolves songs, artists and albums through the Genius search and
//! detail APIs, and recovers plain-text lyrics by scraping the rendered
//! song pages (the provider exposes lyrics as HTML only).
//!
//! # Architecture
//!
//! - **Domain models** (`model`) - Internal types that represent resolved
//!   records; they don't change when the provider's API changes
//! - **API DTOs** (`api::dto`) - Exact API response shapes
//! - **Adapter** (`api::adapter`) - Converts DTOs to domain models
//! - **Client** (`api::client`) - HTTP transport with retry for both the
//!   JSON API and raw page fetches
//! - **Lyrics** (`lyrics`) - HTML-to-text extraction from lyrics pages
//! - **Service** (`service`) - High-level orchestration of resolution
//!
//! # Usage
//!
//! ```ignore
//! use lyric_minder::{Genius, GeniusConfig};
//!
//! let genius = Genius::new(GeniusConfig::with_token("your-token"))?;
//!
//! if let Some(song) = genius.search_song("Hello", Some("Adele")).await? {
//!     println!("{} - {}", song.artist_name(), song.title());
//!     println!("{}", song.lyrics());
//! }
//! ```
//!
//! Resolution separates "nothing matched" from failure: operations return
//! `Ok(None)` when no acceptable candidate exists and `Err` only when a
//! call itself failed. Lyrics extraction is best-effort; a page without a
//! recognizable lyrics section yields a song without lyrics (or `None`
//! under the skip-non-songs policy), never an error.

pub mod api;
pub mod config;
pub mod error;
pub mod lyrics;
pub mod model;
pub mod service;
pub mod text;

mod search;

pub use api::SortOrder;
pub use config::{DEFAULT_EXCLUDED_TERMS, GeniusConfig, TextFormat};
pub use error::{Error, Result};
pub use lyrics::extract_lyrics;
pub use model::{Album, AlbumRef, Artist, ArtistRef, ArtistSummary, LyricsState, Song};
pub use service::{ArtistQuery, Genius};
