//! A resolved album and its ordered track list.

use serde::Serialize;

use super::song::Song;

/// Album-owning artist, captured by value at resolution time (no live
/// link back to an [`super::Artist`] record).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistSummary {
    pub id: u64,
    pub name: String,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub verified: bool,
}

/// A resolved album.
///
/// The track list is assembled once while paginating the track listing
/// and is not mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Album {
    pub(crate) id: u64,
    pub(crate) name: String,
    pub(crate) full_title: Option<String>,
    pub(crate) url: Option<String>,
    pub(crate) cover_art_url: Option<String>,
    pub(crate) release_date_display: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) artist: ArtistSummary,
    pub(crate) tracks: Vec<Song>,
}

impl Album {
    /// Provider-assigned identifier
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display title including the artist ("25 by Adele")
    pub fn full_title(&self) -> Option<&str> {
        self.full_title.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn cover_art_url(&self) -> Option<&str> {
        self.cover_art_url.as_deref()
    }

    pub fn release_date_display(&self) -> Option<&str> {
        self.release_date_display.as_deref()
    }

    /// Plain-text album description, when the provider has one
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Owning artist snapshot
    pub fn artist(&self) -> &ArtistSummary {
        &self.artist
    }

    pub fn artist_name(&self) -> &str {
        &self.artist.name
    }

    /// Tracks in album order
    pub fn tracks(&self) -> &[Song] {
        &self.tracks
    }

    pub fn num_tracks(&self) -> usize {
        self.tracks.len()
    }

    /// Look up a track by title, case-insensitively. First match wins.
    pub fn track(&self, title: &str) -> Option<&Song> {
        let wanted = title.to_lowercase();
        self.tracks
            .iter()
            .find(|t| t.title.to_lowercase() == wanted)
    }
}
