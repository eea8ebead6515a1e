//! A resolved song with its extracted lyrics.

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

/// Provider-reported completeness of a song's lyrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LyricsState {
    /// Transcription finished; the lyrics page should carry full text
    Complete,
    /// Transcription in progress
    Incomplete,
    /// Any other provider value ("unreleased", missing, ...)
    Other(String),
}

impl LyricsState {
    /// Map the raw provider value; absent values land in `Other`.
    pub(crate) fn from_provider(raw: Option<&str>) -> Self {
        match raw {
            Some("complete") => Self::Complete,
            Some("incomplete") => Self::Incomplete,
            Some(other) => Self::Other(other.to_string()),
            None => Self::Other("unknown".to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Complete => "complete",
            Self::Incomplete => "incomplete",
            Self::Other(s) => s,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

impl Serialize for LyricsState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Lightweight by-value artist reference carried on songs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistRef {
    pub id: u64,
    pub name: String,
    pub url: Option<String>,
}

/// Lightweight by-value album reference carried on songs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlbumRef {
    pub id: u64,
    pub name: String,
    pub url: Option<String>,
}

/// A resolved song.
///
/// Lyrics are set once at construction and never change afterwards; a
/// song with `lyrics_state` complete but empty lyrics means extraction
/// failed against the live page (logged during resolution, not fatal).
///
/// Serializes as a flat snapshot of all fields for persistence
/// collaborators.
#[derive(Debug, Clone, Serialize)]
pub struct Song {
    pub(crate) id: u64,
    pub(crate) title: String,
    pub(crate) url: String,
    pub(crate) path: Option<String>,
    pub(crate) artist: ArtistRef,
    pub(crate) featured_artists: Vec<ArtistRef>,
    pub(crate) producer_artists: Vec<ArtistRef>,
    pub(crate) writer_artists: Vec<ArtistRef>,
    pub(crate) album: Option<AlbumRef>,
    pub(crate) lyrics_state: LyricsState,
    pub(crate) instrumental: bool,
    pub(crate) lyrics: String,
    pub(crate) release_date: Option<NaiveDate>,
    pub(crate) release_date_display: Option<String>,
    pub(crate) art_url: Option<String>,
}

impl Song {
    /// Provider-assigned identifier
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Lyrics page URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Site-relative lyrics page path
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Primary artist
    pub fn artist(&self) -> &ArtistRef {
        &self.artist
    }

    /// Primary artist's name
    pub fn artist_name(&self) -> &str {
        &self.artist.name
    }

    pub fn featured_artists(&self) -> &[ArtistRef] {
        &self.featured_artists
    }

    pub fn producer_artists(&self) -> &[ArtistRef] {
        &self.producer_artists
    }

    pub fn writer_artists(&self) -> &[ArtistRef] {
        &self.writer_artists
    }

    pub fn album(&self) -> Option<&AlbumRef> {
        self.album.as_ref()
    }

    /// Album name, when the song belongs to one
    pub fn album_name(&self) -> Option<&str> {
        self.album.as_ref().map(|a| a.name.as_str())
    }

    pub fn lyrics_state(&self) -> &LyricsState {
        &self.lyrics_state
    }

    pub fn is_instrumental(&self) -> bool {
        self.instrumental
    }

    /// Extracted plain-text lyrics; empty when extraction found nothing
    pub fn lyrics(&self) -> &str {
        &self.lyrics
    }

    /// Whether extraction recovered any lyrics text
    pub fn has_lyrics(&self) -> bool {
        !self.lyrics.is_empty()
    }

    pub fn release_date(&self) -> Option<NaiveDate> {
        self.release_date
    }

    /// Provider's human-readable release date ("October 23, 2015")
    pub fn release_date_display(&self) -> Option<&str> {
        self.release_date_display.as_deref()
    }

    pub fn art_url(&self) -> Option<&str> {
        self.art_url.as_deref()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Bare song for model/service tests.
    pub(crate) fn song(id: u64, title: &str, artist_id: u64) -> Song {
        Song {
            id,
            title: title.to_string(),
            url: format!("https://genius.com/song-{id}"),
            path: Some(format!("/song-{id}")),
            artist: ArtistRef {
                id: artist_id,
                name: format!("artist-{artist_id}"),
                url: None,
            },
            featured_artists: Vec::new(),
            producer_artists: Vec::new(),
            writer_artists: Vec::new(),
            album: None,
            lyrics_state: LyricsState::Complete,
            instrumental: false,
            lyrics: String::new(),
            release_date: None,
            release_date_display: None,
            art_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::test_support::song;

    #[test]
    fn test_lyrics_state_mapping() {
        assert_eq!(
            LyricsState::from_provider(Some("complete")),
            LyricsState::Complete
        );
        assert_eq!(
            LyricsState::from_provider(Some("incomplete")),
            LyricsState::Incomplete
        );
        assert_eq!(
            LyricsState::from_provider(Some("unreleased")),
            LyricsState::Other("unreleased".to_string())
        );
        assert!(!LyricsState::from_provider(None).is_complete());
    }

    #[test]
    fn test_has_lyrics_tracks_text() {
        let mut s = song(1, "One", 10);
        assert!(!s.has_lyrics());

        s.lyrics = "some lines".to_string();
        assert!(s.has_lyrics());
    }

    #[test]
    fn test_snapshot_serializes_all_fields() {
        let s = song(7, "Seven", 10);
        let snapshot = serde_json::to_value(&s).unwrap();

        assert_eq!(snapshot["id"], 7);
        assert_eq!(snapshot["title"], "Seven");
        assert_eq!(snapshot["lyrics_state"], "complete");
        assert_eq!(snapshot["artist"]["id"], 10);
    }
}
