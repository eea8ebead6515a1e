//! A resolved artist and their collected songs.

use serde::Serialize;

use super::song::Song;

/// A resolved artist.
///
/// The song collection is append-only through [`Artist::add_song`], which
/// enforces identifier uniqueness and artist membership. Order of
/// insertion is preserved (it reflects the listing sort order used during
/// resolution).
#[derive(Debug, Clone, Serialize)]
pub struct Artist {
    pub(crate) id: u64,
    pub(crate) name: String,
    pub(crate) url: Option<String>,
    pub(crate) image_url: Option<String>,
    pub(crate) verified: bool,
    pub(crate) meme_verified: bool,
    pub(crate) followers: Option<u64>,
    pub(crate) songs: Vec<Song>,
}

impl Artist {
    /// Provider-assigned identifier
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Canonical name (may differ from the search query)
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn is_verified(&self) -> bool {
        self.verified
    }

    pub fn is_meme_verified(&self) -> bool {
        self.meme_verified
    }

    pub fn followers(&self) -> Option<u64> {
        self.followers
    }

    /// Collected songs in insertion order
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn num_songs(&self) -> usize {
        self.songs.len()
    }

    /// Append a song to the collection.
    ///
    /// Rejected (returns `None`) when a song with the same identifier is
    /// already present, or when this artist is neither the song's primary
    /// artist nor (with `include_features`) among its featured artists.
    /// Adding the same song twice is a no-op, so the collection size is
    /// stable under repeats.
    pub fn add_song(&mut self, song: Song, include_features: bool) -> Option<&Song> {
        if self.songs.iter().any(|s| s.id == song.id) {
            return None;
        }

        let is_primary = song.artist.id == self.id;
        let is_featured = song.featured_artists.iter().any(|a| a.id == self.id);

        if is_primary || (include_features && is_featured) {
            self.songs.push(song);
            self.songs.last()
        } else {
            None
        }
    }

    /// Look up a collected song by title, case-insensitively. First match
    /// wins.
    pub fn song(&self, title: &str) -> Option<&Song> {
        let wanted = title.to_lowercase();
        self.songs.iter().find(|s| s.title.to_lowercase() == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::song::test_support::song;
    use crate::model::song::ArtistRef;

    fn artist(id: u64) -> Artist {
        Artist {
            id,
            name: format!("artist-{id}"),
            url: None,
            image_url: None,
            verified: false,
            meme_verified: false,
            followers: None,
            songs: Vec::new(),
        }
    }

    #[test]
    fn test_add_song_accepts_primary_artist() {
        let mut a = artist(10);
        let accepted = a.add_song(song(1, "One", 10), false);
        assert!(accepted.is_some());
        assert_eq!(a.num_songs(), 1);
    }

    #[test]
    fn test_add_song_idempotent_by_id() {
        let mut a = artist(10);
        a.add_song(song(1, "One", 10), false);
        // Same id, different title: still a duplicate
        let second = a.add_song(song(1, "One (again)", 10), false);

        assert!(second.is_none());
        assert_eq!(a.num_songs(), 1);
    }

    #[test]
    fn test_add_song_rejects_other_artist() {
        let mut a = artist(10);
        let rejected = a.add_song(song(2, "Two", 99), false);
        assert!(rejected.is_none());
        assert_eq!(a.num_songs(), 0);
    }

    #[test]
    fn test_add_song_featured_membership() {
        let mut a = artist(10);
        let mut featured = song(3, "Three", 99);
        featured.featured_artists.push(ArtistRef {
            id: 10,
            name: "artist-10".to_string(),
            url: None,
        });

        // Features excluded by default
        assert!(a.add_song(featured.clone(), false).is_none());
        // Included on request
        assert!(a.add_song(featured, true).is_some());
        assert_eq!(a.num_songs(), 1);
    }

    #[test]
    fn test_song_lookup_case_insensitive() {
        let mut a = artist(10);
        a.add_song(song(1, "Hello", 10), false);

        assert!(a.song("HELLO").is_some());
        assert!(a.song("hello").is_some());
        assert!(a.song("Hello (Live)").is_none());
    }

    #[test]
    fn test_song_lookup_first_match_wins() {
        let mut a = artist(10);
        a.add_song(song(1, "Same Title", 10), false);
        a.add_song(song(2, "same title", 10), false);

        assert_eq!(a.song("SAME TITLE").unwrap().id(), 1);
    }
}
