//! Adapter layer: Convert Genius DTOs to domain models
//!
//! This is the ONLY place where DTO types are converted to domain types,
//! and the only place that inspects a search hit's raw payload. If the
//! provider changes its response format, this file and dto.rs change;
//! nothing else does.

use chrono::NaiveDate;
use tracing::warn;

use super::dto;
use crate::model::{Album, AlbumRef, Artist, ArtistRef, ArtistSummary, LyricsState, Song};

/// Parse a hit's payload as a song when the hit is tagged as one.
///
/// A song-tagged hit whose payload fails validation is dropped with a
/// warning rather than aborting the whole search.
pub(crate) fn song_from_hit(hit: &dto::Hit) -> Option<dto::SongDto> {
    if hit.index != "song" {
        return None;
    }
    match serde_json::from_value(hit.result.clone()) {
        Ok(song) => Some(song),
        Err(e) => {
            warn!(error = %e, "Dropping malformed song hit");
            None
        }
    }
}

/// The name/title a hit would be matched against during disambiguation:
/// song payloads carry `title`, artist and album payloads carry `name`.
pub(crate) fn hit_display_name(hit: &dto::Hit) -> Option<&str> {
    hit.result
        .get("title")
        .or_else(|| hit.result.get("name"))
        .and_then(|v| v.as_str())
}

/// The primary-artist identifier reachable from a hit.
///
/// Song payloads nest it under `primary_artist`; for a hit that IS an
/// artist payload, the payload's own id is the artist id.
pub(crate) fn primary_artist_id(hit: &dto::Hit) -> Option<u64> {
    hit.result
        .pointer("/primary_artist/id")
        .and_then(|v| v.as_u64())
        .or_else(|| {
            if hit.index == "artist" {
                hit.result.get("id").and_then(|v| v.as_u64())
            } else {
                None
            }
        })
}

/// Merge a detail fetch onto a listing record, producing a new record.
///
/// Detail fields win; listing values only survive where the detail
/// response omitted the field. Neither input is mutated, so a record
/// already handed to a collection can never change underneath it.
pub(crate) fn merge_detail(listing: dto::SongDto, detail: dto::SongDto) -> dto::SongDto {
    dto::SongDto {
        id: detail.id,
        title: detail.title,
        url: detail.url,
        path: detail.path.or(listing.path),
        lyrics_state: detail.lyrics_state.or(listing.lyrics_state),
        instrumental: detail.instrumental || listing.instrumental,
        primary_artist: detail.primary_artist,
        featured_artists: if detail.featured_artists.is_empty() {
            listing.featured_artists
        } else {
            detail.featured_artists
        },
        producer_artists: if detail.producer_artists.is_empty() {
            listing.producer_artists
        } else {
            detail.producer_artists
        },
        writer_artists: if detail.writer_artists.is_empty() {
            listing.writer_artists
        } else {
            detail.writer_artists
        },
        album: detail.album.or(listing.album),
        release_date: detail.release_date.or(listing.release_date),
        release_date_for_display: detail
            .release_date_for_display
            .or(listing.release_date_for_display),
        song_art_image_url: detail.song_art_image_url.or(listing.song_art_image_url),
        stats: detail.stats.or(listing.stats),
    }
}

/// Build the domain song from its payload plus extracted lyrics.
pub(crate) fn to_song(dto: dto::SongDto, lyrics: String) -> Song {
    let release_date = dto
        .release_date
        .as_deref()
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok());

    Song {
        id: dto.id,
        title: dto.title,
        url: dto.url,
        path: dto.path,
        artist: to_artist_ref(dto.primary_artist),
        featured_artists: dto.featured_artists.into_iter().map(to_artist_ref).collect(),
        producer_artists: dto.producer_artists.into_iter().map(to_artist_ref).collect(),
        writer_artists: dto.writer_artists.into_iter().map(to_artist_ref).collect(),
        album: dto.album.map(to_album_ref),
        lyrics_state: LyricsState::from_provider(dto.lyrics_state.as_deref()),
        instrumental: dto.instrumental,
        lyrics,
        release_date,
        release_date_display: dto.release_date_for_display,
        art_url: dto.song_art_image_url,
    }
}

/// Build the domain artist with an empty song collection.
pub(crate) fn to_artist(dto: dto::ArtistDto) -> Artist {
    Artist {
        id: dto.id,
        name: dto.name,
        url: dto.url,
        // The detail payload may only carry the header variant
        image_url: dto.image_url.or(dto.header_image_url),
        verified: dto.is_verified,
        meme_verified: dto.is_meme_verified,
        followers: dto.followers_count,
        songs: Vec::new(),
    }
}

/// Build the domain album around its already-resolved track list.
pub(crate) fn to_album(dto: dto::AlbumDto, tracks: Vec<Song>) -> Album {
    Album {
        id: dto.id,
        name: dto.name,
        full_title: dto.full_title,
        url: dto.url,
        cover_art_url: dto.cover_art_url,
        release_date_display: dto.release_date_for_display,
        description: dto.description.and_then(|d| d.plain),
        artist: ArtistSummary {
            id: dto.artist.id,
            name: dto.artist.name,
            url: dto.artist.url,
            image_url: dto.artist.image_url.or(dto.artist.header_image_url),
            verified: dto.artist.is_verified,
        },
        tracks,
    }
}

fn to_artist_ref(dto: dto::ArtistRefDto) -> ArtistRef {
    ArtistRef {
        id: dto.id,
        name: dto.name,
        url: dto.url,
    }
}

fn to_album_ref(dto: dto::AlbumRefDto) -> AlbumRef {
    AlbumRef {
        id: dto.id,
        name: dto.name,
        url: dto.url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn listing_song(id: u64, title: &str) -> dto::SongDto {
        serde_json::from_value(json!({
            "id": id,
            "title": title,
            "url": format!("https://genius.com/{id}"),
            "path": format!("/{id}"),
            "lyrics_state": "complete",
            "primary_artist": {"id": 10, "name": "A"}
        }))
        .unwrap()
    }

    fn hit(index: &str, result: serde_json::Value) -> dto::Hit {
        dto::Hit {
            index: index.to_string(),
            hit_type: Some(index.to_string()),
            result,
        }
    }

    #[test]
    fn test_song_from_hit_requires_song_index() {
        let song_hit = hit("song", json!({
            "id": 1, "title": "One", "url": "https://genius.com/1",
            "lyrics_state": "complete",
            "primary_artist": {"id": 10, "name": "A"}
        }));
        assert_eq!(song_from_hit(&song_hit).unwrap().title, "One");

        let artist_hit = hit("artist", json!({"id": 10, "name": "A"}));
        assert!(song_from_hit(&artist_hit).is_none());
    }

    #[test]
    fn test_song_from_hit_drops_malformed_payload() {
        let bad = hit("song", json!({"title": "no id or artist"}));
        assert!(song_from_hit(&bad).is_none());
    }

    #[test]
    fn test_hit_display_name_by_payload_kind() {
        let song_hit = hit("song", json!({"id": 1, "title": "One"}));
        assert_eq!(hit_display_name(&song_hit), Some("One"));

        let artist_hit = hit("artist", json!({"id": 10, "name": "A"}));
        assert_eq!(hit_display_name(&artist_hit), Some("A"));
    }

    #[test]
    fn test_primary_artist_id_from_song_and_artist_hits() {
        let song_hit = hit("song", json!({"id": 1, "primary_artist": {"id": 10}}));
        assert_eq!(primary_artist_id(&song_hit), Some(10));

        let artist_hit = hit("artist", json!({"id": 22, "name": "A"}));
        assert_eq!(primary_artist_id(&artist_hit), Some(22));

        let album_hit = hit("album", json!({"id": 5, "name": "LP"}));
        assert_eq!(primary_artist_id(&album_hit), None);
    }

    #[test]
    fn test_merge_detail_prefers_detail_fills_gaps() {
        let mut listing = listing_song(1, "One");
        listing.song_art_image_url = Some("listing-art.jpg".to_string());

        let mut detail = listing_song(1, "One (Remastered)");
        detail.release_date = Some("2015-10-23".to_string());
        detail.song_art_image_url = None;

        let merged = merge_detail(listing, detail);

        // Detail wins where it answered
        assert_eq!(merged.title, "One (Remastered)");
        assert_eq!(merged.release_date.as_deref(), Some("2015-10-23"));
        // Listing survives where detail had nothing
        assert_eq!(merged.song_art_image_url.as_deref(), Some("listing-art.jpg"));
    }

    #[test]
    fn test_to_song_parses_release_date() {
        let mut dto = listing_song(1, "One");
        dto.release_date = Some("2015-10-23".to_string());

        let song = to_song(dto, "la la".to_string());

        assert_eq!(
            song.release_date(),
            Some(NaiveDate::from_ymd_opt(2015, 10, 23).unwrap())
        );
        assert!(song.has_lyrics());
        assert!(song.lyrics_state().is_complete());
    }

    #[test]
    fn test_to_song_tolerates_unparsable_date() {
        let mut dto = listing_song(1, "One");
        dto.release_date = Some("October 2015".to_string());

        let song = to_song(dto, String::new());
        assert!(song.release_date().is_none());
    }

    #[test]
    fn test_to_artist_falls_back_to_header_image() {
        let dto: dto::ArtistDto = serde_json::from_value(json!({
            "id": 10,
            "name": "A",
            "header_image_url": "header.jpg",
            "is_verified": true
        }))
        .unwrap();

        let artist = to_artist(dto);
        assert_eq!(artist.image_url(), Some("header.jpg"));
        assert!(artist.is_verified());
        assert_eq!(artist.num_songs(), 0);
    }
}
