//! Search-hit disambiguation.
//!
//! A search returns hits from several catalogs at once, and the song
//! catalog is full of entries that are not actually lyric pages (track
//! listings, booklet scans, interviews). The selection rules here pick
//! one candidate out of a hit list, preferring an exact title match and
//! falling back through the lyrics-validity test.

use regex::{Regex, RegexBuilder};

use crate::api::adapter;
use crate::api::dto::{Hit, SongDto};
use crate::error::{Error, Result};
use crate::text::clean_str;

/// Compile exclusion terms into a single case-insensitive alternation.
///
/// `None` when there are no terms (every title passes). A malformed term
/// is a configuration error surfaced at client construction, not at
/// match time.
pub(crate) fn compile_excluded_terms(terms: &[String]) -> Result<Option<Regex>> {
    if terms.is_empty() {
        return Ok(None);
    }

    let pattern = terms
        .iter()
        .map(|t| format!("({t})"))
        .collect::<Vec<_>>()
        .join("|");

    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .map(Some)
        .map_err(|e| Error::Config(format!("invalid exclusion pattern: {e}")))
}

/// The lyrics-validity test: can this entry carry lyrics worth fetching?
///
/// Requires complete, non-instrumental lyrics and a title that matches no
/// exclusion pattern (patterns run against the cleaned title).
pub(crate) fn is_valid_song(song: &SongDto, excluded: Option<&Regex>) -> bool {
    if song.lyrics_state.as_deref() != Some("complete") || song.instrumental {
        return false;
    }
    match excluded {
        Some(pattern) => !pattern.is_match(&clean_str(&song.title)),
        None => true,
    }
}

/// Pick a song out of the hit list for the given query title.
///
/// Selection order among song-tagged hits:
/// 1. first exact title match (case/punctuation-insensitive)
/// 2. with `skip_non_songs`, first hit passing the lyrics-validity test
/// 3. the first hit
///
/// `None` when the list carries no (parsable) song-tagged hits at all.
pub(crate) fn pick_song(
    hits: &[Hit],
    query_title: &str,
    skip_non_songs: bool,
    excluded: Option<&Regex>,
) -> Option<SongDto> {
    let songs: Vec<SongDto> = hits.iter().filter_map(adapter::song_from_hit).collect();
    if songs.is_empty() {
        return None;
    }

    let wanted = clean_str(query_title);
    if let Some(exact) = songs.iter().find(|s| clean_str(&s.title) == wanted) {
        return Some(exact.clone());
    }

    if skip_non_songs
        && let Some(valid) = songs.iter().find(|s| is_valid_song(s, excluded))
    {
        return Some(valid.clone());
    }

    songs.into_iter().next()
}

/// Locate the artist identifier behind an artist query.
///
/// Among artist-tagged hits, an exact name match wins, then the first
/// one. Searches are usually dominated by the song catalog and often
/// return no artist-tagged hits at all; in that case the very first hit
/// of any type is used and its primary-artist identifier is read off it.
pub(crate) fn pick_artist_id(hits: &[Hit], query_name: &str) -> Option<u64> {
    let artist_hits: Vec<&Hit> = hits.iter().filter(|h| h.index == "artist").collect();

    if artist_hits.is_empty() {
        return adapter::primary_artist_id(hits.first()?);
    }

    let wanted = clean_str(query_name);
    let chosen = artist_hits
        .iter()
        .find(|h| adapter::hit_display_name(h).is_some_and(|n| clean_str(n) == wanted))
        .copied()
        .or_else(|| artist_hits.first().copied())?;

    adapter::primary_artist_id(chosen)
}
