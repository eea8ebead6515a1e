//! Resolution service - turns queries and identifiers into domain records
//!
//! This is the high-level API of the crate:
//! 1. Search and disambiguate (or skip straight to a detail fetch by id)
//! 2. Enrich the candidate from the detail endpoint
//! 3. Scrape the lyrics page and extract plain text
//! 4. Assemble the domain record
//!
//! Every operation is a strictly sequential chain of network round-trips;
//! artist and album pagination processes one song at a time as a
//! politeness trade-off toward the provider. Transport failures bubble
//! unmodified; "nothing matched" is a `None` return so callers can tell
//! it apart from a failed call.

use regex::Regex;
use tracing::{info, warn};

use crate::api::{ApiClient, SortOrder, adapter, dto};
use crate::config::GeniusConfig;
use crate::error::Result;
use crate::model::{Album, Artist, Song};
use crate::{lyrics, search, text};

/// Albums page their track listings at a fixed size.
const ALBUM_PAGE_SIZE: u32 = 50;

/// Options for artist resolution.
#[derive(Debug, Clone)]
pub struct ArtistQuery {
    /// Stop after this many collected songs; `None` drains the listing.
    /// `Some(0)` skips the song listing entirely.
    pub max_songs: Option<usize>,
    /// Listing sort order
    pub sort: SortOrder,
    /// Listing page size
    pub per_page: u32,
    /// Re-fetch full detail for every collected song (the listing
    /// endpoint returns a trimmed record)
    pub full_info: bool,
    /// Adopt the provider's canonical artist name when it differs from
    /// the query
    pub allow_name_change: bool,
    /// Known artist identifier; skips the search round-trip
    pub artist_id: Option<u64>,
    /// Also collect songs where the artist is featured rather than
    /// primary
    pub include_features: bool,
}

impl Default for ArtistQuery {
    fn default() -> Self {
        Self {
            max_songs: None,
            sort: SortOrder::Popularity,
            per_page: 20,
            full_info: true,
            allow_name_change: true,
            artist_id: None,
            include_features: false,
        }
    }
}

/// Genius resolution client.
///
/// Construction compiles the exclusion-term alternation and builds the
/// shared HTTP client; everything on the instance is read-only
/// afterwards, so one client can serve any number of sequential
/// resolutions.
pub struct Genius {
    api: ApiClient,
    verbose: bool,
    remove_section_headers: bool,
    skip_non_songs: bool,
    excluded: Option<Regex>,
}

impl Genius {
    /// Create a client from the given configuration.
    ///
    /// Fails when a user-supplied exclusion term is not a valid pattern.
    pub fn new(config: GeniusConfig) -> Result<Self> {
        let excluded = search::compile_excluded_terms(&config.effective_excluded_terms())?;

        Ok(Self {
            api: ApiClient::new(&config),
            verbose: config.verbose,
            remove_section_headers: config.remove_section_headers,
            skip_non_songs: config.skip_non_songs,
            excluded,
        })
    }

    /// Create a client with defaults and the token from the environment.
    pub fn from_env() -> Result<Self> {
        Self::new(GeniusConfig::default())
    }

    /// Create a client for testing with custom base URLs
    #[cfg(test)]
    pub(crate) fn with_base_urls(
        config: GeniusConfig,
        api_base: impl Into<String>,
        web_base: impl Into<String>,
    ) -> Result<Self> {
        let excluded = search::compile_excluded_terms(&config.effective_excluded_terms())?;
        Ok(Self {
            api: ApiClient::with_base_urls(&config, api_base, web_base),
            verbose: config.verbose,
            remove_section_headers: config.remove_section_headers,
            skip_non_songs: config.skip_non_songs,
            excluded,
        })
    }

    /// Raw endpoint access for callers that need payloads the resolution
    /// operations don't surface (annotations, the authenticated account).
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Resolve a song from a title (and optionally an artist name).
    ///
    /// Searches, disambiguates among song hits, enriches the winner from
    /// the detail endpoint and fetches its lyrics. With `skip_non_songs`
    /// enabled (the default), candidates that cannot carry lyrics and
    /// candidates whose page yields no lyrics text resolve to `None`.
    pub async fn search_song(&self, title: &str, artist: Option<&str>) -> Result<Option<Song>> {
        if self.verbose {
            info!(title, artist = artist.unwrap_or(""), "Searching for song");
        }

        let term = match artist {
            Some(artist) => format!("{} {}", title.trim(), artist.trim()),
            None => title.trim().to_string(),
        };
        let response = self.api.search(&term).await?;

        let Some(candidate) = search::pick_song(
            &response.hits,
            title,
            self.skip_non_songs,
            self.excluded.as_ref(),
        ) else {
            if self.verbose {
                info!(title, "No results found");
            }
            return Ok(None);
        };

        if self.skip_non_songs && !search::is_valid_song(&candidate, self.excluded.as_ref()) {
            if self.verbose {
                info!(title = %candidate.title, "Result cannot carry lyrics, rejecting");
            }
            return Ok(None);
        }

        // Search hits are trimmed records; enrich from the detail endpoint
        let candidate = match self.api.song(candidate.id).await?.song {
            Some(detail) => adapter::merge_detail(candidate, detail),
            None => candidate,
        };

        self.finish_song(candidate).await
    }

    /// Resolve a song directly by its identifier.
    ///
    /// Same validity and lyrics rules as [`Genius::search_song`], with no
    /// search disambiguation. An unknown id surfaces as a client error
    /// from the transport; a withdrawn entry resolves to `None`.
    pub async fn song_by_id(&self, song_id: u64) -> Result<Option<Song>> {
        let Some(candidate) = self.api.song(song_id).await?.song else {
            return Ok(None);
        };

        if self.skip_non_songs && !search::is_valid_song(&candidate, self.excluded.as_ref()) {
            if self.verbose {
                info!(title = %candidate.title, "Result cannot carry lyrics, rejecting");
            }
            return Ok(None);
        }

        self.finish_song(candidate).await
    }

    /// Shared tail of song resolution: lyrics fetch, the empty-lyrics
    /// gate, domain construction.
    async fn finish_song(&self, candidate: dto::SongDto) -> Result<Option<Song>> {
        let lyrics = if wants_lyrics(&candidate) {
            self.page_lyrics(&candidate, None).await.unwrap_or_default()
        } else {
            String::new()
        };

        if self.skip_non_songs && lyrics.is_empty() {
            if self.verbose {
                info!(title = %candidate.title, "No lyrics recovered, rejecting");
            }
            return Ok(None);
        }

        let song = adapter::to_song(candidate, lyrics);
        if self.verbose {
            info!(title = %song.title(), "Resolved song");
        }
        Ok(Some(song))
    }

    /// Resolve an artist and collect their songs.
    ///
    /// Locates the artist (search round-trip unless `query.artist_id` is
    /// given), fetches their profile, then pages through the song listing
    /// collecting qualifying songs until the listing is exhausted or
    /// `query.max_songs` is reached - at which point pagination stops
    /// immediately, even mid-page.
    pub async fn search_artist(&self, name: &str, query: &ArtistQuery) -> Result<Option<Artist>> {
        let artist_id = match query.artist_id {
            Some(id) => id,
            None => {
                if self.verbose {
                    info!(name, "Searching for artist");
                }
                let response = self.api.search(name.trim()).await?;
                match search::pick_artist_id(&response.hits, name) {
                    Some(id) => id,
                    None => {
                        if self.verbose {
                            info!(name, "No results found");
                        }
                        return Ok(None);
                    }
                }
            }
        };

        let detail = self.api.artist(artist_id).await?.artist;
        let mut artist = adapter::to_artist(detail);

        if artist.name() != name {
            if query.allow_name_change {
                if self.verbose {
                    info!(from = name, to = %artist.name(), "Using canonical artist name");
                }
            } else {
                artist.name = name.to_string();
            }
        }

        if query.max_songs == Some(0) {
            return Ok(Some(artist));
        }

        let mut page = Some(1u32);
        'pages: while let Some(current) = page {
            let listing = self
                .api
                .artist_songs(artist.id(), query.sort, query.per_page, current)
                .await?;

            for song_dto in listing.songs {
                if self.skip_non_songs && !search::is_valid_song(&song_dto, self.excluded.as_ref())
                {
                    if self.verbose {
                        info!(title = %song_dto.title, "Skipping: not a valid song");
                    }
                    continue;
                }

                let lyrics = if song_dto.lyrics_state.as_deref() == Some("complete") {
                    self.page_lyrics(&song_dto, None).await.unwrap_or_default()
                } else {
                    String::new()
                };

                let song_dto = if query.full_info {
                    match self.api.song(song_dto.id).await?.song {
                        Some(detail) => adapter::merge_detail(song_dto, detail),
                        None => song_dto,
                    }
                } else {
                    song_dto
                };

                let song = adapter::to_song(song_dto, lyrics);
                let title = song.title().to_string();
                if artist.add_song(song, query.include_features).is_some() && self.verbose {
                    info!(num = artist.num_songs(), title = %title, "Added song");
                }

                if let Some(cap) = query.max_songs
                    && artist.num_songs() >= cap
                {
                    if self.verbose {
                        info!(cap, "Reached song limit");
                    }
                    break 'pages;
                }
            }

            page = listing.next_page;
        }

        if self.verbose {
            info!(name = %artist.name(), count = artist.num_songs(), "Finished artist resolution");
        }
        Ok(Some(artist))
    }

    /// Resolve an album and its full track list by identifier.
    ///
    /// Pages through the track listing in album order, fetching lyrics
    /// for every complete, non-instrumental track. Album tracks are
    /// trusted by construction: neither the exclusion patterns nor the
    /// skip policy apply to them.
    pub async fn search_album(&self, album_id: u64) -> Result<Option<Album>> {
        if self.verbose {
            info!(album_id, "Fetching album");
        }

        let Some(album_dto) = self.api.album(album_id).await?.album else {
            if self.verbose {
                info!(album_id, "No album found");
            }
            return Ok(None);
        };

        let mut tracks = Vec::new();
        let mut page = Some(1u32);
        while let Some(current) = page {
            let listing = self
                .api
                .album_tracks(album_dto.id, ALBUM_PAGE_SIZE, current)
                .await?;

            for track in listing.tracks {
                let song_dto = track.song;
                let track_lyrics = if wants_lyrics(&song_dto) {
                    self.page_lyrics(&song_dto, None).await.unwrap_or_default()
                } else {
                    String::new()
                };
                tracks.push(adapter::to_song(song_dto, track_lyrics));
            }

            page = listing.next_page;
        }

        if self.verbose {
            info!(name = %album_dto.name, count = tracks.len(), "Resolved album");
        }
        Ok(Some(adapter::to_album(album_dto, tracks)))
    }

    /// Fetch just the lyrics for a song identifier.
    ///
    /// `remove_headers` overrides the instance default for this call.
    /// `None` when the song is unknown to carry lyrics or its page yields
    /// none.
    pub async fn lyrics(
        &self,
        song_id: u64,
        remove_headers: Option<bool>,
    ) -> Result<Option<String>> {
        let Some(song) = self.api.song(song_id).await?.song else {
            return Ok(None);
        };
        Ok(self.page_lyrics(&song, remove_headers).await)
    }

    /// Scrape a song's lyrics page, best-effort.
    ///
    /// Fetch and extraction failures are absorbed into `None` (with a
    /// diagnostic when verbose): lyrics are enrichment, not a
    /// resolution-blocking dependency.
    async fn page_lyrics(&self, song: &dto::SongDto, remove_headers: Option<bool>) -> Option<String> {
        let path = song
            .path
            .clone()
            .or_else(|| page_path(&song.url).map(str::to_string))?;

        let html = match self.api.web_page(&path).await {
            Ok(html) => html,
            Err(e) => {
                if self.verbose {
                    warn!(path, error = %e, "Failed to fetch lyrics page");
                }
                return None;
            }
        };

        let Some(extracted) = lyrics::extract_lyrics(&html) else {
            if self.verbose {
                info!(path, "Couldn't find lyrics section");
            }
            return None;
        };

        if remove_headers.unwrap_or(self.remove_section_headers) {
            Some(text::remove_section_headers(&extracted))
        } else {
            Some(extracted)
        }
    }
}

/// Lyrics are only fetched for complete, non-instrumental entries.
fn wants_lyrics(song: &dto::SongDto) -> bool {
    song.lyrics_state.as_deref() == Some("complete") && !song.instrumental
}

/// Site-relative page path from a full lyrics URL.
fn page_path(url: &str) -> Option<&str> {
    url.strip_prefix("https://genius.com/")
}
