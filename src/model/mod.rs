//! Domain records produced by resolution.
//!
//! These types are OUR types - they don't change when the provider's API
//! changes. All provider responses get converted into these via the
//! adapter layer in `api`.
//!
//! All three records are read-only snapshots of provider state: they are
//! assembled once at the end of a successful resolution and carry no
//! operations that mutate anything provider-side. The only post-creation
//! mutation anywhere is [`Artist::add_song`], which the resolver uses
//! while paginating a song listing.

mod album;
mod artist;
mod song;

pub use album::{Album, ArtistSummary};
pub use artist::Artist;
pub use song::{AlbumRef, ArtistRef, LyricsState, Song};
