//! # Spotify Integration Module
//!
//! This module is the integration layer between artistscope and the Spotify Web
//! API. It obtains an app token and walks an artist's catalog down to the audio
//! features and popularity of every studio-album track.
//!
//! ## Architecture
//!
//! ```text
//! Pipeline (crate::pipeline)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (client credentials grant)
//!     ├── Artist Search
//!     ├── Releases (albums, album tracks)
//!     └── Tracks (audio features, track metadata)
//!          ↓
//! ResilientClient (crate::http, retry/backoff)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - [`TokenProvider`], one `client_credentials` exchange per lookup
//! - [`artists`] - resolves the artist name to the top search match
//! - [`releases`] - studio albums of an artist and the tracks of an album
//! - [`tracks`] - batched audio features and per-track popularity
//! - [`catalog`] - the album → tracks → features → popularity traversal
//!
//! ## API Coverage
//!
//! - `POST /api/token` - token exchange
//! - `GET /search` - artist search, `limit=1`
//! - `GET /artists/{id}/albums` - `include_groups=album`, `limit=50`
//! - `GET /albums/{id}/tracks` - single page, default page size
//! - `GET /audio-features` - comma-joined track ids
//! - `GET /tracks/{id}` - one call per track
//!
//! ## Ordering
//!
//! Every request is awaited before the next one is built. Albums are walked in
//! the order the API lists them and tracks in album order, so two lookups
//! against an unchanged catalog issue the same call sequence.
//!
//! ## Error Types
//!
//! All functions return [`crate::error::Result`]. HTTP failures come from the
//! [`ResilientClient`]; the catalog adds [`FetchError::ArtistNotFound`] and
//! [`FetchError::NoDataCollected`].
//!
//! [`FetchError::ArtistNotFound`]: crate::error::FetchError::ArtistNotFound
//! [`FetchError::NoDataCollected`]: crate::error::FetchError::NoDataCollected

pub mod artists;
pub mod auth;
pub mod catalog;
pub mod releases;
pub mod tracks;

pub use auth::TokenProvider;

use crate::{http::ResilientClient, types::AccessToken};

/// Read access to the catalog endpoints with one bearer token.
///
/// The endpoint operations live next to the endpoint family they cover:
/// [`artists`], [`releases`], [`tracks`] and [`catalog`].
pub struct CatalogFetcher<'a> {
    client: &'a ResilientClient,
    api_url: &'a str,
    token: &'a AccessToken,
}

impl<'a> CatalogFetcher<'a> {
    pub fn new(client: &'a ResilientClient, api_url: &'a str, token: &'a AccessToken) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/'),
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{uri}/{path}", uri = self.api_url, path = path)
    }
}
