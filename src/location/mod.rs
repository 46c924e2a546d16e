//! Where an artist comes from.
//!
//! The artist name is looked up on MusicBrainz for a country, and the country
//! is geocoded with OpenCage. Both steps degrade instead of failing: no
//! MusicBrainz match means no location at all, a match without a country is
//! geocoded as `Unknown`, and an empty geocode result yields `(0, 0)`.

pub mod geocode;
pub mod musicbrainz;

use crate::{
    error::Result,
    http::ResilientClient,
    types::{Artist, ArtistLocation},
};

pub const UNKNOWN_ORIGIN: &str = "Unknown";
pub const UNRESOLVED_COORDINATES: (f64, f64) = (0.0, 0.0);

pub struct LocationEnricher<'a> {
    client: &'a ResilientClient,
    musicbrainz_url: &'a str,
    geocode_url: &'a str,
    geocode_key: &'a str,
}

impl<'a> LocationEnricher<'a> {
    pub fn new(
        client: &'a ResilientClient,
        musicbrainz_url: &'a str,
        geocode_url: &'a str,
        geocode_key: &'a str,
    ) -> Self {
        Self {
            client,
            musicbrainz_url,
            geocode_url,
            geocode_key,
        }
    }

    /// Resolves the origin of `query_name` and pins it with `artist`'s
    /// popularity and follower counts.
    ///
    /// Returns `Ok(None)` when MusicBrainz has no match. HTTP failures of
    /// either service are propagated.
    pub async fn locate(&self, query_name: &str, artist: &Artist) -> Result<Option<ArtistLocation>> {
        let Some(mb_artist) =
            musicbrainz::search_artist(self.client, self.musicbrainz_url, query_name).await?
        else {
            return Ok(None);
        };

        let origin = mb_artist
            .country
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_ORIGIN.to_string());

        let (lat, lon) = geocode::locate(self.client, self.geocode_url, self.geocode_key, &origin)
            .await?
            .unwrap_or(UNRESOLVED_COORDINATES);

        Ok(Some(ArtistLocation {
            name: mb_artist.name,
            origin,
            popularity: artist.popularity,
            followers: artist.followers,
            lat,
            lon,
        }))
    }
}
