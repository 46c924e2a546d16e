//! MusicBrainz artist search, used to find an artist's country of origin.

use serde::Deserialize;

use crate::{error::Result, http::ResilientClient};

#[derive(Deserialize)]
struct ArtistSearchResponse {
    #[serde(default)]
    artists: Vec<MbArtist>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MbArtist {
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
}

/// First match of a free-text artist search, `None` if nothing matched.
pub async fn search_artist(
    client: &ResilientClient,
    api_url: &str,
    artist_name: &str,
) -> Result<Option<MbArtist>> {
    let url = format!("{}/artist/", api_url.trim_end_matches('/'));
    let body: ArtistSearchResponse = client
        .get(&url, None, &[("query", artist_name), ("fmt", "json")])
        .await?;

    Ok(body.artists.into_iter().next())
}
