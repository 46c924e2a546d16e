//! One artist lookup from credentials to report.
//!
//! ```text
//! TokenProvider ──▶ CatalogFetcher ──▶ assemble_dataset ──▶ LocationEnricher
//!   (token)        (search, albums,     (dates, sort,        (MusicBrainz,
//!                   tracks, features,    name filter)          OpenCage)
//!                   popularity)
//! ```
//!
//! Every step runs strictly after the previous one. A terminal error anywhere
//! aborts the lookup and nothing partial is returned.

use crate::{
    config::Settings,
    error::{FetchError, Result},
    http::{ExponentialBackoff, ResilientClient},
    location::LocationEnricher,
    spotify::{CatalogFetcher, TokenProvider},
    types::ArtistReport,
    utils,
};

pub struct ArtistExplorer {
    settings: Settings,
    client: ResilientClient,
}

impl ArtistExplorer {
    /// Builds an explorer with a fresh HTTP client tuned from `settings`.
    pub fn new(settings: Settings) -> Result<Self> {
        let client = ResilientClient::with_user_agent()?;
        Ok(Self::with_client(settings, client))
    }

    /// Uses `client` as given except for the retry count and backoff base,
    /// which always come from `settings`.
    pub fn with_client(settings: Settings, client: ResilientClient) -> Self {
        let client = client
            .max_retries(settings.max_retries)
            .backoff(ExponentialBackoff::new(settings.backoff_base));
        Self { settings, client }
    }

    /// Fetches, merges and enriches the catalog of `artist_name`.
    ///
    /// A new token is requested for every call. Running the same lookup twice
    /// against an unchanged catalog issues the same requests and yields the
    /// same report.
    pub async fn explore(&self, artist_name: &str) -> Result<ArtistReport> {
        let artist_name = artist_name.trim();
        if artist_name.is_empty() {
            return Err(FetchError::MissingInput("artist name"));
        }
        self.settings.validate()?;

        let endpoints = &self.settings.endpoints;
        let token = TokenProvider::new(self.client.http(), &endpoints.spotify_token_url)
            .acquire(&self.settings.credentials)
            .await?;

        let catalog = CatalogFetcher::new(&self.client, &endpoints.spotify_api_url, &token);
        let artist = catalog.search_artist(artist_name).await?;
        let records = catalog.collect_records(&artist).await?;
        let songs = utils::assemble_dataset(records)?;

        let location = LocationEnricher::new(
            &self.client,
            &endpoints.musicbrainz_api_url,
            &endpoints.opencage_api_url,
            &self.settings.opencage_api_key,
        )
        .locate(artist_name, &artist)
        .await?;

        Ok(ArtistReport {
            artist,
            songs,
            location,
        })
    }
}
