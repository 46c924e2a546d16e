use crate::{
    error::Result,
    types::{AudioFeatures, AudioFeaturesResponse, Track, TrackInfo},
};

use super::CatalogFetcher;

impl CatalogFetcher<'_> {
    /// Fetches audio features for a batch of tracks in one call.
    ///
    /// The returned vector is positionally parallel to `tracks`: entry `i`
    /// belongs to `tracks[i]`, and `None` means the service has no features for
    /// that track. An empty batch makes no request.
    pub async fn audio_features(&self, tracks: &[Track]) -> Result<Vec<Option<AudioFeatures>>> {
        if tracks.is_empty() {
            return Ok(Vec::new());
        }

        let track_ids = tracks
            .iter()
            .map(|t| t.id.as_str())
            .collect::<Vec<_>>()
            .join(",");

        let api_url = self.url("audio-features");
        let res: AudioFeaturesResponse = self
            .client
            .get(&api_url, Some(self.token), &[("ids", track_ids.as_str())])
            .await?;

        Ok(res.audio_features)
    }

    /// Popularity score (0-100) of a single track.
    pub async fn track_popularity(&self, track_id: &str) -> Result<u32> {
        let api_url = self.url(&format!("tracks/{id}", id = track_id));
        let info: TrackInfo = self.client.get(&api_url, Some(self.token), &[]).await?;
        Ok(info.popularity)
    }
}
