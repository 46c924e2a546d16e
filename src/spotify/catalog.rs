use crate::{
    error::{FetchError, Result},
    types::{Album, Artist, FeatureRecord},
};

use super::CatalogFetcher;

impl CatalogFetcher<'_> {
    /// Collects one [`FeatureRecord`] per studio-album track that has audio
    /// features.
    ///
    /// Albums are walked in listing order. For each album the track list and
    /// the batched features are fetched, then every track with a non-null
    /// feature entry costs one more call for its popularity. Tracks without
    /// features are dropped silently.
    ///
    /// # Errors
    ///
    /// [`FetchError::NoDataCollected`] when no album yields a single record,
    /// plus any HTTP error from the underlying calls.
    pub async fn collect_records(&self, artist: &Artist) -> Result<Vec<FeatureRecord>> {
        let albums = self.studio_albums(&artist.id).await?;

        let mut records: Vec<FeatureRecord> = Vec::new();
        for album in &albums {
            self.collect_album(album, &mut records).await?;
        }

        if records.is_empty() {
            return Err(FetchError::NoDataCollected(artist.name.clone()));
        }
        Ok(records)
    }

    async fn collect_album(&self, album: &Album, records: &mut Vec<FeatureRecord>) -> Result<()> {
        let tracks = self.album_tracks(&album.id).await?;
        let features = self.audio_features(&tracks).await?;

        for (track, feature) in tracks.iter().zip(features) {
            let Some(features) = feature else {
                continue;
            };

            let popularity = self.track_popularity(&track.id).await?;
            records.push(FeatureRecord {
                features,
                track_name: track.name.clone(),
                album_name: album.name.clone(),
                release_date: album.release_date.clone(),
                release_date_precision: album.release_date_precision,
                duration_ms: track.duration_ms,
                popularity,
            });
        }

        Ok(())
    }
}
