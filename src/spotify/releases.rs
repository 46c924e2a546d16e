use crate::{
    error::Result,
    types::{Album, AlbumResponse, Track, TracksResponse},
};

use super::CatalogFetcher;

const ALBUM_LIMIT: &str = "50";

impl CatalogFetcher<'_> {
    /// Retrieves the studio albums of an artist.
    ///
    /// Fetches up to 50 albums from `/artists/{id}/albums` with
    /// `include_groups=album` and keeps only entries whose `album_group` and
    /// `album_type` are both `album`. An empty result is not an error; the
    /// later steps simply produce no records.
    pub async fn studio_albums(&self, artist_id: &str) -> Result<Vec<Album>> {
        let api_url = self.url(&format!("artists/{id}/albums", id = artist_id));
        let res: AlbumResponse = self
            .client
            .get(
                &api_url,
                Some(self.token),
                &[("include_groups", "album"), ("limit", ALBUM_LIMIT)],
            )
            .await?;

        Ok(res
            .items
            .into_iter()
            .filter(Album::is_studio_album)
            .collect())
    }

    /// Retrieves the track list of an album in a single call.
    ///
    /// The endpoint's default page size applies and no further pages are
    /// requested, so long albums may come back truncated.
    pub async fn album_tracks(&self, album_id: &str) -> Result<Vec<Track>> {
        let api_url = self.url(&format!("albums/{id}/tracks", id = album_id));
        let res: TracksResponse = self.client.get(&api_url, Some(self.token), &[]).await?;

        Ok(res
            .items
            .into_iter()
            .map(|t| Track {
                id: t.id,
                name: t.name,
                duration_ms: t.duration_ms,
                album_id: album_id.to_string(),
            })
            .collect())
    }
}
