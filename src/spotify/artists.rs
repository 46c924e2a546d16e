use crate::{
    error::{FetchError, Result},
    types::{Artist, SearchResponse},
};

use super::CatalogFetcher;

impl CatalogFetcher<'_> {
    /// Resolves an artist name to the top search match.
    ///
    /// Uses Spotify's `/search` endpoint with `type=artist` and `limit=1`; the
    /// single match becomes the [`Artist`] every later step refers to.
    ///
    /// # Errors
    ///
    /// - [`FetchError::ArtistNotFound`] when the search has no match
    /// - any HTTP error surfaced by the resilient client
    ///
    /// # Example
    ///
    /// ```
    /// let artist = fetcher.search_artist("Led Zeppelin").await?;
    /// println!("{} has {} followers", artist.name, artist.followers);
    /// ```
    pub async fn search_artist(&self, artist_name: &str) -> Result<Artist> {
        let api_url = self.url("search");
        let res: SearchResponse = self
            .client
            .get(
                &api_url,
                Some(self.token),
                &[("q", artist_name), ("type", "artist"), ("limit", "1")],
            )
            .await?;

        res.artists
            .items
            .into_iter()
            .next()
            .map(Artist::from)
            .ok_or_else(|| FetchError::ArtistNotFound(artist_name.to_string()))
    }
}
