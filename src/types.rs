use std::fmt;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub popularity: u32,
    pub followers: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub artists: ArtistsContainer,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistsContainer {
    pub items: Vec<SearchArtist>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchArtist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub popularity: u32,
    #[serde(default)]
    pub followers: Followers,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Followers {
    #[serde(default)]
    pub total: u64,
}

impl From<SearchArtist> for Artist {
    fn from(artist: SearchArtist) -> Self {
        Self {
            id: artist.id,
            name: artist.name,
            popularity: artist.popularity,
            followers: artist.followers.total,
        }
    }
}

/// Granularity of an album's `release_date`. Anything the API sends besides
/// `year` and `month` is treated as a full date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseDatePrecision {
    Year,
    Month,
    #[serde(other)]
    Day,
}

impl fmt::Display for ReleaseDatePrecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReleaseDatePrecision::Year => "year",
            ReleaseDatePrecision::Month => "month",
            ReleaseDatePrecision::Day => "day",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumResponse {
    pub items: Vec<Album>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub name: String,
    pub release_date: String,
    pub release_date_precision: ReleaseDatePrecision,
    pub album_type: String,
    #[serde(default)]
    pub album_group: Option<String>,
}

impl Album {
    /// Studio albums only: singles, compilations and appearances are skipped.
    pub fn is_studio_album(&self) -> bool {
        self.album_group.as_deref() == Some("album") && self.album_type == "album"
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TracksResponse {
    pub items: Vec<AlbumTrack>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumTrack {
    pub id: String,
    pub name: String,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub duration_ms: u64,
    pub album_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AudioFeaturesResponse {
    #[serde(default)]
    pub audio_features: Vec<Option<AudioFeatures>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub id: String,
    pub acousticness: f64,
    pub danceability: f64,
    pub energy: f64,
    pub speechiness: f64,
    pub liveness: f64,
    pub instrumentalness: f64,
    pub valence: f64,
    #[serde(default)]
    pub tempo: Option<f64>,
    #[serde(default)]
    pub loudness: Option<f64>,
    #[serde(default)]
    pub key: Option<i32>,
    #[serde(default)]
    pub mode: Option<i32>,
    #[serde(default)]
    pub time_signature: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackInfo {
    #[serde(default)]
    pub popularity: u32,
}

/// Audio features of one track merged with its track, album and popularity
/// data, before the release date is normalized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureRecord {
    #[serde(flatten)]
    pub features: AudioFeatures,
    pub track_name: String,
    pub album_name: String,
    pub release_date: String,
    pub release_date_precision: ReleaseDatePrecision,
    pub duration_ms: u64,
    pub popularity: u32,
}

/// A row of the final dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SongRow {
    #[serde(flatten)]
    pub features: AudioFeatures,
    pub track_name: String,
    pub album_name: String,
    pub release_date: NaiveDate,
    pub release_date_precision: ReleaseDatePrecision,
    pub duration_ms: u64,
    pub popularity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistLocation {
    pub name: String,
    /// The place string that was geocoded: a country code or `Unknown`.
    pub origin: String,
    pub popularity: u32,
    pub followers: u64,
    pub lat: f64,
    pub lon: f64,
}

impl ArtistLocation {
    /// `(0, 0)` means the geocoder had nothing for `origin`.
    pub fn is_resolved(&self) -> bool {
        !(self.lat == 0.0 && self.lon == 0.0)
    }
}

/// Everything one lookup produces, handed to the presentation layer as a unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistReport {
    pub artist: Artist,
    pub songs: Vec<SongRow>,
    pub location: Option<ArtistLocation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AudioFeature {
    Acousticness,
    Danceability,
    Energy,
    Speechiness,
    Liveness,
    Instrumentalness,
}

impl AudioFeature {
    pub fn value_of(&self, features: &AudioFeatures) -> f64 {
        match self {
            AudioFeature::Acousticness => features.acousticness,
            AudioFeature::Danceability => features.danceability,
            AudioFeature::Energy => features.energy,
            AudioFeature::Speechiness => features.speechiness,
            AudioFeature::Liveness => features.liveness,
            AudioFeature::Instrumentalness => features.instrumentalness,
        }
    }
}

impl fmt::Display for AudioFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AudioFeature::Acousticness => "Acousticness",
            AudioFeature::Danceability => "Danceability",
            AudioFeature::Energy => "Energy",
            AudioFeature::Speechiness => "Speechiness",
            AudioFeature::Liveness => "Liveness",
            AudioFeature::Instrumentalness => "Instrumentalness",
        };
        write!(f, "{}", label)
    }
}

#[derive(Tabled)]
pub struct SongTableRow {
    pub track_name: String,
    pub album_name: String,
    pub release_date: String,
    pub duration: String,
    pub popularity: u32,
}

#[derive(Tabled)]
pub struct FeatureTableRow {
    pub track_name: String,
    pub album_name: String,
    pub valence: String,
    pub feature: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::parse_release_date;

    fn album_from(json: serde_json::Value) -> Album {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn album_without_group_is_not_a_studio_album() {
        let album = album_from(serde_json::json!({
            "id": "bbc",
            "name": "BBC Sessions",
            "release_date": "1997-11-11",
            "release_date_precision": "day",
            "album_type": "album"
        }));
        assert_eq!(album.album_group, None);
        assert!(!album.is_studio_album());
    }

    #[test]
    fn studio_album_needs_group_and_type() {
        let mut album = album_from(serde_json::json!({
            "id": "iv",
            "name": "Led Zeppelin IV",
            "release_date": "1971-11-08",
            "release_date_precision": "day",
            "album_type": "album",
            "album_group": "album"
        }));
        assert!(album.is_studio_album());

        album.album_type = "compilation".to_string();
        assert!(!album.is_studio_album());
    }

    #[test]
    fn unknown_precision_is_treated_as_day() {
        let album = album_from(serde_json::json!({
            "id": "coda",
            "name": "Coda",
            "release_date": "1982-11-19",
            "release_date_precision": "week",
            "album_type": "album",
            "album_group": "album"
        }));
        assert_eq!(album.release_date_precision, ReleaseDatePrecision::Day);

        let date = parse_release_date(&album.release_date, album.release_date_precision).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1982, 11, 19).unwrap());
    }
}
