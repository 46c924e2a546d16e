//! OpenCage forward geocoding.

use serde::Deserialize;

use crate::{error::Result, http::ResilientClient};

#[derive(Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Deserialize)]
struct Geometry {
    lat: f64,
    lng: f64,
}

/// Best match for `place` as `(lat, lon)`, `None` when the geocoder has no result.
pub async fn locate(
    client: &ResilientClient,
    api_url: &str,
    api_key: &str,
    place: &str,
) -> Result<Option<(f64, f64)>> {
    let body: GeocodeResponse = client
        .get(api_url, None, &[("q", place), ("key", api_key), ("limit", "1")])
        .await?;

    Ok(body
        .results
        .into_iter()
        .next()
        .map(|r| (r.geometry.lat, r.geometry.lng)))
}
