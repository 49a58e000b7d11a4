use reqwest::header::AUTHORIZATION;
use wayplan_core::geo::Coordinates;

use crate::DirectionsError;

/// Client for the openrouteservice directions API.
///
/// The base URL is injectable so tests can point it at a local double.
#[derive(Debug, Clone)]
pub struct DirectionsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl DirectionsClient {
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Requests a foot-walking route between two points and returns the raw
    /// GeoJSON response body, so the caller can cache it byte-for-byte.
    ///
    /// The upstream wants positions longitude-first; [`crate::route`] flips
    /// them back to latitude-first when the payload is parsed.
    pub async fn walking_route(
        &self,
        start: Coordinates,
        end: Coordinates,
    ) -> Result<String, DirectionsError> {
        let url = format!("{}/v2/directions/foot-walking/geojson", self.base_url);
        let body = serde_json::json!({
            "coordinates": [
                [start.longitude, start.latitude],
                [end.longitude, end.latitude],
            ],
        });
        tracing::debug!(%url, "requesting walking route");
        let payload = self
            .http
            .post(&url)
            .header(AUTHORIZATION, &self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(payload)
    }
}
