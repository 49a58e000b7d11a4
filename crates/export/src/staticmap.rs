use wayplan_core::geo::Coordinates;

use crate::ExportError;

const STYLE_PATH: &str = "styles/v1/mapbox/streets-v11/static";
const PIN_HEX: &str = "ba2626";
const OVERVIEW_SIZE: &str = "1280x1024@2x";
const PLACE_SIZE: &str = "800x600";
const PLACE_ZOOM: u8 = 15;

/// Client for the static map image provider.
///
/// URL building is split out as pure methods so the exact request shapes are
/// testable without a network.
#[derive(Debug, Clone)]
pub struct StaticMapClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl StaticMapClient {
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

    /// Auto-framed overview with a pin per place.
    pub fn overview_url(&self, pins: &[Coordinates]) -> String {
        let markers = pins.iter().map(pin_marker).collect::<Vec<_>>().join(",");
        format!(
            "{}/{}/{}/auto/{}?access_token={}",
            self.base_url, STYLE_PATH, markers, OVERVIEW_SIZE, self.api_key
        )
    }

    /// Close-up map centered on a single place.
    pub fn place_url(&self, pin: Coordinates) -> String {
        format!(
            "{}/{}/{}/{},{},{}/{}?access_token={}",
            self.base_url,
            STYLE_PATH,
            pin_marker(&pin),
            pin.longitude,
            pin.latitude,
            PLACE_ZOOM,
            PLACE_SIZE,
            self.api_key
        )
    }

    /// Downloads a map image. The provider serves PNG for these styles.
    pub async fn fetch_png(&self, url: &str) -> Result<Vec<u8>, ExportError> {
        tracing::debug!("fetching static map image");
        let bytes = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        Ok(bytes.to_vec())
    }
}

/// Marker positions are longitude-first, which is the provider's convention
/// rather than ours.
fn pin_marker(pin: &Coordinates) -> String {
    format!("pin-l+{PIN_HEX}({},{})", pin.longitude, pin.latitude)
}
