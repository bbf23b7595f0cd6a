//! Nominatim-style geocoding HTTP client.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::Coordinate;
use crate::query::CityLocator;

use super::error::GeocodeError;

/// Default base URL for the geocoding search endpoint.
const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// User agent sent with every request; Nominatim rejects anonymous
/// clients.
const USER_AGENT: &str = concat!("fuel-finder/", env!("CARGO_PKG_VERSION"));

/// One candidate match from the search endpoint. Lat/lon arrive as
/// string-encoded decimals and may be absent.
#[derive(Debug, Deserialize)]
struct GeocodeHit {
    #[serde(default)]
    lat: Option<String>,
    #[serde(default)]
    lon: Option<String>,
}

/// Configuration for the geocoding client.
#[derive(Debug, Clone)]
pub struct GeocodeConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GeocodeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl GeocodeConfig {
    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for the geocoding API.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: reqwest::Client,
    base_url: String,
}

impl GeocodeClient {
    /// Create a new geocoding client.
    pub fn new(config: GeocodeConfig) -> Result<Self, GeocodeError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Resolve a city name to a coordinate.
    ///
    /// Succeeds iff the search returns a non-empty candidate list whose
    /// first element carries parseable `lat` and `lon`. Every failure
    /// mode logs and returns `None`; this method never errors.
    pub async fn resolve(&self, city: &str) -> Option<Coordinate> {
        let hits = match self.search(city).await {
            Ok(hits) => hits,
            Err(e) => {
                warn!("geocoding '{city}' failed: {e}");
                return None;
            }
        };

        let Some(first) = hits.first() else {
            debug!("geocoding '{city}': no candidates");
            return None;
        };

        let lat = first.lat.as_deref()?.trim().parse().ok()?;
        let lon = first.lon.as_deref()?.trim().parse().ok()?;
        Some(Coordinate::new(lat, lon))
    }

    /// Issue one search request and parse the candidate array.
    async fn search(&self, city: &str) -> Result<Vec<GeocodeHit>, GeocodeError> {
        let url = format!("{}/search", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("q", city), ("format", "json"), ("limit", "1")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| GeocodeError::Json {
            message: e.to_string(),
        })
    }
}

impl CityLocator for GeocodeClient {
    async fn locate(&self, city: &str) -> Option<Coordinate> {
        self.resolve(city).await
    }
}
