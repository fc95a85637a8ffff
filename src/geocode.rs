//! Reverse geocoding client for OpenStreetMap Nominatim.
//!
//! The impact site classifier only needs the display name and the address
//! breakdown of a coordinate pair, so the response types model exactly that
//! slice of the Nominatim payload. The [`ReverseGeocode`] trait is the seam
//! that lets the casualty pipeline run against canned responses in tests.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Reverse geocoding failures.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Network-level failure (DNS, connect, timeout)
    #[error("geocoding transport error: {0}")]
    Transport(String),

    /// Upstream answered with a non-success status
    #[error("geocoding service returned HTTP {0}")]
    Status(u16),

    /// Body was not the expected JSON shape
    #[error("malformed geocoding payload: {0}")]
    MalformedPayload(String),
}

/// Address breakdown of a reverse-geocoded coordinate.
///
/// Nominatim populates whichever keys apply to the place; everything here
/// is optional. Field names follow the wire format.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AddressDetails {
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub municipality: Option<String>,
    pub county: Option<String>,
    pub city_district: Option<String>,
    pub suburb: Option<String>,
    pub neighbourhood: Option<String>,
    pub district: Option<String>,
    pub hamlet: Option<String>,
    pub isolated_dwelling: Option<String>,
    pub industrial: Option<String>,
    pub commercial: Option<String>,
    pub country: Option<String>,
}

/// Successful reverse geocoding result.
///
/// A payload without `display_name` (Nominatim reports unresolvable
/// coordinates as an `{"error": ...}` object) fails deserialization and
/// surfaces as [`GeocodeError::MalformedPayload`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GeocodeResponse {
    pub display_name: String,
    #[serde(default)]
    pub address: AddressDetails,
}

/// Resolves coordinates to a place description.
pub trait ReverseGeocode {
    fn lookup(&self, latitude: f64, longitude: f64) -> Result<GeocodeResponse, GeocodeError>;
}

impl<G: ReverseGeocode + ?Sized> ReverseGeocode for &G {
    fn lookup(&self, latitude: f64, longitude: f64) -> Result<GeocodeResponse, GeocodeError> {
        (**self).lookup(latitude, longitude)
    }
}

/// Connection settings for the Nominatim client.
#[derive(Clone, Debug)]
pub struct NominatimConfig {
    /// Service root, without the `/reverse` path
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Nominatim's usage policy requires an identifying user agent
    pub user_agent: String,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            timeout: Duration::from_secs(5),
            user_agent: "AsteroidImpactSimulator/1.0".to_string(),
        }
    }
}

/// Reverse geocoding client backed by the public Nominatim service.
pub struct NominatimClient {
    config: NominatimConfig,
    agent: ureq::Agent,
}

impl NominatimClient {
    pub fn new() -> Self {
        Self::with_config(NominatimConfig::default())
    }

    pub fn with_config(config: NominatimConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build();

        Self { config, agent }
    }
}

impl Default for NominatimClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ReverseGeocode for NominatimClient {
    fn lookup(&self, latitude: f64, longitude: f64) -> Result<GeocodeResponse, GeocodeError> {
        let url = format!("{}/reverse", self.config.base_url);
        debug!("reverse geocoding ({:.4}, {:.4})", latitude, longitude);

        let response = self
            .agent
            .get(&url)
            .query("lat", &latitude.to_string())
            .query("lon", &longitude.to_string())
            .query("format", "json")
            .query("zoom", "10")
            .query("addressdetails", "1")
            .call()
            .map_err(|err| match err {
                ureq::Error::Status(code, _) => GeocodeError::Status(code),
                ureq::Error::Transport(transport) => {
                    GeocodeError::Transport(transport.to_string())
                }
            })?;

        let body = response
            .into_string()
            .map_err(|err| GeocodeError::Transport(err.to_string()))?;

        serde_json::from_str(&body).map_err(|err| GeocodeError::MalformedPayload(err.to_string()))
    }
}
