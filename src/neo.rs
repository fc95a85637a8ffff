//! Client for NASA's Near Earth Object Web Service (NeoWs).
//!
//! Fetches live asteroid data and condenses each record into a
//! [`NeoAsteroid`] summary carrying exactly what the impact calculators
//! need: averaged diameter, approach velocity, miss distance and a small
//! orbital-element passthrough. NeoWs serializes most numbers as strings;
//! parsing is lenient and absent or unparseable values read as zero.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::types::{AsteroidProfile, M_PER_KM};

/// NeoWs request failures.
#[derive(Debug, Error)]
pub enum NeoError {
    /// Network-level failure (DNS, connect, timeout)
    #[error("NEO API transport error: {0}")]
    Transport(String),

    /// Upstream answered with a non-success status
    #[error("NEO API returned HTTP {0}")]
    Status(u16),

    /// Body was not the expected JSON shape
    #[error("malformed NEO payload: {0}")]
    MalformedPayload(String),
}

/// Connection settings for the NeoWs client.
#[derive(Clone, Debug)]
pub struct NeoClientConfig {
    pub base_url: String,
    /// NASA API key; the rate-limited `DEMO_KEY` works for light use
    pub api_key: String,
    pub timeout: Duration,
}

impl Default for NeoClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.nasa.gov/neo/rest/v1".to_string(),
            api_key: "DEMO_KEY".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Orbital elements passed through from NeoWs for trajectory display.
///
/// NeoWs reports these as strings; they are not consumed by the impact
/// calculators and are kept verbatim.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OrbitalData {
    pub orbit_id: Option<String>,
    pub orbit_determination_date: Option<String>,
    pub orbit_uncertainty: Option<String>,
    pub semi_major_axis: Option<String>,
    pub eccentricity: Option<String>,
    pub inclination: Option<String>,
    pub ascending_node_longitude: Option<String>,
    pub orbital_period: Option<String>,
    pub perihelion_distance: Option<String>,
    pub aphelion_distance: Option<String>,
    pub perihelion_argument: Option<String>,
    pub mean_anomaly: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
struct DiameterRange {
    #[serde(default)]
    estimated_diameter_min: f64,
    #[serde(default)]
    estimated_diameter_max: f64,
}

#[derive(Clone, Debug, Default, Deserialize)]
struct EstimatedDiameter {
    #[serde(default)]
    kilometers: DiameterRange,
}

#[derive(Clone, Debug, Default, Deserialize)]
struct RelativeVelocity {
    #[serde(default)]
    kilometers_per_second: String,
    #[serde(default)]
    kilometers_per_hour: String,
    #[serde(default)]
    miles_per_hour: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
struct MissDistance {
    #[serde(default)]
    kilometers: String,
    #[serde(default)]
    lunar: String,
    #[serde(default)]
    astronomical: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
struct CloseApproach {
    #[serde(default)]
    close_approach_date: Option<String>,
    #[serde(default)]
    close_approach_date_full: Option<String>,
    #[serde(default)]
    relative_velocity: RelativeVelocity,
    #[serde(default)]
    miss_distance: MissDistance,
    #[serde(default)]
    orbiting_body: Option<String>,
}

/// One NeoWs record as it appears on the wire.
#[derive(Clone, Debug, Default, Deserialize)]
struct NeoRecord {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    nasa_jpl_url: String,
    #[serde(default)]
    absolute_magnitude_h: Option<f64>,
    #[serde(default)]
    is_potentially_hazardous_asteroid: bool,
    #[serde(default)]
    estimated_diameter: EstimatedDiameter,
    #[serde(default)]
    close_approach_data: Vec<CloseApproach>,
    #[serde(default)]
    orbital_data: OrbitalData,
}

#[derive(Debug, Default, Deserialize)]
struct FeedPayload {
    #[serde(default)]
    element_count: u64,
    /// Objects grouped by approach date (YYYY-MM-DD keys)
    #[serde(default)]
    near_earth_objects: BTreeMap<String, Vec<NeoRecord>>,
}

#[derive(Debug, Default, Deserialize)]
struct BrowsePayload {
    #[serde(default)]
    near_earth_objects: Vec<NeoRecord>,
}

/// Condensed asteroid summary for simulation and display.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NeoAsteroid {
    pub id: String,
    pub name: String,
    pub nasa_jpl_url: String,
    pub absolute_magnitude: Option<f64>,
    pub is_potentially_hazardous: bool,

    /// Mean of the NeoWs min/max diameter estimates
    pub diameter_km: f64,
    pub diameter_min_km: f64,
    pub diameter_max_km: f64,
    pub diameter_meters: f64,

    /// Relative velocity at the next close approach; zero when NeoWs
    /// reports no approach data
    pub velocity_kmps: f64,
    pub velocity_kmph: f64,
    pub velocity_mph: f64,

    pub miss_distance_km: f64,
    pub miss_distance_lunar: f64,
    pub miss_distance_au: f64,

    pub close_approach_date: Option<String>,
    pub close_approach_date_full: Option<String>,
    pub orbiting_body: String,

    pub orbital_data: OrbitalData,
}

impl NeoAsteroid {
    /// Profile for the impact calculators: averaged diameter, approach
    /// velocity and the default stony density.
    ///
    /// A record without approach data yields a zero-velocity profile that
    /// the simulation entry points reject during validation.
    pub fn impact_profile(&self) -> AsteroidProfile {
        AsteroidProfile::new(self.diameter_km, self.velocity_kmps)
    }
}

fn parse_or_zero(value: &str) -> f64 {
    value.parse().unwrap_or(0.0)
}

impl From<NeoRecord> for NeoAsteroid {
    fn from(record: NeoRecord) -> Self {
        // Only the next (first listed) close approach is summarized
        let approach = record
            .close_approach_data
            .into_iter()
            .next()
            .unwrap_or_default();
        let diameter = record.estimated_diameter.kilometers;
        let diameter_km =
            (diameter.estimated_diameter_min + diameter.estimated_diameter_max) / 2.0;

        NeoAsteroid {
            id: record.id,
            name: record.name,
            nasa_jpl_url: record.nasa_jpl_url,
            absolute_magnitude: record.absolute_magnitude_h,
            is_potentially_hazardous: record.is_potentially_hazardous_asteroid,
            diameter_km,
            diameter_min_km: diameter.estimated_diameter_min,
            diameter_max_km: diameter.estimated_diameter_max,
            diameter_meters: diameter_km * M_PER_KM,
            velocity_kmps: parse_or_zero(&approach.relative_velocity.kilometers_per_second),
            velocity_kmph: parse_or_zero(&approach.relative_velocity.kilometers_per_hour),
            velocity_mph: parse_or_zero(&approach.relative_velocity.miles_per_hour),
            miss_distance_km: parse_or_zero(&approach.miss_distance.kilometers),
            miss_distance_lunar: parse_or_zero(&approach.miss_distance.lunar),
            miss_distance_au: parse_or_zero(&approach.miss_distance.astronomical),
            close_approach_date: approach.close_approach_date,
            close_approach_date_full: approach.close_approach_date_full,
            orbiting_body: approach
                .orbiting_body
                .unwrap_or_else(|| "Earth".to_string()),
            orbital_data: record.orbital_data,
        }
    }
}

/// Feed of objects approaching within a date window.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NeoFeed {
    /// Upstream object count for the whole window
    pub element_count: u64,
    /// Summaries flattened in date order
    pub asteroids: Vec<NeoAsteroid>,
}

/// Page of the NeoWs catalog, optionally filtered by hazard flag.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NeoCatalog {
    pub count: usize,
    pub asteroids: Vec<NeoAsteroid>,
}

fn catalog_from_records(records: Vec<NeoRecord>, hazardous_only: Option<bool>) -> NeoCatalog {
    let asteroids: Vec<NeoAsteroid> = records
        .into_iter()
        .filter(|record| {
            hazardous_only.map_or(true, |flag| record.is_potentially_hazardous_asteroid == flag)
        })
        .map(NeoAsteroid::from)
        .collect();

    NeoCatalog {
        count: asteroids.len(),
        asteroids,
    }
}

/// NeoWs client.
pub struct NeoClient {
    config: NeoClientConfig,
    agent: ureq::Agent,
}

impl NeoClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_config(NeoClientConfig {
            api_key: api_key.into(),
            ..Default::default()
        })
    }

    pub fn with_config(config: NeoClientConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout)
            .user_agent("AsteroidImpactSimulator/1.0")
            .build();

        Self { config, agent }
    }

    /// Objects approaching within a date window (max 7 days).
    ///
    /// Omitted dates fall to the upstream defaults: today through a week
    /// from today.
    pub fn feed(
        &self,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<NeoFeed, NeoError> {
        let url = format!("{}/feed", self.config.base_url);
        let mut request = self.agent.get(&url).query("api_key", &self.config.api_key);
        if let Some(start_date) = start_date {
            request = request.query("start_date", start_date);
        }
        if let Some(end_date) = end_date {
            request = request.query("end_date", end_date);
        }

        let payload: FeedPayload = self.fetch(request)?;
        info!("NEO feed: {} objects in window", payload.element_count);

        let asteroids = payload
            .near_earth_objects
            .into_values()
            .flatten()
            .map(NeoAsteroid::from)
            .collect();

        Ok(NeoFeed {
            element_count: payload.element_count,
            asteroids,
        })
    }

    /// One page of the asteroid catalog, optionally filtered by the
    /// potentially-hazardous flag. Filtering happens after the fetch, so a
    /// filtered page may hold fewer than 20 entries.
    pub fn browse(&self, hazardous_only: Option<bool>) -> Result<NeoCatalog, NeoError> {
        let url = format!("{}/neo/browse", self.config.base_url);
        let request = self
            .agent
            .get(&url)
            .query("api_key", &self.config.api_key)
            // One page of 20, the NeoWs page-size limit
            .query("size", "20");

        let payload: BrowsePayload = self.fetch(request)?;
        Ok(catalog_from_records(payload.near_earth_objects, hazardous_only))
    }

    /// Detailed record for one asteroid by its NeoWs id.
    pub fn asteroid_by_id(&self, asteroid_id: &str) -> Result<NeoAsteroid, NeoError> {
        let url = format!("{}/neo/{}", self.config.base_url, asteroid_id);
        let request = self.agent.get(&url).query("api_key", &self.config.api_key);

        let record: NeoRecord = self.fetch(request)?;
        Ok(NeoAsteroid::from(record))
    }

    fn fetch<T: for<'de> Deserialize<'de>>(&self, request: ureq::Request) -> Result<T, NeoError> {
        let response = request.call().map_err(|err| match err {
            ureq::Error::Status(code, _) => NeoError::Status(code),
            ureq::Error::Transport(transport) => NeoError::Transport(transport.to_string()),
        })?;

        let body = response
            .into_string()
            .map_err(|err| NeoError::Transport(err.to_string()))?;

        serde_json::from_str(&body).map_err(|err| NeoError::MalformedPayload(err.to_string()))
    }
}

impl Default for NeoClient {
    fn default() -> Self {
        Self::with_config(NeoClientConfig::default())
    }
}
