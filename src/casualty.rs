//! Casualty estimation for land and ocean impacts.
//!
//! Combines the blast footprint with the classified population density of
//! the impact site. Counts are deliberately coarse: a flat mortality rate
//! over the total-destruction circle, truncated to whole people at every
//! step. Water impacts report zero casualties; tsunami effects are not
//! modeled.

use std::f64::consts::PI;

use serde::Serialize;
use tracing::info;

use crate::geocode::ReverseGeocode;
use crate::location::{classify, DetectionMethod, LocationDescriptor, LocationType};
use crate::types::{validate_coordinates, InputError};

/// Share of the affected population killed inside the blast circle.
pub const MORTALITY_RATE: f64 = 0.70;

/// Share of the affected population injured.
pub const INJURY_RATE: f64 = 0.25;

/// Impacts below this yield (megatons) have both counts halved.
pub const SMALL_IMPACT_MEGATONS: f64 = 0.01;

/// Ceiling on deaths and injuries, above the world population.
pub const CASUALTY_CEILING: u64 = 10_000_000_000;

const OCEAN_IMPACT_NOTE: &str =
    "Ocean impact - No direct casualties expected. May cause tsunamis.";

/// Human-scale severity band, derived from the death count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CasualtySeverity {
    #[serde(rename = "No casualties expected")]
    NoCasualties,
    #[serde(rename = "Minimal casualties - Local incident")]
    Minimal,
    #[serde(rename = "Moderate casualties - Regional disaster")]
    Moderate,
    #[serde(rename = "Severe casualties - Major disaster")]
    Severe,
    #[serde(rename = "Catastrophic - National emergency")]
    Catastrophic,
    #[serde(rename = "Devastating - Continental catastrophe")]
    Devastating,
    #[serde(rename = "Apocalyptic - Global extinction event")]
    Apocalyptic,
}

impl CasualtySeverity {
    pub fn from_deaths(deaths: u64) -> Self {
        if deaths == 0 {
            CasualtySeverity::NoCasualties
        } else if deaths < 100 {
            CasualtySeverity::Minimal
        } else if deaths < 10_000 {
            CasualtySeverity::Moderate
        } else if deaths < 100_000 {
            CasualtySeverity::Severe
        } else if deaths < 1_000_000 {
            CasualtySeverity::Catastrophic
        } else if deaths < 10_000_000 {
            CasualtySeverity::Devastating
        } else {
            CasualtySeverity::Apocalyptic
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CasualtySeverity::NoCasualties => "No casualties expected",
            CasualtySeverity::Minimal => "Minimal casualties - Local incident",
            CasualtySeverity::Moderate => "Moderate casualties - Regional disaster",
            CasualtySeverity::Severe => "Severe casualties - Major disaster",
            CasualtySeverity::Catastrophic => "Catastrophic - National emergency",
            CasualtySeverity::Devastating => "Devastating - Continental catastrophe",
            CasualtySeverity::Apocalyptic => "Apocalyptic - Global extinction event",
        }
    }
}

impl std::fmt::Display for CasualtySeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Raw population counts of one impact, before location context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CasualtyCounts {
    /// Everyone inside the blast circle; never capped
    pub affected_population: u64,
    pub estimated_deaths: u64,
    pub estimated_injuries: u64,
}

/// Compute the casualty counts for a blast footprint over a density.
///
/// Each multiplication truncates to a whole count before the next step,
/// so the small-impact halving operates on already-truncated figures.
/// Deaths and injuries are clamped to [`CASUALTY_CEILING`]; the affected
/// population is not.
pub fn casualty_counts(
    blast_area_km2: f64,
    population_density: u32,
    energy_megatons: f64,
) -> CasualtyCounts {
    let affected_population = (blast_area_km2 * population_density as f64) as u64;

    let mut estimated_deaths = (affected_population as f64 * MORTALITY_RATE) as u64;
    let mut estimated_injuries = (affected_population as f64 * INJURY_RATE) as u64;

    if energy_megatons < SMALL_IMPACT_MEGATONS {
        estimated_deaths = (estimated_deaths as f64 * 0.5) as u64;
        estimated_injuries = (estimated_injuries as f64 * 0.5) as u64;
    }

    CasualtyCounts {
        affected_population,
        estimated_deaths: estimated_deaths.min(CASUALTY_CEILING),
        estimated_injuries: estimated_injuries.min(CASUALTY_CEILING),
    }
}

/// Casualty estimate with the site context it was computed from.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CasualtyEstimate {
    pub estimated_deaths: u64,
    pub estimated_injuries: u64,
    pub affected_population: u64,
    pub location_type: LocationType,
    pub location_name: String,
    pub city: Option<String>,
    pub country: Option<String>,
    pub population_density: u32,
    pub blast_radius_km: f64,
    /// Blast circle area; not reported for water impacts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blast_area_km2: Option<f64>,
    pub energy_megatons: f64,
    pub is_ocean_impact: bool,
    pub detection_method: DetectionMethod,
    pub severity: CasualtySeverity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
}

/// Assemble an estimate for an already-classified site.
pub fn estimate_for_location(
    location: &LocationDescriptor,
    blast_radius_km: f64,
    energy_megatons: f64,
) -> CasualtyEstimate {
    if location.is_water {
        return CasualtyEstimate {
            estimated_deaths: 0,
            estimated_injuries: 0,
            affected_population: 0,
            location_type: location.location_type,
            location_name: location.location_name.clone(),
            city: location.city.clone(),
            country: location.country.clone(),
            population_density: 0,
            blast_radius_km,
            blast_area_km2: None,
            energy_megatons,
            is_ocean_impact: true,
            detection_method: location.detection_method,
            severity: CasualtySeverity::NoCasualties,
            note: Some(OCEAN_IMPACT_NOTE),
        };
    }

    let blast_area_km2 = PI * blast_radius_km * blast_radius_km;
    let counts = casualty_counts(blast_area_km2, location.population_density, energy_megatons);

    CasualtyEstimate {
        estimated_deaths: counts.estimated_deaths,
        estimated_injuries: counts.estimated_injuries,
        affected_population: counts.affected_population,
        location_type: location.location_type,
        location_name: location.location_name.clone(),
        city: location.city.clone(),
        country: location.country.clone(),
        population_density: location.population_density,
        blast_radius_km,
        blast_area_km2: Some(blast_area_km2),
        energy_megatons,
        is_ocean_impact: false,
        detection_method: location.detection_method,
        severity: CasualtySeverity::from_deaths(counts.estimated_deaths),
        note: None,
    }
}

/// Casualty estimator bound to a reverse geocoding backend.
///
/// Each estimate performs exactly one lookup; a failed lookup silently
/// downgrades to the ocean-box fallback inside [`classify`].
pub struct CasualtyEstimator<G: ReverseGeocode> {
    geocoder: G,
}

impl<G: ReverseGeocode> CasualtyEstimator<G> {
    pub fn new(geocoder: G) -> Self {
        Self { geocoder }
    }

    /// Classify the impact site at the given coordinates.
    pub fn locate(&self, latitude: f64, longitude: f64) -> Result<LocationDescriptor, InputError> {
        validate_coordinates(latitude, longitude)?;
        Ok(classify(
            latitude,
            longitude,
            self.geocoder.lookup(latitude, longitude),
        ))
    }

    /// Estimate casualties for a blast of the given radius and yield.
    pub fn estimate(
        &self,
        latitude: f64,
        longitude: f64,
        blast_radius_km: f64,
        energy_megatons: f64,
    ) -> Result<CasualtyEstimate, InputError> {
        let location = self.locate(latitude, longitude)?;
        let estimate = estimate_for_location(&location, blast_radius_km, energy_megatons);

        info!(
            "casualty estimate for {}: {} affected, {} deaths, {} injuries ({})",
            estimate.location_name,
            estimate.affected_population,
            estimate.estimated_deaths,
            estimate.estimated_injuries,
            estimate.severity
        );

        Ok(estimate)
    }
}
