//! Composite impact assessment.
//!
//! Chains the physics composite and the casualty estimator: casualties are
//! computed over the total-destruction radius at the simulated yield, and
//! assessments driven by live feed data carry the asteroid's identity.

use serde::Serialize;

use crate::casualty::{CasualtyEstimate, CasualtyEstimator};
use crate::geocode::ReverseGeocode;
use crate::neo::NeoAsteroid;
use crate::physics::{full_impact_simulation, ImpactSimulation};
use crate::types::{AsteroidProfile, InputError};

/// Identity of the feed object an assessment was computed from.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AsteroidInfo {
    pub id: String,
    pub name: String,
    pub is_potentially_hazardous: bool,
}

/// Physics composite with its casualty estimate attached.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImpactReport {
    #[serde(flatten)]
    pub simulation: ImpactSimulation,
    pub casualties: CasualtyEstimate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asteroid_info: Option<AsteroidInfo>,
}

/// Run the full simulation and estimate casualties at the impact site.
///
/// The casualty estimate uses the simulation's total-destruction radius
/// and megaton yield, so the two halves of the report always agree.
pub fn assess_impact<G: ReverseGeocode>(
    geocoder: &G,
    profile: AsteroidProfile,
    latitude: f64,
    longitude: f64,
    impact_angle_deg: f64,
) -> Result<ImpactReport, InputError> {
    let simulation = full_impact_simulation(profile, latitude, longitude, impact_angle_deg)?;

    let estimator = CasualtyEstimator::new(geocoder);
    let casualties = estimator.estimate(
        latitude,
        longitude,
        simulation.blast_zones.total_destruction_radius_km,
        simulation.energy.megatons_tnt,
    )?;

    Ok(ImpactReport {
        simulation,
        casualties,
        asteroid_info: None,
    })
}

/// Assess the impact of a cataloged asteroid at the given site.
///
/// Uses the feed's averaged diameter and approach velocity with the
/// default density, and tags the report with the asteroid's identity.
pub fn assess_asteroid_impact<G: ReverseGeocode>(
    geocoder: &G,
    asteroid: &NeoAsteroid,
    latitude: f64,
    longitude: f64,
    impact_angle_deg: f64,
) -> Result<ImpactReport, InputError> {
    let report = assess_impact(
        geocoder,
        asteroid.impact_profile(),
        latitude,
        longitude,
        impact_angle_deg,
    )?;

    Ok(ImpactReport {
        asteroid_info: Some(AsteroidInfo {
            id: asteroid.id.clone(),
            name: asteroid.name.clone(),
            is_potentially_hazardous: asteroid.is_potentially_hazardous,
        }),
        ..report
    })
}
