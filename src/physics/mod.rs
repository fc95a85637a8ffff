//! Impact physics: energy, crater, blast and seismic estimates.
//!
//! Pure functions computing impact consequences from asteroid diameter,
//! density, velocity and impact angle. The scaling coefficients are fixed
//! empirical constants; reproduce them exactly rather than re-deriving
//! "better" ones, since downstream severity and casualty figures are
//! calibrated against them.

use std::fmt;

use serde::Serialize;
use tracing::info;

use crate::types::{
    AsteroidProfile, InputError, DEFAULT_ASTEROID_DENSITY_KG_M3, ERGS_PER_JOULE,
    HIROSHIMA_YIELD_KILOTONS, KG_PER_TON, M_PER_KM, TNT_JOULES_PER_KILOTON, validate_coordinates,
};

#[cfg(test)]
mod proptest_physics;

/// Impact angle assumed when the caller does not specify one (degrees).
pub const DEFAULT_IMPACT_ANGLE_DEG: f64 = 45.0;

/// Kinetic energy of an impact, expressed in the units callers ask for.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ImpactEnergy {
    /// Kinetic energy in joules
    pub joules: f64,
    /// TNT equivalence in kilotons
    pub kilotons_tnt: f64,
    /// TNT equivalence in megatons
    pub megatons_tnt: f64,
    /// Multiples of the Hiroshima yield
    pub hiroshima_equivalent: f64,
}

/// Crater dimensions from simplified scaling laws.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CraterEstimate {
    pub diameter_km: f64,
    pub diameter_m: f64,
    pub depth_km: f64,
    pub depth_m: f64,
    /// Impact angle the estimate was scaled for (degrees)
    pub impact_angle_deg: f64,
}

/// Damage radii around the impact point.
///
/// Each zone follows its own power law of the impact energy; the zones are
/// not guaranteed to nest in any particular order beyond what the individual
/// formulas produce.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BlastZones {
    /// Fireball radius (km)
    pub fireball_radius_km: f64,
    /// Total destruction, overpressure above ~20 psi (km)
    pub total_destruction_radius_km: f64,
    /// Severe damage, overpressure 5-20 psi (km)
    pub severe_damage_radius_km: f64,
    /// Moderate damage, overpressure 2-5 psi (km)
    pub moderate_damage_radius_km: f64,
    /// Third-degree burn range from thermal radiation (km)
    pub thermal_radiation_radius_km: f64,
    /// Energy the radii were derived from (Mt TNT)
    pub energy_megatons: f64,
}

/// Ground shaking induced by the impact.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SeismicEstimate {
    /// Richter-scale magnitude
    pub richter_magnitude: f64,
    /// Rough radius of perceptible shaking, magnitude x 100 (km)
    pub seismic_radius_km: f64,
    /// Qualitative intensity description
    pub description: &'static str,
}

/// Overall impact severity, judged from the TNT-equivalent energy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ImpactSeverity {
    #[serde(rename = "Minor - Local damage")]
    Minor,
    #[serde(rename = "Moderate - Regional catastrophe")]
    Moderate,
    #[serde(rename = "Major - Continental devastation")]
    Major,
    #[serde(rename = "Catastrophic - Global extinction event")]
    Catastrophic,
}

impl ImpactSeverity {
    /// Classify severity from energy in megatons of TNT.
    pub fn from_megatons(energy_megatons: f64) -> Self {
        if energy_megatons < 1.0 {
            ImpactSeverity::Minor
        } else if energy_megatons < 100.0 {
            ImpactSeverity::Moderate
        } else if energy_megatons < 10000.0 {
            ImpactSeverity::Major
        } else {
            ImpactSeverity::Catastrophic
        }
    }

    /// Human-readable severity label.
    pub fn label(&self) -> &'static str {
        match self {
            ImpactSeverity::Minor => "Minor - Local damage",
            ImpactSeverity::Moderate => "Moderate - Regional catastrophe",
            ImpactSeverity::Major => "Major - Continental devastation",
            ImpactSeverity::Catastrophic => "Catastrophic - Global extinction event",
        }
    }
}

impl fmt::Display for ImpactSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Echo of the asteroid parameters a simulation ran with.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AsteroidSummary {
    pub diameter_km: f64,
    pub diameter_m: f64,
    pub mass_kg: f64,
    pub mass_tons: f64,
    pub velocity_kmps: f64,
    pub density_kg_m3: f64,
}

/// Where the simulation placed the impact.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ImpactCoordinates {
    pub latitude: f64,
    pub longitude: f64,
    /// Impact angle in degrees
    pub angle: f64,
    /// The simulation itself never resolves geography; this is always false.
    /// Ocean/land is decided by the casualty estimator, which owns the
    /// geocoding lookup.
    pub is_ocean: bool,
}

/// Complete physical picture of one impact.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImpactSimulation {
    pub asteroid: AsteroidSummary,
    pub impact_location: ImpactCoordinates,
    pub energy: ImpactEnergy,
    pub crater: CraterEstimate,
    pub blast_zones: BlastZones,
    pub seismic_effects: SeismicEstimate,
    pub severity: ImpactSeverity,
}

/// Asteroid mass in kilograms from its diameter, assuming a sphere.
///
/// `density_kg_m3` falls back to [`DEFAULT_ASTEROID_DENSITY_KG_M3`] when
/// `None`. Mass grows with the cube of the diameter and linearly with
/// density.
pub fn asteroid_mass(diameter_km: f64, density_kg_m3: Option<f64>) -> f64 {
    let density = density_kg_m3.unwrap_or(DEFAULT_ASTEROID_DENSITY_KG_M3);

    let radius_m = diameter_km * M_PER_KM / 2.0;
    let volume_m3 = (4.0 / 3.0) * std::f64::consts::PI * radius_m.powi(3);

    volume_m3 * density
}

/// Kinetic energy of the impact: `E = 0.5 * m * v^2`.
///
/// Velocity is taken in km/s and converted to m/s; the joule figure is then
/// expressed as TNT kilotons/megatons and Hiroshima equivalents.
pub fn impact_energy(mass_kg: f64, velocity_kmps: f64) -> ImpactEnergy {
    let velocity_mps = velocity_kmps * M_PER_KM;
    let joules = 0.5 * mass_kg * velocity_mps * velocity_mps;

    let kilotons_tnt = joules / TNT_JOULES_PER_KILOTON;
    let megatons_tnt = kilotons_tnt / 1000.0;
    let hiroshima_equivalent = kilotons_tnt / HIROSHIMA_YIELD_KILOTONS;

    ImpactEnergy {
        joules,
        kilotons_tnt,
        megatons_tnt,
        hiroshima_equivalent,
    }
}

/// Crater dimensions from the impact energy and angle.
///
/// Scaling law: `D_crater = 1.8 * Mt^0.3`, reduced by `sin(angle)^0.5` for
/// oblique impacts; depth is 1/7 of the diameter. A grazing impact
/// (angle 0° or 180°) produces a zero-size crater, which is expected
/// behavior, not an error. Mass is taken at the default density here; a
/// custom profile density does not change the crater estimate.
pub fn crater_size(diameter_km: f64, velocity_kmps: f64, impact_angle_deg: f64) -> CraterEstimate {
    let mass_kg = asteroid_mass(diameter_km, None);
    let energy = impact_energy(mass_kg, velocity_kmps);

    let base_diameter_km = 1.8 * energy.megatons_tnt.powf(0.3);

    // Angles outside [0, 180] have negative sine; clamp to grazing.
    let angle_factor = impact_angle_deg.to_radians().sin().max(0.0);
    let crater_diameter_km = base_diameter_km * angle_factor.sqrt();

    let crater_depth_km = crater_diameter_km / 7.0;

    CraterEstimate {
        diameter_km: crater_diameter_km,
        diameter_m: crater_diameter_km * M_PER_KM,
        depth_km: crater_depth_km,
        depth_m: crater_depth_km * M_PER_KM,
        impact_angle_deg,
    }
}

/// Blast and thermal damage radii, scaled from nuclear-weapon effects.
///
/// Mass is taken at the default density, as for [`crater_size`].
pub fn blast_zones(diameter_km: f64, velocity_kmps: f64) -> BlastZones {
    let mass_kg = asteroid_mass(diameter_km, None);
    let energy = impact_energy(mass_kg, velocity_kmps);
    let mt = energy.megatons_tnt;

    BlastZones {
        fireball_radius_km: 0.28 * mt.powf(0.4),
        total_destruction_radius_km: 2.2 * mt.powf(0.33),
        severe_damage_radius_km: 4.7 * mt.powf(0.33),
        moderate_damage_radius_km: 7.5 * mt.powf(0.33),
        thermal_radiation_radius_km: 9.0 * mt.powf(0.38),
        energy_megatons: mt,
    }
}

/// Earthquake magnitude induced by the impact.
///
/// Richter relation `M = (2/3) * log10(E_ergs) - 2.9`. The erg value is
/// floored at 1 so the magnitude bottoms out at -2.9 for vanishing energy
/// instead of diverging to negative infinity. Mass is taken at the default
/// density, as for [`crater_size`].
pub fn seismic_effects(diameter_km: f64, velocity_kmps: f64) -> SeismicEstimate {
    let mass_kg = asteroid_mass(diameter_km, None);
    let energy = impact_energy(mass_kg, velocity_kmps);

    let energy_ergs = (energy.joules * ERGS_PER_JOULE).max(1.0);
    let magnitude = (2.0 / 3.0) * energy_ergs.log10() - 2.9;

    SeismicEstimate {
        richter_magnitude: magnitude,
        seismic_radius_km: magnitude * 100.0,
        description: seismic_description(magnitude),
    }
}

fn seismic_description(magnitude: f64) -> &'static str {
    if magnitude < 4.0 {
        "Minor tremors"
    } else if magnitude < 5.0 {
        "Moderate earthquake"
    } else if magnitude < 6.0 {
        "Strong earthquake"
    } else if magnitude < 7.0 {
        "Major earthquake"
    } else if magnitude < 8.0 {
        "Great earthquake"
    } else {
        "Catastrophic earthquake"
    }
}

/// Run the full physical simulation for one impact.
///
/// Validates the profile and coordinates, then assembles mass, energy,
/// crater, blast and seismic estimates into one composite. The asteroid
/// summary, energy and severity reflect the profile's density;
/// crater/blast/seismic always use the default density internally, so the
/// two can disagree for non-stony profiles.
pub fn full_impact_simulation(
    profile: AsteroidProfile,
    latitude: f64,
    longitude: f64,
    impact_angle_deg: f64,
) -> Result<ImpactSimulation, InputError> {
    profile.validate()?;
    validate_coordinates(latitude, longitude)?;

    let mass_kg = asteroid_mass(profile.diameter_km, Some(profile.density_kg_m3));
    let energy = impact_energy(mass_kg, profile.velocity_kmps);
    let crater = crater_size(profile.diameter_km, profile.velocity_kmps, impact_angle_deg);
    let blast = blast_zones(profile.diameter_km, profile.velocity_kmps);
    let seismic = seismic_effects(profile.diameter_km, profile.velocity_kmps);
    let severity = ImpactSeverity::from_megatons(energy.megatons_tnt);

    info!(
        "impact simulation: {:.4} km body at {:.1} km/s -> {:.3e} Mt, {}",
        profile.diameter_km, profile.velocity_kmps, energy.megatons_tnt, severity
    );

    Ok(ImpactSimulation {
        asteroid: AsteroidSummary {
            diameter_km: profile.diameter_km,
            diameter_m: profile.diameter_m(),
            mass_kg,
            mass_tons: mass_kg / KG_PER_TON,
            velocity_kmps: profile.velocity_kmps,
            density_kg_m3: profile.density_kg_m3,
        },
        impact_location: ImpactCoordinates {
            latitude,
            longitude,
            angle: impact_angle_deg,
            // Geography is resolved by the casualty estimator, not here.
            is_ocean: false,
        },
        energy,
        crater,
        blast_zones: blast,
        seismic_effects: seismic,
        severity,
    })
}
