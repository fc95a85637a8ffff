//! Deflection strategies and delta-v calculations.
//!
//! Implements the three mitigation models:
//! - Kinetic impactor (DART-style): single momentum transfer
//! - Gravity tractor: slow continuous pull over the mission duration
//! - Nuclear standoff: impulse scaling with the square root of the yield

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::types::{InputError, M_PER_KM};

/// Deflection strategy with its mission parameters resolved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DeflectionMethod {
    /// Kinetic impactor - transfers momentum through collision.
    ///
    /// Δv = (m_impactor × v_impactor) / M_asteroid, with no ejecta
    /// enhancement (β = 1).
    KineticImpactor {
        /// Impactor mass (kg). DART massed 560 kg.
        impactor_mass_kg: f64,
        /// Relative impact velocity (km/s).
        impactor_velocity_kmps: f64,
        /// Target asteroid mass (kg).
        asteroid_mass_kg: f64,
    },

    /// Gravity tractor - station-keeping spacecraft tows the asteroid.
    ///
    /// Modeled as a fixed 0.1 mm/s of delta-v per mission day, a coarse
    /// linear stand-in for the real n-body tow.
    GravityTractor {
        /// Mission duration in days.
        duration_days: f64,
        /// Spacecraft mass (kg). Present in mission requests but not part
        /// of the simplified pull model.
        spacecraft_mass_kg: f64,
    },

    /// Nuclear standoff detonation.
    ///
    /// Δv = 0.001 × sqrt(yield) km/s for the yield in megatons.
    Nuclear {
        /// Device yield (megatons TNT equivalent).
        yield_megatons: f64,
    },
}

/// Request parameters for a deflection simulation.
///
/// Every field is optional; unset fields take the method's documented
/// default. Fields belonging to other methods are ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeflectionParams {
    pub impactor_mass_kg: Option<f64>,
    pub impactor_velocity_kmps: Option<f64>,
    pub asteroid_mass_kg: Option<f64>,
    pub duration_days: Option<f64>,
    pub spacecraft_mass_kg: Option<f64>,
    pub yield_megatons: Option<f64>,
}

impl DeflectionMethod {
    /// Resolve a wire-format method name and parameter set into a strategy.
    ///
    /// Unknown names are rejected with
    /// [`InputError::UnknownDeflectionMethod`].
    pub fn from_request(method: &str, params: &DeflectionParams) -> Result<Self, InputError> {
        match method {
            "kinetic_impactor" => Ok(DeflectionMethod::KineticImpactor {
                impactor_mass_kg: params.impactor_mass_kg.unwrap_or(500.0),
                impactor_velocity_kmps: params.impactor_velocity_kmps.unwrap_or(10.0),
                asteroid_mass_kg: params.asteroid_mass_kg.unwrap_or(1e12),
            }),
            "gravity_tractor" => Ok(DeflectionMethod::GravityTractor {
                duration_days: params.duration_days.unwrap_or(365.0),
                spacecraft_mass_kg: params.spacecraft_mass_kg.unwrap_or(1000.0),
            }),
            "nuclear" => Ok(DeflectionMethod::Nuclear {
                yield_megatons: params.yield_megatons.unwrap_or(1.0),
            }),
            other => Err(InputError::UnknownDeflectionMethod(other.to_string())),
        }
    }

    /// Calculate the delta-v imparted to the asteroid, in km/s.
    pub fn delta_v_kmps(&self) -> f64 {
        match self {
            DeflectionMethod::KineticImpactor {
                impactor_mass_kg,
                impactor_velocity_kmps,
                asteroid_mass_kg,
            } => {
                // Momentum conservation: Δv = m × v / M, worked in m/s
                let delta_v_mps =
                    impactor_mass_kg * impactor_velocity_kmps * M_PER_KM / asteroid_mass_kg;
                delta_v_mps / M_PER_KM
            }

            DeflectionMethod::GravityTractor { duration_days, .. } => {
                // 0.1 mm/s per day of station keeping
                let delta_v_mps = 0.0001 * duration_days;
                delta_v_mps / M_PER_KM
            }

            DeflectionMethod::Nuclear { yield_megatons } => 0.001 * yield_megatons.sqrt(),
        }
    }

    /// Name the strategy is reported under.
    ///
    /// The nuclear strategy is requested as `nuclear` but reported as
    /// `nuclear_deflection`.
    pub fn reported_name(&self) -> &'static str {
        match self {
            DeflectionMethod::KineticImpactor { .. } => "kinetic_impactor",
            DeflectionMethod::GravityTractor { .. } => "gravity_tractor",
            DeflectionMethod::Nuclear { .. } => "nuclear_deflection",
        }
    }

    /// Get a human-readable description of the strategy.
    pub fn description(&self) -> String {
        match self {
            DeflectionMethod::KineticImpactor {
                impactor_mass_kg,
                impactor_velocity_kmps,
                ..
            } => format!(
                "Kinetic Impactor ({:.0} kg at {:.1} km/s)",
                impactor_mass_kg, impactor_velocity_kmps
            ),
            DeflectionMethod::GravityTractor { duration_days, .. } => {
                format!("Gravity Tractor ({:.0} day mission)", duration_days)
            }
            DeflectionMethod::Nuclear { yield_megatons } => {
                format!("Nuclear Standoff ({:.1} Mt)", yield_megatons)
            }
        }
    }
}

/// Outcome of a deflection attempt against a single-velocity trajectory.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DeflectionReport {
    /// Strategy the result was computed for
    pub method: &'static str,
    pub original_velocity_kmps: f64,
    pub new_velocity_kmps: f64,
    pub delta_v_kmps: f64,
    /// |Δv / v| as a percentage, capped at 100
    pub effectiveness_percent: f64,
    /// Mission duration echo (gravity tractor only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<f64>,
    /// Yield echo (nuclear only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yield_megatons: Option<f64>,
}

/// Simulate one deflection attempt.
///
/// Validates the incoming velocity, resolves the method by its wire name
/// and reports the new trajectory velocity alongside the effectiveness of
/// the attempt.
pub fn simulate_deflection(
    original_velocity_kmps: f64,
    method: &str,
    params: &DeflectionParams,
) -> Result<DeflectionReport, InputError> {
    if original_velocity_kmps <= 0.0 {
        return Err(InputError::NonPositiveVelocity(original_velocity_kmps));
    }

    let strategy = DeflectionMethod::from_request(method, params)?;
    let delta_v_kmps = strategy.delta_v_kmps();
    let new_velocity_kmps = original_velocity_kmps + delta_v_kmps;
    let effectiveness_percent = ((delta_v_kmps / original_velocity_kmps).abs() * 100.0).min(100.0);

    let (duration_days, yield_megatons) = match strategy {
        DeflectionMethod::GravityTractor { duration_days, .. } => (Some(duration_days), None),
        DeflectionMethod::Nuclear { yield_megatons } => (None, Some(yield_megatons)),
        DeflectionMethod::KineticImpactor { .. } => (None, None),
    };

    info!(
        "{}: delta-v {:.3e} km/s against {:.1} km/s trajectory ({:.4}% effective)",
        strategy.description(),
        delta_v_kmps,
        original_velocity_kmps,
        effectiveness_percent
    );

    Ok(DeflectionReport {
        method: strategy.reported_name(),
        original_velocity_kmps,
        new_velocity_kmps,
        delta_v_kmps,
        effectiveness_percent,
        duration_days,
        yield_megatons,
    })
}
