//! Core value types and physical constants for impact estimation.

use serde::Serialize;
use thiserror::Error;

/// Physical constants (SI units unless noted)

/// TNT equivalence: joules released per kiloton of TNT
pub const TNT_JOULES_PER_KILOTON: f64 = 4.184e9;

/// Yield of the Hiroshima bomb in kilotons of TNT
pub const HIROSHIMA_YIELD_KILOTONS: f64 = 15.0;

/// Default asteroid bulk density (kg/m³), typical for stony bodies
pub const DEFAULT_ASTEROID_DENSITY_KG_M3: f64 = 3000.0;

/// Ergs per joule (CGS conversion used by the Richter relation)
pub const ERGS_PER_JOULE: f64 = 1.0e7;

/// Meters per kilometer
pub const M_PER_KM: f64 = 1000.0;

/// Kilograms per metric ton
pub const KG_PER_TON: f64 = 1000.0;

/// Input parameters describing an impacting asteroid.
///
/// A pure value object: diameter and velocity are required, density falls
/// back to [`DEFAULT_ASTEROID_DENSITY_KG_M3`] unless overridden.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AsteroidProfile {
    /// Diameter in kilometers
    pub diameter_km: f64,
    /// Impact velocity in km/s
    pub velocity_kmps: f64,
    /// Bulk density in kg/m³
    pub density_kg_m3: f64,
}

impl AsteroidProfile {
    /// Create a profile with the default stony density.
    pub fn new(diameter_km: f64, velocity_kmps: f64) -> Self {
        Self {
            diameter_km,
            velocity_kmps,
            density_kg_m3: DEFAULT_ASTEROID_DENSITY_KG_M3,
        }
    }

    /// Override the bulk density (kg/m³).
    pub fn with_density(mut self, density_kg_m3: f64) -> Self {
        self.density_kg_m3 = density_kg_m3;
        self
    }

    /// Diameter in meters
    pub fn diameter_m(&self) -> f64 {
        self.diameter_km * M_PER_KM
    }

    /// Velocity in m/s
    pub fn velocity_mps(&self) -> f64 {
        self.velocity_kmps * M_PER_KM
    }

    /// Reject non-physical parameters before any computation is attempted.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.diameter_km <= 0.0 {
            return Err(InputError::NonPositiveDiameter(self.diameter_km));
        }
        if self.velocity_kmps <= 0.0 {
            return Err(InputError::NonPositiveVelocity(self.velocity_kmps));
        }
        Ok(())
    }
}

/// Reject coordinates outside the valid geographic ranges.
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), InputError> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(InputError::LatitudeOutOfRange(latitude));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(InputError::LongitudeOutOfRange(longitude));
    }
    Ok(())
}

/// Errors raised at the input-validation boundary.
///
/// Every public operation validates its inputs up front and returns one of
/// these instead of attempting the computation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("asteroid diameter must be positive, got {0} km")]
    NonPositiveDiameter(f64),

    #[error("impact velocity must be positive, got {0} km/s")]
    NonPositiveVelocity(f64),

    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("unknown deflection method '{0}' (expected kinetic_impactor, gravity_tractor or nuclear)")]
    UnknownDeflectionMethod(String),
}
