//! Groundfall - Asteroid Impact Consequence Estimator
//!
//! A library crate estimating the ground consequences of asteroid impacts:
//! kinetic energy and crater scaling, blast and seismic footprints,
//! population-aware casualty estimates and deflection what-ifs, fed by
//! NASA's NEO catalog and OpenStreetMap reverse geocoding.

pub mod casualty;
pub mod deflection;
pub mod geocode;
pub mod location;
pub mod neo;
pub mod physics;
pub mod report;
pub mod types;

#[cfg(test)]
pub mod test_utils;
