//! Groundfall demo binary.
//!
//! Assesses one hypothetical impact over New York, compares the three
//! deflection strategies against it, and, when the NEO catalog is
//! reachable, repeats the assessment for a live potentially-hazardous
//! asteroid.

use tracing::warn;
use tracing_subscriber::EnvFilter;

use groundfall::deflection::{simulate_deflection, DeflectionParams};
use groundfall::geocode::NominatimClient;
use groundfall::neo::NeoClient;
use groundfall::report::{assess_asteroid_impact, assess_impact};
use groundfall::types::AsteroidProfile;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // A 300 m stony body at 20 km/s over lower Manhattan
    let profile = AsteroidProfile::new(0.3, 20.0);
    let geocoder = NominatimClient::new();

    let report = assess_impact(&geocoder, profile, 40.7128, -74.0060, 45.0)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    // What would it take to push it off course?
    for method in ["kinetic_impactor", "gravity_tractor", "nuclear"] {
        let outcome =
            simulate_deflection(profile.velocity_kmps, method, &DeflectionParams::default())?;
        println!(
            "{}: delta-v {:.3e} km/s, effectiveness {:.5}%",
            outcome.method, outcome.delta_v_kmps, outcome.effectiveness_percent
        );
    }

    let neo = NeoClient::new(
        std::env::var("NASA_API_KEY").unwrap_or_else(|_| "DEMO_KEY".to_string()),
    );
    match neo.browse(Some(true)) {
        Ok(catalog) => {
            println!(
                "{} potentially hazardous asteroids on the first catalog page",
                catalog.count
            );
            // Records without approach data carry zero velocity and
            // cannot be simulated
            if let Some(asteroid) = catalog.asteroids.iter().find(|a| a.velocity_kmps > 0.0) {
                let live = assess_asteroid_impact(&geocoder, asteroid, 40.7128, -74.0060, 45.0)?;
                println!(
                    "{} at the same site: {} deaths ({})",
                    asteroid.name, live.casualties.estimated_deaths, live.casualties.severity
                );
            }
        }
        Err(err) => warn!("NEO catalog unavailable: {err}"),
    }

    Ok(())
}
