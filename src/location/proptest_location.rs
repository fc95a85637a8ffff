//! Property-based tests for the site classifier.
//!
//! The casualty model trusts one invariant above all: water, zero density
//! and the ocean band always travel together, whichever path produced the
//! descriptor.

use proptest::prelude::*;

use super::*;
use crate::geocode::{AddressDetails, GeocodeError, GeocodeResponse};

fn optional_name(value: &'static str) -> impl Strategy<Value = Option<String>> {
    proptest::option::of(Just(value.to_string()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The fallback path must hold the water/density/type invariant for
    /// every coordinate on the globe.
    #[test]
    fn prop_fallback_descriptor_is_consistent(
        latitude in -90.0f64..=90.0,
        longitude in -180.0f64..=180.0,
    ) {
        let descriptor = classify(
            latitude,
            longitude,
            Err(GeocodeError::Transport("unreachable".to_string())),
        );

        prop_assert_eq!(descriptor.detection_method, DetectionMethod::Fallback);
        prop_assert_eq!(descriptor.is_water, descriptor.population_density == 0);
        prop_assert_eq!(
            descriptor.is_water,
            descriptor.location_type == LocationType::Ocean
        );
        prop_assert!(descriptor.city.is_none());
        prop_assert!(descriptor.country.is_none());

        if descriptor.is_water {
            prop_assert!(
                descriptor.location_name.ends_with("Ocean"),
                "water fallback should name an ocean, got '{}'",
                descriptor.location_name
            );
        } else {
            prop_assert_eq!(descriptor.location_name.as_str(), "Remote Area");
            prop_assert_eq!(descriptor.population_density, 50);
        }
    }

    /// Any combination of address components on a non-water display name
    /// classifies as land with a positive density.
    #[test]
    fn prop_geocoded_land_is_never_water(
        city in optional_name("Milton"),
        town in optional_name("Milton"),
        village in optional_name("Milton"),
        suburb in optional_name("East Side"),
        district in optional_name("Old Quarter"),
        hamlet in optional_name("Milton"),
        industrial in optional_name("Port Zone"),
        country in optional_name("Testland"),
    ) {
        let response = GeocodeResponse {
            display_name: "Somewhere Inland, Testland".to_string(),
            address: AddressDetails {
                city,
                town,
                village,
                suburb,
                district,
                hamlet,
                industrial,
                country,
                ..Default::default()
            },
        };

        let descriptor = classify(10.0, 10.0, Ok(response));

        prop_assert!(!descriptor.is_water);
        prop_assert!(descriptor.population_density > 0);
        prop_assert!(descriptor.location_type != LocationType::Ocean);
        prop_assert_eq!(descriptor.detection_method, DetectionMethod::GeocodingApi);
        prop_assert!(descriptor.country.is_some());
        prop_assert!(!descriptor.location_name.is_empty());
    }

    /// Density bands partition the whole density range with no gaps.
    #[test]
    fn prop_every_density_gets_a_band(density in 0u32..1_000_000) {
        let band = LocationType::from_density(density);

        prop_assert_eq!(band == LocationType::Ocean, density == 0);
        if density > 0 {
            prop_assert!(
                matches!(
                    band,
                    LocationType::DenseUrban
                        | LocationType::Urban
                        | LocationType::Suburban
                        | LocationType::Rural
                        | LocationType::RemoteLand
                ),
                "density {} produced no land band",
                density
            );
        }
    }
}

#[cfg(test)]
mod deterministic_tests {
    use super::*;

    #[test]
    fn water_keyword_list_is_stable() {
        assert_eq!(WATER_KEYWORDS.len(), 8);
        assert!(WATER_KEYWORDS.contains(&"lake"));
        assert!(WATER_KEYWORDS.contains(&"river"));
    }

    #[test]
    fn fallback_ocean_names_end_with_ocean() {
        for name in [
            fallback_descriptor(0.0, -170.0).location_name,
            fallback_descriptor(30.0, -40.0).location_name,
            fallback_descriptor(-20.0, 80.0).location_name,
            fallback_descriptor(80.0, 0.0).location_name,
            fallback_descriptor(-80.0, 0.0).location_name,
        ] {
            assert!(name.ends_with("Ocean"), "unexpected name {name}");
        }
    }
}
