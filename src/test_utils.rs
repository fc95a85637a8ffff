//! Test utilities for impact estimation tests.
//!
//! Provides canned geocoding responses, stub geocoder backends and
//! assertions for the invariants every classified site and casualty
//! estimate must satisfy.

use crate::casualty::{CasualtyEstimate, CasualtySeverity};
use crate::geocode::{AddressDetails, GeocodeError, GeocodeResponse, ReverseGeocode};
use crate::location::{LocationDescriptor, LocationType};
use crate::types::AsteroidProfile;

/// Canned geocoding responses and asteroid profiles.
pub mod fixtures {
    use super::*;

    /// A dense-urban hit: New York is in the major-city table at 10800/km².
    pub fn city_response() -> GeocodeResponse {
        GeocodeResponse {
            display_name: "City of New York, New York, United States".to_string(),
            address: AddressDetails {
                city: Some("New York".to_string()),
                city_district: Some("Manhattan".to_string()),
                country: Some("United States".to_string()),
                ..Default::default()
            },
        }
    }

    /// A plain town with no districts, resolving to 2000/km².
    pub fn town_response() -> GeocodeResponse {
        GeocodeResponse {
            display_name: "Banff, Alberta, Canada".to_string(),
            address: AddressDetails {
                town: Some("Banff".to_string()),
                country: Some("Canada".to_string()),
                ..Default::default()
            },
        }
    }

    /// A village, resolving to 500/km².
    pub fn village_response() -> GeocodeResponse {
        GeocodeResponse {
            display_name: "Grindelwald, Bern, Switzerland".to_string(),
            address: AddressDetails {
                village: Some("Grindelwald".to_string()),
                country: Some("Switzerland".to_string()),
                ..Default::default()
            },
        }
    }

    /// Open water: the display name carries the "ocean" keyword.
    pub fn water_response() -> GeocodeResponse {
        GeocodeResponse {
            display_name: "North Atlantic Ocean".to_string(),
            address: AddressDetails::default(),
        }
    }

    /// Land with nothing but a country, resolving to the 50/km² default.
    pub fn remote_response() -> GeocodeResponse {
        GeocodeResponse {
            display_name: "Gobi Desert, Ömnögovi, Mongolia".to_string(),
            address: AddressDetails {
                country: Some("Mongolia".to_string()),
                ..Default::default()
            },
        }
    }

    /// 1 km stony body at 20 km/s, the workhorse reference impactor.
    pub fn reference_impactor() -> AsteroidProfile {
        AsteroidProfile::new(1.0, 20.0)
    }

    /// Roughly the 2013 Chelyabinsk airburst body: 20 m at 19 km/s.
    pub fn chelyabinsk() -> AsteroidProfile {
        AsteroidProfile::new(0.02, 19.0)
    }
}

/// Stub reverse-geocoding backends.
pub mod geocoders {
    use super::*;

    /// Backend that answers every lookup with one canned response.
    pub struct StaticGeocoder {
        response: GeocodeResponse,
    }

    impl StaticGeocoder {
        pub fn new(response: GeocodeResponse) -> Self {
            Self { response }
        }
    }

    impl ReverseGeocode for StaticGeocoder {
        fn lookup(&self, _latitude: f64, _longitude: f64) -> Result<GeocodeResponse, GeocodeError> {
            Ok(self.response.clone())
        }
    }

    /// Backend that fails every lookup, forcing the fallback path.
    pub struct FailingGeocoder;

    impl ReverseGeocode for FailingGeocoder {
        fn lookup(&self, _latitude: f64, _longitude: f64) -> Result<GeocodeResponse, GeocodeError> {
            Err(GeocodeError::Transport(
                "stub geocoder always fails".to_string(),
            ))
        }
    }
}

/// Assertions for the invariants of classified sites and estimates.
pub mod assertions {
    use super::*;

    /// Assert the water/density/type invariant of a descriptor.
    ///
    /// # Panics
    /// Panics if the water flag, zero density and ocean type disagree, or
    /// if a water descriptor carries administrative names.
    pub fn assert_descriptor_consistent(descriptor: &LocationDescriptor) {
        assert_eq!(
            descriptor.is_water,
            descriptor.population_density == 0,
            "water flag and zero density must agree for {}",
            descriptor.location_name
        );
        assert_eq!(
            descriptor.is_water,
            descriptor.location_type == LocationType::Ocean,
            "water flag and ocean type must agree for {}",
            descriptor.location_name
        );
        assert!(
            !descriptor.location_name.is_empty(),
            "descriptor must carry a location name"
        );
        if descriptor.is_water {
            assert!(
                descriptor.city.is_none() && descriptor.country.is_none(),
                "water descriptors carry no administrative names"
            );
        }
    }

    /// Assert the internal consistency of a casualty estimate.
    ///
    /// # Panics
    /// Panics if the counts, severity or ocean tagging contradict each
    /// other.
    pub fn assert_estimate_consistent(estimate: &CasualtyEstimate) {
        assert_eq!(
            estimate.is_ocean_impact,
            estimate.population_density == 0,
            "ocean tag and zero density must agree for {}",
            estimate.location_name
        );

        if estimate.is_ocean_impact {
            assert_eq!(estimate.estimated_deaths, 0);
            assert_eq!(estimate.estimated_injuries, 0);
            assert_eq!(estimate.affected_population, 0);
            assert_eq!(estimate.blast_area_km2, None);
            assert!(estimate.note.is_some(), "ocean impacts carry the tsunami note");
        } else {
            assert!(estimate.blast_area_km2.is_some());
            assert!(estimate.estimated_deaths <= estimate.affected_population);
            assert!(estimate.estimated_injuries <= estimate.affected_population);
        }

        assert_eq!(
            estimate.severity,
            CasualtySeverity::from_deaths(estimate.estimated_deaths),
            "severity must match the death count for {}",
            estimate.location_name
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::{classify, DetectionMethod};

    #[test]
    fn test_city_fixture_is_dense_urban() {
        let descriptor = classify(40.71, -74.0, Ok(fixtures::city_response()));

        assert_eq!(descriptor.population_density, 10800);
        assert_eq!(descriptor.location_type, LocationType::DenseUrban);
        assertions::assert_descriptor_consistent(&descriptor);
    }

    #[test]
    fn test_water_fixture_is_water() {
        let descriptor = classify(30.0, -40.0, Ok(fixtures::water_response()));

        assert!(descriptor.is_water);
        assertions::assert_descriptor_consistent(&descriptor);
    }

    #[test]
    fn test_all_fixtures_classify_consistently() {
        for response in [
            fixtures::city_response(),
            fixtures::town_response(),
            fixtures::village_response(),
            fixtures::water_response(),
            fixtures::remote_response(),
        ] {
            let descriptor = classify(10.0, 10.0, Ok(response));
            assertions::assert_descriptor_consistent(&descriptor);
        }
    }

    #[test]
    fn test_static_geocoder_echoes_response() {
        let geocoder = geocoders::StaticGeocoder::new(fixtures::town_response());

        let response = geocoder.lookup(51.18, -115.57).unwrap();
        assert_eq!(response.address.town.as_deref(), Some("Banff"));
    }

    #[test]
    fn test_failing_geocoder_forces_fallback() {
        let geocoder = geocoders::FailingGeocoder;

        let outcome = geocoder.lookup(0.0, 0.0);
        assert!(outcome.is_err());

        let descriptor = classify(0.0, -170.0, outcome);
        assert_eq!(descriptor.detection_method, DetectionMethod::Fallback);
        assertions::assert_descriptor_consistent(&descriptor);
    }
}
