//! Impact site classification.
//!
//! Turns a reverse geocoding outcome into a [`LocationDescriptor`]: a water
//! flag, a human-readable name and an estimated population density for the
//! casualty model. When the lookup fails the classifier falls back to a
//! coarse rectangular partition of the five oceans, so a descriptor is
//! always produced.

pub mod tables;

#[cfg(test)]
mod proptest_location;

use serde::Serialize;
use tracing::warn;

use crate::geocode::{AddressDetails, GeocodeError, GeocodeResponse};

pub use tables::{HIGH_DENSITY_COUNTRIES, MAJOR_CITIES};

/// Substrings of a display name that mark the site as a water body.
pub const WATER_KEYWORDS: &[&str] = &[
    "ocean", "sea", "lake", "river", "bay", "gulf", "strait", "water",
];

/// Population density band of an impact site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    Ocean,
    DenseUrban,
    Urban,
    Suburban,
    Rural,
    RemoteLand,
}

impl LocationType {
    /// Classify a density (people/km²) into a band.
    ///
    /// Thresholds are strict, so a density of exactly 10000 falls in
    /// `Urban`, 3000 in `Suburban`, 1000 in `Rural` and 100 in
    /// `RemoteLand`. Zero means water.
    pub fn from_density(density: u32) -> Self {
        if density == 0 {
            LocationType::Ocean
        } else if density > 10000 {
            LocationType::DenseUrban
        } else if density > 3000 {
            LocationType::Urban
        } else if density > 1000 {
            LocationType::Suburban
        } else if density > 100 {
            LocationType::Rural
        } else {
            LocationType::RemoteLand
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LocationType::Ocean => "ocean",
            LocationType::DenseUrban => "dense_urban",
            LocationType::Urban => "urban",
            LocationType::Suburban => "suburban",
            LocationType::Rural => "rural",
            LocationType::RemoteLand => "remote_land",
        }
    }
}

impl std::fmt::Display for LocationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the site was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionMethod {
    /// Reverse geocoding lookup succeeded
    GeocodingApi,
    /// Coarse ocean-box heuristic after a failed lookup
    Fallback,
}

/// Classified impact site.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LocationDescriptor {
    pub is_water: bool,
    pub location_name: String,
    pub location_type: LocationType,
    /// People per km²; zero exactly when the site is water
    pub population_density: u32,
    pub city: Option<String>,
    pub country: Option<String>,
    pub detection_method: DetectionMethod,
    pub full_address: String,
}

/// Classify an impact site from a reverse geocoding outcome.
///
/// A successful lookup is scanned for water keywords and otherwise mined
/// for administrative names; any lookup failure downgrades to the
/// rectangular ocean-box heuristic. Never fails.
pub fn classify(
    latitude: f64,
    longitude: f64,
    lookup: Result<GeocodeResponse, GeocodeError>,
) -> LocationDescriptor {
    match lookup {
        Ok(response) => classify_response(&response),
        Err(err) => {
            warn!("reverse geocoding failed ({err}), using ocean-box fallback");
            fallback_descriptor(latitude, longitude)
        }
    }
}

fn classify_response(response: &GeocodeResponse) -> LocationDescriptor {
    let display_name = response.display_name.to_lowercase();

    if WATER_KEYWORDS.iter().any(|kw| display_name.contains(kw)) {
        return LocationDescriptor {
            is_water: true,
            location_name: title_case(first_segment(&display_name)),
            location_type: LocationType::Ocean,
            population_density: 0,
            city: None,
            country: None,
            detection_method: DetectionMethod::GeocodingApi,
            full_address: display_name,
        };
    }

    let address = &response.address;
    let city = most_specific_place(address);
    let country = address
        .country
        .clone()
        .unwrap_or_else(|| "Unknown".to_string());

    let population_density = estimate_density(address, city, &country);

    let location_name = match city {
        Some(city) => format!("{}, {}", city, country),
        None => title_case(first_segment(&display_name)),
    };

    LocationDescriptor {
        is_water: false,
        location_name,
        location_type: LocationType::from_density(population_density),
        population_density,
        city: city.map(str::to_string),
        country: Some(country),
        detection_method: DetectionMethod::GeocodingApi,
        full_address: display_name,
    }
}

/// Most specific administrative name, city first, county last.
fn most_specific_place(address: &AddressDetails) -> Option<&str> {
    address
        .city
        .as_deref()
        .or(address.town.as_deref())
        .or(address.village.as_deref())
        .or(address.municipality.as_deref())
        .or(address.county.as_deref())
}

/// Estimate population density from address components.
///
/// The rules run in priority order; the first hit wins. The place name fed
/// into the major-city lookup is the cascaded one, so a county named after
/// a listed city inherits that city's density.
fn estimate_density(address: &AddressDetails, place: Option<&str>, country: &str) -> u32 {
    if let Some(known) = place.and_then(tables::major_city_density) {
        return known;
    }

    // City with sub-city subdivisions resolves denser than a bare city
    if address.city.is_some()
        && (address.city_district.is_some()
            || address.suburb.is_some()
            || address.neighbourhood.is_some())
    {
        return 10000;
    }
    if address.city.is_some() {
        return 5000;
    }

    if address.town.is_some() {
        if address.suburb.is_some() || address.district.is_some() {
            return 3000;
        }
        return 2000;
    }

    if address.village.is_some() {
        return 500;
    }

    if address.hamlet.is_some() || address.isolated_dwelling.is_some() {
        return 100;
    }

    if tables::is_high_density_country(country) {
        return 8000;
    }

    if address.industrial.is_some() || address.commercial.is_some() {
        return 1000;
    }

    50
}

/// Site descriptor from coordinates alone, for when the lookup failed.
///
/// Rectangular approximations of the five oceans, tested in a fixed order;
/// coordinates outside every box count as remote land.
pub fn fallback_descriptor(latitude: f64, longitude: f64) -> LocationDescriptor {
    match ocean_box(latitude, longitude) {
        Some(name) => LocationDescriptor {
            is_water: true,
            location_name: name.to_string(),
            location_type: LocationType::Ocean,
            population_density: 0,
            city: None,
            country: None,
            detection_method: DetectionMethod::Fallback,
            full_address: name.to_string(),
        },
        None => LocationDescriptor {
            is_water: false,
            location_name: "Remote Area".to_string(),
            location_type: LocationType::RemoteLand,
            population_density: 50,
            city: None,
            country: None,
            detection_method: DetectionMethod::Fallback,
            full_address: "Remote Area".to_string(),
        },
    }
}

fn ocean_box(latitude: f64, longitude: f64) -> Option<&'static str> {
    // Bounds are exclusive except the antimeridian edge of the Pacific
    if latitude > -60.0
        && latitude < 60.0
        && ((longitude > 120.0 && longitude <= 180.0)
            || (longitude >= -180.0 && longitude < -70.0))
    {
        return Some("Pacific Ocean");
    }
    if latitude > -60.0 && latitude < 70.0 && longitude > -70.0 && longitude < -20.0 {
        return Some("Atlantic Ocean");
    }
    if latitude > -60.0 && latitude < 30.0 && longitude > 20.0 && longitude < 120.0 {
        return Some("Indian Ocean");
    }
    if latitude > 70.0 {
        return Some("Arctic Ocean");
    }
    if latitude < -60.0 {
        return Some("Southern Ocean");
    }
    None
}

fn first_segment(display_name: &str) -> &str {
    match display_name.split_once(',') {
        Some((head, _)) => head,
        None => display_name,
    }
}

/// Capitalize the first letter of every word, lowercasing the rest.
/// Any non-alphabetic character starts a new word.
fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;

    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                result.extend(ch.to_uppercase());
            } else {
                result.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            result.push(ch);
            at_word_start = true;
        }
    }

    result
}
