//! Curated population density tables.
//!
//! Hand-assigned densities for 30 major cities plus a list of countries
//! whose countryside is dense enough to warrant a raised baseline. Values
//! are people per square kilometre for the metro area, not the city core.

/// A named city with a known average population density.
#[derive(Clone, Copy, Debug)]
pub struct CityDensity {
    pub name: &'static str,
    pub density_per_km2: u32,
}

/// Major cities with known population densities.
pub static MAJOR_CITIES: &[CityDensity] = &[
    CityDensity { name: "New York", density_per_km2: 10800 },
    CityDensity { name: "Tokyo", density_per_km2: 6300 },
    CityDensity { name: "Mumbai", density_per_km2: 20700 },
    CityDensity { name: "London", density_per_km2: 5700 },
    CityDensity { name: "Paris", density_per_km2: 21000 },
    CityDensity { name: "Moscow", density_per_km2: 8500 },
    CityDensity { name: "Cairo", density_per_km2: 19400 },
    CityDensity { name: "Los Angeles", density_per_km2: 3200 },
    CityDensity { name: "Chicago", density_per_km2: 4600 },
    CityDensity { name: "Beijing", density_per_km2: 1300 },
    CityDensity { name: "Shanghai", density_per_km2: 3800 },
    CityDensity { name: "Singapore", density_per_km2: 8000 },
    CityDensity { name: "São Paulo", density_per_km2: 7400 },
    CityDensity { name: "Mexico City", density_per_km2: 6000 },
    CityDensity { name: "Seoul", density_per_km2: 16000 },
    CityDensity { name: "Manila", density_per_km2: 43000 },
    CityDensity { name: "Delhi", density_per_km2: 11300 },
    CityDensity { name: "Istanbul", density_per_km2: 2900 },
    CityDensity { name: "Bangkok", density_per_km2: 5300 },
    CityDensity { name: "Tehran", density_per_km2: 11800 },
    CityDensity { name: "Buenos Aires", density_per_km2: 14500 },
    CityDensity { name: "Karachi", density_per_km2: 24000 },
    CityDensity { name: "Dhaka", density_per_km2: 44500 },
    CityDensity { name: "Lagos", density_per_km2: 13100 },
    CityDensity { name: "Jakarta", density_per_km2: 14400 },
    CityDensity { name: "Hong Kong", density_per_km2: 6800 },
    CityDensity { name: "Sydney", density_per_km2: 400 },
    CityDensity { name: "Toronto", density_per_km2: 4300 },
    CityDensity { name: "Berlin", density_per_km2: 4100 },
    CityDensity { name: "Madrid", density_per_km2: 5400 },
];

/// Countries dense enough that unrecognized places default to 8000/km²
/// instead of the remote-land baseline.
pub static HIGH_DENSITY_COUNTRIES: &[&str] = &[
    "Singapore",
    "Monaco",
    "Vatican City",
    "Malta",
    "Bangladesh",
    "Bahrain",
    "Netherlands",
    "South Korea",
    "Taiwan",
    "India",
    "Belgium",
    "Japan",
    "Philippines",
];

/// Look up a city's hand-assigned density. Exact name match only.
pub fn major_city_density(city: &str) -> Option<u32> {
    MAJOR_CITIES
        .iter()
        .find(|entry| entry.name == city)
        .map(|entry| entry.density_per_km2)
}

pub fn is_high_density_country(country: &str) -> bool {
    HIGH_DENSITY_COUNTRIES.contains(&country)
}
