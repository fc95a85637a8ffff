//! Property-based tests for the impact calculators using proptest.
//!
//! These tests verify scaling invariants across a wide range of asteroid
//! parameters.

use proptest::prelude::*;

use super::*;
use crate::types::AsteroidProfile;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Mass grows with the cube of the diameter.
    ///
    /// Doubling the diameter must multiply the mass by exactly 8.
    #[test]
    fn prop_mass_cubic_in_diameter(
        diameter_km in 0.001f64..50.0,
        density in 500.0f64..9000.0,
    ) {
        let small = asteroid_mass(diameter_km, Some(density));
        let large = asteroid_mass(diameter_km * 2.0, Some(density));

        let ratio = large / small;
        prop_assert!(
            (ratio - 8.0).abs() < 1e-9,
            "mass ratio for doubled diameter was {ratio}, expected 8"
        );
    }

    /// Mass is linear in density.
    #[test]
    fn prop_mass_linear_in_density(
        diameter_km in 0.001f64..50.0,
        density in 500.0f64..9000.0,
        factor in 1.1f64..5.0,
    ) {
        let base = asteroid_mass(diameter_km, Some(density));
        let scaled = asteroid_mass(diameter_km, Some(density * factor));

        let ratio = scaled / base;
        prop_assert!(
            (ratio - factor).abs() < 1e-9,
            "mass ratio {ratio} does not match density factor {factor}"
        );
    }

    /// Kinetic energy is quadratic in velocity: doubling v quadruples E.
    #[test]
    fn prop_energy_quadruples_when_velocity_doubles(
        mass_kg in 1.0e6f64..1.0e18,
        velocity_kmps in 1.0f64..40.0,
    ) {
        let base = impact_energy(mass_kg, velocity_kmps);
        let doubled = impact_energy(mass_kg, velocity_kmps * 2.0);

        let ratio = doubled.joules / base.joules;
        prop_assert!(
            (ratio - 4.0).abs() < 1e-9,
            "energy ratio for doubled velocity was {ratio}, expected 4"
        );
    }

    /// Kinetic energy increases strictly with velocity for fixed mass.
    #[test]
    fn prop_energy_monotonic_in_velocity(
        mass_kg in 1.0e6f64..1.0e18,
        velocity_kmps in 1.0f64..40.0,
        increase in 0.1f64..40.0,
    ) {
        let slow = impact_energy(mass_kg, velocity_kmps);
        let fast = impact_energy(mass_kg, velocity_kmps + increase);

        prop_assert!(
            fast.joules > slow.joules,
            "energy did not grow: {} J at {} km/s vs {} J at {} km/s",
            slow.joules, velocity_kmps, fast.joules, velocity_kmps + increase
        );
        prop_assert!(fast.megatons_tnt > slow.megatons_tnt);
    }

    /// Crater diameter grows with impact angle up to vertical.
    ///
    /// sin(angle) is strictly increasing on [0, 90], so a steeper impact
    /// always digs a wider crater.
    #[test]
    fn prop_crater_grows_toward_vertical(
        diameter_km in 0.01f64..10.0,
        velocity_kmps in 5.0f64..40.0,
        shallow_angle in 1.0f64..44.0,
        steep_angle in 46.0f64..90.0,
    ) {
        let shallow = crater_size(diameter_km, velocity_kmps, shallow_angle);
        let steep = crater_size(diameter_km, velocity_kmps, steep_angle);

        prop_assert!(
            steep.diameter_km > shallow.diameter_km,
            "crater at {steep_angle} deg not wider than at {shallow_angle} deg"
        );
    }

    /// All blast radii stay finite and positive across the parameter space.
    #[test]
    fn prop_blast_zones_finite_and_positive(
        diameter_km in 0.001f64..50.0,
        velocity_kmps in 1.0f64..72.0,
    ) {
        let zones = blast_zones(diameter_km, velocity_kmps);

        for radius in [
            zones.fireball_radius_km,
            zones.total_destruction_radius_km,
            zones.severe_damage_radius_km,
            zones.moderate_damage_radius_km,
            zones.thermal_radiation_radius_km,
        ] {
            prop_assert!(radius.is_finite() && radius > 0.0, "bad radius {radius}");
        }
        prop_assert!(zones.energy_megatons > 0.0);
    }

    /// The Richter magnitude never drops below its documented floor.
    #[test]
    fn prop_magnitude_bounded_below(
        diameter_km in 0.0f64..50.0,
        velocity_kmps in 0.0f64..72.0,
    ) {
        let seismic = seismic_effects(diameter_km, velocity_kmps);
        prop_assert!(
            seismic.richter_magnitude >= -2.9 - 1e-12,
            "magnitude {} fell below the floor",
            seismic.richter_magnitude
        );
    }

    /// The full simulation is a pure function of its inputs.
    #[test]
    fn prop_full_simulation_idempotent(
        diameter_km in 0.001f64..50.0,
        velocity_kmps in 1.0f64..72.0,
        density in 500.0f64..9000.0,
        latitude in -90.0f64..90.0,
        longitude in -180.0f64..180.0,
        angle in 0.0f64..180.0,
    ) {
        let profile = AsteroidProfile::new(diameter_km, velocity_kmps).with_density(density);

        let first = full_impact_simulation(profile, latitude, longitude, angle);
        let second = full_impact_simulation(profile, latitude, longitude, angle);

        prop_assert_eq!(first, second);
    }
}

#[cfg(test)]
mod deterministic_tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_crater_never_nan_over_full_angle_sweep() {
        for angle in (0..=360).step_by(15) {
            let crater = crater_size(1.0, 20.0, angle as f64);
            assert!(
                crater.diameter_km.is_finite(),
                "crater diameter not finite at {} degrees",
                angle
            );
        }
    }

    #[test]
    fn test_blast_zone_ratios_are_scale_free() {
        // Destruction, severe and moderate zones share the 0.33 exponent, so
        // their ratios reduce to coefficient ratios for any impact size.
        for (diameter, velocity) in [(0.05, 12.0), (1.0, 20.0), (10.0, 30.0)] {
            let zones = blast_zones(diameter, velocity);
            assert_relative_eq!(
                zones.severe_damage_radius_km / zones.total_destruction_radius_km,
                4.7 / 2.2,
                max_relative = 1e-12
            );
            assert_relative_eq!(
                zones.moderate_damage_radius_km / zones.total_destruction_radius_km,
                7.5 / 2.2,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_default_impact_angle_is_oblique() {
        assert_eq!(DEFAULT_IMPACT_ANGLE_DEG, 45.0);
    }
}
