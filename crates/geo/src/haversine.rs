//! Haversine distance calculation.
//!
//! The Haversine formula calculates the great-circle distance between two points
//! on a sphere given their longitudes and latitudes.

use crate::config::{GeoConfig, EARTH_RADIUS_KM, EARTH_RADIUS_M};
use crate::Coordinate;

/// Calculates the great-circle distance between two coordinates in meters.
///
/// Uses the Haversine formula on a sphere of radius [`EARTH_RADIUS_M`].
///
/// # Arguments
/// * `from` - Starting coordinate
/// * `to` - Ending coordinate
///
/// # Returns
/// Distance in meters
///
/// # Example
/// ```
/// use gistools_geo::{haversine_distance, Coordinate};
///
/// let berlin = Coordinate::new(52.5200, 13.4050);
/// let paris = Coordinate::new(48.8566, 2.3522);
///
/// let distance = haversine_distance(&berlin, &paris);
/// assert!((distance - 878_000.0).abs() < 5_000.0);
/// ```
#[inline]
pub fn haversine_distance(from: &Coordinate, to: &Coordinate) -> f64 {
    haversine_distance_with_radius(from, to, EARTH_RADIUS_M)
}

/// Calculates the great-circle distance between two coordinates in kilometers.
#[inline]
pub fn haversine_distance_km(from: &Coordinate, to: &Coordinate) -> f64 {
    haversine_distance_with_radius(from, to, EARTH_RADIUS_KM)
}

impl GeoConfig {
    /// Great-circle distance in meters on a sphere with the configured radius.
    #[inline]
    pub fn distance(&self, from: &Coordinate, to: &Coordinate) -> f64 {
        haversine_distance_with_radius(from, to, self.earth_radius_m)
    }
}

/// Calculates distance with a custom radius. The result is in the radius' unit.
#[inline]
pub(crate) fn haversine_distance_with_radius(from: &Coordinate, to: &Coordinate, radius: f64) -> f64 {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    // rounding can push `a` past 1.0 for antipodal pairs
    let a = ((d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    radius * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Test data: known distances between cities
    const BERLIN: Coordinate = Coordinate::new(52.5200, 13.4050);
    const PARIS: Coordinate = Coordinate::new(48.8566, 2.3522);
    const NEW_YORK: Coordinate = Coordinate::new(40.7128, -74.0060);
    const TOKYO: Coordinate = Coordinate::new(35.6762, 139.6503);

    #[test]
    fn test_berlin_to_paris() {
        let distance = haversine_distance_km(&BERLIN, &PARIS);
        // Expected: ~878 km
        assert!((distance - 878.0).abs() < 5.0, "Berlin-Paris: {}", distance);
    }

    #[test]
    fn test_new_york_to_tokyo() {
        let distance = haversine_distance_km(&NEW_YORK, &TOKYO);
        // Expected: ~10,838 km
        assert!((distance - 10838.0).abs() < 50.0, "NYC-Tokyo: {}", distance);
    }

    #[test]
    fn test_hundred_km_north() {
        let from = Coordinate::new(38.10096062273525, -75.0);
        let to = Coordinate::new(39.000281, -75.0);
        let distance = haversine_distance(&from, &to);
        assert!((distance - 100_000.0).abs() < 1.0, "distance: {}", distance);
    }

    #[test]
    fn test_same_point_zero_distance() {
        let distance = haversine_distance(&BERLIN, &BERLIN);
        assert!(distance.abs() < 0.001);
    }

    #[test]
    fn test_km_conversion() {
        let km = haversine_distance_km(&BERLIN, &PARIS);
        let meters = haversine_distance(&BERLIN, &PARIS);
        assert!((meters - km * 1000.0).abs() < 1.0);
    }

    #[test]
    fn test_config_radius_scales_distance() {
        let unit_sphere = GeoConfig {
            earth_radius_m: 1.0,
            ..GeoConfig::default()
        };
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 90.0);
        let distance = unit_sphere.distance(&a, &b);
        assert!((distance - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_antipodal_distance_is_finite() {
        let a = Coordinate::new(-33.442972751032784, -128.11122367356037);
        let b = Coordinate::new(33.442972751032784, 51.88877632643963);
        let distance = haversine_distance(&a, &b);
        assert!(distance.is_finite(), "antipodal distance: {}", distance);
        assert!((distance - std::f64::consts::PI * EARTH_RADIUS_M).abs() < 1.0);
    }

    #[test]
    fn test_altitude_ignored() {
        let a = Coordinate::new(10.0, 10.0).with_altitude(8_000.0);
        let b = Coordinate::new(10.0, 10.0);
        assert!(haversine_distance(&a, &b).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_symmetry(
            lat1 in -90.0f64..90.0, lon1 in -180.0f64..180.0,
            lat2 in -90.0f64..90.0, lon2 in -180.0f64..180.0,
        ) {
            let a = Coordinate::new(lat1, lon1);
            let b = Coordinate::new(lat2, lon2);
            let d1 = haversine_distance(&a, &b);
            let d2 = haversine_distance(&b, &a);
            prop_assert!((d1 - d2).abs() < 1e-6);
        }

        #[test]
        fn prop_self_distance_zero(lat in -90.0f64..90.0, lon in -180.0f64..180.0) {
            let a = Coordinate::new(lat, lon);
            prop_assert!(haversine_distance(&a, &a).abs() < 1e-9);
        }

        #[test]
        fn prop_bounded_by_half_circumference(
            lat1 in -90.0f64..90.0, lon1 in -180.0f64..180.0,
            lat2 in -90.0f64..90.0, lon2 in -180.0f64..180.0,
        ) {
            let d = haversine_distance(&Coordinate::new(lat1, lon1), &Coordinate::new(lat2, lon2));
            prop_assert!(d >= 0.0);
            prop_assert!(d <= std::f64::consts::PI * EARTH_RADIUS_M + 1e-6);
        }
    }
}
