//! Forward geodesic projection on a sphere.

use crate::config::{GeoConfig, EARTH_RADIUS_M};
use crate::Coordinate;

/// Calculates the coordinate reached by travelling `distance` meters from
/// `from` along the great circle with initial `bearing`.
///
/// The bearing is in degrees clockwise from true north. The resulting
/// longitude is not wrapped; call [`Coordinate::normalized`] for output in
/// [-180, 180]. Altitude and measure of `from` are carried over.
///
/// # Example
/// ```
/// use gistools_geo::{destination, Coordinate};
///
/// let start = Coordinate::new(39.0, -75.0);
/// let east = destination(&start, 100_000.0, 90.0);
/// assert!((east.longitude - -73.842853).abs() < 1e-6);
/// ```
#[inline]
pub fn destination(from: &Coordinate, distance: f64, bearing: f64) -> Coordinate {
    destination_with_radius(from, distance, bearing, EARTH_RADIUS_M)
}

impl GeoConfig {
    /// Forward geodesic projection on a sphere with the configured radius.
    #[inline]
    pub fn destination(&self, from: &Coordinate, distance: f64, bearing: f64) -> Coordinate {
        destination_with_radius(from, distance, bearing, self.earth_radius_m)
    }
}

fn destination_with_radius(from: &Coordinate, distance: f64, bearing: f64, radius: f64) -> Coordinate {
    let (lat1, lon1) = from.to_radians();
    let bearing = bearing.to_radians();
    let angular = distance / radius;

    let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos())
        .clamp(-1.0, 1.0)
        .asin();
    let lon2 = lon1
        + (bearing.sin() * angular.sin() * lat1.cos())
            .atan2(angular.cos() - lat1.sin() * lat2.sin());

    Coordinate {
        latitude: lat2.to_degrees(),
        longitude: lon2.to_degrees(),
        ..*from
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{convert_length, LengthUnit};
    use crate::haversine_distance;
    use proptest::prelude::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {} ± {}, got {}",
            expected,
            tolerance,
            actual
        );
    }

    #[test]
    fn test_destination_north() {
        let start = Coordinate::new(38.10096062273525, -75.0);
        let result = destination(&start, 100_000.0, 0.0);
        assert_close(result.latitude, 39.000281, 0.000001);
        assert_close(result.longitude, -75.0, 0.000001);
    }

    #[test]
    fn test_destination_south() {
        let start = Coordinate::new(39.0, -75.0);
        let result = destination(&start, 100_000.0, 180.0);
        assert_close(result.latitude, 38.10068, 0.000001);
        assert_close(result.longitude, -75.0, 0.000001);
    }

    #[test]
    fn test_destination_east() {
        let start = Coordinate::new(39.0, -75.0);
        let result = destination(&start, 100_000.0, 90.0);
        assert_close(result.latitude, 38.994285, 0.000001);
        assert_close(result.longitude, -73.842853, 0.000001);
    }

    // Far-reaching projection; other spherical libraries report a different
    // point here, these values pin the formula as implemented.
    #[test]
    fn test_destination_five_thousand_miles_east() {
        let distance = convert_length(5000.0, LengthUnit::Miles, LengthUnit::Meters);
        assert_close(distance, 8_046_720.0, 0.1);

        let start = Coordinate::new(39.0, -75.0);
        let result = destination(&start, distance, 90.0);
        assert_close(result.latitude, 10.990466075751455, 0.000001);
        assert_close(result.longitude, 1.123702522680564, 0.000001);
    }

    #[test]
    fn test_destination_not_normalized() {
        let start = Coordinate::new(0.0, 179.5);
        let result = destination(&start, 200_000.0, 90.0);
        assert!(result.longitude > 180.0);
        assert!(result.normalized().longitude < -178.0);
    }

    #[test]
    fn test_destination_onto_pole_is_finite() {
        let latitude = 84.31521584710167;
        let distance = (90.0f64 - latitude).to_radians() * EARTH_RADIUS_M;
        let result = destination(&Coordinate::new(latitude, 12.0), distance, 0.0);
        assert!(result.latitude.is_finite() && result.longitude.is_finite());
        assert_close(result.latitude, 90.0, 1e-6);
    }

    #[test]
    fn test_destination_keeps_altitude() {
        let start = Coordinate::new(10.0, 10.0).with_altitude(250.0);
        assert_eq!(destination(&start, 1_000.0, 45.0).altitude, Some(250.0));
    }

    #[test]
    fn test_zero_distance_is_identity() {
        let start = Coordinate::new(48.8566, 2.3522);
        assert_eq!(destination(&start, 0.0, 123.0), start);
    }

    #[test]
    fn test_config_destination_matches_default() {
        let start = Coordinate::new(39.0, -75.0);
        let config = GeoConfig::default();
        assert_eq!(
            config.destination(&start, 100_000.0, 90.0),
            destination(&start, 100_000.0, 90.0)
        );
    }

    proptest! {
        #[test]
        fn prop_distance_round_trip(
            lat in -80.0f64..80.0,
            lon in -180.0f64..180.0,
            bearing in 0.0f64..360.0,
            distance in 1.0f64..1_000_000.0,
        ) {
            let start = Coordinate::new(lat, lon);
            let end = destination(&start, distance, bearing);
            let measured = haversine_distance(&start, &end);
            prop_assert!((measured - distance).abs() < 1e-3 * distance.max(1.0));
        }
    }
}
