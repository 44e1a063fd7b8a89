//! Geodetic coordinate value type.

use crate::config::{GeoConfig, DEFAULT_EQUALITY_EPSILON};
use crate::error::{GeoError, Result};
use crate::json::is_json_integer;
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;

/// A geographic coordinate with latitude, longitude and optional altitude
/// and measure.
///
/// Equality is tolerant: latitude and longitude compare within
/// [`DEFAULT_EQUALITY_EPSILON`], altitude compares exactly and the measure is
/// ignored. Because a tolerance comparison is not transitive, `Coordinate`
/// implements neither `Eq` nor `Hash`; see [`Coordinate::grid_key`].
///
/// Serializes as a GeoJSON position `[longitude, latitude, altitude?, measure?]`.
#[derive(Debug, Clone, Copy, serde::Deserialize)]
#[serde(try_from = "Vec<f64>")]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (conceptually -180 to 180, see [`Coordinate::normalized`])
    pub longitude: f64,
    /// Altitude in meters
    pub altitude: Option<f64>,
    /// Linear referencing value. Meaning is left to the application.
    pub measure: Option<f64>,
}

impl Coordinate {
    /// Creates a new coordinate without altitude or measure.
    ///
    /// # Arguments
    /// * `latitude` - Latitude in degrees (-90 to 90)
    /// * `longitude` - Longitude in degrees (-180 to 180)
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude: None,
            measure: None,
        }
    }

    /// Creates a coordinate from all four components.
    #[inline]
    pub const fn with_components(
        latitude: f64,
        longitude: f64,
        altitude: Option<f64>,
        measure: Option<f64>,
    ) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
            measure,
        }
    }

    /// Returns a copy with the given altitude in meters.
    #[inline]
    pub fn with_altitude(mut self, altitude: f64) -> Self {
        self.altitude = Some(altitude);
        self
    }

    /// Returns a copy with the given measure.
    #[inline]
    pub fn with_measure(mut self, measure: f64) -> Self {
        self.measure = Some(measure);
        self
    }

    /// Builds a coordinate from a GeoJSON position slice.
    ///
    /// The order is `[longitude, latitude, altitude?, measure?]`. Components
    /// past the fourth are ignored.
    ///
    /// # Example
    /// ```
    /// use gistools_geo::Coordinate;
    ///
    /// let coord = Coordinate::from_position(&[13.4050, 52.5200, 34.0]).unwrap();
    /// assert_eq!(coord.latitude, 52.5200);
    /// assert_eq!(coord.altitude, Some(34.0));
    /// assert!(Coordinate::from_position(&[13.4050]).is_err());
    /// ```
    pub fn from_position(position: &[f64]) -> Result<Self> {
        match *position {
            [longitude, latitude] => Ok(Self::new(latitude, longitude)),
            [longitude, latitude, altitude] => {
                Ok(Self::new(latitude, longitude).with_altitude(altitude))
            }
            [longitude, latitude, altitude, measure, ..] => Ok(Self::with_components(
                latitude,
                longitude,
                Some(altitude),
                Some(measure),
            )),
            _ => Err(GeoError::MalformedCoordinate(format!(
                "expected at least 2 components, got {}",
                position.len()
            ))),
        }
    }

    /// Returns the GeoJSON position for this coordinate.
    ///
    /// A measure without an altitude ends up in the altitude slot, since
    /// positions are positional.
    pub fn to_position(&self) -> Vec<f64> {
        let mut position = Vec::with_capacity(4);
        position.push(self.longitude);
        position.push(self.latitude);
        if let Some(altitude) = self.altitude {
            position.push(altitude);
        }
        if let Some(measure) = self.measure {
            position.push(measure);
        }
        position
    }

    /// Returns a copy with the longitude wrapped into [-180, 180].
    ///
    /// Coordinates already in range are returned unchanged. Longitudes above
    /// 180 end up in (-180, 180], longitudes below -180 in [-180, 180).
    ///
    /// # Example
    /// ```
    /// use gistools_geo::Coordinate;
    ///
    /// let coord = Coordinate::new(10.0, 190.0).normalized();
    /// assert_eq!(coord.longitude, -170.0);
    /// ```
    pub fn normalized(&self) -> Self {
        let longitude = self.longitude;

        let wrapped = if longitude > 180.0 {
            let offset = (longitude - 180.0).rem_euclid(360.0);
            if offset == 0.0 { 180.0 } else { offset - 180.0 }
        } else if longitude < -180.0 {
            let offset = (longitude + 180.0).rem_euclid(360.0);
            if offset == 0.0 { -180.0 } else { offset - 180.0 }
        } else {
            return *self;
        };

        Self {
            longitude: wrapped,
            ..*self
        }
    }

    /// Tolerance comparison with an explicit epsilon in degrees.
    #[inline]
    pub fn approx_eq(&self, other: &Coordinate, epsilon: f64) -> bool {
        (self.latitude - other.latitude).abs() < epsilon
            && (self.longitude - other.longitude).abs() < epsilon
            && self.altitude == other.altitude
    }

    /// Quantizes the coordinate onto a grid of `epsilon` degrees.
    ///
    /// Coordinates with the same key are equal under [`Coordinate::approx_eq`]
    /// for the same epsilon up to one grid cell; two equal coordinates on
    /// either side of a cell boundary get different keys. Use it for
    /// bucketing, not as a substitute for comparison.
    pub fn grid_key(&self, epsilon: f64) -> (i64, i64, Option<u64>) {
        let quantize = |v: f64| {
            if epsilon > 0.0 {
                (v / epsilon).round() as i64
            } else {
                v.to_bits() as i64
            }
        };
        (
            quantize(self.latitude),
            quantize(self.longitude),
            self.altitude.map(f64::to_bits),
        )
    }

    /// Great-circle distance to `other` in meters, using the default Earth radius.
    ///
    /// # Example
    /// ```
    /// use gistools_geo::Coordinate;
    ///
    /// let berlin = Coordinate::new(52.5200, 13.4050);
    /// let paris = Coordinate::new(48.8566, 2.3522);
    /// assert!((berlin.distance(&paris) - 878_000.0).abs() < 5_000.0);
    /// ```
    #[inline]
    pub fn distance(&self, other: &Coordinate) -> f64 {
        crate::haversine_distance(self, other)
    }

    /// Projects this coordinate `distance` meters along initial `bearing`
    /// (degrees clockwise from north). The result is not normalized.
    #[inline]
    pub fn destination(&self, distance: f64, bearing: f64) -> Coordinate {
        crate::destination(self, distance, bearing)
    }

    /// Converts degrees to radians for internal calculations.
    #[inline]
    pub(crate) fn to_radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, DEFAULT_EQUALITY_EPSILON)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate(longitude: {}, latitude: {}", self.longitude, self.latitude)?;
        if let Some(altitude) = self.altitude {
            write!(f, ", altitude: {}", altitude)?;
        }
        if let Some(measure) = self.measure {
            write!(f, ", m: {}", measure)?;
        }
        write!(f, ")")
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

impl TryFrom<&[f64]> for Coordinate {
    type Error = GeoError;

    fn try_from(position: &[f64]) -> Result<Self> {
        Self::from_position(position)
    }
}

impl TryFrom<Vec<f64>> for Coordinate {
    type Error = GeoError;

    fn try_from(position: Vec<f64>) -> Result<Self> {
        Self::from_position(&position)
    }
}

impl From<Coordinate> for Vec<f64> {
    fn from(coord: Coordinate) -> Self {
        coord.to_position()
    }
}

impl Serialize for Coordinate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let position = self.to_position();
        let mut seq = serializer.serialize_seq(Some(position.len()))?;
        for value in position {
            if is_json_integer(value) {
                seq.serialize_element(&(value as i64))?;
            } else {
                seq.serialize_element(&value)?;
            }
        }
        seq.end()
    }
}

/// Anything that exposes a single coordinate.
///
/// Implementors get distance and destination computations for free.
pub trait AsCoordinate {
    /// The coordinate this value is located at.
    fn coordinate(&self) -> Coordinate;

    /// Great-circle distance in meters, using the default Earth radius.
    fn distance_to<T: AsCoordinate + ?Sized>(&self, other: &T) -> f64 {
        crate::haversine_distance(&self.coordinate(), &other.coordinate())
    }

    /// Great-circle distance in meters, using the radius from `config`.
    fn distance_to_with<T: AsCoordinate + ?Sized>(&self, other: &T, config: &GeoConfig) -> f64 {
        crate::haversine::haversine_distance_with_radius(
            &self.coordinate(),
            &other.coordinate(),
            config.earth_radius_m,
        )
    }

    /// Forward geodesic projection from this value's coordinate.
    fn destination(&self, distance: f64, bearing: f64) -> Coordinate {
        crate::destination(&self.coordinate(), distance, bearing)
    }
}

impl AsCoordinate for Coordinate {
    #[inline]
    fn coordinate(&self) -> Coordinate {
        *self
    }
}
