//! Bridge to platform location fixes.
//!
//! A [`Location`] mirrors what location services report: a position plus
//! accuracy figures and a timestamp. Conversions in both directions are
//! lossy. A non-positive vertical accuracy means the altitude is unknown.

use crate::coordinate::AsCoordinate;
use crate::Coordinate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A location fix as reported by a positioning service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    /// Altitude in meters, meaningful only when `vertical_accuracy > 0`
    pub altitude: f64,
    /// Horizontal accuracy radius in meters; non-positive means invalid
    pub horizontal_accuracy: f64,
    /// Vertical accuracy in meters; non-positive means invalid
    pub vertical_accuracy: f64,
    pub timestamp: DateTime<Utc>,
}

impl Location {
    /// True when the altitude can be trusted.
    pub fn has_altitude(&self) -> bool {
        self.vertical_accuracy > 0.0
    }
}

impl From<&Location> for Coordinate {
    fn from(location: &Location) -> Self {
        let coordinate = Coordinate::new(location.latitude, location.longitude);
        if location.has_altitude() {
            coordinate.with_altitude(location.altitude)
        } else {
            coordinate
        }
    }
}

impl From<Location> for Coordinate {
    fn from(location: Location) -> Self {
        Coordinate::from(&location)
    }
}

impl AsCoordinate for Location {
    fn coordinate(&self) -> Coordinate {
        Coordinate::from(self)
    }
}

impl Coordinate {
    /// Builds a location fix stamped with the current time.
    ///
    /// Horizontal accuracy is always 1 m. Vertical accuracy is 1 m when an
    /// altitude is present and -1 otherwise, with the altitude set to -1.
    /// The measure is dropped.
    pub fn to_location(&self) -> Location {
        self.to_location_at(Utc::now())
    }

    /// Same as [`Coordinate::to_location`] with an explicit timestamp.
    pub fn to_location_at(&self, timestamp: DateTime<Utc>) -> Location {
        Location {
            latitude: self.latitude,
            longitude: self.longitude,
            altitude: self.altitude.unwrap_or(-1.0),
            horizontal_accuracy: 1.0,
            vertical_accuracy: if self.altitude.is_some() { 1.0 } else { -1.0 },
            timestamp,
        }
    }
}
