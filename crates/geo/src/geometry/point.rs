//! Single-position geometry.

use crate::coordinate::AsCoordinate;
use crate::Coordinate;

/// A single position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    coordinate: Coordinate,
}

impl Point {
    /// Wraps a coordinate. A point is always valid.
    pub fn new(coordinate: Coordinate) -> Self {
        Self { coordinate }
    }

    /// Great-circle distance to another point, in meters.
    pub fn distance(&self, other: &Point) -> f64 {
        self.distance_to(other)
    }
}

impl AsCoordinate for Point {
    fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
}

impl From<Coordinate> for Point {
    fn from(coordinate: Coordinate) -> Self {
        Self::new(coordinate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let a = Point::new(Coordinate::new(38.10096062273525, -75.0));
        let b = Point::from(Coordinate::new(39.000281, -75.0));
        assert!((a.distance(&b) - 100_000.0).abs() < 1.0);
        assert!((b.distance_to(&a.coordinate()) - 100_000.0).abs() < 1.0);
    }

    #[test]
    fn test_point_destination() {
        let start = Point::new(Coordinate::new(39.0, -75.0));
        let end = start.destination(100_000.0, 90.0);
        assert!((end.latitude - 38.994285).abs() < 1e-6);
    }
}
