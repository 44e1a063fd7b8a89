//! Open path of coordinates.

use crate::error::{GeoError, Result};
use crate::Coordinate;

/// An open path of at least two coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    coordinates: Vec<Coordinate>,
}

impl LineString {
    /// Creates a line string, checking that it has at least two coordinates.
    pub fn new(coordinates: Vec<Coordinate>) -> Result<Self> {
        if coordinates.len() < 2 {
            tracing::debug!(len = coordinates.len(), "rejected line string");
            return Err(GeoError::InvalidLineString(format!(
                "expected at least 2 coordinates, got {}",
                coordinates.len()
            )));
        }
        Ok(Self { coordinates })
    }

    /// Creates a line string without any checks.
    pub fn new_unchecked(coordinates: Vec<Coordinate>) -> Self {
        Self { coordinates }
    }

    /// Returns true if there are at least two coordinates.
    pub fn is_valid(&self) -> bool {
        self.coordinates.len() >= 2
    }

    /// The coordinates in path order.
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Sum of the great-circle distances between consecutive coordinates, in meters.
    pub fn length(&self) -> f64 {
        self.coordinates
            .windows(2)
            .map(|pair| crate::haversine_distance(&pair[0], &pair[1]))
            .sum()
    }

    /// Consumes the line string, returning its coordinates.
    pub fn into_inner(self) -> Vec<Coordinate> {
        self.coordinates
    }
}

impl TryFrom<Vec<Coordinate>> for LineString {
    type Error = GeoError;

    fn try_from(coordinates: Vec<Coordinate>) -> Result<Self> {
        Self::new(coordinates)
    }
}
