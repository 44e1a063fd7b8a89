//! Non-empty collection of positions.

use crate::error::{GeoError, Result};
use crate::Coordinate;

/// A non-empty collection of positions.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPoint {
    coordinates: Vec<Coordinate>,
}

impl MultiPoint {
    /// Creates a multi point, checking that it is not empty.
    pub fn new(coordinates: Vec<Coordinate>) -> Result<Self> {
        if coordinates.is_empty() {
            tracing::debug!("rejected empty multi point");
            return Err(GeoError::InvalidMultiPoint(
                "expected at least 1 coordinate".to_string(),
            ));
        }
        Ok(Self { coordinates })
    }

    /// Creates a multi point without any checks.
    pub fn new_unchecked(coordinates: Vec<Coordinate>) -> Self {
        Self { coordinates }
    }

    /// Returns true if there is at least one coordinate.
    pub fn is_valid(&self) -> bool {
        !self.coordinates.is_empty()
    }

    /// The coordinates in input order.
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

    /// Consumes the multi point, returning its coordinates.
    pub fn into_inner(self) -> Vec<Coordinate> {
        self.coordinates
    }
}

impl TryFrom<Vec<Coordinate>> for MultiPoint {
    type Error = GeoError;

    fn try_from(coordinates: Vec<Coordinate>) -> Result<Self> {
        Self::new(coordinates)
    }
}
