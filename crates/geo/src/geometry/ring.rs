//! Closed linear ring.

use crate::error::{GeoError, Result};
use crate::Coordinate;

/// Minimum number of positions in a closed ring.
const MIN_RING_LEN: usize = 4;

/// A closed loop of coordinates: at least four positions, first equal to last.
///
/// Winding order and self-intersection are not checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    coordinates: Vec<Coordinate>,
}

impl Ring {
    /// Creates a ring, checking length and closure.
    ///
    /// # Example
    /// ```
    /// use gistools_geo::{Coordinate, Ring};
    ///
    /// let square = vec![
    ///     Coordinate::new(0.0, 100.0),
    ///     Coordinate::new(0.0, 101.0),
    ///     Coordinate::new(1.0, 101.0),
    ///     Coordinate::new(0.0, 100.0),
    /// ];
    /// assert!(Ring::new(square).is_ok());
    /// assert!(Ring::new(vec![Coordinate::new(0.0, 0.0)]).is_err());
    /// ```
    pub fn new(coordinates: Vec<Coordinate>) -> Result<Self> {
        check_ring(&coordinates).map_err(|reason| {
            tracing::debug!(len = coordinates.len(), %reason, "rejected ring");
            GeoError::InvalidRing(reason)
        })?;
        Ok(Self { coordinates })
    }

    /// Creates a ring without any checks.
    pub fn new_unchecked(coordinates: Vec<Coordinate>) -> Self {
        Self { coordinates }
    }

    /// Returns true if the ring satisfies the length and closure invariant.
    pub fn is_valid(&self) -> bool {
        check_ring(&self.coordinates).is_ok()
    }

    /// The coordinates, closing position included.
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

    /// Consumes the ring, returning its coordinates.
    pub fn into_inner(self) -> Vec<Coordinate> {
        self.coordinates
    }
}

fn check_ring(coordinates: &[Coordinate]) -> std::result::Result<(), String> {
    if coordinates.len() < MIN_RING_LEN {
        return Err(format!(
            "expected at least {} coordinates, got {}",
            MIN_RING_LEN,
            coordinates.len()
        ));
    }
    match (coordinates.first(), coordinates.last()) {
        (Some(first), Some(last)) if first == last => Ok(()),
        _ => Err("first and last coordinates differ".to_string()),
    }
}

impl TryFrom<Vec<Coordinate>> for Ring {
    type Error = GeoError;

    fn try_from(coordinates: Vec<Coordinate>) -> Result<Self> {
        Self::new(coordinates)
    }
}

impl From<Ring> for Vec<Coordinate> {
    fn from(ring: Ring) -> Self {
        ring.coordinates
    }
}
