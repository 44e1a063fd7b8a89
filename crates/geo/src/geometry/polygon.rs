//! Polygon: an exterior ring plus holes.

use super::Ring;
use crate::error::{GeoError, Result};
use crate::Coordinate;

/// A polygon made of an exterior ring followed by zero or more holes.
///
/// Validity is structural only: every ring must be closed and long enough.
/// Holes are not checked for containment or overlap.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    rings: Vec<Ring>,
}

impl Polygon {
    /// Creates a polygon from one coordinate sequence per ring.
    ///
    /// # Example
    /// ```
    /// use gistools_geo::{Coordinate, Polygon};
    ///
    /// let exterior = vec![
    ///     Coordinate::new(0.0, 100.0),
    ///     Coordinate::new(0.0, 101.0),
    ///     Coordinate::new(1.0, 101.0),
    ///     Coordinate::new(1.0, 100.0),
    ///     Coordinate::new(0.0, 100.0),
    /// ];
    /// let polygon = Polygon::new(vec![exterior]).unwrap();
    /// assert!(polygon.holes().is_empty());
    /// assert!(Polygon::new(vec![]).is_err());
    /// ```
    pub fn new(rings: Vec<Vec<Coordinate>>) -> Result<Self> {
        if rings.is_empty() {
            tracing::debug!("rejected polygon without rings");
            return Err(GeoError::InvalidPolygon("expected at least 1 ring".to_string()));
        }

        let rings = rings
            .into_iter()
            .enumerate()
            .map(|(index, coordinates)| {
                Ring::new(coordinates).map_err(|e| {
                    GeoError::InvalidPolygon(format!("ring {}: {}", index, e))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rings })
    }

    /// Creates a polygon from existing rings.
    ///
    /// Rings built with [`Ring::new_unchecked`] are re-checked here.
    pub fn from_rings(rings: Vec<Ring>) -> Result<Self> {
        if rings.is_empty() {
            return Err(GeoError::InvalidPolygon("expected at least 1 ring".to_string()));
        }
        if let Some(index) = rings.iter().position(|ring| !ring.is_valid()) {
            tracing::debug!(index, "rejected polygon with invalid ring");
            return Err(GeoError::InvalidPolygon(format!(
                "ring {}: not closed or fewer than 4 coordinates",
                index
            )));
        }
        Ok(Self { rings })
    }

    /// Creates a polygon without any checks.
    pub fn new_unchecked(rings: Vec<Vec<Coordinate>>) -> Self {
        Self {
            rings: rings.into_iter().map(Ring::new_unchecked).collect(),
        }
    }

    /// Returns true if there is at least one ring and every ring is valid.
    pub fn is_valid(&self) -> bool {
        !self.rings.is_empty() && self.rings.iter().all(Ring::is_valid)
    }

    /// The outer boundary, `None` only for an empty unchecked polygon.
    pub fn exterior(&self) -> Option<&Ring> {
        self.rings.first()
    }

    /// Every ring after the exterior.
    pub fn holes(&self) -> &[Ring] {
        self.rings.get(1..).unwrap_or(&[])
    }

    /// All rings, exterior first.
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    /// Copies out the coordinates, one vector per ring.
    pub fn coordinates(&self) -> Vec<Vec<Coordinate>> {
        self.rings.iter().map(|ring| ring.coordinates().to_vec()).collect()
    }

    /// Consumes the polygon, returning its rings.
    pub fn into_rings(self) -> Vec<Ring> {
        self.rings
    }
}

impl TryFrom<Vec<Coordinate>> for Polygon {
    type Error = GeoError;

    /// Builds a polygon with a single exterior ring.
    fn try_from(exterior: Vec<Coordinate>) -> Result<Self> {
        Self::new(vec![exterior])
    }
}

impl TryFrom<Ring> for Polygon {
    type Error = GeoError;

    /// Builds a polygon whose only ring is `exterior`, re-checking it.
    fn try_from(exterior: Ring) -> Result<Self> {
        Self::from_rings(vec![exterior])
    }
}
