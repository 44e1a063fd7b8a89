//! Batch distance calculations with optional parallelism.
//!
//! Distances are measured from one origin to every item of a slice. Items
//! can be anything implementing [`AsCoordinate`]: plain coordinates, points,
//! or application types carrying a position.

use crate::coordinate::AsCoordinate;
use crate::{haversine_distance, Coordinate};
use serde::{Deserialize, Serialize};

/// Result of a distance calculation for a single item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceResult {
    /// Position of the item in the input slice
    pub index: usize,
    /// Great-circle distance in meters
    pub distance: f64,
}

/// Calculate distances from `origin` to every item.
///
/// # Returns
/// One result per input item, in input order.
///
/// # Example
/// ```
/// use gistools_geo::{calculate_distances, Coordinate};
///
/// let items = vec![
///     Coordinate::new(52.5200, 13.4050),
///     Coordinate::new(48.8566, 2.3522),
/// ];
///
/// let results = calculate_distances(&Coordinate::new(50.0, 10.0), &items);
/// assert_eq!(results.len(), 2);
/// assert_eq!(results[1].index, 1);
/// ```
pub fn calculate_distances<T>(origin: &Coordinate, items: &[T]) -> Vec<DistanceResult>
where
    T: AsCoordinate + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        items
            .par_iter()
            .enumerate()
            .map(|(index, item)| calculate_single_distance(origin, index, item))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        items
            .iter()
            .enumerate()
            .map(|(index, item)| calculate_single_distance(origin, index, item))
            .collect()
    }
}

/// Calculate distances and return them sorted, closest first.
///
/// # Arguments
/// * `max_results` - Maximum number of results to return (None for all)
pub fn calculate_distances_sorted<T>(
    origin: &Coordinate,
    items: &[T],
    max_results: Option<usize>,
) -> Vec<DistanceResult>
where
    T: AsCoordinate + Sync,
{
    let mut results = calculate_distances(origin, items);

    results.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    if let Some(max) = max_results {
        results.truncate(max);
    }

    results
}

/// Calculate distances for the items within `radius` meters, closest first.
pub fn calculate_distances_within_radius<T>(
    origin: &Coordinate,
    items: &[T],
    radius: f64,
) -> Vec<DistanceResult>
where
    T: AsCoordinate + Sync,
{
    let mut results = calculate_distances(origin, items);

    results.retain(|r| r.distance <= radius);
    results.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    results
}

#[inline]
fn calculate_single_distance<T: AsCoordinate>(origin: &Coordinate, index: usize, item: &T) -> DistanceResult {
    DistanceResult {
        index,
        distance: haversine_distance(origin, &item.coordinate()),
    }
}
