//! Geographic coordinates, GeoJSON geometries and spherical math.
//!
//! This crate provides:
//! - A coordinate value type with tolerant equality and antimeridian normalization
//! - Point, MultiPoint, LineString, Ring and Polygon shapes with validating
//!   and unchecked constructors
//! - A GeoJSON codec for the shapes' `coordinates` arrays and geometry objects
//! - Haversine distance and forward geodesic projection
//! - Length unit conversion
//! - Batch distance processing with optional parallelism
//! - WASM bindings for browser usage
//!
//! # Example
//!
//! ```
//! use gistools_geo::{Coordinate, GeoJsonCodec, Polygon};
//!
//! let start = Coordinate::new(39.0, -75.0);
//! let east = start.destination(100_000.0, 90.0);
//! assert!((start.distance(&east) - 100_000.0).abs() < 1.0);
//!
//! let polygon = Polygon::from_geojson_str(
//!     r#"{"type": "Polygon", "coordinates": [[[100, 0], [101, 0], [101, 1], [100, 0]]]}"#,
//! ).unwrap();
//! assert!(polygon.is_valid());
//! ```

mod config;
mod coordinate;
mod destination;
mod error;
mod geometry;
mod haversine;
mod json;
mod units;
pub mod batch;

#[cfg(feature = "location")]
pub mod location;

#[cfg(feature = "wasm")]
mod wasm;

pub use batch::{
    calculate_distances, calculate_distances_sorted, calculate_distances_within_radius,
    DistanceResult,
};
pub use config::{GeoConfig, DEFAULT_EQUALITY_EPSILON, EARTH_RADIUS_KM, EARTH_RADIUS_M};
pub use coordinate::{AsCoordinate, Coordinate};
pub use destination::destination;
pub use error::{GeoError, GeoErrorCode, Result};
pub use geometry::{LineString, MultiPoint, Point, Polygon, Ring};
pub use haversine::{haversine_distance, haversine_distance_km};
pub use json::{GeoJsonCodec, GeoJsonType, Geometry};
pub use units::{convert, convert_length, LengthUnit};

#[cfg(feature = "location")]
pub use location::Location;
