//! WASM bindings for the geo crate.
//!
//! Build with `--features wasm` and `wasm-pack` to call the distance,
//! projection and validation routines from JavaScript.

use crate::{convert, destination as project, haversine_distance, Coordinate, Geometry};
use wasm_bindgen::prelude::*;

/// Calculate distance between two coordinates.
///
/// # Arguments
/// * `lat1` - Latitude of first point
/// * `lng1` - Longitude of first point
/// * `lat2` - Latitude of second point
/// * `lng2` - Longitude of second point
///
/// # Returns
/// Distance in meters
#[wasm_bindgen]
pub fn distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let from = Coordinate::new(lat1, lng1);
    let to = Coordinate::new(lat2, lng2);
    haversine_distance(&from, &to)
}

/// Project a coordinate along a bearing.
///
/// # Returns
/// `[longitude, latitude]` of the destination, longitude not normalized
#[wasm_bindgen]
pub fn destination(lat: f64, lng: f64, distance: f64, bearing: f64) -> Vec<f64> {
    let end = project(&Coordinate::new(lat, lng), distance, bearing);
    vec![end.longitude, end.latitude]
}

/// Wrap a longitude into [-180, 180].
#[wasm_bindgen]
pub fn normalize_longitude(lng: f64) -> f64 {
    Coordinate::new(0.0, lng).normalized().longitude
}

/// Convert a length between named units.
#[wasm_bindgen]
pub fn convert_length(length: f64, from: &str, to: &str) -> Result<f64, JsValue> {
    convert(length, from, to).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Parse and validate a GeoJSON geometry.
///
/// # Arguments
/// * `geometry_json` - JSON string of a Point, MultiPoint, LineString or Polygon
///
/// # Returns
/// The geometry re-encoded as compact GeoJSON, or an error if it cannot be
/// decoded or violates its shape's invariant
#[wasm_bindgen]
pub fn validate_geometry(geometry_json: &str) -> Result<String, JsValue> {
    let geometry = Geometry::from_geojson_str(geometry_json)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    geometry
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    Ok(geometry.to_geojson().to_string())
}
