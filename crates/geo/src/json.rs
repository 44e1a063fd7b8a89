//! GeoJSON coordinate codec.
//!
//! Converts shapes to and from the nested-array `coordinates` value of
//! RFC 7946 geometries, and to and from the `{"type", "coordinates"}`
//! geometry object.
//!
//! Decoding trusts the array structure it is given: shapes are assembled
//! with their `new_unchecked` constructors. Use `is_valid()` on the result,
//! or the validating constructors, when the input comes from an untrusted
//! source.

use crate::coordinate::AsCoordinate;
use crate::error::{GeoError, Result};
use crate::geometry::{LineString, MultiPoint, Point, Polygon, Ring};
use crate::Coordinate;
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;

/// Largest integer an IEEE double represents exactly (2^53).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Returns true if `value` should be written as a JSON integer.
#[inline]
pub(crate) fn is_json_integer(value: f64) -> bool {
    value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER
}

/// Integral values become JSON integers (`100`, not `100.0`); NaN and
/// infinities become `null`, as JSON has no representation for them.
fn json_number(value: f64) -> Value {
    if is_json_integer(value) {
        Value::from(value as i64)
    } else {
        serde_json::Number::from_f64(value)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

/// GeoJSON geometry type tags handled by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeoJsonType {
    Point,
    MultiPoint,
    LineString,
    Polygon,
}

impl GeoJsonType {
    /// The tag as written in the `type` member.
    pub fn as_str(&self) -> &'static str {
        match self {
            GeoJsonType::Point => "Point",
            GeoJsonType::MultiPoint => "MultiPoint",
            GeoJsonType::LineString => "LineString",
            GeoJsonType::Polygon => "Polygon",
        }
    }
}

impl fmt::Display for GeoJsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeoJsonType {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Point" => Ok(GeoJsonType::Point),
            "MultiPoint" => Ok(GeoJsonType::MultiPoint),
            "LineString" => Ok(GeoJsonType::LineString),
            "Polygon" => Ok(GeoJsonType::Polygon),
            other => Err(GeoError::TypeMismatch {
                expected: "Point, MultiPoint, LineString or Polygon",
                found: other.to_string(),
            }),
        }
    }
}

impl Coordinate {
    /// Encodes the coordinate as a GeoJSON position.
    pub fn to_json(&self) -> Value {
        Value::Array(self.to_position().into_iter().map(json_number).collect())
    }

    /// Decodes a GeoJSON position: an array of at least two numbers.
    pub fn from_json(value: &Value) -> Result<Self> {
        let items = value.as_array().ok_or_else(|| {
            GeoError::MalformedCoordinate(format!("expected an array, got {}", value))
        })?;

        let position = items
            .iter()
            .map(|item| {
                item.as_f64().ok_or_else(|| {
                    GeoError::MalformedCoordinate(format!("non-numeric component {}", item))
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        Coordinate::from_position(&position)
    }
}

fn positions_json(coordinates: &[Coordinate]) -> Value {
    Value::Array(coordinates.iter().map(Coordinate::to_json).collect())
}

fn decode_positions(value: &Value) -> Result<Vec<Coordinate>> {
    value
        .as_array()
        .ok_or_else(|| {
            GeoError::MalformedCoordinate(format!("expected an array of positions, got {}", value))
        })?
        .iter()
        .map(Coordinate::from_json)
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object without type",
    }
}

/// Bidirectional conversion between a shape and its GeoJSON representation.
pub trait GeoJsonCodec: Sized {
    /// The `type` tag of this shape's geometry object.
    const GEOJSON_TYPE: GeoJsonType;

    /// The inner `coordinates` value.
    fn coordinates_json(&self) -> Value;

    /// Decodes the inner `coordinates` value.
    fn from_coordinates_json(value: &Value) -> Result<Self>;

    /// The full geometry object, `{"type": ..., "coordinates": ...}`.
    fn to_geojson(&self) -> Value {
        json!({
            "type": Self::GEOJSON_TYPE.as_str(),
            "coordinates": self.coordinates_json(),
        })
    }

    /// Decodes a geometry object, checking its `type` tag.
    fn from_geojson(value: &Value) -> Result<Self> {
        let found = value.get("type").and_then(Value::as_str);
        if found != Some(Self::GEOJSON_TYPE.as_str()) {
            let found = found.map(str::to_string).unwrap_or_else(|| json_kind(value).to_string());
            tracing::debug!(expected = Self::GEOJSON_TYPE.as_str(), %found, "GeoJSON type mismatch");
            return Err(GeoError::TypeMismatch {
                expected: Self::GEOJSON_TYPE.as_str(),
                found,
            });
        }

        let coordinates = value.get("coordinates").ok_or(GeoError::MissingCoordinates)?;
        Self::from_coordinates_json(coordinates).inspect_err(|e| {
            tracing::debug!(error = %e, "failed to decode GeoJSON coordinates");
        })
    }

    /// Serializes the geometry object to compact JSON text.
    fn to_geojson_string(&self) -> String {
        self.to_geojson().to_string()
    }

    /// Parses JSON text and decodes the geometry object.
    fn from_geojson_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_geojson(&value)
    }
}

impl GeoJsonCodec for Point {
    const GEOJSON_TYPE: GeoJsonType = GeoJsonType::Point;

    fn coordinates_json(&self) -> Value {
        self.coordinate().to_json()
    }

    fn from_coordinates_json(value: &Value) -> Result<Self> {
        Coordinate::from_json(value).map(Point::new)
    }
}

impl GeoJsonCodec for MultiPoint {
    const GEOJSON_TYPE: GeoJsonType = GeoJsonType::MultiPoint;

    fn coordinates_json(&self) -> Value {
        positions_json(self.coordinates())
    }

    fn from_coordinates_json(value: &Value) -> Result<Self> {
        decode_positions(value).map(MultiPoint::new_unchecked)
    }
}

impl GeoJsonCodec for LineString {
    const GEOJSON_TYPE: GeoJsonType = GeoJsonType::LineString;

    fn coordinates_json(&self) -> Value {
        positions_json(self.coordinates())
    }

    fn from_coordinates_json(value: &Value) -> Result<Self> {
        decode_positions(value).map(LineString::new_unchecked)
    }
}

impl GeoJsonCodec for Polygon {
    const GEOJSON_TYPE: GeoJsonType = GeoJsonType::Polygon;

    fn coordinates_json(&self) -> Value {
        Value::Array(self.rings().iter().map(Ring::coordinates_json).collect())
    }

    fn from_coordinates_json(value: &Value) -> Result<Self> {
        let rings = value
            .as_array()
            .ok_or_else(|| {
                GeoError::MalformedCoordinate(format!("expected an array of rings, got {}", value))
            })?
            .iter()
            .map(decode_positions)
            .collect::<Result<Vec<_>>>()?;
        Ok(Polygon::new_unchecked(rings))
    }
}

// A ring is not a GeoJSON geometry by itself, so only the coordinates half
// of the codec applies.
impl Ring {
    /// The ring as an array of positions.
    pub fn coordinates_json(&self) -> Value {
        positions_json(self.coordinates())
    }

    /// Decodes an array of positions without checking closure.
    pub fn from_coordinates_json(value: &Value) -> Result<Self> {
        decode_positions(value).map(Ring::new_unchecked)
    }
}

/// Any geometry this crate can decode, dispatched on the `type` tag.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    MultiPoint(MultiPoint),
    LineString(LineString),
    Polygon(Polygon),
}

impl Geometry {
    /// Decodes a geometry object of any supported type.
    pub fn from_geojson(value: &Value) -> Result<Self> {
        let tag = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| GeoError::TypeMismatch {
                expected: "a geometry object",
                found: json_kind(value).to_string(),
            })?;

        match tag.parse::<GeoJsonType>()? {
            GeoJsonType::Point => Point::from_geojson(value).map(Geometry::Point),
            GeoJsonType::MultiPoint => MultiPoint::from_geojson(value).map(Geometry::MultiPoint),
            GeoJsonType::LineString => LineString::from_geojson(value).map(Geometry::LineString),
            GeoJsonType::Polygon => Polygon::from_geojson(value).map(Geometry::Polygon),
        }
    }

    /// Parses JSON text and decodes the geometry object.
    pub fn from_geojson_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_geojson(&value)
    }

    /// The `type` tag of the wrapped shape.
    pub fn geojson_type(&self) -> GeoJsonType {
        match self {
            Geometry::Point(_) => GeoJsonType::Point,
            Geometry::MultiPoint(_) => GeoJsonType::MultiPoint,
            Geometry::LineString(_) => GeoJsonType::LineString,
            Geometry::Polygon(_) => GeoJsonType::Polygon,
        }
    }

    /// Encodes the wrapped shape as a geometry object.
    pub fn to_geojson(&self) -> Value {
        match self {
            Geometry::Point(g) => g.to_geojson(),
            Geometry::MultiPoint(g) => g.to_geojson(),
            Geometry::LineString(g) => g.to_geojson(),
            Geometry::Polygon(g) => g.to_geojson(),
        }
    }

    /// Re-checks the structural invariant of the decoded shape.
    pub fn is_valid(&self) -> bool {
        match self {
            Geometry::Point(_) => true,
            Geometry::MultiPoint(g) => g.is_valid(),
            Geometry::LineString(g) => g.is_valid(),
            Geometry::Polygon(g) => g.is_valid(),
        }
    }

    /// Runs the shape's validating constructor to report why it is invalid.
    pub fn validate(&self) -> Result<()> {
        match self {
            Geometry::Point(_) => Ok(()),
            Geometry::MultiPoint(g) => MultiPoint::new(g.coordinates().to_vec()).map(drop),
            Geometry::LineString(g) => LineString::new(g.coordinates().to_vec()).map(drop),
            Geometry::Polygon(g) => Polygon::new(g.coordinates()).map(drop),
        }
    }

    /// Number of positions across all parts.
    pub fn coordinate_count(&self) -> usize {
        match self {
            Geometry::Point(_) => 1,
            Geometry::MultiPoint(g) => g.len(),
            Geometry::LineString(g) => g.len(),
            Geometry::Polygon(g) => g.rings().iter().map(Ring::len).sum(),
        }
    }
}
