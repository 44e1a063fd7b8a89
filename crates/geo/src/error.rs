//! Error types for the geo crate.

use thiserror::Error;

/// Result type alias for geo operations.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Errors that can occur during geo operations.
#[derive(Debug, Error)]
pub enum GeoError {
    /// Position with fewer than two numeric components
    #[error("Malformed coordinate: {0}")]
    MalformedCoordinate(String),

    /// Ring shorter than four positions or not closed
    #[error("Invalid ring: {0}")]
    InvalidRing(String),

    /// LineString shorter than two positions
    #[error("Invalid line string: {0}")]
    InvalidLineString(String),

    /// MultiPoint without positions
    #[error("Invalid multi point: {0}")]
    InvalidMultiPoint(String),

    /// Polygon without rings, or with an invalid ring
    #[error("Invalid polygon: {0}")]
    InvalidPolygon(String),

    /// Unknown length unit name
    #[error("Unrecognized unit: {0}")]
    UnrecognizedUnit(String),

    /// GeoJSON `type` member does not match the requested shape
    #[error("GeoJSON type mismatch: expected {expected}, got {found}")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },

    /// GeoJSON object without a `coordinates` member
    #[error("GeoJSON object has no coordinates")]
    MissingCoordinates,

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Error code for programmatic handling.
/// Range: 10xxx for geo errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoErrorCode {
    MalformedCoordinate = 10001,
    InvalidRing = 10002,
    InvalidLineString = 10003,
    InvalidMultiPoint = 10004,
    InvalidPolygon = 10005,
    UnrecognizedUnit = 10006,
    TypeMismatch = 10007,
    MissingCoordinates = 10008,
    JsonParsing = 10009,
    Config = 10010,
}

impl GeoErrorCode {
    /// Get the numeric code
    pub fn code(&self) -> u32 {
        *self as u32
    }
}

impl GeoError {
    /// Returns the error code for this error.
    pub fn code(&self) -> GeoErrorCode {
        match self {
            GeoError::MalformedCoordinate(_) => GeoErrorCode::MalformedCoordinate,
            GeoError::InvalidRing(_) => GeoErrorCode::InvalidRing,
            GeoError::InvalidLineString(_) => GeoErrorCode::InvalidLineString,
            GeoError::InvalidMultiPoint(_) => GeoErrorCode::InvalidMultiPoint,
            GeoError::InvalidPolygon(_) => GeoErrorCode::InvalidPolygon,
            GeoError::UnrecognizedUnit(_) => GeoErrorCode::UnrecognizedUnit,
            GeoError::TypeMismatch { .. } => GeoErrorCode::TypeMismatch,
            GeoError::MissingCoordinates => GeoErrorCode::MissingCoordinates,
            GeoError::JsonError(_) => GeoErrorCode::JsonParsing,
            GeoError::Config(_) => GeoErrorCode::Config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(GeoError::InvalidRing("x".into()).code().code(), 10002);
        assert_eq!(GeoError::MissingCoordinates.code(), GeoErrorCode::MissingCoordinates);
        assert_eq!(
            GeoError::UnrecognizedUnit("furlongs".into()).code(),
            GeoErrorCode::UnrecognizedUnit
        );
    }

    #[test]
    fn test_error_display() {
        let err = GeoError::TypeMismatch {
            expected: "Polygon",
            found: "Point".into(),
        };
        assert_eq!(err.to_string(), "GeoJSON type mismatch: expected Polygon, got Point");
    }
}
