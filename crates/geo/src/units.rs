//! Length unit conversion.
//!
//! Linear units convert through meters. `Degrees` and `Radians` are arc
//! lengths on the sphere, so converting them depends on the Earth radius.

use crate::config::{GeoConfig, EARTH_RADIUS_M};
use crate::error::{GeoError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported length units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Millimeters,
    Centimeters,
    Meters,
    Kilometers,
    Inches,
    Feet,
    Yards,
    Miles,
    NauticalMiles,
    /// Arc length in degrees of a great circle
    Degrees,
    /// Arc length in radians of a great circle
    Radians,
}

impl LengthUnit {
    /// All supported units.
    pub const ALL: [LengthUnit; 11] = [
        LengthUnit::Millimeters,
        LengthUnit::Centimeters,
        LengthUnit::Meters,
        LengthUnit::Kilometers,
        LengthUnit::Inches,
        LengthUnit::Feet,
        LengthUnit::Yards,
        LengthUnit::Miles,
        LengthUnit::NauticalMiles,
        LengthUnit::Degrees,
        LengthUnit::Radians,
    ];

    /// Canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            LengthUnit::Millimeters => "millimeters",
            LengthUnit::Centimeters => "centimeters",
            LengthUnit::Meters => "meters",
            LengthUnit::Kilometers => "kilometers",
            LengthUnit::Inches => "inches",
            LengthUnit::Feet => "feet",
            LengthUnit::Yards => "yards",
            LengthUnit::Miles => "miles",
            LengthUnit::NauticalMiles => "nauticalmiles",
            LengthUnit::Degrees => "degrees",
            LengthUnit::Radians => "radians",
        }
    }

    /// Meters in one unit on a sphere of `radius` meters.
    fn meters_per_unit(&self, radius: f64) -> f64 {
        match self {
            LengthUnit::Millimeters => 0.001,
            LengthUnit::Centimeters => 0.01,
            LengthUnit::Meters => 1.0,
            LengthUnit::Kilometers => 1000.0,
            LengthUnit::Inches => 0.0254,
            LengthUnit::Feet => 0.3048,
            LengthUnit::Yards => 0.9144,
            LengthUnit::Miles => 1609.344,
            LengthUnit::NauticalMiles => 1852.0,
            LengthUnit::Degrees => radius.to_radians(),
            LengthUnit::Radians => radius,
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LengthUnit {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self> {
        let unit = match s.trim().to_lowercase().as_str() {
            "mm" | "millimeter" | "millimeters" | "millimetre" | "millimetres" => LengthUnit::Millimeters,
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => LengthUnit::Centimeters,
            "m" | "meter" | "meters" | "metre" | "metres" => LengthUnit::Meters,
            "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => LengthUnit::Kilometers,
            "in" | "inch" | "inches" => LengthUnit::Inches,
            "ft" | "foot" | "feet" => LengthUnit::Feet,
            "yd" | "yard" | "yards" => LengthUnit::Yards,
            "mi" | "mile" | "miles" => LengthUnit::Miles,
            "nmi" | "nauticalmile" | "nauticalmiles" | "nautical_miles" => LengthUnit::NauticalMiles,
            "deg" | "degree" | "degrees" => LengthUnit::Degrees,
            "rad" | "radian" | "radians" => LengthUnit::Radians,
            other => return Err(GeoError::UnrecognizedUnit(other.to_string())),
        };
        Ok(unit)
    }
}

/// Converts `length` between units using the default Earth radius.
///
/// # Example
/// ```
/// use gistools_geo::{convert_length, LengthUnit};
///
/// let meters = convert_length(5000.0, LengthUnit::Miles, LengthUnit::Meters);
/// assert!((meters - 8_046_720.0).abs() < 0.1);
/// ```
#[inline]
pub fn convert_length(length: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    convert_with_radius(length, from, to, EARTH_RADIUS_M)
}

/// Converts `length` between units given by name.
///
/// Fails with [`GeoError::UnrecognizedUnit`] when either name is unknown.
pub fn convert(length: f64, from: &str, to: &str) -> Result<f64> {
    let from = from.parse::<LengthUnit>()?;
    let to = to.parse::<LengthUnit>()?;
    Ok(convert_length(length, from, to))
}

impl GeoConfig {
    /// Converts `length` between units; arc units use the configured radius.
    #[inline]
    pub fn convert_length(&self, length: f64, from: LengthUnit, to: LengthUnit) -> f64 {
        convert_with_radius(length, from, to, self.earth_radius_m)
    }
}

fn convert_with_radius(length: f64, from: LengthUnit, to: LengthUnit, radius: f64) -> f64 {
    if from == to {
        return length;
    }
    length * from.meters_per_unit(radius) / to.meters_per_unit(radius)
}
