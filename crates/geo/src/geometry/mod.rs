//! Geometry shapes built from coordinates.
//!
//! Every shape has a validating constructor (`new`, also reachable through
//! `TryFrom<Vec<Coordinate>>`) that enforces the shape's structural
//! invariant, and a `new_unchecked` constructor for callers that have
//! already established validity. Both store coordinates verbatim: nothing
//! is closed, deduplicated or reordered.

mod line_string;
mod multi_point;
mod point;
mod polygon;
mod ring;

pub use line_string::LineString;
pub use multi_point::MultiPoint;
pub use point::Point;
pub use polygon::Polygon;
pub use ring::Ring;
