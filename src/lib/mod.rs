//! Compare two GeoJSON features and report where they differ.
//!
//! Coordinates are rounded to a fixed number of decimals and then compared
//! within an absolute epsilon, see [`options::Tolerance`]. Geometries are
//! matched strictly by position; properties are diffed key by key.
//!
//! # Example
//!
//! ```
//! use geojson_diff::compare_features;
//! use geojson_diff::geojson::read_features;
//! use geojson_diff::options::CompareOptions;
//!
//! let a = r#"{"type": "Feature", "geometry": {"type": "Point", "coordinates": [13.4, 52.5]}, "properties": {"a": 1}}"#;
//! let b = r#"{"type": "Feature", "geometry": {"type": "Point", "coordinates": [13.4, 52.5]}, "properties": {"a": 1, "b": 2}}"#;
//! let a = read_features(a.as_bytes()).unwrap();
//! let b = read_features(b.as_bytes()).unwrap();
//!
//! let mismatch = compare_features(&a[0], &b[0], &CompareOptions::default()).unwrap_err();
//! assert_eq!(mismatch.to_string(), "Feature2 Contains field b Feature1 does not.");
//! ```

pub mod diagnostic;
pub mod feature;
pub mod geojson;
pub mod geometry;
pub mod options;
pub mod output;
pub mod properties;
pub mod round;
pub mod shape;
#[cfg(test)]
mod test_helpers;

pub use diagnostic::{Diagnostic, Mismatch};
pub use feature::{compare_collections, compare_features, CollectionReport, Feature};
pub use geometry::{compare_geometry, Coordinate, Geometry, GeometryKind};
pub use options::{CompareOptions, NumberPolicy, Tolerance};
pub use properties::{compare_properties, PropertyBag, PropertyValue};
pub use shape::{compare_line, compare_points, compare_polygon_set, compare_ring_set};
