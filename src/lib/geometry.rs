use super::diagnostic::{Collector, Diagnostic, Mismatch};
use super::geojson::position;
use super::options::CompareOptions;
use super::shape::{line, point, polygon_set, ring_set, Cursor};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An `(x, y)` position.
pub type Coordinate = (f64, f64);

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum Geometry {
    Point {
        #[serde(deserialize_with = "position::one")]
        coordinates: Coordinate,
    },
    MultiPoint {
        #[serde(deserialize_with = "position::line")]
        coordinates: Vec<Coordinate>,
    },
    LineString {
        #[serde(deserialize_with = "position::line")]
        coordinates: Vec<Coordinate>,
    },
    MultiLineString {
        #[serde(deserialize_with = "position::rings")]
        coordinates: Vec<Vec<Coordinate>>,
    },
    Polygon {
        #[serde(deserialize_with = "position::rings")]
        coordinates: Vec<Vec<Coordinate>>,
    },
    MultiPolygon {
        #[serde(deserialize_with = "position::polygons")]
        coordinates: Vec<Vec<Vec<Coordinate>>>,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl Geometry {
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point { .. } => GeometryKind::Point,
            Geometry::MultiPoint { .. } => GeometryKind::MultiPoint,
            Geometry::LineString { .. } => GeometryKind::LineString,
            Geometry::MultiLineString { .. } => GeometryKind::MultiLineString,
            Geometry::Polygon { .. } => GeometryKind::Polygon,
            Geometry::MultiPolygon { .. } => GeometryKind::MultiPolygon,
        }
    }
}

pub(crate) fn check_geometry(
    geom1: &Geometry,
    geom2: &Geometry,
    options: &CompareOptions,
    collector: &mut Collector,
) {
    use Geometry::*;

    let mut cursor = Cursor::new(&options.tolerance, collector);
    match (geom1, geom2) {
        (Point { coordinates: a }, Point { coordinates: b }) => point(&mut cursor, a, b),
        (MultiPoint { coordinates: a }, MultiPoint { coordinates: b })
        | (LineString { coordinates: a }, LineString { coordinates: b }) => {
            line(&mut cursor, a, b)
        }
        (MultiLineString { coordinates: a }, MultiLineString { coordinates: b })
        | (Polygon { coordinates: a }, Polygon { coordinates: b }) => {
            ring_set(&mut cursor, a, b)
        }
        (MultiPolygon { coordinates: a }, MultiPolygon { coordinates: b }) => {
            polygon_set(&mut cursor, a, b)
        }
        _ => cursor.report(Diagnostic::KindMismatch {
            left: geom1.kind(),
            right: geom2.kind(),
        }),
    }
}

/// Compare two geometries of the same kind position by position.
///
/// Geometries of different kinds fail with a single
/// [`Diagnostic::KindMismatch`] and their coordinates are not inspected.
///
/// # Example
///
/// ```
/// use geojson_diff::geometry::{compare_geometry, Geometry};
/// use geojson_diff::options::CompareOptions;
///
/// let options = CompareOptions::default();
/// let a = Geometry::Point { coordinates: (1., 2.) };
/// let b = Geometry::LineString { coordinates: vec![(1., 2.)] };
/// assert!(compare_geometry(&a, &a, &options).is_ok());
/// assert!(compare_geometry(&a, &b, &options).is_err());
/// ```
pub fn compare_geometry(
    geom1: &Geometry,
    geom2: &Geometry,
    options: &CompareOptions,
) -> Result<(), Mismatch> {
    debug!("comparing {} geometries", geom1.kind());
    let mut collector = Collector::new(options);
    check_geometry(geom1, geom2, options, &mut collector);
    collector.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Level;
    use crate::test_helpers::square;

    fn options() -> CompareOptions {
        CompareOptions::default()
    }

    #[test]
    fn same_point() {
        let a = Geometry::Point {
            coordinates: (1., 2.),
        };
        let b = Geometry::Point {
            coordinates: (1., 2.),
        };
        assert_eq!(compare_geometry(&a, &b, &options()), Ok(()));
    }

    #[test]
    fn different_kinds() {
        let a = Geometry::Point {
            coordinates: (1., 2.),
        };
        let b = Geometry::LineString {
            coordinates: vec![(1., 2.), (3., 4.)],
        };
        let mismatch = compare_geometry(&a, &b, &options()).unwrap_err();
        assert_eq!(
            mismatch.diagnostics(),
            &[Diagnostic::KindMismatch {
                left: GeometryKind::Point,
                right: GeometryKind::LineString,
            }]
        );
    }

    #[test]
    fn same_shape_different_kinds() {
        let coordinates = vec![(1., 2.), (3., 4.)];
        let a = Geometry::MultiPoint {
            coordinates: coordinates.clone(),
        };
        let b = Geometry::LineString { coordinates };
        let mismatch = compare_geometry(&a, &b, &options()).unwrap_err();
        assert_eq!(mismatch.diagnostics().len(), 1);
        assert!(matches!(
            mismatch.diagnostics()[0],
            Diagnostic::KindMismatch { .. }
        ));
    }

    #[test]
    fn polygon_with_noise() {
        let a = Geometry::Polygon {
            coordinates: vec![square(13., 52.)],
        };
        let noisy = square(13., 52.)
            .into_iter()
            .map(|(x, y)| (x + 1e-9, y - 1e-9))
            .collect();
        let b = Geometry::Polygon {
            coordinates: vec![noisy],
        };
        assert_eq!(compare_geometry(&a, &b, &options()), Ok(()));
    }

    #[test]
    fn polygon_with_missing_hole() {
        let a = Geometry::Polygon {
            coordinates: vec![square(13., 52.), square(13.25, 52.25)],
        };
        let b = Geometry::Polygon {
            coordinates: vec![square(13., 52.)],
        };
        let mismatch = compare_geometry(&a, &b, &options()).unwrap_err();
        match &mismatch.diagnostics()[0] {
            Diagnostic::SizeMismatch {
                level, left, right, ..
            } => {
                assert_eq!(*level, Level::Rings);
                assert_eq!((*left, *right), (2, 1));
            }
            other => panic!("unexpected diagnostic {:?}", other),
        }
    }

    #[test]
    fn multi_polygon_reports_position() {
        let a = Geometry::MultiPolygon {
            coordinates: vec![vec![square(13., 52.)], vec![square(14., 52.)]],
        };
        let mut shifted = square(14., 52.);
        shifted[2].0 += 0.5;
        let b = Geometry::MultiPolygon {
            coordinates: vec![vec![square(13., 52.)], vec![shifted]],
        };
        let mismatch = compare_geometry(&a, &b, &options()).unwrap_err();
        let path: &[usize] = &[1, 0, 2];
        assert_eq!(
            mismatch.diagnostics(),
            &[Diagnostic::PointMismatch {
                path: path.into(),
                left: (15., 53.),
                right: (15.5, 53.),
            }]
        );
    }

    #[test]
    fn deserialize_tagged() {
        let json = r#"{"type": "LineString", "coordinates": [[1.0, 2.0], [3, 4]]}"#;
        let geometry: Geometry = serde_json::from_str(json).unwrap();
        assert_eq!(geometry.kind(), GeometryKind::LineString);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let json = r#"{"type": "GeometryCollection", "geometries": []}"#;
        let result: Result<Geometry, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn idempotent() {
        let a = Geometry::MultiLineString {
            coordinates: vec![vec![(0., 0.), (1., 1.)], vec![(2., 2.)]],
        };
        let b = Geometry::MultiLineString {
            coordinates: vec![vec![(0., 0.), (1., 1.5)], vec![(2., 2.), (3., 3.)]],
        };
        let first = compare_geometry(&a, &b, &options());
        let second = compare_geometry(&a, &b, &options());
        assert_eq!(first, second);
        assert_eq!(first.unwrap_err().diagnostics().len(), 2);
    }
}
