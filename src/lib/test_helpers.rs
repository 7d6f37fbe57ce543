use super::feature::Feature;
use super::geometry::{Coordinate, Geometry};
use super::properties::{PropertyBag, PropertyValue};

/// Closed unit square ring with its south west corner at `(x, y)`.
pub fn square(x: f64, y: f64) -> Vec<Coordinate> {
    vec![(x, y), (x + 1., y), (x + 1., y + 1.), (x, y + 1.), (x, y)]
}

pub fn bag(entries: &[(&str, PropertyValue)]) -> PropertyBag {
    entries
        .iter()
        .map(|(key, value)| ((*key).into(), value.clone()))
        .collect()
}

pub fn point_feature(x: f64, y: f64, entries: &[(&str, PropertyValue)]) -> Feature {
    let geometry = Geometry::Point {
        coordinates: (x, y),
    };
    Feature::new(geometry, bag(entries))
}
