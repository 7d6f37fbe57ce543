use super::feature::Feature;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use thiserror::Error;

#[derive(Serialize, Deserialize, Debug)]
#[serde(tag = "type")]
pub enum Entity {
    Feature(Feature),
    FeatureCollection { features: Vec<Feature> },
}

impl Entity {
    pub fn into_features(self) -> Vec<Feature> {
        match self {
            Entity::Feature(feature) => vec![feature],
            Entity::FeatureCollection { features } => features,
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid GeoJSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read a GeoJSON `Feature` or `FeatureCollection`.
pub fn read_features(reader: impl Read) -> Result<Vec<Feature>, LoadError> {
    let entity: Entity = serde_json::from_reader(reader)?;
    let features = entity.into_features();
    debug!("read {} features", features.len());
    Ok(features)
}

pub fn open_features(path: impl AsRef<Path>) -> Result<Vec<Feature>, LoadError> {
    let file = File::open(path)?;
    read_features(BufReader::new(file))
}

/// Positions are read as `[x, y, ...]`; altitude and any further elements are
/// dropped.
pub(crate) mod position {
    use crate::geometry::Coordinate;
    use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
    use serde::{Deserialize, Deserializer};
    use std::fmt;

    struct Position(Coordinate);

    struct PositionVisitor;

    impl<'de> Visitor<'de> for PositionVisitor {
        type Value = Position;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a position of at least two numbers")
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Position, A::Error> {
            let x: f64 = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(0, &self))?;
            let y: f64 = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(1, &self))?;
            while seq.next_element::<IgnoredAny>()?.is_some() {}
            Ok(Position((x, y)))
        }
    }

    impl<'de> Deserialize<'de> for Position {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_seq(PositionVisitor)
        }
    }

    fn unwrap_line(positions: Vec<Position>) -> Vec<Coordinate> {
        positions.into_iter().map(|p| p.0).collect()
    }

    fn unwrap_rings(rings: Vec<Vec<Position>>) -> Vec<Vec<Coordinate>> {
        rings.into_iter().map(unwrap_line).collect()
    }

    pub fn one<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Coordinate, D::Error> {
        Position::deserialize(deserializer).map(|p| p.0)
    }

    pub fn line<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Coordinate>, D::Error> {
        Vec::<Position>::deserialize(deserializer).map(unwrap_line)
    }

    pub fn rings<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Vec<Coordinate>>, D::Error> {
        Vec::<Vec<Position>>::deserialize(deserializer).map(unwrap_rings)
    }

    pub fn polygons<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Vec<Vec<Coordinate>>>, D::Error> {
        let polygons = Vec::<Vec<Vec<Position>>>::deserialize(deserializer)?;
        Ok(polygons.into_iter().map(unwrap_rings).collect())
    }
}
