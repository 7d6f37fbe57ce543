use super::geometry::{Coordinate, GeometryKind};
use super::options::CompareOptions;
use super::properties::PropertyValue;
use itertools::Itertools;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Position of a nested element inside a geometry's coordinates.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct Path(Vec<usize>);

impl Path {
    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

impl From<&[usize]> for Path {
    fn from(indices: &[usize]) -> Self {
        Path(indices.to_vec())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "geometry")?;
        for index in self.0.iter() {
            write!(f, "[{}]", index)?;
        }
        Ok(())
    }
}

/// Nesting level at which two coordinate sequences differ in length.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Line,
    Rings,
    Polygons,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match self {
            Level::Line => "Line Sizes Don't Match",
            Level::Rings => "Number of Rings Don't Match",
            Level::Polygons => "Number of Polygons Don't Match",
        };
        f.write_str(text)
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub enum Side {
    Feature1,
    Feature2,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::Feature1 => Side::Feature2,
            Side::Feature2 => Side::Feature1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A single discrepancy between two features.
#[derive(Serialize, Error, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    #[error("Different Geometry Types: {left} vs {right}.")]
    KindMismatch {
        left: GeometryKind,
        right: GeometryKind,
    },

    #[error("{level} at {path}: {left} vs {right}.")]
    SizeMismatch {
        level: Level,
        path: Path,
        left: usize,
        right: usize,
    },

    /// Carries both coordinates as rounded for the comparison.
    #[error("Points Don't Match {left:?} {right:?} at {path}.")]
    PointMismatch {
        path: Path,
        left: Coordinate,
        right: Coordinate,
    },

    #[error("{side} Contains field {key} {} does not.", .side.other())]
    FieldMissing { side: Side, key: String },

    #[error("Property {key} differs: {left} vs {right}.")]
    ValueMismatch {
        key: String,
        left: PropertyValue,
        right: PropertyValue,
    },
}

impl Diagnostic {
    pub fn is_geometry(&self) -> bool {
        match self {
            Diagnostic::KindMismatch { .. }
            | Diagnostic::SizeMismatch { .. }
            | Diagnostic::PointMismatch { .. } => true,
            Diagnostic::FieldMissing { .. } | Diagnostic::ValueMismatch { .. } => false,
        }
    }
}

/// Failed comparison, holding every diagnostic in the order it was found.
#[derive(Serialize, Error, Debug, Clone, PartialEq)]
#[error("{}", .diagnostics.iter().join("\n"))]
pub struct Mismatch {
    diagnostics: Vec<Diagnostic>,
}

impl Mismatch {
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn lines(&self) -> Vec<String> {
        self.diagnostics.iter().map(ToString::to_string).collect()
    }
}

impl From<Diagnostic> for Mismatch {
    fn from(diagnostic: Diagnostic) -> Self {
        Mismatch {
            diagnostics: vec![diagnostic],
        }
    }
}

pub(crate) struct Collector {
    fail_fast: bool,
    diagnostics: Vec<Diagnostic>,
}

impl Collector {
    pub fn new(options: &CompareOptions) -> Self {
        Collector {
            fail_fast: options.fail_fast,
            diagnostics: vec![],
        }
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        if !self.is_done() {
            self.diagnostics.push(diagnostic);
        }
    }

    /// True once nothing more should be collected.
    pub fn is_done(&self) -> bool {
        self.fail_fast && !self.diagnostics.is_empty()
    }

    pub fn finish(self) -> Result<(), Mismatch> {
        if self.diagnostics.is_empty() {
            Ok(())
        } else {
            Err(Mismatch {
                diagnostics: self.diagnostics,
            })
        }
    }
}
