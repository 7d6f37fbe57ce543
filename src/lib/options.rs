use super::round::round;
use serde::{Deserialize, Serialize};

/// Numeric precision policy applied to coordinates: values are rounded to
/// `places` decimals first and then compared against `epsilon`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Tolerance {
    pub places: u32,
    pub round_on: f64,
    pub epsilon: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance {
            places: 7,
            round_on: 0.5,
            epsilon: 1e-6,
        }
    }
}

impl Tolerance {
    pub fn new(places: u32, epsilon: f64) -> Self {
        Tolerance {
            places,
            epsilon,
            ..Default::default()
        }
    }

    /// Exact comparison on the rounded grid.
    pub fn exact(places: u32) -> Self {
        Tolerance::new(places, 0.)
    }

    pub fn round(&self, value: f64) -> f64 {
        round(value, self.round_on, self.places)
    }

    /// Compares two already rounded values.
    pub fn within(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.epsilon
    }
}

/// How numeric property values are compared.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum NumberPolicy {
    Exact,
    Tolerant,
}

impl Default for NumberPolicy {
    fn default() -> Self {
        NumberPolicy::Exact
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(default)]
pub struct CompareOptions {
    pub tolerance: Tolerance,
    pub numbers: NumberPolicy,
    /// Stop at the first discrepancy instead of collecting all of them.
    pub fail_fast: bool,
}

impl CompareOptions {
    pub fn with_tolerance(tolerance: Tolerance) -> Self {
        CompareOptions {
            tolerance,
            ..Default::default()
        }
    }
}
