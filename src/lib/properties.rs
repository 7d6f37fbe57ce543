use super::diagnostic::{Collector, Diagnostic, Mismatch, Side};
use super::options::{CompareOptions, NumberPolicy, Tolerance};
use itertools::{EitherOrBoth, Itertools};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::collections::BTreeMap;
use std::fmt;

/// Scalar value of a feature property. Integers are kept exact.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum PropertyValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

pub type PropertyBag = BTreeMap<String, PropertyValue>;

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PropertyValue::Null => f.write_str("null"),
            PropertyValue::Bool(b) => write!(f, "{}", b),
            PropertyValue::Number(n) => write!(f, "{}", n),
            PropertyValue::String(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::String(s.into())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::String(s)
    }
}

impl From<f64> for PropertyValue {
    fn from(n: f64) -> Self {
        Number::from_f64(n).map_or(PropertyValue::Null, PropertyValue::Number)
    }
}

impl From<i64> for PropertyValue {
    fn from(n: i64) -> Self {
        PropertyValue::Number(n.into())
    }
}

impl From<i32> for PropertyValue {
    fn from(n: i32) -> Self {
        PropertyValue::Number(i64::from(n).into())
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Bool(b)
    }
}

fn integers_equal(a: &Number, b: &Number) -> Option<bool> {
    if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
        return Some(a == b);
    }
    if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
        return Some(a == b);
    }
    None
}

fn numbers_match(a: &Number, b: &Number, policy: NumberPolicy, tolerance: &Tolerance) -> bool {
    match (integers_equal(a, b), policy) {
        (Some(true), _) => return true,
        (Some(false), NumberPolicy::Exact) => return false,
        _ => {}
    }
    match (a.as_f64(), b.as_f64(), policy) {
        (Some(a), Some(b), NumberPolicy::Exact) => a == b,
        (Some(a), Some(b), NumberPolicy::Tolerant) => {
            tolerance.within(tolerance.round(a), tolerance.round(b))
        }
        _ => false,
    }
}

impl PropertyValue {
    /// Equality under the given number policy. Two integers are compared
    /// exactly, `10` and `10.0` are equal. Values of different types never
    /// match.
    pub fn matches(&self, other: &Self, policy: NumberPolicy, tolerance: &Tolerance) -> bool {
        match (self, other) {
            (PropertyValue::Number(a), PropertyValue::Number(b)) => {
                numbers_match(a, b, policy, tolerance)
            }
            _ => self == other,
        }
    }
}

pub(crate) fn check_properties(
    props1: &PropertyBag,
    props2: &PropertyBag,
    options: &CompareOptions,
    collector: &mut Collector,
) {
    let mut only_right = vec![];
    let mut changed = vec![];
    for entry in props1
        .iter()
        .merge_join_by(props2.iter(), |(k1, _), (k2, _)| k1.cmp(k2))
    {
        match entry {
            EitherOrBoth::Left((key, _)) => collector.push(Diagnostic::FieldMissing {
                side: Side::Feature1,
                key: key.clone(),
            }),
            EitherOrBoth::Right((key, _)) => only_right.push(Diagnostic::FieldMissing {
                side: Side::Feature2,
                key: key.clone(),
            }),
            EitherOrBoth::Both((key, val1), (_, val2)) => {
                if !val1.matches(val2, options.numbers, &options.tolerance) {
                    changed.push(Diagnostic::ValueMismatch {
                        key: key.clone(),
                        left: val1.clone(),
                        right: val2.clone(),
                    });
                }
            }
        }
    }
    for diagnostic in only_right.into_iter().chain(changed) {
        collector.push(diagnostic);
    }
}

/// Diff two property bags.
///
/// Keys present on one side only are reported first (feature 1 before
/// feature 2, each in key order), followed by every shared key whose values
/// differ.
///
/// # Example
///
/// ```
/// use geojson_diff::options::CompareOptions;
/// use geojson_diff::properties::{compare_properties, PropertyBag};
///
/// let mut props1 = PropertyBag::new();
/// props1.insert("a".into(), 1.into());
/// let mut props2 = props1.clone();
/// props2.insert("b".into(), 2.into());
///
/// let mismatch = compare_properties(&props1, &props2, &CompareOptions::default()).unwrap_err();
/// assert_eq!(mismatch.to_string(), "Feature2 Contains field b Feature1 does not.");
/// ```
pub fn compare_properties(
    props1: &PropertyBag,
    props2: &PropertyBag,
    options: &CompareOptions,
) -> Result<(), Mismatch> {
    debug!("comparing {} and {} properties", props1.len(), props2.len());
    let mut collector = Collector::new(options);
    check_properties(props1, props2, options, &mut collector);
    collector.finish()
}
