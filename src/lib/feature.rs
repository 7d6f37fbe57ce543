use super::diagnostic::{Collector, Diagnostic, Mismatch};
use super::geometry::{check_geometry, Geometry};
use super::options::CompareOptions;
use super::properties::{check_properties, PropertyBag};
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Feature {
    pub geometry: Geometry,
    #[serde(default, deserialize_with = "nullable_properties")]
    pub properties: PropertyBag,
}

fn nullable_properties<'de, D>(deserializer: D) -> Result<PropertyBag, D::Error>
where
    D: Deserializer<'de>,
{
    let properties: Option<PropertyBag> = Option::deserialize(deserializer)?;
    Ok(properties.unwrap_or_default())
}

impl Feature {
    pub fn new(geometry: Geometry, properties: PropertyBag) -> Self {
        Feature {
            geometry,
            properties,
        }
    }
}

/// Compare two features, geometry first.
///
/// A geometry mismatch is returned on its own: properties are only diffed
/// once the geometries match. Use
/// [`compare_geometry`](super::geometry::compare_geometry) and
/// [`compare_properties`](super::properties::compare_properties) directly to
/// get both reports at once.
pub fn compare_features(
    feat1: &Feature,
    feat2: &Feature,
    options: &CompareOptions,
) -> Result<(), Mismatch> {
    let mut collector = Collector::new(options);
    check_geometry(&feat1.geometry, &feat2.geometry, options, &mut collector);
    let geometry = collector.finish();
    if geometry.is_err() {
        return geometry;
    }
    let mut collector = Collector::new(options);
    check_properties(&feat1.properties, &feat2.properties, options, &mut collector);
    collector.finish()
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FeatureReport {
    pub index: usize,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CollectionReport {
    pub left_count: usize,
    pub right_count: usize,
    pub features: Vec<FeatureReport>,
}

impl CollectionReport {
    pub fn counts_match(&self) -> bool {
        self.left_count == self.right_count
    }

    pub fn is_match(&self) -> bool {
        self.counts_match() && self.features.is_empty()
    }
}

/// Compare two feature lists pairwise by position.
///
/// Surplus features on the longer side are only reflected in the counts.
pub fn compare_collections(
    left: &[Feature],
    right: &[Feature],
    options: &CompareOptions,
) -> CollectionReport {
    debug!("comparing {} and {} features", left.len(), right.len());
    let features = left
        .par_iter()
        .zip(right.par_iter())
        .enumerate()
        .filter_map(|(index, (feat1, feat2))| {
            let mismatch = compare_features(feat1, feat2, options).err()?;
            Some(FeatureReport {
                index,
                diagnostics: mismatch.into_diagnostics(),
            })
        })
        .collect();

    CollectionReport {
        left_count: left.len(),
        right_count: right.len(),
        features,
    }
}


#[cfg(test)]
mod compare_collections {
    use super::*;
    use crate::test_helpers::point_feature;

    fn features(offset: f64, count: usize) -> Vec<Feature> {
        (0..count)
            .map(|i| point_feature(offset + i as f64, 52., &[("index", (i as i32).into())]))
            .collect()
    }

    #[test]
    fn matching_collections() {
        let report = compare_collections(&features(13., 3), &features(13., 3), &Default::default());
        assert!(report.is_match());
    }

    #[test]
    fn reports_failing_pairs_in_order() {
        let left = features(13., 4);
        let mut right = features(13., 4);
        right[1] = point_feature(20., 52., &[("index", 1.into())]);
        right[3] = point_feature(16., 52., &[("index", 7.into())]);
        let report = compare_collections(&left, &right, &Default::default());
        assert!(!report.is_match());
        let indices: Vec<usize> = report.features.iter().map(|f| f.index).collect();
        assert_eq!(indices, vec![1, 3]);
        assert!(matches!(
            report.features[1].diagnostics.as_slice(),
            [Diagnostic::ValueMismatch { .. }]
        ));
    }

    #[test]
    fn count_mismatch() {
        let report = compare_collections(&features(13., 2), &features(13., 3), &Default::default());
        assert!(report.features.is_empty());
        assert!(!report.counts_match());
        assert!(!report.is_match());
    }
}
