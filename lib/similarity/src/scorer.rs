//! Match-fraction similarity between a query and a reference group
//!
//! For each row in a group the scorer takes the fraction of feature columns
//! whose value equals the query's, then averages those fractions over the
//! group. All scores are in [0.0, 1.0]; an empty group has no score.

use addiscreen_core::{Error, FeatureVector, LabeledDataset, ReferenceGroup, Result};
use serde::Serialize;

/// Mean similarity of one query against both reference groups.
///
/// `None` means the group was empty and there is no similarity data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarityResult {
    pub addicted: Option<f64>,
    pub not_addicted: Option<f64>,
}

impl SimilarityResult {
    pub fn new(addicted: Option<f64>, not_addicted: Option<f64>) -> Self {
        Self { addicted, not_addicted }
    }
}

/// Mean match fraction of `query` against every row of `group`
///
/// # Returns
/// `Ok(None)` for an empty group, otherwise a score in [0.0, 1.0]
pub fn similarity(query: &FeatureVector, group: &ReferenceGroup) -> Result<Option<f64>> {
    if !query.same_features(group.features()) {
        return Err(Error::FeatureSetMismatch);
    }
    if group.is_empty() {
        return Ok(None);
    }

    let mut total = 0.0f64;
    for row in group.rows() {
        total += row.match_fraction(query)?;
    }

    Ok(Some(total / group.len() as f64))
}

/// Score a query against both groups of a dataset
pub fn score(query: &FeatureVector, dataset: &LabeledDataset) -> Result<SimilarityResult> {
    Ok(SimilarityResult {
        addicted: similarity(query, dataset.addicted())?,
        not_addicted: similarity(query, dataset.not_addicted())?,
    })
}
