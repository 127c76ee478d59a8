//! Reference groups and the group partitioner
//!
//! Labeled dataset rows are split into two immutable [`ReferenceGroup`]s,
//! one per outcome, which the similarity scorer compares queries against.

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::feature::FeatureSet;
use crate::vector::FeatureVector;

/// Binary outcome label of a respondent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GroupLabel {
    #[serde(rename = "Addicted")]
    Addicted,
    #[serde(rename = "Not Addicted")]
    NotAddicted,
}

impl GroupLabel {
    /// Map a 0/1 outcome to a label; anything but 1 is `NotAddicted`
    pub fn from_flag(flag: u8) -> Self {
        if flag == 1 {
            GroupLabel::Addicted
        } else {
            GroupLabel::NotAddicted
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupLabel::Addicted => "Addicted",
            GroupLabel::NotAddicted => "Not Addicted",
        }
    }
}

impl fmt::Display for GroupLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rows sharing one outcome label. Immutable once built.
#[derive(Debug, Clone)]
pub struct ReferenceGroup {
    label: GroupLabel,
    features: Arc<FeatureSet>,
    rows: Vec<FeatureVector>,
}

impl ReferenceGroup {
    /// Create a group, checking every row is over `features`
    pub fn new(label: GroupLabel, features: Arc<FeatureSet>, rows: Vec<FeatureVector>) -> Result<Self> {
        if rows.iter().any(|row| !row.same_features(&features)) {
            return Err(Error::FeatureSetMismatch);
        }
        Ok(Self { label, features, rows })
    }

    pub fn empty(label: GroupLabel, features: Arc<FeatureSet>) -> Self {
        Self { label, features, rows: Vec::new() }
    }

    #[inline]
    pub fn label(&self) -> GroupLabel {
        self.label
    }

    #[inline]
    pub fn features(&self) -> &Arc<FeatureSet> {
        &self.features
    }

    #[inline]
    pub fn rows(&self) -> &[FeatureVector] {
        &self.rows
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A feature set and its two reference groups
#[derive(Debug, Clone)]
pub struct LabeledDataset {
    features: Arc<FeatureSet>,
    addicted: ReferenceGroup,
    not_addicted: ReferenceGroup,
}

impl LabeledDataset {
    #[inline]
    pub fn features(&self) -> &Arc<FeatureSet> {
        &self.features
    }

    #[inline]
    pub fn addicted(&self) -> &ReferenceGroup {
        &self.addicted
    }

    #[inline]
    pub fn not_addicted(&self) -> &ReferenceGroup {
        &self.not_addicted
    }

    pub fn group(&self, label: GroupLabel) -> &ReferenceGroup {
        match label {
            GroupLabel::Addicted => &self.addicted,
            GroupLabel::NotAddicted => &self.not_addicted,
        }
    }

    /// Total number of rows across both groups
    pub fn len(&self) -> usize {
        self.addicted.len() + self.not_addicted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Split labeled rows into the addicted and not-addicted groups.
///
/// Row order within each group follows input order.
pub fn partition<I>(features: Arc<FeatureSet>, rows: I) -> Result<LabeledDataset>
where
    I: IntoIterator<Item = (FeatureVector, GroupLabel)>,
{
    let mut addicted = Vec::new();
    let mut not_addicted = Vec::new();

    for (row, label) in rows {
        if !row.same_features(&features) {
            return Err(Error::FeatureSetMismatch);
        }
        match label {
            GroupLabel::Addicted => addicted.push(row),
            GroupLabel::NotAddicted => not_addicted.push(row),
        }
    }

    Ok(LabeledDataset {
        addicted: ReferenceGroup {
            label: GroupLabel::Addicted,
            features: features.clone(),
            rows: addicted,
        },
        not_addicted: ReferenceGroup {
            label: GroupLabel::NotAddicted,
            features: features.clone(),
            rows: not_addicted,
        },
        features,
    })
}
