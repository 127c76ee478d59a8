use std::sync::Arc;

use crate::error::{Error, Result};
use crate::feature::FeatureSet;

/// One respondent's (or one query's) answers over a [`FeatureSet`].
///
/// Values are stored in column order. Yes/no answers are `1.0`/`0.0`;
/// numeric dataset columns keep their value. Missing values are always `0.0`.
#[derive(Debug, Clone)]
pub struct FeatureVector {
    features: Arc<FeatureSet>,
    data: Vec<f64>,
}

impl FeatureVector {
    /// Build a vector from values in column order
    pub fn new(features: Arc<FeatureSet>, data: Vec<f64>) -> Result<Self> {
        if data.len() != features.len() {
            return Err(Error::InvalidDimension {
                expected: features.len(),
                actual: data.len(),
            });
        }
        let data = data
            .into_iter()
            .map(|v| if v.is_nan() { 0.0 } else { v })
            .collect();
        Ok(Self { features, data })
    }

    /// All-zero vector, equivalent to answering "no" everywhere
    #[must_use]
    pub fn zeros(features: Arc<FeatureSet>) -> Self {
        let data = vec![0.0; features.len()];
        Self { features, data }
    }

    /// Build a vector from `(feature name, value)` pairs.
    ///
    /// Features not named keep the missing value `0.0`. Naming a feature
    /// outside the set is an error rather than a silent misalignment.
    pub fn from_named<I, S>(features: Arc<FeatureSet>, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut vector = Self::zeros(features);
        for (name, value) in values {
            let name = name.as_ref();
            let pos = vector
                .features
                .position(name)
                .ok_or_else(|| Error::UnknownFeature(name.to_string()))?;
            vector.data[pos] = if value.is_nan() { 0.0 } else { value };
        }
        Ok(vector)
    }

    /// Build a vector from yes (`true`) / no (`false`) answers in column order
    pub fn from_answers(features: Arc<FeatureSet>, answers: &[bool]) -> Result<Self> {
        let data = answers.iter().map(|&yes| if yes { 1.0 } else { 0.0 }).collect();
        Self::new(features, data)
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub fn features(&self) -> &Arc<FeatureSet> {
        &self.features
    }

    /// Value of a feature by name
    pub fn get(&self, name: &str) -> Option<f64> {
        self.features.position(name).map(|pos| self.data[pos])
    }

    /// Iterate over `(feature name, value)` pairs in column order
    pub fn named(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.features
            .names()
            .iter()
            .map(String::as_str)
            .zip(self.data.iter().copied())
    }

    /// Whether two vectors are defined over the same feature columns
    #[inline]
    pub fn same_features(&self, other: &FeatureSet) -> bool {
        std::ptr::eq(Arc::as_ptr(&self.features), other) || *self.features == *other
    }

    /// Fraction of columns where `self` and `other` hold the same value
    pub fn match_fraction(&self, other: &FeatureVector) -> Result<f64> {
        if !self.same_features(&other.features) {
            return Err(Error::FeatureSetMismatch);
        }
        if self.data.is_empty() {
            return Ok(0.0);
        }

        let matches = self
            .data
            .iter()
            .zip(other.data.iter())
            .filter(|(a, b)| a == b)
            .count();

        Ok(matches as f64 / self.data.len() as f64)
    }
}

impl PartialEq for FeatureVector {
    fn eq(&self, other: &Self) -> bool {
        self.same_features(&other.features) && self.data == other.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features() -> Arc<FeatureSet> {
        FeatureSet::shared(["a", "b", "c"]).unwrap()
    }

    #[test]
    fn test_new_checks_dimension() {
        let err = FeatureVector::new(features(), vec![1.0, 0.0]).unwrap_err();
        assert!(matches!(err, Error::InvalidDimension { expected: 3, actual: 2 }));
    }

    #[test]
    fn test_nan_becomes_zero() {
        let v = FeatureVector::new(features(), vec![f64::NAN, 1.0, 0.0]).unwrap();
        assert_eq!(v.as_slice(), &[0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_from_named_defaults_missing_to_zero() {
        let v = FeatureVector::from_named(features(), [("c", 1.0), ("a", 1.0)]).unwrap();
        assert_eq!(v.as_slice(), &[1.0, 0.0, 1.0]);
        assert_eq!(v.get("b"), Some(0.0));
        assert_eq!(v.get("z"), None);
    }

    #[test]
    fn test_from_named_rejects_unknown() {
        let err = FeatureVector::from_named(features(), [("nope", 1.0)]).unwrap_err();
        assert!(matches!(err, Error::UnknownFeature(name) if name == "nope"));
    }

    #[test]
    fn test_match_fraction() {
        let fs = features();
        let a = FeatureVector::from_answers(fs.clone(), &[true, true, false]).unwrap();
        let b = FeatureVector::from_answers(fs.clone(), &[true, false, false]).unwrap();
        let inverse = FeatureVector::from_answers(fs, &[false, false, true]).unwrap();

        assert_eq!(a.match_fraction(&a).unwrap(), 1.0);
        assert!((a.match_fraction(&b).unwrap() - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(a.match_fraction(&inverse).unwrap(), 0.0);
    }

    #[test]
    fn test_match_fraction_requires_same_features() {
        let a = FeatureVector::zeros(features());
        let b = FeatureVector::zeros(FeatureSet::shared(["c", "b", "a"]).unwrap());
        assert!(matches!(a.match_fraction(&b), Err(Error::FeatureSetMismatch)));

        // Equal column lists built separately still line up
        let c = FeatureVector::zeros(features());
        assert_eq!(a.match_fraction(&c).unwrap(), 1.0);
    }

    #[test]
    fn test_named_iteration_order() {
        let v = FeatureVector::from_answers(features(), &[false, true, false]).unwrap();
        let pairs: Vec<(&str, f64)> = v.named().collect();
        assert_eq!(pairs, vec![("a", 0.0), ("b", 1.0), ("c", 0.0)]);
    }
}
