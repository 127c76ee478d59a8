//! Two-group classifier
//!
//! Turns a [`SimilarityResult`] into a predicted label and an addiction
//! percentage. Degenerate inputs (an empty group, or both similarities zero)
//! give 0% and `NotAddicted`; ties also resolve to `NotAddicted`.

use addiscreen_core::{FeatureVector, GroupLabel, LabeledDataset, Result};
use serde::Serialize;
use std::fmt;

use crate::scorer::{score, SimilarityResult};

/// Predicted label with the percentage it was derived from
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub predicted_label: GroupLabel,
    /// Share of similarity attributed to the addicted group, in [0, 100]
    pub percent: f64,
    pub similarity: SimilarityResult,
}

impl ClassificationResult {
    /// Percentage rounded to one decimal place, e.g. `"83.3"`
    pub fn percent_display(&self) -> String {
        format!("{:.1}", self.percent)
    }
}

impl fmt::Display for ClassificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.1}%)", self.predicted_label, self.percent)
    }
}

/// Classify from the two group similarities
pub fn classify(similarity: SimilarityResult) -> ClassificationResult {
    let percent = match (similarity.addicted, similarity.not_addicted) {
        (Some(a), Some(n)) if a + n != 0.0 => a / (a + n) * 100.0,
        _ => 0.0,
    };

    // A missing side never wins: `None > x` and `x > None` both fall through
    let predicted_label = match (similarity.addicted, similarity.not_addicted) {
        (Some(a), Some(n)) if a > n => GroupLabel::Addicted,
        _ => GroupLabel::NotAddicted,
    };

    ClassificationResult {
        predicted_label,
        percent,
        similarity,
    }
}

/// Score `query` against `dataset` and classify the result
pub fn predict(query: &FeatureVector, dataset: &LabeledDataset) -> Result<ClassificationResult> {
    Ok(classify(score(query, dataset)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sims(a: Option<f64>, n: Option<f64>) -> ClassificationResult {
        classify(SimilarityResult::new(a, n))
    }

    #[test]
    fn test_percent_and_label() {
        let result = sims(Some(0.75), Some(0.25));
        assert_eq!(result.predicted_label, GroupLabel::Addicted);
        assert!((result.percent - 75.0).abs() < 1e-9);
        assert_eq!(result.percent_display(), "75.0");
    }

    #[test]
    fn test_tie_resolves_to_not_addicted() {
        let result = sims(Some(0.5), Some(0.5));
        assert_eq!(result.predicted_label, GroupLabel::NotAddicted);
        assert!((result.percent - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_undefined_side_gives_zero() {
        for result in [sims(None, Some(0.4)), sims(Some(0.9), None), sims(None, None)] {
            assert_eq!(result.percent, 0.0);
            assert_eq!(result.predicted_label, GroupLabel::NotAddicted);
        }
    }

    #[test]
    fn test_zero_sum_gives_zero() {
        let result = sims(Some(0.0), Some(0.0));
        assert_eq!(result.percent, 0.0);
        assert_eq!(result.predicted_label, GroupLabel::NotAddicted);
    }

    #[test]
    fn test_label_flips_on_strict_greater() {
        assert_eq!(sims(Some(0.3), Some(0.7)).predicted_label, GroupLabel::NotAddicted);
        assert_eq!(sims(Some(0.7000001), Some(0.7)).predicted_label, GroupLabel::Addicted);
        assert_eq!(sims(Some(1.0), Some(0.0)).predicted_label, GroupLabel::Addicted);
    }

    #[test]
    fn test_percent_always_bounded() {
        let steps = [0.0, 0.1, 0.25, 0.5, 0.667, 0.9, 1.0];
        for &a in &steps {
            for &n in &steps {
                let result = sims(Some(a), Some(n));
                assert!((0.0..=100.0).contains(&result.percent), "a={a} n={n}");
            }
        }
    }

    #[test]
    fn test_display() {
        let result = sims(Some(0.8333333), Some(0.1666667));
        assert_eq!(result.to_string(), "Addicted (83.3%)");
    }
}
