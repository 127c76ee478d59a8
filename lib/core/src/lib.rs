//! # addiscreen Core
//!
//! Core data structures for addiscreen:
//!
//! - [`FeatureSet`] - Ordered, named feature columns shared by a dataset
//! - [`FeatureVector`] - One respondent's answers over a feature set
//! - [`ReferenceGroup`] - Immutable rows sharing an outcome label
//! - [`LabeledDataset`] - The addicted and not-addicted groups, built by [`partition`]
//!
//! ## Example
//!
//! ```rust
//! use addiscreen_core::{FeatureSet, FeatureVector, GroupLabel, partition};
//!
//! let features = FeatureSet::shared(["Experimentation", "Social_Isolation"]).unwrap();
//! let rows = vec![
//!     (FeatureVector::from_answers(features.clone(), &[true, true]).unwrap(), GroupLabel::Addicted),
//!     (FeatureVector::from_answers(features.clone(), &[false, false]).unwrap(), GroupLabel::NotAddicted),
//! ];
//! let dataset = partition(features, rows).unwrap();
//! assert_eq!(dataset.addicted().len(), 1);
//! ```

pub mod error;
pub mod feature;
pub mod vector;
pub mod group;

pub use error::{Error, Result};
pub use feature::{prompt_label, FeatureSet};
pub use vector::FeatureVector;
pub use group::{partition, GroupLabel, LabeledDataset, ReferenceGroup};
