//! Feature column definitions
//!
//! A [`FeatureSet`] is the ordered list of feature columns shared by every
//! vector and reference group built from one dataset.

use ahash::AHashMap;
use std::sync::Arc;

use crate::error::{Error, Result};

/// Ordered, named feature columns
#[derive(Debug, Clone)]
pub struct FeatureSet {
    names: Vec<String>,
    index: AHashMap<String, usize>,
}

impl FeatureSet {
    /// Create a feature set from column names in dataset order.
    ///
    /// Names must be non-empty as a collection and unique.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(Error::EmptyFeatureSet);
        }

        let mut index = AHashMap::with_capacity(names.len());
        for (pos, name) in names.iter().enumerate() {
            if index.insert(name.clone(), pos).is_some() {
                return Err(Error::DuplicateFeature(name.clone()));
            }
        }

        Ok(Self { names, index })
    }

    /// Convenience constructor returning a shared handle
    pub fn shared<I, S>(names: I) -> Result<Arc<Self>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names).map(Arc::new)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Position of a feature column by name
    #[inline]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Human readable prompt for a column: underscores become spaces
    pub fn label(&self, position: usize) -> Option<String> {
        self.names.get(position).map(|name| prompt_label(name))
    }

    /// Iterate over `(name, label)` pairs in column order
    pub fn labels(&self) -> impl Iterator<Item = (&str, String)> + '_ {
        self.names.iter().map(|name| (name.as_str(), prompt_label(name)))
    }
}

impl PartialEq for FeatureSet {
    fn eq(&self, other: &Self) -> bool {
        self.names == other.names
    }
}

impl Eq for FeatureSet {}

/// Render a column name as a question label
pub fn prompt_label(name: &str) -> String {
    name.replace('_', " ")
}
