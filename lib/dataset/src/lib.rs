//! # addiscreen Dataset
//!
//! Loads a labeled questionnaire CSV into reference groups.
//!
//! Cells are normalized the same way for every consumer:
//! "yes"/"no" (any case, surrounding whitespace ignored) become 1/0,
//! numeric columns keep their value, and anything unrecognized or missing
//! becomes 0.

pub mod error;
pub mod loader;
pub mod normalize;

pub use error::{DatasetError, Result};
pub use loader::{DatasetConfig, DatasetLoader};
pub use normalize::{normalize_answer, normalize_cell, normalize_label, ColumnKind};
