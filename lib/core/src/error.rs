use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid feature vector length: expected {expected}, got {actual}")]
    InvalidDimension { expected: usize, actual: usize },

    #[error("Feature set mismatch: query and reference group use different feature columns")]
    FeatureSetMismatch,

    #[error("Unknown feature: {0}")]
    UnknownFeature(String),

    #[error("Feature set must contain at least one feature column")]
    EmptyFeatureSet,

    #[error("Duplicate feature column: {0}")]
    DuplicateFeature(String),
}
