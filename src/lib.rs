//! # addiscreen
//!
//! Addiction-risk screening by similarity to a labeled questionnaire dataset.
//!
//! A user's yes/no answers are compared, feature by feature, with every
//! respondent in two reference groups (addicted and not addicted). The mean
//! match fraction against each group yields a predicted label and an
//! addiction percentage. A keyword sentiment scorer turns free-text answers
//! into the same yes/no form, and a short chatbot quiz offers a
//! fixed-question screening.
//!
//! ## Quick Start
//!
//! ### From the command line
//!
//! ```bash
//! addiscreen --dataset student_addiction_dataset_train.csv assess
//! addiscreen classify
//! addiscreen --dataset student_addiction_dataset_train.csv serve --http-port 5000
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use addiscreen::prelude::*;
//!
//! let dataset = DatasetLoader::default()
//!     .load_path("student_addiction_dataset_train.csv")
//!     .unwrap();
//! let answers = vec![true; dataset.features().len()];
//! let query = FeatureVector::from_answers(dataset.features().clone(), &answers).unwrap();
//!
//! let result = predict(&query, &dataset).unwrap();
//! println!("{} ({}%)", result.predicted_label, result.percent_display());
//! ```
//!
//! ## Crate Structure
//!
//! - `addiscreen-core` - Feature sets, feature vectors, reference groups
//! - `addiscreen-similarity` - Similarity scorer, classifier, keyword sentiment
//! - `addiscreen-dataset` - CSV loading and yes/no normalization
//! - `addiscreen-api` - Chatbot sessions and the REST API

pub mod cli;
pub mod server;

// Re-export core types
pub use addiscreen_core::{
    partition, Error, FeatureSet, FeatureVector, GroupLabel, LabeledDataset, ReferenceGroup, Result,
};

// Re-export scoring
pub use addiscreen_similarity::{
    classify, predict, score, similarity, ClassificationResult, KeywordSentiment, Sentiment,
    SimilarityResult,
};

// Re-export dataset loading
pub use addiscreen_dataset::{normalize_answer, DatasetConfig, DatasetError, DatasetLoader};

// Re-export API
pub use addiscreen_api::{AppState, RestApi, SequencerConfig, ServerConfig, SessionStore};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        classify, predict, score, ClassificationResult, DatasetConfig, DatasetLoader, Error,
        FeatureSet, FeatureVector, GroupLabel, KeywordSentiment, LabeledDataset, Result,
        Sentiment, SimilarityResult,
    };
}
