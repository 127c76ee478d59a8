//! # addiscreen Similarity
//!
//! The scoring procedures behind addiscreen.
//!
//! ## Features
//!
//! - **Similarity Scorer**: Mean fraction of matching answers between a query and each reference group
//! - **Classifier**: Predicted label and addiction percentage from the two group similarities
//! - **Keyword Sentiment**: Fixed-dictionary positive/negative text classifier
//!
//! ## Example
//!
//! ```rust
//! use addiscreen_core::{partition, FeatureSet, FeatureVector, GroupLabel};
//! use addiscreen_similarity::{predict, KeywordSentiment, Sentiment};
//!
//! let features = FeatureSet::shared(["a", "b", "c"]).unwrap();
//! let row = |bits: &[bool]| FeatureVector::from_answers(features.clone(), bits).unwrap();
//! let dataset = partition(features.clone(), vec![
//!     (row(&[true, true, false]), GroupLabel::Addicted),
//!     (row(&[true, false, false]), GroupLabel::Addicted),
//!     (row(&[false, false, false]), GroupLabel::NotAddicted),
//!     (row(&[false, false, true]), GroupLabel::NotAddicted),
//! ]).unwrap();
//!
//! let result = predict(&row(&[true, true, false]), &dataset).unwrap();
//! assert_eq!(result.predicted_label, GroupLabel::Addicted);
//! assert_eq!(result.percent_display(), "83.3");
//!
//! let sentiment = KeywordSentiment::default();
//! assert_eq!(sentiment.predict_text("I love this great day"), Sentiment::Positive);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌────────────────┐
//! │    Query    │────>│   Scorer    │────>│   Classifier   │
//! │  (vector)   │     │ (2 groups)  │     │ (label, pct %) │
//! └─────────────┘     └─────────────┘     └────────────────┘
//!       ^
//!       │ 0/1 per response
//! ┌─────────────┐
//! │  Sentiment  │
//! │  (keywords) │
//! └─────────────┘
//! ```

pub mod scorer;
pub mod classifier;
pub mod sentiment;

pub use scorer::{score, similarity, SimilarityResult};
pub use classifier::{classify, predict, ClassificationResult};
pub use sentiment::{KeywordSentiment, Sentiment, KEYWORDS};
