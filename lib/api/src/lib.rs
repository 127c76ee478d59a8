//! HTTP surface for addiscreen
//!
//! - `GET  /start-assessment` - open a chatbot session and get question 1
//! - `POST /get-response`     - answer the current question of a session
//! - `POST /analyze`          - sentiment-score free text responses and classify them
//! - `POST /predict`          - classify explicit yes/no answers per feature
//! - `GET  /features`         - list feature columns and their question labels
//! - `POST /sentiment`        - classify one text

pub mod chatbot;
pub mod error;
pub mod rest;

pub use chatbot::{Assessment, Category, Reply, SequencerConfig, SessionStore, DEFAULT_SESSION_TTL, DEFAULT_THRESHOLD, QUESTIONS};
pub use error::ApiError;
pub use rest::{AppState, RestApi, ServerConfig};
