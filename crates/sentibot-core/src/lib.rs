//! Core domain for Sentibot, a sentiment-aware customer service chatbot.
//!
//! A [`ChatSession`] classifies each user message through a pluggable
//! [`SentimentClassifier`], composes a rule-based reply with a tone prefix,
//! records the exchange, and reports aggregate sentiment statistics on demand.

pub mod config;
pub mod conversation;
pub mod error;
pub mod response;
pub mod sentiment;
pub mod session;
pub mod summary;

// Re-export common types
pub use error::{Result, SentibotError};
pub use response::{Reply, ResponseEngine};
pub use sentiment::{Classification, ClassifierOutput, Sentiment, SentimentClassifier};
pub use session::ChatSession;
pub use summary::{NO_HISTORY_MESSAGE, SentimentSummary};
