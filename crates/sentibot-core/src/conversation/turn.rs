//! Conversation turn type.

use crate::sentiment::Sentiment;
use serde::{Deserialize, Serialize};

/// One user message paired with the bot's reply and its sentiment metadata.
///
/// Turns are created once per user message and never modified afterwards;
/// the store only hands out shared references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    /// The user's message, verbatim.
    pub message: String,
    /// The full reply shown to the user (prefix included).
    pub reply: String,
    pub sentiment: Sentiment,
    /// Classifier confidence in `[0, 1]`.
    pub confidence: f64,
    /// Timestamp when the turn was recorded (ISO 8601 format).
    pub timestamp: String,
}

impl Turn {
    pub fn new(
        message: impl Into<String>,
        reply: impl Into<String>,
        sentiment: Sentiment,
        confidence: f64,
    ) -> Self {
        Self {
            message: message.into(),
            reply: reply.into(),
            sentiment,
            confidence,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
