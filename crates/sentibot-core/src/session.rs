//! Chat session: one response engine plus one conversation store.
//!
//! Each active conversation owns its own `ChatSession`; nothing is shared
//! between sessions. Messages are processed one at a time (`respond` takes
//! `&mut self`), so a turn is fully classified, composed and recorded before
//! the next one starts.

use crate::conversation::{ConversationStore, Turn};
use crate::error::Result;
use crate::response::{Reply, ResponseEngine};
use crate::sentiment::SentimentClassifier;
use crate::summary::{self, SentimentSummary};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::sync::Arc;
use uuid::Uuid;

pub struct ChatSession {
    id: String,
    engine: ResponseEngine,
    store: ConversationStore,
    rng: Box<dyn RngCore + Send>,
}

impl ChatSession {
    /// Creates a session with an entropy-seeded random source.
    pub fn new(classifier: Arc<dyn SentimentClassifier>) -> Self {
        Self::with_rng(classifier, Box::new(StdRng::from_entropy()))
    }

    /// Creates a session whose prefix choices are reproducible for `seed`.
    pub fn with_seed(classifier: Arc<dyn SentimentClassifier>, seed: u64) -> Self {
        Self::with_rng(classifier, Box::new(StdRng::seed_from_u64(seed)))
    }

    /// Creates a session drawing prefix choices from `rng`.
    pub fn with_rng(
        classifier: Arc<dyn SentimentClassifier>,
        rng: Box<dyn RngCore + Send>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            engine: ResponseEngine::new(classifier),
            store: ConversationStore::new(),
            rng,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn engine(&self) -> &ResponseEngine {
        &self.engine
    }

    pub fn history(&self) -> &ConversationStore {
        &self.store
    }

    /// Handles one user message: classify, compose, record.
    ///
    /// # Errors
    ///
    /// Classifier failures are returned to the caller and nothing is recorded
    /// for the failed message.
    pub async fn respond(&mut self, message: &str) -> Result<Reply> {
        let reply = match self.engine.reply(message, self.rng.as_mut()).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(session_id = %self.id, error = %e, "Failed to classify message");
                return Err(e);
            }
        };

        self.store.append(Turn::new(
            message,
            reply.text.clone(),
            reply.sentiment,
            reply.confidence,
        ));

        tracing::info!(
            session_id = %self.id,
            sentiment = %reply.sentiment,
            confidence = reply.confidence,
            turns = self.store.len(),
            "Recorded turn"
        );

        Ok(reply)
    }

    /// Statistics over the recorded turns, `None` while the history is empty.
    pub fn summary(&self) -> Option<SentimentSummary> {
        SentimentSummary::from_turns(self.store.turns())
    }

    /// Human-readable summary block (or the fixed "no history" message).
    pub fn summarize(&self) -> String {
        summary::summarize(self.store.turns())
    }

    /// Clears the history and returns a confirmation message.
    pub fn reset(&mut self) -> &'static str {
        tracing::info!(session_id = %self.id, cleared = self.store.len(), "Resetting conversation");
        self.store.reset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SentibotError;
    use crate::conversation::RESET_MESSAGE;
    use crate::sentiment::{ClassifierOutput, Sentiment};
    use crate::summary::NO_HISTORY_MESSAGE;
    use async_trait::async_trait;
    use rand::rngs::mock::StepRng;
    use std::collections::HashMap;

    const COMPLIMENT: &str = "Thank you so much for your positive feedback! It means a lot to us. Is there anything else you'd like to know?";

    const UPBEAT: [&str; 5] = [
        "I'm glad to hear that! 😊 ",
        "That's wonderful! ",
        "Great to hear! ",
        "I'm happy you feel that way! ",
        "Excellent! ",
    ];

    // Mock classifier answering from a fixed table
    struct MockClassifier {
        answers: HashMap<String, ClassifierOutput>,
    }

    impl MockClassifier {
        fn new(answers: &[(&str, &str, f64)]) -> Arc<Self> {
            Arc::new(Self {
                answers: answers
                    .iter()
                    .map(|(text, label, score)| {
                        (text.to_string(), ClassifierOutput::new(*label, *score))
                    })
                    .collect(),
            })
        }
    }

    #[async_trait]
    impl SentimentClassifier for MockClassifier {
        fn name(&self) -> &str {
            "mock"
        }

        async fn classify(&self, text: &str) -> Result<ClassifierOutput> {
            self.answers
                .get(text)
                .cloned()
                .ok_or_else(|| SentibotError::classifier("mock", format!("no answer for '{text}'")))
        }
    }

    #[tokio::test]
    async fn test_round_trip_compliment() {
        let classifier = MockClassifier::new(&[("I love this!", "POSITIVE", 0.95)]);
        let mut session = ChatSession::with_seed(classifier, 11);

        let reply = session.respond("I love this!").await.unwrap();

        assert!(reply.text.ends_with(COMPLIMENT));
        let prefix = &reply.text[..reply.text.len() - COMPLIMENT.len()];
        assert!(UPBEAT.contains(&prefix), "unexpected prefix {prefix:?}");

        let turns = session.history().turns();
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].sentiment, Sentiment::Positive);
        assert_eq!(turns[0].confidence, 0.95);
        assert_eq!(turns[0].message, "I love this!");
        assert_eq!(turns[0].reply, reply.text);
    }

    #[tokio::test]
    async fn test_pinned_rng_gives_exact_reply() {
        let classifier = MockClassifier::new(&[("I love this!", "POSITIVE", 0.95)]);
        let mut session = ChatSession::with_rng(classifier, Box::new(StepRng::new(0, 0)));

        let reply = session.respond("I love this!").await.unwrap();

        assert_eq!(reply.text, format!("{}{}", UPBEAT[0], COMPLIMENT));
    }

    #[tokio::test]
    async fn test_classifier_error_records_nothing() {
        let classifier = MockClassifier::new(&[]);
        let mut session = ChatSession::with_seed(classifier, 1);

        let err = session.respond("unknown").await.unwrap_err();

        assert!(err.is_classifier());
        assert!(session.history().is_empty());
        assert_eq!(session.summarize(), NO_HISTORY_MESSAGE);
    }

    #[tokio::test]
    async fn test_store_grows_by_one_per_message() {
        let classifier = MockClassifier::new(&[
            ("hello", "POSITIVE", 0.7),
            ("this is terrible", "NEGATIVE", 0.99),
            ("where is it", "NEUTRAL", 0.6),
        ]);
        let mut session = ChatSession::with_seed(classifier, 5);

        let messages = ["hello", "this is terrible", "where is it", "hello"];
        for (n, message) in messages.iter().enumerate() {
            session.respond(message).await.unwrap();
            assert_eq!(session.history().len(), n + 1);
        }

        let summary = session.summary().unwrap();
        assert_eq!(summary.positive, 2);
        assert_eq!(summary.negative, 1);
        assert_eq!(summary.neutral, 1);
    }

    #[tokio::test]
    async fn test_reset_then_summarize_matches_empty() {
        let classifier = MockClassifier::new(&[("hi", "POSITIVE", 0.9), ("bad", "NEGATIVE", 0.8)]);
        let mut session = ChatSession::with_seed(classifier, 2);
        let empty = session.summarize();

        session.respond("hi").await.unwrap();
        session.respond("bad").await.unwrap();
        assert_ne!(session.summarize(), empty);

        assert_eq!(session.reset(), RESET_MESSAGE);
        assert_eq!(session.summarize(), empty);
    }

    #[tokio::test]
    async fn test_summary_after_single_positive_turn() {
        let classifier = MockClassifier::new(&[("great", "POSITIVE", 0.9)]);
        let mut session = ChatSession::with_seed(classifier, 3);
        session.respond("great").await.unwrap();

        let report = session.summarize();
        assert!(report.contains("• Positive: 1 messages (100.0%)"));
        assert!(report.contains("• Negative: 0 messages (0.0%)"));
        assert!(report.contains("• Neutral: 0 messages (0.0%)"));
        assert!(report.contains("• Positive: 0.900"));
        assert!(report.contains("• Negative: 0.000"));
        assert!(report.contains("🟢 High (Mostly Positive)"));

        // Idempotent without an intervening respond/reset
        assert_eq!(report, session.summarize());
    }

    #[test]
    fn test_sessions_are_isolated() {
        let classifier = MockClassifier::new(&[]);
        let a = ChatSession::with_seed(classifier.clone(), 1);
        let b = ChatSession::with_seed(classifier, 1);
        assert_ne!(a.id(), b.id());
    }
}
