use super::prefix::PrefixSelector;
use super::rules::ReplyRules;
use crate::error::{Result, SentibotError};
use crate::sentiment::{Classification, Sentiment, SentimentClassifier};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A composed reply together with the classification that shaped it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    /// Prefix + base reply.
    pub text: String,
    pub sentiment: Sentiment,
    pub confidence: f64,
}

impl Reply {
    /// Human-readable sentiment annotation, e.g.
    /// `[Sentiment: Positive 😊 | Confidence: 87.00%]`.
    pub fn annotation(&self) -> String {
        format!(
            "[Sentiment: {} {} | Confidence: {:.2}%]",
            self.sentiment.title(),
            self.sentiment.emoji(),
            self.confidence * 100.0
        )
    }

    /// Reply text followed by a blank line and the annotation.
    pub fn display_text(&self) -> String {
        format!("{}\n\n{}", self.text, self.annotation())
    }
}

/// Maps a user message to a reply.
///
/// The engine is stateless apart from its collaborators: every reply depends
/// only on the current message and its classification, never on history.
#[derive(Clone)]
pub struct ResponseEngine {
    classifier: Arc<dyn SentimentClassifier>,
    prefixes: PrefixSelector,
    rules: ReplyRules,
}

impl ResponseEngine {
    pub fn new(classifier: Arc<dyn SentimentClassifier>) -> Self {
        Self {
            classifier,
            prefixes: PrefixSelector::default(),
            rules: ReplyRules::default(),
        }
    }

    pub fn classifier_name(&self) -> &str {
        self.classifier.name()
    }

    /// Classifies `message` with the configured classifier.
    ///
    /// # Errors
    ///
    /// Propagates the classifier's error unchanged (no retry), and rejects
    /// blank messages with [`SentibotError::EmptyInput`] before calling out.
    pub async fn classify(&self, message: &str) -> Result<Classification> {
        if message.trim().is_empty() {
            return Err(SentibotError::EmptyInput);
        }

        let output = self.classifier.classify(message).await?;
        tracing::debug!(
            backend = self.classifier.name(),
            label = %output.label,
            score = output.score,
            "Classifier output"
        );
        Classification::try_from(output)
    }

    pub fn select_prefix(
        &self,
        sentiment: Sentiment,
        confidence: f64,
        rng: &mut (dyn RngCore + Send),
    ) -> &'static str {
        self.prefixes.select(sentiment, confidence, rng)
    }

    pub fn compose_base_reply(&self, message: &str, sentiment: Sentiment) -> &'static str {
        self.rules.base_reply(message, sentiment)
    }

    /// Classifies and composes a full reply without recording anything.
    pub async fn reply(&self, message: &str, rng: &mut (dyn RngCore + Send)) -> Result<Reply> {
        let Classification {
            sentiment,
            confidence,
        } = self.classify(message).await?;

        let prefix = self.select_prefix(sentiment, confidence, rng);
        let base = self.compose_base_reply(message, sentiment);

        Ok(Reply {
            text: format!("{prefix}{base}"),
            sentiment,
            confidence,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::ClassifierOutput;
    use async_trait::async_trait;
    use rand::rngs::mock::StepRng;

    struct FixedClassifier(ClassifierOutput);

    #[async_trait]
    impl SentimentClassifier for FixedClassifier {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn classify(&self, _text: &str) -> Result<ClassifierOutput> {
            Ok(self.0.clone())
        }
    }

    fn engine(label: &str, score: f64) -> ResponseEngine {
        ResponseEngine::new(Arc::new(FixedClassifier(ClassifierOutput::new(label, score))))
    }

    #[tokio::test]
    async fn test_reply_prefix_and_base() {
        let engine = engine("NEGATIVE", 0.9);
        let mut rng = StepRng::new(0, 0);

        let reply = engine.reply("My package is broken", &mut rng).await.unwrap();

        assert_eq!(reply.sentiment, Sentiment::Negative);
        assert_eq!(
            reply.text,
            "I understand your frustration. Let me help you with that. \
             I'd be happy to help you resolve this issue. Could you please provide more details about what's happening?"
        );
    }

    #[tokio::test]
    async fn test_blank_message_is_rejected_before_classifier() {
        let engine = engine("POSITIVE", 0.9);
        let err = engine.classify("   ").await.unwrap_err();
        assert!(err.is_empty_input());
    }

    #[tokio::test]
    async fn test_unknown_label_is_neutral_without_prefix() {
        let engine = engine("LABEL_1", 0.99);
        let mut rng = StepRng::new(0, 0);

        let reply = engine.reply("what are your opening times", &mut rng).await.unwrap();

        assert_eq!(reply.sentiment, Sentiment::Neutral);
        assert_eq!(reply.text, ReplyRules::fallback(Sentiment::Neutral));
    }

    #[test]
    fn test_display_text_annotation() {
        let reply = Reply {
            text: "Hello!".to_string(),
            sentiment: Sentiment::Positive,
            confidence: 0.87,
        };
        assert_eq!(
            reply.display_text(),
            "Hello!\n\n[Sentiment: Positive 😊 | Confidence: 87.00%]"
        );
    }
}
