//! Sentiment classifier backends for Sentibot.

pub mod huggingface_classifier;
pub mod lexicon_classifier;

pub use huggingface_classifier::HuggingFaceClassifier;
pub use lexicon_classifier::LexiconClassifier;

use sentibot_core::config::{ClassifierBackend, ClassifierConfig};
use sentibot_core::{Result, SentimentClassifier};
use std::sync::Arc;

/// Builds the classifier selected by `config.backend`.
///
/// # Errors
///
/// Returns a config error if the HTTP client for the hosted backend cannot
/// be created.
pub fn build_classifier(config: &ClassifierConfig) -> Result<Arc<dyn SentimentClassifier>> {
    let classifier: Arc<dyn SentimentClassifier> = match config.backend {
        ClassifierBackend::HuggingFace => {
            if config.api_token.is_none() {
                tracing::warn!(
                    "No Hugging Face API token configured; requests may be rate limited"
                );
            }
            Arc::new(HuggingFaceClassifier::from_config(config)?)
        }
        ClassifierBackend::Lexicon => Arc::new(LexiconClassifier::new()),
    };

    tracing::info!(
        backend = classifier.name(),
        model = %config.model,
        "Sentiment classifier ready"
    );
    Ok(classifier)
}
