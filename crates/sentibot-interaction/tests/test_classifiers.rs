use sentibot_core::config::{ClassifierBackend, ClassifierConfig};
use sentibot_core::{ChatSession, Sentiment, SentimentClassifier};
use sentibot_interaction::{LexiconClassifier, build_classifier};
use std::sync::Arc;

#[test]
fn test_build_classifier_selects_backend() {
    let hosted =
        build_classifier(&ClassifierConfig::default()).expect("Should build hosted classifier");
    assert_eq!(hosted.name(), "huggingface");

    let config = ClassifierConfig {
        backend: ClassifierBackend::Lexicon,
        ..ClassifierConfig::default()
    };
    let offline = build_classifier(&config).expect("Should build lexicon classifier");
    assert_eq!(offline.name(), "lexicon");
}

#[tokio::test]
async fn test_lexicon_backed_session() {
    let mut session = ChatSession::with_seed(Arc::new(LexiconClassifier::new()), 9);

    let reply = session
        .respond("This is terrible, the worst service, I am so angry!")
        .await
        .expect("Should respond");
    assert_eq!(reply.sentiment, Sentiment::Negative);
    assert!(reply.text.contains("I sincerely apologize for your negative experience."));

    let reply = session
        .respond("Can you tell me the opening hours?")
        .await
        .expect("Should respond");
    assert_eq!(reply.sentiment, Sentiment::Neutral);
    assert_eq!(
        reply.text,
        "I'm here to assist you. Could you please provide more details about what you need?"
    );

    let summary = session.summary().expect("Should have a summary");
    assert_eq!(summary.total, 2);
    assert_eq!(summary.negative, 1);
    assert_eq!(summary.neutral, 1);
}

#[tokio::test]
async fn test_lexicon_empty_message_records_nothing() {
    let mut session = ChatSession::with_seed(Arc::new(LexiconClassifier::new()), 9);

    let err = session.respond("").await.expect_err("Empty message should fail");

    assert!(err.is_empty_input());
    assert!(session.history().is_empty());
}
