//! Offline keyword-lexicon sentiment classifier.
//!
//! Counts positive and negative cue words (no model, no network) and emits
//! `POSITIVE`, `NEGATIVE` or `NEUTRAL`. Useful when the inference API is not
//! reachable, and the only bundled backend that produces a real neutral label.

use async_trait::async_trait;
use sentibot_core::{ClassifierOutput, Result, SentibotError, SentimentClassifier};

// ── Keyword sets ───────────────────────────────────────────

const POSITIVE_KW: &[&str] = &[
    "love", "loved", "amazing", "awesome", "excellent", "perfect", "best", "great", "good",
    "happy", "glad", "wonderful", "fantastic", "thank", "thanks", "appreciate", "helpful",
    "nice", "pleased", "satisfied", "brilliant", "quick", "easy", "recommend",
];

const NEGATIVE_KW: &[&str] = &[
    "hate", "terrible", "horrible", "worst", "awful", "bad", "disappointed", "disappointing",
    "angry", "frustrated", "frustrating", "annoyed", "broken", "wrong", "problem", "issue",
    "error", "slow", "late", "never", "useless", "refund", "complaint", "unacceptable", "poor",
];

/// Words that flip the polarity of the next cue word ("not good").
const NEGATORS: &[&str] = &[
    "not", "no", "never", "don't", "didn't", "isn't", "wasn't", "hasn't", "haven't", "can't",
    "won't",
];

/// Lexicon-based classifier.
#[derive(Debug, Clone, Default)]
pub struct LexiconClassifier;

impl LexiconClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Scores `text` synchronously.
    ///
    /// The score combines how one-sided the cue counts are with how many cues
    /// were seen: `0.5 + 0.5 * dominance * (1 - 0.5^cues)`. A message with no
    /// cues, or a tie, is `NEUTRAL` at 0.5.
    pub fn score(&self, text: &str) -> Result<ClassifierOutput> {
        if text.trim().is_empty() {
            return Err(SentibotError::EmptyInput);
        }

        let lowered = text.to_lowercase();
        let words: Vec<&str> = lowered
            .split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .filter(|w| !w.is_empty())
            .collect();

        let mut positive = 0u32;
        let mut negative = 0u32;
        let mut negate_next = false;

        for word in words {
            let polarity = if POSITIVE_KW.contains(&word) {
                Some(true)
            } else if NEGATIVE_KW.contains(&word) {
                Some(false)
            } else {
                None
            };

            if let Some(is_positive) = polarity {
                if is_positive != negate_next {
                    positive += 1;
                } else {
                    negative += 1;
                }
                negate_next = false;
            }

            // A negator applies to the next cue word, however far away
            if NEGATORS.contains(&word) {
                negate_next = true;
            }
        }

        let cues = positive + negative;
        if cues == 0 || positive == negative {
            return Ok(ClassifierOutput::new("NEUTRAL", 0.5));
        }

        let dominance = (positive as f64 - negative as f64).abs() / cues as f64;
        let saturation = 1.0 - 0.5f64.powi(cues as i32);
        let score = 0.5 + 0.5 * dominance * saturation;
        let label = if positive > negative { "POSITIVE" } else { "NEGATIVE" };

        Ok(ClassifierOutput::new(label, score))
    }
}

#[async_trait]
impl SentimentClassifier for LexiconClassifier {
    fn name(&self) -> &str {
        "lexicon"
    }

    async fn classify(&self, text: &str) -> Result<ClassifierOutput> {
        self.score(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_positive_cue() {
        let output = LexiconClassifier::new().score("I love it").unwrap();
        assert_eq!(output.label, "POSITIVE");
        assert!((output.score - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_more_cues_raise_confidence() {
        let classifier = LexiconClassifier::new();
        let one = classifier.score("terrible").unwrap();
        let three = classifier.score("terrible, awful, the worst").unwrap();
        assert_eq!(three.label, "NEGATIVE");
        assert!(three.score > one.score);
        assert!(three.score < 1.0);
    }

    #[test]
    fn test_negation_flips_polarity() {
        let output = LexiconClassifier::new().score("This is not good").unwrap();
        assert_eq!(output.label, "NEGATIVE");
    }

    #[test]
    fn test_no_cues_is_neutral() {
        let output = LexiconClassifier::new().score("Where is the store located?").unwrap();
        assert_eq!(output, ClassifierOutput::new("NEUTRAL", 0.5));
    }

    #[test]
    fn test_tie_is_neutral() {
        let output = LexiconClassifier::new().score("good product, bad delivery").unwrap();
        assert_eq!(output.label, "NEUTRAL");
    }

    #[test]
    fn test_empty_input() {
        assert!(LexiconClassifier::new().score("   ").unwrap_err().is_empty_input());
    }
}
