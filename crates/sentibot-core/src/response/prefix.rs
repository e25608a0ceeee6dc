//! Sentiment-weighted reply prefixes.

use crate::sentiment::Sentiment;
use rand::Rng;
use rand::seq::SliceRandom;

const UPBEAT: &[&str] = &[
    "I'm glad to hear that! 😊 ",
    "That's wonderful! ",
    "Great to hear! ",
    "I'm happy you feel that way! ",
    "Excellent! ",
];

const EMPATHETIC: &[&str] = &[
    "I understand your frustration. Let me help you with that. ",
    "I'm sorry to hear that. I'm here to assist you. ",
    "I apologize for any inconvenience. ",
    "I can see this is concerning. Let me help resolve this. ",
    "I understand this is frustrating. ",
];

const MILD: &[&str] = &[
    "I understand. ",
    "Let me help you with that. ",
    "I'm here to assist. ",
];

/// One threshold rule: strictly above `min_confidence` for `sentiment`.
#[derive(Debug, Clone, Copy)]
struct PrefixTier {
    sentiment: Sentiment,
    min_confidence: f64,
    candidates: &'static [&'static str],
}

/// Picks the tone-setting phrase that is prepended to a base reply.
///
/// Tiers are checked in order; the first one whose sentiment matches and whose
/// threshold is strictly exceeded supplies the candidate list. Nothing matches
/// at or below 0.5 confidence, so low-confidence turns get no prefix.
#[derive(Debug, Clone)]
pub struct PrefixSelector {
    tiers: Vec<PrefixTier>,
}

impl Default for PrefixSelector {
    fn default() -> Self {
        Self {
            tiers: vec![
                PrefixTier {
                    sentiment: Sentiment::Positive,
                    min_confidence: 0.8,
                    candidates: UPBEAT,
                },
                PrefixTier {
                    sentiment: Sentiment::Negative,
                    min_confidence: 0.7,
                    candidates: EMPATHETIC,
                },
                PrefixTier {
                    sentiment: Sentiment::Negative,
                    min_confidence: 0.5,
                    candidates: MILD,
                },
            ],
        }
    }
}

impl PrefixSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the candidate prefixes for a classification, empty when no
    /// tier applies.
    pub fn candidates(&self, sentiment: Sentiment, confidence: f64) -> &'static [&'static str] {
        self.tiers
            .iter()
            .find(|tier| tier.sentiment == sentiment && confidence > tier.min_confidence)
            .map(|tier| tier.candidates)
            .unwrap_or(&[])
    }

    /// Chooses one candidate uniformly at random using `rng`.
    ///
    /// Returns an empty string when no tier applies.
    pub fn select<R: Rng + ?Sized>(
        &self,
        sentiment: Sentiment,
        confidence: f64,
        rng: &mut R,
    ) -> &'static str {
        self.candidates(sentiment, confidence)
            .choose(rng)
            .copied()
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;
    use strum::IntoEnumIterator;

    #[test]
    fn test_upbeat_tier_for_confident_positive() {
        let selector = PrefixSelector::new();
        assert_eq!(selector.candidates(Sentiment::Positive, 0.95), UPBEAT);
        assert!(selector.candidates(Sentiment::Positive, 0.8).is_empty());
    }

    #[test]
    fn test_negative_tiers() {
        let selector = PrefixSelector::new();
        assert_eq!(selector.candidates(Sentiment::Negative, 0.71), EMPATHETIC);
        assert_eq!(selector.candidates(Sentiment::Negative, 0.7), MILD);
        assert_eq!(selector.candidates(Sentiment::Negative, 0.51), MILD);
        assert!(selector.candidates(Sentiment::Negative, 0.5).is_empty());
    }

    #[test]
    fn test_neutral_never_prefixed() {
        let selector = PrefixSelector::new();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(selector.select(Sentiment::Neutral, 0.99, &mut rng), "");
    }

    #[test]
    fn test_no_prefix_at_or_below_half_confidence() {
        let selector = PrefixSelector::new();
        let mut rng = StdRng::seed_from_u64(42);
        for sentiment in Sentiment::iter() {
            for step in 0..=50 {
                let confidence = step as f64 / 100.0;
                assert_eq!(
                    selector.select(sentiment, confidence, &mut rng),
                    "",
                    "{sentiment} at {confidence}"
                );
            }
        }
    }

    #[test]
    fn test_pinned_rng_picks_first_candidate() {
        let selector = PrefixSelector::new();
        let mut rng = StepRng::new(0, 0);
        assert_eq!(
            selector.select(Sentiment::Positive, 0.9, &mut rng),
            "I'm glad to hear that! 😊 "
        );
        assert_eq!(selector.select(Sentiment::Negative, 0.6, &mut rng), "I understand. ");
    }

    #[test]
    fn test_selection_stays_within_candidates() {
        let selector = PrefixSelector::new();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let prefix = selector.select(Sentiment::Negative, 0.9, &mut rng);
            assert!(EMPATHETIC.contains(&prefix));
        }
    }
}
