//! Sentiment domain types and the classifier seam.
//!
//! The classifier itself is an external collaborator: anything that can turn a
//! piece of text into a `(label, score)` pair implements [`SentimentClassifier`].
//! This module owns the mapping from that open label vocabulary onto the
//! closed three-way [`Sentiment`] enum.

use crate::error::{Result, SentibotError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Coarse emotional polarity of a user message.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Maps a raw classifier label onto the three-way enum.
    ///
    /// `POSITIVE`/`POS` and `NEGATIVE`/`NEG` are recognized case-insensitively.
    /// Every other label, including a real `NEUTRAL`, collapses to
    /// [`Sentiment::Neutral`].
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_uppercase().as_str() {
            "POSITIVE" | "POS" => Self::Positive,
            "NEGATIVE" | "NEG" => Self::Negative,
            _ => Self::Neutral,
        }
    }

    /// Title-cased name used in display annotations ("Positive").
    pub fn title(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Positive => "😊",
            Self::Negative => "😟",
            Self::Neutral => "😐",
        }
    }
}

/// Raw output of a sentiment classifier, in the classifier's own vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierOutput {
    /// Classifier-defined label (commonly "POSITIVE" / "NEGATIVE").
    pub label: String,
    /// Probability associated with `label`.
    pub score: f64,
}

impl ClassifierOutput {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// A classifier result normalized into domain terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub sentiment: Sentiment,
    /// Always within `[0, 1]`.
    pub confidence: f64,
}

impl TryFrom<ClassifierOutput> for Classification {
    type Error = SentibotError;

    /// Rejects non-finite scores and clamps finite ones into `[0, 1]`.
    fn try_from(output: ClassifierOutput) -> Result<Self> {
        if !output.score.is_finite() {
            return Err(SentibotError::InvalidScore(output.score));
        }

        Ok(Self {
            sentiment: Sentiment::from_label(&output.label),
            confidence: output.score.clamp(0.0, 1.0),
        })
    }
}

/// An abstract sentiment classifier.
///
/// Implementations must fail with [`SentibotError::EmptyInput`] for blank text
/// and must not retry on their own; the caller decides what a failed turn means.
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    /// Short backend name used in logs and error messages.
    fn name(&self) -> &str;

    /// Classifies `text`, returning the top label and its score.
    async fn classify(&self, text: &str) -> Result<ClassifierOutput>;
}
