//! Aggregate sentiment statistics over a conversation.

use crate::conversation::Turn;
use crate::sentiment::Sentiment;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reported instead of a summary when nothing has been said yet.
pub const NO_HISTORY_MESSAGE: &str = "No conversation history yet.";

/// Three-way customer satisfaction indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Satisfaction {
    /// More positive than negative turns.
    High,
    /// More negative than positive turns.
    Low,
    /// Positive and negative counts are equal.
    Neutral,
}

impl Satisfaction {
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "🟢 High (Mostly Positive)",
            Self::Low => "🔴 Low (Needs Attention)",
            Self::Neutral => "🟡 Neutral",
        }
    }
}

/// Distribution and average-confidence statistics for a non-empty history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    /// Mean confidence over positive turns, 0 when there are none.
    pub avg_positive_score: f64,
    /// Mean confidence over negative turns, 0 when there are none.
    pub avg_negative_score: f64,
}

impl SentimentSummary {
    /// Computes the summary, or `None` for an empty history.
    pub fn from_turns(turns: &[Turn]) -> Option<Self> {
        if turns.is_empty() {
            return None;
        }

        let mut positive = 0;
        let mut negative = 0;
        let mut neutral = 0;
        let mut positive_sum = 0.0;
        let mut negative_sum = 0.0;

        for turn in turns {
            match turn.sentiment {
                Sentiment::Positive => {
                    positive += 1;
                    positive_sum += turn.confidence;
                }
                Sentiment::Negative => {
                    negative += 1;
                    negative_sum += turn.confidence;
                }
                Sentiment::Neutral => neutral += 1,
            }
        }

        Some(Self {
            total: turns.len(),
            positive,
            negative,
            neutral,
            avg_positive_score: mean(positive_sum, positive),
            avg_negative_score: mean(negative_sum, negative),
        })
    }

    pub fn count(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }

    /// Share of turns with `sentiment`, in percent.
    pub fn percentage(&self, sentiment: Sentiment) -> f64 {
        self.count(sentiment) as f64 / self.total as f64 * 100.0
    }

    pub fn satisfaction(&self) -> Satisfaction {
        use std::cmp::Ordering;

        match self.positive.cmp(&self.negative) {
            Ordering::Greater => Satisfaction::High,
            Ordering::Less => Satisfaction::Low,
            Ordering::Equal => Satisfaction::Neutral,
        }
    }
}

fn mean(sum: f64, count: usize) -> f64 {
    if count == 0 { 0.0 } else { sum / count as f64 }
}

impl fmt::Display for SentimentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "📊 Conversation Sentiment Summary")?;
        writeln!(f)?;
        writeln!(f, "📈 Total Messages: {}", self.total)?;
        writeln!(f)?;
        writeln!(f, "Sentiment Distribution:")?;
        for sentiment in [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral] {
            writeln!(
                f,
                "• {}: {} messages ({:.1}%)",
                sentiment.title(),
                self.count(sentiment),
                self.percentage(sentiment)
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Average Confidence Scores:")?;
        writeln!(f, "• Positive: {:.3}", self.avg_positive_score)?;
        writeln!(f, "• Negative: {:.3}", self.avg_negative_score)?;
        writeln!(f)?;
        writeln!(f, "Customer Satisfaction Indicator:")?;
        write!(f, "{}", self.satisfaction().label())
    }
}

/// Renders the summary block for `turns`, or [`NO_HISTORY_MESSAGE`].
pub fn summarize(turns: &[Turn]) -> String {
    match SentimentSummary::from_turns(turns) {
        Some(summary) => summary.to_string(),
        None => NO_HISTORY_MESSAGE.to_string(),
    }
}
