//! Keyword rule table for base replies.
//!
//! The table is an ordered list: the first topic with a matching keyword wins.
//! Order is part of the observable behavior ("thank you, I want a refund"
//! resolves to [`Topic::Thanks`] because thanks is checked before refund).

use crate::sentiment::Sentiment;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Topical category a base reply is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Topic {
    Greeting,
    Thanks,
    Problem,
    Product,
    Refund,
    Delivery,
    Account,
    Payment,
    Complaint,
    Compliment,
    Help,
    Goodbye,
}

/// A single entry of the decision table.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub topic: Topic,
    pub keywords: &'static [&'static str],
    pub template: &'static str,
}

impl KeywordRule {
    /// Whether any keyword occurs in the already lower-cased `message`.
    pub fn matches(&self, message: &str) -> bool {
        self.keywords.iter().any(|kw| contains_keyword(message, kw))
    }
}

const RULES: &[KeywordRule] = &[
    KeywordRule {
        topic: Topic::Greeting,
        keywords: &[
            "hello",
            "hi",
            "hey",
            "greetings",
            "good morning",
            "good afternoon",
            "good evening",
        ],
        template: "Hello! How can I assist you today?",
    },
    KeywordRule {
        topic: Topic::Thanks,
        keywords: &["thank", "thanks", "appreciate", "grateful"],
        template: "You're welcome! Is there anything else I can help you with?",
    },
    KeywordRule {
        topic: Topic::Problem,
        keywords: &["problem", "issue", "error", "wrong", "not working", "broken", "bug"],
        template: "I'd be happy to help you resolve this issue. Could you please provide more details about what's happening?",
    },
    KeywordRule {
        topic: Topic::Product,
        keywords: &["product", "item", "purchase", "buy", "price", "cost"],
        template: "I can help you with product information. What would you like to know?",
    },
    KeywordRule {
        topic: Topic::Refund,
        keywords: &["refund", "return", "money back", "cancel order"],
        template: "I understand you'd like to discuss a refund or return. Let me help you with the process. Do you have your order number?",
    },
    KeywordRule {
        topic: Topic::Delivery,
        keywords: &["delivery", "shipping", "track", "order", "package", "arrive"],
        template: "I can help you track your order. Please provide your order number or tracking ID, and I'll check the status for you.",
    },
    KeywordRule {
        topic: Topic::Account,
        keywords: &["account", "login", "password", "sign in", "access"],
        template: "I can help you with account-related issues. What specific problem are you experiencing?",
    },
    KeywordRule {
        topic: Topic::Payment,
        keywords: &["payment", "credit card", "charge", "billing"],
        template: "I'll help you resolve the payment issue. Can you describe what happened with your payment?",
    },
    KeywordRule {
        topic: Topic::Complaint,
        keywords: &["complaint", "disappointed", "angry", "terrible", "horrible", "worst"],
        template: "I sincerely apologize for your negative experience. Your feedback is important to us. Please share the details so I can help make this right.",
    },
    KeywordRule {
        topic: Topic::Compliment,
        keywords: &["love", "amazing", "excellent", "perfect", "best", "awesome"],
        template: "Thank you so much for your positive feedback! It means a lot to us. Is there anything else you'd like to know?",
    },
    KeywordRule {
        topic: Topic::Help,
        keywords: &["help", "assist", "support", "question"],
        template: "Of course! I'm here to help. What do you need assistance with?",
    },
    KeywordRule {
        topic: Topic::Goodbye,
        keywords: &["bye", "goodbye", "see you", "take care"],
        template: "Goodbye! Feel free to reach out if you need any further assistance. Have a great day!",
    },
];

const FALLBACK_NEGATIVE: &str = "I want to make sure I address your concerns properly. Could you please tell me more about what you need help with?";
const FALLBACK_POSITIVE: &str = "I'm here to help! What can I assist you with today?";
const FALLBACK_NEUTRAL: &str = "I'm here to assist you. Could you please provide more details about what you need?";

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

/// Word-start aware containment check.
///
/// The keyword must begin a word but may run on into an inflection
/// ("bug" matches "bugs", "buy" matches "buying"), while "hi" inside "this"
/// does not count.
fn contains_keyword(haystack: &str, keyword: &str) -> bool {
    haystack.match_indices(keyword).any(|(start, _)| {
        haystack[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !is_word_char(c))
    })
}

/// Ordered keyword-to-template decision table with sentiment-keyed fallbacks.
#[derive(Debug, Clone)]
pub struct ReplyRules {
    rules: &'static [KeywordRule],
}

impl Default for ReplyRules {
    fn default() -> Self {
        Self { rules: RULES }
    }
}

impl ReplyRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// The rules in priority order.
    pub fn rules(&self) -> &[KeywordRule] {
        self.rules
    }

    /// Finds the first rule whose keywords occur in `message` (case-insensitive).
    pub fn match_topic(&self, message: &str) -> Option<&KeywordRule> {
        let lowered = message.to_lowercase();
        self.rules.iter().find(|rule| rule.matches(&lowered))
    }

    /// The reply used when no topic matches.
    pub fn fallback(sentiment: Sentiment) -> &'static str {
        match sentiment {
            Sentiment::Negative => FALLBACK_NEGATIVE,
            Sentiment::Positive => FALLBACK_POSITIVE,
            Sentiment::Neutral => FALLBACK_NEUTRAL,
        }
    }

    /// Canned reply for `message`: the first matching topic's template,
    /// otherwise the sentiment fallback.
    pub fn base_reply(&self, message: &str, sentiment: Sentiment) -> &'static str {
        match self.match_topic(message) {
            Some(rule) => {
                tracing::debug!(topic = %rule.topic, "Matched reply topic");
                rule.template
            }
            None => Self::fallback(sentiment),
        }
    }
}
