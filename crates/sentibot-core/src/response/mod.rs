//! Response engine module.
//!
//! # Module Structure
//!
//! - `prefix`: Sentiment-weighted tone prefixes (`PrefixSelector`)
//! - `rules`: Ordered keyword-to-template table (`ReplyRules`, `Topic`)
//! - `engine`: Orchestration of classify → prefix → base reply (`ResponseEngine`)

mod engine;
mod prefix;
mod rules;

pub use engine::{Reply, ResponseEngine};
pub use prefix::PrefixSelector;
pub use rules::{KeywordRule, ReplyRules, Topic};
