//! Conversation history for a single session.
//!
//! - `turn`: The immutable record of one exchange (`Turn`)
//! - `store`: Ordered, append-only storage (`ConversationStore`)

mod store;
mod turn;

pub use store::{ConversationStore, RESET_MESSAGE};
pub use turn::Turn;
