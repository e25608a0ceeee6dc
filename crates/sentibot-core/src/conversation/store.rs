use super::turn::Turn;

/// Confirmation returned by [`ConversationStore::reset`].
pub const RESET_MESSAGE: &str = "Conversation history cleared!";

/// Append-only, in-memory history of a single session.
///
/// Insertion order is preserved. There is no capacity limit and no
/// deduplication: after N appends the store holds exactly N turns.
#[derive(Debug, Clone, Default)]
pub struct ConversationStore {
    turns: Vec<Turn>,
}

impl ConversationStore {
    /// Creates an empty store.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentibot_core::conversation::ConversationStore;
    ///
    /// let store = ConversationStore::new();
    /// assert!(store.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Removes every turn and returns a confirmation message.
    pub fn reset(&mut self) -> &'static str {
        self.turns.clear();
        RESET_MESSAGE
    }

    /// The recorded turns, oldest first.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::Sentiment;

    #[test]
    fn test_append_keeps_order_and_duplicates() {
        let mut store = ConversationStore::new();
        store.append(Turn::new("hi", "Hello!", Sentiment::Positive, 0.9));
        store.append(Turn::new("hi", "Hello!", Sentiment::Positive, 0.9));
        store.append(Turn::new("bad", "Sorry", Sentiment::Negative, 0.8));

        assert_eq!(store.len(), 3);
        assert_eq!(store.turns()[0].message, "hi");
        assert_eq!(store.last().unwrap().sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut store = ConversationStore::new();
        store.append(Turn::new("hi", "Hello!", Sentiment::Neutral, 0.5));

        assert_eq!(store.reset(), RESET_MESSAGE);
        assert!(store.is_empty());
        assert!(store.last().is_none());
    }

    #[test]
    fn test_turn_timestamp_is_rfc3339() {
        let turn = Turn::new("hi", "Hello!", Sentiment::Neutral, 0.5);
        assert!(chrono::DateTime::parse_from_rfc3339(&turn.timestamp).is_ok());
    }
}
