//! Intent classification.
//!
//! [`IntentClassifier`] is the seam between message matching and reply
//! generation: the engine only sees `Option<Intent>`, so a different matcher
//! can replace [`KeywordClassifier`] without touching the replies.

use bb_protocol::Intent;

use crate::intents::IntentTable;

/// Maps raw user text to at most one intent.
pub trait IntentClassifier: Send + Sync {
    /// `None` means no intent matched and the fallback reply applies.
    fn classify(&self, text: &str) -> Option<Intent>;

    /// Name of this classifier (for logging).
    fn name(&self) -> &str;
}

/// Case-insensitive substring matching over an [`IntentTable`].
#[derive(Debug, Clone, Default)]
pub struct KeywordClassifier {
    table: IntentTable,
}

impl KeywordClassifier {
    pub fn new(table: IntentTable) -> Self {
        Self { table }
    }
}

impl IntentClassifier for KeywordClassifier {
    fn classify(&self, text: &str) -> Option<Intent> {
        let lower = text.to_lowercase();
        let lower = lower.trim();
        if lower.is_empty() {
            return None;
        }

        self.table
            .rules()
            .find(|(_, keywords)| matches_any(lower, keywords))
            .map(|(intent, _)| intent)
    }

    fn name(&self) -> &str {
        "keyword"
    }
}

/// Check if the text contains any of the given phrases.
fn matches_any(text: &str, phrases: &[String]) -> bool {
    phrases.iter().any(|p| text.contains(p.as_str()))
}
