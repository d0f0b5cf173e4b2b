//! BetelBot assistant core.
//!
//! Maps a free-text farmer message to one reply string, optionally using
//! the latest image diagnosis held in a per-session [`DiagnosisContext`].
//!
//! - [`IntentTable`] + [`KeywordClassifier`]: ordered substring matching.
//! - [`KnowledgeBase`]: cause / remedy / severity per disease label.
//! - [`Assistant`]: dispatches a classified message to its reply generator.
//! - [`Conversation`]: one session's context bound to a shared engine.

pub mod classifier;
pub mod context;
pub mod conversation;
pub mod engine;
pub mod error;
pub mod intents;
pub mod knowledge;
pub mod replies;

pub use classifier::{IntentClassifier, KeywordClassifier};
pub use context::{Diagnosis, DiagnosisContext, round2};
pub use conversation::Conversation;
pub use engine::{Assistant, Reply};
pub use error::{AssistantError, AssistantResult};
pub use intents::IntentTable;
pub use knowledge::{KnowledgeBase, KnowledgeEntry};
