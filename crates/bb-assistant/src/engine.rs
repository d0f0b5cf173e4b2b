//! Reply engine — classify a message, then dispatch to its generator.

use std::sync::{Mutex, PoisonError};

use bb_protocol::Intent;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::classifier::{IntentClassifier, KeywordClassifier};
use crate::context::DiagnosisContext;
use crate::knowledge::KnowledgeBase;
use crate::replies;

/// One generated reply.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    /// Matched intent, `None` for the fallback.
    pub intent: Option<Intent>,
    pub text: String,
}

/// Shared, read-only reply engine.
///
/// Holds no diagnosis of its own: callers pass the session's
/// [`DiagnosisContext`] into [`Assistant::respond`], so one engine can
/// serve any number of concurrent sessions.
pub struct Assistant {
    knowledge: KnowledgeBase,
    classifier: Box<dyn IntentClassifier>,
    rng: Mutex<StdRng>,
}

impl Assistant {
    pub fn new(knowledge: KnowledgeBase, classifier: Box<dyn IntentClassifier>) -> Self {
        Self {
            knowledge,
            classifier,
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Builtin knowledge base and keyword table.
    pub fn builtin() -> Self {
        Self::new(
            KnowledgeBase::builtin(),
            Box::new(KeywordClassifier::default()),
        )
    }

    /// Reseed greeting selection so replies are reproducible.
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            ..self
        }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn classify(&self, message: &str) -> Option<Intent> {
        self.classifier.classify(message)
    }

    /// Generate the reply for `message`. Never fails; unmatched or empty
    /// input gets the fallback text.
    pub fn respond(&self, ctx: &DiagnosisContext, message: &str) -> Reply {
        let intent = self.classify(message);
        tracing::debug!(
            classifier = self.classifier.name(),
            intent = intent.map(|i| i.as_str()).unwrap_or("fallback"),
            "message classified"
        );

        let text = match intent {
            Some(Intent::Greeting) => {
                let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
                replies::greeting(&mut *rng).to_string()
            }
            Some(Intent::BotInfo) => replies::BOT_INFO.to_string(),
            Some(Intent::Capabilities) => replies::CAPABILITIES.to_string(),
            Some(Intent::FarmingGeneral) => replies::FARMING_GENERAL.to_string(),
            Some(Intent::Irrigation) => replies::IRRIGATION.to_string(),
            Some(Intent::Fertilizer) => replies::FERTILIZER.to_string(),
            Some(Intent::Harvest) => replies::HARVEST.to_string(),
            Some(Intent::Treatment) => replies::treatment(ctx, &self.knowledge),
            Some(Intent::Prevention) => replies::PREVENTION.to_string(),
            Some(Intent::Time) => replies::time(&chrono::Local::now()),
            Some(Intent::Thanks) => replies::THANKS.to_string(),
            None => replies::FALLBACK.to_string(),
        };

        Reply { intent, text }
    }
}

impl Default for Assistant {
    fn default() -> Self {
        Self::builtin()
    }
}
