//! One user's conversation: a diagnosis context bound to a shared engine.

use std::sync::Arc;

use crate::context::{Diagnosis, DiagnosisContext};
use crate::engine::{Assistant, Reply};

#[derive(Clone)]
pub struct Conversation {
    engine: Arc<Assistant>,
    context: DiagnosisContext,
}

impl Conversation {
    pub fn new(engine: Arc<Assistant>) -> Self {
        Self {
            engine,
            context: DiagnosisContext::new(),
        }
    }

    /// Record the classifier's top result (confidence in percent).
    pub fn update_prediction(&mut self, label: &str, confidence_percent: f64) {
        self.context.update(label, confidence_percent);
    }

    pub fn get_response(&self, message: &str) -> String {
        self.reply(message).text
    }

    /// Like [`Conversation::get_response`], keeping the matched intent.
    pub fn reply(&self, message: &str) -> Reply {
        self.engine.respond(&self.context, message)
    }

    pub fn diagnosis(&self) -> Option<&Diagnosis> {
        self.context.current()
    }

    pub fn context(&self) -> &DiagnosisContext {
        &self.context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replies::{FALLBACK, NEEDS_DIAGNOSIS};

    fn conversation() -> Conversation {
        Conversation::new(Arc::new(Assistant::builtin()))
    }

    #[test]
    fn treatment_before_any_photo() {
        let convo = conversation();
        for msg in ["cure", "how do I treat it", "any medicine?", "what to do"] {
            assert_eq!(convo.get_response(msg), NEEDS_DIAGNOSIS, "message {msg:?}");
        }
    }

    #[test]
    fn treatment_after_leaf_rot() {
        let mut convo = conversation();
        convo.update_prediction("Leaf_Rot", 92.345);

        let reply = convo.get_response("cure");
        assert!(reply.contains("Leaf Rot"));
        assert!(reply.contains("92.35"));
        assert!(reply.contains("🟠"));
        assert!(reply.contains("Phytophthora parasitica; thrives in waterlogged soil."));
        assert!(reply.contains("Drench soil with 1% Bordeaux mixture. Stop irrigation immediately."));
        assert!(reply.contains("Apply Trichoderma viride mixed with well-rotted manure."));
    }

    #[test]
    fn treatment_after_unknown_label() {
        let mut convo = conversation();
        convo.update_prediction("Unknown_Disease", 60.0);
        let reply = convo.get_response("remedy");
        assert!(reply.contains("Unknown Disease"));
        assert!(reply.contains("still learning"));
    }

    #[test]
    fn round_trip_read() {
        let mut convo = conversation();
        convo.update_prediction("Bacterial_Blight", 77.777);
        let d = convo.diagnosis().unwrap();
        assert_eq!(d.label, "Bacterial_Blight");
        assert_eq!(d.confidence, 77.78);
        assert_eq!(convo.context().read(), (Some("Bacterial_Blight"), Some(77.78)));
    }

    #[test]
    fn greeting_takes_priority_over_treatment() {
        let mut convo = conversation();
        convo.update_prediction("Leaf_Spot", 90.0);
        let reply = convo.reply("hi, how to cure leaf spot");
        assert_eq!(reply.intent, Some(bb_protocol::Intent::Greeting));
    }

    #[test]
    fn blank_input_is_fallback() {
        let convo = conversation();
        assert_eq!(convo.get_response(""), FALLBACK);
        assert_eq!(convo.get_response("   "), FALLBACK);
    }

    #[test]
    fn clones_share_engine_not_context() {
        let mut a = conversation();
        let b = a.clone();
        a.update_prediction("Healthy", 99.0);
        assert!(a.diagnosis().is_some());
        assert!(b.diagnosis().is_none());
    }
}
