//! Disease knowledge base — cause, remedies and severity per label.
//!
//! The builtin table covers the five labels the assistant knows about.
//! A TOML file with the same shape can replace it at startup:
//!
//! ```toml
//! [entries.Leaf_Rot]
//! cause = "Phytophthora parasitica; thrives in waterlogged soil."
//! advice = "Drench soil with 1% Bordeaux mixture."
//! organic_remedy = "Apply Trichoderma viride."
//! severity = "High"
//! ```

use std::collections::HashMap;

use bb_protocol::Severity;
use serde::Deserialize;

use crate::error::{AssistantError, AssistantResult, read_config};

/// Knowledge for one disease label.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KnowledgeEntry {
    pub cause: String,
    /// Chemical / conventional remedy.
    pub advice: String,
    pub organic_remedy: String,
    pub severity: Severity,
}

/// Read-only table keyed by classifier label.
#[derive(Debug, Clone, Deserialize)]
pub struct KnowledgeBase {
    entries: HashMap<String, KnowledgeEntry>,
}

impl KnowledgeBase {
    /// The five builtin entries.
    ///
    /// `Bacterial_Disease` and `Bacterial_Blight` are both kept: the
    /// classifier only emits `Bacterial_Blight`, but nothing confirms the
    /// other key is unused by every label source.
    pub fn builtin() -> Self {
        let rows = [
            (
                "Healthy",
                "Optimal soil nutrition and balanced environment.",
                "Maintain current care. Use organic mulch to retain soil moisture.",
                "Apply Vermicompost every 90 days.",
                Severity::Low,
            ),
            (
                "Leaf_Spot",
                "Cercospora fungal pathogen, usually from high humidity.",
                "Remove infected leaves. Improve spacing for better airflow.",
                "Spray 5% Neem Seed Kernel Extract (NSKE).",
                Severity::Moderate,
            ),
            (
                "Leaf_Rot",
                "Phytophthora parasitica; thrives in waterlogged soil.",
                "Drench soil with 1% Bordeaux mixture. Stop irrigation immediately.",
                "Apply Trichoderma viride mixed with well-rotted manure.",
                Severity::High,
            ),
            (
                "Bacterial_Disease",
                "Xanthomonas campestris bacteria.",
                "Spray Streptocycline (0.5g/L) mixed with Copper Oxychloride.",
                "Remove and burn infected vines; avoid harvesting in rain.",
                Severity::Critical,
            ),
            (
                "Bacterial_Blight",
                "Bacterial infection spreading via water droplets.",
                "Prune affected parts. Avoid high-nitrogen fertilizers.",
                "Spray Garlic-Chilli extract as a preventive measure.",
                Severity::Critical,
            ),
        ];

        let entries = rows
            .into_iter()
            .map(|(label, cause, advice, organic, severity)| {
                (
                    label.to_string(),
                    KnowledgeEntry {
                        cause: cause.to_string(),
                        advice: advice.to_string(),
                        organic_remedy: organic.to_string(),
                        severity,
                    },
                )
            })
            .collect();

        Self { entries }
    }

    /// Parse a knowledge table from TOML text.
    pub fn from_toml_str(contents: &str) -> AssistantResult<Self> {
        let kb: Self = toml::from_str(contents)?;
        if kb.entries.is_empty() {
            return Err(AssistantError::InvalidConfig(
                "knowledge base has no entries".into(),
            ));
        }
        Ok(kb)
    }

    /// Load a knowledge table from a TOML file.
    pub fn from_file(path: &str) -> AssistantResult<Self> {
        let kb = Self::from_toml_str(&read_config(path)?)?;
        tracing::info!(path, entries = kb.len(), "knowledge base loaded");
        Ok(kb)
    }

    /// Exact, case-sensitive lookup by label.
    pub fn get(&self, label: &str) -> Option<&KnowledgeEntry> {
        self.entries.get(label)
    }

    /// Known labels, sorted.
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        labels.sort_unstable();
        labels
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_five_labels() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(
            kb.labels(),
            vec![
                "Bacterial_Blight",
                "Bacterial_Disease",
                "Healthy",
                "Leaf_Rot",
                "Leaf_Spot"
            ]
        );
    }

    #[test]
    fn leaf_rot_entry() {
        let kb = KnowledgeBase::builtin();
        let entry = kb.get("Leaf_Rot").unwrap();
        assert_eq!(entry.severity, Severity::High);
        assert_eq!(
            entry.cause,
            "Phytophthora parasitica; thrives in waterlogged soil."
        );
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let kb = KnowledgeBase::builtin();
        assert!(kb.get("leaf_rot").is_none());
        assert!(kb.get("Unknown_Disease").is_none());
    }

    #[test]
    fn parse_toml_table() {
        let toml = r#"
[entries.Yellow_Mosaic]
cause = "Whitefly-borne virus."
advice = "Control whitefly populations."
organic_remedy = "Yellow sticky traps."
severity = "Moderate"

[entries.Mystery]
cause = "Unknown."
advice = "Observe."
organic_remedy = "None yet."
severity = "Extreme"
"#;
        let kb = KnowledgeBase::from_toml_str(toml).unwrap();
        assert_eq!(kb.len(), 2);
        assert_eq!(kb.get("Yellow_Mosaic").unwrap().severity, Severity::Moderate);
        assert_eq!(kb.get("Mystery").unwrap().severity, Severity::Unknown);
    }

    #[test]
    fn empty_table_rejected() {
        let err = KnowledgeBase::from_toml_str("[entries]\n").unwrap_err();
        assert!(matches!(err, AssistantError::InvalidConfig(_)));
    }

    #[test]
    fn missing_field_is_parse_error() {
        let toml = r#"
[entries.Leaf_Spot]
cause = "Fungus."
"#;
        let err = KnowledgeBase::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, AssistantError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = KnowledgeBase::from_file("/nonexistent/knowledge.toml").unwrap_err();
        assert!(matches!(err, AssistantError::Io { .. }));
    }
}
