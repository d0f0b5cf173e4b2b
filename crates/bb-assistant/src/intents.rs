//! Intent table — trigger phrases per intent.
//!
//! Matching order is always [`Intent::PRIORITY`]; a file can change the
//! phrases of an intent but never where it sits in that order.
//!
//! ```toml
//! [intents]
//! greeting = ["hi", "hello", "vanakkam"]
//! ```

use std::collections::HashMap;

use bb_protocol::Intent;
use serde::Deserialize;

use crate::error::{AssistantError, AssistantResult, read_config};

/// Lower-cased trigger phrases for each intent, held in priority order.
#[derive(Debug, Clone)]
pub struct IntentTable {
    rules: Vec<(Intent, Vec<String>)>,
}

#[derive(Debug, Deserialize)]
struct IntentFile {
    #[serde(default)]
    intents: HashMap<String, Vec<String>>,
}

impl IntentTable {
    pub fn builtin() -> Self {
        let rules = Intent::PRIORITY
            .iter()
            .map(|intent| {
                let keywords = builtin_keywords(*intent)
                    .iter()
                    .map(|k| k.to_string())
                    .collect();
                (*intent, keywords)
            })
            .collect();
        Self { rules }
    }

    /// Builtin table with the phrases of every intent named in `contents`
    /// replaced.
    pub fn from_toml_str(contents: &str) -> AssistantResult<Self> {
        let file: IntentFile = toml::from_str(contents)?;
        let mut table = Self::builtin();

        for (name, keywords) in file.intents {
            let intent: Intent = name.parse()?;
            let keywords = normalize_keywords(intent, keywords)?;
            if let Some((_, slot)) = table.rules.iter_mut().find(|(i, _)| *i == intent) {
                *slot = keywords;
            }
        }

        Ok(table)
    }

    pub fn from_file(path: &str) -> AssistantResult<Self> {
        let table = Self::from_toml_str(&read_config(path)?)?;
        tracing::info!(path, "intent table loaded");
        Ok(table)
    }

    /// `(intent, phrases)` pairs in evaluation order.
    pub fn rules(&self) -> impl Iterator<Item = (Intent, &[String])> {
        self.rules.iter().map(|(i, k)| (*i, k.as_slice()))
    }

    pub fn keywords(&self, intent: Intent) -> &[String] {
        self.rules
            .iter()
            .find(|(i, _)| *i == intent)
            .map(|(_, k)| k.as_slice())
            .unwrap_or(&[])
    }
}

impl Default for IntentTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn normalize_keywords(intent: Intent, keywords: Vec<String>) -> AssistantResult<Vec<String>> {
    keywords
        .into_iter()
        .map(|k| {
            if k.trim().is_empty() {
                Err(AssistantError::InvalidConfig(format!(
                    "blank trigger phrase for intent '{intent}'"
                )))
            } else {
                Ok(k.to_lowercase())
            }
        })
        .collect()
}

fn builtin_keywords(intent: Intent) -> &'static [&'static str] {
    match intent {
        Intent::Greeting => &[
            "hi", "hello", "hey", "namaste", "salam", "morning", "evening", "start",
        ],
        Intent::BotInfo => &[
            "who are you",
            "what is your name",
            "identify yourself",
            "tell me about you",
        ],
        Intent::Capabilities => &["what can you do", "features", "how to use", "help", "guide"],
        Intent::FarmingGeneral => &[
            "how to grow",
            "soil type",
            "climate",
            "temperature",
            "sunlight",
        ],
        Intent::Irrigation => &["water", "watering", "irrigation", "how much water"],
        Intent::Harvest => &["harvest", "picking", "collecting", "ready to pick"],
        Intent::Treatment => &[
            "treat",
            "medicine",
            "cure",
            "fix",
            "remedy",
            "solution",
            "what to do",
        ],
        Intent::Prevention => &["prevent", "avoid", "protect", "stop disease"],
        Intent::Fertilizer => &[
            "fertilizer",
            "manure",
            "feeding",
            "nutrition",
            "npk",
            "growth boost",
        ],
        Intent::Thanks => &["thank", "helpful", "great", "appreciate", "good job"],
        Intent::Time => &["time", "date", "today"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_follows_priority_order() {
        let table = IntentTable::builtin();
        let order: Vec<Intent> = table.rules().map(|(i, _)| i).collect();
        assert_eq!(order, Intent::PRIORITY.to_vec());
    }

    #[test]
    fn builtin_keywords_are_lowercase() {
        let table = IntentTable::builtin();
        for (_, keywords) in table.rules() {
            assert!(!keywords.is_empty());
            for k in keywords {
                assert_eq!(k, &k.to_lowercase());
            }
        }
    }

    #[test]
    fn override_replaces_named_intent_only() {
        let toml = r#"
[intents]
greeting = ["Vanakkam", "hola"]
"#;
        let table = IntentTable::from_toml_str(toml).unwrap();
        assert_eq!(table.keywords(Intent::Greeting), ["vanakkam", "hola"]);
        assert!(table.keywords(Intent::Treatment).contains(&"cure".to_string()));
    }

    #[test]
    fn override_keeps_priority_order() {
        let toml = r#"
[intents]
thanks = ["shukriya"]
greeting = ["hola"]
"#;
        let table = IntentTable::from_toml_str(toml).unwrap();
        let order: Vec<Intent> = table.rules().map(|(i, _)| i).collect();
        assert_eq!(order, Intent::PRIORITY.to_vec());
    }

    #[test]
    fn empty_file_is_builtin() {
        let table = IntentTable::from_toml_str("").unwrap();
        assert_eq!(
            table.keywords(Intent::Time),
            IntentTable::builtin().keywords(Intent::Time)
        );
    }

    #[test]
    fn unknown_intent_rejected() {
        let err = IntentTable::from_toml_str("[intents]\nweather = [\"rain\"]\n").unwrap_err();
        assert!(matches!(err, AssistantError::UnknownIntent(_)));
    }

    #[test]
    fn blank_phrase_rejected() {
        let err = IntentTable::from_toml_str("[intents]\nthanks = [\"  \"]\n").unwrap_err();
        assert!(matches!(err, AssistantError::InvalidConfig(_)));
    }
}
