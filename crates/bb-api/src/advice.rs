//! Photo-analysis advice returned by `/predict`.
//!
//! Kept apart from the assistant's knowledge base: the analysis panel shows
//! one short recommendation per label, while the chat treatment reply uses
//! the richer cause / remedy table.
//!
//! ```toml
//! [entries.Leaf_Rot]
//! cause = "Phytophthora fungus"
//! advice = "Improve drainage and apply recommended fungicide."
//! ```

use std::collections::HashMap;

use serde::Deserialize;

/// Cause and recommendation for one classifier label.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AdviceEntry {
    pub cause: String,
    pub advice: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdviceTable {
    entries: HashMap<String, AdviceEntry>,
}

impl AdviceTable {
    /// One entry per label the image classifier emits.
    pub fn builtin() -> Self {
        let rows = [
            (
                "Healthy",
                "Optimal plant health",
                "Maintain proper irrigation and balanced nutrition.",
            ),
            (
                "Leaf_Spot",
                "Fungal infection",
                "Remove infected leaves and apply copper fungicide.",
            ),
            (
                "Leaf_Rot",
                "Phytophthora fungus",
                "Improve drainage and apply recommended fungicide.",
            ),
            (
                "Bacterial_Blight",
                "Bacterial infection",
                "Use bactericides and sterilize farming tools.",
            ),
        ];

        let entries = rows
            .into_iter()
            .map(|(label, cause, advice)| {
                (
                    label.to_string(),
                    AdviceEntry {
                        cause: cause.to_string(),
                        advice: advice.to_string(),
                    },
                )
            })
            .collect();

        Self { entries }
    }

    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let table: Self = toml::from_str(contents)?;
        if table.entries.is_empty() {
            anyhow::bail!("advice table has no entries");
        }
        Ok(table)
    }

    /// Load an advice table from a TOML file.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let table = Self::from_toml_str(&contents)?;
        tracing::info!(path, entries = table.len(), "advice table loaded");
        Ok(table)
    }

    pub fn get(&self, label: &str) -> Option<&AdviceEntry> {
        self.entries.get(label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AdviceTable {
    fn default() -> Self {
        Self::builtin()
    }
}
