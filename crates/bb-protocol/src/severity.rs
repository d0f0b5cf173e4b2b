use std::fmt;

use serde::{Deserialize, Serialize};

/// Four-level ordinal attached to each known disease label.
///
/// Values outside the four known names deserialize to `Unknown` so an
/// externally edited knowledge table never fails to load on a typo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Severity {
    Low,
    Moderate,
    High,
    Critical,
    Unknown,
}

impl Severity {
    /// Colored marker shown next to the severity in a diagnosis summary.
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Low => "🟢",
            Severity::Moderate => "🟡",
            Severity::High => "🟠",
            Severity::Critical => "🔴",
            Severity::Unknown => "⚪",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Moderate => "Moderate",
            Severity::High => "High",
            Severity::Critical => "Critical",
            Severity::Unknown => "Unknown",
        }
    }
}

impl From<String> for Severity {
    fn from(name: String) -> Self {
        match name.as_str() {
            "Low" => Severity::Low,
            "Moderate" => Severity::Moderate,
            "High" => Severity::High,
            "Critical" => Severity::Critical,
            _ => Severity::Unknown,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Infection banding derived from the classifier's top confidence (percent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InfectionLevel {
    #[serde(rename = "Uncertain")]
    Uncertain,
    #[serde(rename = "Mild Infection")]
    Mild,
    #[serde(rename = "Moderate Infection")]
    Moderate,
    #[serde(rename = "Severe Infection")]
    Severe,
}

impl InfectionLevel {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence < 50.0 {
            InfectionLevel::Uncertain
        } else if confidence < 70.0 {
            InfectionLevel::Mild
        } else if confidence < 85.0 {
            InfectionLevel::Moderate
        } else {
            InfectionLevel::Severe
        }
    }
}
