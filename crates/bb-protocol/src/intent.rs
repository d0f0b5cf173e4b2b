use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A recognized category of user request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    BotInfo,
    Capabilities,
    FarmingGeneral,
    Irrigation,
    Fertilizer,
    Harvest,
    Treatment,
    Prevention,
    Time,
    Thanks,
}

impl Intent {
    /// Evaluation order for keyword matching. First match wins.
    pub const PRIORITY: [Intent; 11] = [
        Intent::Greeting,
        Intent::BotInfo,
        Intent::Capabilities,
        Intent::FarmingGeneral,
        Intent::Irrigation,
        Intent::Fertilizer,
        Intent::Harvest,
        Intent::Treatment,
        Intent::Prevention,
        Intent::Time,
        Intent::Thanks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::BotInfo => "bot_info",
            Intent::Capabilities => "capabilities",
            Intent::FarmingGeneral => "farming_general",
            Intent::Irrigation => "irrigation",
            Intent::Fertilizer => "fertilizer",
            Intent::Harvest => "harvest",
            Intent::Treatment => "treatment",
            Intent::Prevention => "prevention",
            Intent::Time => "time",
            Intent::Thanks => "thanks",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when an intent name is not one of the known intents.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown intent: {0}")]
pub struct ParseIntentError(pub String);

impl FromStr for Intent {
    type Err = ParseIntentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Intent::PRIORITY
            .iter()
            .copied()
            .find(|intent| intent.as_str() == s)
            .ok_or_else(|| ParseIntentError(s.to_string()))
    }
}
