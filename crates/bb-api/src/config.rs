//! HTTP service configuration, loadable from TOML and environment.

use serde::Deserialize;

/// Top-level service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Listen address (e.g., "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// TOML knowledge table replacing the builtin one.
    #[serde(default)]
    pub knowledge_path: Option<String>,
    /// TOML intent phrase overrides.
    #[serde(default)]
    pub intents_path: Option<String>,
    /// TOML advice table for /predict replacing the builtin one.
    #[serde(default)]
    pub advice_path: Option<String>,
    /// Fixed seed for greeting selection.
    #[serde(default)]
    pub greeting_seed: Option<u64>,
    /// Top confidence (percent) below which /predict advises a clearer photo.
    #[serde(default = "default_low_confidence_threshold")]
    pub low_confidence_threshold: f64,
    /// Created sessions kept in memory; the oldest is evicted beyond this.
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_low_confidence_threshold() -> f64 {
    50.0
}

fn default_max_sessions() -> usize {
    crate::state::DEFAULT_MAX_SESSIONS
}

impl ApiConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// File (if any) first, then `BETELBOT_*` environment overrides.
    pub fn load(path: Option<&str>) -> anyhow::Result<Self> {
        let base = match path {
            Some(path) => {
                tracing::info!(path, "loading config file");
                Self::from_file(path)?
            }
            None => Self::default(),
        };
        base.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a variable lookup (the environment in `load`).
    pub fn with_overrides<F>(mut self, var: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = var("BETELBOT_HOST") {
            self.host = host;
        }
        if let Some(port) = var("BETELBOT_PORT") {
            self.port = port
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid BETELBOT_PORT '{port}': {e}"))?;
        }
        if let Some(path) = var("BETELBOT_KNOWLEDGE_PATH") {
            self.knowledge_path = Some(path);
        }
        if let Some(path) = var("BETELBOT_INTENTS_PATH") {
            self.intents_path = Some(path);
        }
        if let Some(path) = var("BETELBOT_ADVICE_PATH") {
            self.advice_path = Some(path);
        }
        if let Some(max) = var("BETELBOT_MAX_SESSIONS") {
            self.max_sessions = max
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid BETELBOT_MAX_SESSIONS '{max}': {e}"))?;
        }
        if let Some(seed) = var("BETELBOT_GREETING_SEED") {
            self.greeting_seed = Some(
                seed.parse()
                    .map_err(|e| anyhow::anyhow!("invalid BETELBOT_GREETING_SEED '{seed}': {e}"))?,
            );
        }
        Ok(self)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            knowledge_path: None,
            intents_path: None,
            advice_path: None,
            greeting_seed: None,
            low_confidence_threshold: default_low_confidence_threshold(),
            max_sessions: default_max_sessions(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert!(config.knowledge_path.is_none());
        assert!(config.greeting_seed.is_none());
        assert_eq!(config.low_confidence_threshold, 50.0);
        assert_eq!(config.max_sessions, 10_000);
    }

    #[test]
    fn deserialize_minimal_config() {
        let config: ApiConfig = toml::from_str("").unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.low_confidence_threshold, 50.0);
    }

    #[test]
    fn deserialize_full_config() {
        let toml = r#"
host = "127.0.0.1"
port = 8080
knowledge_path = "/etc/betelbot/knowledge.toml"
intents_path = "/etc/betelbot/intents.toml"
advice_path = "/etc/betelbot/advice.toml"
greeting_seed = 42
low_confidence_threshold = 65.0
max_sessions = 500
"#;
        let config: ApiConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.knowledge_path.as_deref(),
            Some("/etc/betelbot/knowledge.toml")
        );
        assert_eq!(config.greeting_seed, Some(42));
        assert_eq!(config.low_confidence_threshold, 65.0);
        assert_eq!(config.advice_path.as_deref(), Some("/etc/betelbot/advice.toml"));
        assert_eq!(config.max_sessions, 500);
    }

    #[test]
    fn env_overrides_win() {
        let config = ApiConfig::default()
            .with_overrides(lookup(&[
                ("BETELBOT_PORT", "9000"),
                ("BETELBOT_GREETING_SEED", "7"),
                ("BETELBOT_INTENTS_PATH", "/tmp/intents.toml"),
                ("BETELBOT_MAX_SESSIONS", "64"),
            ]))
            .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.greeting_seed, Some(7));
        assert_eq!(config.intents_path.as_deref(), Some("/tmp/intents.toml"));
        assert_eq!(config.max_sessions, 64);
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn invalid_port_override() {
        let err = ApiConfig::default()
            .with_overrides(lookup(&[("BETELBOT_PORT", "http")]))
            .unwrap_err();
        assert!(err.to_string().contains("BETELBOT_PORT"));
    }

    #[test]
    fn missing_file() {
        assert!(ApiConfig::from_file("/nonexistent/betelbot.toml").is_err());
    }
}
