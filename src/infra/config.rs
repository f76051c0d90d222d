use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::nlp::DEFAULT_SENTENCE_COUNT;
use crate::prompts;

/// Gemini API credential. Loaded from the environment at startup and kept
/// opaque: `Debug` output is redacted so the key never reaches logs.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    const ENV_VAR: &'static str = "BRIEFLY_GEMINI_API_KEY";
    const FALLBACK_ENV_VAR: &'static str = "GEMINI_API_KEY";

    pub fn from_env() -> Result<Self> {
        let key = std::env::var(Self::ENV_VAR)
            .or_else(|_| std::env::var(Self::FALLBACK_ENV_VAR))
            .map_err(|_| {
                anyhow::anyhow!("{}.\n{}", prompts::MSG_NO_API_KEY, prompts::MSG_API_KEY_INSTRUCTION)
            })?;
        if key.is_empty() {
            anyhow::bail!("{}.\n{}", prompts::MSG_NO_API_KEY, prompts::MSG_API_KEY_INSTRUCTION);
        }
        Ok(Self(key))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    #[cfg(test)]
    pub fn for_tests(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    pub bind: String,
    /// Gemini model used by the forwarder.
    pub model: String,
    /// Per-request timeout for upstream calls, in seconds.
    pub request_timeout_secs: u64,
    /// Retries after a failed upstream call (5xx, timeout, connect error).
    pub max_retries: u32,
    /// Sentences in a local extractive summary when the client names none.
    pub default_sentence_count: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:5000".to_string(),
            model: "gemini-2.0-flash".to_string(),
            request_timeout_secs: 30,
            max_retries: 2,
            default_sentence_count: DEFAULT_SENTENCE_COUNT,
        }
    }
}

pub struct ConfigManager {
    config: ServerConfig,
}

impl ConfigManager {
    const CONFIG_FILE: &'static str = "briefly.yml";

    /// Load `briefly.yml` from the working directory, falling back to
    /// defaults when the file is absent.
    pub fn new() -> Result<Self> {
        Self::from_dir(".")
    }

    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let config_path = dir.as_ref().join(Self::CONFIG_FILE);

        let config = if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .with_context(|| format!("failed to read {}", config_path.display()))?;
            serde_yaml::from_str(&contents)
                .with_context(|| format!("failed to parse {}", config_path.display()))?
        } else {
            ServerConfig::default()
        };

        Ok(Self { config })
    }

    /// Effective configuration, with environment variable overrides applied.
    pub fn get(&self) -> ServerConfig {
        let mut config = self.config.clone();
        if let Ok(bind) = std::env::var("BRIEFLY_BIND") {
            config.bind = bind;
        }
        if let Ok(model) = std::env::var("BRIEFLY_MODEL") {
            config.model = model;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_apply_without_a_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::from_dir(dir.path()).unwrap();
        let config = manager.get();
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.default_sentence_count, 5);
    }

    #[test]
    fn partial_yaml_keeps_remaining_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("briefly.yml"),
            "bind: 0.0.0.0:8080\nmax_retries: 4\n",
        )
        .unwrap();
        let config = ConfigManager::from_dir(dir.path()).unwrap().get();
        assert_eq!(config.bind, "0.0.0.0:8080");
        assert_eq!(config.max_retries, 4);
        assert_eq!(config.model, "gemini-2.0-flash");
    }

    #[test]
    fn api_key_debug_is_redacted() {
        let key = ApiKey("super-secret".to_string());
        assert_eq!(format!("{key:?}"), "ApiKey(***)");
        assert_eq!(key.expose(), "super-secret");
    }
}
