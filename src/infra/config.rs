// src/infra/config.rs — Configuration loading (TOML)

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::infra::paths;
use crate::provider::retry::RetryPolicy;

/// Environment variables consulted for the grading API key, in order.
pub const API_KEY_ENV_VARS: &[&str] = &["GEMINI_API_KEY", "GOOGLE_API_KEY"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub grading: GradingConfig,

    #[serde(default)]
    pub profile: ProfileConfig,

    #[serde(default)]
    pub rewards: RewardsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GradingConfig {
    pub model: String,
    pub temperature: f32,
    pub base_url: String,
    /// Only used when no API key env var is set.
    pub api_key: Option<String>,
    pub retry: RetryConfig,
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".into(),
            temperature: 0.7,
            base_url: crate::provider::google::DEFAULT_BASE_URL.into(),
            api_key: None,
            retry: RetryConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub initial_delay_ms: u64,
    pub backoff_factor: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_delay_ms: 1_000,
            backoff_factor: 2.0,
        }
    }
}

impl RetryConfig {
    pub fn to_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts.max(1),
            initial_delay: Duration::from_millis(self.initial_delay_ms),
            backoff_factor: self.backoff_factor,
            ..RetryPolicy::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub name: String,
    pub first_level_xp: u32,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: "Candidate".into(),
            first_level_xp: 500,
        }
    }
}

/// XP multipliers applied to the overall score of each practice flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardsConfig {
    pub simulated_multiplier: u32,
    pub transcript_multiplier: u32,
}

impl Default for RewardsConfig {
    fn default() -> Self {
        Self {
            simulated_multiplier: 5,
            transcript_multiplier: 3,
        }
    }
}

impl Config {
    /// Load config from file, falling back to defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = paths::config_file_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Resolve the grading API key: env vars first, then the config file.
    pub fn api_key(&self) -> Option<String> {
        API_KEY_ENV_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .chain(self.grading.api_key.clone())
            .map(|k| k.trim().to_string())
            .find(|k| !k.is_empty())
    }
}
