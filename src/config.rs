//! Runtime settings
//!
//! Defaults match a local hard AI answering after a short pause. Every value
//! can be overridden from the environment (a `.env` file is honored by the
//! binary).

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::board::Stone;
use crate::error::ConfigError;

pub const ENV_AI_MODE: &str = "GOMOKU_AI_MODE";
pub const ENV_HUMAN_COLOR: &str = "GOMOKU_HUMAN_COLOR";
pub const ENV_LOCAL_DELAY_MS: &str = "GOMOKU_LOCAL_DELAY_MS";
pub const ENV_ADVISOR_TIMEOUT_MS: &str = "GOMOKU_ADVISOR_TIMEOUT_MS";
pub const ENV_SEED: &str = "GOMOKU_SEED";

/// Who plays the computer side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AiMode {
    LocalEasy,
    #[default]
    LocalHard,
    /// External model advisor with local fallback
    Model,
}

impl AiMode {
    pub const ALL: [AiMode; 3] = [AiMode::LocalEasy, AiMode::LocalHard, AiMode::Model];

    #[inline]
    pub fn is_local(self) -> bool {
        !matches!(self, AiMode::Model)
    }

    /// Tag passed to the advisor
    pub fn tag(self) -> &'static str {
        match self {
            AiMode::LocalEasy => "local-easy",
            AiMode::LocalHard => "local-hard",
            AiMode::Model => "model",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AiMode::LocalEasy => "Local AI (Easy)",
            AiMode::LocalHard => "Local AI (Hard)",
            AiMode::Model => "Model AI",
        }
    }
}

impl fmt::Display for AiMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for AiMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AiMode::ALL
            .into_iter()
            .find(|mode| mode.tag().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::InvalidValue {
                key: ENV_AI_MODE,
                value: s.to_string(),
            })
    }
}

/// Game and AI settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub ai_mode: AiMode,
    pub human_color: Stone,
    /// Pause before the local AI answers
    pub local_delay: Duration,
    /// How long to wait for the model advisor before falling back
    pub advisor_timeout: Duration,
    pub zoom: f32,
    /// Fixed seed for reproducible tie-breaks
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ai_mode: AiMode::default(),
            human_color: Stone::Black,
            local_delay: Duration::from_millis(600),
            advisor_timeout: Duration::from_secs(15),
            zoom: 1.0,
            seed: None,
        }
    }
}

impl Settings {
    /// Read overrides from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through `lookup`; missing keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(value) = lookup(ENV_AI_MODE) {
            settings.ai_mode = value.parse()?;
        }
        if let Some(value) = lookup(ENV_HUMAN_COLOR) {
            settings.human_color = parse_color(&value)?;
        }
        if let Some(value) = lookup(ENV_LOCAL_DELAY_MS) {
            settings.local_delay = Duration::from_millis(parse_number(ENV_LOCAL_DELAY_MS, &value)?);
        }
        if let Some(value) = lookup(ENV_ADVISOR_TIMEOUT_MS) {
            settings.advisor_timeout =
                Duration::from_millis(parse_number(ENV_ADVISOR_TIMEOUT_MS, &value)?);
        }
        if let Some(value) = lookup(ENV_SEED) {
            settings.seed = Some(parse_number(ENV_SEED, &value)?);
        }

        Ok(settings)
    }
}

fn parse_color(value: &str) -> Result<Stone, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "black" => Ok(Stone::Black),
        "white" => Ok(Stone::White),
        _ => Err(ConfigError::InvalidValue {
            key: ENV_HUMAN_COLOR,
            value: value.to_string(),
        }),
    }
}

fn parse_number(key: &'static str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}
