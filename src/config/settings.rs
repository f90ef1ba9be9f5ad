use crate::core::delays::{DEFAULT_MAX_DELAY, MAX_TIMERS};
use crate::utils::error::{OrgError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_USER_AGENT: &str = concat!("orgkit/", env!("CARGO_PKG_VERSION"));

/// Settings file contents. Every section and field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub github: GithubSettings,
    pub timers: TimerSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GithubSettings {
    pub api_base: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
    pub token: Option<String>,
}

impl Default for GithubSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_seconds: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            token: None,
        }
    }
}

impl GithubSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimerSettings {
    pub count: usize,
    pub max_delay_seconds: f64,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            count: 5,
            max_delay_seconds: DEFAULT_MAX_DELAY.as_secs_f64(),
        }
    }
}

impl TimerSettings {
    pub fn max_delay(&self) -> Duration {
        Duration::from_secs_f64(self.max_delay_seconds)
    }
}

impl Settings {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::debug!("Loaded settings from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed)?)
    }

    /// Replaces `${VAR}` placeholders with environment values.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").map_err(|e| OrgError::ConfigError {
            message: format!("placeholder pattern: {}", e),
        })?;

        let mut out = String::with_capacity(content.len());
        let mut last = 0;
        for caps in re.captures_iter(content) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let value = std::env::var(name.as_str()).map_err(|_| OrgError::ConfigError {
                message: format!("environment variable {} is not set", name.as_str()),
            })?;
            out.push_str(&content[last..whole.start()]);
            out.push_str(&value);
            last = whole.end();
        }
        out.push_str(&content[last..]);
        Ok(out)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("github.api_base", &self.github.api_base)?;
        validate_positive_number("github.timeout_seconds", self.github.timeout_seconds as usize, 1)?;
        validate_non_empty_string("github.user_agent", &self.github.user_agent)?;
        if let Some(token) = &self.github.token {
            validate_non_empty_string("github.token", token)?;
        }
        validate_range("timers.count", self.timers.count, 0, MAX_TIMERS)?;
        validate_range("timers.max_delay_seconds", self.timers.max_delay_seconds, 0.0, 3600.0)?;
        Ok(())
    }
}
