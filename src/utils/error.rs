use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrgError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Timer task failed: {0}")]
    TaskError(#[from] tokio::task::JoinError),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Request to {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Missing key: '{key}'")]
    MissingKey { key: String },

    #[error("Unexpected shape for '{field}': expected {expected}")]
    UnexpectedShape { field: String, expected: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl OrgError {
    pub fn missing_key(key: impl Into<String>) -> Self {
        OrgError::MissingKey { key: key.into() }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            OrgError::ApiError(_) => "Could not reach the GitHub API".to_string(),
            OrgError::HttpStatus { status: 404, .. } => {
                "The organisation was not found on GitHub".to_string()
            }
            OrgError::HttpStatus { status, .. } => format!("GitHub answered with HTTP {}", status),
            OrgError::SerializationError(_) => {
                "GitHub returned a response that is not valid JSON".to_string()
            }
            OrgError::MissingKey { .. } | OrgError::UnexpectedShape { .. } => {
                "GitHub returned a payload in an unexpected format".to_string()
            }
            OrgError::TaskError(_) => "A timer task stopped before finishing".to_string(),
            OrgError::ConfigError { .. }
            | OrgError::InvalidConfigValueError { .. }
            | OrgError::TomlError(_) => format!("Invalid configuration: {}", self),
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            OrgError::ApiError(_) => "Check your network connection and the configured api_base",
            OrgError::HttpStatus { status: 401, .. } | OrgError::HttpStatus { status: 403, .. } => {
                "Set github.token in the settings file or wait for the rate limit to reset"
            }
            OrgError::HttpStatus { status: 404, .. } => "Check the organisation name",
            OrgError::HttpStatus { .. } => "Retry later",
            OrgError::ConfigError { .. }
            | OrgError::InvalidConfigValueError { .. }
            | OrgError::TomlError(_) => "Fix the settings file or command line arguments",
            OrgError::IoError(_) => "Check that the settings file exists and is readable",
            OrgError::SerializationError(_) => {
                "The API may be rate limiting or behind a proxy; retry later or check api_base"
            }
            _ => "Re-run with --verbose for details",
        }
    }

    /// Process exit code used by the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            OrgError::ConfigError { .. }
            | OrgError::InvalidConfigValueError { .. }
            | OrgError::TomlError(_)
            | OrgError::IoError(_) => 1,
            OrgError::ApiError(_) | OrgError::HttpStatus { .. } => 2,
            _ => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, OrgError>;
