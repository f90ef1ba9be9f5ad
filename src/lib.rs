pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

pub use config::settings::{GithubSettings, Settings, TimerSettings};
pub use crate::core::{github::GithubOrgClient, http::HttpFetcher};
pub use utils::error::{OrgError, Result};
