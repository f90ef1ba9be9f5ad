use crate::config::settings::Settings;
use crate::core::delays::MAX_TIMERS;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "orgkit")]
#[command(about = "GitHub organisation lookups and async timer demos")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    /// Path to a TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List the public repositories of an organisation
    Org {
        name: String,

        /// Only list repositories with this license key (e.g. apache-2.0)
        #[arg(long)]
        license: Option<String>,

        /// Override github.api_base from the settings file
        #[arg(long)]
        api_base: Option<String>,
    },

    /// Run concurrent random-delay timers
    Wait {
        /// Number of timers (defaults to timers.count)
        #[arg(short)]
        n: Option<usize>,

        /// Upper bound per timer in seconds (defaults to timers.max_delay_seconds)
        #[arg(long)]
        max_delay: Option<f64>,

        /// Spawn every timer as its own task
        #[arg(long)]
        tasks: bool,
    },

    /// Collect generated values and time four concurrent collections
    Stream,

    /// Show the typed helpers on sample values
    Typed,
}

impl CliConfig {
    /// Settings file merged with command line overrides.
    pub fn load_settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::from_file(path)?,
            None => Settings::default(),
        };

        match &self.command {
            Command::Org {
                api_base: Some(api_base),
                ..
            } => settings.github.api_base = api_base.clone(),
            Command::Wait { n, max_delay, .. } => {
                if let Some(n) = n {
                    settings.timers.count = *n;
                }
                if let Some(max_delay) = max_delay {
                    settings.timers.max_delay_seconds = *max_delay;
                }
            }
            _ => {}
        }

        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match &self.command {
            Command::Org { name, api_base, .. } => {
                validate_non_empty_string("org", name)?;
                if let Some(api_base) = api_base {
                    validate_url("api_base", api_base)?;
                }
            }
            Command::Wait { n, max_delay, .. } => {
                if let Some(n) = n {
                    validate_range("n", *n, 0, MAX_TIMERS)?;
                }
                if let Some(max_delay) = max_delay {
                    validate_range("max_delay", *max_delay, 0.0, 3600.0)?;
                }
            }
            Command::Stream | Command::Typed => {}
        }
        Ok(())
    }
}
