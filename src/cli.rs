//! Command-line interface definitions.
//!
//! Defines the CLI structure for the pointscan application using `clap`.
//! There is one command; flags override the corresponding config values.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;

/// Batched reward-points checker for wallet lists
#[derive(Parser, Debug)]
#[command(name = "pointscan")]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (built-in defaults apply when absent)
    #[arg(long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Wallet list, one address per line
    #[arg(long)]
    pub wallets: Option<PathBuf>,

    /// Proxy list, one URI per line
    #[arg(long)]
    pub proxies: Option<PathBuf>,

    /// CSV output path
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Points API base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Log level override [trace, debug, info, warn, error]
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}

impl Cli {
    /// Load configuration and apply CLI overrides on top.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_or_default(&self.config)?;

        if let Some(ref wallets) = self.wallets {
            config.input.wallets = wallets.clone();
        }
        if let Some(ref proxies) = self.proxies {
            config.input.proxies = proxies.clone();
        }
        if let Some(ref output) = self.output {
            config.output.csv = output.clone();
        }
        if let Some(ref base_url) = self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(ref level) = self.log_level {
            config.logging.level = level.clone();
        }
        if self.json_logs {
            config.logging.format = "json".to_string();
        }

        config.validate()?;
        Ok(config)
    }
}
