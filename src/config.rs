//! Configuration loading and logging initialization.
//!
//! The config file is optional: when it is absent, built-in defaults apply
//! (the fixed `wallets.txt` / `proxies.txt` / `result.csv` trio). A file
//! that exists but does not parse or validate aborts the run.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub api: ApiConfig,
    pub batch: BatchConfig,
    pub logging: LoggingConfig,
}

/// Input file locations.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Wallet list, one address per line. Required at run time.
    pub wallets: PathBuf,
    /// Proxy list, one URI per line. Absent means direct requests.
    pub proxies: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub csv: PathBuf,
}

/// Points API endpoint settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL; the wallet address is appended as the final path segment.
    pub base_url: String,
    /// Per-attempt timeout. There is no overall run timeout.
    pub timeout_ms: u64,
}

/// Batch sizing and stagger policy.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Batch size when no proxies are configured.
    pub direct_size: usize,
    /// Batch size when requests are spread over a proxy pool.
    pub proxied_size: usize,
    /// Delay between successive batch starts.
    pub stagger_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            wallets: "wallets.txt".into(),
            proxies: "proxies.txt".into(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv: "result.csv".into(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://app.ether.fi/api/portfolio".into(),
            timeout_ms: 5000,
        }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            direct_size: 1,
            proxied_size: 10,
            stagger_ms: 1000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

        let config: Config = toml::from_str(&content).map_err(ConfigError::Parse)?;

        config.validate()?;

        Ok(config)
    }

    /// Load `path` when it exists, otherwise use built-in defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "base_url",
                reason: "cannot be empty".to_string(),
            }
            .into());
        }
        if self.api.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.batch.direct_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "direct_size",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.batch.proxied_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "proxied_size",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}
