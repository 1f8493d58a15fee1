// Settings: optional TOML file, overridden by the command line, validated once at startup.

use crate::cli::Args;
use crate::error::ConfigError;
use crate::filter::InterfaceFilter;
use crate::netdev_repo::{DEFAULT_NET_DEV_PATH, DEFAULT_SYS_CLASS_NET_PATH, interface_exists};
use serde::Deserialize;
use std::num::NonZeroU64;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub monitoring: MonitoringConfig,
    #[serde(default)]
    pub source: SourceConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonitoringConfig {
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
    /// Interfaces to track exclusively; empty means auto-detect.
    #[serde(default)]
    pub interfaces: Vec<String>,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            interfaces: Vec::new(),
        }
    }
}

fn default_interval_secs() -> u64 {
    1
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_net_dev_path")]
    pub net_dev_path: String,
    /// Directory with one entry per host interface, used for the existence check.
    #[serde(default = "default_sys_class_net_path")]
    pub sys_class_net_path: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            net_dev_path: default_net_dev_path(),
            sys_class_net_path: default_sys_class_net_path(),
        }
    }
}

fn default_net_dev_path() -> String {
    DEFAULT_NET_DEV_PATH.into()
}

fn default_sys_class_net_path() -> String {
    DEFAULT_SYS_CLASS_NET_PATH.into()
}

impl AppConfig {
    /// Loads `path` if given, otherwise defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let s = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("config {}: {}", path.display(), e))?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.monitoring.interval_secs > 0,
            "monitoring.interval_secs must be > 0, got {}",
            self.monitoring.interval_secs
        );
        anyhow::ensure!(
            !self.source.net_dev_path.is_empty(),
            "source.net_dev_path must be non-empty"
        );
        anyhow::ensure!(
            !self.source.sys_class_net_path.is_empty(),
            "source.sys_class_net_path must be non-empty"
        );
        Ok(())
    }
}

/// Resolved settings for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub interval_secs: NonZeroU64,
    /// Explicit interfaces; empty means auto-detect.
    pub interfaces: Vec<String>,
    pub net_dev_path: PathBuf,
    pub sys_class_net_path: PathBuf,
}

impl RunConfig {
    /// Merges CLI over file settings and checks that every named interface exists.
    pub fn resolve(args: &Args, file: &AppConfig) -> Result<Self, ConfigError> {
        let interval_secs = match &args.interval {
            Some(raw) => parse_interval(raw)?,
            None => NonZeroU64::new(file.monitoring.interval_secs).ok_or_else(|| {
                ConfigError::InvalidInterval(file.monitoring.interval_secs.to_string())
            })?,
        };
        let interfaces = if args.interfaces.is_empty() {
            file.monitoring.interfaces.clone()
        } else {
            args.interfaces.clone()
        };
        let sys_class_net_path = PathBuf::from(&file.source.sys_class_net_path);
        if let Some(missing) = interfaces
            .iter()
            .find(|name| !interface_exists(&sys_class_net_path, name))
        {
            return Err(ConfigError::MissingInterface(missing.clone()));
        }

        Ok(Self {
            interval_secs,
            interfaces,
            net_dev_path: PathBuf::from(&file.source.net_dev_path),
            sys_class_net_path,
        })
    }

    pub fn filter(&self) -> Result<InterfaceFilter, ConfigError> {
        InterfaceFilter::from_names(self.interfaces.clone())
    }
}

/// Whole seconds, at least 1. Anything else is rejected with the raw text.
pub fn parse_interval(raw: &str) -> Result<NonZeroU64, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .and_then(NonZeroU64::new)
        .ok_or_else(|| ConfigError::InvalidInterval(raw.to_string()))
}
