// ABOUTME: Configuration types and parsing for cf-swap.yml.
// ABOUTME: Handles YAML parsing, file discovery, defaults, and destination merging.

mod init;

pub use init::init_config;

use crate::error::{Error, Result};
use crate::platform::CfCli;
use crate::swap::DEFAULT_RETIRED_SUFFIX;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "cf-swap.yml";
pub const CONFIG_FILENAME_ALT: &str = "cf-swap.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".cf-swap/config.yml";

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_cf_binary")]
    pub cf_binary: PathBuf,

    /// Directory the cf CLI keeps its login state in (`CF_HOME`).
    #[serde(default)]
    pub cf_home: Option<PathBuf>,

    #[serde(default, with = "humantime_serde")]
    pub command_timeout: Option<Duration>,

    #[serde(default = "default_retired_suffix")]
    pub retired_suffix: String,

    #[serde(default = "default_carry_health_check")]
    pub carry_health_check: bool,

    #[serde(default)]
    pub destinations: HashMap<String, Destination>,
}

/// Per-foundation overrides selected with `--destination`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Destination {
    #[serde(default)]
    pub cf_binary: Option<PathBuf>,

    #[serde(default)]
    pub cf_home: Option<PathBuf>,

    #[serde(default, with = "humantime_serde")]
    pub command_timeout: Option<Duration>,
}

fn default_cf_binary() -> PathBuf {
    PathBuf::from("cf")
}

fn default_retired_suffix() -> String {
    DEFAULT_RETIRED_SUFFIX.to_string()
}

fn default_carry_health_check() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            cf_binary: default_cf_binary(),
            cf_home: None,
            command_timeout: None,
            retired_suffix: default_retired_suffix(),
            carry_health_check: default_carry_health_check(),
            destinations: HashMap::new(),
        }
    }
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                tracing::debug!(path = %path.display(), "loading configuration");
                return Self::load(path);
            }
        }

        Err(Error::ConfigNotFound(dir.to_path_buf()))
    }

    /// Like [`Config::discover`], but an absent file yields the defaults.
    pub fn discover_or_default(dir: &Path) -> Result<Self> {
        match Self::discover(dir) {
            Err(Error::ConfigNotFound(_)) => Ok(Config::default()),
            other => other,
        }
    }

    pub fn for_destination(&self, name: &str) -> Result<Config> {
        let dest = self
            .destinations
            .get(name)
            .ok_or_else(|| Error::UnknownDestination(name.to_string()))?;

        let mut merged = self.clone();

        if let Some(ref binary) = dest.cf_binary {
            merged.cf_binary = binary.clone();
        }

        if dest.cf_home.is_some() {
            merged.cf_home = dest.cf_home.clone();
        }

        if dest.command_timeout.is_some() {
            merged.command_timeout = dest.command_timeout;
        }

        Ok(merged)
    }

    /// Name the live app takes once it has been replaced.
    pub fn retired_name(&self, app: &str) -> String {
        format!("{app}{}", self.retired_suffix)
    }

    /// Build the cf runner this configuration describes.
    pub fn cf_cli(&self) -> CfCli {
        let cli = CfCli::new(&self.cf_binary).command_timeout(self.command_timeout);
        match self.cf_home {
            Some(ref home) => cli.cf_home(home),
            None => cli,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.retired_suffix.is_empty() {
            return Err(Error::InvalidConfig(
                "retired_suffix cannot be empty".to_string(),
            ));
        }
        if self.command_timeout == Some(Duration::ZERO) {
            return Err(Error::InvalidConfig(
                "command_timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
