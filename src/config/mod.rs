use std::{str::FromStr, time::Duration};

use anyhow::{anyhow, Result};

mod raw;

/// Overrides `api.base-url` at build time.
const ENV_API_URL: Option<&str> = option_env!("ACTIVITY_BOARD_API_URL");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api: Api,
    pub status: Status,
    pub log: Log,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Api {
    pub base_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    /// Delay after which the status element is hidden again.
    pub hide_after: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Log {
    pub level: log::Level,
}

impl Config {
    pub fn try_from_toml(toml_str: &str) -> Result<Self> {
        let raw_config: raw::Config = toml::from_str(toml_str)?;
        Self::try_from(raw_config)
    }

    /// The embedded configuration including build time overrides.
    #[must_use]
    pub fn load() -> Self {
        let mut cfg = Self::default();
        if let Some(url) = ENV_API_URL {
            cfg.api.base_url = url.trim_end_matches('/').to_owned();
        }
        cfg
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::try_from_toml(raw::DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { api, status, log } = from;
        let level = log::Level::from_str(&log.level)
            .map_err(|_| anyhow!("Invalid log level '{}'", log.level))?;
        Ok(Self {
            api: Api {
                base_url: api.base_url.trim_end_matches('/').to_owned(),
            },
            status: Status {
                hide_after: status.hide_after,
            },
            log: Log { level },
        })
    }
}
