use std::time::Duration;

use duration_str::deserialize_duration;
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = include_str!("activity-board.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub api: Api,
    pub status: Status,
    pub log: Log,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Api {
    pub base_url: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Status {
    #[serde(deserialize_with = "deserialize_duration")]
    pub hide_after: Duration,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Log {
    pub level: String,
}
