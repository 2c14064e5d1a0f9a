use std::time::Duration;

use crate::error::{config::ConfigError, AppError};

/// Default interval between two scheduled rank sync sweeps.
const DEFAULT_RANK_SYNC_INTERVAL_SECS: u64 = 1800;

/// Default command prefix when `COMMAND_PREFIX` is not set.
const DEFAULT_COMMAND_PREFIX: &str = "!";

const BATTLENET_TOKEN_URL: &str = "https://oauth.battle.net/token";

pub struct Config {
    pub database_url: String,

    pub discord_bot_token: String,
    pub command_prefix: String,

    pub battlenet_client_id: String,
    pub battlenet_client_secret: String,
    pub battlenet_token_url: String,

    pub rank_sync_interval: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            command_prefix: std::env::var("COMMAND_PREFIX")
                .unwrap_or_else(|_| DEFAULT_COMMAND_PREFIX.to_string()),
            battlenet_client_id: required("BATTLENET_CLIENT_ID")?,
            battlenet_client_secret: required("BATTLENET_CLIENT_SECRET")?,
            battlenet_token_url: BATTLENET_TOKEN_URL.to_string(),
            rank_sync_interval: Duration::from_secs(parse_interval(
                std::env::var("RANK_SYNC_INTERVAL_SECS").ok(),
            )?),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Parses the sweep interval, falling back to the default when unset.
fn parse_interval(value: Option<String>) -> Result<u64, ConfigError> {
    let Some(value) = value else {
        return Ok(DEFAULT_RANK_SYNC_INTERVAL_SECS);
    };

    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::InvalidEnvVar {
            name: "RANK_SYNC_INTERVAL_SECS".to_string(),
            value,
        }),
    }
}
