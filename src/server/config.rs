use std::num::NonZeroU64;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Settings read once at startup.
///
/// The bot token and application id are optional: without them the webhook still
/// verifies and answers interactions, but Discord REST calls and command
/// registration are skipped with a warning.
#[derive(Clone)]
pub struct Config {
    pub database_url: String,

    pub discord_public_key: String,
    pub discord_bot_token: Option<String>,
    pub discord_application_id: Option<NonZeroU64>,

    pub bind_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let require =
            |name: &str| get(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        let database_url = require("DATABASE_URL")?;
        let discord_public_key = require("DISCORD_PUBLIC_KEY")?;

        let discord_bot_token = get("DISCORD_BOT_TOKEN");
        if discord_bot_token.is_none() {
            tracing::warn!("DISCORD_BOT_TOKEN is not set, Discord REST calls will be skipped");
        }

        let discord_application_id = match get("DISCORD_APPLICATION_ID") {
            Some(value) => match value.trim().parse::<NonZeroU64>() {
                Ok(id) => Some(id),
                Err(e) => {
                    tracing::warn!(
                        "DISCORD_APPLICATION_ID '{}' is not a valid snowflake ({}), command registration will be skipped",
                        value,
                        e
                    );
                    None
                }
            },
            None => {
                tracing::warn!(
                    "DISCORD_APPLICATION_ID is not set, command registration will be skipped"
                );
                None
            }
        };

        Ok(Self {
            database_url,
            discord_public_key,
            discord_bot_token,
            discord_application_id,
            bind_address: get("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
        })
    }
}
