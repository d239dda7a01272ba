use std::str::FromStr;

use dioxus_logger::tracing::Level;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_COMMAND_PREFIX: &str = "!";
const DEFAULT_LOG_LEVEL: Level = Level::INFO;

pub struct Config {
    pub discord_bot_token: String,

    pub command_prefix: String,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr)` - Missing token, empty prefix or unknown log level
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let discord_bot_token = lookup("DISCORD_BOT_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?;

        let command_prefix = match lookup("COMMAND_PREFIX") {
            Some(prefix) if prefix.trim().is_empty() => {
                return Err(ConfigError::InvalidEnvVar {
                    name: "COMMAND_PREFIX".to_string(),
                    value: prefix,
                }
                .into())
            }
            Some(prefix) => prefix.trim().to_string(),
            None => DEFAULT_COMMAND_PREFIX.to_string(),
        };

        let log_level = match lookup("LOG_LEVEL") {
            Some(level) => Level::from_str(level.trim()).map_err(|_| ConfigError::InvalidEnvVar {
                name: "LOG_LEVEL".to_string(),
                value: level.clone(),
            })?,
            None => DEFAULT_LOG_LEVEL,
        };

        Ok(Self {
            discord_bot_token,
            command_prefix,
            log_level,
        })
    }
}
