//! Base config: Discord credential and logging. Loaded from env.

use anyhow::Result;
use std::env;
use std::path::PathBuf;

/// Base config: Discord-related and logging only.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// DISCORD_TOKEN (BOT_TOKEN accepted as fallback)
    pub bot_token: String,
    /// LOG_FILE
    pub log_file: PathBuf,
}

impl BaseConfig {
    /// Load from environment variables. `token` overrides DISCORD_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("DISCORD_TOKEN")
                .or_else(|_| env::var("BOT_TOKEN"))
                .map_err(|_| anyhow::anyhow!("DISCORD_TOKEN not set"))?,
        };
        let log_file = env::var("LOG_FILE")
            .unwrap_or_else(|_| "logs/pollbot.log".to_string())
            .into();

        Ok(Self {
            bot_token,
            log_file,
        })
    }

    /// The token must not be blank.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("DISCORD_TOKEN is set but empty");
        }
        Ok(())
    }
}
