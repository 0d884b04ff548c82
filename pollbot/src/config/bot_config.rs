//! BotConfig: BaseConfig + PollConfig. Use load() for env-based loading.

use anyhow::Result;
use pollbot_discord::DiscordConfig;
use std::path::Path;
use std::time::Duration;

use super::{BaseConfig, PollConfig};

/// Bot config: BaseConfig + poll settings.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    pub poll: PollConfig,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides DISCORD_TOKEN.
    /// Call validate() after load to check config before connecting.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let poll = PollConfig::from_env()?;
        Ok(Self { base, poll })
    }

    /// Config with the given token and default poll settings.
    pub fn with_token(bot_token: impl Into<String>) -> Self {
        Self {
            base: BaseConfig {
                bot_token: bot_token.into(),
                log_file: "logs/pollbot.log".into(),
            },
            poll: PollConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.poll.validate()
    }

    /// What the gateway runner needs.
    pub fn discord_config(&self) -> DiscordConfig {
        DiscordConfig::new(self.bot_token(), self.presence())
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }
    pub fn log_file(&self) -> &Path {
        &self.base.log_file
    }
    pub fn command_prefix(&self) -> &str {
        &self.poll.command_prefix
    }
    pub fn presence(&self) -> &str {
        &self.poll.presence
    }
    pub fn pending_ttl(&self) -> Duration {
        self.poll.pending_ttl()
    }
    pub fn reaction_retries(&self) -> u32 {
        self.poll.reaction_retries
    }
}
