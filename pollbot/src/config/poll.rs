//! Poll command settings: prefix, presence label, pending-poll TTL, reaction retries.

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_COMMAND_PREFIX: &str = "/poll";

#[derive(Debug, Clone)]
pub struct PollConfig {
    /// POLL_COMMAND_PREFIX: messages starting with this are poll commands.
    pub command_prefix: String,
    /// POLL_PRESENCE: "Playing ..." label; defaults to the command prefix.
    pub presence: String,
    /// POLL_PENDING_TTL_SECS: drop polls whose echo never came after this long; 0 keeps them forever.
    pub pending_ttl_secs: u64,
    /// POLL_REACTION_RETRIES: extra attempts per reaction after a failed add.
    pub reaction_retries: u32,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            command_prefix: DEFAULT_COMMAND_PREFIX.to_string(),
            presence: DEFAULT_COMMAND_PREFIX.to_string(),
            pending_ttl_secs: 0,
            reaction_retries: 2,
        }
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} is not a valid number: {:?}", name, raw)),
        Err(_) => Ok(default),
    }
}

impl PollConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let command_prefix =
            env::var("POLL_COMMAND_PREFIX").unwrap_or(defaults.command_prefix);
        let presence = env::var("POLL_PRESENCE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| command_prefix.clone());

        Ok(Self {
            pending_ttl_secs: parse_var("POLL_PENDING_TTL_SECS", defaults.pending_ttl_secs)?,
            reaction_retries: parse_var("POLL_REACTION_RETRIES", defaults.reaction_retries)?,
            command_prefix,
            presence,
        })
    }

    pub fn pending_ttl(&self) -> Duration {
        Duration::from_secs(self.pending_ttl_secs)
    }

    /// A blank prefix would turn every message into a poll command.
    pub fn validate(&self) -> Result<()> {
        if self.command_prefix.trim().is_empty() {
            anyhow::bail!("POLL_COMMAND_PREFIX must not be empty");
        }
        Ok(())
    }
}
