//! Minimal gateway config: token and presence label.

use serenity::all::GatewayIntents;

/// What the gateway runner needs to connect.
#[derive(Debug, Clone)]
pub struct DiscordConfig {
    pub bot_token: String,
    /// Shown as "Playing <presence>" once connected.
    pub presence: String,
}

impl DiscordConfig {
    pub fn new(bot_token: impl Into<String>, presence: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            presence: presence.into(),
        }
    }

    /// Guild and DM messages with their content (privileged intent, enable it in the developer portal).
    pub fn intents(&self) -> GatewayIntents {
        GatewayIntents::GUILD_MESSAGES
            | GatewayIntents::DIRECT_MESSAGES
            | GatewayIntents::MESSAGE_CONTENT
    }
}
