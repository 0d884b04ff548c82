use anyhow::{Context, Result};
use handler_chain::HandlerChain;
use pollbot_core::{init_tracing, Bot, HandlerResponse, Message};
use pollbot_discord::run_gateway;
use std::sync::Arc;
use tracing::{info, instrument};

use super::components::{build_bot_components, build_handler_chain, BotComponents};
use super::config::BotConfig;

/// Config, components, and handler chain, without a gateway connection.
pub struct PollBot {
    pub config: BotConfig,
    pub components: BotComponents,
    pub handler_chain: HandlerChain,
}

impl PollBot {
    /// Builds the bot around an injected [`Bot`] (a mock in tests).
    pub fn with_bot(config: BotConfig, bot: Arc<dyn Bot>) -> Self {
        let components = BotComponents::with_bot(&config, bot);
        let handler_chain = build_handler_chain(&config, &components);
        Self {
            config,
            components,
            handler_chain,
        }
    }

    /// Drives the handler chain with one core Message, as the gateway runner does.
    pub async fn handle_message(&self, message: &Message) -> pollbot_core::Result<HandlerResponse> {
        self.handler_chain.handle(message).await
    }
}

/// Main entry: validate config, init logging, build components and chain, then run the gateway.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(Some(config.log_file()))
        .with_context(|| format!("Failed to open log file {}", config.log_file().display()))?;

    info!(
        command_prefix = %config.command_prefix(),
        pending_ttl_secs = config.pending_ttl().as_secs(),
        reaction_retries = config.reaction_retries(),
        "Initializing bot"
    );

    let components = build_bot_components(&config);
    let handler_chain = build_handler_chain(&config, &components);

    run_gateway(&config.discord_config(), handler_chain).await
}
