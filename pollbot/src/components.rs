//! Component factory: builds the shared pieces (bot, pending registry) and the handler chain.

use std::sync::Arc;

use handler_chain::HandlerChain;
use pollbot_core::{Bot, PendingPolls};
use pollbot_discord::DiscordBotAdapter;

use crate::config::BotConfig;
use crate::handlers::{LoggingHandler, PollCommandHandler, PollEchoHandler};

/// Dependencies shared by the handlers; produced by the component factory.
#[derive(Clone)]
pub struct BotComponents {
    pub bot: Arc<dyn Bot>,
    pub pending: PendingPolls,
}

impl BotComponents {
    /// Uses `bot` for every outbound call (tests pass a mock here).
    pub fn with_bot(config: &BotConfig, bot: Arc<dyn Bot>) -> Self {
        Self {
            bot,
            pending: PendingPolls::with_ttl(config.pending_ttl()),
        }
    }
}

/// Components backed by Discord's HTTP API.
pub fn build_bot_components(config: &BotConfig) -> BotComponents {
    BotComponents::with_bot(config, Arc::new(DiscordBotAdapter::new(config.bot_token())))
}

/// logging → own echo → poll command. The echo handler claims all own messages first.
pub fn build_handler_chain(config: &BotConfig, components: &BotComponents) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(PollEchoHandler::new(
            components.bot.clone(),
            components.pending.clone(),
            config.reaction_retries(),
        )))
        .add_handler(Arc::new(PollCommandHandler::new(
            components.bot.clone(),
            components.pending.clone(),
            config.command_prefix(),
        )))
}
