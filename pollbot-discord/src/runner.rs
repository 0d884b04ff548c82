//! Gateway runner: connects with serenity, sets presence on `ready`, and turns each
//! `MESSAGE_CREATE` into a core Message handled by the HandlerChain.

use std::sync::Arc;

use anyhow::{Context as _, Result};
use async_trait::async_trait;
use handler_chain::HandlerChain;
use pollbot_core::ToCoreMessage;
use serenity::all::{ActivityData, Client, Context, EventHandler, Ready};
use tokio::sync::RwLock;
use tracing::{error, info, instrument};

use super::adapters::DiscordMessageWrapper;
use super::config::DiscordConfig;

/// serenity event handler; owns the chain and the bot's user id captured on `ready`.
pub struct GatewayHandler {
    chain: HandlerChain,
    presence: String,
    bot_user_id: Arc<RwLock<Option<u64>>>,
}

impl GatewayHandler {
    pub fn new(chain: HandlerChain, presence: impl Into<String>) -> Self {
        Self {
            chain,
            presence: presence.into(),
            bot_user_id: Arc::default(),
        }
    }
}

#[async_trait]
impl EventHandler for GatewayHandler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        *self.bot_user_id.write().await = Some(ready.user.id.get());
        ctx.set_activity(Some(ActivityData::playing(&self.presence)));
        info!(
            bot = %ready.user.name,
            bot_user_id = ready.user.id.get(),
            presence = %self.presence,
            "Connected to Discord"
        );
    }

    async fn message(&self, _ctx: Context, msg: serenity::all::Message) {
        let bot_user_id = *self.bot_user_id.read().await;
        let core_msg = DiscordMessageWrapper::new(&msg, bot_user_id).to_core();

        info!(
            user_id = core_msg.user.id,
            chat_id = core_msg.chat.id,
            message_id = %core_msg.id,
            from_self = core_msg.from_self,
            "Received message"
        );

        // Own echoes can arrive while the send that produced them is still in flight.
        let chain = self.chain.clone();
        tokio::spawn(async move {
            if let Err(e) = chain.handle(&core_msg).await {
                error!(
                    error = %e,
                    chat_id = core_msg.chat.id,
                    message_id = %core_msg.id,
                    "Handler chain failed"
                );
            }
        });
    }
}

/// Connects to the gateway and dispatches messages until the client stops.
#[instrument(skip(config, handler_chain))]
pub async fn run_gateway(config: &DiscordConfig, handler_chain: HandlerChain) -> Result<()> {
    let handler = GatewayHandler::new(handler_chain, config.presence.clone());
    let mut client = Client::builder(&config.bot_token, config.intents())
        .event_handler(handler)
        .await
        .context("Failed to build Discord client")?;

    info!("Starting Discord gateway");
    client.start().await.context("Discord gateway stopped")?;
    Ok(())
}
