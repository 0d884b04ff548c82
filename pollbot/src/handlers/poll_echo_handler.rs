//! Own-echo handler: when the bot sees one of its own messages, resolves the pending poll by
//! nonce and adds the poll's reactions to that message, one at a time, in order.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use pollbot_core::{Bot, Chat, Handler, HandlerResponse, Message, PendingPolls, Result};
use tracing::{info, instrument, warn};

const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(500);

pub struct PollEchoHandler {
    bot: Arc<dyn Bot>,
    pending: PendingPolls,
    reaction_retries: u32,
    retry_delay: Duration,
}

impl PollEchoHandler {
    pub fn new(bot: Arc<dyn Bot>, pending: PendingPolls, reaction_retries: u32) -> Self {
        Self {
            bot,
            pending,
            reaction_retries,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }

    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    /// Adds one reaction, retrying up to `reaction_retries` more times before giving up.
    async fn add_reaction(&self, chat: &Chat, message_id: &str, symbol: &str) -> Result<()> {
        let mut attempt = 0;
        loop {
            match self.bot.add_reaction(chat, message_id, symbol).await {
                Ok(()) => return Ok(()),
                Err(e) if attempt < self.reaction_retries => {
                    attempt += 1;
                    warn!(error = %e, symbol, attempt, "Adding reaction failed, retrying");
                    tokio::time::sleep(self.retry_delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[async_trait]
impl Handler for PollEchoHandler {
    /// Claims every own message so the command handler never sees it.
    #[instrument(skip(self, message), fields(message_id = %message.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.from_self {
            return Ok(HandlerResponse::Ignore);
        }
        let Some(token) = message.nonce else {
            return Ok(HandlerResponse::Stop);
        };
        let Some(poll) = self.pending.on_own_echo(token).await else {
            return Ok(HandlerResponse::Stop);
        };

        let mut added = 0usize;
        for (index, symbol) in poll.reaction_symbols().iter().enumerate() {
            if symbol.is_empty() {
                warn!(index, token = %token, "Choice has no reaction symbol, skipped");
                continue;
            }
            self.add_reaction(&message.chat, &message.id, symbol).await?;
            added += 1;
        }

        info!(token = %token, reactions = added, "Poll reactions attached");
        Ok(HandlerResponse::Reply(format!("{} reactions", added)))
    }
}
