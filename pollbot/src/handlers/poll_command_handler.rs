//! Poll command handler: parses `<prefix> "Question" "Choice" ...`, replaces the command with a
//! poll message carrying a fresh correlation token, or answers with the help card.

use std::sync::Arc;

use async_trait::async_trait;
use pollbot_core::poll::parse;
use pollbot_core::{
    help_card, Bot, Handler, HandlerResponse, Message, OutgoingMessage, PendingPolls, Result,
};
use tracing::{info, instrument};

pub struct PollCommandHandler {
    bot: Arc<dyn Bot>,
    pending: PendingPolls,
    command_prefix: String,
}

impl PollCommandHandler {
    pub fn new(bot: Arc<dyn Bot>, pending: PendingPolls, command_prefix: impl Into<String>) -> Self {
        Self {
            bot,
            pending,
            command_prefix: command_prefix.into(),
        }
    }

    fn is_command(&self, message: &Message) -> bool {
        !message.from_self && message.content.starts_with(&self.command_prefix)
    }
}

#[async_trait]
impl Handler for PollCommandHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, message_id = %message.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !self.is_command(message) {
            return Ok(HandlerResponse::Ignore);
        }

        let poll = match parse(&message.content) {
            Ok(poll) => poll,
            Err(e) => {
                info!(error = %e, "Malformed poll command, sending usage");
                self.bot
                    .send_message(&message.chat, &OutgoingMessage::card(help_card(&self.command_prefix)))
                    .await?;
                return Ok(HandlerResponse::Stop);
            }
        };

        let outgoing_text = poll.display_text();
        let card = poll.card_body();
        let choices = poll.choices.len();
        // Registered before the send so an early echo still finds it.
        let token = self.pending.begin_send(poll).await;

        self.bot.delete_message(&message.chat, &message.id).await?;
        let sent_id = self
            .bot
            .send_message(
                &message.chat,
                &OutgoingMessage {
                    text: Some(outgoing_text),
                    card,
                    nonce: Some(token),
                },
            )
            .await?;

        info!(token = %token, choices, sent_id = %sent_id, "Poll sent");
        Ok(HandlerResponse::Reply(sent_id))
    }
}
