//! Implements [`pollbot_core::Bot`] over serenity's HTTP client. Tests substitute another Bot impl.

use std::sync::Arc;

use async_trait::async_trait;
use pollbot_core::{parse_message_id, Bot, Card, Chat, HandlerError, OutgoingMessage, PollBotError, Result};
use serenity::all::{
    ChannelId, Colour, CreateEmbed, CreateEmbedFooter, CreateMessage, Http, MessageId, Nonce,
    ReactionType,
};
use tracing::{debug, instrument};

/// Thin wrapper around serenity's `Http` that implements pollbot-core's Bot trait.
pub struct DiscordBotAdapter {
    http: Arc<Http>,
}

impl DiscordBotAdapter {
    /// Creates an adapter with its own HTTP client for `token`.
    pub fn new(token: &str) -> Self {
        Self::from_http(Arc::new(Http::new(token)))
    }

    pub fn from_http(http: Arc<Http>) -> Self {
        Self { http }
    }

    /// Underlying HTTP client for direct API use when needed.
    pub fn inner(&self) -> &Arc<Http> {
        &self.http
    }
}

fn bot_error(e: serenity::Error) -> PollBotError {
    PollBotError::Bot(e.to_string())
}

/// Snowflakes are non-zero; serenity's id constructors panic on zero.
fn non_zero(id: u64, what: &str) -> Result<u64> {
    if id == 0 {
        return Err(HandlerError::InvalidMessageId(format!("{} id 0", what)).into());
    }
    Ok(id)
}

fn channel_id(chat: &Chat) -> Result<ChannelId> {
    Ok(ChannelId::new(non_zero(chat.id, "channel")?))
}

fn message_id(message_id: &str) -> Result<MessageId> {
    Ok(MessageId::new(non_zero(parse_message_id(message_id)?, "message")?))
}

fn build_embed(card: &Card) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .description(&card.description)
        .colour(Colour::DARK_RED);
    if let Some(title) = &card.title {
        embed = embed.title(title);
    }
    if let Some(footer) = &card.footer {
        embed = embed.footer(CreateEmbedFooter::new(footer));
    }
    embed
}

/// Maps an [`OutgoingMessage`] onto serenity's builder: text as content, card as embed,
/// correlation token as integer nonce.
pub fn build_create_message(message: &OutgoingMessage) -> CreateMessage {
    let mut builder = CreateMessage::new();
    if let Some(text) = &message.text {
        builder = builder.content(text);
    }
    if let Some(card) = &message.card {
        builder = builder.embed(build_embed(card));
    }
    if let Some(token) = message.nonce {
        builder = builder.nonce(Nonce::Number(token.0));
    }
    builder
}

#[async_trait]
impl Bot for DiscordBotAdapter {
    #[instrument(skip(self, message), fields(chat_id = chat.id, nonce = ?message.nonce))]
    async fn send_message(&self, chat: &Chat, message: &OutgoingMessage) -> Result<String> {
        let sent = channel_id(chat)?
            .send_message(&*self.http, build_create_message(message))
            .await
            .map_err(bot_error)?;
        debug!(message_id = %sent.id, "Message sent");
        Ok(sent.id.to_string())
    }

    async fn add_reaction(&self, chat: &Chat, message_id_str: &str, symbol: &str) -> Result<()> {
        let reaction = ReactionType::Unicode(symbol.to_string());
        self.http
            .create_reaction(channel_id(chat)?, message_id(message_id_str)?, &reaction)
            .await
            .map_err(bot_error)
    }

    async fn delete_message(&self, chat: &Chat, message_id_str: &str) -> Result<()> {
        channel_id(chat)?
            .delete_message(&*self.http, message_id(message_id_str)?)
            .await
            .map_err(bot_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pollbot_core::{help_card, CorrelationToken, Poll};

    #[test]
    fn test_discord_bot_adapter_new() {
        let _bot = DiscordBotAdapter::new("dummy_token");
    }

    #[test]
    fn test_zero_ids_rejected() {
        assert!(channel_id(&Chat { id: 0 }).is_err());
        assert!(message_id("0").is_err());
        assert!(message_id("not-a-number").is_err());
        assert_eq!(message_id("17").unwrap(), MessageId::new(17));
    }

    #[test]
    fn test_build_create_message_poll() {
        let poll = Poll::new("Lunch?", vec!["pizza".to_string(), "tacos".to_string()]);
        let outgoing = OutgoingMessage {
            text: Some(poll.display_text()),
            card: poll.card_body(),
            nonce: Some(CorrelationToken(31337)),
        };

        let json = serde_json::to_value(build_create_message(&outgoing)).unwrap();

        assert_eq!(json["content"], "📊 Lunch?");
        assert_eq!(json["embeds"][0]["description"], "🇦 pizza\n🇧 tacos");
        assert!(!json["nonce"].is_null());
    }

    #[test]
    fn test_build_create_message_help_card_only() {
        let json =
            serde_json::to_value(build_create_message(&OutgoingMessage::card(help_card("/poll"))))
                .unwrap();

        assert!(json["content"].is_null());
        assert_eq!(json["embeds"][0]["title"], "Usage:");
        assert_eq!(json["embeds"][0]["footer"]["text"], "HEPIA powered");
        assert!(json["nonce"].is_null());
    }
}
