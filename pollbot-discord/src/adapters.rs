//! Adapters from serenity types to pollbot_core types.

use chrono::{DateTime, Utc};
use pollbot_core::{Chat, CorrelationToken, Message, ToCoreMessage, ToCoreUser, User};
use serenity::all::Nonce;

/// Wraps a serenity User for conversion to core [`User`].
pub struct DiscordUserWrapper<'a>(pub &'a serenity::all::User);

impl<'a> ToCoreUser for DiscordUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.get(),
            name: self.0.name.clone(),
            is_bot: self.0.bot,
        }
    }
}

/// Wraps a serenity Message plus the bot's own user id (known after `ready`).
pub struct DiscordMessageWrapper<'a> {
    message: &'a serenity::all::Message,
    bot_user_id: Option<u64>,
}

impl<'a> DiscordMessageWrapper<'a> {
    pub fn new(message: &'a serenity::all::Message, bot_user_id: Option<u64>) -> Self {
        Self {
            message,
            bot_user_id,
        }
    }
}

impl<'a> ToCoreMessage for DiscordMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        let user = DiscordUserWrapper(&self.message.author).to_core();
        Message {
            id: self.message.id.to_string(),
            from_self: self.bot_user_id == Some(user.id),
            user,
            chat: Chat {
                id: self.message.channel_id.get(),
            },
            content: self.message.content.clone(),
            nonce: nonce_token(self.message.nonce.as_ref()),
            created_at: DateTime::<Utc>::from_timestamp(self.message.timestamp.unix_timestamp(), 0)
                .unwrap_or_else(Utc::now),
        }
    }
}

/// Reads our correlation token back from a message nonce.
///
/// Discord echoes nonces as strings even when they were sent as integers, so both forms are
/// accepted; anything that is not a plain unsigned integer is not one of ours.
pub fn nonce_token(nonce: Option<&Nonce>) -> Option<CorrelationToken> {
    match nonce? {
        Nonce::Number(n) => Some(CorrelationToken(*n)),
        Nonce::String(s) => s.parse().ok().map(CorrelationToken),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nonce_token_number_and_string() {
        assert_eq!(
            nonce_token(Some(&Nonce::Number(4242))),
            Some(CorrelationToken(4242))
        );
        assert_eq!(
            nonce_token(Some(&Nonce::String("999999999".to_string()))),
            Some(CorrelationToken(999_999_999))
        );
    }

    #[test]
    fn test_nonce_token_foreign_or_missing() {
        assert_eq!(nonce_token(None), None);
        assert_eq!(nonce_token(Some(&Nonce::String("abc-123".to_string()))), None);
        assert_eq!(nonce_token(Some(&Nonce::String(String::new()))), None);
    }
}
