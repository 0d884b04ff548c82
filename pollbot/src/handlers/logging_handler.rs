//! Logs each message in before() and the outcome in after(); never claims a message.

use async_trait::async_trait;
use pollbot_core::{Handler, HandlerResponse, Message, Result};
use tracing::{debug, instrument};

pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        debug!(
            user_id = message.user.id,
            username = %message.user.name,
            chat_id = message.chat.id,
            from_self = message.from_self,
            nonce = ?message.nonce,
            message_content = %message.content,
            "Dispatching message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        debug!(
            message_id = %message.id,
            response = ?response,
            "Processed message"
        );
        Ok(())
    }
}
