//! Mock implementation of [`pollbot::Bot`] for integration tests.
//!
//! Records every outbound call in order so tests can assert on exactly what the bot did,
//! and can be told to fail a number of reaction adds first.

use async_trait::async_trait;
use pollbot::{Bot, Chat, OutgoingMessage};
use pollbot_core::{PollBotError, Result};
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::Mutex;

/// One recorded call.
#[derive(Debug, Clone, PartialEq)]
pub enum BotCall {
    Sent {
        chat_id: u64,
        message: OutgoingMessage,
        id: String,
    },
    Reaction {
        chat_id: u64,
        message_id: String,
        symbol: String,
    },
    Deleted {
        chat_id: u64,
        message_id: String,
    },
}

/// Mock Bot handing out sequential message ids starting at 900.
pub struct MockBot {
    calls: Mutex<Vec<BotCall>>,
    next_id: AtomicU64,
    failing_reactions: AtomicU32,
}

impl MockBot {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(900),
            failing_reactions: AtomicU32::new(0),
        }
    }

    /// The next `n` add_reaction calls fail (and are not recorded).
    pub fn fail_next_reactions(&self, n: u32) {
        self.failing_reactions.store(n, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<BotCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn sent(&self) -> Vec<(String, OutgoingMessage)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                BotCall::Sent { message, id, .. } => Some((id, message)),
                _ => None,
            })
            .collect()
    }

    /// Symbols added to `message_id`, in call order.
    pub fn reactions_on(&self, message_id: &str) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                BotCall::Reaction {
                    message_id: id,
                    symbol,
                    ..
                } if id == message_id => Some(symbol),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, message: &OutgoingMessage) -> Result<String> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst).to_string();
        self.calls.lock().unwrap().push(BotCall::Sent {
            chat_id: chat.id,
            message: message.clone(),
            id: id.clone(),
        });
        Ok(id)
    }

    async fn add_reaction(&self, chat: &Chat, message_id: &str, symbol: &str) -> Result<()> {
        let remaining = self.failing_reactions.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failing_reactions.store(remaining - 1, Ordering::SeqCst);
            return Err(PollBotError::Bot("rate limited".to_string()));
        }
        self.calls.lock().unwrap().push(BotCall::Reaction {
            chat_id: chat.id,
            message_id: message_id.to_string(),
            symbol: symbol.to_string(),
        });
        Ok(())
    }

    async fn delete_message(&self, chat: &Chat, message_id: &str) -> Result<()> {
        self.calls.lock().unwrap().push(BotCall::Deleted {
            chat_id: chat.id,
            message_id: message_id.to_string(),
        });
        Ok(())
    }
}
