//! Error types for the bot core.
//!
//! [`PollBotError`] is the top-level error; [`HandlerError`] is used for handler failures.
//! A malformed `/poll` command is not an error of this kind: the parser returns
//! [`crate::MalformedCommand`] and the dispatch layer answers it with the help card.

use thiserror::Error;

/// Top-level error for pollbot (bot transport, handler, config, IO).
#[derive(Error, Debug)]
pub enum PollBotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// Errors produced by handlers.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Invalid message id: {0}")]
    InvalidMessageId(String),

    #[error("State error: {0}")]
    State(String),
}

/// Result type for core operations; uses [`PollBotError`].
pub type Result<T> = std::result::Result<T, PollBotError>;
