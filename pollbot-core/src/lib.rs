//! # pollbot-core
//!
//! Core types and traits for the poll bot: [`Bot`], [`Handler`], message and card types,
//! tracing initialization, and the [`poll`] module (command parsing, rendering, pending-poll correlation).
//! Transport-agnostic; used by pollbot-discord, handler-chain and the pollbot application.

pub mod bot;
pub mod error;
pub mod logger;
pub mod poll;
pub mod types;

pub use bot::{parse_message_id, Bot};
pub use error::{HandlerError, PollBotError, Result};
pub use logger::init_tracing;
pub use poll::{
    help_card, symbol_for, CorrelationToken, MalformedCommand, PendingPolls, Poll,
    POLL_GLYPH, THUMBS_DOWN, THUMBS_UP,
};
pub use types::{
    Card, Chat, Handler, HandlerResponse, Message, OutgoingMessage, ToCoreMessage, ToCoreUser,
    User,
};
