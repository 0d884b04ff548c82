//! # pollbot
//!
//! Wires the Discord layer, the handler chain and the poll handlers. Loads config from env and
//! runs the gateway. Core types (Poll, Bot, Message) come from pollbot-core.

pub mod cli;
pub mod components;
pub mod config;
pub mod handlers;
pub mod runner;

pub use cli::{load_config, Cli};
pub use components::{build_bot_components, build_handler_chain, BotComponents};
pub use config::{BaseConfig, BotConfig, PollConfig};
pub use handlers::{LoggingHandler, PollCommandHandler, PollEchoHandler};
pub use runner::{run_bot, PollBot};

pub use handler_chain::HandlerChain;
pub use pollbot_core::{
    Bot, Card, Chat, CorrelationToken, HandlerResponse, Message, OutgoingMessage, PendingPolls,
    Poll, User,
};
