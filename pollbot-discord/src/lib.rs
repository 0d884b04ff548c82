//! # pollbot-discord
//!
//! Discord layer: adapters from serenity types to core types, the [`pollbot_core::Bot`]
//! implementation over serenity's HTTP client, minimal gateway config, and the gateway runner.
//! Handles only Discord connectivity and handler-chain dispatch; no poll logic lives here.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{nonce_token, DiscordMessageWrapper, DiscordUserWrapper};
pub use bot_adapter::{build_create_message, DiscordBotAdapter};
pub use config::DiscordConfig;
pub use runner::{run_gateway, GatewayHandler};
