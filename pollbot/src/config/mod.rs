//! Bot configuration: BaseConfig (Discord token + log file) + PollConfig (command behaviour).

mod base;
mod bot_config;
mod poll;


pub use base::BaseConfig;
pub use bot_config::BotConfig;
pub use poll::PollConfig;
