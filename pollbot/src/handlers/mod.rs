//! Handlers in chain order: logging, own-echo (attach reactions), poll command.

mod logging_handler;
mod poll_command_handler;
mod poll_echo_handler;

pub use logging_handler::LoggingHandler;
pub use poll_command_handler::PollCommandHandler;
pub use poll_echo_handler::PollEchoHandler;
