//! CLI parser and config loading.

use anyhow::Result;
use clap::Parser;

use crate::config::BotConfig;

#[derive(Parser, Debug)]
#[command(name = "pollbot")]
#[command(about = "Discord bot that turns /poll commands into reaction polls", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Bot token; overrides DISCORD_TOKEN.
    #[arg(short, long)]
    pub token: Option<String>,
}

/// Load BotConfig from environment. If `token` is provided it overrides DISCORD_TOKEN.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_args() {
        let cli = Cli::try_parse_from(["pollbot"]).unwrap();
        assert!(cli.token.is_none());
    }

    #[test]
    fn test_cli_token_override() {
        let cli = Cli::try_parse_from(["pollbot", "--token", "abc"]).unwrap();
        assert_eq!(cli.token.as_deref(), Some("abc"));
        let cli = Cli::try_parse_from(["pollbot", "-t", "xyz"]).unwrap();
        assert_eq!(cli.token.as_deref(), Some("xyz"));
    }

    #[test]
    fn test_cli_rejects_subcommands() {
        assert!(Cli::try_parse_from(["pollbot", "run"]).is_err());
    }
}
