//! pollbot binary: load `.env`, parse CLI, run the bot.

use anyhow::Result;
use clap::Parser;
use pollbot::{load_config, run_bot, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(cli.token)?;
    run_bot(config).await
}
