use anyhow::Result;
use clap::Parser;

use nile_chat::cli::commands::{ask, chat, configure};
use nile_chat::cli::{Args, Command};
use nile_chat::logging;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    match args.command {
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        Some(Command::Ask { message }) => {
            let options = ask::AskOptions {
                message,
                base_url: args.base_url,
            };
            ask::run_ask(options).await?;
        }
        Some(Command::Chat) | None => {
            let options = chat::ChatOptions {
                base_url: args.base_url,
            };
            chat::run_chat(options).await?;
        }
    }

    Ok(())
}
