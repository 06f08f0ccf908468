use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "nile")]
#[command(about = "Chat with the Chronicler of the Nile, your Egyptian history guide")]
#[command(version)]
pub struct Args {
    /// Base URL of the Chronicler backend (e.g., http://localhost:5000)
    #[arg(short = 'u', long, global = true)]
    pub base_url: Option<String>,

    /// Enable debug logging (overridden by NILE_LOG)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive conversation with the Chronicler (default)
    Chat,
    /// Ask a single question and print the answer
    Ask {
        /// The question (reads from stdin if not provided)
        message: Option<String>,
    },
    /// Configure the backend URL
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
