use anyhow::{Context, Result, bail};

use crate::chat::THINKING;
use crate::chronicle::{ChatBackend, ConversationSession, HttpChatClient};
use crate::config::{ConfigManager, ResolveOptions};
use crate::input::InputReader;
use crate::ui::Spinner;

pub struct AskOptions {
    pub message: Option<String>,
    pub base_url: Option<String>,
}

/// Sends one question and prints the Chronicler's answer to stdout.
pub async fn run_ask(options: AskOptions) -> Result<()> {
    let config = ConfigManager::new()?.resolve(&ResolveOptions {
        base_url: options.base_url,
    })?;

    let message = InputReader::read(options.message.as_deref())?;
    if message.trim().is_empty() {
        bail!("Message is empty");
    }

    let backend = HttpChatClient::new(&config.base_url);
    let answer = ask(&backend, &message).await?;
    println!("{answer}");
    Ok(())
}

/// Runs a single turn in a fresh session.
///
/// On failure the bilingual error turn is written to stderr and an error is
/// returned so the process exits non-zero.
pub async fn ask<B: ChatBackend>(backend: &B, message: &str) -> Result<String> {
    let mut session = ConversationSession::new();
    let request = session
        .begin_send(message)
        .context("Message is empty")?;

    let spinner = Spinner::new(THINKING);
    let outcome = backend.send(&request).await;
    spinner.stop();

    let failed = outcome.is_err();
    let reply = session
        .complete_send(outcome)
        .context("No turn was in flight")?;

    if failed {
        eprintln!("{}", reply.content);
        bail!("The Chronicler could not be reached");
    }

    Ok(reply.content.clone())
}
