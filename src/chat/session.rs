use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::chronicle::{ChatBackend, ConversationSession, HttpChatClient, Language};
use crate::config::ResolvedConfig;
use crate::ui::{Spinner, is_prompt_cancelled};

/// An interactive chat with the Chronicler.
///
/// Renders the transcript and drives one turn per line of input.
pub struct ChatSession<B = HttpChatClient> {
    config: ResolvedConfig,
    conversation: ConversationSession,
    backend: B,
}

impl ChatSession {
    /// Creates a chat session against the configured HTTP backend.
    pub fn new(config: ResolvedConfig) -> Self {
        let backend = HttpChatClient::new(&config.base_url);
        Self::with_backend(config, backend)
    }
}

impl<B: ChatBackend> ChatSession<B> {
    pub fn with_backend(config: ResolvedConfig, backend: B) -> Self {
        Self {
            config,
            conversation: ConversationSession::new(),
            backend,
        }
    }

    pub const fn conversation(&self) -> &ConversationSession {
        &self.conversation
    }

    pub async fn run(&mut self) -> Result<()> {
        tracing::debug!(
            session_id = %self.conversation.session_id(),
            endpoint = %self.config.endpoint,
            "chat session started"
        );

        ui::print_header(&self.conversation);
        for message in self.conversation.transcript() {
            ui::print_message(message);
        }

        let prompt_style = Styled::new("❯")
            .with_fg(Color::DarkYellow)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkYellow));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_placeholder(ui::PLACEHOLDER)
                .with_help_message("Enter to send, /help for commands, Ctrl+C to leave")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd) {
                            break;
                        }
                    }
                    Input::Text(text) => {
                        self.conversation.set_input(text);
                        self.send_and_print().await;
                    }
                },
                Err(e) if is_prompt_cancelled(&e) => {
                    println!();
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    fn handle_command(&self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Config => ui::print_config(&self.config),
            SlashCommand::Help => ui::print_help(),
            SlashCommand::History => ui::print_transcript(&self.conversation),
            SlashCommand::Session => ui::print_session(&self.conversation),
            SlashCommand::Quit => return false,
            SlashCommand::Unknown(cmd) => ui::print_error(&format!("Unknown command: /{cmd}")),
        }
        true
    }

    /// Sends the input buffer as one turn and prints the reply.
    ///
    /// Returns the new language when the reply switched it; the updated
    /// badge is printed under the reply.
    async fn send_and_print(&mut self) -> Option<Language> {
        let text = self.conversation.input().to_string();
        let request = self.conversation.begin_send(&text)?;
        let previous = self.conversation.current_language();

        let spinner = Spinner::new(ui::THINKING);
        let outcome = self.backend.send(&request).await;
        spinner.stop();

        if let Some(reply) = self.conversation.complete_send(outcome) {
            println!();
            ui::print_message(reply);
        }

        let current = self.conversation.current_language();
        if current == previous {
            return None;
        }
        ui::print_language_change(current);
        Some(current)
    }
}
