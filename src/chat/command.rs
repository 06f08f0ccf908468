use inquire::autocompletion::{Autocomplete, Replacement};

// Available slash commands: (command, description)
pub(super) const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/config", "Show the backend configuration"),
    ("/help", "Show available commands"),
    ("/history", "Show the whole conversation"),
    ("/quit", "Leave the Chronicler"),
    ("/session", "Show session id and language"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Config,
    Help,
    History,
    Session,
    Quit,
    Unknown(String),
}

/// One line of REPL input.
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    /// A chat turn, kept exactly as typed.
    Text(String),
    Command(SlashCommand),
    Empty,
}

pub fn parse_input(line: &str) -> Input {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return Input::Empty;
    }

    // "//" escapes a leading slash.
    if let Some(rest) = trimmed.strip_prefix("//") {
        return Input::Text(format!("/{rest}"));
    }

    trimmed
        .strip_prefix('/')
        .map_or_else(|| Input::Text(line.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let parts: Vec<&str> = cmd.split_whitespace().collect();

    match parts.first().copied() {
        Some("config") => Input::Command(SlashCommand::Config),
        Some("help") => Input::Command(SlashCommand::Help),
        Some("history") => Input::Command(SlashCommand::History),
        Some("session") => Input::Command(SlashCommand::Session),
        Some("quit" | "exit" | "q") => Input::Command(SlashCommand::Quit),
        _ => Input::Command(SlashCommand::Unknown(parts.join(" "))),
    }
}
