//! Chat mode UI components.

use crate::chronicle::{ConversationSession, Language, Message, Role, format_timestamp};
use crate::config::ResolvedConfig;
use crate::ui::Style;

use super::command::SLASH_COMMANDS;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const TITLE: &str = "The Chronicler of the Nile";
pub const SUBTITLE: &str = "راوي النيل - Your Egyptian History AI Guide";
pub const THINKING: &str = "The Chronicler is thinking...";
pub const PLACEHOLDER: &str =
    "Ask about any period in Egyptian history... / اسأل عن أي فترة في التاريخ المصري...";
const ERAS: &str =
    "Explore Ancient Egypt • Graeco-Roman Period • Islamic Era • Ottoman Rule • Modern Egypt";

const fn speaker(role: Role) -> &'static str {
    match role {
        Role::User => "You",
        Role::Assistant => "Chronicler",
    }
}

/// Renders one turn as a labelled block.
pub fn render_message(message: &Message) -> String {
    let name = speaker(message.role);
    let name = if message.is_user() {
        Style::user(name)
    } else {
        Style::assistant(name)
    };
    format!(
        "{name} {}\n{}\n",
        Style::timestamp(format_timestamp(&message.timestamp)),
        message.content
    )
}

/// Renders the language indicator line.
pub fn render_badge(language: Language) -> String {
    format!(
        "{} {}",
        Style::secondary("Language"),
        Style::badge(language.display_name())
    )
}

pub fn print_header(session: &ConversationSession) {
    println!(
        "{} {}",
        Style::header(TITLE),
        Style::version(format!("v{VERSION}"))
    );
    println!("{}", Style::secondary(SUBTITLE));
    println!(
        "{} {}",
        Style::success("● Session Active"),
        Style::badge(session.current_language().display_name())
    );
    println!("{}", Style::secondary(ERAS));
    println!();
}

pub fn print_message(message: &Message) {
    println!("{}", render_message(message));
}

pub fn print_transcript(session: &ConversationSession) {
    println!("{}", Style::header("Conversation with the Chronicler"));
    println!();
    for message in session.transcript() {
        print_message(message);
    }
}

pub fn print_session(session: &ConversationSession) {
    println!("{}", Style::header("Session"));
    println!(
        "  {}        {}",
        Style::label("id"),
        Style::value(session.session_id())
    );
    println!(
        "  {}  {}",
        Style::label("language"),
        Style::value(session.current_language().display_name())
    );
    println!(
        "  {}     {}",
        Style::label("turns"),
        Style::value(session.transcript().len())
    );
    println!();
}

pub fn print_config(config: &ResolvedConfig) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}  {}",
        Style::label("base_url"),
        Style::value(&config.base_url)
    );
    println!(
        "  {}  {}",
        Style::label("endpoint"),
        Style::secondary(&config.endpoint)
    );
    println!();
}

pub fn print_language_change(language: Language) {
    println!("{}", render_badge(language));
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    for (cmd, desc) in SLASH_COMMANDS {
        println!("  {}  {}", Style::command(cmd), Style::secondary(desc));
    }
    println!(
        "  {}",
        Style::secondary("Start a message with // to send text beginning with /")
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Farewell! / مع السلامة!"));
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
