//! Interactive chat with the Chronicler.
//!
//! Provides a REPL-style interface with slash commands for inspecting the
//! session.

/// Slash command parsing and autocomplete.
pub mod command;
mod session;
mod ui;

pub use session::ChatSession;
pub use ui::{THINKING, render_message};
