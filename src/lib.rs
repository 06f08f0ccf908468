//! # nile - Chronicler of the Nile chat client
//!
//! `nile` is a terminal client for the Chronicler of the Nile, a bilingual
//! (English/Arabic) assistant on Egyptian history served over a small HTTP
//! JSON API.
//!
//! ## Quick Start
//!
//! ```bash
//! # Interactive conversation
//! nile
//!
//! # One question
//! nile ask "Who commissioned the temple at Abu Simbel?"
//!
//! # Point at another backend
//! nile --base-url https://chronicler.example.com
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/nile/config.toml`:
//!
//! ```toml
//! [nile]
//! base_url = "http://localhost:5000"
//! ```

/// Interactive chat mode.
pub mod chat;

/// Conversation state, turns and the chat endpoint client.
pub mod chronicle;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// File system utilities.
pub mod fs;

/// Message input from arguments and stdin.
pub mod input;

/// Diagnostic logging setup.
pub mod logging;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Terminal UI components (spinner, colors).
pub mod ui;
