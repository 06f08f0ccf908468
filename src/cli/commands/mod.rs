//! Subcommand implementations.

/// One-shot question handler.
pub mod ask;

/// Interactive chat handler.
pub mod chat;

/// Configure command handler.
pub mod configure;
