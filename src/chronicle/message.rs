//! Conversation turns.

use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::language::Language;

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One turn of the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    /// ISO-8601 timestamp. Client clock for user turns, server clock for replies.
    pub timestamp: String,
    pub language: Language,
}

impl Message {
    /// A user turn stamped with the client clock.
    pub fn user(content: impl Into<String>, language: Language) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            timestamp: now_timestamp(),
            language,
        }
    }

    /// An assistant turn with an explicit timestamp.
    pub fn assistant(
        content: impl Into<String>,
        timestamp: impl Into<String>,
        language: Language,
    ) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            timestamp: timestamp.into(),
            language,
        }
    }

    pub const fn is_user(&self) -> bool {
        matches!(self.role, Role::User)
    }
}

/// Current UTC time as an ISO-8601 string with millisecond precision.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Renders a turn timestamp as `HH:MM`.
///
/// Offset-carrying timestamps are shown in local time. Naive timestamps (the
/// backend emits these) are shown as-is. Anything unparseable is returned
/// verbatim.
pub fn format_timestamp(timestamp: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return dt.with_timezone(&Local).format("%H:%M").to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.format("%H:%M").to_string();
    }
    timestamp.to_string()
}
