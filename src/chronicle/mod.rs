mod client;
mod error;
mod language;
mod message;
mod session;

pub use client::{ChatBackend, ChatReply, ChatRequest, HttpChatClient, chat_endpoint};
pub use error::SendError;
pub use language::{Language, detect_language};
pub use message::{Message, Role, format_timestamp, now_timestamp};
pub use session::{
    ConversationSession, ERROR_MESSAGE, SessionState, WELCOME_MESSAGE, generate_session_id,
};
