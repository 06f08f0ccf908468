//! Conversation session state.
//!
//! A session owns the transcript and gates network traffic so that at most
//! one chat turn is in flight. Input submitted while a turn is outstanding is
//! dropped, not queued.

use chrono::Utc;
use rand::Rng;

use super::client::{ChatBackend, ChatReply, ChatRequest};
use super::error::SendError;
use super::language::{Language, detect_language};
use super::message::{Message, now_timestamp};

/// Greeting seeded into every new transcript.
pub const WELCOME_MESSAGE: &str = "Welcome! I am the Chronicler of the Nile, your guide through the vast tapestry of Egyptian history. From the ancient pharaohs to modern times, I am here to share the stories, events, and wisdom of this extraordinary land. What period or aspect of Egyptian history would you like to explore?\n\n\
مرحباً! أنا راوي النيل، دليلك عبر تاريخ مصر العريق. من الفراعنة القدماء إلى العصر الحديث، أنا هنا لأشاركك القصص والأحداث وحكمة هذه الأرض العظيمة. أي فترة أو جانب من التاريخ المصري تود استكشافه؟";

/// Assistant turn appended when a send fails for any reason.
pub const ERROR_MESSAGE: &str = "I apologize, but I encountered an error. Please try again. / أعتذر، لكنني واجهت خطأ. يرجى المحاولة مرة أخرى.";

const SESSION_PREFIX: &str = "session_";
const FRAGMENT_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates a best-effort unique session identifier:
/// `session_<9 base-36 chars>_<unix millis>`.
pub fn generate_session_id() -> String {
    let mut rng = rand::thread_rng();
    let fragment: String = (0..FRAGMENT_LEN)
        .map(|_| char::from(BASE36[rng.gen_range(0..BASE36.len())]))
        .collect();
    format!(
        "{SESSION_PREFIX}{fragment}_{}",
        Utc::now().timestamp_millis()
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AwaitingResponse,
}

/// In-memory conversation with the Chronicler.
#[derive(Debug)]
pub struct ConversationSession {
    session_id: String,
    transcript: Vec<Message>,
    input: String,
    busy: bool,
    current_language: Language,
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationSession {
    /// Starts a session with a fresh identifier and the welcome turn.
    pub fn new() -> Self {
        Self {
            session_id: generate_session_id(),
            transcript: vec![Message::assistant(
                WELCOME_MESSAGE,
                now_timestamp(),
                Language::En,
            )],
            input: String::new(),
            busy: false,
            current_language: Language::En,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// Language of the most recent successful reply.
    pub const fn current_language(&self) -> Language {
        self.current_language
    }

    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    pub const fn state(&self) -> SessionState {
        if self.busy {
            SessionState::AwaitingResponse
        } else {
            SessionState::Idle
        }
    }

    /// Pending text in the input buffer.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Moves the session from idle to awaiting a response.
    ///
    /// Appends the user turn, clears the input buffer and returns the request
    /// to dispatch. Returns `None` and leaves the session untouched if a turn
    /// is already outstanding or `text` is blank.
    pub fn begin_send(&mut self, text: &str) -> Option<ChatRequest> {
        if self.busy {
            tracing::debug!("turn already in flight, dropping input");
            return None;
        }
        if text.trim().is_empty() {
            return None;
        }

        self.transcript.push(Message::user(text, detect_language(text)));
        self.input.clear();
        self.busy = true;

        Some(ChatRequest {
            message: text.to_string(),
            session_id: self.session_id.clone(),
        })
    }

    /// Applies the outcome of the outstanding turn and returns to idle.
    ///
    /// Returns the appended assistant turn, or `None` if no turn was
    /// outstanding.
    pub fn complete_send(&mut self, outcome: Result<ChatReply, SendError>) -> Option<&Message> {
        if !self.busy {
            tracing::warn!("reply received with no turn in flight, ignoring");
            return None;
        }

        let message = match outcome {
            Ok(reply) => {
                self.current_language = reply.language;
                Message::assistant(reply.response, reply.timestamp, reply.language)
            }
            Err(err) => {
                tracing::error!(
                    error = %err,
                    session_id = %self.session_id,
                    "error sending message"
                );
                Message::assistant(ERROR_MESSAGE, now_timestamp(), Language::En)
            }
        };

        self.transcript.push(message);
        self.busy = false;
        self.transcript.last()
    }

    /// Runs one full turn against `backend`.
    ///
    /// Returns the assistant turn, or `None` if the input was dropped.
    pub async fn send_message<B: ChatBackend>(
        &mut self,
        backend: &B,
        text: &str,
    ) -> Option<&Message> {
        let request = self.begin_send(text)?;
        let outcome = backend.send(&request).await;
        self.complete_send(outcome)
    }

    /// Sends whatever is in the input buffer.
    pub async fn send_input<B: ChatBackend>(&mut self, backend: &B) -> Option<&Message> {
        let text = self.input.clone();
        self.send_message(backend, &text).await
    }
}
