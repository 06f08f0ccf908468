use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use std::future::Future;

use super::error::SendError;
use super::language::Language;

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: String,
}

/// Successful reply from the chat endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    pub response: String,
    pub timestamp: String,
    pub language: Language,
}

/// Something that can answer a chat turn.
pub trait ChatBackend {
    fn send(
        &self,
        request: &ChatRequest,
    ) -> impl Future<Output = Result<ChatReply, SendError>> + Send;
}

/// Builds the chat endpoint URL from a base URL, keeping any path prefix.
pub fn chat_endpoint(base_url: &Url) -> Url {
    let mut endpoint = base_url.clone();
    let path = format!("{}/api/chat", base_url.path().trim_end_matches('/'));
    endpoint.set_path(&path);
    endpoint.set_query(None);
    endpoint.set_fragment(None);
    endpoint
}

/// HTTP client for the Chronicler backend.
///
/// No timeout and no retries: each call is a single attempt.
pub struct HttpChatClient {
    client: Client,
    url: Url,
}

impl HttpChatClient {
    pub fn new(base_url: &Url) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Uses a preconfigured reqwest client (proxy, TLS settings).
    pub fn with_client(client: Client, base_url: &Url) -> Self {
        Self {
            client,
            url: chat_endpoint(base_url),
        }
    }

    pub const fn url(&self) -> &Url {
        &self.url
    }
}

impl ChatBackend for HttpChatClient {
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply, SendError> {
        tracing::debug!(url = %self.url, session_id = %request.session_id, "sending chat turn");

        let response = self
            .client
            .post(self.url.clone())
            .json(request)
            .send()
            .await
            .map_err(|source| SendError::Transport {
                url: self.url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SendError::Status { status, body });
        }

        let body = response
            .text()
            .await
            .map_err(|source| SendError::Transport {
                url: self.url.to_string(),
                source,
            })?;

        let reply: ChatReply =
            serde_json::from_str(&body).map_err(|e| SendError::Decode(e.to_string()))?;

        tracing::debug!(
            language = %reply.language,
            chars = reply.response.len(),
            "received chat reply"
        );
        Ok(reply)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn endpoint(base: &str) -> String {
        chat_endpoint(&Url::parse(base).unwrap()).to_string()
    }

    #[test]
    fn test_chat_endpoint_appends_path() {
        assert_eq!(endpoint("http://localhost:5000"), "http://localhost:5000/api/chat");
    }

    #[test]
    fn test_chat_endpoint_strips_trailing_slash() {
        assert_eq!(
            endpoint("https://nile.example.com/"),
            "https://nile.example.com/api/chat"
        );
    }

    #[test]
    fn test_chat_endpoint_keeps_path_prefix() {
        assert_eq!(
            endpoint("https://nile.example.com/chronicler/"),
            "https://nile.example.com/chronicler/api/chat"
        );
    }

    #[test]
    fn test_request_serializes_wire_fields() {
        let request = ChatRequest {
            message: "Who built Karnak?".to_string(),
            session_id: "session_abc_1".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"message": "Who built Karnak?", "session_id": "session_abc_1"})
        );
    }

    #[test]
    fn test_reply_ignores_extra_fields() {
        let body = r#"{"response":"X","timestamp":"T","language":"ar","session_id":"s"}"#;
        let reply: ChatReply = serde_json::from_str(body).unwrap();
        assert_eq!(reply.response, "X");
        assert_eq!(reply.timestamp, "T");
        assert_eq!(reply.language, Language::Ar);
    }

    #[test]
    fn test_reply_missing_field_is_error() {
        let body = r#"{"response":"X","language":"en"}"#;
        assert!(serde_json::from_str::<ChatReply>(body).is_err());
    }
}
