use anyhow::Result;

use crate::chat::ChatSession;
use crate::config::{ConfigManager, ResolveOptions};

pub struct ChatOptions {
    pub base_url: Option<String>,
}

pub async fn run_chat(options: ChatOptions) -> Result<()> {
    let config = ConfigManager::new()?.resolve(&ResolveOptions {
        base_url: options.base_url,
    })?;

    let mut session = ChatSession::new(config);
    session.run().await
}
