use async_trait::async_trait;

use crate::{
    domain::{ChatId, MessageRef},
    Result,
};

/// Minimal messaging port: this bot only ever replies with plain text.
///
/// Telegram is the first implementation; other messengers fit behind the
/// same interface. Handler registration is an adapter concern and stays out
/// of the core.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<MessageRef>;
}
