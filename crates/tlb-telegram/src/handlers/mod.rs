//! Telegram update handlers.
//!
//! Each handler is a small adapter: it pulls the pieces the core needs out
//! of the teloxide update and delegates to `tlb-core`.

use std::sync::Arc;

use teloxide::prelude::*;

use crate::router::AppState;

mod commands;
mod text;

pub async fn handle_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(message_text) = msg.text() else {
        // Photos, stickers, voice notes: nothing to do with them.
        return Ok(());
    };

    if message_text.starts_with('/') {
        return commands::handle_command(msg, state).await;
    }

    text::handle_text(msg, state).await
}
