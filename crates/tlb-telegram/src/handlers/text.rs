use std::sync::Arc;

use teloxide::prelude::*;
use tracing::warn;

use tlb_core::domain::ChatId;
use tlb_core::handler::handle_share_url;

use crate::router::AppState;

pub async fn handle_text(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let chat_id = ChatId(msg.chat.id.0);

    // Failed sends are logged and dropped; the dispatcher keeps running.
    if let Err(e) = handle_share_url(
        state.messenger.as_ref(),
        state.listing.as_ref(),
        chat_id,
        text,
    )
    .await
    {
        warn!("share handler failed: {e}");
    }

    Ok(())
}
