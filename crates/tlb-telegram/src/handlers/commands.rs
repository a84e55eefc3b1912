use std::sync::Arc;

use teloxide::prelude::*;
use tracing::warn;

use tlb_core::domain::ChatId;
use tlb_core::handler::GREETING;

use crate::router::AppState;

fn parse_command(text: &str) -> (String, String) {
    // Telegram may send `/cmd@botname arg1 ...`
    let mut parts = text.trim().splitn(2, char::is_whitespace);
    let first = parts.next().unwrap_or("").trim();
    let rest = parts.next().unwrap_or("").trim().to_string();

    let cmd = first
        .trim_start_matches('/')
        .split('@')
        .next()
        .unwrap_or("")
        .to_lowercase();

    (cmd, rest)
}

pub async fn handle_command(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let (cmd, _args) = parse_command(text);
    let chat_id = ChatId(msg.chat.id.0);

    match cmd.as_str() {
        "start" => {
            if let Err(e) = state.messenger.send_text(chat_id, GREETING).await {
                warn!("greeting failed: {e}");
            }
        }
        // Unknown commands get no reply.
        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_slash_and_bot_mention() {
        assert_eq!(parse_command("/start"), ("start".to_string(), String::new()));
        assert_eq!(
            parse_command("/start@terabox_list_bot"),
            ("start".to_string(), String::new())
        );
        assert_eq!(
            parse_command("/START extra args"),
            ("start".to_string(), "extra args".to_string())
        );
    }
}
