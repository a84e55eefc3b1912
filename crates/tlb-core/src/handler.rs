//! Per-message request flow: parse the URL, fetch the listing, reply.

use tracing::info;

use crate::domain::ChatId;
use crate::formatting::format_file_list;
use crate::listing::ShareListing;
use crate::messaging::port::MessagingPort;
use crate::share::ShareReference;
use crate::Result;

/// Fixed greeting sent for the `/start` command.
pub const GREETING: &str = "Send me a TeraBox share URL, and I'll list files for you!";

const INVALID_URL_REPLY: &str = "Invalid TeraBox share URL.";
const FETCHING_REPLY: &str = "Fetching file list, please wait...";
const EMPTY_SHARE_REPLY: &str = "No files found in this share.";

/// Handle one non-command text message: treat it as a share URL and reply
/// with the file listing, or with the matching error text.
///
/// Every outcome ends in a user-facing reply; listing failures never
/// propagate past this function.
pub async fn handle_share_url(
    messenger: &dyn MessagingPort,
    listing: &dyn ShareListing,
    chat_id: ChatId,
    text: &str,
) -> Result<()> {
    let reference = ShareReference::parse(text.trim());
    if reference.share_id.is_none() {
        messenger.send_text(chat_id, INVALID_URL_REPLY).await?;
        return Ok(());
    }

    messenger.send_text(chat_id, FETCHING_REPLY).await?;

    let files = match listing.fetch_listing(&reference).await {
        Ok(files) => files,
        Err(e) => {
            messenger
                .send_text(chat_id, &format!("❌ Failed to get file info: {e}"))
                .await?;
            return Ok(());
        }
    };

    if files.is_empty() {
        messenger.send_text(chat_id, EMPTY_SHARE_REPLY).await?;
        return Ok(());
    }

    info!(count = files.len(), "share listed");
    messenger
        .send_text(chat_id, &format_file_list(&files))
        .await?;

    Ok(())
}
