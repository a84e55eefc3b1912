use std::sync::Arc;

use teloxide::{dispatching::Dispatcher, dptree, prelude::*};
use tracing::info;

use tlb_core::{config::Config, listing::ShareListing, messaging::port::MessagingPort};

use crate::handlers;
use crate::TelegramMessenger;

/// Shared per-process state handed to every handler invocation.
///
/// Everything here is read-only or internally synchronized; handlers never
/// share mutable state.
#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<Config>,
    pub listing: Arc<dyn ShareListing>,
    pub messenger: Arc<dyn MessagingPort>,
}

pub async fn run_polling(cfg: Arc<Config>, listing: Arc<dyn ShareListing>) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.telegram_bot_token.clone());

    if let Ok(me) = bot.get_me().await {
        info!("tlb started: @{}", me.username());
    }

    let messenger: Arc<dyn MessagingPort> = Arc::new(TelegramMessenger::new(bot.clone()));

    let state = Arc::new(AppState {
        cfg,
        listing,
        messenger,
    });

    let handler = dptree::entry().branch(Update::filter_message().endpoint(handlers::handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .build()
        .dispatch()
        .await;

    Ok(())
}
