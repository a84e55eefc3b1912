use std::sync::Arc;

use tlb_core::{config::Config, listing::TeraboxClient};

#[tokio::main]
async fn main() -> Result<(), tlb_core::Error> {
    tlb_core::logging::init("tlb");

    let cfg = Arc::new(Config::load()?);
    let listing = Arc::new(TeraboxClient::new(&cfg)?);

    tlb_telegram::router::run_polling(cfg, listing)
        .await
        .map_err(|e| tlb_core::Error::External(format!("telegram bot failed: {e}")))?;

    Ok(())
}
