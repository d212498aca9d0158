use std::sync::Arc;

use teloxide::{dispatching::Dispatcher, dptree, prelude::*};

use tracing::info;

use tbb_core::{config::Config, errors::Error, Result};

use crate::handlers;
use crate::TelegramGateway;

pub struct AppState {
    pub cfg: Arc<Config>,
    pub dispatcher: tbb_core::dispatch::Dispatcher,
}

/// Long-poll Telegram for updates and run each message through the pipeline.
///
/// Receiving updates is impossible without the bot token, so this is the one
/// place where a missing credential is a hard configuration error rather
/// than a per-call failure.
pub async fn run_polling(cfg: Arc<Config>) -> Result<()> {
    let gateway = Arc::new(TelegramGateway::from_config(&cfg));
    let Some(bot) = gateway.bot() else {
        return Err(Error::Config(
            "TELEGRAM_BOT_TOKEN is required to receive updates".to_string(),
        ));
    };

    // Basic startup info (best-effort).
    if let Ok(me) = bot.get_me().await {
        info!("tbb started: @{}", me.username());
    }

    let state = Arc::new(AppState {
        cfg,
        dispatcher: tbb_core::dispatch::Dispatcher::new(gateway.clone(), gateway),
    });

    let handler =
        dptree::entry().branch(Update::filter_message().endpoint(handlers::handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .build()
        .dispatch()
        .await;

    Ok(())
}
