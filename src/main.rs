use std::env;
use std::sync::Arc;

use anyhow::Result;
use log::info;
use teloxide::prelude::*;
use tracing_subscriber::EnvFilter;

use catalog_bot::bot;
use catalog_bot::catalog::CatalogStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (also captures `log` records from the library)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    info!("Starting Catalog Telegram Bot");

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Get bot token from environment
    let bot_token = env::var("TELEGRAM_BOT_TOKEN").expect("TELEGRAM_BOT_TOKEN must be set");

    // Get catalog config path from environment, defaulting to cfg.json
    let config_path = env::var("CATALOG_CONFIG").unwrap_or_else(|_| "cfg.json".to_string());

    info!("Loading catalog from: {config_path}");

    // Load the catalog once; a broken config aborts startup
    let store = CatalogStore::load(&config_path)?;

    // The store is read-only, so plain Arc sharing is enough
    let shared_store = Arc::new(store);

    // Initialize the bot
    let bot = Bot::new(bot_token);

    info!("Bot initialized, starting dispatcher");

    // Set up the dispatcher with the shared catalog store
    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint({
            let store = Arc::clone(&shared_store);
            move |bot: Bot, msg: Message| {
                let store = Arc::clone(&store);
                async move { bot::message_handler(bot, msg, store).await }
            }
        }))
        .branch(Update::filter_callback_query().endpoint({
            let store = Arc::clone(&shared_store);
            move |bot: Bot, q: CallbackQuery| {
                let store = Arc::clone(&store);
                async move { bot::callback_handler(bot, q, store).await }
            }
        }));

    Dispatcher::builder(bot, handler)
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
