//! Message Handler module for processing incoming Telegram messages

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{debug, info};

use crate::catalog::CatalogStore;

use super::ui_builder::{
    create_main_reply_keyboard, create_product_list_keyboard, create_start_keyboard, HELP_BUTTON,
    PRODUCTS_BUTTON,
};

const WELCOME_MESSAGE: &str = "👋 Welcome!\n\n\
    I can tell you about every product in our catalog.\n\n\
    Browse the menu below, or just type a product name and I'll look it up.";

const HELP_MESSAGE: &str = "ℹ️ How to use this bot\n\n\
    /products — open the product menu\n\
    /help — show this message\n\n\
    You can also type a product name (any capitalization) to get its details.";

async fn send_product_menu(bot: &Bot, chat_id: ChatId, store: &CatalogStore) -> Result<()> {
    let products = store.get_all_products();
    if products.is_empty() {
        bot.send_message(chat_id, "The catalog is currently empty.")
            .await?;
        return Ok(());
    }

    bot.send_message(chat_id, "🛍 Our products:")
        .reply_markup(create_product_list_keyboard(products))
        .await?;
    Ok(())
}

async fn handle_text_message(
    bot: &Bot,
    msg: &Message,
    text: &str,
    store: Arc<CatalogStore>,
) -> Result<()> {
    debug!(user_id = %msg.chat.id, message_length = text.len(), "Received text message from user");

    if text == "/start" {
        bot.send_message(msg.chat.id, WELCOME_MESSAGE)
            .reply_markup(create_main_reply_keyboard())
            .await?;
        bot.send_message(msg.chat.id, "Where shall we start?")
            .reply_markup(create_start_keyboard())
            .await?;
    } else if text == "/help" || text == HELP_BUTTON {
        bot.send_message(msg.chat.id, HELP_MESSAGE).await?;
    } else if text == "/products" || text == PRODUCTS_BUTTON {
        send_product_menu(bot, msg.chat.id, &store).await?;
    } else {
        // Anything else is treated as a product-name query.
        info!(user_id = %msg.chat.id, query = %text, "Looking up product by name");
        let info = store.get_product_info_by_name(text, None);
        bot.send_message(msg.chat.id, info).await?;
    }

    Ok(())
}

async fn handle_unsupported_message(bot: &Bot, msg: &Message) -> Result<()> {
    debug!(user_id = %msg.chat.id, "Received unsupported message type from user");

    bot.send_message(
        msg.chat.id,
        "I only understand text. Type a product name or use /products to browse the catalog.",
    )
    .await?;
    Ok(())
}

/// Route an incoming message to the matching handler
pub async fn message_handler(bot: Bot, msg: Message, store: Arc<CatalogStore>) -> Result<()> {
    if let Some(text) = msg.text() {
        handle_text_message(&bot, &msg, text, store).await?;
    } else {
        handle_unsupported_message(&bot, &msg).await?;
    }

    Ok(())
}
