//! Callback Handler module for processing inline keyboard callback queries

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{debug, error};

use crate::catalog::CatalogStore;

use super::ui_builder::{create_back_keyboard, create_product_list_keyboard};

const ABOUT_MESSAGE: &str = "ℹ️ This bot answers product questions straight from our catalog.\n\n\
    Use /products to browse, or type a product name to look it up.";

/// Handle callback queries from inline keyboards
pub async fn callback_handler(bot: Bot, q: CallbackQuery, store: Arc<CatalogStore>) -> Result<()> {
    debug!(user_id = %q.from.id, "Received callback query from user");

    let data = q.data.as_deref().unwrap_or("");
    if let Some(msg) = &q.message {
        if let Some(index) = data.strip_prefix("product_") {
            // Out-of-range and malformed indexes fall through to the
            // store's not-found message.
            let product_id: i64 = index.parse().unwrap_or(-1);
            let info = store.get_product_info_by_id(product_id, None);

            if let Err(e) = bot
                .edit_message_text(msg.chat().id, msg.id(), info)
                .reply_markup(create_back_keyboard())
                .await
            {
                error!(user_id = %q.from.id, error = %e, "Failed to show product details");
            }
        } else if data == "catalog" {
            let products = store.get_all_products();
            if products.is_empty() {
                bot.send_message(msg.chat().id, "The catalog is currently empty.")
                    .await?;
            } else if let Err(e) = bot
                .edit_message_text(msg.chat().id, msg.id(), "🛍 Our products:")
                .reply_markup(create_product_list_keyboard(products))
                .await
            {
                error!(user_id = %q.from.id, error = %e, "Failed to show product menu");
            }
        } else if data == "about" {
            bot.send_message(msg.chat().id, ABOUT_MESSAGE).await?;
        } else {
            // Stale or unknown callback data - ignore silently
            debug!(user_id = %q.from.id, data = %data, "Ignoring unknown callback data");
        }
    }

    // Answer the callback query to remove the loading state
    bot.answer_callback_query(q.id).await?;

    Ok(())
}
