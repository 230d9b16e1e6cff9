//! UI Builder module for creating keyboards and button labels

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup};

use crate::catalog::Product;

/// Reply-keyboard label that opens the product menu
pub const PRODUCTS_BUTTON: &str = "🛍 Products";

/// Reply-keyboard label that shows the help text
pub const HELP_BUTTON: &str = "ℹ️ Help";

/// Telegram renders long button labels poorly, so labels are clipped
const MAX_BUTTON_LABEL_CHARS: usize = 20;

/// Build the label for a product button, falling back to the position
/// when the product has no usable name
pub fn product_button_label(product: &Product, index: usize) -> String {
    let name = product
        .get("name")
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Product {}", index + 1));

    if name.chars().count() > MAX_BUTTON_LABEL_CHARS {
        let clipped: String = name.chars().take(MAX_BUTTON_LABEL_CHARS - 3).collect();
        format!("{clipped}...")
    } else {
        name
    }
}

/// Create the inline keyboard shown with the welcome message
pub fn create_start_keyboard() -> InlineKeyboardMarkup {
    let buttons = vec![
        vec![InlineKeyboardButton::callback(
            "🛍 Browse products",
            "catalog",
        )],
        vec![InlineKeyboardButton::callback(
            "ℹ️ About this bot",
            "about",
        )],
    ];

    InlineKeyboardMarkup::new(buttons)
}

/// Create the inline product menu, one button per catalog product
///
/// Callback data carries the product's positional id (`product_<index>`)
/// so the callback handler can answer from the shared store.
pub fn create_product_list_keyboard(products: &[Product]) -> InlineKeyboardMarkup {
    let buttons: Vec<Vec<InlineKeyboardButton>> = products
        .iter()
        .enumerate()
        .map(|(i, product)| {
            vec![InlineKeyboardButton::callback(
                product_button_label(product, i),
                format!("product_{i}"),
            )]
        })
        .collect();

    InlineKeyboardMarkup::new(buttons)
}

/// Create the back-to-menu keyboard shown under a product's details
pub fn create_back_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        "⬅️ Back to products",
        "catalog",
    )]])
}

/// Create the persistent reply keyboard with the main actions
pub fn create_main_reply_keyboard() -> KeyboardMarkup {
    let buttons = vec![vec![
        KeyboardButton::new(PRODUCTS_BUTTON),
        KeyboardButton::new(HELP_BUTTON),
    ]];

    KeyboardMarkup::new(buttons)
        .resize_keyboard()
        .input_field_placeholder("Pick an action or type a product name")
}
