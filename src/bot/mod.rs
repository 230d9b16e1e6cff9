//! Bot module for handling Telegram interactions
//!
//! This module is split into several submodules for better organization:
//! - `message_handler`: Handles incoming commands and product-name queries
//! - `callback_handler`: Handles inline keyboard callback queries
//! - `ui_builder`: Creates keyboards and button labels

pub mod callback_handler;
pub mod message_handler;
pub mod ui_builder;

// Re-export main handler functions for use in main.rs
pub use callback_handler::callback_handler;
pub use message_handler::message_handler;

// Re-export utility functions that might be used elsewhere
pub use ui_builder::{
    create_main_reply_keyboard, create_product_list_keyboard, create_start_keyboard,
};
