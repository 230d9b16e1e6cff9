//! # Catalog Telegram Bot
//!
//! A Telegram bot that serves product lookups from a JSON catalog file,
//! with inline keyboard navigation and a formatted text answer per product.

pub mod bot;
pub mod catalog;
pub mod catalog_errors;
