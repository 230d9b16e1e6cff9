//! # Catalog Error Types Module
//!
//! This module defines the error types raised while loading the product
//! catalog from its JSON configuration file. Loading is the only fallible
//! phase: once a [`crate::catalog::CatalogStore`] is constructed, lookups
//! never fail, they return "not found" outcomes instead.

/// Errors that can occur while constructing a catalog store
#[derive(Debug, Clone)]
pub enum CatalogError {
    /// The configuration file does not exist at the given path
    ConfigNotFound(String),
    /// The configuration file could not be read
    ConfigRead(String),
    /// The configuration file exists but is not valid JSON
    ConfigParse(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::ConfigNotFound(path) => {
                write!(f, "Config file {path} not found")
            }
            CatalogError::ConfigRead(msg) => write!(f, "Failed to read config file: {msg}"),
            CatalogError::ConfigParse(msg) => write!(f, "Invalid JSON in config file: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::ConfigParse(err.to_string())
    }
}
