//! # Product Catalog Module
//!
//! This module provides the product catalog core for the Catalog Telegram bot:
//! a read-once store over a JSON configuration file with display-oriented
//! lookup helpers.
//!
//! ## Features
//!
//! - One-time catalog load from a JSON file, held in memory afterwards
//! - Lookup by positional id and by case-insensitive product name
//! - Schema-less products: arbitrary fields round-trip through formatting
//!   in their original order
//! - Field-selecting formatter producing `Field Name: value` lines, with
//!   dimension-style arrays joined as `10 x 20 x 30`

use std::path::Path;

use heck::ToTitleCase;
use log::{debug, info, warn};
use serde::Deserialize;
use serde_json::Value;

use crate::catalog_errors::CatalogError;

/// Top-level key holding the product list in the configuration file
pub const PRODUCTS_KEY: &str = "products";

/// Separator used when rendering array-valued fields (e.g. dimensions)
pub const DIMENSION_SEPARATOR: &str = " x ";

/// A single catalog product: an ordered mapping from field name to value.
///
/// No schema is enforced beyond the convention that a `name` field exists
/// when name-based lookup should be able to find the product. Field order
/// is the order in the configuration file (serde_json `preserve_order`).
pub type Product = serde_json::Map<String, Value>;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    // A config without a product list is an empty catalog, not an error.
    #[serde(default)]
    products: Vec<Product>,
}

/// Read-only store over the product list of a JSON configuration file.
///
/// Constructed once at startup; all lookups afterwards are infallible and
/// the store can be shared across tasks behind an `Arc` without locking.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: Vec<Product>,
}

impl CatalogStore {
    /// Load a catalog from a JSON configuration file.
    ///
    /// Fails with [`CatalogError::ConfigNotFound`] if the file is missing
    /// and [`CatalogError::ConfigParse`] if it is not valid JSON. A missing
    /// top-level `products` key yields an empty catalog.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use catalog_bot::catalog::CatalogStore;
    ///
    /// let store = CatalogStore::load("cfg.json")?;
    /// println!("{} products loaded", store.get_all_products().len());
    /// # Ok::<(), catalog_bot::catalog_errors::CatalogError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CatalogError::ConfigNotFound(path.display().to_string())
            } else {
                CatalogError::ConfigRead(e.to_string())
            }
        })?;

        let store = Self::from_json(&raw)?;
        info!(
            "Loaded catalog from {} with {} products",
            path.display(),
            store.products.len()
        );
        Ok(store)
    }

    /// Build a catalog from a JSON string with the same shape as the
    /// configuration file.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catalog_bot::catalog::CatalogStore;
    ///
    /// let store = CatalogStore::from_json(r#"{"products": [{"name": "Brelock"}]}"#)?;
    /// assert!(store.get_by_name("brelock").is_some());
    /// # Ok::<(), catalog_bot::catalog_errors::CatalogError>(())
    /// ```
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let config: CatalogFile = serde_json::from_str(raw)?;
        Ok(Self {
            products: config.products,
        })
    }

    /// Look up a product by its positional id.
    ///
    /// Valid ids are `0..len`. Negative and past-the-end ids are an
    /// ordinary miss, not a fault.
    pub fn get_by_id(&self, product_id: i64) -> Option<&Product> {
        usize::try_from(product_id)
            .ok()
            .and_then(|index| self.products.get(index))
    }

    /// Look up a product by name, case-insensitively.
    ///
    /// Comparison is exact apart from case; the first match in catalog
    /// order wins when names repeat. Products without a textual `name`
    /// field never match.
    pub fn get_by_name(&self, product_name: &str) -> Option<&Product> {
        let wanted = product_name.to_lowercase();
        self.products.iter().find(|product| {
            match product.get("name").and_then(Value::as_str) {
                Some(name) => name.to_lowercase() == wanted,
                None => {
                    warn!("Skipping product without a textual 'name' field during name lookup");
                    false
                }
            }
        })
    }

    /// All products in their original configuration order.
    pub fn get_all_products(&self) -> &[Product] {
        &self.products
    }

    /// Display text for the product at `product_id`, or a not-found
    /// message naming the id that missed.
    ///
    /// `fields` selects and orders the rendered fields; `None` renders
    /// every field the product has.
    pub fn get_product_info_by_id(&self, product_id: i64, fields: Option<&[&str]>) -> String {
        match self.get_by_id(product_id) {
            Some(product) => format_product_info(product, fields),
            None => {
                debug!("Product id {product_id} not found in catalog");
                format!("Product with ID {product_id} not found")
            }
        }
    }

    /// Display text for the first product named `product_name`
    /// (case-insensitive), or a not-found message naming the query.
    pub fn get_product_info_by_name(&self, product_name: &str, fields: Option<&[&str]>) -> String {
        match self.get_by_name(product_name) {
            Some(product) => format_product_info(product, fields),
            None => {
                debug!("Product name {product_name:?} not found in catalog");
                format!("Product with name '{product_name}' not found")
            }
        }
    }
}

/// Format a product's fields as display text, one `Field Name: value` line
/// per field.
///
/// With `fields` given, only the named fields are rendered, in the given
/// order; names the product lacks are skipped silently. Without `fields`,
/// every field renders in its configuration order. Array values are joined
/// with [`DIMENSION_SEPARATOR`].
///
/// # Examples
///
/// ```rust
/// use catalog_bot::catalog::{format_product_info, CatalogStore};
///
/// let store = CatalogStore::from_json(r#"{"products": [{"name": "Brelock", "size": [10, 20]}]}"#)?;
/// let product = store.get_by_id(0).unwrap();
/// assert_eq!(format_product_info(product, None), "Name: Brelock\nSize: 10 x 20");
/// # Ok::<(), catalog_bot::catalog_errors::CatalogError>(())
/// ```
pub fn format_product_info(product: &Product, fields: Option<&[&str]>) -> String {
    let lines: Vec<String> = match fields {
        Some(fields) => fields
            .iter()
            .filter_map(|field| {
                product
                    .get(*field)
                    .map(|value| format_field_line(field, value))
            })
            .collect(),
        None => product
            .iter()
            .map(|(field, value)| format_field_line(field, value))
            .collect(),
    };

    lines.join("\n")
}

fn format_field_line(field: &str, value: &Value) -> String {
    format!("{}: {}", field.to_title_case(), render_value(value))
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Array(elements) => elements
            .iter()
            .map(render_scalar)
            .collect::<Vec<_>>()
            .join(DIMENSION_SEPARATOR),
        other => render_scalar(other),
    }
}

// Strings render without their JSON quotes; everything else keeps its
// JSON text form.
fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_name_title_casing() {
        assert_eq!(format_field_line("name", &Value::from("Brelock")), "Name: Brelock");
        assert_eq!(
            format_field_line("time_to_print", &Value::from(5)),
            "Time To Print: 5"
        );
        assert_eq!(
            format_field_line("prise_yes_markup", &Value::from(100)),
            "Prise Yes Markup: 100"
        );
    }

    #[test]
    fn test_render_value_scalars() {
        assert_eq!(render_value(&Value::from("M")), "M");
        assert_eq!(render_value(&Value::from(42)), "42");
        assert_eq!(render_value(&Value::from(2.5)), "2.5");
        assert_eq!(render_value(&Value::Bool(true)), "true");
    }

    #[test]
    fn test_render_value_joins_arrays() {
        let dims = serde_json::json!([10, 20, 30]);
        assert_eq!(render_value(&dims), "10 x 20 x 30");

        let mixed = serde_json::json!(["PLA", 220]);
        assert_eq!(render_value(&mixed), "PLA x 220");
    }
}
