//! # Catalog Commands
//!
//! Browse/search the product grid and the bulk-buyer quick picks.

use tracing::debug;

use crate::error::ApiError;
use aura_catalog::Catalog;
use aura_core::types::{Category, Product};
use aura_core::validation::{validate_product_id, validate_search_query};

/// Lists products for the shop grid: optional category chip plus a
/// case-insensitive name search.
pub fn browse_products(
    catalog: &Catalog,
    category: Option<Category>,
    query: &str,
) -> Result<Vec<Product>, ApiError> {
    let query = validate_search_query(query)?;
    debug!(?category, query = %query, "browse_products command");

    Ok(catalog
        .browse(category, &query)
        .into_iter()
        .cloned()
        .collect())
}

/// Fetches a single product by catalog id.
pub fn get_product(catalog: &Catalog, product_id: &str) -> Result<Product, ApiError> {
    validate_product_id(product_id)?;
    debug!(product_id = %product_id, "get_product command");

    catalog
        .find(product_id)
        .cloned()
        .ok_or_else(|| ApiError::not_found("Product", product_id))
}

/// The curated frequently-ordered strip on the bulk dashboard.
pub fn frequent_bulk_picks(catalog: &Catalog) -> Vec<Product> {
    debug!("frequent_bulk_picks command");
    catalog.frequent_bulk_picks().into_iter().cloned().collect()
}
