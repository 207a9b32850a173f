//! Collaborator abstractions: where tracked products and sales come from.
//!
//! The attribution engine never performs I/O itself; these traits are the
//! seams the orchestrator and HTTP layer pull records through.

use crate::domain::{Sale, TrackedProduct};
use async_trait::async_trait;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

pub mod json_file;
pub mod mock;

pub use json_file::{JsonFileCatalog, JsonFileSaleSource};
pub use mock::{MockCatalog, MockSaleSource};

/// Listing store holding the reseller's tracked products.
#[async_trait]
pub trait ProductCatalog: Send + Sync + fmt::Debug {
    /// Load every tracked product, in store order.
    ///
    /// List order matters: it is the tiebreak for label and title matching.
    async fn load_products(&self) -> Result<Vec<TrackedProduct>, CatalogError>;
}

/// Marketplace poller producing sale events.
#[async_trait]
pub trait SaleSource: Send + Sync + fmt::Debug {
    /// Fetch pending sales in arrival order.
    async fn fetch_sales(&self) -> Result<Vec<Sale>, SaleSourceError>;
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog parse error: {0}")]
    Parse(String),
    #[error("duplicate ebayItemId in catalog: {0}")]
    DuplicateItemId(String),
}

#[derive(Debug, Error)]
pub enum SaleSourceError {
    #[error("sale source unavailable: {0}")]
    Unavailable(String),
    #[error("sale source parse error: {0}")]
    Parse(String),
}

/// Reject catalogs that break listing-id uniqueness.
pub fn ensure_unique_item_ids(products: &[TrackedProduct]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(products.len());
    for product in products {
        if !seen.insert(product.ebay_item_id.as_str()) {
            return Err(CatalogError::DuplicateItemId(
                product.ebay_item_id.to_string(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::DuplicateItemId("111".to_string());
        assert_eq!(err.to_string(), "duplicate ebayItemId in catalog: 111");

        let err = SaleSourceError::Unavailable("poller offline".to_string());
        assert_eq!(err.to_string(), "sale source unavailable: poller offline");
    }

    #[test]
    fn test_unique_item_ids() {
        let products = vec![TrackedProduct::new("111"), TrackedProduct::new("222")];
        assert!(ensure_unique_item_ids(&products).is_ok());

        let products = vec![TrackedProduct::new("111"), TrackedProduct::new("111")];
        match ensure_unique_item_ids(&products) {
            Err(CatalogError::DuplicateItemId(id)) => assert_eq!(id, "111"),
            other => panic!("Expected DuplicateItemId, got {:?}", other),
        }
    }
}
