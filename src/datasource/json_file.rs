//! JSON file backed catalog and sale source.

use super::{ensure_unique_item_ids, CatalogError, ProductCatalog, SaleSource, SaleSourceError};
use crate::domain::{Sale, TrackedProduct};
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads the tracked products list from a JSON array on disk.
///
/// The file is re-read on every load so edits made by the listing store
/// are picked up without a restart.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn parse(bytes: &[u8]) -> Result<Vec<TrackedProduct>, CatalogError> {
        let products: Vec<TrackedProduct> =
            serde_json::from_slice(bytes).map_err(|e| CatalogError::Parse(e.to_string()))?;
        ensure_unique_item_ids(&products)?;
        Ok(products)
    }
}

#[async_trait]
impl ProductCatalog for JsonFileCatalog {
    async fn load_products(&self) -> Result<Vec<TrackedProduct>, CatalogError> {
        let bytes = tokio::fs::read(&self.path).await?;
        let products = Self::parse(&bytes)?;
        tracing::debug!(path = %self.path.display(), count = products.len(), "Loaded catalog");
        Ok(products)
    }
}

/// Reads pending sales from a JSON array on disk, in file order.
#[derive(Debug, Clone)]
pub struct JsonFileSaleSource {
    path: PathBuf,
}

impl JsonFileSaleSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SaleSource for JsonFileSaleSource {
    async fn fetch_sales(&self) -> Result<Vec<Sale>, SaleSourceError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| SaleSourceError::Unavailable(format!("{}: {}", self.path.display(), e)))?;
        serde_json::from_slice(&bytes).map_err(|e| SaleSourceError::Parse(e.to_string()))
    }
}
