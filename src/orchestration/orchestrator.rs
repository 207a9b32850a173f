use crate::datasource::{CatalogError, ProductCatalog, SaleSource, SaleSourceError};
use crate::orchestration::attribution::{attribute_sales, AttributionRun};
use std::sync::Arc;
use thiserror::Error;

/// Pulls pending sales and the tracked catalog, then attributes the batch.
#[derive(Debug, Clone)]
pub struct Orchestrator {
    catalog: Arc<dyn ProductCatalog>,
    sales: Arc<dyn SaleSource>,
}

impl Orchestrator {
    pub fn new(catalog: Arc<dyn ProductCatalog>, sales: Arc<dyn SaleSource>) -> Self {
        Self { catalog, sales }
    }

    /// Attribute every pending sale in arrival order.
    ///
    /// The catalog is loaded once per run so every sale in the batch sees
    /// the same product list.
    pub async fn run(&self) -> Result<AttributionRun, OrchestrationError> {
        let products = self.catalog.load_products().await?;
        let sales = self.sales.fetch_sales().await?;

        tracing::info!(
            sales = sales.len(),
            products = products.len(),
            "Starting attribution run"
        );

        Ok(attribute_sales(&sales, &products))
    }
}

#[derive(Debug, Error)]
pub enum OrchestrationError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Sales(#[from] SaleSourceError),
}
