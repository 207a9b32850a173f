//! In-memory catalog and sale source for testing without files.

use super::{CatalogError, ProductCatalog, SaleSource, SaleSourceError};
use crate::domain::{Sale, TrackedProduct};
use async_trait::async_trait;

/// Mock catalog that returns predefined products.
#[derive(Debug, Clone, Default)]
pub struct MockCatalog {
    products: Vec<TrackedProduct>,
    fail: bool,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product to the mock catalog.
    pub fn with_product(mut self, product: TrackedProduct) -> Self {
        self.products.push(product);
        self
    }

    /// Add multiple products to the mock catalog.
    pub fn with_products(mut self, products: Vec<TrackedProduct>) -> Self {
        self.products.extend(products);
        self
    }

    /// Make every load fail, to exercise error paths.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

#[async_trait]
impl ProductCatalog for MockCatalog {
    async fn load_products(&self) -> Result<Vec<TrackedProduct>, CatalogError> {
        if self.fail {
            return Err(CatalogError::Parse("mock catalog failure".to_string()));
        }
        Ok(self.products.clone())
    }
}

/// Mock sale source that returns predefined sales.
#[derive(Debug, Clone, Default)]
pub struct MockSaleSource {
    sales: Vec<Sale>,
}

impl MockSaleSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sale(mut self, sale: Sale) -> Self {
        self.sales.push(sale);
        self
    }

    pub fn with_sales(mut self, sales: Vec<Sale>) -> Self {
        self.sales.extend(sales);
        self
    }
}

#[async_trait]
impl SaleSource for MockSaleSource {
    async fn fetch_sales(&self) -> Result<Vec<Sale>, SaleSourceError> {
        Ok(self.sales.clone())
    }
}
