pub mod api;
pub mod config;
pub mod datasource;
pub mod domain;
pub mod engine;
pub mod error;
pub mod orchestration;

pub use config::Config;
pub use datasource::{
    CatalogError, JsonFileCatalog, JsonFileSaleSource, MockCatalog, MockSaleSource,
    ProductCatalog, SaleSource, SaleSourceError,
};
pub use domain::{
    AttributionOutcome, ItemId, MatchTier, Sale, SaleAttribution, Specifics, TrackedProduct,
    VariantMap, VariantMapping, VariantResolution,
};
pub use engine::{match_listing, match_sale_to_product, resolve_variant, specifics_match};
pub use error::AppError;
pub use orchestration::{attribute_sale, attribute_sales, AttributionRun, Orchestrator};
