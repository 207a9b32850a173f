//! Domain types for sale attribution.
//!
//! This module provides:
//! - Domain primitives: ItemId and empty-as-absent text coercion
//! - Sale and TrackedProduct records as produced by the poller and listing store
//! - The VariantMap tagged union over the two variant-mapping shapes
//! - VariantResolution and SaleAttribution results

pub mod attribution;
pub mod primitives;
pub mod product;
pub mod resolution;
pub mod sale;
pub mod specifics;

pub use attribution::{AttributionOutcome, MatchTier, SaleAttribution};
pub use primitives::ItemId;
pub use product::{TrackedProduct, VariantMap, VariantMapping};
pub use resolution::VariantResolution;
pub use sale::Sale;
pub use specifics::Specifics;
