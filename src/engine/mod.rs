//! Pure computation engine for deterministic sale attribution.
//!
//! Nothing in here performs I/O or holds state; every function can be
//! called concurrently on shared inputs.

pub mod listing_matcher;
pub mod specifics;
pub mod variant_resolver;

pub use listing_matcher::{match_listing, match_sale_to_product, ListingMatch};
pub use specifics::{parse_variant_specifics, specifics_match};
pub use variant_resolver::resolve_variant;
