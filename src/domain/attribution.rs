//! Attribution model: how a sale was tied to a listing and a supplier variant.

use crate::domain::{ItemId, VariantResolution};
use serde::{Deserialize, Serialize};

/// Which listing-matcher tier produced the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MatchTier {
    /// `Sale::item_id` equals the product's listing id.
    ItemId,
    /// Sale SKU equals or prefix-matches the product's effective label.
    Label,
    /// Fuzzy title overlap; `score` is the number of shared tokens.
    Title { score: usize },
}

/// Classification of an attribution for the reorder pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttributionOutcome {
    /// Listing and supplier variant both identified.
    Resolved,
    /// Listing identified but no variant mapping entry matched.
    NeedsReview,
    /// No tracked listing matched the sale.
    Unmatched,
    /// The sale carried neither variant text nor SKU.
    NothingToResolve,
}

/// Attribution information for a single sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleAttribution {
    pub sale_key: String,
    /// Listing id of the matched product, if any.
    pub item_id: Option<ItemId>,
    pub tier: Option<MatchTier>,
    pub resolution: Option<VariantResolution>,
    pub outcome: AttributionOutcome,
}

impl SaleAttribution {
    /// Create a SaleAttribution and classify its outcome.
    pub fn new(
        sale_key: String,
        listing: Option<(ItemId, MatchTier)>,
        resolution: Option<VariantResolution>,
    ) -> Self {
        let outcome = match (&listing, &resolution) {
            (None, _) => AttributionOutcome::Unmatched,
            (Some(_), None) => AttributionOutcome::NothingToResolve,
            (Some(_), Some(r)) if r.is_resolved() => AttributionOutcome::Resolved,
            (Some(_), Some(_)) => AttributionOutcome::NeedsReview,
        };
        let (item_id, tier) = match listing {
            Some((id, tier)) => (Some(id), Some(tier)),
            None => (None, None),
        };
        SaleAttribution {
            sale_key,
            item_id,
            tier,
            resolution,
            outcome,
        }
    }

    /// Whether the reorder pipeline can act without a human in the loop.
    pub fn ready_for_reorder(&self) -> bool {
        self.outcome == AttributionOutcome::Resolved
    }
}
