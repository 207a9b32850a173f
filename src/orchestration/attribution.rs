//! Composing listing match and variant resolution into sale attributions.

use crate::domain::{AttributionOutcome, Sale, SaleAttribution, TrackedProduct};
use crate::engine::{match_listing, resolve_variant};
use serde::{Deserialize, Serialize};

/// Per-outcome counts for a batch of attributions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub total: usize,
    pub resolved: usize,
    pub needs_review: usize,
    pub unmatched: usize,
    pub nothing_to_resolve: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: AttributionOutcome) {
        self.total += 1;
        match outcome {
            AttributionOutcome::Resolved => self.resolved += 1,
            AttributionOutcome::NeedsReview => self.needs_review += 1,
            AttributionOutcome::Unmatched => self.unmatched += 1,
            AttributionOutcome::NothingToResolve => self.nothing_to_resolve += 1,
        }
    }
}

/// Attributions for a batch of sales, in the order the sales arrived.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributionRun {
    pub attributions: Vec<SaleAttribution>,
    pub summary: RunSummary,
}

/// Attribute a single sale against the tracked products.
pub fn attribute_sale(sale: &Sale, products: &[TrackedProduct]) -> SaleAttribution {
    let listing = match_listing(sale, products);
    let resolution = resolve_variant(sale, listing.map(|m| m.product));

    let attribution = SaleAttribution::new(
        sale.sale_key(),
        listing.map(|m| (m.product.ebay_item_id.clone(), m.tier)),
        resolution,
    );

    match attribution.outcome {
        AttributionOutcome::Resolved => {}
        AttributionOutcome::NeedsReview => tracing::info!(
            sale_key = %attribution.sale_key,
            item_id = ?attribution.item_id,
            "Sale matched a listing but no variant mapping; flagging for review"
        ),
        AttributionOutcome::Unmatched => tracing::warn!(
            sale_key = %attribution.sale_key,
            sku = ?sale.sku(),
            "Sale matched no tracked listing; manual reconciliation required"
        ),
        AttributionOutcome::NothingToResolve => tracing::info!(
            sale_key = %attribution.sale_key,
            "Sale carried no variant or SKU"
        ),
    }

    attribution
}

/// Attribute sales in arrival order and summarize the outcomes.
pub fn attribute_sales(sales: &[Sale], products: &[TrackedProduct]) -> AttributionRun {
    let mut run = AttributionRun {
        attributions: Vec::with_capacity(sales.len()),
        summary: RunSummary::default(),
    };

    for sale in sales {
        let attribution = attribute_sale(sale, products);
        run.summary.record(attribution.outcome);
        run.attributions.push(attribution);
    }

    tracing::info!(
        total = run.summary.total,
        resolved = run.summary.resolved,
        needs_review = run.summary.needs_review,
        unmatched = run.summary.unmatched,
        "Attribution run complete"
    );

    run
}
