//! Resolving which supplier-side variant a sale purchased.

use crate::domain::primitives::first_non_empty;
use crate::domain::{
    Sale, Specifics, TrackedProduct, VariantMap, VariantMapping, VariantResolution,
};
use crate::engine::specifics::{parse_variant_specifics, specifics_match};
use std::collections::BTreeMap;

/// Separator between specifics values in record-shaped variant map keys.
pub const RECORD_KEY_SEPARATOR: &str = " / ";

/// Resolve the purchased variant against the matched product, if any.
///
/// Returns `None` when the sale carries neither variant text nor a SKU.
pub fn resolve_variant(
    sale: &Sale,
    product: Option<&TrackedProduct>,
) -> Option<VariantResolution> {
    if sale.variant().is_none() && sale.sku().is_none() {
        return None;
    }

    let ebay_variant = sale.variant().unwrap_or("").to_string();
    let sku = sale.sku().unwrap_or("").to_string();

    let Some(product) = product else {
        return Some(VariantResolution::Fallback {
            ebay_variant,
            sku,
            source_url: None,
            specifics: None,
        });
    };

    let product_url = product.source_url().unwrap_or("");

    let Some(variant_map) = product.variant_map.as_ref() else {
        return Some(VariantResolution::Fallback {
            ebay_variant,
            sku,
            source_url: Some(product_url.to_string()),
            specifics: None,
        });
    };

    let specifics = parse_variant_specifics(sale.variant().unwrap_or(""));

    let hit = match variant_map {
        VariantMap::Array(items) => find_in_array(items, sale, &specifics),
        VariantMap::Record(entries) => find_in_record(entries, sale, &specifics),
    };

    let resolution = match hit {
        Some(mapping) => VariantResolution::Resolved {
            source_variant_id: mapping.source_variant_id.clone().unwrap_or_default(),
            source_variant_text: mapping.source_text.clone().unwrap_or_default(),
            source_url: first_non_empty([mapping.source_url.as_deref(), Some(product_url)])
                .to_string(),
            specifics,
        },
        None => {
            tracing::debug!(
                item_id = %product.ebay_item_id,
                variant = %ebay_variant,
                sku = %sku,
                "No variant mapping entry matched sale"
            );
            VariantResolution::Fallback {
                ebay_variant,
                sku,
                source_url: Some(product_url.to_string()),
                specifics: Some(specifics),
            }
        }
    };

    Some(resolution)
}

/// First mapping whose specifics match, else whose SKU equals the sale's exactly.
fn find_in_array<'a>(
    items: &'a [VariantMapping],
    sale: &Sale,
    specifics: &Specifics,
) -> Option<&'a VariantMapping> {
    items.iter().find(|mapping| {
        let by_specifics = mapping.ebay_specifics.is_some()
            && specifics_match(Some(specifics), mapping.ebay_specifics.as_ref());
        let by_sku = matches!(
            (sale.sku(), mapping.sku()),
            (Some(sale_sku), Some(mapping_sku)) if sale_sku == mapping_sku
        );
        by_specifics || by_sku
    })
}

/// Keyed by the raw variant text (or SKU), then by the joined specifics values.
fn find_in_record<'a>(
    entries: &'a BTreeMap<String, VariantMapping>,
    sale: &Sale,
    specifics: &Specifics,
) -> Option<&'a VariantMapping> {
    let raw_key = first_non_empty([sale.variant(), sale.sku()]);
    entries.get(raw_key).or_else(|| {
        let joined = specifics.values().collect::<Vec<_>>().join(RECORD_KEY_SEPARATOR);
        entries.get(&joined)
    })
}
