//! Matching a marketplace sale to one of the tracked listings.
//!
//! Tiers are tried in order and the first tier to produce a match wins:
//! exact listing id, SKU / custom label, then fuzzy title overlap.

use crate::domain::{MatchTier, Sale, TrackedProduct};

/// Titles at or below this many characters are never fuzzy-matched.
pub const MIN_FUZZY_TITLE_CHARS: usize = 10;
/// Title tokens at or below this many characters are ignored.
pub const MIN_TOKEN_CHARS: usize = 3;
/// Cap on the number of shared tokens a fuzzy match must reach.
pub const MAX_REQUIRED_TOKENS: usize = 3;

/// A matched listing together with the tier that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingMatch<'a> {
    pub product: &'a TrackedProduct,
    pub tier: MatchTier,
}

pub fn match_sale_to_product<'a>(
    sale: &Sale,
    products: &'a [TrackedProduct],
) -> Option<&'a TrackedProduct> {
    match_listing(sale, products).map(|m| m.product)
}

pub fn match_listing<'a>(sale: &Sale, products: &'a [TrackedProduct]) -> Option<ListingMatch<'a>> {
    if products.is_empty() {
        return None;
    }

    let found = match_by_item_id(sale, products)
        .or_else(|| match_by_label(sale, products))
        .or_else(|| match_by_title(sale, products));

    match &found {
        Some(m) => tracing::debug!(
            item_id = %m.product.ebay_item_id,
            tier = ?m.tier,
            "Sale matched tracked listing"
        ),
        None => tracing::debug!(
            candidates = products.len(),
            "Sale matched no tracked listing"
        ),
    }

    found
}

fn match_by_item_id<'a>(sale: &Sale, products: &'a [TrackedProduct]) -> Option<ListingMatch<'a>> {
    let item_id = sale.item_id()?;
    products
        .iter()
        .find(|p| p.ebay_item_id.as_str() == item_id)
        .map(|product| ListingMatch {
            product,
            tier: MatchTier::ItemId,
        })
}

/// Equal labels, or one a prefix of the other, compared case-insensitively.
fn match_by_label<'a>(sale: &Sale, products: &'a [TrackedProduct]) -> Option<ListingMatch<'a>> {
    let sale_sku = sale.sku()?.to_lowercase();

    products
        .iter()
        .find(|p| {
            let label = p.effective_label().to_lowercase();
            !label.is_empty() && (label.starts_with(&sale_sku) || sale_sku.starts_with(&label))
        })
        .map(|product| ListingMatch {
            product,
            tier: MatchTier::Label,
        })
}

fn match_by_title<'a>(sale: &Sale, products: &'a [TrackedProduct]) -> Option<ListingMatch<'a>> {
    let title = sale.title()?;
    if title.chars().count() <= MIN_FUZZY_TITLE_CHARS {
        return None;
    }

    let tokens = title_tokens(title);
    let required = required_score(tokens.len());

    let mut best: Option<(usize, &TrackedProduct)> = None;
    for product in products {
        let score = title_score(&tokens, product.effective_title());
        let beats_best = best.map(|(s, _)| score > s).unwrap_or(score > 0);
        if beats_best && score >= required {
            best = Some((score, product));
        }
    }

    best.map(|(score, product)| ListingMatch {
        product,
        tier: MatchTier::Title { score },
    })
}

/// Lower-cased whitespace tokens longer than [`MIN_TOKEN_CHARS`].
pub fn title_tokens(title: &str) -> Vec<String> {
    title
        .split_whitespace()
        .map(str::to_lowercase)
        .filter(|t| t.chars().count() > MIN_TOKEN_CHARS)
        .collect()
}

/// `min(3, ceil(token_count / 2))`.
pub fn required_score(token_count: usize) -> usize {
    MAX_REQUIRED_TOKENS.min(token_count.div_ceil(2))
}

/// Number of tokens occurring anywhere in the lower-cased candidate title.
pub fn title_score(tokens: &[String], candidate_title: &str) -> usize {
    let haystack = candidate_title.to_lowercase();
    tokens
        .iter()
        .filter(|t| haystack.contains(t.as_str()))
        .count()
}
