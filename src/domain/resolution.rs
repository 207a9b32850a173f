//! Variant resolution result handed to the reorder pipeline.

use crate::domain::Specifics;
use serde::{Deserialize, Serialize};

/// Which supplier-side variant a sale corresponds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum VariantResolution {
    /// A variant mapping entry matched the sale.
    #[serde(rename_all = "camelCase")]
    Resolved {
        source_variant_id: String,
        source_variant_text: String,
        source_url: String,
        specifics: Specifics,
    },
    /// No mapping entry matched; carries what the marketplace reported.
    ///
    /// `source_url` is `None` only when no product was matched at all, and
    /// `specifics` is `None` unless the product had a variant map.
    #[serde(rename_all = "camelCase")]
    Fallback {
        ebay_variant: String,
        sku: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        source_url: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        specifics: Option<Specifics>,
    },
}

impl VariantResolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, VariantResolution::Resolved { .. })
    }

    pub fn source_url(&self) -> Option<&str> {
        match self {
            VariantResolution::Resolved { source_url, .. } => Some(source_url.as_str()),
            VariantResolution::Fallback { source_url, .. } => source_url.as_deref(),
        }
    }

    pub fn specifics(&self) -> Option<&Specifics> {
        match self {
            VariantResolution::Resolved { specifics, .. } => Some(specifics),
            VariantResolution::Fallback { specifics, .. } => specifics.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_fallback_omits_source_url() {
        let r = VariantResolution::Fallback {
            ebay_variant: String::new(),
            sku: "X1".to_string(),
            source_url: None,
            specifics: None,
        };
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "fallback", "ebayVariant": "", "sku": "X1"})
        );
        assert!(!r.is_resolved());
        assert_eq!(r.source_url(), None);
    }

    #[test]
    fn test_resolved_serialization() {
        let specifics: Specifics = [("Color", "Red")].into_iter().collect();
        let r = VariantResolution::Resolved {
            source_variant_id: "v1".to_string(),
            source_variant_text: String::new(),
            source_url: "u".to_string(),
            specifics,
        };
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["kind"], "resolved");
        assert_eq!(json["sourceVariantId"], "v1");
        assert_eq!(json["specifics"]["Color"], "Red");

        let back: VariantResolution = serde_json::from_value(json).unwrap();
        assert_eq!(back, r);
    }
}
