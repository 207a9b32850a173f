//! Tracked products and their supplier-side variant mappings.

use crate::domain::primitives::{first_non_empty, non_empty};
use crate::domain::ItemId;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Links a marketplace item-specifics combination (or SKU) to a supplier variant.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VariantMapping {
    /// Item-specifics the sale's derived specifics are compared against.
    #[serde(deserialize_with = "lenient_specifics")]
    pub ebay_specifics: Option<BTreeMap<String, String>>,
    /// Exact SKU matched against `Sale::sku`.
    pub sku: Option<String>,
    pub source_variant_id: Option<String>,
    /// Human label of the variant on the supplier side.
    pub source_text: Option<String>,
    pub source_url: Option<String>,
}

impl VariantMapping {
    pub fn sku(&self) -> Option<&str> {
        non_empty(self.sku.as_deref())
    }
}

/// Numeric and boolean specifics are kept as their JSON text; nulls and
/// nested values are dropped. A non-object yields `None`.
fn lenient_specifics<'de, D>(
    deserializer: D,
) -> Result<Option<BTreeMap<String, String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Object(entries)) => Some(
            entries
                .into_iter()
                .filter_map(|(key, value)| match value {
                    Value::String(s) => Some((key, s)),
                    Value::Number(n) => Some((key, n.to_string())),
                    Value::Bool(b) => Some((key, b.to_string())),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}

/// Supplier-side variant lookup, in one of the two shapes the listing store holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariantMap {
    /// Ordered list, searched by specifics then by SKU.
    Array(Vec<VariantMapping>),
    /// Keyed by variant text (or `" / "`-joined specifics values).
    Record(BTreeMap<String, VariantMapping>),
}

/// An internally tracked listing linked to its supplier source.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackedProduct {
    /// Stable marketplace listing identifier; unique across tracked products.
    pub ebay_item_id: ItemId,
    pub custom_label: Option<String>,
    pub sku: Option<String>,
    pub ebay_title: Option<String>,
    pub title: Option<String>,
    /// Supplier product page URL.
    pub source_url: Option<String>,
    #[serde(deserialize_with = "lenient_variant_map")]
    pub variant_map: Option<VariantMap>,
}

impl TrackedProduct {
    pub fn new(ebay_item_id: impl Into<String>) -> Self {
        Self {
            ebay_item_id: ItemId::new(ebay_item_id),
            ..Default::default()
        }
    }

    /// `custom_label` if non-empty, else `sku`, else `""`.
    pub fn effective_label(&self) -> &str {
        first_non_empty([self.custom_label.as_deref(), self.sku.as_deref()])
    }

    /// `ebay_title` if non-empty, else `title`, else `""`.
    pub fn effective_title(&self) -> &str {
        first_non_empty([self.ebay_title.as_deref(), self.title.as_deref()])
    }

    pub fn source_url(&self) -> Option<&str> {
        non_empty(self.source_url.as_deref())
    }
}

/// Degrades per entry: unparseable mappings are skipped so their siblings
/// stay usable. A `variantMap` that is neither a list nor an object becomes
/// `None` rather than rejecting the whole product.
fn lenient_variant_map<'de, D>(deserializer: D) -> Result<Option<VariantMap>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => Some(VariantMap::Array(
            items
                .into_iter()
                .enumerate()
                .filter_map(|(index, item)| parse_mapping(item, &index.to_string()))
                .collect(),
        )),
        Some(Value::Object(entries)) => Some(VariantMap::Record(
            entries
                .into_iter()
                .filter_map(|(key, item)| parse_mapping(item, &key).map(|m| (key, m)))
                .collect(),
        )),
        Some(other) => {
            tracing::warn!(value = %other, "Ignoring malformed variantMap");
            None
        }
    })
}

fn parse_mapping(value: Value, entry: &str) -> Option<VariantMapping> {
    match serde_json::from_value::<VariantMapping>(value) {
        Ok(mapping) => Some(mapping),
        Err(e) => {
            tracing::warn!(entry = %entry, error = %e, "Skipping malformed variantMap entry");
            None
        }
    }
}
