//! Sale type reported by the marketplace poller.

use crate::domain::primitives::non_empty;
use crate::domain::ItemId;
use serde::{Deserialize, Serialize};

/// A sale event as reported by the marketplace.
///
/// Every field is optional: the poller forwards whatever the marketplace
/// payload carried, and the engine treats empty strings as absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Sale {
    /// Marketplace listing identifier.
    pub item_id: Option<ItemId>,
    /// SKU / custom label of the exact variant sold.
    pub sku: Option<String>,
    /// Listing title text.
    pub title: Option<String>,
    /// Free-text variant description, e.g. `"Color: Red; Size: XL"`.
    pub variant: Option<String>,
    /// Marketplace order reference, passed through to reordering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

impl Sale {
    pub fn item_id(&self) -> Option<&str> {
        non_empty(self.item_id.as_ref().map(ItemId::as_str))
    }

    pub fn sku(&self) -> Option<&str> {
        non_empty(self.sku.as_deref())
    }

    pub fn title(&self) -> Option<&str> {
        non_empty(self.title.as_deref())
    }

    pub fn variant(&self) -> Option<&str> {
        non_empty(self.variant.as_deref())
    }

    pub fn order_id(&self) -> Option<&str> {
        non_empty(self.order_id.as_deref())
    }

    /// Generate a stable key for this sale.
    ///
    /// Priority: `order_id` (if present) > hash of the matching signals.
    pub fn sale_key(&self) -> String {
        if let Some(order_id) = self.order_id() {
            return format!("order:{}:{}", order_id, self.item_id().unwrap_or(""));
        }

        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();
        for field in [self.item_id(), self.sku(), self.title(), self.variant()] {
            hasher.update(field.unwrap_or(""));
            hasher.update([0x1fu8]);
        }
        let hash = hasher.finalize();
        format!("hash:{}", hex::encode(&hash[..16]))
    }
}
