//! Domain primitives: ItemId and optional-text coercion helpers.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Marketplace listing identifier.
///
/// Accepts either a JSON string or an integer; marketplace payloads use both.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct ItemId(pub String);

impl ItemId {
    /// Create an ItemId from a string.
    pub fn new(id: impl Into<String>) -> Self {
        ItemId(id.into())
    }

    /// Get the identifier as a string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ItemIdVisitor;

        impl<'de> Visitor<'de> for ItemIdVisitor {
            type Value = ItemId;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a listing id as a string or integer")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ItemId, E> {
                Ok(ItemId::new(v))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<ItemId, E> {
                Ok(ItemId(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<ItemId, E> {
                Ok(ItemId(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<ItemId, E> {
                Ok(ItemId(v.to_string()))
            }
        }

        deserializer.deserialize_any(ItemIdVisitor)
    }
}

/// Treat an empty string exactly like an absent one.
///
/// Upstream producers are inconsistent about `null` vs `""`, so every
/// optional text field goes through this before it is used as a signal.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// First non-empty candidate, or `""` when none is set.
pub fn first_non_empty<'a, I>(candidates: I) -> &'a str
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .find_map(non_empty)
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_swallows_empty_string() {
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("0")), Some("0"));
    }

    #[test]
    fn test_first_non_empty_order() {
        assert_eq!(first_non_empty([Some(""), Some("b"), Some("c")]), "b");
        assert_eq!(first_non_empty([None, Some("")]), "");
        assert_eq!(first_non_empty([Some("a"), None]), "a");
    }

    #[test]
    fn test_item_id_display_and_serde() {
        let id = ItemId::new("123456789012");
        assert_eq!(id.to_string(), "123456789012");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"123456789012\"");
    }

    #[test]
    fn test_item_id_accepts_integers() {
        let id: ItemId = serde_json::from_str("123456789012").unwrap();
        assert_eq!(id, ItemId::new("123456789012"));

        let id: ItemId = serde_json::from_str("\"v1|123\"").unwrap();
        assert_eq!(id.as_str(), "v1|123");

        assert!(serde_json::from_str::<ItemId>("1.5").is_err());
        assert!(serde_json::from_str::<ItemId>("[1]").is_err());
    }
}
