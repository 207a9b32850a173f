//! Insertion-ordered item specifics (Color, Size, ...).

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Key/value attribute pairs describing a purchased variant.
///
/// Keeps first-insertion order: record-shaped variant maps are keyed by the
/// values joined in that order. Re-inserting a key replaces its value in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Specifics(Vec<(String, String)>);

impl Specifics {
    pub fn new() -> Self {
        Specifics(Vec::new())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(_, v)| v.as_str())
    }
}

impl<K, V> FromIterator<(K, V)> for Specifics
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut specifics = Specifics::new();
        for (k, v) in iter {
            specifics.insert(k, v);
        }
        specifics
    }
}

impl Serialize for Specifics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for Specifics {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SpecificsVisitor;

        impl<'de> Visitor<'de> for SpecificsVisitor {
            type Value = Specifics;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of string specifics")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Specifics, A::Error> {
                let mut specifics = Specifics::new();
                while let Some((k, v)) = access.next_entry::<String, String>()? {
                    specifics.insert(k, v);
                }
                Ok(specifics)
            }
        }

        deserializer.deserialize_map(SpecificsVisitor)
    }
}
