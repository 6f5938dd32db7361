//! Named, ordered export of every locator attribute.

use std::collections::BTreeMap;

use serde::Serialize;
use url::form_urlencoded;

use super::Locator;

/// Attribute name to value, ordered alphabetically by name.
///
/// Holds every stored field of a [`Locator`] plus the computed `source`
/// (canonical form) and `id` (canonical form, URL-escaped).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Attributes(BTreeMap<&'static str, String>);

impl Attributes {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Attribute names in alphabetical order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keep only the requested attributes that exist.
    pub fn select<'a, I>(&self, keys: I) -> Attributes
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut selected = BTreeMap::new();
        for key in keys {
            if let Some((k, v)) = self.0.get_key_value(key) {
                selected.insert(*k, v.clone());
            }
        }
        Attributes(selected)
    }
}

impl Locator {
    /// Export every attribute by name.
    pub fn attributes(&self) -> Attributes {
        let mut map: BTreeMap<&'static str, String> = Self::FIELDS
            .iter()
            .filter_map(|&key| self.field(key).map(|value| (key, value.to_string())))
            .collect();

        map.insert("id", self.id());
        map.insert("source", self.source());

        Attributes(map)
    }

    /// The canonical form escaped for use as an identifier.
    pub fn id(&self) -> String {
        form_urlencoded::byte_serialize(self.to_string().as_bytes()).collect()
    }
}
