//! Read-only item catalog.

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::{Item, ItemName, Rarity};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("duplicate item name in catalog: {0}")]
    DuplicateName(ItemName),
    #[error("catalog contains no items")]
    Empty,
}

/// Ordered sequence of items, each keyed by a unique name.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    items: Vec<Item>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate names.
    pub fn new(items: Vec<Item>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(&item.name) {
                return Err(CatalogError::DuplicateName(item.name.clone()));
            }
        }
        Ok(Self { items })
    }

    /// Parse a catalog file:
    ///
    /// ```toml
    /// [[items]]
    /// name = "Tralalero Tralala"
    /// price = 149.99
    /// rarity = "brainrot_god"
    /// ```
    pub fn from_toml_str(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(raw)?;
        Self::new(file.items)
    }

    /// The catalog shipped with the binary.
    #[must_use]
    pub fn builtin() -> Self {
        let items = BUILTIN
            .iter()
            .filter_map(|(name, price, rarity)| {
                ItemName::new(*name)
                    .ok()
                    .map(|name| Item::new(name, *price, *rarity))
            })
            .collect();
        Self { items }
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, name: &ItemName) -> Option<&Item> {
        self.items.iter().find(|item| &item.name == name)
    }

    /// Items whose name contains `query`, case-insensitively, in catalog order.
    ///
    /// A blank query matches everything.
    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Item> + 'a {
        let needle = query.trim().to_lowercase();
        self.items
            .iter()
            .filter(move |item| needle.is_empty() || item.name.as_str().to_lowercase().contains(&needle))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

const BUILTIN: &[(&str, f64, Rarity)] = &[
    ("La Grande Combinasion", 249.99, Rarity::Secret),
    ("Graipuss Medussi", 219.99, Rarity::Secret),
    ("Los Tralaleritos", 189.99, Rarity::Secret),
    ("Garama and Madundung", 179.99, Rarity::Secret),
    ("La Vacca Saturno Saturnita", 149.99, Rarity::Secret),
    ("Tralalero Tralala", 129.99, Rarity::BrainrotGod),
    ("Cocofanto Elefanto", 119.99, Rarity::BrainrotGod),
    ("Odin Din Din Dun", 109.99, Rarity::BrainrotGod),
    ("Bombardiro Crocodilo", 89.99, Rarity::Mythic),
    ("Frigo Camelo", 79.99, Rarity::Mythic),
    ("Cappuccino Assassino", 59.99, Rarity::Legendary),
    ("Chimpanzini Bananini", 49.99, Rarity::Legendary),
];
