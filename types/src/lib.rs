//! Core domain types for Lootdrop.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod catalog;
mod content;
mod language;
pub mod ui;

pub use catalog::{Catalog, CatalogError};
pub use content::{ContentBundle, content};
pub use language::{Language, UnknownLanguage};

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ============================================================================
// Item Names
// ============================================================================

/// Identity key of a catalog item, guaranteed non-empty after trimming.
///
/// Two items with equal names are the same item as far as the cart is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

#[derive(Debug, Error)]
#[error("item name must not be empty")]
pub struct EmptyItemName;

impl ItemName {
    pub fn new(value: impl Into<String>) -> Result<Self, EmptyItemName> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            Err(EmptyItemName)
        } else if trimmed.len() == value.len() {
            Ok(Self(value))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ItemName {
    type Error = EmptyItemName;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ItemName {
    type Error = EmptyItemName;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemName> for String {
    fn from(value: ItemName) -> Self {
        value.0
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Rarity
// ============================================================================

/// Rarity tier shown on a catalog card.
///
/// Purely presentational: the tier picks a label and a color tag, nothing in the
/// workflow branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    #[default]
    Legendary,
    Mythic,
    BrainrotGod,
    Secret,
}

impl Rarity {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rarity::Legendary => "Legendary",
            Rarity::Mythic => "Mythic",
            Rarity::BrainrotGod => "Brainrot God",
            Rarity::Secret => "Secret",
        }
    }

    /// Color tag consumed by the renderer's palette.
    #[must_use]
    pub const fn color_tag(self) -> ColorTag {
        match self {
            Rarity::Legendary => ColorTag::Yellow,
            Rarity::Mythic => ColorTag::Red,
            Rarity::BrainrotGod => ColorTag::Violet,
            Rarity::Secret => ColorTag::Cyan,
        }
    }
}

/// Category color tag attached to an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Yellow,
    Red,
    Violet,
    Cyan,
    Green,
}

// ============================================================================
// Items
// ============================================================================

/// Immutable catalog entry.
///
/// `price` is display-only: the final cost of every checkout is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: ItemName,
    pub price: f64,
    #[serde(default)]
    pub rarity: Rarity,
    /// Overrides the rarity's color tag when set.
    #[serde(default)]
    pub color: Option<ColorTag>,
    /// Image reference owned by the catalog source; the terminal renderer ignores it.
    #[serde(default)]
    pub image: Option<String>,
}

impl Item {
    #[must_use]
    pub fn new(name: ItemName, price: f64, rarity: Rarity) -> Self {
        Self {
            name,
            price,
            rarity,
            color: None,
            image: None,
        }
    }

    #[must_use]
    pub fn color_tag(&self) -> ColorTag {
        self.color.unwrap_or_else(|| self.rarity.color_tag())
    }

    /// List price formatted the way cards show it, e.g. `149.99$`.
    #[must_use]
    pub fn list_price(&self) -> String {
        format!("{:.2}$", self.price)
    }
}

/// The price every cart line and checkout actually costs.
pub const FINAL_PRICE_LABEL: &str = "0.00$";
