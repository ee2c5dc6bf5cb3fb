//! Display language tags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Language the interface is rendered in.
///
/// Switching language only changes subsequent text rendering; it never touches cart or
/// checkout state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Ka,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language tag: {0} (expected one of: en, ka)")]
pub struct UnknownLanguage(pub String);

impl Language {
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ka => "ka",
        }
    }

    /// Short uppercase label for the header switch.
    #[must_use]
    pub const fn switch_label(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Ka => "KA",
        }
    }

    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Language::En => Language::Ka,
            Language::Ka => Language::En,
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Language] {
        &[Language::En, Language::Ka]
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        // Accept region-qualified tags such as `en-US` or `ka_GE`.
        let primary = lower.split(['-', '_']).next().unwrap_or_default();
        match primary {
            "en" => Ok(Language::En),
            "ka" => Ok(Language::Ka),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
