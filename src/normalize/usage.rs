//! Usage-purpose tags.

use super::value::DisplayValue;
use crate::error::MuadilError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical intended-use tag of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UsageTag {
    /// Home use ("Ev")
    #[serde(rename = "Ev")]
    Home,
    /// Office use ("Ofis")
    #[serde(rename = "Ofis")]
    Office,
    /// Professional use ("Profesyonel")
    #[serde(rename = "Profesyonel")]
    Professional,
}

impl UsageTag {
    /// All tags, in the order they are offered to users.
    pub const ALL: [Self; 3] = [Self::Home, Self::Office, Self::Professional];

    /// Label stored in catalogs and shown to users.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Ev",
            Self::Office => "Ofis",
            Self::Professional => "Profesyonel",
        }
    }

    /// Detect a tag from free text.
    ///
    /// Substring tests run home, office, professional; the first hit wins.
    #[must_use]
    pub fn detect(text: &str) -> Option<Self> {
        let lower = text.to_lowercase();
        if lower.contains("ev") {
            Some(Self::Home)
        } else if lower.contains("ofis") {
            Some(Self::Office)
        } else if lower.contains("prof") {
            Some(Self::Professional)
        } else {
            None
        }
    }
}

impl fmt::Display for UsageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for UsageTag {
    type Err = MuadilError;

    /// Parse a tag label, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|tag| tag.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let labels: Vec<&str> = Self::ALL.iter().map(|tag| tag.label()).collect();
                MuadilError::validation(format!(
                    "unknown usage '{s}' (expected one of: {})",
                    labels.join(", ")
                ))
            })
    }
}

/// Canonicalise a usage-purpose cell.
///
/// Recognised text maps to a [`UsageTag`] label; anything else is returned
/// title-cased, and an empty cell stays empty.
#[must_use]
pub fn normalize_usage<V: DisplayValue + ?Sized>(value: &V) -> String {
    let display = value.display_string();
    match UsageTag::detect(&display) {
        Some(tag) => tag.label().to_string(),
        None => title_case(&display),
    }
}

/// Title-case text: the first letter of every alphabetic run is upper-cased
/// and the rest of the run lower-cased.
#[must_use]
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}
