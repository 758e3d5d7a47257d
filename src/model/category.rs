//! Product categories and feature flags.

use crate::error::MuadilError;
use crate::normalize::normalize_column_name;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A catalog category. Each category lives on its own sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "ESPRESSO")]
    Espresso,
    #[serde(rename = "TURK_KAHVESI")]
    TurkishCoffee,
    #[serde(rename = "FILTRE_KAHVE")]
    FilterCoffee,
}

impl Category {
    /// All categories, in catalog order.
    pub const ALL: [Self; 3] = [Self::Espresso, Self::TurkishCoffee, Self::FilterCoffee];

    /// Canonical key (also the normalized sheet name).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Espresso => "ESPRESSO",
            Self::TurkishCoffee => "TURK_KAHVESI",
            Self::FilterCoffee => "FILTRE_KAHVE",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Espresso => "Espresso",
            Self::TurkishCoffee => "Türk Kahvesi",
            Self::FilterCoffee => "Filtre Kahve",
        }
    }

    /// Sheet names tried, in order, when resolving this category's sheet.
    ///
    /// Both accented and unaccented spellings are listed so that workbooks
    /// saved through different encodings still resolve.
    #[must_use]
    pub const fn sheet_candidates(self) -> &'static [&'static str] {
        match self {
            Self::Espresso => &["ESPRESSO"],
            Self::TurkishCoffee => &["TÜRK_KAHVESİ", "TURK_KAHVESI"],
            Self::FilterCoffee => &["FİLTRE_KAHVE", "FILTRE_KAHVE"],
        }
    }

    /// Feature flags of this category, in schema order.
    #[must_use]
    pub const fn features(self) -> &'static [Feature] {
        match self {
            Self::Espresso => &[
                Feature::BaristaType,
                Feature::SemiAutomatic,
                Feature::FullyAutomatic,
                Feature::Grinder,
                Feature::Milk,
                Feature::CupWarmer,
            ],
            Self::TurkishCoffee => &[Feature::Milk, Feature::Embers, Feature::Grinder],
            Self::FilterCoffee => &[Feature::Grinder],
        }
    }

    /// Whether `feature` belongs to this category's schema.
    #[must_use]
    pub fn has_feature(self, feature: Feature) -> bool {
        self.features().contains(&feature)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = MuadilError;

    /// Accepts the canonical key, any sheet candidate spelling, or the
    /// English name (`turkish-coffee`), compared after normalisation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_column_name(s);
        Self::ALL
            .into_iter()
            .find(|category| {
                category.key() == wanted
                    || category.english_key() == wanted
                    || category
                        .sheet_candidates()
                        .iter()
                        .any(|c| normalize_column_name(c) == wanted)
            })
            .ok_or_else(|| {
                MuadilError::validation(format!(
                    "unknown category '{s}' (expected one of: {})",
                    Self::ALL.map(Self::key).join(", ")
                ))
            })
    }
}

impl Category {
    const fn english_key(self) -> &'static str {
        match self {
            Self::Espresso => "ESPRESSO",
            Self::TurkishCoffee => "TURKISH_COFFEE",
            Self::FilterCoffee => "FILTER_COFFEE",
        }
    }
}

/// A boolean feature column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    #[serde(rename = "BARISTA_TIPI")]
    BaristaType,
    #[serde(rename = "YARI_OTOMATIK")]
    SemiAutomatic,
    #[serde(rename = "TAM_OTOMATIK")]
    FullyAutomatic,
    #[serde(rename = "OGUTUCU")]
    Grinder,
    #[serde(rename = "SUTLU")]
    Milk,
    #[serde(rename = "BARDAK_ISITICI")]
    CupWarmer,
    #[serde(rename = "KOZDE")]
    Embers,
}

impl Feature {
    /// Every feature across all categories.
    pub const ALL: [Self; 7] = [
        Self::BaristaType,
        Self::SemiAutomatic,
        Self::FullyAutomatic,
        Self::Grinder,
        Self::Milk,
        Self::CupWarmer,
        Self::Embers,
    ];

    /// Normalized column name in the workbook.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::BaristaType => "BARISTA_TIPI",
            Self::SemiAutomatic => "YARI_OTOMATIK",
            Self::FullyAutomatic => "TAM_OTOMATIK",
            Self::Grinder => "OGUTUCU",
            Self::Milk => "SUTLU",
            Self::CupWarmer => "BARDAK_ISITICI",
            Self::Embers => "KOZDE",
        }
    }

    /// Column name with spaces, as printed next to a tick.
    #[must_use]
    pub fn label(self) -> String {
        self.column().replace('_', " ")
    }

    const fn english_key(self) -> &'static str {
        match self {
            Self::BaristaType => "BARISTA_TYPE",
            Self::SemiAutomatic => "SEMI_AUTOMATIC",
            Self::FullyAutomatic => "FULLY_AUTOMATIC",
            Self::Grinder => "GRINDER",
            Self::Milk => "MILK",
            Self::CupWarmer => "CUP_WARMER",
            Self::Embers => "EMBERS",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for Feature {
    type Err = MuadilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_column_name(s);
        Self::ALL
            .into_iter()
            .find(|feature| feature.column() == wanted || feature.english_key() == wanted)
            .ok_or_else(|| MuadilError::validation(format!("unknown feature '{s}'")))
    }
}
