//! Typed per-category feature flags.

use super::{Category, Feature};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Feature flags of an espresso machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EspressoFeatures {
    pub barista_type: bool,
    pub semi_automatic: bool,
    pub fully_automatic: bool,
    pub grinder: bool,
    pub milk: bool,
    pub cup_warmer: bool,
}

/// Feature flags of a Turkish coffee machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TurkishCoffeeFeatures {
    pub milk: bool,
    pub embers: bool,
    pub grinder: bool,
}

/// Feature flags of a filter coffee machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FilterCoffeeFeatures {
    pub grinder: bool,
}

/// Feature flags of a product, shaped by its category.
///
/// Two values are equal only when they belong to the same category and
/// every flag matches, which is exactly the feature fingerprint used for
/// fallback equivalence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Features {
    Espresso(EspressoFeatures),
    TurkishCoffee(TurkishCoffeeFeatures),
    FilterCoffee(FilterCoffeeFeatures),
}

impl Features {
    /// Build the flags of `category`, asking `flag` for each feature in its schema.
    pub fn from_fn(category: Category, mut flag: impl FnMut(Feature) -> bool) -> Self {
        match category {
            Category::Espresso => Self::Espresso(EspressoFeatures {
                barista_type: flag(Feature::BaristaType),
                semi_automatic: flag(Feature::SemiAutomatic),
                fully_automatic: flag(Feature::FullyAutomatic),
                grinder: flag(Feature::Grinder),
                milk: flag(Feature::Milk),
                cup_warmer: flag(Feature::CupWarmer),
            }),
            Category::TurkishCoffee => Self::TurkishCoffee(TurkishCoffeeFeatures {
                milk: flag(Feature::Milk),
                embers: flag(Feature::Embers),
                grinder: flag(Feature::Grinder),
            }),
            Category::FilterCoffee => Self::FilterCoffee(FilterCoffeeFeatures {
                grinder: flag(Feature::Grinder),
            }),
        }
    }

    /// All flags cleared.
    #[must_use]
    pub fn none(category: Category) -> Self {
        Self::from_fn(category, |_| false)
    }

    /// Category these flags belong to.
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Espresso(_) => Category::Espresso,
            Self::TurkishCoffee(_) => Category::TurkishCoffee,
            Self::FilterCoffee(_) => Category::FilterCoffee,
        }
    }

    /// Value of `feature`, or `None` if the category has no such column.
    #[must_use]
    pub fn get(&self, feature: Feature) -> Option<bool> {
        match (self, feature) {
            (Self::Espresso(f), Feature::BaristaType) => Some(f.barista_type),
            (Self::Espresso(f), Feature::SemiAutomatic) => Some(f.semi_automatic),
            (Self::Espresso(f), Feature::FullyAutomatic) => Some(f.fully_automatic),
            (Self::Espresso(f), Feature::Grinder) => Some(f.grinder),
            (Self::Espresso(f), Feature::Milk) => Some(f.milk),
            (Self::Espresso(f), Feature::CupWarmer) => Some(f.cup_warmer),
            (Self::TurkishCoffee(f), Feature::Milk) => Some(f.milk),
            (Self::TurkishCoffee(f), Feature::Embers) => Some(f.embers),
            (Self::TurkishCoffee(f), Feature::Grinder) => Some(f.grinder),
            (Self::FilterCoffee(f), Feature::Grinder) => Some(f.grinder),
            _ => None,
        }
    }

    /// Whether `feature` is set; features outside the schema count as unset.
    #[must_use]
    pub fn is_set(&self, feature: Feature) -> bool {
        self.get(feature).unwrap_or(false)
    }

    /// `(feature, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (Feature, bool)> + '_ {
        self.category()
            .features()
            .iter()
            .map(move |&feature| (feature, self.is_set(feature)))
    }
}

impl Serialize for Features {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let features = self.category().features();
        let mut map = serializer.serialize_map(Some(features.len()))?;
        for (feature, value) in self.iter() {
            map.serialize_entry(feature.column(), &value)?;
        }
        map.end()
    }
}
