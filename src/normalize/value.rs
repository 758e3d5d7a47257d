//! Cell value normalisation and boolean coercion.

/// Upper-cased tokens that coerce to `true`.
pub const TRUTH_TOKENS: &[&str] = &["1", "TRUE", "✔", "DOGRU", "EVET", "YES"];

/// A value that can be shown as a trimmed display string.
///
/// Missing values (`None`, NaN, the literal text `nan`) display as the empty
/// string. Workbook cell types implement this in the catalog module.
pub trait DisplayValue {
    /// Render the value as a trimmed display string.
    fn display_string(&self) -> String;
}

impl DisplayValue for str {
    fn display_string(&self) -> String {
        let trimmed = self.trim();
        if trimmed.eq_ignore_ascii_case("nan") {
            String::new()
        } else {
            trimmed.to_string()
        }
    }
}

impl DisplayValue for String {
    fn display_string(&self) -> String {
        self.as_str().display_string()
    }
}

impl DisplayValue for f64 {
    fn display_string(&self) -> String {
        if self.is_nan() {
            String::new()
        } else {
            self.to_string()
        }
    }
}

impl DisplayValue for i64 {
    fn display_string(&self) -> String {
        self.to_string()
    }
}

impl DisplayValue for bool {
    fn display_string(&self) -> String {
        self.to_string()
    }
}

impl<T: DisplayValue + ?Sized> DisplayValue for &T {
    fn display_string(&self) -> String {
        (**self).display_string()
    }
}

impl<T: DisplayValue> DisplayValue for Option<T> {
    fn display_string(&self) -> String {
        self.as_ref().map_or_else(String::new, DisplayValue::display_string)
    }
}

/// Convert any cell value to a trimmed display string.
#[must_use]
pub fn to_display_string<V: DisplayValue + ?Sized>(value: &V) -> String {
    value.display_string()
}

/// Boolean coercion used for every feature flag.
///
/// True iff the upper-cased display string is one of [`TRUTH_TOKENS`].
#[must_use]
pub fn is_truthy<V: DisplayValue + ?Sized>(value: &V) -> bool {
    let upper = value.display_string().to_uppercase();
    TRUTH_TOKENS.contains(&upper.as_str())
}

/// Check mark for a coerced flag, as shown in listings.
#[must_use]
pub const fn tick(flag: bool) -> &'static str {
    if flag {
        "✔"
    } else {
        "❌"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_string_trims() {
        assert_eq!(to_display_string("  JURA E8 "), "JURA E8");
        assert_eq!(to_display_string(""), "");
    }

    #[test]
    fn test_display_string_missing_values() {
        assert_eq!(to_display_string("nan"), "");
        assert_eq!(to_display_string("NaN"), "");
        assert_eq!(to_display_string(" NAN "), "");
        assert_eq!(to_display_string(&f64::NAN), "");
        assert_eq!(to_display_string(&None::<String>), "");
        assert_eq!(to_display_string(&Some("x ".to_string())), "x");
    }

    #[test]
    fn test_display_string_numbers() {
        assert_eq!(to_display_string(&1.0_f64), "1");
        assert_eq!(to_display_string(&2.5_f64), "2.5");
        assert_eq!(to_display_string(&42_i64), "42");
        assert_eq!(to_display_string(&true), "true");
    }

    #[test]
    fn test_truthy_tokens() {
        for token in ["1", "TRUE", "true", "✔", "DOGRU", "dogru", "EVET", "Evet", "YES", " yes "] {
            assert!(is_truthy(token), "{token:?} should be truthy");
        }
        assert!(is_truthy(&1.0_f64));
        assert!(is_truthy(&true));
    }

    #[test]
    fn test_falsy_tokens() {
        for token in ["", "0", "false", "no", "HAYIR", "x", "nan", "DOĞRU"] {
            assert!(!is_truthy(token), "{token:?} should be falsy");
        }
        assert!(!is_truthy(&0_i64));
        assert!(!is_truthy(&false));
        assert!(!is_truthy(&None::<String>));
    }

    #[test]
    fn test_tick() {
        assert_eq!(tick(true), "✔");
        assert_eq!(tick(false), "❌");
    }
}
