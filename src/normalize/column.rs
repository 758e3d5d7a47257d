//! Column name normalisation.

use regex::Regex;
use std::sync::LazyLock;

/// Runs of non-word characters, including literal underscores, collapse to one `_`.
static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\W_]+").expect("static regex"));

/// Turkish letters folded to their closest ASCII equivalent.
const TURKISH_FOLDS: &[(char, char)] = &[
    ('İ', 'I'),
    ('ı', 'i'),
    ('Ğ', 'G'),
    ('ğ', 'g'),
    ('Ü', 'U'),
    ('ü', 'u'),
    ('Ş', 'S'),
    ('ş', 's'),
    ('Ö', 'O'),
    ('ö', 'o'),
    ('Ç', 'C'),
    ('ç', 'c'),
];

/// Replace Turkish accented letters with unaccented ASCII letters.
///
/// Other characters are left alone.
#[must_use]
pub fn fold_turkish(input: &str) -> String {
    input
        .chars()
        .map(|ch| {
            TURKISH_FOLDS
                .iter()
                .find_map(|&(from, to)| (from == ch).then_some(to))
                .unwrap_or(ch)
        })
        .collect()
}

/// Canonicalise a header or sheet name.
///
/// Trims, folds Turkish letters, upper-cases, collapses every run of
/// non-word characters to a single underscore and strips leading/trailing
/// underscores. `" Stok Kodu "` and `"STOK-KODU"` both become
/// `"STOK_KODU"`; `"Türk Kahvesi"` becomes `"TURK_KAHVESI"`.
#[must_use]
pub fn normalize_column_name(raw: &str) -> String {
    let upper = fold_turkish(raw.trim()).to_uppercase();
    let separated = SEPARATOR_RUN.replace_all(&upper, "_");
    separated.trim_matches('_').to_string()
}
