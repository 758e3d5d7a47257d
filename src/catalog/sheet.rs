//! Sheet resolution.

use crate::normalize::normalize_column_name;
use strsim::jaro_winkler;

/// Minimum similarity for a sheet to be offered as a "did you mean" hint.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Find the sheet for a list of candidate names.
///
/// Candidates are tried in order; for each, the workbook's sheets are
/// scanned in order and the first whose normalized name equals the
/// normalized candidate is returned.
#[must_use]
pub fn resolve_sheet<'a, S: AsRef<str>>(
    sheet_names: &'a [S],
    candidates: &[&str],
) -> Option<&'a str> {
    candidates.iter().find_map(|candidate| {
        let wanted = normalize_column_name(candidate);
        sheet_names
            .iter()
            .map(AsRef::as_ref)
            .find(|sheet| normalize_column_name(sheet) == wanted)
    })
}

/// Closest sheet name to any candidate, for error messages only.
#[must_use]
pub fn suggest_sheet<S: AsRef<str>>(sheet_names: &[S], candidates: &[&str]) -> Option<String> {
    let wanted: Vec<String> = candidates.iter().map(|c| normalize_column_name(c)).collect();
    sheet_names
        .iter()
        .map(AsRef::as_ref)
        .map(|sheet| {
            let normalized = normalize_column_name(sheet);
            let score = wanted
                .iter()
                .map(|w| jaro_winkler(w, &normalized))
                .fold(0.0_f64, f64::max);
            (sheet, score)
        })
        .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(sheet, _)| sheet.to_string())
}
