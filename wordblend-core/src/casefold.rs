//! Unicode case folding and folded-to-original index mapping
//!
//! All word comparisons in the engine run on case-folded strings, but the
//! original strings are what gets blended for output. Full default case
//! folding can change a word's character count (`ß` folds to `ss`), so an
//! index found in folded space has to be mapped back before slicing the
//! original word. That mapping lives here so its edge cases can be tested
//! apart from the scan loop.

use caseless::Caseless;

/// Case-fold a string using Unicode full default case folding.
///
/// Used for comparison only, never for output.
pub fn fold(s: &str) -> String {
    caseless::default_case_fold_str(s)
}

/// Number of characters a single character folds to (usually 1, but e.g.
/// `ß` folds to 2).
pub fn fold_width(ch: char) -> usize {
    std::iter::once(ch).default_case_fold().count()
}

/// Map a character index in `folded` back to a character index in
/// `original`, where `folded == fold(original)`.
///
/// Returns the smallest index `idx` such that the cumulative folded length
/// of `original[..idx]` is at least `folded_idx`.
///
/// Known approximation: when a boundary falls *inside* a character whose
/// folded expansion straddles it (e.g. a blend boundary landing between the
/// two `s` of a folded `ß`), the enclosing character's index is returned;
/// no sub-character splitting is attempted.
pub fn map_folded_index(original: &str, folded: &str, folded_idx: usize) -> usize {
    let orig_len = original.chars().count();
    // Fast path: no fold expanded, indices line up one-to-one.
    if orig_len == folded.chars().count() {
        return folded_idx.min(orig_len);
    }

    let mut folded_len = 0;
    for (idx, ch) in original.chars().enumerate() {
        if folded_len >= folded_idx {
            return idx;
        }
        folded_len += fold_width(ch);
    }
    orig_len
}
