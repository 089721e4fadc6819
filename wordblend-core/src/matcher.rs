//! Overlap matching between word pairs
//!
//! Decides whether a pair of words blends, and at what position and depth.
//! All comparison happens on case-folded strings; the positions returned
//! are already mapped back to the original strings' character indices.

use crate::casefold::{fold, map_folded_index};
use crate::vocabulary::ExclusionSet;

/// A qualifying overlap between the tail of a first word and the head of
/// a second word, in original-string character indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlap {
    /// Count of non-overlapping leading characters taken from the first word
    pub start: usize,
    /// Count of overlapping characters taken from the second word
    pub depth: usize,
}

/// Search for the deepest qualifying overlap between `w0` and `w1`.
///
/// The scan walks candidate start positions in `fold(w0)` ascending from
/// `min_free`; the first position whose tail is a prefix of `fold(w1)`
/// (restricted to `w1` minus its trailing `min_free` characters) wins.
/// Shortest-prefix-first means the first hit is the longest overlap
/// reachable under the free-character constraints, so scanning stops there.
///
/// An overlap whose folded text is in `exclusions` is skipped and the scan
/// continues. Self-pairs (`w0 == w1`, exact string) never match.
pub fn find_overlap(
    w0: &str,
    w1: &str,
    min_depth: usize,
    min_free: usize,
    exclusions: &ExclusionSet,
) -> Option<Overlap> {
    if w0 == w1 {
        return None;
    }

    let cf0 = fold(w0);
    let cf1 = fold(w1);
    let n0 = cf0.chars().count();
    let n1 = cf1.chars().count();

    // The matchable head of w1 excludes its trailing min_free characters.
    let head_chars = n1.checked_sub(min_free)?;
    let head = &cf1[..char_to_byte(&cf1, head_chars)];

    // Candidate starts leave at least min_depth overlap characters in w0.
    let upper = (n0 + 1).saturating_sub(min_depth);

    for (i, (byte_off, _)) in cf0.char_indices().enumerate() {
        if i < min_free {
            continue;
        }
        if i >= upper {
            break;
        }
        let tail = &cf0[byte_off..];
        if head.starts_with(tail) && !exclusions.contains(tail) {
            return Some(Overlap {
                start: map_folded_index(w0, &cf0, i),
                depth: map_folded_index(w1, &cf1, n0 - i),
            });
        }
    }

    None
}

/// Byte offset of the `char_idx`-th character of `s` (or `s.len()` past the end).
fn char_to_byte(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(byte, _)| byte)
        .unwrap_or(s.len())
}
