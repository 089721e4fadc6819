//! Blend construction

use crate::matcher::Overlap;

/// Build the blended word for a matched pair.
///
/// The output is the non-overlapping prefix of `w0`, the overlapping
/// characters, then the remainder of `w1`. The overlap characters are
/// sourced from `w1`, not `w0` — an arbitrary but load-bearing choice:
/// when the two sides carry different casing or compound characters
/// (like `ß`), the blend's spelling follows the second word.
pub fn build_blend(w0: &str, w1: &str, overlap: Overlap, uppercase_overlap: bool) -> String {
    let prefix = w0.chars().take(overlap.start);
    if uppercase_overlap {
        prefix
            .chain(
                w1.chars()
                    .take(overlap.depth)
                    .flat_map(char::to_uppercase),
            )
            .chain(w1.chars().skip(overlap.depth))
            .collect()
    } else {
        // Without uppercasing, overlap + remainder is just w1 itself.
        prefix.chain(w1.chars()).collect()
    }
}
