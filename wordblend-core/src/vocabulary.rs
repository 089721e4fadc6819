//! Word sets, scan sequences, and the filter policy between them
//!
//! A [`WordSet`] is what vocabulary loaders hand the engine: unique words,
//! identity by exact string, order-irrelevant. A [`WordSequence`] is what
//! the engine scans: the filtered, ordered (or shuffled) view of a set.

use std::collections::HashSet;

use rand::seq::SliceRandom;

use crate::casefold::fold;
use crate::config::FilterOptions;

/// An unordered set of unique words
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word; returns false if it was already present
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        self.words.insert(word.into())
    }

    /// Union with another set
    pub fn union(&self, other: &WordSet) -> WordSet {
        let mut words = self.words.clone();
        words.extend(other.words.iter().cloned());
        WordSet { words }
    }

    /// Number of unique words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl FromIterator<String> for WordSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

impl Extend<String> for WordSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.words.extend(iter);
    }
}

/// An ordered sequence of words; order drives scan order and determinism
#[derive(Debug, Clone, Default)]
pub struct WordSequence {
    words: Vec<String>,
}

impl WordSequence {
    /// Number of words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate in sequence order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for WordSequence {
    fn from(words: Vec<String>) -> Self {
        Self { words }
    }
}

/// The two scan sequences a run draws from; they may share members
#[derive(Debug, Clone)]
pub struct VocabularyPair {
    /// Outer-loop sequence (first words of each blend)
    pub first: WordSequence,
    /// Inner-loop sequence (second words of each blend)
    pub second: WordSequence,
}

impl VocabularyPair {
    /// Create a pair from two sequences
    pub fn new(first: WordSequence, second: WordSequence) -> Self {
        Self { first, second }
    }

    /// Total number of (w0, w1) pairs the full scan would visit
    pub fn pair_count(&self) -> u64 {
        self.first.len() as u64 * self.second.len() as u64
    }
}

/// Case-folded overlap substrings that are never accepted as a match
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    folded: HashSet<String>,
}

impl ExclusionSet {
    /// Create an empty exclusion set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an overlap to exclude; folded on insert
    pub fn insert(&mut self, overlap: &str) {
        self.folded.insert(fold(overlap));
    }

    /// Membership test against an already-folded overlap candidate
    pub fn contains(&self, folded_overlap: &str) -> bool {
        self.folded.contains(folded_overlap)
    }

    /// Number of excluded overlaps
    pub fn len(&self) -> usize {
        self.folded.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        for overlap in iter {
            set.insert(overlap);
        }
        set
    }
}

/// Filter turning a [`WordSet`] into a [`WordSequence`] under a policy
#[derive(Debug, Clone, Default)]
pub struct WordFilter {
    options: FilterOptions,
}

impl WordFilter {
    /// Create a filter with the given policy
    pub fn new(options: FilterOptions) -> Self {
        Self { options }
    }

    /// Apply the policy: filter, then sort lexicographically or shuffle
    pub fn apply(&self, words: &WordSet) -> WordSequence {
        let mut out: Vec<String> = words
            .iter()
            .filter(|w| self.keeps(w))
            .map(str::to_owned)
            .collect();

        if self.options.shuffle {
            // No seed surface exists; shuffled order is acknowledged
            // nondeterminism.
            out.shuffle(&mut rand::thread_rng());
        } else {
            out.sort();
        }

        WordSequence::from(out)
    }

    fn keeps(&self, word: &str) -> bool {
        let len = word.chars().count();
        len >= self.options.min_length
            && (self.options.max_length == 0 || len <= self.options.max_length)
            && (self.options.include_capitalized || is_all_lowercase(word))
            && (self.options.include_phrases || !word.contains(' '))
    }
}

/// True when the word has at least one lowercase letter and no uppercase
/// letters. Caseless tokens (digits, punctuation-only) do not count as
/// lowercase.
fn is_all_lowercase(word: &str) -> bool {
    let mut has_lower = false;
    for ch in word.chars() {
        if ch.is_uppercase() {
            return false;
        }
        if ch.is_lowercase() {
            has_lower = true;
        }
    }
    has_lower
}
