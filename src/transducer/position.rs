//! Position in the Levenshtein automaton.

use std::cmp::Ordering;

/// A position in a Levenshtein automaton state.
///
/// A position `(term_index, num_errors)` records that the dictionary prefix
/// read so far aligns with the first `term_index` query characters at a cost
/// of `num_errors` edits.
///
/// The `is_special` flag marks a pending multi-character edit:
/// - Transposition: the last term character matched the query character
///   after `term_index`; the next one must match the character at
///   `term_index` to complete the swap.
/// - MergeAndSplit: the last term character is the first half of a split of
///   the query character at `term_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Index into the query term (characters consumed)
    pub term_index: usize,

    /// Number of accumulated edit operations
    pub num_errors: usize,

    /// Pending transposition or split
    pub is_special: bool,
}

impl Position {
    /// Create a new position
    #[inline(always)]
    pub fn new(term_index: usize, num_errors: usize) -> Self {
        Self {
            term_index,
            num_errors,
            is_special: false,
        }
    }

    /// Create a new special position (for extended algorithms)
    #[inline(always)]
    pub fn new_special(term_index: usize, num_errors: usize) -> Self {
        Self {
            term_index,
            num_errors,
            is_special: true,
        }
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Order: term_index (asc), then num_errors (asc), then is_special (false < true)
impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.term_index
            .cmp(&other.term_index)
            .then_with(|| self.num_errors.cmp(&other.num_errors))
            .then_with(|| self.is_special.cmp(&other.is_special))
    }
}
