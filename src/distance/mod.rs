//! Distance metric implementations.
//!
//! Space-optimized dynamic programming for the three error models. These
//! compute the same distances the automata accept, one pair of strings at a
//! time, and are handy for ranking or checking individual matches.
//!
//! All functions operate on characters (Unicode scalar values), not bytes.

use crate::transducer::Algorithm;
use smallvec::SmallVec;

type Chars = SmallVec<[char; 32]>;

/// Compute the distance between `source` and `target` under `algorithm`.
///
/// # Example
///
/// ```rust
/// use lazy_levenshtein::distance::distance;
/// use lazy_levenshtein::transducer::Algorithm;
///
/// assert_eq!(distance(Algorithm::Standard, "teh", "the"), 2);
/// assert_eq!(distance(Algorithm::Transposition, "teh", "the"), 1);
/// assert_eq!(distance(Algorithm::MergeAndSplit, "rn", "m"), 1);
/// ```
pub fn distance(algorithm: Algorithm, source: &str, target: &str) -> usize {
    match algorithm {
        Algorithm::Standard => standard_distance(source, target),
        Algorithm::Transposition => transposition_distance(source, target),
        Algorithm::MergeAndSplit => merge_and_split_distance(source, target),
    }
}

/// Standard Levenshtein distance (insert, delete, substitute).
pub fn standard_distance(source: &str, target: &str) -> usize {
    let source_chars: Chars = source.chars().collect();
    let target_chars: Chars = target.chars().collect();

    let m = source_chars.len();
    let n = target_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev_row: Vec<usize> = (0..=n).collect();
    let mut curr_row = vec![0; n + 1];

    for i in 1..=m {
        curr_row[0] = i;

        for j in 1..=n {
            let cost = usize::from(source_chars[i - 1] != target_chars[j - 1]);

            curr_row[j] = (prev_row[j] + 1) // deletion
                .min(curr_row[j - 1] + 1) // insertion
                .min(prev_row[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

/// Levenshtein distance with adjacent transpositions.
///
/// This is the restricted (optimal string alignment) variant: a swapped
/// pair counts as one edit and is not edited again.
pub fn transposition_distance(source: &str, target: &str) -> usize {
    let source_chars: Chars = source.chars().collect();
    let target_chars: Chars = target.chars().collect();

    let m = source_chars.len();
    let n = target_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut two_ago = vec![0; n + 1];
    let mut prev_row: Vec<usize> = (0..=n).collect();
    let mut curr_row = vec![0; n + 1];

    for i in 1..=m {
        curr_row[0] = i;

        for j in 1..=n {
            let cost = usize::from(source_chars[i - 1] != target_chars[j - 1]);

            curr_row[j] = (prev_row[j] + 1)
                .min(curr_row[j - 1] + 1)
                .min(prev_row[j - 1] + cost);

            if i > 1
                && j > 1
                && source_chars[i - 1] == target_chars[j - 2]
                && source_chars[i - 2] == target_chars[j - 1]
            {
                curr_row[j] = curr_row[j].min(two_ago[j - 2] + 1);
            }
        }

        std::mem::swap(&mut two_ago, &mut prev_row);
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

/// Levenshtein distance with merges and splits.
///
/// A merge turns two `source` characters into one `target` character and a
/// split turns one `source` character into two `target` characters; each
/// costs one edit regardless of the characters involved.
pub fn merge_and_split_distance(source: &str, target: &str) -> usize {
    let source_chars: Chars = source.chars().collect();
    let target_chars: Chars = target.chars().collect();

    let m = source_chars.len();
    let n = target_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut two_ago = vec![0; n + 1];
    let mut prev_row: Vec<usize> = (0..=n).collect();
    let mut curr_row = vec![0; n + 1];

    for i in 1..=m {
        curr_row[0] = i;

        for j in 1..=n {
            let cost = usize::from(source_chars[i - 1] != target_chars[j - 1]);

            let mut best = (prev_row[j] + 1)
                .min(curr_row[j - 1] + 1)
                .min(prev_row[j - 1] + cost);

            if i > 1 {
                best = best.min(two_ago[j - 1] + 1); // merge
            }
            if j > 1 {
                best = best.min(prev_row[j - 2] + 1); // split
            }

            curr_row[j] = best;
        }

        std::mem::swap(&mut two_ago, &mut prev_row);
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_distance_identical() {
        assert_eq!(standard_distance("test", "test"), 0);
        assert_eq!(standard_distance("", ""), 0);
    }

    #[test]
    fn test_standard_distance_empty() {
        assert_eq!(standard_distance("", "test"), 4);
        assert_eq!(standard_distance("test", ""), 4);
    }

    #[test]
    fn test_standard_distance_basic() {
        assert_eq!(standard_distance("kitten", "sitting"), 3);
        assert_eq!(standard_distance("saturday", "sunday"), 3);
        assert_eq!(standard_distance("test", "best"), 1);
    }

    #[test]
    fn test_standard_distance_unicode() {
        assert_eq!(standard_distance("café", "cafe"), 1);
        assert_eq!(standard_distance("naïve", "naive"), 1);
    }

    #[test]
    fn test_transposition_distance() {
        assert_eq!(transposition_distance("ab", "ba"), 1);
        assert_eq!(transposition_distance("test", "tset"), 1);
        assert_eq!(transposition_distance("abc", "acb"), 1);
    }

    #[test]
    fn test_transposition_vs_standard() {
        let trans_dist = transposition_distance("test", "tset");
        let std_dist = standard_distance("test", "tset");

        assert_eq!(trans_dist, 1);
        assert_eq!(std_dist, 2);
    }

    #[test]
    fn test_transposition_is_restricted() {
        // "ca" -> "ac" -> "abc" would be 2, but the swapped pair can't be split
        assert_eq!(transposition_distance("ca", "abc"), 3);
    }

    #[test]
    fn test_merge_and_split_distance() {
        assert_eq!(merge_and_split_distance("rn", "m"), 1);
        assert_eq!(merge_and_split_distance("m", "rn"), 1);
        assert_eq!(merge_and_split_distance("corn", "com"), 1);
        assert_eq!(merge_and_split_distance("cl", "d"), 1);
        assert_eq!(merge_and_split_distance("abc", "abc"), 0);
        assert_eq!(merge_and_split_distance("", "ab"), 2);
    }

    #[test]
    fn test_merge_and_split_never_exceeds_standard() {
        for (a, b) in [("kitten", "sitting"), ("rnodern", "modern"), ("abc", "")] {
            assert!(merge_and_split_distance(a, b) <= standard_distance(a, b));
        }
    }

    #[test]
    fn test_distance_dispatch() {
        assert_eq!(distance(Algorithm::Standard, "ab", "ba"), 2);
        assert_eq!(distance(Algorithm::Transposition, "ab", "ba"), 1);
        assert_eq!(distance(Algorithm::MergeAndSplit, "ab", "ba"), 2);
    }
}
