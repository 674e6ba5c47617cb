//! Subsumption rules between positions.
//!
//! Position `p` subsumes `q` when every term suffix accepted from `q` is
//! also accepted from `p` at no greater cost, so `q` can be dropped from any
//! state containing `p`. The rules follow Schulz & Mihov (2002) and
//! Mitankin's thesis; all of them require `p` to have strictly fewer errors.

use super::{Algorithm, Position};

/// Check whether `lhs` subsumes `rhs` under `algorithm`.
#[inline]
pub fn subsumes(algorithm: Algorithm, lhs: &Position, rhs: &Position) -> bool {
    match algorithm {
        Algorithm::Standard => standard(lhs, rhs),
        Algorithm::Transposition => transposition(lhs, rhs),
        Algorithm::MergeAndSplit => merge_and_split(lhs, rhs),
    }
}

/// `(i, e)` subsumes `(j, f)` iff `e < f` and `|j - i| <= f - e`.
#[inline]
fn standard(lhs: &Position, rhs: &Position) -> bool {
    !lhs.is_special
        && !rhs.is_special
        && lhs.num_errors < rhs.num_errors
        && lhs.term_index.abs_diff(rhs.term_index) <= rhs.num_errors - lhs.num_errors
}

#[inline]
fn transposition(lhs: &Position, rhs: &Position) -> bool {
    if lhs.num_errors >= rhs.num_errors {
        return false;
    }
    let budget = rhs.num_errors - lhs.num_errors;

    match (lhs.is_special, rhs.is_special) {
        (false, false) => lhs.term_index.abs_diff(rhs.term_index) <= budget,
        // A pending swap at j resumes at j + 2 after reading the character
        // at j, so it is compared as if it stood at j + 1.
        (false, true) => lhs.term_index.abs_diff(rhs.term_index + 1) <= budget,
        (true, true) => lhs.term_index == rhs.term_index,
        (true, false) => false,
    }
}

#[inline]
fn merge_and_split(lhs: &Position, rhs: &Position) -> bool {
    if lhs.num_errors >= rhs.num_errors {
        return false;
    }
    let budget = rhs.num_errors - lhs.num_errors;

    match (lhs.is_special, rhs.is_special) {
        (false, _) => lhs.term_index.abs_diff(rhs.term_index) <= budget,
        (true, true) => lhs.term_index == rhs.term_index,
        (true, false) => false,
    }
}
