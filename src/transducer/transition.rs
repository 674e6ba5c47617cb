//! State transition logic for Levenshtein automata.
//!
//! Every dictionary edge label is turned into a characteristic vector over a
//! window of the query, starting at the term index of the state's head
//! position. Positions are then advanced one by one with the rules of the
//! active error model and the results are merged into a reduced state.

use super::{Algorithm, Position, State};
use smallvec::SmallVec;

/// Positions produced by a single position transition.
///
/// Most transitions produce 2-3 positions, so up to 4 live on the stack.
pub type Positions = SmallVec<[Position; 4]>;

/// Characteristic vector buffer.
///
/// Windows up to 16 entries (max distance ≤ 7) stay on the stack.
pub type CharacteristicVector = SmallVec<[bool; 16]>;

/// Width of the characteristic vector window.
///
/// The window covers `2n + 1` query characters starting at `offset`, cut
/// off at the end of the query. Every reachable position satisfies
/// `|i - t| <= e`, so no position reads past this window.
#[inline]
pub fn window_size(max_distance: usize, query_length: usize, offset: usize) -> usize {
    let span = max_distance.saturating_mul(2).saturating_add(1);
    span.min(query_length.saturating_sub(offset))
}

/// Fill `buffer` with `query[offset + h] == label` for `h` in `0..window`.
#[inline]
pub fn characteristic_vector(
    label: char,
    query: &[char],
    offset: usize,
    window: usize,
    buffer: &mut CharacteristicVector,
) {
    buffer.clear();
    buffer.extend(
        query
            .iter()
            .skip(offset)
            .take(window)
            .map(|&c| c == label),
    );
}

/// Elementary transition of a single position.
///
/// `cv` is the characteristic vector of the consumed label, anchored at
/// term index `offset`. Entries outside the window read as mismatches.
/// Implementations push every successor into `next`; nothing is pushed when
/// the position dies.
pub trait PositionTransition {
    /// Advance `position` over one dictionary character.
    fn transition(
        &self,
        position: &Position,
        cv: &[bool],
        offset: usize,
        max_distance: usize,
        next: &mut Positions,
    );
}

/// Insert, delete and substitute.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardTransition;

/// Standard operations plus adjacent transposition.
#[derive(Debug, Clone, Copy, Default)]
pub struct TranspositionTransition;

/// Standard operations plus merge and split.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeAndSplitTransition;

#[inline(always)]
fn matches_at(cv: &[bool], h: usize) -> bool {
    cv.get(h).copied().unwrap_or(false)
}

impl PositionTransition for StandardTransition {
    fn transition(
        &self,
        position: &Position,
        cv: &[bool],
        offset: usize,
        max_distance: usize,
        next: &mut Positions,
    ) {
        let i = position.term_index;
        let e = position.num_errors;
        let Some(h) = i.checked_sub(offset) else {
            return;
        };

        if matches_at(cv, h) {
            next.push(Position::new(i + 1, e));
            return;
        }
        if e >= max_distance {
            return;
        }

        // Insertion: the term character is extra
        next.push(Position::new(i, e + 1));

        if h < cv.len() {
            // Substitution
            next.push(Position::new(i + 1, e + 1));

            // Delete j query characters, then match. Only the nearest match
            // matters; farther ones are subsumed.
            if let Some(j) = (1..=max_distance - e).find(|&j| matches_at(cv, h + j)) {
                next.push(Position::new(i + j + 1, e + j));
            }
        }
    }
}

impl PositionTransition for TranspositionTransition {
    fn transition(
        &self,
        position: &Position,
        cv: &[bool],
        offset: usize,
        max_distance: usize,
        next: &mut Positions,
    ) {
        let i = position.term_index;
        let e = position.num_errors;
        let Some(h) = i.checked_sub(offset) else {
            return;
        };

        if position.is_special {
            // Second half of the swap must read query[i]
            if matches_at(cv, h) {
                next.push(Position::new(i + 2, e));
            }
            return;
        }

        StandardTransition.transition(position, cv, offset, max_distance, next);

        if e < max_distance && !matches_at(cv, h) && matches_at(cv, h + 1) {
            next.push(Position::new_special(i, e + 1));
        }
    }
}

impl PositionTransition for MergeAndSplitTransition {
    fn transition(
        &self,
        position: &Position,
        cv: &[bool],
        offset: usize,
        max_distance: usize,
        next: &mut Positions,
    ) {
        let i = position.term_index;
        let e = position.num_errors;
        let Some(h) = i.checked_sub(offset) else {
            return;
        };

        if position.is_special {
            // Second half of the split completes query[i]
            if h < cv.len() {
                next.push(Position::new(i + 1, e));
            }
            return;
        }

        StandardTransition.transition(position, cv, offset, max_distance, next);

        if e < max_distance && !matches_at(cv, h) && h < cv.len() {
            // Split: query[i] becomes this character and the next one
            next.push(Position::new_special(i, e + 1));
            // Merge: query[i] and query[i + 1] become this character
            if h + 1 < cv.len() {
                next.push(Position::new(i + 2, e + 1));
            }
        }
    }
}

/// State transition function bound to one query.
///
/// Holds the error model, the distance bound and the query length; the
/// characteristic vector for each label is supplied per call.
#[derive(Debug, Clone, Copy)]
pub struct StateTransition {
    algorithm: Algorithm,
    max_distance: usize,
    query_length: usize,
}

impl StateTransition {
    /// Create the transition function for a query of `query_length`
    /// characters searched within `max_distance`.
    pub fn new(algorithm: Algorithm, max_distance: usize, query_length: usize) -> Self {
        Self {
            algorithm,
            max_distance,
            query_length,
        }
    }

    /// The error model
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The distance bound
    pub fn max_distance(&self) -> usize {
        self.max_distance
    }

    /// Length of the query in characters
    pub fn query_length(&self) -> usize {
        self.query_length
    }

    /// Characteristic vector window for a state anchored at `offset`.
    #[inline]
    pub fn window(&self, offset: usize) -> usize {
        window_size(self.max_distance, self.query_length, offset)
    }

    /// Advance `state` over the label described by `cv`.
    ///
    /// `offset` must be the term index of the state's head position, the
    /// same anchor used to build `cv`. Returns `None` when every position
    /// dies.
    pub fn transition(&self, state: &State, cv: &[bool], offset: usize) -> Option<State> {
        let mut next = State::new();
        let mut successors = Positions::new();

        for position in state.iter() {
            successors.clear();
            match self.algorithm {
                Algorithm::Standard => StandardTransition.transition(
                    position,
                    cv,
                    offset,
                    self.max_distance,
                    &mut successors,
                ),
                Algorithm::Transposition => TranspositionTransition.transition(
                    position,
                    cv,
                    offset,
                    self.max_distance,
                    &mut successors,
                ),
                Algorithm::MergeAndSplit => MergeAndSplitTransition.transition(
                    position,
                    cv,
                    offset,
                    self.max_distance,
                    &mut successors,
                ),
            }

            for successor in successors.drain(..) {
                next.insert(successor, self.algorithm);
            }
        }

        if next.is_empty() {
            None
        } else {
            Some(next)
        }
    }

    /// Advance `state` over `label` against `query`.
    ///
    /// Convenience wrapper that computes the characteristic vector itself.
    pub fn step(&self, state: &State, label: char, query: &[char]) -> Option<State> {
        let offset = state.head()?.term_index;
        let mut cv = CharacteristicVector::new();
        characteristic_vector(label, query, offset, self.window(offset), &mut cv);
        self.transition(state, &cv, offset)
    }
}
