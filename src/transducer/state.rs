//! Automaton state (collection of positions).

use super::algorithm::Algorithm;
use super::position::Position;
use super::subsumption::subsumes;
use smallvec::SmallVec;

/// A state in the Levenshtein automaton.
///
/// A state is a set of positions kept in sorted order. Duplicate and
/// subsumed positions are removed on insertion, so two states holding the
/// same reduced set compare equal.
///
/// Uses SmallVec to avoid heap allocations for small states (≤8 positions),
/// which is the common case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct State {
    positions: SmallVec<[Position; 8]>,
}

impl State {
    /// Create a new empty state
    pub fn new() -> Self {
        Self {
            positions: SmallVec::new(),
        }
    }

    /// The initial state of every query: nothing consumed, no errors.
    pub fn initial() -> Self {
        Self::single(Position::new(0, 0))
    }

    /// Create a state with a single position
    pub fn single(position: Position) -> Self {
        let mut positions = SmallVec::new();
        positions.push(position);
        Self { positions }
    }

    /// Build a reduced state from arbitrary positions.
    pub fn from_positions<I>(positions: I, algorithm: Algorithm) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        let mut state = Self::new();
        for position in positions {
            state.insert(position, algorithm);
        }
        state
    }

    /// Add a position, keeping the set sorted and subsumption-free.
    ///
    /// The position is dropped if it is already present or subsumed by an
    /// existing one; otherwise every position it subsumes is removed.
    pub fn insert(&mut self, position: Position, algorithm: Algorithm) {
        if self
            .positions
            .iter()
            .any(|existing| *existing == position || subsumes(algorithm, existing, &position))
        {
            return;
        }

        self.positions
            .retain(|p| !subsumes(algorithm, &position, p));

        let insert_pos = self
            .positions
            .binary_search(&position)
            .unwrap_or_else(|pos| pos);
        self.positions.insert(insert_pos, position);
    }

    /// The position with the smallest term index
    pub fn head(&self) -> Option<&Position> {
        self.positions.first()
    }

    /// Get all positions
    #[inline(always)]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Check if this state is empty
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Get the number of positions
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Iterate over positions
    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.positions.iter()
    }

    /// Minimal edit distance between the query and a term ending here.
    ///
    /// Each plain position `(i, e)` can finish by deleting the remaining
    /// `query_length - i` query characters. Special positions stand for an
    /// unfinished transposition or split and do not end a term. Returns
    /// `None` when no position can end a term.
    #[inline]
    pub fn min_distance(&self, query_length: usize) -> Option<usize> {
        self.positions
            .iter()
            .filter(|p| !p.is_special)
            .map(|p| p.num_errors + query_length.saturating_sub(p.term_index))
            .min()
    }
}
