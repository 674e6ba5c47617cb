//! Lazy Levenshtein automata for approximate string matching.
//!
//! This module implements lazy (on-demand) construction of Levenshtein automata
//! for efficient fuzzy string matching against dictionaries.
//!
//! Also known as **Parameterized Levenshtein Automata** in academic literature
//! (Schulz & Mihov, 2002).
//!
//! # Terminology
//!
//! - **Lazy**: States constructed on-demand during queries
//! - **Position**: `(term_index, num_errors)` pair, optionally marked special
//!   for a pending transposition or split
//! - **State**: Reduced set of positions reachable after a dictionary prefix
//! - **Intersection**: A (dictionary node, state) pair on the search frontier

mod algorithm;
pub mod builder;
mod candidate;
mod intersection;
mod position;
mod query;
mod state;
pub mod subsumption;
pub mod transition;

pub use algorithm::{Algorithm, UnsupportedAlgorithm};
pub use builder::{BuilderError, TransducerBuilder};
pub use candidate::{Candidate, CandidateFactory, CandidateWithDistance, Match, MatchFactory, TermFactory};
pub use intersection::Intersection;
pub use position::Position;
pub use query::QueryIterator;
pub use state::State;
pub use transition::StateTransition;

use crate::dictionary::Dictionary;
use builder::DEFAULT_MAX_DISTANCE;

/// Everything a search needs besides the query.
///
/// Bundles the dictionary, the error model and the candidate factory, and
/// hands out the pieces of the automaton: the initial state, the transition
/// function for a given distance and query length, and the distance test.
#[derive(Clone, Debug)]
pub struct TransducerAttributes<D: Dictionary, F = MatchFactory> {
    dictionary: D,
    algorithm: Algorithm,
    default_max_distance: usize,
    factory: F,
}

impl<D: Dictionary> TransducerAttributes<D, MatchFactory> {
    /// Attributes whose factory yields [`Match`]es shaped by
    /// `include_distance`.
    pub fn new(
        dictionary: D,
        algorithm: Algorithm,
        default_max_distance: usize,
        include_distance: bool,
    ) -> Self {
        Self::with_factory(
            dictionary,
            algorithm,
            default_max_distance,
            MatchFactory::new(include_distance),
        )
    }

    /// Whether candidates carry their distance
    pub fn include_distance(&self) -> bool {
        self.factory.include_distance()
    }
}

impl<D: Dictionary, F: CandidateFactory> TransducerAttributes<D, F> {
    /// Attributes with a custom candidate factory
    pub fn with_factory(dictionary: D, algorithm: Algorithm, default_max_distance: usize, factory: F) -> Self {
        Self {
            dictionary,
            algorithm,
            default_max_distance,
            factory,
        }
    }

    /// Root of the dictionary automaton
    pub fn dictionary_root(&self) -> D::Node {
        self.dictionary.root()
    }

    /// The dictionary
    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// The error model
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Maximum distance used when a search does not name one
    pub fn default_max_distance(&self) -> usize {
        self.default_max_distance
    }

    /// State of the automaton before any character is read
    pub fn initial_state(&self) -> State {
        State::initial()
    }

    /// Transition function for a query of `query_length` characters
    pub fn state_transition(&self, max_distance: usize, query_length: usize) -> StateTransition {
        StateTransition::new(self.algorithm, max_distance, query_length)
    }

    /// Minimal distance of a term ending in `state`, or `None` when no term
    /// can end there
    pub fn min_distance(&self, state: &State, query_length: usize) -> Option<usize> {
        state.min_distance(query_length)
    }

    /// Factory shaping the search results
    pub fn candidate_factory(&self) -> &F {
        &self.factory
    }
}

/// Lazily enumerate every dictionary term within `max_distance` of `query`.
///
/// Results come out of the attributes' candidate factory in breadth-first
/// order. Each call starts a fresh walk from the dictionary root.
pub fn search<D, F>(query: &str, max_distance: usize, attributes: &TransducerAttributes<D, F>) -> QueryIterator<D::Node, F>
where
    D: Dictionary,
    F: CandidateFactory + Clone,
{
    let query: Vec<char> = query.chars().collect();
    let transition = attributes.state_transition(max_distance, query.len());
    QueryIterator::with_parts(
        attributes.dictionary_root(),
        query,
        attributes.initial_state(),
        transition,
        attributes.candidate_factory().clone(),
    )
}

/// Main transducer for approximate string matching.
///
/// The transducer combines a dictionary with a Levenshtein automaton
/// to efficiently find all terms within a given edit distance of a query.
///
/// # Example
///
/// ```rust
/// use lazy_levenshtein::prelude::*;
///
/// let dict = Dawg::from_terms(vec!["test", "testing"]);
/// let transducer = Transducer::new(dict, Algorithm::Standard);
///
/// let found: Vec<_> = transducer.query("tset", 2).collect();
/// assert_eq!(found, vec!["test"]);
/// ```
#[derive(Clone, Debug)]
pub struct Transducer<D: Dictionary> {
    attributes: TransducerAttributes<D>,
}

impl<D: Dictionary> Transducer<D> {
    /// Create a new transducer with the given dictionary and algorithm
    pub fn new(dictionary: D, algorithm: Algorithm) -> Self {
        Self::from_attributes(TransducerAttributes::new(
            dictionary,
            algorithm,
            DEFAULT_MAX_DISTANCE,
            true,
        ))
    }

    /// Create a transducer from a prepared attributes bundle
    pub fn from_attributes(attributes: TransducerAttributes<D>) -> Self {
        log::debug!(
            "{} transducer over {} terms (default max distance {})",
            attributes.algorithm(),
            attributes.dictionary().len(),
            attributes.default_max_distance()
        );
        Self { attributes }
    }

    /// Create a transducer with the Standard algorithm.
    ///
    /// The Standard algorithm supports insert, delete, and substitute operations.
    pub fn standard(dictionary: D) -> Self {
        Self::new(dictionary, Algorithm::Standard)
    }

    /// Create a transducer with the Transposition algorithm.
    ///
    /// Adjacent character swaps cost one edit.
    pub fn with_transposition(dictionary: D) -> Self {
        Self::new(dictionary, Algorithm::Transposition)
    }

    /// Create a transducer with the MergeAndSplit algorithm.
    ///
    /// Two characters merged into one, or one split into two, cost one edit.
    pub fn with_merge_split(dictionary: D) -> Self {
        Self::new(dictionary, Algorithm::MergeAndSplit)
    }

    /// Get the algorithm used by this transducer
    pub fn algorithm(&self) -> Algorithm {
        self.attributes.algorithm()
    }

    /// Get a reference to the dictionary
    pub fn dictionary(&self) -> &D {
        self.attributes.dictionary()
    }

    /// Maximum distance used by [`search`](Self::search)
    pub fn default_max_distance(&self) -> usize {
        self.attributes.default_max_distance()
    }

    /// Whether [`search`](Self::search) reports distances
    pub fn include_distance(&self) -> bool {
        self.attributes.include_distance()
    }

    /// The attributes bundle driving every search
    pub fn attributes(&self) -> &TransducerAttributes<D> {
        &self.attributes
    }

    /// Consume the transducer and return the dictionary
    pub fn into_dictionary(self) -> D {
        self.attributes.dictionary
    }

    /// Query for terms within `max_distance` of `term`.
    ///
    /// Returns an iterator over matching terms.
    pub fn query(&self, term: &str, max_distance: usize) -> QueryIterator<D::Node, TermFactory> {
        self.query_with(term, max_distance, TermFactory)
    }

    /// Query for terms with their computed edit distances.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lazy_levenshtein::prelude::*;
    ///
    /// let dict = Dawg::from_terms(vec!["cat", "cats", "bat"]);
    /// let transducer = Transducer::standard(dict);
    ///
    /// let found: Vec<_> = transducer.query_with_distance("cot", 1).collect();
    /// assert_eq!(found, vec![Candidate::new("cat", 1)]);
    /// ```
    pub fn query_with_distance(
        &self,
        term: &str,
        max_distance: usize,
    ) -> QueryIterator<D::Node, CandidateWithDistance> {
        self.query_with(term, max_distance, CandidateWithDistance)
    }

    /// Query with a custom candidate factory.
    pub fn query_with<F: CandidateFactory>(
        &self,
        term: &str,
        max_distance: usize,
        factory: F,
    ) -> QueryIterator<D::Node, F> {
        QueryIterator::new(
            self.attributes.dictionary_root(),
            term,
            max_distance,
            self.algorithm(),
            factory,
        )
    }

    /// Query within the configured default maximum distance.
    ///
    /// Yields [`Match::Candidate`] when distances are included and
    /// [`Match::Term`] otherwise.
    pub fn search(&self, term: &str) -> QueryIterator<D::Node, MatchFactory> {
        search(term, self.default_max_distance(), &self.attributes)
    }
}
