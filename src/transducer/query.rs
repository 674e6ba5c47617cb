//! Lazy query iterator over a dictionary and a Levenshtein automaton.
//!
//! The search is a breadth-first walk of the product of the dictionary graph
//! and the automaton. Each call to `next` resumes at the edge where the
//! previous call stopped and runs until one more candidate is found, so the
//! iterator never computes more than one result ahead.

use super::candidate::CandidateFactory;
use super::intersection::Intersection;
use super::state::State;
use super::transition::{characteristic_vector, CharacteristicVector, StateTransition};
use super::Algorithm;
use crate::dictionary::DictionaryNode;
use std::collections::VecDeque;
use std::sync::Arc;

/// An intersection whose outgoing edges are being explored.
struct Expansion<N: DictionaryNode> {
    intersection: Arc<Intersection<N>>,
    /// Next edge index to follow
    edge: usize,
    /// Term index the characteristic vector is anchored at
    offset: usize,
    window: usize,
}

impl<N: DictionaryNode> Expansion<N> {
    fn new(intersection: Arc<Intersection<N>>, transition: &StateTransition) -> Self {
        let offset = intersection.state.head().map_or(0, |p| p.term_index);
        Self {
            window: transition.window(offset),
            intersection,
            edge: 0,
            offset,
        }
    }
}

/// Lazy iterator over dictionary terms within a maximum distance of a
/// query.
///
/// Results are produced through a [`CandidateFactory`], so the same walk
/// yields plain terms, [`Candidate`](super::Candidate)s or any other shape.
/// Terms are found in breadth-first order: shorter paths come first and
/// siblings follow ascending edge labels.
///
/// An exhausted iterator stays exhausted. Start a new query to search again.
pub struct QueryIterator<N: DictionaryNode, F: CandidateFactory> {
    query: Vec<char>,
    max_distance: usize,
    transition: StateTransition,
    factory: F,
    /// Intersections waiting to have their edges explored
    pending: VecDeque<Arc<Intersection<N>>>,
    current: Option<Expansion<N>>,
    cv: CharacteristicVector,
    /// Distance of the empty term, due before anything else
    empty_match: Option<usize>,
    exhausted: bool,
}

impl<N: DictionaryNode, F: CandidateFactory> QueryIterator<N, F> {
    /// Create a new query iterator rooted at `root`.
    pub fn new(root: N, query: &str, max_distance: usize, algorithm: Algorithm, factory: F) -> Self {
        let query: Vec<char> = query.chars().collect();
        let transition = StateTransition::new(algorithm, max_distance, query.len());
        Self::with_parts(root, query, State::initial(), transition, factory)
    }

    pub(crate) fn with_parts(
        root: N,
        query: Vec<char>,
        initial: State,
        transition: StateTransition,
        factory: F,
    ) -> Self {
        let max_distance = transition.max_distance();
        let empty_match = if root.is_final() {
            initial
                .min_distance(query.len())
                .filter(|&distance| distance <= max_distance)
        } else {
            None
        };

        log::trace!(
            "starting {} search for {:?} within {}",
            transition.algorithm(),
            query.iter().collect::<String>(),
            max_distance
        );

        let root = Arc::new(Intersection::new(root, initial));
        let current = Expansion::new(root, &transition);

        Self {
            query,
            max_distance,
            transition,
            factory,
            pending: VecDeque::new(),
            current: Some(current),
            cv: CharacteristicVector::new(),
            empty_match,
            exhausted: false,
        }
    }

    /// Maximum edit distance of this search
    pub fn max_distance(&self) -> usize {
        self.max_distance
    }

    /// Run the search until the next candidate, returning its term and
    /// distance.
    fn advance(&mut self) -> Option<(String, usize)> {
        if let Some(distance) = self.empty_match.take() {
            return Some((String::new(), distance));
        }

        loop {
            let expansion = match self.current.as_mut() {
                Some(expansion) => expansion,
                None => {
                    let Some(next) = self.pending.pop_front() else {
                        if !self.exhausted {
                            self.exhausted = true;
                            log::trace!(
                                "search for {:?} exhausted",
                                self.query.iter().collect::<String>()
                            );
                        }
                        return None;
                    };
                    self.current = Some(Expansion::new(next, &self.transition));
                    continue;
                }
            };

            let Some((label, child)) = expansion.intersection.node.edge_at(expansion.edge) else {
                self.current = None;
                continue;
            };
            expansion.edge += 1;

            characteristic_vector(
                label,
                &self.query,
                expansion.offset,
                expansion.window,
                &mut self.cv,
            );
            let Some(state) =
                self.transition
                    .transition(&expansion.intersection.state, &self.cv, expansion.offset)
            else {
                continue;
            };

            let reached = Arc::new(Intersection::with_parent(
                label,
                child,
                state,
                Arc::clone(&expansion.intersection),
            ));
            self.pending.push_back(Arc::clone(&reached));

            if reached.is_final() {
                if let Some(distance) = reached
                    .min_distance(self.query.len())
                    .filter(|&distance| distance <= self.max_distance)
                {
                    return Some((reached.term(), distance));
                }
            }
        }
    }
}

impl<N: DictionaryNode, F: CandidateFactory> Iterator for QueryIterator<N, F> {
    type Item = F::Output;

    fn next(&mut self) -> Option<Self::Item> {
        let (term, distance) = self.advance()?;
        Some(self.factory.build(term, distance))
    }
}

impl<N: DictionaryNode, F: CandidateFactory> std::iter::FusedIterator for QueryIterator<N, F> {}
