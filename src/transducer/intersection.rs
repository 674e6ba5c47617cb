//! Intersection of dictionary traversal and automaton state.

use super::state::State;
use crate::dictionary::DictionaryNode;
use std::sync::Arc;

/// Intersection of dictionary node and Levenshtein automaton state.
///
/// Represents a point in the simultaneous traversal of both the dictionary
/// graph and the Levenshtein automaton. Each intersection tracks:
/// - The current dictionary node
/// - The current automaton state (positions)
/// - The edge label from the parent (for path reconstruction)
/// - A link to the parent intersection
///
/// Siblings share their ancestors through the parent link, so the term
/// text is only materialized for intersections that produce a candidate.
pub struct Intersection<N: DictionaryNode> {
    /// Edge label from parent
    pub label: Option<char>,

    /// Current dictionary node
    pub node: N,

    /// Current automaton state
    pub state: State,

    /// Parent intersection
    pub parent: Option<Arc<Intersection<N>>>,

    depth: usize,
}

impl<N: DictionaryNode> Intersection<N> {
    /// Create a new intersection (root)
    pub fn new(node: N, state: State) -> Self {
        Self {
            label: None,
            node,
            state,
            parent: None,
            depth: 0,
        }
    }

    /// Create a child intersection reached over `label`
    pub fn with_parent(label: char, node: N, state: State, parent: Arc<Intersection<N>>) -> Self {
        let depth = parent.depth + 1;
        Self {
            label: Some(label),
            node,
            state,
            parent: Some(parent),
            depth,
        }
    }

    /// Reconstruct the term (path) from root to this intersection
    pub fn term(&self) -> String {
        let mut chars = Vec::with_capacity(self.depth);
        let mut current = Some(self);
        while let Some(intersection) = current {
            if let Some(label) = intersection.label {
                chars.push(label);
            }
            current = intersection.parent.as_deref();
        }
        chars.iter().rev().collect()
    }

    /// Length of the path from root, in characters
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Check if the dictionary node accepts
    pub fn is_final(&self) -> bool {
        self.node.is_final()
    }

    /// Minimal distance between the query and this intersection's term
    pub fn min_distance(&self, query_length: usize) -> Option<usize> {
        self.state.min_distance(query_length)
    }
}

impl<N: DictionaryNode> Clone for Intersection<N> {
    fn clone(&self) -> Self {
        Self {
            label: self.label,
            node: self.node.clone(),
            state: self.state.clone(),
            parent: self.parent.clone(),
            depth: self.depth,
        }
    }
}

/// Unlinks the parent chain one ancestor at a time, so dropping the
/// intersection of a long term does not recurse once per character.
impl<N: DictionaryNode> Drop for Intersection<N> {
    fn drop(&mut self) {
        let mut parent = self.parent.take();
        while let Some(shared) = parent {
            // Stop at the first ancestor someone else still holds
            parent = Arc::into_inner(shared).and_then(|mut ancestor| ancestor.parent.take());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dawg;
    use crate::transducer::Position;

    #[test]
    fn test_intersection_creation() {
        let dict = Dawg::from_terms(vec!["test"]);
        let intersection = Intersection::new(dict.root(), State::initial());
        assert_eq!(intersection.depth(), 0);
        assert_eq!(intersection.term(), "");
        assert!(!intersection.is_final());
    }

    #[test]
    fn test_intersection_term_reconstruction() {
        let dict = Dawg::from_terms(vec!["añb"]);
        let root = dict.root();
        let a = root.transition('a').unwrap();
        let n = a.transition('ñ').unwrap();
        let b = n.transition('b').unwrap();

        let state = State::single(Position::new(0, 0));
        let i0 = Arc::new(Intersection::new(root, state.clone()));
        let i1 = Arc::new(Intersection::with_parent('a', a, state.clone(), i0));
        let i2 = Arc::new(Intersection::with_parent('ñ', n, state.clone(), i1));
        let i3 = Intersection::with_parent('b', b, state, i2);

        assert_eq!(i3.depth(), 3);
        assert_eq!(i3.term(), "añb");
        assert!(i3.is_final());
    }

    #[test]
    fn test_siblings_share_parent() {
        let dict = Dawg::from_terms(vec!["ab", "ac"]);
        let root = dict.root();
        let a = root.transition('a').unwrap();
        let parent = Arc::new(Intersection::with_parent(
            'a',
            a.clone(),
            State::initial(),
            Arc::new(Intersection::new(root, State::initial())),
        ));

        let b = Intersection::with_parent('b', a.transition('b').unwrap(), State::initial(), parent.clone());
        let c = Intersection::with_parent('c', a.transition('c').unwrap(), State::initial(), parent.clone());

        assert_eq!(Arc::strong_count(&parent), 3);
        assert_eq!(b.term(), "ab");
        assert_eq!(c.term(), "ac");
    }

    #[test]
    fn test_long_chain_drops_without_recursion() {
        let dict = Dawg::from_terms(vec!["a"]);
        let mut tip = Arc::new(Intersection::new(dict.root(), State::initial()));
        for _ in 0..300_000 {
            tip = Arc::new(Intersection::with_parent('a', dict.root(), State::initial(), tip));
        }
        assert_eq!(tip.depth(), 300_000);
        drop(tip);
    }

    #[test]
    fn test_drop_keeps_shared_ancestors() {
        let dict = Dawg::from_terms(vec!["ab"]);
        let root = Arc::new(Intersection::new(dict.root(), State::initial()));
        let a = Arc::new(Intersection::with_parent('a', dict.root(), State::initial(), root));
        let b = Intersection::with_parent('b', dict.root(), State::initial(), Arc::clone(&a));

        drop(b);
        assert_eq!(Arc::strong_count(&a), 1);
        assert_eq!(a.term(), "a");
        assert!(a.parent.is_some());
    }
}
