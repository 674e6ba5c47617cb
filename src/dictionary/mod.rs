//! Dictionary abstractions for approximate string matching.
//!
//! The search only needs three things from a dictionary: its root node, the
//! ability to follow a labelled edge, and whether a node accepts. These are
//! captured by [`Dictionary`] and [`DictionaryNode`]; [`dawg::Dawg`] is the
//! concrete, minimized implementation.

pub mod dawg;
pub mod iterator;

pub use dawg::{Dawg, DawgBuilder, DawgNode, DawgNodeRef};
pub use iterator::DawgTerms;

/// Errors raised while constructing or reconstructing a dictionary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DictionaryError {
    /// Sorted-input validation was requested and a term sorts before its
    /// predecessor.
    #[error("term {term:?} at index {index} sorts before its predecessor {previous:?}")]
    OrderingViolation {
        /// The term inserted just before the offending one
        previous: String,
        /// The offending term
        term: String,
        /// Zero-based position of the offending term in the input
        index: usize,
    },

    /// Raw node records do not describe a valid minimized automaton.
    #[error("invalid dictionary records: {0}")]
    Corrupt(String),
}

/// Core dictionary abstraction.
///
/// A dictionary is a graph whose edges are labelled with characters and whose
/// accepting nodes mark the end of a stored term.
pub trait Dictionary {
    /// The node type used for traversal
    type Node: DictionaryNode;

    /// Get the root node of the dictionary
    fn root(&self) -> Self::Node;

    /// Check if a term exists in the dictionary
    fn contains(&self, term: &str) -> bool {
        let mut node = self.root();
        for label in term.chars() {
            match node.transition(label) {
                Some(next) => node = next,
                None => return false,
            }
        }
        node.is_final()
    }

    /// Number of distinct terms stored
    fn len(&self) -> usize;

    /// Check if the dictionary is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Traversable dictionary node.
///
/// Edges are kept in ascending label order; `edge_at(i)` returns the `i`-th
/// of them, which lets a caller resume an edge walk from a plain index.
pub trait DictionaryNode: Clone + Send + Sync {
    /// Check if this node marks the end of a valid term
    fn is_final(&self) -> bool;

    /// Follow the edge labelled `label`, if there is one
    fn transition(&self, label: char) -> Option<Self>;

    /// Number of outgoing edges
    fn edge_count(&self) -> usize;

    /// The `index`-th outgoing edge in ascending label order
    fn edge_at(&self, index: usize) -> Option<(char, Self)>;

    /// Iterate over all outgoing edges in ascending label order
    fn edges(&self) -> Box<dyn Iterator<Item = (char, Self)> + '_> {
        Box::new((0..self.edge_count()).filter_map(move |index| self.edge_at(index)))
    }
}
