//! Term iteration over a [`Dawg`](super::Dawg).
//!
//! The traversal is a depth-first walk in ascending label order. Shared
//! suffix nodes are entered once per incoming path, so suffix sharing never
//! changes the emitted terms:
//!
//! ```rust
//! use lazy_levenshtein::dictionary::Dawg;
//!
//! let dawg = Dawg::from_terms(vec!["cats", "bat", "cat"]);
//! let terms: Vec<String> = dawg.iter().collect();
//! assert_eq!(terms, vec!["bat", "cat", "cats"]);
//! ```

use super::dawg::DawgNode;

/// Iterator over the terms of a DAWG, in ascending order.
///
/// Only the current path is materialized; a term string is produced when
/// the walk reaches an accepting node.
pub struct DawgTerms<'a> {
    nodes: &'a [DawgNode],
    /// DFS stack of (node index, next edge to follow)
    stack: Vec<(usize, usize)>,
    path: String,
    /// The root accepts, so the empty term is due before anything else
    pending_empty: bool,
}

impl<'a> DawgTerms<'a> {
    pub(crate) fn new(nodes: &'a [DawgNode]) -> Self {
        let mut stack = Vec::with_capacity(16);
        stack.push((0, 0));
        Self {
            nodes,
            stack,
            path: String::new(),
            pending_empty: nodes.first().is_some_and(|root| root.is_final),
        }
    }
}

impl Iterator for DawgTerms<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pending_empty {
            self.pending_empty = false;
            return Some(String::new());
        }

        while let Some(frame) = self.stack.last_mut() {
            let (node, cursor) = *frame;
            match self.nodes[node].edges.get(cursor) {
                Some(&(label, child)) => {
                    frame.1 += 1;
                    self.path.push(label);
                    self.stack.push((child, 0));
                    if self.nodes[child].is_final {
                        return Some(self.path.clone());
                    }
                }
                None => {
                    self.stack.pop();
                    self.path.pop();
                }
            }
        }

        None
    }
}
