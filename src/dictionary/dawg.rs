//! DAWG (Directed Acyclic Word Graph) dictionary implementation.
//!
//! A DAWG is a minimized trie that shares both prefixes and suffixes. It is
//! built incrementally from sorted input: whenever the next term diverges
//! from the previous one, the nodes of the previous term past the divergence
//! point can no longer change, so they are frozen and merged with any
//! structurally equal node that was frozen earlier.
//!
//! Nodes live in a flat arena addressed by index. After construction the
//! arena is compacted so that it holds only nodes reachable from the root,
//! numbered in breadth-first discovery order.

use super::iterator::DawgTerms;
use super::{Dictionary, DictionaryError, DictionaryNode};
use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

/// Index of the root node in every arena.
const ROOT: usize = 0;

/// A minimized dictionary automaton.
///
/// Once built the DAWG is immutable; cloning it only bumps a reference
/// count, and any number of threads may query it concurrently.
///
/// # Performance
///
/// - **Construction**: O(n) for sorted input where n is total characters
/// - **Lookup**: O(m) where m is the query term length
/// - **Memory**: one node per distinct (accepting flag, outgoing edges)
///   signature reachable from the root
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dawg {
    nodes: Arc<Vec<DawgNode>>,
    term_count: usize,
}

/// A node in the DAWG arena.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DawgNode {
    /// Edges to child nodes: (label, target node index), ascending by label
    pub edges: Vec<(char, usize)>,
    /// True if this node marks the end of a valid term
    pub is_final: bool,
}

impl DawgNode {
    fn new(is_final: bool) -> Self {
        DawgNode {
            edges: Vec::new(),
            is_final,
        }
    }

    #[inline]
    fn child(&self, label: char) -> Option<usize> {
        // Linear scan wins for the short edge lists that dominate real
        // dictionaries.
        if self.edges.len() < 16 {
            self.edges
                .iter()
                .find(|(l, _)| *l == label)
                .map(|(_, idx)| *idx)
        } else {
            self.edges
                .binary_search_by_key(&label, |(l, _)| *l)
                .ok()
                .map(|pos| self.edges[pos].1)
        }
    }
}

/// Builder for constructing a DAWG one term at a time.
///
/// Terms are expected in non-decreasing order. With
/// [`check_sorted`](Self::check_sorted) enabled an out-of-order term is
/// rejected. Without it such terms are set aside and merged in by
/// [`build`](Self::build), which then rebuilds from the sorted union.
pub struct DawgBuilder {
    nodes: Vec<DawgNode>,
    // Frozen nodes keyed by their (accepting flag, edges) signature
    registry: FxHashMap<DawgNode, usize>,
    previous: String,
    // Node indices along the previous term, root first
    active_path: Vec<usize>,
    term_count: usize,
    inserted: usize,
    check_sorted: bool,
    // Out-of-order terms accepted by an unchecked builder
    deferred: Vec<String>,
}

impl DawgBuilder {
    /// Create a new DAWG builder that does not validate term order.
    pub fn new() -> Self {
        DawgBuilder {
            nodes: vec![DawgNode::new(false)],
            registry: FxHashMap::default(),
            previous: String::new(),
            active_path: vec![ROOT],
            term_count: 0,
            inserted: 0,
            check_sorted: false,
            deferred: Vec::new(),
        }
    }

    /// Enable or disable sorted-input validation.
    pub fn check_sorted(mut self, check_sorted: bool) -> Self {
        self.check_sorted = check_sorted;
        self
    }

    /// Add a term to the DAWG.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::OrderingViolation`] when sorted-input
    /// validation is enabled and `term` sorts before the previous term.
    /// Equal adjacent terms are accepted and stored once.
    pub fn insert(&mut self, term: &str) -> Result<(), DictionaryError> {
        if self.inserted > 0 && term < self.previous.as_str() {
            if self.check_sorted {
                return Err(DictionaryError::OrderingViolation {
                    previous: self.previous.clone(),
                    term: term.to_string(),
                    index: self.inserted,
                });
            }
            self.deferred.push(term.to_string());
            self.inserted += 1;
            return Ok(());
        }

        let common_prefix_len = self
            .previous
            .chars()
            .zip(term.chars())
            .take_while(|(a, b)| a == b)
            .count();

        self.freeze(common_prefix_len);

        for label in term.chars().skip(common_prefix_len) {
            let child = self.nodes.len();
            self.nodes.push(DawgNode::new(false));

            let parent = self.tail();
            self.nodes[parent].edges.push((label, child));
            self.active_path.push(child);
        }

        let last = self.tail();
        if !self.nodes[last].is_final {
            self.nodes[last].is_final = true;
            self.term_count += 1;
        }

        self.previous.clear();
        self.previous.push_str(term);
        self.inserted += 1;
        Ok(())
    }

    /// Finish building and return the DAWG.
    pub fn build(mut self) -> Dawg {
        self.freeze(0);
        let nodes = compact(&self.nodes);

        if !self.deferred.is_empty() {
            log::debug!(
                "rebuilding DAWG to merge {} out-of-order terms",
                self.deferred.len()
            );
            let terms: Vec<String> = DawgTerms::new(&nodes).chain(self.deferred).collect();
            return Dawg::from_terms(terms);
        }

        log::debug!(
            "built DAWG: {} terms, {} nodes ({} before minimization)",
            self.term_count,
            nodes.len(),
            self.nodes.len()
        );

        Dawg {
            nodes: Arc::new(nodes),
            term_count: self.term_count,
        }
    }

    /// Last node on the active path (the root when the path is empty).
    #[inline]
    fn tail(&self) -> usize {
        self.active_path.last().copied().unwrap_or(ROOT)
    }

    /// Freeze every node on the active path deeper than `prefix_len`,
    /// deepest first, replacing each with an equivalent frozen node when
    /// one is already registered.
    fn freeze(&mut self, prefix_len: usize) {
        while self.active_path.len() > prefix_len + 1 {
            let Some(child) = self.active_path.pop() else {
                break;
            };
            let parent = self.tail();

            let signature = self.nodes[child].clone();

            match self.registry.get(&signature) {
                Some(&existing) => {
                    if let Some(edge) = self.nodes[parent]
                        .edges
                        .iter_mut()
                        .find(|(_, target)| *target == child)
                    {
                        edge.1 = existing;
                    }
                }
                None => {
                    self.registry.insert(signature, child);
                }
            }
        }
    }
}

impl Default for DawgBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Renumber the nodes reachable from the root in breadth-first discovery
/// order, dropping everything else.
fn compact(nodes: &[DawgNode]) -> Vec<DawgNode> {
    const UNASSIGNED: usize = usize::MAX;

    let mut remap = vec![UNASSIGNED; nodes.len()];
    let mut order = Vec::with_capacity(nodes.len());
    let mut queue = VecDeque::new();

    remap[ROOT] = 0;
    order.push(ROOT);
    queue.push_back(ROOT);

    while let Some(old) = queue.pop_front() {
        for &(_, child) in &nodes[old].edges {
            if remap[child] == UNASSIGNED {
                remap[child] = order.len();
                order.push(child);
                queue.push_back(child);
            }
        }
    }

    order
        .into_iter()
        .map(|old| DawgNode {
            edges: nodes[old]
                .edges
                .iter()
                .map(|&(label, child)| (label, remap[child]))
                .collect(),
            is_final: nodes[old].is_final,
        })
        .collect()
}

/// Count accepting paths from the root, rejecting cycles.
fn count_terms(nodes: &[DawgNode]) -> Result<usize, DictionaryError> {
    const UNVISITED: u8 = 0;
    const IN_PROGRESS: u8 = 1;
    const DONE: u8 = 2;

    let mut marks = vec![UNVISITED; nodes.len()];
    let mut counts = vec![0usize; nodes.len()];
    let mut stack = vec![(ROOT, 0usize)];
    marks[ROOT] = IN_PROGRESS;

    while let Some(frame) = stack.last_mut() {
        let (node, cursor) = *frame;
        if let Some(&(_, child)) = nodes[node].edges.get(cursor) {
            frame.1 += 1;
            match marks[child] {
                UNVISITED => {
                    marks[child] = IN_PROGRESS;
                    stack.push((child, 0));
                }
                IN_PROGRESS => {
                    return Err(DictionaryError::Corrupt(format!(
                        "cycle through node {}",
                        child
                    )));
                }
                _ => {}
            }
        } else {
            stack.pop();
            marks[node] = DONE;
            let mut total = usize::from(nodes[node].is_final);
            for &(_, child) in &nodes[node].edges {
                total = total.checked_add(counts[child]).ok_or_else(|| {
                    DictionaryError::Corrupt("term count overflows".to_string())
                })?;
            }
            counts[node] = total;
        }
    }

    Ok(counts[ROOT])
}

impl Dawg {
    /// Create a new empty DAWG.
    pub fn new() -> Self {
        DawgBuilder::new().build()
    }

    /// Build a DAWG from terms in non-decreasing order.
    ///
    /// Construction is all-or-nothing: when `check_sorted` is set and a term
    /// sorts before its predecessor, no dictionary is returned.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lazy_levenshtein::dictionary::{Dawg, DictionaryError};
    ///
    /// let dawg = Dawg::build(["bat", "cat", "cats"], true).unwrap();
    /// assert!(dawg.contains("cats"));
    ///
    /// let err = Dawg::build(["a", "c", "b"], true).unwrap_err();
    /// assert!(matches!(err, DictionaryError::OrderingViolation { index: 2, .. }));
    /// ```
    pub fn build<I, S>(terms: I, check_sorted: bool) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = DawgBuilder::new().check_sorted(check_sorted);
        for term in terms {
            builder.insert(term.as_ref())?;
        }
        Ok(builder.build())
    }

    /// Build a DAWG from terms in any order.
    ///
    /// The terms are collected, sorted and de-duplicated first.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut sorted: Vec<String> = terms.into_iter().map(|s| s.as_ref().to_string()).collect();
        sorted.sort();
        sorted.dedup();

        let mut builder = DawgBuilder::new();
        for term in &sorted {
            // Unchecked builders never reject a term.
            let _ = builder.insert(term);
        }
        builder.build()
    }

    /// Rebuild a DAWG from raw arena records.
    ///
    /// Node 0 is the root. The records are validated and then compacted, so
    /// the result compares equal to a freshly built DAWG of the same terms.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Corrupt`] when there is no root, an edge
    /// points outside the arena, labels are not strictly ascending, the
    /// graph has a cycle, or `term_count` does not match the graph.
    pub fn from_parts(nodes: Vec<DawgNode>, term_count: usize) -> Result<Self, DictionaryError> {
        if nodes.is_empty() {
            return Err(DictionaryError::Corrupt("missing root node".to_string()));
        }

        for (idx, node) in nodes.iter().enumerate() {
            if let Some(&(label, target)) = node.edges.iter().find(|(_, t)| *t >= nodes.len()) {
                return Err(DictionaryError::Corrupt(format!(
                    "edge {:?} of node {} points to missing node {}",
                    label, idx, target
                )));
            }
            if node.edges.windows(2).any(|pair| pair[0].0 >= pair[1].0) {
                return Err(DictionaryError::Corrupt(format!(
                    "edges of node {} are not strictly ascending",
                    idx
                )));
            }
        }

        let counted = count_terms(&nodes)?;
        if counted != term_count {
            return Err(DictionaryError::Corrupt(format!(
                "declared {} terms but the graph accepts {}",
                term_count, counted
            )));
        }

        Ok(Dawg {
            nodes: Arc::new(compact(&nodes)),
            term_count,
        })
    }

    /// Number of terms in the dictionary.
    pub fn term_count(&self) -> usize {
        self.term_count
    }

    /// Number of nodes in the minimized automaton.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges in the minimized automaton.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|node| node.edges.len()).sum()
    }

    /// The arena, root first.
    pub fn nodes(&self) -> &[DawgNode] {
        &self.nodes
    }

    /// Iterate over all terms in ascending order.
    ///
    /// Each call starts a fresh traversal.
    pub fn iter(&self) -> DawgTerms<'_> {
        DawgTerms::new(&self.nodes)
    }
}

impl Default for Dawg {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Dawg {
    type Item = String;
    type IntoIter = DawgTerms<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Dictionary for Dawg {
    type Node = DawgNodeRef;

    fn root(&self) -> Self::Node {
        DawgNodeRef {
            nodes: Arc::clone(&self.nodes),
            index: ROOT,
        }
    }

    /// Walks node indices directly, without creating node handles.
    fn contains(&self, term: &str) -> bool {
        let mut index = ROOT;
        for label in term.chars() {
            match self.nodes[index].child(label) {
                Some(next) => index = next,
                None => return false,
            }
        }
        self.nodes[index].is_final
    }

    fn len(&self) -> usize {
        self.term_count
    }
}

impl Dawg {
    /// Check if a term exists in the dictionary.
    pub fn contains(&self, term: &str) -> bool {
        <Self as Dictionary>::contains(self, term)
    }

    /// Number of terms in the dictionary.
    pub fn len(&self) -> usize {
        self.term_count
    }

    /// True if the dictionary holds no terms.
    pub fn is_empty(&self) -> bool {
        self.term_count == 0
    }

    /// Handle to the root node.
    pub fn root(&self) -> DawgNodeRef {
        <Self as Dictionary>::root(self)
    }
}

/// A lightweight handle to one node of a [`Dawg`].
///
/// Cloning only bumps the arena's reference count.
#[derive(Clone)]
pub struct DawgNodeRef {
    nodes: Arc<Vec<DawgNode>>,
    index: usize,
}

impl DawgNodeRef {
    /// Arena index of this node.
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    fn at(&self, index: usize) -> Self {
        DawgNodeRef {
            nodes: Arc::clone(&self.nodes),
            index,
        }
    }
}

impl fmt::Debug for DawgNodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DawgNodeRef")
            .field("index", &self.index)
            .field("is_final", &self.is_final())
            .finish()
    }
}

impl PartialEq for DawgNodeRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.nodes, &other.nodes) && self.index == other.index
    }
}

impl Eq for DawgNodeRef {}

impl DictionaryNode for DawgNodeRef {
    #[inline]
    fn is_final(&self) -> bool {
        self.nodes[self.index].is_final
    }

    #[inline]
    fn transition(&self, label: char) -> Option<Self> {
        self.nodes[self.index].child(label).map(|idx| self.at(idx))
    }

    #[inline]
    fn edge_count(&self) -> usize {
        self.nodes[self.index].edges.len()
    }

    #[inline]
    fn edge_at(&self, index: usize) -> Option<(char, Self)> {
        self.nodes[self.index]
            .edges
            .get(index)
            .map(|&(label, child)| (label, self.at(child)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dawg_creation() {
        let dict = Dawg::from_terms(vec!["hello", "world", "test"]);
        assert_eq!(dict.len(), 3);
    }

    #[test]
    fn test_dawg_contains() {
        let dict = Dawg::from_terms(vec!["hello", "world"]);
        assert!(dict.contains("hello"));
        assert!(dict.contains("world"));
        assert!(!dict.contains("goodbye"));
        assert!(!dict.contains("hell"));
        assert!(!dict.contains(""));
    }

    #[test]
    fn test_dawg_node_traversal() {
        let dict = Dawg::from_terms(vec!["test", "testing"]);
        let root = dict.root();

        let t = root.transition('t').expect("should have 't'");
        let e = t.transition('e').expect("should have 'e'");
        let s = e.transition('s').expect("should have 's'");
        let t2 = s.transition('t').expect("should have second 't'");

        assert!(t2.is_final(), "'test' should be final");

        let i = t2.transition('i').expect("should have 'i'");
        assert!(!i.is_final(), "'testi' should not be final");
    }

    #[test]
    fn test_dawg_node_edges_are_ordered() {
        let dict = Dawg::from_terms(vec!["ad", "ab", "ac"]);
        let a = dict.root().transition('a').expect("should have 'a'");

        let labels: Vec<_> = a.edges().map(|(label, _)| label).collect();
        assert_eq!(labels, vec!['b', 'c', 'd']);
        assert_eq!(a.edge_count(), 3);
        assert_eq!(a.edge_at(1).map(|(label, _)| label), Some('c'));
        assert!(a.edge_at(3).is_none());
    }

    #[test]
    fn test_dawg_suffix_sharing() {
        let dict = Dawg::build(["bat", "cat"], true).unwrap();
        // root, the shared "a" node, the shared "t" node, the accepting leaf
        assert_eq!(dict.node_count(), 4);
        assert_eq!(dict.edge_count(), 4);

        let b = dict.root().transition('b').unwrap();
        let c = dict.root().transition('c').unwrap();
        assert_eq!(b, c, "both first letters should lead to one shared node");
    }

    #[test]
    fn test_dawg_shared_leaf_with_extension() {
        let dict = Dawg::build(["bat", "cat", "cats"], true).unwrap();
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.node_count(), 7);
        assert!(dict.contains("cats"));
        assert!(!dict.contains("bats"));
    }

    #[test]
    fn test_dawg_empty() {
        let dict = Dawg::new();
        assert_eq!(dict.len(), 0);
        assert!(dict.is_empty());
        assert!(!dict.contains("test"));
        assert!(!dict.contains(""));
        assert_eq!(dict.iter().count(), 0);
    }

    #[test]
    fn test_dawg_empty_string_term() {
        let dict = Dawg::build([""], true).unwrap();
        assert_eq!(dict.len(), 1);
        assert!(dict.contains(""));
        assert!(!dict.contains("a"));
    }

    #[test]
    fn test_dawg_duplicates_collapse() {
        let dict = Dawg::build(["test", "test", "test"], true).unwrap();
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.iter().collect::<Vec<_>>(), vec!["test"]);
    }

    #[test]
    fn test_dawg_builder_incremental() {
        let mut builder = DawgBuilder::new().check_sorted(true);
        builder.insert("test").unwrap();
        builder.insert("tested").unwrap();
        builder.insert("testing").unwrap();

        let dict = builder.build();
        assert_eq!(dict.len(), 3);
        assert!(dict.contains("test"));
        assert!(dict.contains("testing"));
        assert!(dict.contains("tested"));
    }

    #[test]
    fn test_dawg_rejects_out_of_order_terms() {
        let err = Dawg::build(["a", "c", "b"], true).unwrap_err();
        assert_eq!(
            err,
            DictionaryError::OrderingViolation {
                previous: "c".to_string(),
                term: "b".to_string(),
                index: 2,
            }
        );
    }

    #[test]
    fn test_dawg_unchecked_unsorted_input_is_merged() {
        let dict = Dawg::build(["ab", "b", "ac", "a"], false).unwrap();
        assert_eq!(dict.len(), 4);
        assert_eq!(dict.iter().collect::<Vec<_>>(), vec!["a", "ab", "ac", "b"]);
        assert_eq!(dict, Dawg::from_terms(["a", "ab", "ac", "b"]));
    }

    #[test]
    fn test_dawg_unchecked_repeat_after_smaller_term() {
        let dict = Dawg::build(["b", "a", "b"], false).unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.iter().collect::<Vec<_>>(), vec!["a", "b"]);

        let labels: Vec<char> = dict.nodes()[ROOT].edges.iter().map(|&(label, _)| label).collect();
        assert_eq!(labels, vec!['a', 'b']);

        let rebuilt = Dawg::from_parts(dict.nodes().to_vec(), dict.len()).unwrap();
        assert_eq!(rebuilt, dict);
    }

    #[test]
    fn test_dawg_sorted_vs_unsorted_convenience() {
        let sorted = Dawg::from_terms(vec!["apple", "banana", "cherry", "date"]);
        let unsorted = Dawg::from_terms(vec!["cherry", "apple", "date", "banana"]);
        assert_eq!(sorted, unsorted);
    }

    #[test]
    fn test_dawg_from_parts_round_trip() {
        let dict = Dawg::from_terms(vec!["cat", "cats", "bat", "bats"]);
        let rebuilt = Dawg::from_parts(dict.nodes().to_vec(), dict.len()).unwrap();
        assert_eq!(rebuilt, dict);
    }

    #[test]
    fn test_dawg_from_parts_rejects_dangling_edge() {
        let nodes = vec![DawgNode {
            edges: vec![('a', 5)],
            is_final: false,
        }];
        assert!(matches!(
            Dawg::from_parts(nodes, 0),
            Err(DictionaryError::Corrupt(_))
        ));
    }

    #[test]
    fn test_dawg_from_parts_rejects_cycle() {
        let nodes = vec![
            DawgNode {
                edges: vec![('a', 1)],
                is_final: false,
            },
            DawgNode {
                edges: vec![('b', 0)],
                is_final: true,
            },
        ];
        assert!(matches!(
            Dawg::from_parts(nodes, 1),
            Err(DictionaryError::Corrupt(_))
        ));
    }

    #[test]
    fn test_dawg_from_parts_rejects_wrong_term_count() {
        let dict = Dawg::from_terms(vec!["a", "b"]);
        assert!(Dawg::from_parts(dict.nodes().to_vec(), 3).is_err());
    }

    #[test]
    fn test_dawg_unicode_labels() {
        let dict = Dawg::from_terms(vec!["café", "cafe", "naïve"]);
        assert!(dict.contains("café"));
        assert!(dict.contains("naïve"));
        assert!(!dict.contains("naive"));
    }
}
