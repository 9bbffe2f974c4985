//! Huffman tree construction.
//!
//! The tree is built by repeatedly merging the two lowest-frequency
//! candidates until a single root remains.
//!
//! # Tie-breaking
//!
//! Candidates are ordered by `(frequency, sequence number)`. Leaves are
//! numbered in ascending symbol order, and every merged node takes the next
//! number when it is created. The lower key is extracted first and becomes the
//! left child. A given frequency table therefore always produces the same
//! tree shape.
//!
//! # Ownership
//!
//! Candidates live in a pool of slots; the priority queue only holds
//! `(frequency, slot)` keys. Merging moves both nodes out of their slots into
//! the new parent, so every node ends up owned by exactly one parent.

use crate::frequency::{FrequencyTable, Symbol};
use log::{debug, trace};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// A node of the Huffman tree.
///
/// Internal nodes always own exactly two children, and their frequency is the
/// sum of both children's frequencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: Symbol,
        freq: u64,
    },
    Internal {
        freq: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn leaf(symbol: Symbol, freq: u64) -> Self {
        Node::Leaf { symbol, freq }
    }

    /// Join two subtrees under a new parent; `left` takes the 0 edge.
    pub fn merge(left: Node, right: Node) -> Self {
        Node::Internal {
            freq: left.freq() + right.freq(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } | Node::Internal { freq, .. } => *freq,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// The symbol carried by a leaf, `None` for internal nodes.
    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Merge candidates keyed by `(frequency, sequence number)`.
struct CandidatePool {
    slots: Vec<Option<Node>>,
    queue: BinaryHeap<Reverse<(u64, usize)>>,
}

impl CandidatePool {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            queue: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Add a candidate; its sequence number is the slot it lands in.
    fn insert(&mut self, node: Node) {
        let seq = self.slots.len();
        self.queue.push(Reverse((node.freq(), seq)));
        self.slots.push(Some(node));
    }

    /// Remove and return the candidate with the lowest key.
    fn pop_min(&mut self) -> Option<Node> {
        let Reverse((_, seq)) = self.queue.pop()?;
        self.slots[seq].take()
    }
}

/// Build the Huffman tree for `table`.
///
/// Returns `None` when every count is zero. A table with a single non-zero
/// symbol yields that symbol's leaf as the root.
pub fn build_tree(table: &FrequencyTable) -> Option<Node> {
    let leaves = table.distinct_symbols();
    // n leaves produce n - 1 merged nodes
    let mut pool = CandidatePool::with_capacity((2 * leaves).saturating_sub(1));

    for (symbol, freq) in table.iter() {
        pool.insert(Node::leaf(symbol, freq));
    }

    let root = loop {
        let first = pool.pop_min()?;
        match pool.pop_min() {
            Some(second) => {
                trace!("merge {} + {}", first.freq(), second.freq());
                pool.insert(Node::merge(first, second));
            }
            None => break first,
        }
    };

    debug!(
        "built huffman tree: {} leaves, depth {}, weight {}",
        leaves,
        root.depth(),
        root.freq()
    );
    Some(root)
}
