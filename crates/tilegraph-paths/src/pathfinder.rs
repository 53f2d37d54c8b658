use std::collections::{BinaryHeap, HashMap};

use tilegraph_core::Node;

/// Total cost reported when the goal cannot be reached.
pub const UNREACHABLE: f64 = f64::INFINITY;

/// Outcome of an A* search.
#[derive(Debug, Clone, PartialEq)]
pub struct AstarResult {
    /// The path from start to goal (both included), or `None` if the goal
    /// is unreachable.
    pub path: Option<Vec<Node>>,
    /// Total path cost; [`UNREACHABLE`] when `path` is `None`.
    pub cost: f64,
    /// Number of nodes taken off the open set and expanded.
    pub expanded: usize,
}

impl AstarResult {
    pub(crate) fn unreachable(expanded: usize) -> Self {
        Self {
            path: None,
            cost: UNREACHABLE,
            expanded,
        }
    }

    /// Whether a path was found.
    #[inline]
    pub fn found(&self) -> bool {
        self.path.is_some()
    }
}

// ---------------------------------------------------------------------------
// Internal search state
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug)]
pub(crate) struct SearchNode {
    /// Best known cost from the start.
    pub(crate) g: f64,
    pub(crate) parent: Option<Node>,
    /// `false` once the node is closed.
    pub(crate) open: bool,
}

/// Open-set entry, ordered by `f` then insertion sequence for use in
/// `BinaryHeap`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeRef {
    pub(crate) node: Node,
    pub(crate) f: f64,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, and the
        // earliest insertion among equal f.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for NodeRef {}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Reusable A* search state.
///
/// `PathFinder` owns the per-node table, open set and neighbour buffer so
/// that repeated queries reuse their allocations. The state of one search
/// is discarded when the next one starts.
#[derive(Debug, Default)]
pub struct PathFinder {
    pub(crate) nodes: HashMap<Node, SearchNode>,
    pub(crate) open: BinaryHeap<NodeRef>,
    pub(crate) nbuf: Vec<Node>,
    pub(crate) seq: u64,
}

impl PathFinder {
    /// Create an empty `PathFinder`.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            open: BinaryHeap::new(),
            nbuf: Vec::with_capacity(8),
            seq: 0,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.nodes.clear();
        self.open.clear();
        self.seq = 0;
    }

    /// Push `node` onto the open set with estimated total cost `f`.
    pub(crate) fn push(&mut self, node: Node, f: f64) {
        self.open.push(NodeRef {
            node,
            f,
            seq: self.seq,
        });
        self.seq += 1;
    }

    /// Follow back-pointers from `goal` and return the path in start-to-goal
    /// order.
    pub(crate) fn reconstruct(&self, goal: Node) -> Vec<Node> {
        let mut path = Vec::new();
        let mut cur = Some(goal);
        while let Some(node) = cur {
            path.push(node);
            cur = self.nodes.get(&node).and_then(|n| n.parent);
        }
        path.reverse();
        path
    }
}
