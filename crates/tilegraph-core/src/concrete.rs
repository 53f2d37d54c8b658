//! The [`ConcreteGraph`] type — a general mutable graph.

use std::collections::HashMap;

use crate::node::{Edge, Node};
use crate::traits::{Graph, MutableGraph};

type CostMap = HashMap<Node, f64>;

/// Cost given to edges created without an explicit cost.
pub const DEFAULT_COST: f64 = 1.0;

/// A general graph with arbitrary topology, directed or undirected.
///
/// Both the successor and predecessor costs of every node are kept, so
/// queries in either direction are O(1). A node is in the graph exactly
/// when it is a key of both maps; an empty inner map means an isolated
/// node, not a missing one.
///
/// All edits go through [`insert_node`](Self::insert_node),
/// [`link`](Self::link) and [`unlink`](Self::unlink), which keep the two
/// maps mirrored (and, for undirected graphs, keep both directions of
/// every edge).
#[derive(Debug, Clone, Default)]
pub struct ConcreteGraph {
    successors: HashMap<Node, CostMap>,
    predecessors: HashMap<Node, CostMap>,
    directed: bool,
}

impl ConcreteGraph {
    /// Create an empty graph.
    pub fn new(directed: bool) -> Self {
        Self {
            successors: HashMap::new(),
            predecessors: HashMap::new(),
            directed,
        }
    }

    /// Create an empty graph with room for `nodes` nodes.
    pub fn with_capacity(directed: bool, nodes: usize) -> Self {
        Self {
            successors: HashMap::with_capacity(nodes),
            predecessors: HashMap::with_capacity(nodes),
            directed,
        }
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.successors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.successors.is_empty()
    }

    /// Add a node under the smallest unused ID, with edges to
    /// `successors`, and return it.
    pub fn new_node(&mut self, successors: &[Node]) -> Node {
        // Among len + 1 candidates at least one is free.
        let id = (0..=self.len())
            .find(|&id| !self.successors.contains_key(&Node(id)))
            .unwrap_or(self.len());
        let node = Node(id);
        self.add_node(node, successors);
        node
    }

    /// Successors of `node` as an owned, ID-sorted list.
    pub fn successor_list(&self, node: Node) -> Vec<Node> {
        let mut buf = Vec::new();
        self.successors(node, &mut buf);
        buf
    }

    /// Predecessors of `node` as an owned, ID-sorted list.
    pub fn predecessor_list(&self, node: Node) -> Vec<Node> {
        let mut buf = Vec::new();
        self.predecessors(node, &mut buf);
        buf
    }

    // -----------------------------------------------------------------------
    // Mirror-maintaining helpers
    // -----------------------------------------------------------------------

    /// Register `node` in both maps. Existing adjacency is left alone.
    fn insert_node(&mut self, node: Node) {
        self.successors.entry(node).or_default();
        self.predecessors.entry(node).or_default();
    }

    /// Store `head -> tail` with `cost`, plus the reverse direction if the
    /// graph is undirected. Both endpoints must already be registered.
    fn link(&mut self, head: Node, tail: Node, cost: f64) {
        self.successors.entry(head).or_default().insert(tail, cost);
        self.predecessors.entry(tail).or_default().insert(head, cost);
        if !self.directed {
            self.successors.entry(tail).or_default().insert(head, cost);
            self.predecessors.entry(head).or_default().insert(tail, cost);
        }
    }

    /// Drop `head -> tail`, plus the reverse direction if undirected.
    fn unlink(&mut self, head: Node, tail: Node) {
        if let Some(m) = self.successors.get_mut(&head) {
            m.remove(&tail);
        }
        if let Some(m) = self.predecessors.get_mut(&tail) {
            m.remove(&head);
        }
        if !self.directed {
            if let Some(m) = self.successors.get_mut(&tail) {
                m.remove(&head);
            }
            if let Some(m) = self.predecessors.get_mut(&head) {
                m.remove(&tail);
            }
        }
    }

    fn append_sorted(map: Option<&CostMap>, buf: &mut Vec<Node>) {
        let Some(map) = map else {
            return;
        };
        let start = buf.len();
        buf.extend(map.keys().copied());
        buf[start..].sort_unstable();
    }
}

impl Graph for ConcreteGraph {
    fn successors(&self, node: Node, buf: &mut Vec<Node>) {
        Self::append_sorted(self.successors.get(&node), buf);
    }

    fn predecessors(&self, node: Node, buf: &mut Vec<Node>) {
        Self::append_sorted(self.predecessors.get(&node), buf);
    }

    fn is_successor(&self, node: Node, successor: Node) -> bool {
        self.successors
            .get(&node)
            .is_some_and(|m| m.contains_key(&successor))
    }

    fn is_predecessor(&self, node: Node, predecessor: Node) -> bool {
        self.predecessors
            .get(&node)
            .is_some_and(|m| m.contains_key(&predecessor))
    }

    #[inline]
    fn node_exists(&self, node: Node) -> bool {
        self.successors.contains_key(&node)
    }

    fn degree(&self, node: Node) -> usize {
        let out = self.successors.get(&node).map_or(0, HashMap::len);
        let inc = self.predecessors.get(&node).map_or(0, HashMap::len);
        out + inc
    }

    fn cost(&self, node: Node, successor: Node) -> f64 {
        self.successors
            .get(&node)
            .and_then(|m| m.get(&successor))
            .copied()
            .unwrap_or(0.0)
    }

    #[inline]
    fn is_directed(&self) -> bool {
        self.directed
    }

    fn node_list(&self) -> Vec<Node> {
        let mut nodes: Vec<Node> = self.successors.keys().copied().collect();
        nodes.sort_unstable();
        nodes
    }

    fn edge_list(&self) -> Vec<Edge> {
        let mut edges: Vec<Edge> = self
            .successors
            .iter()
            .flat_map(|(&head, m)| m.keys().map(move |&tail| Edge::new(head, tail)))
            .collect();
        edges.sort_unstable();
        edges
    }
}

impl MutableGraph for ConcreteGraph {
    fn add_node(&mut self, node: Node, successors: &[Node]) {
        if self.node_exists(node) {
            log::trace!("add_node: node {node} already present");
            return;
        }
        self.insert_node(node);
        for &succ in successors {
            self.insert_node(succ);
            self.link(node, succ, DEFAULT_COST);
        }
    }

    fn add_edge(&mut self, edge: Edge) {
        if !self.node_exists(edge.head) {
            log::trace!("add_edge: head of {edge} missing");
            return;
        }
        self.insert_node(edge.tail);
        self.link(edge.head, edge.tail, DEFAULT_COST);
    }

    fn set_edge_cost(&mut self, edge: Edge, cost: f64) {
        if !self.is_successor(edge.head, edge.tail) {
            return;
        }
        self.link(edge.head, edge.tail, cost);
    }

    fn remove_node(&mut self, node: Node) {
        let Some(succs) = self.successors.remove(&node) else {
            return;
        };
        for succ in succs.keys() {
            if let Some(m) = self.predecessors.get_mut(succ) {
                m.remove(&node);
            }
        }
        if let Some(preds) = self.predecessors.remove(&node) {
            for pred in preds.keys() {
                if let Some(m) = self.successors.get_mut(pred) {
                    m.remove(&node);
                }
            }
        }
    }

    fn remove_edge(&mut self, edge: Edge) {
        if !self.node_exists(edge.head) || !self.node_exists(edge.tail) {
            return;
        }
        self.unlink(edge.head, edge.tail);
    }

    fn empty_graph(&mut self) {
        self.successors.clear();
        self.predecessors.clear();
    }

    fn set_directed(&mut self, directed: bool) {
        if !self.is_empty() {
            log::trace!("set_directed: graph is not empty");
            return;
        }
        self.directed = directed;
    }
}
