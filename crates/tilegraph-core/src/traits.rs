use crate::node::{Edge, Node};

/// Read-only graph interface, all that a search algorithm needs.
pub trait Graph {
    /// Append successors of `node` into `buf`. Appends nothing if `node`
    /// does not exist. The caller clears `buf` before calling.
    fn successors(&self, node: Node, buf: &mut Vec<Node>);

    /// Append predecessors of `node` into `buf`. Appends nothing if `node`
    /// does not exist.
    fn predecessors(&self, node: Node, buf: &mut Vec<Node>);

    /// Whether an edge `node -> successor` exists.
    fn is_successor(&self, node: Node, successor: Node) -> bool;

    /// Whether an edge `predecessor -> node` exists.
    fn is_predecessor(&self, node: Node, predecessor: Node) -> bool;

    /// Whether `node` and `neighbor` are joined by an edge in either
    /// direction.
    fn is_adjacent(&self, node: Node, neighbor: Node) -> bool {
        self.is_successor(node, neighbor) || self.is_predecessor(node, neighbor)
    }

    fn node_exists(&self, node: Node) -> bool;

    /// Out-degree plus in-degree. Zero for a missing node.
    fn degree(&self, node: Node) -> usize;

    /// Cost of the edge `node -> successor`, or `0.0` if there is no such
    /// edge. Costs are non-negative.
    fn cost(&self, node: Node, successor: Node) -> f64;

    fn is_directed(&self) -> bool;

    /// All nodes, in ascending ID order.
    fn node_list(&self) -> Vec<Node>;

    /// All stored edges, ordered by head then tail. Undirected graphs list
    /// each connection once per direction.
    fn edge_list(&self) -> Vec<Edge>;
}

/// A graph whose topology can be edited.
///
/// Operations on missing nodes or edges are silent no-ops.
pub trait MutableGraph: Graph {
    /// Add `node` along with edges to each of `successors`, creating any
    /// successor that is not yet present. No-op if `node` already exists.
    fn add_node(&mut self, node: Node, successors: &[Node]);

    /// Add `edge` with unit cost. The head must exist; a missing tail is
    /// created.
    fn add_edge(&mut self, edge: Edge);

    /// Overwrite the cost of an existing edge.
    fn set_edge_cost(&mut self, edge: Edge, cost: f64);

    /// Remove `node` and every edge touching it.
    fn remove_node(&mut self, node: Node);

    fn remove_edge(&mut self, edge: Edge);

    /// Discard all nodes and edges.
    fn empty_graph(&mut self);

    /// Change directedness. Only honoured while the graph has no nodes.
    fn set_directed(&mut self, directed: bool);
}
