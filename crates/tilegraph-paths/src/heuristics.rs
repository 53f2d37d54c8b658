//! Ready-made A* heuristics.

use tilegraph_core::{Node, TileGraph};

/// The zero heuristic, used when a search is given none. A* with it behaves
/// as Dijkstra's algorithm.
#[inline]
pub fn zero(_from: Node, _to: Node) -> f64 {
    0.0
}

/// Manhattan (L1) distance between two tiles of `graph`.
///
/// Admissible for unit tile costs. Nodes outside the grid estimate to 0.
pub fn manhattan(graph: &TileGraph) -> impl Fn(Node, Node) -> f64 + '_ {
    move |from, to| match (graph.id_to_coords(from), graph.id_to_coords(to)) {
        (Some((r1, c1)), Some((r2, c2))) => (r1.abs_diff(r2) + c1.abs_diff(c2)) as f64,
        _ => 0.0,
    }
}
