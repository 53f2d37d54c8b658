use tilegraph_core::{Graph, Node};

/// Whether `path` is a walk in `graph`: every consecutive pair is joined by
/// an edge in the path's direction.
///
/// Empty and single-node paths are trivially valid.
pub fn is_path<G: Graph + ?Sized>(path: &[Node], graph: &G) -> bool {
    path.windows(2).all(|w| graph.is_successor(w[0], w[1]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilegraph_core::{ConcreteGraph, MutableGraph, TileGraph};

    #[test]
    fn trivial_paths() {
        let tg = TileGraph::new(2, 2, false);
        assert!(is_path(&[], &tg));
        assert!(is_path(&[Node(0)], &tg));
    }

    #[test]
    fn tile_paths() {
        let tg = TileGraph::parse("▀  ▀\n▀▀ ▀\n▀▀ ▀\n▀▀ ▀").unwrap();
        assert!(is_path(&[1, 2, 6, 10, 14].map(Node), &tg));
        assert!(is_path(&[14, 10, 6].map(Node), &tg));
        // Skips a tile.
        assert!(!is_path(&[2, 10].map(Node), &tg));
        // Walks through a wall.
        assert!(!is_path(&[1, 5].map(Node), &tg));
    }

    #[test]
    fn respects_direction() {
        let mut g = ConcreteGraph::new(true);
        g.add_node(Node(0), &[Node(1)]);
        assert!(is_path(&[Node(0), Node(1)], &g));
        assert!(!is_path(&[Node(1), Node(0)], &g));
    }
}
