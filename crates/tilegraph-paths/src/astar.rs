use tilegraph_core::{Graph, Node};

use crate::PathFinder;
use crate::heuristics;
use crate::pathfinder::{AstarResult, SearchNode};
use crate::validate::is_path;

/// Estimate of the remaining cost from a node to the goal, called as
/// `h(node, goal)`. Must be non-negative.
pub type Heuristic<'a> = &'a dyn Fn(Node, Node) -> f64;

/// Edge cost used in place of [`Graph::cost`], called as `cost(from, to)`.
pub type CostFn<'a> = &'a dyn Fn(Node, Node) -> f64;

impl PathFinder {
    /// Compute the cheapest path from `start` to `goal` using A*.
    ///
    /// With no `heuristic` the search runs as Dijkstra's algorithm. With no
    /// `cost` override, edge costs come from [`Graph::cost`]. The path is
    /// optimal as long as the heuristic never overestimates.
    ///
    /// Among open nodes with equal estimated cost, the one inserted first
    /// is expanded first, so results are deterministic.
    pub fn astar_path<G: Graph + ?Sized>(
        &mut self,
        graph: &G,
        start: Node,
        goal: Node,
        heuristic: Option<Heuristic<'_>>,
        cost: Option<CostFn<'_>>,
    ) -> AstarResult {
        if !graph.node_exists(start) || !graph.node_exists(goal) {
            log::debug!("astar: start {start} or goal {goal} not in graph");
            return AstarResult::unreachable(0);
        }

        self.reset();
        let estimate: Heuristic<'_> = heuristic.unwrap_or(&heuristics::zero);
        let h = |n: Node| estimate(n, goal);

        self.nodes.insert(
            start,
            SearchNode {
                g: 0.0,
                parent: None,
                open: true,
            },
        );
        self.push(start, h(start));

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut expanded = 0;

        let found = 'search: loop {
            let Some(current) = self.open.pop() else {
                break 'search false;
            };

            let ci = current.node;
            let Some(cn) = self.nodes.get_mut(&ci) else {
                continue;
            };

            // Skip entries for nodes closed by an earlier, cheaper entry.
            if !cn.open {
                continue;
            }
            cn.open = false;
            expanded += 1;

            if ci == goal {
                break 'search true;
            }

            let current_g = cn.g;

            nbuf.clear();
            graph.successors(ci, &mut nbuf);

            for &np in nbuf.iter() {
                let step = match cost {
                    Some(c) => c(ci, np),
                    None => graph.cost(ci, np),
                };
                let tentative_g = current_g + step;

                match self.nodes.get_mut(&np) {
                    Some(n) if !n.open || tentative_g >= n.g => continue,
                    Some(n) => {
                        n.g = tentative_g;
                        n.parent = Some(ci);
                    }
                    None => {
                        self.nodes.insert(
                            np,
                            SearchNode {
                                g: tentative_g,
                                parent: Some(ci),
                                open: true,
                            },
                        );
                    }
                }

                self.push(np, tentative_g + h(np));
            }
        };

        self.nbuf = nbuf;

        if !found {
            log::debug!("astar: {goal} unreachable from {start} ({expanded} expanded)");
            return AstarResult::unreachable(expanded);
        }

        let path = self.reconstruct(goal);
        debug_assert!(is_path(&path, graph));
        let total = self.nodes.get(&goal).map_or(0.0, |n| n.g);
        log::debug!(
            "astar: {start} -> {goal} cost {total} in {} steps ({expanded} expanded)",
            path.len().saturating_sub(1)
        );

        AstarResult {
            path: Some(path),
            cost: total,
            expanded,
        }
    }
}

/// One-shot A* search from `start` to `goal` on `graph`.
///
/// See [`PathFinder::astar_path`]. Use a [`PathFinder`] directly to reuse
/// allocations across many searches.
pub fn astar<G: Graph + ?Sized>(
    start: Node,
    goal: Node,
    graph: &G,
    heuristic: Option<Heuristic<'_>>,
    cost: Option<CostFn<'_>>,
) -> AstarResult {
    PathFinder::new().astar_path(graph, start, goal, heuristic, cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristics::manhattan;
    use crate::pathfinder::UNREACHABLE;
    use proptest::prelude::*;
    use tilegraph_core::{ConcreteGraph, Edge, MutableGraph, TileGraph};

    const CORRIDOR: &str = "▀  ▀\n▀▀ ▀\n▀▀ ▀\n▀▀ ▀";

    fn ids(path: &[Node]) -> Vec<usize> {
        path.iter().map(|n| n.id()).collect()
    }

    #[test]
    fn corridor_path() {
        let tg = TileGraph::parse(CORRIDOR).unwrap();
        let res = astar(Node(1), Node(14), &tg, None, None);
        assert!((res.cost - 4.0).abs() < 1e-5);
        assert_eq!(ids(&res.path.unwrap()), vec![1, 2, 6, 10, 14]);
    }

    #[test]
    fn open_3x3_corners() {
        let tg = TileGraph::new(3, 3, true);
        let res = astar(Node(0), Node(8), &tg, None, None);
        assert!((res.cost - 4.0).abs() < 1e-5);
        let path = res.path.unwrap();
        assert_eq!(path.len(), 5);
        assert!(is_path(&path, &tg));
    }

    #[test]
    fn open_1000x1000_corners() {
        let tg = TileGraph::new(1000, 1000, true);
        let goal = Node(999 * 1000 + 999);
        let res = astar(Node(0), goal, &tg, None, None);
        assert_eq!(res.cost, 1998.0);
        let path = res.path.unwrap();
        assert!(is_path(&path, &tg));
        assert_eq!(path.first(), Some(&Node(0)));
        assert_eq!(path.last(), Some(&goal));
    }

    #[test]
    fn heuristic_reduces_expansions() {
        // From the centre of the grid to the middle of its right edge, only
        // the straight row between them has f equal to the true cost.
        let tg = TileGraph::new(21, 21, true);
        let h = manhattan(&tg);
        let start = Node(10 * 21 + 10);
        let goal = Node(10 * 21 + 20);
        let blind = astar(start, goal, &tg, None, None);
        let guided = astar(start, goal, &tg, Some(&h), None);
        assert_eq!(blind.cost, 10.0);
        assert_eq!(guided.cost, 10.0);
        assert_eq!(guided.expanded, 11);
        assert!(guided.expanded < blind.expanded);
        assert!(is_path(guided.path.as_deref().unwrap(), &tg));
    }

    #[test]
    fn corner_to_corner_ties_expand_whole_grid() {
        // Every tile of an open grid lies on some optimal corner-to-corner
        // route, so equal f values leave nothing for the heuristic to prune.
        let tg = TileGraph::new(10, 10, true);
        let h = manhattan(&tg);
        let guided = astar(Node(0), Node(99), &tg, Some(&h), None);
        let blind = astar(Node(0), Node(99), &tg, None, None);
        assert_eq!(guided.cost, 18.0);
        assert_eq!(guided.expanded, blind.expanded);
    }

    #[test]
    fn default_heuristic_matches_zero() {
        let tg = TileGraph::parse(CORRIDOR).unwrap();
        let zero = heuristics::zero;
        let implicit = astar(Node(1), Node(14), &tg, None, None);
        let explicit = astar(Node(1), Node(14), &tg, Some(&zero), None);
        assert_eq!(implicit, explicit);
    }

    #[test]
    fn unreachable_goal() {
        let tg = TileGraph::parse("   \n▀▀▀\n   ").unwrap();
        let res = astar(Node(0), Node(8), &tg, None, None);
        assert!(!res.found());
        assert_eq!(res.cost, UNREACHABLE);
        assert_eq!(res.expanded, 3);
    }

    #[test]
    fn impassable_start_or_goal() {
        let tg = TileGraph::parse(CORRIDOR).unwrap();
        assert!(astar(Node(0), Node(14), &tg, None, None).path.is_none());
        assert!(astar(Node(1), Node(15), &tg, None, None).path.is_none());
    }

    #[test]
    fn missing_nodes() {
        let tg = TileGraph::new(2, 2, true);
        let res = astar(Node(0), Node(4), &tg, None, None);
        assert_eq!(res, AstarResult::unreachable(0));
    }

    #[test]
    fn start_is_goal() {
        let tg = TileGraph::new(2, 2, true);
        let res = astar(Node(3), Node(3), &tg, None, None);
        assert_eq!(res.path, Some(vec![Node(3)]));
        assert_eq!(res.cost, 0.0);
        assert_eq!(res.expanded, 1);
    }

    #[test]
    fn weighted_graph_prefers_cheaper_route() {
        let mut g = ConcreteGraph::new(true);
        g.add_node(Node(0), &[Node(1), Node(2)]);
        g.add_edge(Edge::new(Node(1), Node(3)));
        g.add_edge(Edge::new(Node(2), Node(3)));
        g.set_edge_cost(Edge::new(Node(0), Node(1)), 5.0);
        g.set_edge_cost(Edge::new(Node(2), Node(3)), 2.0);

        let res = astar(Node(0), Node(3), &g, None, None);
        assert_eq!(ids(res.path.as_deref().unwrap()), vec![0, 2, 3]);
        assert_eq!(res.cost, 3.0);

        // Directed edges are not walked backwards.
        assert!(!astar(Node(3), Node(0), &g, None, None).found());
    }

    #[test]
    fn cost_override_replaces_graph_cost() {
        let mut g = ConcreteGraph::new(false);
        g.add_node(Node(0), &[Node(1), Node(2)]);
        g.add_edge(Edge::new(Node(1), Node(3)));
        g.add_edge(Edge::new(Node(2), Node(3)));

        // Make every edge into node 1 expensive.
        let cost = |_: Node, to: Node| if to == Node(1) { 10.0 } else { 1.0 };
        let res = astar(Node(0), Node(3), &g, None, Some(&cost));
        assert_eq!(ids(res.path.as_deref().unwrap()), vec![0, 2, 3]);
        assert_eq!(res.cost, 2.0);
    }

    #[test]
    fn equal_cost_routes_break_ties_by_insertion() {
        let mut g = ConcreteGraph::new(false);
        g.add_node(Node(0), &[Node(1), Node(2)]);
        g.add_edge(Edge::new(Node(1), Node(3)));
        g.add_edge(Edge::new(Node(2), Node(3)));

        let res = astar(Node(0), Node(3), &g, None, None);
        // Node 1 is listed, and therefore queued, before node 2.
        assert_eq!(ids(res.path.as_deref().unwrap()), vec![0, 1, 3]);
    }

    #[test]
    fn finder_is_reusable() {
        let tg = TileGraph::parse(CORRIDOR).unwrap();
        let mut pf = PathFinder::new();
        let a = pf.astar_path(&tg, Node(1), Node(14), None, None);
        let b = pf.astar_path(&tg, Node(14), Node(1), None, None);
        assert_eq!(a.cost, 4.0);
        assert_eq!(ids(&b.path.unwrap()), vec![14, 10, 6, 2, 1]);
        let c = pf.astar_path(&tg, Node(1), Node(14), None, None);
        assert_eq!(a, c);
    }

    #[test]
    fn works_through_trait_object() {
        let tg = TileGraph::new(2, 2, true);
        let g: &dyn Graph = &tg;
        let res = astar(Node(0), Node(3), g, None, None);
        assert_eq!(res.cost, 2.0);
    }

    proptest! {
        #[test]
        fn found_paths_are_valid_and_optimal(
            walls in prop::collection::vec(any::<bool>(), 36),
            start in 0usize..36,
            goal in 0usize..36,
        ) {
            let mut tg = TileGraph::new(6, 6, true);
            for (i, &wall) in walls.iter().enumerate() {
                tg.set_passability(i / 6, i % 6, !wall).unwrap();
            }
            let h = manhattan(&tg);
            let blind = astar(Node(start), Node(goal), &tg, None, None);
            let guided = astar(Node(start), Node(goal), &tg, Some(&h), None);
            prop_assert_eq!(blind.found(), guided.found());
            prop_assert_eq!(blind.cost, guided.cost);
            if let Some(path) = &guided.path {
                prop_assert!(is_path(path, &tg));
                prop_assert_eq!(path.len() as f64 - 1.0, guided.cost);
                prop_assert_eq!(path.first(), Some(&Node(start)));
                prop_assert_eq!(path.last(), Some(&Node(goal)));
            }
        }
    }
}
