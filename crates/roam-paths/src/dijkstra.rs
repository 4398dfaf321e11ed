//! Dijkstra single-source shortest paths over an edge-weighted digraph.

use crate::error::PathError;
use crate::graph::{DirectedEdge, EdgeWeightedDigraph};
use crate::indexpq::IndexMinPQ;

/// A shortest-path tree rooted at a source vertex.
///
/// [`Dijkstra::full`] settles every reachable vertex, producing a tree
/// that answers any number of destination queries; use it when many
/// destinations share one source. [`Dijkstra::to_destination`] stops the
/// instant the destination is settled, doing the minimum work for exactly
/// one query — distances beyond the destination are tentative and only
/// the destination's path should be read from such a tree.
#[derive(Debug, Clone)]
pub struct Dijkstra {
    source: usize,
    dist_to: Vec<f64>,
    edge_to: Vec<Option<DirectedEdge>>,
}

impl Dijkstra {
    /// Compute the complete shortest-path tree from `source`.
    ///
    /// Fails if `source` is out of range, or if any edge of the graph has
    /// a negative weight — the check runs eagerly, before any search.
    pub fn full(graph: &EdgeWeightedDigraph, source: usize) -> Result<Self, PathError> {
        Self::run(graph, source, None)
    }

    /// Compute shortest paths from `source` only as far as needed to
    /// settle `destination`.
    pub fn to_destination(
        graph: &EdgeWeightedDigraph,
        source: usize,
        destination: usize,
    ) -> Result<Self, PathError> {
        if destination >= graph.vertex_count() {
            return Err(PathError::InvalidVertex {
                vertex: destination,
                vertices: graph.vertex_count(),
            });
        }
        Self::run(graph, source, Some(destination))
    }

    fn run(
        graph: &EdgeWeightedDigraph,
        source: usize,
        destination: Option<usize>,
    ) -> Result<Self, PathError> {
        let vertices = graph.vertex_count();
        if source >= vertices {
            return Err(PathError::InvalidVertex {
                vertex: source,
                vertices,
            });
        }
        for edge in graph.edges() {
            if edge.weight() < 0.0 {
                return Err(PathError::NegativeWeight { edge });
            }
        }

        let mut dist_to = vec![f64::INFINITY; vertices];
        let mut edge_to: Vec<Option<DirectedEdge>> = vec![None; vertices];
        let mut pq = IndexMinPQ::new(vertices);

        dist_to[source] = 0.0;
        pq.insert(source, 0.0);

        while !pq.is_empty() {
            let v = pq.delete_min();
            if destination == Some(v) {
                break;
            }
            for &edge in graph.adjacent(v) {
                let w = edge.to();
                let candidate = dist_to[v] + edge.weight();
                if candidate < dist_to[w] {
                    dist_to[w] = candidate;
                    edge_to[w] = Some(edge);
                    if pq.contains(w) {
                        pq.decrease_key(w, candidate);
                    } else {
                        pq.insert(w, candidate);
                    }
                }
            }
        }

        Ok(Self {
            source,
            dist_to,
            edge_to,
        })
    }

    /// The source vertex this tree is rooted at.
    #[inline]
    pub fn source(&self) -> usize {
        self.source
    }

    /// Distance of the shortest path from the source to `v`, or
    /// `f64::INFINITY` when `v` is unreachable.
    ///
    /// # Panics
    ///
    /// Panics if `v` is out of range.
    #[inline]
    pub fn distance_to(&self, v: usize) -> f64 {
        self.dist_to[v]
    }

    /// Whether any path from the source reaches `v`.
    ///
    /// # Panics
    ///
    /// Panics if `v` is out of range.
    #[inline]
    pub fn has_path_to(&self, v: usize) -> bool {
        self.dist_to[v] < f64::INFINITY
    }

    /// The edges of the shortest path from the source to `v`, in walk
    /// order, or `None` when `v` is unreachable. The source itself yields
    /// an empty edge list.
    ///
    /// # Panics
    ///
    /// Panics if `v` is out of range.
    pub fn path_to(&self, v: usize) -> Option<Vec<DirectedEdge>> {
        if !self.has_path_to(v) {
            return None;
        }
        let mut path = Vec::new();
        let mut edge = self.edge_to[v];
        while let Some(e) = edge {
            path.push(e);
            edge = self.edge_to[e.from()];
        }
        path.reverse();
        Some(path)
    }

    /// Verify the optimality invariants of a **full** tree against the
    /// graph it was built from: the source conditions, the triangle
    /// inequality for every edge, and edge-consistency of the tree.
    ///
    /// Trees built with [`to_destination`](Self::to_destination) stop with
    /// tentative distances past the destination and will generally not
    /// pass. Used by tests; not required at runtime.
    pub fn check(&self, graph: &EdgeWeightedDigraph) -> bool {
        if graph.edges().any(|e| e.weight() < 0.0) {
            return false;
        }
        if self.dist_to[self.source] != 0.0 || self.edge_to[self.source].is_some() {
            return false;
        }
        for v in 0..graph.vertex_count() {
            if v == self.source {
                continue;
            }
            if self.edge_to[v].is_none() && self.dist_to[v] != f64::INFINITY {
                return false;
            }
        }
        // dist_to[w] <= dist_to[v] + weight for every edge v->w.
        for edge in graph.edges() {
            if self.dist_to[edge.from()] + edge.weight() < self.dist_to[edge.to()] {
                return false;
            }
        }
        // Each tree edge is tight: dist_to[w] == dist_to[v] + weight.
        for w in 0..graph.vertex_count() {
            if let Some(e) = self.edge_to[w] {
                if e.to() != w || self.dist_to[e.from()] + e.weight() != self.dist_to[w] {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A small digraph with a known shortest-path structure:
    ///
    /// ```text
    /// 0 -> 1 (5.0)   0 -> 2 (1.0)   2 -> 1 (2.0)
    /// 1 -> 3 (1.0)   2 -> 3 (7.0)
    /// ```
    ///
    /// Vertex 4 is disconnected.
    fn diamond() -> EdgeWeightedDigraph {
        let mut g = EdgeWeightedDigraph::new(5);
        g.add_edge(DirectedEdge::new(0, 1, 5.0)).unwrap();
        g.add_edge(DirectedEdge::new(0, 2, 1.0)).unwrap();
        g.add_edge(DirectedEdge::new(2, 1, 2.0)).unwrap();
        g.add_edge(DirectedEdge::new(1, 3, 1.0)).unwrap();
        g.add_edge(DirectedEdge::new(2, 3, 7.0)).unwrap();
        g
    }

    #[test]
    fn distances_take_cheapest_route() {
        let g = diamond();
        let spt = Dijkstra::full(&g, 0).unwrap();
        assert_eq!(spt.distance_to(0), 0.0);
        assert_eq!(spt.distance_to(2), 1.0);
        // 0 -> 2 -> 1 beats the direct 0 -> 1.
        assert_eq!(spt.distance_to(1), 3.0);
        // 0 -> 2 -> 1 -> 3 beats 0 -> 2 -> 3.
        assert_eq!(spt.distance_to(3), 4.0);
    }

    #[test]
    fn unreachable_iff_infinite_distance() {
        let g = diamond();
        let spt = Dijkstra::full(&g, 0).unwrap();
        for v in 0..g.vertex_count() {
            assert_eq!(spt.has_path_to(v), spt.distance_to(v) < f64::INFINITY);
        }
        assert!(!spt.has_path_to(4));
        assert_eq!(spt.path_to(4), None);
    }

    #[test]
    fn path_edges_chain_and_sum() {
        let g = diamond();
        let spt = Dijkstra::full(&g, 0).unwrap();
        for v in 0..g.vertex_count() {
            let Some(path) = spt.path_to(v) else {
                continue;
            };
            let mut at = 0;
            let mut total = 0.0;
            for e in &path {
                assert_eq!(e.from(), at);
                at = e.to();
                total += e.weight();
            }
            assert_eq!(at, v);
            assert_eq!(total, spt.distance_to(v));
        }
    }

    #[test]
    fn path_to_source_is_empty() {
        let g = diamond();
        let spt = Dijkstra::full(&g, 0).unwrap();
        assert_eq!(spt.path_to(0), Some(Vec::new()));
    }

    #[test]
    fn full_tree_passes_check() {
        let g = diamond();
        for s in 0..g.vertex_count() {
            assert!(Dijkstra::full(&g, s).unwrap().check(&g));
        }
    }

    #[test]
    fn negative_weight_rejected_before_search() {
        let mut g = diamond();
        g.add_edge(DirectedEdge::new(3, 4, -2.0)).unwrap();
        let err = Dijkstra::full(&g, 0).unwrap_err();
        assert!(matches!(err, PathError::NegativeWeight { edge } if edge.weight() == -2.0));
    }

    #[test]
    fn invalid_source_or_destination_rejected() {
        let g = diamond();
        assert!(matches!(
            Dijkstra::full(&g, 9),
            Err(PathError::InvalidVertex { vertex: 9, .. })
        ));
        assert!(matches!(
            Dijkstra::to_destination(&g, 0, 11),
            Err(PathError::InvalidVertex { vertex: 11, .. })
        ));
    }

    #[test]
    fn to_destination_matches_full_at_destination() {
        let g = diamond();
        let full = Dijkstra::full(&g, 0).unwrap();
        let partial = Dijkstra::to_destination(&g, 0, 3).unwrap();
        assert_eq!(partial.distance_to(3), full.distance_to(3));
        assert_eq!(partial.path_to(3), full.path_to(3));
    }

    #[test]
    fn to_destination_unreachable() {
        let g = diamond();
        let partial = Dijkstra::to_destination(&g, 0, 4).unwrap();
        assert!(!partial.has_path_to(4));
        assert_eq!(partial.path_to(4), None);
    }

    #[test]
    fn zero_weight_edges_are_fine() {
        let mut g = EdgeWeightedDigraph::new(3);
        g.add_edge(DirectedEdge::new(0, 1, 0.0)).unwrap();
        g.add_edge(DirectedEdge::new(1, 2, 0.0)).unwrap();
        let spt = Dijkstra::full(&g, 0).unwrap();
        assert_eq!(spt.distance_to(2), 0.0);
        assert!(spt.check(&g));
    }
}
