//! Grid-to-graph adapter with per-source shortest-path-tree caching.

use roam_core::{GridMap, Point};

use crate::dijkstra::Dijkstra;
use crate::error::PathError;
use crate::graph::{DirectedEdge, EdgeWeightedDigraph};
use crate::path::Path;

/// Answers repeated cell-to-cell route queries over a walkability grid.
///
/// Construction snapshots the grid and eagerly builds one
/// [`EdgeWeightedDigraph`]: a directed edge for every ordered pair of
/// adjacent walkable cells — weight 1.0 orthogonally, the supplied cost
/// for true diagonals. Later mutations of the source map are not seen.
///
/// Queries go through a cached shortest-path tree keyed by the most
/// recent source vertex: AI turns that fan out from one origin to many
/// destinations pay for a single Dijkstra run. The cache is rebuilt the
/// moment a query uses a different source, so queries take `&mut self`.
pub struct PathFinder {
    graph: EdgeWeightedDigraph,
    width: i32,
    height: i32,
    walkable: Vec<bool>,
    cached: Option<Dijkstra>,
    rebuilds: u64,
}

impl PathFinder {
    /// Build an adapter with 4-connected movement.
    pub fn new<M: GridMap>(map: &M) -> Self {
        Self::build(map, None)
    }

    /// Build an adapter with 8-connected movement; diagonal steps weigh
    /// `diagonal_cost`. Fails on a negative cost.
    pub fn with_diagonal_cost<M: GridMap>(map: &M, diagonal_cost: f64) -> Result<Self, PathError> {
        if diagonal_cost < 0.0 {
            return Err(PathError::NegativeDiagonalCost {
                cost: diagonal_cost,
            });
        }
        Ok(Self::build(map, Some(diagonal_cost)))
    }

    fn build<M: GridMap>(map: &M, diagonal_cost: Option<f64>) -> Self {
        let cells = map.cell_count();
        let walkable: Vec<bool> = (0..cells).map(|i| map.is_walkable(map.point_for(i))).collect();

        let mut graph = EdgeWeightedDigraph::new(cells);
        let mut nbuf: Vec<Point> = Vec::with_capacity(8);
        for i in 0..cells {
            if !walkable[i] {
                continue;
            }
            let p = map.point_for(i);
            nbuf.clear();
            map.adjacent(p, diagonal_cost.is_some(), &mut nbuf);
            for &np in nbuf.iter() {
                let ni = map.index_for(np);
                if !walkable[ni] {
                    continue;
                }
                let weight = match diagonal_cost {
                    Some(c) if np.x != p.x && np.y != p.y => c,
                    _ => 1.0,
                };
                let added = graph.add_edge(DirectedEdge::new(i, ni, weight));
                debug_assert!(added.is_ok(), "adjacent cells are always in bounds");
            }
        }

        Self {
            graph,
            width: map.width(),
            height: map.height(),
            walkable,
            cached: None,
            rebuilds: 0,
        }
    }

    /// The shortest route from `source` to `destination`, both endpoints
    /// included.
    ///
    /// Fails with [`PathError::OutOfBounds`] when either point lies
    /// outside the grid, and with [`PathError::NoPath`] when the points
    /// are in bounds but no route connects them (an unwalkable endpoint
    /// included).
    pub fn shortest_path(&mut self, source: Point, destination: Point) -> Result<Path, PathError> {
        let si = self.index_of(source)?;
        let di = self.index_of(destination)?;
        if !self.walkable[si] || !self.walkable[di] {
            return Err(PathError::NoPath {
                from: source,
                to: destination,
            });
        }

        let width = self.width;
        let tree = self.tree_for(si)?;
        let Some(edges) = tree.path_to(di) else {
            return Err(PathError::NoPath {
                from: source,
                to: destination,
            });
        };

        let mut steps = Vec::with_capacity(edges.len() + 1);
        steps.push(source);
        for edge in edges {
            let i = edge.to() as i32;
            steps.push(Point::new(i % width, i / width));
        }
        Path::new(steps)
    }

    /// Like [`shortest_path`](Self::shortest_path), but returns `None`
    /// instead of failing — the form to prefer in hot per-turn loops
    /// where "no route" is an ordinary outcome.
    pub fn try_shortest_path(&mut self, source: Point, destination: Point) -> Option<Path> {
        self.shortest_path(source, destination).ok()
    }

    /// The underlying graph the adapter built from the grid snapshot.
    pub fn graph(&self) -> &EdgeWeightedDigraph {
        &self.graph
    }

    /// How many times the shortest-path tree has been (re)built. Queries
    /// repeating the previous source do not rebuild.
    pub fn tree_rebuilds(&self) -> u64 {
        self.rebuilds
    }

    /// The cached tree for `source`, rebuilding only on a source change.
    fn tree_for(&mut self, source: usize) -> Result<&Dijkstra, PathError> {
        let hit = matches!(&self.cached, Some(tree) if tree.source() == source);
        if !hit {
            log::debug!("building shortest-path tree for source vertex {source}");
            self.rebuilds += 1;
            self.cached = Some(Dijkstra::full(&self.graph, source)?);
        }
        match &self.cached {
            Some(tree) => Ok(tree),
            None => unreachable!(),
        }
    }

    fn index_of(&self, p: Point) -> Result<usize, PathError> {
        if p.x < 0 || p.x >= self.width || p.y < 0 || p.y >= self.height {
            return Err(PathError::OutOfBounds {
                point: p,
                width: self.width,
                height: self.height,
            });
        }
        Ok((p.y * self.width + p.x) as usize)
    }
}
