//! A* shortest-path search directly on a grid.

use roam_core::{GridMap, Point};

use crate::distance::{manhattan, octile};
use crate::error::PathError;
use crate::indexpq::IndexMinPQ;

/// Parent sentinel in the node arena.
const NO_PARENT: usize = usize::MAX;

/// Heuristic shortest-path search over any [`GridMap`].
///
/// Unlike [`PathFinder`](crate::PathFinder), no graph is built up front:
/// for a single query on a large map this skips the O(cells) construction
/// cost entirely. Movement is 4-connected with the Manhattan heuristic by
/// default, or 8-connected with the octile heuristic when a diagonal step
/// cost is supplied.
#[derive(Debug, Clone, Default)]
pub struct AStar {
    diagonal_cost: Option<f64>,
}

impl AStar {
    /// 4-connected movement, unit step cost.
    pub fn new() -> Self {
        Self {
            diagonal_cost: None,
        }
    }

    /// 8-connected movement; diagonal steps cost `cost`, orthogonal steps
    /// cost 1. Fails on a negative cost, which would break heuristic
    /// admissibility.
    pub fn with_diagonal_cost(cost: f64) -> Result<Self, PathError> {
        if cost < 0.0 {
            return Err(PathError::NegativeDiagonalCost { cost });
        }
        Ok(Self {
            diagonal_cost: Some(cost),
        })
    }

    /// Compute the cheapest path from `from` to `to`, including both
    /// endpoints. Returns `None` when either endpoint is out of bounds or
    /// unwalkable, or when no route exists.
    pub fn find_path<M: GridMap>(&self, from: Point, to: Point, map: &M) -> Option<Vec<Point>> {
        if !map.is_walkable(from) || !map.is_walkable(to) {
            return None;
        }
        if from == to {
            return Some(vec![from]);
        }

        let cells = map.cell_count();
        let start = map.index_for(from);
        let goal = map.index_for(to);

        // Node arena: per-cell best-known g and parent back-pointer.
        let mut g = vec![f64::INFINITY; cells];
        let mut parent = vec![NO_PARENT; cells];
        let mut closed = vec![false; cells];
        let mut open = IndexMinPQ::new(cells);

        g[start] = 0.0;
        open.insert(start, self.estimate(from, to));

        let mut nbuf: Vec<Point> = Vec::with_capacity(8);

        while !open.is_empty() {
            let ci = open.delete_min();
            if ci == goal {
                return Some(reconstruct(map, &parent, goal));
            }
            closed[ci] = true;
            let cp = map.point_for(ci);

            nbuf.clear();
            map.adjacent(cp, self.diagonal_cost.is_some(), &mut nbuf);

            for &np in nbuf.iter() {
                if !map.is_walkable(np) {
                    continue;
                }
                let ni = map.index_for(np);
                if closed[ni] {
                    continue;
                }
                let tentative = g[ci] + self.step_cost(cp, np);
                if tentative >= g[ni] {
                    continue;
                }
                g[ni] = tentative;
                parent[ni] = ci;
                let f = tentative + self.estimate(np, to);
                if open.contains(ni) {
                    // Better route to an already-open cell: refresh its
                    // ordering key. change_key rather than decrease_key:
                    // g strictly improved, but the heuristic term can
                    // absorb a sub-ulp improvement of f.
                    open.change_key(ni, f);
                } else {
                    open.insert(ni, f);
                }
            }
        }

        None
    }

    fn step_cost(&self, from: Point, to: Point) -> f64 {
        match self.diagonal_cost {
            Some(c) if from.x != to.x && from.y != to.y => c,
            _ => 1.0,
        }
    }

    fn estimate(&self, from: Point, to: Point) -> f64 {
        match self.diagonal_cost {
            Some(c) => octile(from, to, c),
            None => manhattan(from, to) as f64,
        }
    }
}

/// Walk the parent chain back from `goal` and reverse it.
fn reconstruct<M: GridMap>(map: &M, parent: &[usize], goal: usize) -> Vec<Point> {
    let mut path = Vec::new();
    let mut ci = goal;
    while ci != NO_PARENT {
        path.push(map.point_for(ci));
        ci = parent[ci];
    }
    path.reverse();
    path
}
