//! **roam-paths** — graph search and shortest-path algorithms for 2D
//! grid-based games.
//!
//! The crate answers "what is the best route between two cells" three
//! ways, trading setup cost against query volume:
//!
//! - [`PathFinder`] — build a graph from a walkability grid once, then
//!   answer many cell-to-cell queries; the shortest-path tree is cached
//!   per query source.
//! - [`AStar`] — heuristic search directly on a grid, no graph built;
//!   cheapest for a single query on a large map.
//! - [`Dijkstra`] — the underlying single-source algorithm over an
//!   explicit [`EdgeWeightedDigraph`], full-tree or single-destination.
//!
//! Underneath sit [`IndexMinPQ`], an indexed binary heap with O(log n)
//! decrease-key, and [`Path`], the cursor-stepped query result.
//!
//! Grids are anything implementing [`roam_core::GridMap`].

mod astar;
mod dijkstra;
mod distance;
mod error;
mod graph;
mod indexpq;
mod path;
mod pathfinder;

pub use astar::AStar;
pub use dijkstra::Dijkstra;
pub use distance::{manhattan, octile};
pub use error::PathError;
pub use graph::{DirectedEdge, EdgeWeightedDigraph};
pub use indexpq::IndexMinPQ;
pub use path::Path;
pub use pathfinder::PathFinder;
