//! **roam-core** — foundational grid types for the *roam* pathfinding toolkit.
//!
//! This crate provides the types the search algorithms are written against:
//! the geometry primitive [`Point`], the [`GridMap`] trait describing a
//! walkability grid, and [`WalkMap`], a concrete grid parseable from ASCII
//! art (`#` wall, `.` floor).

pub mod geom;
pub mod map;

pub use geom::Point;
pub use map::{GridMap, MapError, WalkMap};
