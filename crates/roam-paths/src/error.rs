//! Error types for graph construction and path queries.

use std::fmt;

use roam_core::Point;

use crate::graph::DirectedEdge;

/// Errors reported by the graph, search, and path types.
///
/// The variants fall into four groups: invalid arguments
/// ([`InvalidVertex`](Self::InvalidVertex),
/// [`OutOfBounds`](Self::OutOfBounds), [`EmptyPath`](Self::EmptyPath)),
/// structural precondition violations detected eagerly at construction
/// ([`NegativeWeight`](Self::NegativeWeight),
/// [`NegativeDiagonalCost`](Self::NegativeDiagonalCost)), well-formed
/// queries with no answer ([`NoPath`](Self::NoPath)), and stepping a
/// cursor past its ends ([`ExhaustedCursor`](Self::ExhaustedCursor)).
#[derive(Debug, Clone, PartialEq)]
pub enum PathError {
    /// A vertex id outside `0..vertices` was supplied.
    InvalidVertex { vertex: usize, vertices: usize },
    /// A point outside the grid was supplied.
    OutOfBounds {
        point: Point,
        width: i32,
        height: i32,
    },
    /// An edge with a negative weight was supplied to Dijkstra.
    NegativeWeight { edge: DirectedEdge },
    /// A negative diagonal movement cost would break heuristic
    /// admissibility.
    NegativeDiagonalCost { cost: f64 },
    /// No route connects the two cells.
    NoPath { from: Point, to: Point },
    /// A path requires at least one step.
    EmptyPath,
    /// The cursor was stepped past the path's first or last element.
    ExhaustedCursor { forward: bool },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidVertex { vertex, vertices } => {
                write!(f, "vertex {vertex} out of range for a graph with {vertices} vertices")
            }
            Self::OutOfBounds {
                point,
                width,
                height,
            } => write!(f, "point {point} outside a {width}x{height} grid"),
            Self::NegativeWeight { edge } => write!(f, "edge {edge} has a negative weight"),
            Self::NegativeDiagonalCost { cost } => {
                write!(f, "negative diagonal movement cost {cost}")
            }
            Self::NoPath { from, to } => write!(f, "no path from {from} to {to}"),
            Self::EmptyPath => write!(f, "a path requires at least one step"),
            Self::ExhaustedCursor { forward: true } => write!(f, "no more steps forward"),
            Self::ExhaustedCursor { forward: false } => write!(f, "no more steps backward"),
        }
    }
}

impl std::error::Error for PathError {}
