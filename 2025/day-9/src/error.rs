use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

use crate::Vertex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Everything that can go wrong between a parsed vertex list and the final area.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum GeometryError {
    #[error("cannot compress the {axis} axis of an empty vertex list")]
    #[diagnostic(code(day9::empty_axis))]
    EmptyAxis { axis: Axis },

    #[error("{axis} coordinate {value} leaves no room for the outer margin")]
    #[diagnostic(
        code(day9::margin_overflow),
        help("coordinates must lie strictly between i64::MIN and i64::MAX")
    )]
    MarginOverflow { axis: Axis, value: i64 },

    #[error("{axis} coordinate {value} is not part of the compressed grid")]
    #[diagnostic(code(day9::unmapped_coordinate))]
    UnmappedCoordinate { axis: Axis, value: i64 },

    #[error("edge {start} -> {end} is neither horizontal nor vertical")]
    #[diagnostic(
        code(day9::diagonal_edge),
        help("consecutive vertices (and the last/first pair) must share an x or a y")
    )]
    DiagonalEdge { start: Vertex, end: Vertex },

    #[error("flood fill seed lies outside the {width}x{height} cell grid")]
    #[diagnostic(code(day9::seed_out_of_bounds))]
    SeedOutOfBounds { width: usize, height: usize },

    #[error("area of the rectangle spanned by {a} and {b} does not fit in u64")]
    #[diagnostic(code(day9::area_overflow))]
    AreaOverflow { a: Vertex, b: Vertex },
}
