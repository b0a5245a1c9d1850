pub mod compress;
pub mod containment;
pub mod error;
pub mod evaluator;
pub mod exterior;
pub mod grid;
pub mod parser;
pub mod part1;
pub mod part2;
pub mod walls;

pub use error::GeometryError;

/// A red tile on the integer lattice. Consecutive vertices (wrapping last to
/// first) are joined by axis-aligned edges.
pub type Vertex = glam::I64Vec2;
