use miette::*;

use crate::compress::CompressedPlane;
use crate::containment::ContainmentIndex;
use crate::error::GeometryError;
use crate::evaluator::RectangleEvaluator;
use crate::exterior::ExteriorSet;
use crate::parser::parse_vertices;
use crate::walls::Walls;
use crate::Vertex;

// -----------------------------------------------------------------------------
// Geometry Engine
// -----------------------------------------------------------------------------

/// Compressed grid plus the containment index built over it.
pub struct GeometryEngine {
    plane: CompressedPlane,
    index: ContainmentIndex,
}

impl GeometryEngine {
    #[tracing::instrument(skip_all, fields(vertices = points.len()))]
    pub fn build(points: &[Vertex]) -> Result<Self, GeometryError> {
        let plane = CompressedPlane::from_vertices(points)?;
        tracing::debug!(lines_x = plane.x.len(), lines_y = plane.y.len(), "compressed axes");

        let walls = Walls::from_polygon(points, &plane)?;
        let exterior = ExteriorSet::flood(&walls)?;
        let index = ContainmentIndex::build(&exterior);

        Ok(Self { plane, index })
    }

    pub fn plane(&self) -> &CompressedPlane {
        &self.plane
    }

    pub fn largest_interior_area(&self, points: &[Vertex]) -> Result<u64, GeometryError> {
        RectangleEvaluator::new(&self.plane, &self.index).largest_area(points)
    }
}

/// Largest rectangle with red tiles at two opposite corners that stays inside
/// the loop the tiles describe. Fewer than two tiles give 0.
pub fn largest_interior_area(points: &[Vertex]) -> Result<u64, GeometryError> {
    if points.len() < 2 {
        return Ok(0);
    }

    GeometryEngine::build(points)?.largest_interior_area(points)
}

#[tracing::instrument(skip(input), fields(bytes = input.len()))]
pub fn process(input: &str) -> Result<String> {
    let points = parse_vertices(input)?;
    let max_valid_area = largest_interior_area(&points)?;
    Ok(max_valid_area.to_string())
}
