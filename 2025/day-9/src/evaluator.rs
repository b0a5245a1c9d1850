use rayon::prelude::*;

use crate::compress::CompressedPlane;
use crate::containment::ContainmentIndex;
use crate::error::GeometryError;
use crate::Vertex;

/// Inclusive lattice area of the rectangle with opposite corners `a` and `b`:
/// `(|dx| + 1) * (|dy| + 1)`. `None` if it does not fit in a `u64`.
pub fn inclusive_area(a: Vertex, b: Vertex) -> Option<u64> {
    let w = a.x.abs_diff(b.x).checked_add(1)?;
    let h = a.y.abs_diff(b.y).checked_add(1)?;
    w.checked_mul(h)
}

/// Scores every vertex pair against the containment index.
pub struct RectangleEvaluator<'a> {
    plane: &'a CompressedPlane,
    index: &'a ContainmentIndex,
}

impl<'a> RectangleEvaluator<'a> {
    pub fn new(plane: &'a CompressedPlane, index: &'a ContainmentIndex) -> Self {
        Self { plane, index }
    }

    /// Area of the rectangle spanned by `a` and `b`, or `None` if any part of
    /// it leaves the polygon.
    pub fn candidate_area(&self, a: Vertex, b: Vertex) -> Result<Option<u64>, GeometryError> {
        let na = self.plane.locate(a)?;
        let nb = self.plane.locate(b)?;
        self.score((a, na), (b, nb))
    }

    fn score(
        &self,
        (p1, (x1, y1)): (Vertex, (usize, usize)),
        (p2, (x2, y2)): (Vertex, (usize, usize)),
    ) -> Result<Option<u64>, GeometryError> {
        let x_nodes = x1.min(x2)..=x1.max(x2);
        let y_nodes = y1.min(y2)..=y1.max(y2);

        if !self.index.admits(x_nodes, y_nodes) {
            return Ok(None);
        }

        inclusive_area(p1, p2)
            .map(Some)
            .ok_or(GeometryError::AreaOverflow { a: p1, b: p2 })
    }

    /// Largest candidate area over all unordered pairs of distinct vertex
    /// positions in the list, or 0 if none qualifies.
    #[tracing::instrument(skip_all, fields(vertices = vertices.len()))]
    pub fn largest_area(&self, vertices: &[Vertex]) -> Result<u64, GeometryError> {
        // Pre-calculate indices for all points to avoid lookups in the hot loop
        let indexed = vertices
            .iter()
            .map(|&v| self.plane.locate(v).map(|node| (v, node)))
            .collect::<Result<Vec<_>, _>>()?;

        indexed
            .par_iter()
            .enumerate()
            .map(|(i, &first)| {
                indexed
                    .iter()
                    .skip(i + 1)
                    .try_fold(0, |local_max, &second| {
                        let area = self.score(first, second)?;
                        Ok::<_, GeometryError>(area.map_or(local_max, |area| local_max.max(area)))
                    })
            })
            .try_reduce(|| 0, |a, b| Ok(a.max(b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exterior::ExteriorSet;
    use crate::walls::Walls;
    use rstest::rstest;

    fn vertices(points: &[(i64, i64)]) -> Vec<Vertex> {
        points.iter().map(|&(x, y)| Vertex::new(x, y)).collect()
    }

    fn evaluate(shape: &[Vertex]) -> miette::Result<u64> {
        let plane = CompressedPlane::from_vertices(shape)?;
        let walls = Walls::from_polygon(shape, &plane)?;
        let exterior = ExteriorSet::flood(&walls)?;
        let index = ContainmentIndex::build(&exterior);
        Ok(RectangleEvaluator::new(&plane, &index).largest_area(shape)?)
    }

    #[rstest]
    #[case((0, 0), (0, 0), 1)]
    #[case((2, 5), (9, 3), 24)]
    #[case((9, 3), (2, 5), 24)]
    #[case((-4, 10), (4, -10), 189)]
    fn inclusive_area_counts_lattice_points(
        #[case] a: (i64, i64),
        #[case] b: (i64, i64),
        #[case] expected: u64,
    ) {
        let area = inclusive_area(Vertex::new(a.0, a.1), Vertex::new(b.0, b.1));
        assert_eq!(area, Some(expected));
    }

    #[test]
    fn inclusive_area_reports_overflow() {
        let a = Vertex::new(i64::MIN, i64::MIN);
        let b = Vertex::new(i64::MAX, i64::MAX);
        assert_eq!(inclusive_area(a, b), None);
    }

    #[test]
    fn l_shape_rejects_the_notch_and_keeps_the_arms() -> miette::Result<()> {
        let l_shape = vertices(&[(0, 0), (4, 0), (4, 2), (2, 2), (2, 4), (0, 4)]);
        let plane = CompressedPlane::from_vertices(&l_shape)?;
        let walls = Walls::from_polygon(&l_shape, &plane)?;
        let exterior = ExteriorSet::flood(&walls)?;
        let index = ContainmentIndex::build(&exterior);
        let evaluator = RectangleEvaluator::new(&plane, &index);

        // (4,0)..(0,4) covers the missing top-right quadrant
        assert_eq!(
            evaluator.candidate_area(Vertex::new(4, 0), Vertex::new(0, 4))?,
            None
        );
        assert_eq!(
            evaluator.candidate_area(Vertex::new(4, 2), Vertex::new(2, 4))?,
            None
        );
        assert_eq!(
            evaluator.candidate_area(Vertex::new(0, 0), Vertex::new(4, 2))?,
            Some(15)
        );
        assert_eq!(evaluator.largest_area(&l_shape)?, 15);
        Ok(())
    }

    #[test]
    fn unit_square_is_fully_interior() -> miette::Result<()> {
        let square = vertices(&[(0, 0), (0, 2), (2, 2), (2, 0)]);
        assert_eq!(evaluate(&square)?, 9);
        Ok(())
    }

    #[test]
    fn staircase_picks_the_widest_step() -> miette::Result<()> {
        let stairs = vertices(&[
            (0, 0),
            (9, 0),
            (9, 1),
            (6, 1),
            (6, 4),
            (3, 4),
            (3, 9),
            (0, 9),
        ]);
        // (0,0)..(3,9) = 4 * 10 beats (0,0)..(6,4) = 7 * 5 and (0,0)..(9,1) = 10 * 2
        assert_eq!(evaluate(&stairs)?, 40);
        Ok(())
    }

    #[test]
    fn negative_coordinates_are_handled() -> miette::Result<()> {
        let shape = vertices(&[(-10, -10), (-2, -10), (-2, -4), (-10, -4)]);
        assert_eq!(evaluate(&shape)?, 9 * 7);
        Ok(())
    }

    #[test]
    fn bare_segment_encloses_nothing() -> miette::Result<()> {
        assert_eq!(evaluate(&vertices(&[(0, 0), (0, 5)]))?, 0);
        assert_eq!(evaluate(&vertices(&[(3, 1), (8, 1)]))?, 0);
        Ok(())
    }

    #[test]
    fn foreign_vertices_are_rejected() -> miette::Result<()> {
        let square = vertices(&[(0, 0), (0, 2), (2, 2), (2, 0)]);
        let plane = CompressedPlane::from_vertices(&square)?;
        let walls = Walls::from_polygon(&square, &plane)?;
        let exterior = ExteriorSet::flood(&walls)?;
        let index = ContainmentIndex::build(&exterior);
        let evaluator = RectangleEvaluator::new(&plane, &index);

        assert!(matches!(
            evaluator.candidate_area(Vertex::new(0, 0), Vertex::new(1, 1)),
            Err(GeometryError::UnmappedCoordinate { value: 1, .. })
        ));
        Ok(())
    }
}
