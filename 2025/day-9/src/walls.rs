use bitvec::prelude::*;

use crate::compress::CompressedPlane;
use crate::error::GeometryError;
use crate::Vertex;

/// Blocked cell adjacencies on the compressed grid.
///
/// A horizontal wall at `(ix, iy)` sits on grid line `iy` between x lines `ix`
/// and `ix + 1`, separating cell `(ix, iy - 1)` from cell `(ix, iy)`. A
/// vertical wall at `(ix, iy)` sits on grid line `ix` between y lines `iy`
/// and `iy + 1`, separating cell `(ix - 1, iy)` from cell `(ix, iy)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walls {
    lines_x: usize,
    lines_y: usize,
    /// `(lines_x - 1) * lines_y` bits, row-major by `iy`.
    horizontal: BitVec<u64, Lsb0>,
    /// `lines_x * (lines_y - 1)` bits, row-major by `iy`.
    vertical: BitVec<u64, Lsb0>,
}

impl Walls {
    pub fn new(plane: &CompressedPlane) -> Self {
        let lines_x = plane.x.len();
        let lines_y = plane.y.len();
        Self {
            lines_x,
            lines_y,
            horizontal: bitvec![u64, Lsb0; 0; lines_x.saturating_sub(1) * lines_y],
            vertical: bitvec![u64, Lsb0; 0; lines_x * lines_y.saturating_sub(1)],
        }
    }

    /// Walks the closed boundary (last vertex back to the first) and marks
    /// every edge.
    #[tracing::instrument(skip_all, fields(vertices = vertices.len()))]
    pub fn from_polygon(vertices: &[Vertex], plane: &CompressedPlane) -> Result<Self, GeometryError> {
        let mut walls = Self::new(plane);

        for (i, &start) in vertices.iter().enumerate() {
            let end = vertices[(i + 1) % vertices.len()];
            walls.mark_edge(start, end, plane)?;
        }

        tracing::debug!(
            horizontal = walls.horizontal.count_ones(),
            vertical = walls.vertical.count_ones(),
            "marked walls"
        );
        Ok(walls)
    }

    /// Marks one boundary edge. Zero-length edges mark nothing and re-marking
    /// an existing wall is a no-op.
    pub fn mark_edge(
        &mut self,
        start: Vertex,
        end: Vertex,
        plane: &CompressedPlane,
    ) -> Result<(), GeometryError> {
        if start == end {
            return Ok(());
        }

        if start.y == end.y {
            let iy = plane.y.require(start.y)?;
            let x1 = plane.x.require(start.x.min(end.x))?;
            let x2 = plane.x.require(start.x.max(end.x))?;
            for ix in x1..x2 {
                self.set_horizontal(ix, iy, true);
            }
        } else if start.x == end.x {
            let ix = plane.x.require(start.x)?;
            let y1 = plane.y.require(start.y.min(end.y))?;
            let y2 = plane.y.require(start.y.max(end.y))?;
            for iy in y1..y2 {
                self.set_vertical(ix, iy, true);
            }
        } else {
            return Err(GeometryError::DiagonalEdge { start, end });
        }
        Ok(())
    }

    /// Width and height of the cell grid these walls separate.
    pub fn cell_dims(&self) -> (usize, usize) {
        (
            self.lines_x.saturating_sub(1),
            self.lines_y.saturating_sub(1),
        )
    }

    fn horizontal_index(&self, ix: usize, iy: usize) -> Option<usize> {
        (ix + 1 < self.lines_x && iy < self.lines_y).then(|| iy * (self.lines_x - 1) + ix)
    }

    fn vertical_index(&self, ix: usize, iy: usize) -> Option<usize> {
        (ix < self.lines_x && iy + 1 < self.lines_y).then(|| iy * self.lines_x + ix)
    }

    /// Out-of-range positions are never blocked.
    #[inline]
    pub fn horizontal(&self, ix: usize, iy: usize) -> bool {
        self.horizontal_index(ix, iy)
            .is_some_and(|idx| self.horizontal[idx])
    }

    #[inline]
    pub fn vertical(&self, ix: usize, iy: usize) -> bool {
        self.vertical_index(ix, iy)
            .is_some_and(|idx| self.vertical[idx])
    }

    /// Out-of-range writes are ignored.
    pub fn set_horizontal(&mut self, ix: usize, iy: usize, blocked: bool) {
        if let Some(idx) = self.horizontal_index(ix, iy) {
            self.horizontal.set(idx, blocked);
        }
    }

    pub fn set_vertical(&mut self, ix: usize, iy: usize, blocked: bool) {
        if let Some(idx) = self.vertical_index(ix, iy) {
            self.vertical.set(idx, blocked);
        }
    }

    pub fn count(&self) -> usize {
        self.horizontal.count_ones() + self.vertical.count_ones()
    }
}
