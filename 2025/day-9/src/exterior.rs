use std::collections::VecDeque;

use bitvec::prelude::*;

use crate::error::GeometryError;
use crate::walls::Walls;

/// Cells reachable from the margin without crossing a wall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExteriorSet {
    width: usize,
    height: usize,
    cells: BitVec<u64, Lsb0>,
}

impl ExteriorSet {
    /// Breadth-first flood fill from cell `(0, 0)`, which the axis padding
    /// keeps outside every polygon.
    #[tracing::instrument(skip_all)]
    pub fn flood(walls: &Walls) -> Result<Self, GeometryError> {
        let (width, height) = walls.cell_dims();
        if width == 0 || height == 0 {
            return Err(GeometryError::SeedOutOfBounds { width, height });
        }

        let mut cells = bitvec![u64, Lsb0; 0; width * height];
        let mut queue: VecDeque<(usize, usize)> = VecDeque::with_capacity(width + height);

        queue.push_back((0, 0));
        cells.set(0, true);

        while let Some((cx, cy)) = queue.pop_front() {
            // (neighbour, wall crossed to reach it)
            let moves = [
                (cx.checked_sub(1).map(|x| (x, cy)), walls.vertical(cx, cy)),
                (Some((cx + 1, cy)), walls.vertical(cx + 1, cy)),
                (cy.checked_sub(1).map(|y| (cx, y)), walls.horizontal(cx, cy)),
                (Some((cx, cy + 1)), walls.horizontal(cx, cy + 1)),
            ];

            for (next, blocked) in moves {
                let Some((nx, ny)) = next else { continue };
                if blocked || nx >= width || ny >= height {
                    continue;
                }

                let idx = ny * width + nx;
                if !cells[idx] {
                    cells.set(idx, true);
                    queue.push_back((nx, ny));
                }
            }
        }

        tracing::debug!(width, height, exterior = cells.count_ones(), "flooded exterior");
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cells beyond the grid lie outside the padded bounding box and count
    /// as exterior.
    #[inline]
    pub fn is_exterior(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            true
        } else {
            self.cells[y * self.width + x]
        }
    }

    pub fn count(&self) -> usize {
        self.cells.count_ones()
    }
}
