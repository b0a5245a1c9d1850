use std::ops::{Range, RangeInclusive};

use crate::exterior::ExteriorSet;
use crate::grid::Grid2D;

/// Summed-area tables over the exterior indicator.
///
/// `cells[(x, y)]` counts exterior cells in `[0, x) x [0, y)`. The two line
/// tables count exposed unit segments (exterior on both sides) along each
/// grid line: `columns[(ix, iy)]` covers line `x = ix` over `[0, iy)`, and
/// `rows[(ix, iy)]` covers line `y = iy` over `[0, ix)`.
#[derive(Debug, Clone)]
pub struct ContainmentIndex {
    width: usize,
    height: usize,
    cells: Grid2D<usize>,
    columns: Grid2D<usize>,
    rows: Grid2D<usize>,
}

impl ContainmentIndex {
    #[tracing::instrument(skip_all, fields(width = exterior.width(), height = exterior.height()))]
    pub fn build(exterior: &ExteriorSet) -> Self {
        let width = exterior.width();
        let height = exterior.height();

        let mut cells: Grid2D<usize> = Grid2D::new(width + 1, height + 1);
        for y in 0..height {
            for x in 0..width {
                let outside = usize::from(exterior.is_exterior(x, y));
                cells[(x + 1, y + 1)] =
                    outside + cells[(x + 1, y)] + cells[(x, y + 1)] - cells[(x, y)];
            }
        }

        // Cell to the left/below of line 0 is past the grid edge.
        let behind = |line: usize| line.checked_sub(1).unwrap_or(usize::MAX);

        let mut columns: Grid2D<usize> = Grid2D::new(width + 1, height + 1);
        for ix in 0..=width {
            for iy in 0..height {
                let exposed = exterior.is_exterior(behind(ix), iy) && exterior.is_exterior(ix, iy);
                columns[(ix, iy + 1)] = columns[(ix, iy)] + usize::from(exposed);
            }
        }

        let mut rows: Grid2D<usize> = Grid2D::new(width + 1, height + 1);
        for iy in 0..=height {
            for ix in 0..width {
                let exposed = exterior.is_exterior(ix, behind(iy)) && exterior.is_exterior(ix, iy);
                rows[(ix + 1, iy)] = rows[(ix, iy)] + usize::from(exposed);
            }
        }

        Self {
            width,
            height,
            cells,
            columns,
            rows,
        }
    }

    fn clamp(range: Range<usize>, limit: usize) -> Range<usize> {
        range.start.min(limit)..range.end.min(limit)
    }

    /// Exterior cells in the half-open window `x_range x y_range`. Empty
    /// windows hold nothing; windows reaching past the grid are clipped.
    pub fn exterior_cells(&self, x_range: Range<usize>, y_range: Range<usize>) -> usize {
        let Range { start: x1, end: x2 } = Self::clamp(x_range, self.width);
        let Range { start: y1, end: y2 } = Self::clamp(y_range, self.height);
        if x1 >= x2 || y1 >= y2 {
            return 0;
        }

        // (Total Rect) - (Top Strip) - (Left Strip) + (Top-Left Overlap)
        // Order operations to prevent unsigned underflow: (A + D) - B - C
        (self.cells[(x2, y2)] + self.cells[(x1, y1)]) - self.cells[(x2, y1)] - self.cells[(x1, y2)]
    }

    pub fn is_interior(&self, x_range: Range<usize>, y_range: Range<usize>) -> bool {
        self.exterior_cells(x_range, y_range) == 0
    }

    /// Exposed unit segments along the vertical grid line `ix`.
    pub fn exposed_on_column(&self, ix: usize, y_range: Range<usize>) -> usize {
        let Range { start, end } = Self::clamp(y_range, self.height);
        if ix > self.width || start >= end {
            return 0;
        }
        self.columns[(ix, end)] - self.columns[(ix, start)]
    }

    /// Exposed unit segments along the horizontal grid line `iy`.
    pub fn exposed_on_row(&self, iy: usize, x_range: Range<usize>) -> usize {
        let Range { start, end } = Self::clamp(x_range, self.width);
        if iy > self.height || start >= end {
            return 0;
        }
        self.rows[(end, iy)] - self.rows[(start, iy)]
    }

    /// Whether the closed window between grid nodes `x` and `y` lies inside
    /// the polygon or on its boundary.
    ///
    /// Windows collapsed to a line are checked segment by segment; a single
    /// node needs at least one touching interior cell.
    pub fn admits(&self, x: RangeInclusive<usize>, y: RangeInclusive<usize>) -> bool {
        let (x1, x2) = x.into_inner();
        let (y1, y2) = y.into_inner();

        match (x1 < x2, y1 < y2) {
            (true, true) => self.is_interior(x1..x2, y1..y2),
            (false, true) => self.exposed_on_column(x1, y1..y2) == 0,
            (true, false) => self.exposed_on_row(y1, x1..x2) == 0,
            (false, false) => {
                let xs = Self::clamp(x1.saturating_sub(1)..x1 + 1, self.width);
                let ys = Self::clamp(y1.saturating_sub(1)..y1 + 1, self.height);
                let touching = xs.len() * ys.len();
                self.exterior_cells(xs, ys) < touching
            }
        }
    }
}
