use crate::error::{Axis, GeometryError};
use crate::Vertex;

/// Sorted, deduplicated coordinates of one axis, padded with one value below
/// the minimum and one above the maximum so the outermost cells are always
/// outside the polygon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisMap {
    axis: Axis,
    coords: Vec<i64>,
}

impl AxisMap {
    pub fn new(axis: Axis, values: impl IntoIterator<Item = i64>) -> Result<Self, GeometryError> {
        let mut coords: Vec<i64> = values.into_iter().collect();

        let (Some(&min), Some(&max)) = (coords.iter().min(), coords.iter().max()) else {
            return Err(GeometryError::EmptyAxis { axis });
        };

        // Add padding to guarantee an outer boundary for flood fill
        let below = min
            .checked_sub(1)
            .ok_or(GeometryError::MarginOverflow { axis, value: min })?;
        let above = max
            .checked_add(1)
            .ok_or(GeometryError::MarginOverflow { axis, value: max })?;
        coords.push(below);
        coords.push(above);

        coords.sort_unstable();
        coords.dedup();

        Ok(Self { axis, coords })
    }

    #[inline]
    pub fn index_of(&self, value: i64) -> Option<usize> {
        self.coords.binary_search(&value).ok()
    }

    /// Like [`AxisMap::index_of`], but a missing coordinate is an error.
    #[inline]
    pub fn require(&self, value: i64) -> Result<usize, GeometryError> {
        self.index_of(value).ok_or(GeometryError::UnmappedCoordinate {
            axis: self.axis,
            value,
        })
    }

    #[inline]
    pub fn value_at(&self, index: usize) -> Option<i64> {
        self.coords.get(index).copied()
    }

    /// Number of grid lines on this axis.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Number of cells between consecutive grid lines.
    pub fn cells(&self) -> usize {
        self.coords.len().saturating_sub(1)
    }
}

/// The pair of axis maps every later phase indexes into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedPlane {
    pub x: AxisMap,
    pub y: AxisMap,
}

impl CompressedPlane {
    pub fn from_vertices(vertices: &[Vertex]) -> Result<Self, GeometryError> {
        Ok(Self {
            x: AxisMap::new(Axis::X, vertices.iter().map(|v| v.x))?,
            y: AxisMap::new(Axis::Y, vertices.iter().map(|v| v.y))?,
        })
    }

    /// Compressed grid node of a raw vertex.
    pub fn locate(&self, vertex: Vertex) -> Result<(usize, usize), GeometryError> {
        Ok((self.x.require(vertex.x)?, self.y.require(vertex.y)?))
    }

    /// Cell grid dimensions: one fewer than the line count on each axis.
    pub fn cell_dims(&self) -> (usize, usize) {
        (self.x.cells(), self.y.cells())
    }
}
