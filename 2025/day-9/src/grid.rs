use std::ops::{Index, IndexMut};

/// A dense 2D grid wrapper for flattened vectors, stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid2D<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T: Clone + Default> Grid2D<T> {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![T::default(); width * height],
        }
    }
}

impl<T> Grid2D<T> {
    #[inline(always)]
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x >= self.width || y >= self.height {
            None
        } else {
            Some(&self.data[y * self.width + x])
        }
    }

    #[inline(always)]
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        if x >= self.width || y >= self.height {
            None
        } else {
            Some(&mut self.data[y * self.width + x])
        }
    }
}

impl<T> Index<(usize, usize)> for Grid2D<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, (x, y): (usize, usize)) -> &T {
        assert!(x < self.width && y < self.height, "({x}, {y}) out of bounds");
        &self.data[y * self.width + x]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid2D<T> {
    #[inline(always)]
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut T {
        assert!(x < self.width && y < self.height, "({x}, {y}) out of bounds");
        &mut self.data[y * self.width + x]
    }
}
