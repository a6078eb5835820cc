//! Whole-grid and sub-rectangle traversal, plus bulk fills
//!
//! All traversals visit cells in column-major order. The mutable variants
//! hand out one cell at a time in that order, so a visit observes every
//! change made to earlier cells during the same pass.

use crate::io::error::Result;
use crate::spatial::grid::Grid;

impl<T> Grid<T> {
    /// Iterate `((x, y), &value)` pairs in column-major order
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> {
        self.cells.indexed_iter()
    }

    /// Visit every cell as `(value, x, y)` in column-major order
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&T, i32, i32),
    {
        for ((x, y), value) in self.cells.indexed_iter() {
            visit(value, x as i32, y as i32);
        }
    }

    /// Visit every cell mutably in column-major order
    pub fn for_each_mut<F>(&mut self, mut visit: F) -> &mut Self
    where
        F: FnMut(&mut T, i32, i32),
    {
        for ((x, y), value) in self.cells.indexed_iter_mut() {
            visit(value, x as i32, y as i32);
        }
        self
    }

    /// Visit every coordinate in column-major order with the whole grid
    ///
    /// The visit may read or write any cell, so a write to a cell that has
    /// not been visited yet is seen when the pass reaches it. The extent of
    /// the pass is fixed when it starts.
    pub fn for_each_with_grid<F>(&mut self, mut visit: F) -> &mut Self
    where
        F: FnMut(&mut Self, i32, i32),
    {
        let (width, height) = self.dimensions();
        for x in 0..width {
            for y in 0..height {
                visit(self, x as i32, y as i32);
            }
        }
        self
    }

    /// Visit the cells of the rectangle `[x, x + width) x [y, y + height)`
    ///
    /// Coordinates passed to `visit` are grid coordinates, not offsets
    /// into the rectangle.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` unless the rectangle is fully inside the grid
    pub fn for_area<F>(
        &self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        mut visit: F,
    ) -> Result<()>
    where
        F: FnMut(&T, i32, i32),
    {
        let area = self.area_view("for_area", x, y, width, height)?;
        for ((dx, dy), value) in area.indexed_iter() {
            visit(value, x + dx as i32, y + dy as i32);
        }
        Ok(())
    }

    /// Mutable counterpart of [`Grid::for_area`]
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` unless the rectangle is fully inside the grid
    pub fn for_area_mut<F>(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        mut visit: F,
    ) -> Result<&mut Self>
    where
        F: FnMut(&mut T, i32, i32),
    {
        let mut area = self.area_view_mut("for_area_mut", x, y, width, height)?;
        for ((dx, dy), value) in area.indexed_iter_mut() {
            visit(value, x + dx as i32, y + dy as i32);
        }
        Ok(self)
    }
}

impl<T: Clone> Grid<T> {
    /// Overwrite every cell with `value`
    pub fn fill(&mut self, value: T) -> &mut Self {
        self.cells.fill(value);
        self
    }

    /// Overwrite every cell with the default value
    pub fn reset(&mut self) -> &mut Self {
        let value = self.default_value.clone();
        self.fill(value)
    }

    /// Overwrite the cells of a rectangle with `value`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` unless the rectangle is fully inside the grid
    pub fn fill_area(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        value: T,
    ) -> Result<&mut Self> {
        self.area_view_mut("fill_area", x, y, width, height)?
            .fill(value);
        Ok(self)
    }

    /// Overwrite the cells of a rectangle with the default value
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` unless the rectangle is fully inside the grid
    pub fn reset_area(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<&mut Self> {
        let value = self.default_value.clone();
        self.fill_area(x, y, width, height, value)
    }
}
