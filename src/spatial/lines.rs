//! Row and column operations
//!
//! A row is every cell with the same `y`, ordered by `x`; a column is every
//! cell with the same `x`, ordered by `y`. Each operation validates its
//! row/column index before touching the grid.

use ndarray::Axis;

use crate::io::error::Result;
use crate::spatial::grid::Grid;

impl<T> Grid<T> {
    /// Visit the cells of row `y` as `(value, x, y)`, left to right
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `y` is not a row of the grid
    pub fn for_row<F>(&self, y: i32, mut visit: F) -> Result<()>
    where
        F: FnMut(&T, i32, i32),
    {
        let [_, row] = self.check_point("for_row", 0, y)?;
        for (x, value) in self.cells.index_axis(Axis(1), row).iter().enumerate() {
            visit(value, x as i32, y);
        }
        Ok(())
    }

    /// Visit the cells of column `x` as `(value, x, y)`, top to bottom
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `x` is not a column of the grid
    pub fn for_col<F>(&self, x: i32, mut visit: F) -> Result<()>
    where
        F: FnMut(&T, i32, i32),
    {
        let [col, _] = self.check_point("for_col", x, 0)?;
        for (y, value) in self.cells.index_axis(Axis(0), col).iter().enumerate() {
            visit(value, x, y as i32);
        }
        Ok(())
    }

    /// Exchange two rows in place
    ///
    /// Swapping a row with itself is validated and then does nothing.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if either index is not a row of the grid
    pub fn swap_row(&mut self, y1: i32, y2: i32) -> Result<&mut Self> {
        let [_, first] = self.check_point("swap_row", 0, y1)?;
        let [_, second] = self.check_point("swap_row", 0, y2)?;

        if first != second {
            for x in 0..self.width() {
                self.cells.swap([x, first], [x, second]);
            }
        }
        Ok(self)
    }

    /// Exchange two columns in place
    ///
    /// Swapping a column with itself is validated and then does nothing.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if either index is not a column of the grid
    pub fn swap_col(&mut self, x1: i32, x2: i32) -> Result<&mut Self> {
        let [first, _] = self.check_point("swap_col", x1, 0)?;
        let [second, _] = self.check_point("swap_col", x2, 0)?;

        if first != second {
            for y in 0..self.height() {
                self.cells.swap([first, y], [second, y]);
            }
        }
        Ok(self)
    }
}

impl<T: Clone> Grid<T> {
    /// Copy of row `y`, ordered by `x`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `y` is not a row of the grid
    pub fn get_row(&self, y: i32) -> Result<Vec<T>> {
        let [_, row] = self.check_point("get_row", 0, y)?;
        Ok(self.cells.index_axis(Axis(1), row).to_vec())
    }

    /// Copy of column `x`, ordered by `y`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `x` is not a column of the grid
    pub fn get_col(&self, x: i32) -> Result<Vec<T>> {
        let [col, _] = self.check_point("get_col", x, 0)?;
        Ok(self.cells.index_axis(Axis(0), col).to_vec())
    }

    /// Overwrite row `y` from `values`
    ///
    /// Only the first `min(width, values.len())` cells are written: extra
    /// values are ignored and a short slice leaves the tail of the row as is.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `y` is not a row of the grid
    pub fn set_row(&mut self, y: i32, values: &[T]) -> Result<&mut Self> {
        let [_, row] = self.check_point("set_row", 0, y)?;
        for (cell, value) in self
            .cells
            .index_axis_mut(Axis(1), row)
            .iter_mut()
            .zip(values)
        {
            cell.clone_from(value);
        }
        Ok(self)
    }

    /// Overwrite column `x` from `values`
    ///
    /// Only the first `min(height, values.len())` cells are written.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `x` is not a column of the grid
    pub fn set_col(&mut self, x: i32, values: &[T]) -> Result<&mut Self> {
        let [col, _] = self.check_point("set_col", x, 0)?;
        for (cell, value) in self
            .cells
            .index_axis_mut(Axis(0), col)
            .iter_mut()
            .zip(values)
        {
            cell.clone_from(value);
        }
        Ok(self)
    }

    /// Overwrite every cell of row `y` with `value`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `y` is not a row of the grid
    pub fn fill_row(&mut self, y: i32, value: T) -> Result<&mut Self> {
        let [_, row] = self.check_point("fill_row", 0, y)?;
        self.cells.index_axis_mut(Axis(1), row).fill(value);
        Ok(self)
    }

    /// Overwrite every cell of column `x` with `value`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `x` is not a column of the grid
    pub fn fill_col(&mut self, x: i32, value: T) -> Result<&mut Self> {
        let [col, _] = self.check_point("fill_col", x, 0)?;
        self.cells.index_axis_mut(Axis(0), col).fill(value);
        Ok(self)
    }

    /// Reset row `y` to the default value
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `y` is not a row of the grid
    pub fn reset_row(&mut self, y: i32) -> Result<&mut Self> {
        let value = self.default_value.clone();
        self.fill_row(y, value)
    }

    /// Reset column `x` to the default value
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `x` is not a column of the grid
    pub fn reset_col(&mut self, x: i32) -> Result<&mut Self> {
        let value = self.default_value.clone();
        self.fill_col(x, value)
    }
}
