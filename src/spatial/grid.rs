//! Dense grid storage with bounds-checked element access
//!
//! `Grid<T>` owns a fixed-size rectangular block of cells addressed by
//! `(x, y)`. Storage is an `ndarray::Array2` of shape `(width, height)`
//! indexed `[x, y]`, so the natural iteration order of the backing array is
//! column-major: every `y` for `x = 0`, then every `y` for `x = 1`, and so on.

use ndarray::{Array2, ArrayView2, ArrayViewMut2, Axis, Slice};
use std::ops::Range;

use crate::io::error::{GridError, Result, invalid_dimensions, out_of_bounds};

/// Axis-aligned rectangle in grid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Area {
    /// Left column (inclusive)
    pub x: i32,
    /// Top row (inclusive)
    pub y: i32,
    /// Number of columns
    pub width: i32,
    /// Number of rows
    pub height: i32,
}

impl Area {
    /// Create an area from its top-left corner and extent
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A single cell
    pub const fn point(x: i32, y: i32) -> Self {
        Self::new(x, y, 1, 1)
    }

    /// Bottom-right corner (inclusive), widened to avoid overflow
    pub const fn last_corner(&self) -> [i64; 2] {
        [
            self.x as i64 + self.width as i64 - 1,
            self.y as i64 + self.height as i64 - 1,
        ]
    }
}

/// Dense two-dimensional grid of `T`
///
/// Every cell in `[0, width) x [0, height)` always holds a value. Cells that
/// are created by construction or exposed by a transform take the grid's
/// default value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    /// Backing store, shape `(width, height)`, indexed `[x, y]`
    pub(crate) cells: Array2<T>,

    /// Value given to newly created or newly exposed cells
    pub(crate) default_value: T,
}

impl<T: Clone + Default> Grid<T> {
    /// Create a grid filled with `T::default()`
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either dimension is zero
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::with_default(width, height, T::default())
    }
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `default_value`
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either dimension is zero
    pub fn with_default(width: usize, height: usize, default_value: T) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(invalid_dimensions(
                "new",
                width as i64,
                height as i64,
            ));
        }

        Ok(Self {
            cells: Array2::from_elem((width, height), default_value.clone()),
            default_value,
        })
    }

    /// Deep copy of another grid: dimensions, default value and every cell
    pub fn from_grid(other: &Self) -> Self {
        Self {
            cells: other.cells.clone(),
            default_value: other.default_value.clone(),
        }
    }
}

impl<T> Grid<T> {
    /// Adopt an existing array of shape `(width, height)`
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either axis of the array is empty
    pub fn from_array(cells: Array2<T>, default_value: T) -> Result<Self> {
        let (width, height) = cells.dim();
        if width == 0 || height == 0 {
            return Err(invalid_dimensions(
                "from_array",
                width as i64,
                height as i64,
            ));
        }

        Ok(Self {
            cells,
            default_value,
        })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.dim().0
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.dim().1
    }

    /// Current dimensions as (width, height)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Value used for newly created or exposed cells
    pub const fn default_value(&self) -> &T {
        &self.default_value
    }

    /// Change the default value without touching existing cells
    pub fn set_default_value(&mut self, value: T) -> &mut Self {
        self.default_value = value;
        self
    }

    /// Read-only view of the backing array, indexed `[x, y]`
    pub const fn as_array(&self) -> &Array2<T> {
        &self.cells
    }

    /// Consume the grid and return its backing array
    pub fn into_array(self) -> Array2<T> {
        self.cells
    }

    /// Whether `(x, y)` addresses a cell of this grid
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.contains(i64::from(x), i64::from(y))
    }

    /// Whether the rectangle `(x, y, width, height)` lies inside the grid
    ///
    /// True iff both corners `(x, y)` and `(x + width - 1, y + height - 1)`
    /// are in bounds. A non-positive extent puts the far corner before the
    /// near one, which is only accepted when that corner is itself in bounds.
    pub fn area_in_bounds(&self, x: i32, y: i32, width: i32, height: i32) -> bool {
        let [last_x, last_y] = Area::new(x, y, width, height).last_corner();
        self.in_bounds(x, y) && self.contains(last_x, last_y)
    }

    /// Borrow the cell at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the coordinate is outside the grid
    pub fn get(&self, x: i32, y: i32) -> Result<&T> {
        let index = self.check_point("get", x, y)?;
        self.cells.get(index).ok_or_else(|| out_of_bounds("get", x, y))
    }

    /// Mutably borrow the cell at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the coordinate is outside the grid
    pub fn get_mut(&mut self, x: i32, y: i32) -> Result<&mut T> {
        let index = self.check_point("get_mut", x, y)?;
        self.cells
            .get_mut(index)
            .ok_or_else(|| out_of_bounds("get_mut", x, y))
    }

    /// Overwrite the cell at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the coordinate is outside the grid
    pub fn set(&mut self, x: i32, y: i32, value: T) -> Result<&mut Self> {
        let index = self.check_point("set", x, y)?;
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = value;
        }
        Ok(self)
    }

    /// Validate a coordinate and convert it to an array index
    pub(crate) fn check_point(
        &self,
        operation: &'static str,
        x: i32,
        y: i32,
    ) -> Result<[usize; 2]> {
        if self.in_bounds(x, y) {
            Ok([x as usize, y as usize])
        } else {
            Err(out_of_bounds(operation, x, y))
        }
    }

    /// Validate a rectangle and borrow it as a view indexed `[dx, dy]`
    pub(crate) fn area_view(
        &self,
        operation: &'static str,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> Result<ArrayView2<'_, T>> {
        let (xs, ys) = self.check_area(operation, x, y, width, height)?;
        let mut view = self.cells.slice_axis(Axis(0), Slice::from(xs));
        view.slice_axis_inplace(Axis(1), Slice::from(ys));
        Ok(view)
    }

    /// Mutable counterpart of `area_view`
    pub(crate) fn area_view_mut(
        &mut self,
        operation: &'static str,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> Result<ArrayViewMut2<'_, T>> {
        let (xs, ys) = self.check_area(operation, x, y, width, height)?;
        let mut view = self.cells.slice_axis_mut(Axis(0), Slice::from(xs));
        view.slice_axis_inplace(Axis(1), Slice::from(ys));
        Ok(view)
    }

    /// Validate a rectangle and convert it to index ranges along x and y
    fn check_area(
        &self,
        operation: &'static str,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> Result<(Range<usize>, Range<usize>)> {
        if !self.area_in_bounds(x, y, width, height) {
            return Err(GridError::OutOfBounds {
                operation,
                area: Area::new(x, y, width, height),
            });
        }

        // Both corners are in bounds, so neither start is negative
        let x_start = x as usize;
        let y_start = y as usize;
        let x_end = x_start + width.max(0) as usize;
        let y_end = y_start + height.max(0) as usize;
        Ok((x_start..x_end, y_start..y_end))
    }

    fn contains(&self, x: i64, y: i64) -> bool {
        let (width, height) = self.dimensions();
        x >= 0 && y >= 0 && (x as u64) < width as u64 && (y as u64) < height as u64
    }
}
