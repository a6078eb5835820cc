//! Shape transformations: resize, crop, shift, rotate and mirror
//!
//! Every transform validates its arguments first, then snapshots the grid,
//! rebuilds the backing array at the target dimensions filled with the
//! current default value, and replays the snapshot into remapped
//! coordinates. A failed validation leaves the grid untouched.

use crate::io::error::{GridError, Result, WithContext, invalid_dimensions};
use crate::spatial::extension::{Margins, remap_array_2d};
use crate::spatial::grid::{Area, Grid};

/// Direction of a quarter turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    /// Top row becomes the right column
    #[default]
    Clockwise,
    /// Top row becomes the left column
    CounterClockwise,
}

impl Rotation {
    /// The rotation that undoes this one
    pub const fn inverse(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }
}

impl From<bool> for Rotation {
    /// `true` is clockwise
    fn from(clockwise: bool) -> Self {
        if clockwise {
            Self::Clockwise
        } else {
            Self::CounterClockwise
        }
    }
}

impl<T: Clone> Grid<T> {
    /// Grow or shrink each edge by a signed amount
    ///
    /// The new size is `(width + grow_left + grow_right, height + grow_top +
    /// grow_bottom)`. Growing the left or top edge moves existing content
    /// right or down; growing the right or bottom edge does not move it.
    /// Cells pushed past any edge are dropped and exposed cells hold the
    /// default value.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either new dimension is not positive
    pub fn resize(
        &mut self,
        grow_left: i32,
        grow_top: i32,
        grow_right: i32,
        grow_bottom: i32,
    ) -> Result<&mut Self> {
        self.resize_by(Margins::new(grow_left, grow_top, grow_right, grow_bottom))
    }

    /// [`Grid::resize`] with named margins; unspecified edges default to 0
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either new dimension is not positive
    pub fn resize_by(&mut self, margins: Margins) -> Result<&mut Self> {
        let (width, height) = margins.resized_dimensions(self.dimensions());
        if width <= 0 || height <= 0 {
            return Err(invalid_dimensions("resize", width, height));
        }

        let [offset_x, offset_y] = margins.content_offset();
        self.rebuild((width as usize, height as usize), |x, y| {
            [x as i64 + offset_x, y as i64 + offset_y]
        });
        Ok(self)
    }

    /// Shrink the grid to the rectangle `(x, y, width, height)`
    ///
    /// The cell at `(x, y)` becomes `(0, 0)`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the rectangle is not inside the grid, or
    /// `InvalidDimensions` if its width or height is not positive
    pub fn crop(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<&mut Self> {
        if !self.area_in_bounds(x, y, width, height) {
            return Err(GridError::OutOfBounds {
                operation: "crop",
                area: Area::new(x, y, width, height),
            });
        }
        if width <= 0 || height <= 0 {
            return Err(invalid_dimensions(
                "crop",
                i64::from(width),
                i64::from(height),
            ));
        }

        let grow_right = (x + width) - self.width() as i32;
        let grow_bottom = (y + height) - self.height() as i32;
        self.resize(-x, -y, grow_right, grow_bottom)
            .with_operation("crop")
    }

    /// Move content by `(dx, dy)`
    ///
    /// With `wrap`, content leaving one edge re-enters at the opposite edge.
    /// Without it the shift is a resize that grows and shrinks opposite
    /// edges by the same amount, so content leaving the grid is dropped and
    /// the vacated cells take the default value.
    ///
    /// # Errors
    ///
    /// Never fails for a valid grid; the result type matches the resize
    /// the unwrapped shift delegates to
    pub fn shift(&mut self, dx: i32, dy: i32, wrap: bool) -> Result<&mut Self> {
        if dx == 0 && dy == 0 {
            return Ok(self);
        }

        if !wrap {
            // Any offset past the extent already empties that axis
            let dx = clamp_to_extent(dx, self.width());
            let dy = clamp_to_extent(dy, self.height());
            return self.resize(dx, dy, -dx, -dy).with_operation("shift");
        }

        let (width, height) = self.dimensions();
        let (width, height) = (width as i64, height as i64);
        self.rebuild(self.dimensions(), |x, y| {
            [
                (x as i64 + i64::from(dx)).rem_euclid(width),
                (y as i64 + i64::from(dy)).rem_euclid(height),
            ]
        });
        Ok(self)
    }

    /// Turn the grid a quarter turn, swapping width and height
    pub fn rotate(&mut self, rotation: Rotation) -> &mut Self {
        let (width, height) = self.dimensions();
        let (last_x, last_y) = (width as i64 - 1, height as i64 - 1);

        match rotation {
            Rotation::Clockwise => self.rebuild((height, width), |x, y| {
                [last_y - y as i64, x as i64]
            }),
            Rotation::CounterClockwise => self.rebuild((height, width), |x, y| {
                [y as i64, last_x - x as i64]
            }),
        }
        self
    }

    /// Mirror columns: `new(x, y) = old(width - 1 - x, y)`
    pub fn invert_x(&mut self) -> &mut Self {
        let last_x = self.width() as i64 - 1;
        self.rebuild(self.dimensions(), |x, y| [last_x - x as i64, y as i64]);
        self
    }

    /// Mirror rows: `new(x, y) = old(x, height - 1 - y)`
    pub fn invert_y(&mut self) -> &mut Self {
        let last_y = self.height() as i64 - 1;
        self.rebuild(self.dimensions(), |x, y| [x as i64, last_y - y as i64]);
        self
    }

    /// Reallocate at `shape` with the default value and replay the old
    /// cells, which serve as the snapshot, through `destination`
    fn rebuild<F>(&mut self, shape: (usize, usize), destination: F)
    where
        F: Fn(usize, usize) -> [i64; 2],
    {
        self.cells = remap_array_2d(&self.cells, shape, self.default_value.clone(), destination);
    }
}

fn clamp_to_extent(offset: i32, extent: usize) -> i32 {
    let limit = i32::try_from(extent).unwrap_or(i32::MAX);
    offset.clamp(-limit, limit)
}
