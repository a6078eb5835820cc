//! Tests for resize, crop, shift, rotate and mirror transforms

#[cfg(test)]
mod tests {
    use gridshape::{Area, Grid, GridError, Margins, Result, Rotation};

    fn numbered(width: usize, height: usize) -> Result<Grid<i32>> {
        let mut grid = Grid::with_default(width, height, -1)?;
        grid.for_each_mut(|v, x, y| *v = x * 10 + y);
        Ok(grid)
    }

    fn rows(grid: &Grid<i32>) -> Result<Vec<Vec<i32>>> {
        (0..grid.height() as i32).map(|y| grid.get_row(y)).collect()
    }

    // Tests growing the left edge moves content right and exposes defaults
    // Verified by offsetting content by the right-edge delta instead
    #[test]
    fn test_resize_grow_left() -> Result<()> {
        let mut grid = Grid::with_default(2, 2, 0)?;
        grid.fill(1);
        grid.resize(1, 0, 0, 0)?;

        assert_eq!(grid.dimensions(), (3, 2));
        assert_eq!(grid.get_col(0)?, vec![0, 0]);
        assert_eq!(grid.get_col(1)?, vec![1, 1]);
        assert_eq!(grid.get_col(2)?, vec![1, 1]);
        Ok(())
    }

    // Tests growing right and bottom only adds capacity
    #[test]
    fn test_resize_grow_right_bottom() -> Result<()> {
        let mut grid = numbered(2, 2)?;
        grid.resize(0, 0, 1, 1)?;

        assert_eq!(grid.dimensions(), (3, 3));
        assert_eq!(rows(&grid)?, vec![vec![0, 10, -1], vec![1, 11, -1], vec![-1, -1, -1]]);
        Ok(())
    }

    // Tests shrinking each edge drops exactly the cells past it
    // Verified by dropping cells from the opposite edge
    #[test]
    fn test_resize_shrink_all_edges() -> Result<()> {
        let mut grid = numbered(4, 4)?;
        grid.resize(-1, -1, -1, -1)?;

        assert_eq!(grid.dimensions(), (2, 2));
        assert_eq!(rows(&grid)?, vec![vec![11, 21], vec![12, 22]]);
        Ok(())
    }

    // Tests mixed growth and shrinkage on the same axis
    #[test]
    fn test_resize_mixed() -> Result<()> {
        let mut grid = numbered(3, 1)?;
        grid.resize(2, 0, -2, 0)?;

        assert_eq!(grid.dimensions(), (3, 1));
        assert_eq!(grid.get_row(0)?, vec![-1, -1, 0]);
        Ok(())
    }

    // Tests invalid resulting dimensions leave the grid untouched
    // Verified by validating after rebuilding
    #[test]
    fn test_resize_rejects_non_positive_dimensions() -> Result<()> {
        let mut grid = numbered(3, 2)?;
        let before = grid.clone();

        match grid.resize(-2, 0, -1, 0) {
            Err(GridError::InvalidDimensions {
                operation,
                width,
                height,
            }) => {
                assert_eq!(operation, "resize");
                assert_eq!((width, height), (0, 2));
            }
            other => unreachable!("Expected InvalidDimensions, got {other:?}"),
        }
        assert!(grid.resize(0, -5, 0, 0).is_err());
        assert_eq!(grid, before);
        Ok(())
    }

    // Tests resize_by with named margins matches positional resize
    #[test]
    fn test_resize_by_margins() -> Result<()> {
        let mut positional = numbered(3, 3)?;
        let mut named = positional.clone();

        positional.resize(0, 2, 0, 0)?;
        named.resize_by(Margins {
            top: 2,
            ..Margins::default()
        })?;
        assert_eq!(positional, named);
        Ok(())
    }

    // Tests resize keeps the current default value for new cells
    #[test]
    fn test_resize_uses_current_default() -> Result<()> {
        let mut grid = Grid::with_default(1, 1, 0u8)?;
        grid.set_default_value(3);
        grid.resize(0, 0, 1, 0)?;
        assert_eq!(grid.get_row(0)?, vec![0, 3]);
        Ok(())
    }

    // Tests crop re-anchors the rectangle at the origin
    // Verified by cropping without the left/top offset
    #[test]
    fn test_crop() -> Result<()> {
        let mut grid = Grid::<i32>::new(3, 2)?;
        grid.set(1, 1, 5)?;
        grid.crop(1, 0, 2, 2)?;

        assert_eq!(grid.dimensions(), (2, 2));
        assert_eq!(*grid.get(0, 1)?, 5);
        assert_eq!(grid.iter().filter(|(_, v)| **v != 0).count(), 1);
        Ok(())
    }

    // Tests crop errors report crop, not the resize it delegates to
    #[test]
    fn test_crop_errors() -> Result<()> {
        let mut grid = numbered(4, 4)?;
        let before = grid.clone();

        match grid.crop(2, 2, 3, 1) {
            Err(GridError::OutOfBounds { operation, area }) => {
                assert_eq!(operation, "crop");
                assert_eq!(area, Area::new(2, 2, 3, 1));
            }
            other => unreachable!("Expected OutOfBounds, got {other:?}"),
        }

        // Zero width passes the corner check from x = 1 but is still invalid
        assert!(matches!(
            grid.crop(1, 1, 0, 2),
            Err(GridError::InvalidDimensions {
                operation: "crop",
                ..
            })
        ));
        assert_eq!(grid, before);
        Ok(())
    }

    // Tests an unwrapped shift drops content leaving the grid
    // Verified by wrapping regardless of the flag
    #[test]
    fn test_shift_without_wrap() -> Result<()> {
        let mut grid = numbered(3, 2)?;
        grid.shift(1, 0, false)?;

        assert_eq!(grid.dimensions(), (3, 2));
        assert_eq!(rows(&grid)?, vec![vec![-1, 0, 10], vec![-1, 1, 11]]);

        grid.shift(0, -1, false)?;
        assert_eq!(rows(&grid)?, vec![vec![-1, 1, 11], vec![-1, -1, -1]]);
        Ok(())
    }

    // Tests a wrapped shift rotates content around both axes
    #[test]
    fn test_shift_with_wrap() -> Result<()> {
        let mut grid = numbered(3, 2)?;
        grid.shift(1, 1, true)?;

        assert_eq!(rows(&grid)?, vec![vec![21, 1, 11], vec![20, 0, 10]]);

        // Offsets accumulate modulo the dimensions
        grid.shift(-4, 3, true)?;
        assert_eq!(grid, numbered(3, 2)?);
        Ok(())
    }

    // Tests a single-axis shift moves content
    #[test]
    fn test_shift_single_axis() -> Result<()> {
        let mut grid = numbered(2, 3)?;
        grid.shift(0, 1, false)?;
        assert_eq!(grid.get_col(0)?, vec![-1, 0, 1]);
        Ok(())
    }

    // Tests offsets at the limits of i32 empty an axis instead of overflowing
    // Verified by negating the raw offset for the opposite edge
    #[test]
    fn test_shift_extreme_offsets() -> Result<()> {
        let mut left = numbered(3, 3)?;
        left.shift(i32::MIN, 1, false)?;
        assert_eq!(left.dimensions(), (3, 3));
        assert!(left.iter().all(|(_, v)| *v == -1));

        let mut down = numbered(2, 3)?;
        down.shift(0, i32::MAX, false)?;
        assert_eq!(rows(&down)?, vec![vec![-1, -1]; 3]);

        let mut chained = numbered(2, 3)?;
        chained.shift(i32::MAX, 0, false)?.shift(0, i32::MIN, false)?;
        assert!(chained.iter().all(|(_, v)| *v == -1));

        // i32::MIN is a multiple of both extents here
        let mut wrapped = numbered(2, 4)?;
        wrapped.shift(i32::MIN, i32::MIN, true)?;
        assert_eq!(wrapped, numbered(2, 4)?);
        Ok(())
    }

    // Tests clockwise rotation moves the top row to the right column
    // Verified by reflecting on the wrong axis
    #[test]
    fn test_rotate_clockwise() -> Result<()> {
        let mut grid = numbered(3, 2)?;
        grid.rotate(Rotation::Clockwise);

        assert_eq!(grid.dimensions(), (2, 3));
        assert_eq!(
            rows(&grid)?,
            vec![vec![1, 0], vec![11, 10], vec![21, 20]]
        );
        Ok(())
    }

    // Tests counter-clockwise rotation moves the top row to the left column
    #[test]
    fn test_rotate_counter_clockwise() -> Result<()> {
        let mut grid = numbered(3, 2)?;
        grid.rotate(Rotation::CounterClockwise);

        assert_eq!(grid.dimensions(), (2, 3));
        assert_eq!(
            rows(&grid)?,
            vec![vec![20, 21], vec![10, 11], vec![0, 1]]
        );
        Ok(())
    }

    // Tests Rotation conversions and inverse
    #[test]
    fn test_rotation_helpers() {
        assert_eq!(Rotation::default(), Rotation::Clockwise);
        assert_eq!(Rotation::from(true), Rotation::Clockwise);
        assert_eq!(Rotation::from(false), Rotation::CounterClockwise);
        assert_eq!(Rotation::Clockwise.inverse(), Rotation::CounterClockwise);
        assert_eq!(Rotation::CounterClockwise.inverse(), Rotation::Clockwise);
    }

    // Tests mirroring columns and rows
    // Verified by mirroring with an off-by-one index
    #[test]
    fn test_invert() -> Result<()> {
        let mut grid = numbered(3, 2)?;
        grid.invert_x();
        assert_eq!(rows(&grid)?, vec![vec![20, 10, 0], vec![21, 11, 1]]);

        grid.invert_y();
        assert_eq!(rows(&grid)?, vec![vec![21, 11, 1], vec![20, 10, 0]]);
        Ok(())
    }

    // Tests transforms chain through the returned grid
    #[test]
    fn test_chaining() -> Result<()> {
        let mut grid = numbered(2, 2)?;
        grid.resize(1, 1, 1, 1)?
            .crop(1, 1, 2, 2)?
            .rotate(Rotation::Clockwise)
            .rotate(Rotation::CounterClockwise)
            .invert_x()
            .invert_x();
        assert_eq!(grid, numbered(2, 2)?);
        Ok(())
    }
}
