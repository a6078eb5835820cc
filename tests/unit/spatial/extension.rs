//! Tests for edge margins and cell replay

#[cfg(test)]
mod tests {
    use gridshape::spatial::extension::{Margins, remap_array_2d, replay_cells};
    use ndarray::Array2;

    // Tests resized dimensions add both edges of each axis
    // Verified by adding the top margin to the width
    #[test]
    fn test_resized_dimensions() {
        let margins = Margins::new(1, 2, 3, -4);
        assert_eq!(margins.resized_dimensions((5, 5)), (9, 3));
        assert_eq!(margins.content_offset(), [1, 2]);
    }

    // Tests inverse margins cancel out
    #[test]
    fn test_inverse_and_zero() {
        let margins = Margins::new(1, -2, 0, 7);
        assert_eq!(margins.inverse(), Margins::new(-1, 2, 0, -7));
        assert!(!margins.is_zero());
        assert!(Margins::default().is_zero());

        let (width, height) = margins.resized_dimensions((4, 4));
        let restored = margins
            .inverse()
            .resized_dimensions((width as usize, height as usize));
        assert_eq!(restored, (4, 4));

        let extreme = Margins::new(i32::MIN, i32::MAX, 0, 0).inverse();
        assert_eq!(extreme, Margins::new(i32::MAX, -i32::MAX, 0, 0));
    }

    // Tests replay drops destinations on every side of the target
    // Verified by clamping destinations instead of skipping them
    #[test]
    fn test_replay_skips_out_of_range_destinations() {
        let source = Array2::from_shape_fn((3, 3), |(x, y)| x * 3 + y + 1);
        let mut target = Array2::from_elem((2, 2), 0);

        replay_cells(&source, &mut target, |x, y| [x as i64 - 1, y as i64 - 1]);

        assert_eq!(target.get([0, 0]).copied(), Some(5));
        assert_eq!(target.get([1, 0]).copied(), Some(8));
        assert_eq!(target.get([0, 1]).copied(), Some(6));
        assert_eq!(target.get([1, 1]).copied(), Some(9));
    }

    // Tests remap pads cells that receive nothing
    #[test]
    fn test_remap_pads_unfilled_cells() {
        let source = Array2::from_elem((1, 1), 'a');
        let remapped = remap_array_2d(&source, (2, 2), '.', |x, y| [x as i64 + 1, y as i64]);

        assert_eq!(remapped.get([1, 0]).copied(), Some('a'));
        assert_eq!(remapped.get([0, 0]).copied(), Some('.'));
        assert_eq!(remapped.get([0, 1]).copied(), Some('.'));
        assert_eq!(remapped.get([1, 1]).copied(), Some('.'));
        assert_eq!(remapped.iter().filter(|c| **c == 'a').count(), 1);
    }
}
