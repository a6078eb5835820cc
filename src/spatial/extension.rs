//! Signed edge margins and cell replay for grid rebuilds
//!
//! A rebuild replaces the backing array with one of new dimensions filled
//! with the padding value, then copies every source cell to a remapped
//! destination. Destinations outside the new array are dropped, which is
//! how truncation on any of the four edges falls out of a single rule.

use ndarray::Array2;

/// Signed growth applied to each edge of a grid
///
/// Positive values add rows/columns on that edge, negative values remove
/// them. Growth on the left and top moves existing content right and down;
/// growth on the right and bottom only changes capacity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Margins {
    /// Columns added (or removed) on the left edge
    pub left: i32,
    /// Rows added (or removed) on the top edge
    pub top: i32,
    /// Columns added (or removed) on the right edge
    pub right: i32,
    /// Rows added (or removed) on the bottom edge
    pub bottom: i32,
}

impl Margins {
    /// Margins for each edge
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Margins that undo this one
    pub const fn inverse(&self) -> Self {
        Self::new(
            self.left.saturating_neg(),
            self.top.saturating_neg(),
            self.right.saturating_neg(),
            self.bottom.saturating_neg(),
        )
    }

    /// Whether every edge is left unchanged
    pub const fn is_zero(&self) -> bool {
        self.left == 0 && self.top == 0 && self.right == 0 && self.bottom == 0
    }

    /// Dimensions after applying the margins; may be zero or negative
    pub const fn resized_dimensions(&self, dims: (usize, usize)) -> (i64, i64) {
        (
            dims.0 as i64 + self.left as i64 + self.right as i64,
            dims.1 as i64 + self.top as i64 + self.bottom as i64,
        )
    }

    /// Translation applied to existing content
    pub const fn content_offset(&self) -> [i64; 2] {
        [self.left as i64, self.top as i64]
    }
}

/// Copy every cell of `source` into `target` at `destination(x, y)`
///
/// Destinations outside `target` are skipped; cells of `target` that
/// receive nothing keep whatever they held before.
pub fn replay_cells<T, F>(source: &Array2<T>, target: &mut Array2<T>, destination: F)
where
    T: Clone,
    F: Fn(usize, usize) -> [i64; 2],
{
    let (target_width, target_height) = target.dim();

    for ((x, y), value) in source.indexed_iter() {
        let [dx, dy] = destination(x, y);
        if dx < 0 || dy < 0 || dx as u64 >= target_width as u64 || dy as u64 >= target_height as u64
        {
            continue;
        }
        if let Some(cell) = target.get_mut([dx as usize, dy as usize]) {
            cell.clone_from(value);
        }
    }
}

/// Build a new array of `shape` filled with `padding_value`, then replay
/// `source` into it through `destination`
pub fn remap_array_2d<T, F>(
    source: &Array2<T>,
    shape: (usize, usize),
    padding_value: T,
    destination: F,
) -> Array2<T>
where
    T: Clone,
    F: Fn(usize, usize) -> [i64; 2],
{
    let mut target = Array2::from_elem(shape, padding_value);
    replay_cells(source, &mut target, destination);
    target
}
