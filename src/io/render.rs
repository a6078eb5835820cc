//! Text rendering of grids for debugging and previews
//!
//! The layout is a header of underscores followed by one line per row, each
//! prefixed with its right-aligned `y` label:
//!
//! ```text
//!   _______
//! 0| 1 0 0
//! 1| 0 5 0
//! ```
//!
//! Cell text comes from a caller-supplied formatter and output goes to any
//! `fmt::Write` sink, so nothing here touches the console.

use ndarray::Array2;
use std::fmt::{self, Display, Write};

use crate::spatial::Grid;

/// Write `grid` to `sink`, formatting each cell with `format_cell(value, x, y)`
///
/// # Errors
///
/// Propagates any error reported by the sink
pub fn render<T, W, F>(grid: &Grid<T>, sink: &mut W, mut format_cell: F) -> fmt::Result
where
    W: Write,
    F: FnMut(&T, i32, i32) -> String,
{
    let (width, height) = grid.dimensions();

    let mut formatted = Array2::from_elem((width, height), String::new());
    grid.for_each(|value, x, y| {
        if let Some(cell) = formatted.get_mut([x as usize, y as usize]) {
            *cell = format_cell(value, x, y);
        }
    });

    let cell_width = formatted
        .iter()
        .map(|text| text.chars().count())
        .max()
        .unwrap_or(0);
    let label_width = height.saturating_sub(1).to_string().len();

    writeln!(
        sink,
        "{}{}_",
        " ".repeat(label_width + 1),
        "_".repeat((cell_width + 1) * width)
    )?;

    for (y, row) in formatted.columns().into_iter().enumerate() {
        write!(sink, "{y:>label_width$}| ")?;
        for text in row {
            write!(sink, "{text:<padded$}", padded = cell_width + 1)?;
        }
        writeln!(sink)?;
    }

    Ok(())
}

/// Render with a custom formatter into a new string
pub fn render_with<T, F>(grid: &Grid<T>, format_cell: F) -> String
where
    F: FnMut(&T, i32, i32) -> String,
{
    let mut output = String::new();
    // Writing into a String cannot fail
    let _ = render(grid, &mut output, format_cell);
    output
}

/// Render using each cell's `Display` implementation
pub fn render_to_string<T: Display>(grid: &Grid<T>) -> String {
    render_with(grid, |value, _, _| value.to_string())
}
