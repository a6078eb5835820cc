//! Dense two-dimensional grid container with shape transformations
//!
//! A [`Grid`] is a fixed-size rectangular array of `T` addressed by `(x, y)`.
//! On top of element access, traversal, fills and row/column operations it
//! can be resized on any edge, cropped, shifted, rotated and mirrored. Every
//! transform validates its arguments before touching the grid, so a failed
//! call leaves the grid exactly as it was.
//!
//! ```
//! use gridshape::Grid;
//!
//! let mut grid = Grid::<u8>::new(3, 2)?;
//! grid.set(1, 1, 5)?;
//! grid.crop(1, 0, 2, 2)?;
//! assert_eq!(grid.dimensions(), (2, 2));
//! assert_eq!(*grid.get(0, 1)?, 5);
//! # Ok::<(), gridshape::GridError>(())
//! ```

#![forbid(unsafe_code)]

/// Input/output operations, error handling and the command-line front end
pub mod io;
/// Grid storage, traversal and transforms
pub mod spatial;

pub use io::error::{GridError, Result};
pub use spatial::{Area, Grid, Margins, Rotation};
