//! Spatial data structures and grid manipulation
//!
//! This module contains the grid container and everything that reshapes it:
//! - Dense storage with bounds-checked access
//! - Column-major traversal and bulk fills
//! - Row and column extraction, replacement and swapping
//! - Resize, crop, shift, rotate and mirror transforms

/// Signed edge margins and cell replay used by rebuilds
pub mod extension;
/// Grid storage, dimensions and element access
pub mod grid;
/// Row and column operations
pub mod lines;
/// Shape transformations
pub mod transform;
/// Traversal and fills
pub mod traversal;

pub use extension::Margins;
pub use grid::{Area, Grid};
pub use transform::Rotation;
