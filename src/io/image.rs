//! PNG import and export for RGBA pixel grids

use image::{Rgba, RgbaImage};
use ndarray::Array2;
use std::path::Path;

use crate::io::error::{GridError, Result, WithContext};
use crate::spatial::Grid;

/// One RGBA pixel
pub type Pixel = [u8; 4];

/// Copy an RGBA image into a grid; pixel `(x, y)` becomes cell `(x, y)`
///
/// # Errors
///
/// Returns `InvalidDimensions` for an image with no pixels
pub fn grid_from_image(image: &RgbaImage, background: Pixel) -> Result<Grid<Pixel>> {
    let (width, height) = image.dimensions();
    let cells = Array2::from_shape_fn((width as usize, height as usize), |(x, y)| {
        image
            .get_pixel_checked(x as u32, y as u32)
            .map_or(background, |pixel| pixel.0)
    });
    Grid::from_array(cells, background).with_operation("load_png")
}

/// Copy a pixel grid into a new RGBA image of the same dimensions
pub fn image_from_grid(grid: &Grid<Pixel>) -> RgbaImage {
    let (width, height) = grid.dimensions();
    let mut image = RgbaImage::new(width as u32, height as u32);
    grid.for_each(|pixel, x, y| {
        if let Some(target) = image.get_pixel_mut_checked(x as u32, y as u32) {
            *target = Rgba(*pixel);
        }
    });
    image
}

/// Load a PNG file as a pixel grid using `background` as the default value
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded, or has no pixels
pub fn load_png(path: &Path, background: Pixel) -> Result<Grid<Pixel>> {
    let image = image::open(path)
        .map_err(|e| GridError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?
        .to_rgba8();
    grid_from_image(&image, background)
}

/// Export a pixel grid as a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_png(grid: &Grid<Pixel>, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| GridError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image_from_grid(grid)
        .save(path)
        .map_err(|e| GridError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
}
