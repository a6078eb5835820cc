//! Runtime configuration defaults for the command-line tool

// Pipeline syntax: `name:arg,arg,...`
/// Separates an operation name from its arguments
pub const OPERATION_SEPARATOR: char = ':';
/// Separates the arguments of an operation
pub const ARGUMENT_SEPARATOR: char = ',';

/// Whether `shift` wraps content around the edges unless told otherwise
pub const DEFAULT_WRAP: bool = true;

/// Fill for pixels exposed by a transform (fully transparent)
pub const DEFAULT_BACKGROUND: [u8; 4] = [0, 0, 0, 0];
/// Text form of [`DEFAULT_BACKGROUND`] accepted by `--background`
pub const DEFAULT_BACKGROUND_HEX: &str = "00000000";

// Text preview settings
/// Character printed for pixels at or above [`ALPHA_THRESHOLD`]
pub const ASCII_OPAQUE: char = '#';
/// Character printed for pixels below [`ALPHA_THRESHOLD`]
pub const ASCII_TRANSPARENT: char = '.';
/// Minimum alpha for a pixel to count as opaque in previews
pub const ALPHA_THRESHOLD: u8 = 128;

// Progress bar display settings
/// Number of per-file bars kept on screen at once
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_shaped";
/// Only files with this extension are processed
pub const IMAGE_EXTENSION: &str = "png";
