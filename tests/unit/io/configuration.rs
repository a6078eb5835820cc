//! Tests for command-line defaults and pipeline syntax constants

#[cfg(test)]
mod tests {
    use gridshape::io::cli::parse_color;
    use gridshape::io::configuration::{
        ALPHA_THRESHOLD, ARGUMENT_SEPARATOR, ASCII_OPAQUE, ASCII_TRANSPARENT, DEFAULT_BACKGROUND,
        DEFAULT_BACKGROUND_HEX, IMAGE_EXTENSION, MAX_INDIVIDUAL_PROGRESS_BARS,
        OPERATION_SEPARATOR, OUTPUT_SUFFIX,
    };
    use gridshape::Result;

    // Tests the hex default decodes to the pixel default
    // Verified by changing one of the two constants
    #[test]
    fn test_background_defaults_agree() -> Result<()> {
        assert_eq!(parse_color(DEFAULT_BACKGROUND_HEX)?, DEFAULT_BACKGROUND);
        Ok(())
    }

    // Tests the pipeline separators
    #[test]
    fn test_separators() {
        assert_eq!(OPERATION_SEPARATOR, ':');
        assert_eq!(ARGUMENT_SEPARATOR, ',');
    }

    // Tests preview characters and threshold
    #[test]
    fn test_ascii_preview_settings() {
        assert_eq!(ASCII_OPAQUE, '#');
        assert_eq!(ASCII_TRANSPARENT, '.');
        assert_eq!(ALPHA_THRESHOLD, 128);
    }

    // Tests output settings
    // Verified by changing constant values
    #[test]
    fn test_output_settings() {
        assert_eq!(OUTPUT_SUFFIX, "_shaped");
        assert_eq!(IMAGE_EXTENSION, "png");
        assert_eq!(MAX_INDIVIDUAL_PROGRESS_BARS, 5);
    }
}
