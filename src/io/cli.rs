//! Command-line interface for batch transforming PNG files

use crate::io::configuration::{
    ALPHA_THRESHOLD, ASCII_OPAQUE, ASCII_TRANSPARENT, DEFAULT_BACKGROUND_HEX, IMAGE_EXTENSION,
    OUTPUT_SUFFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{Pixel, export_png, load_png};
use crate::io::pipeline::{Operation, Pipeline};
use crate::io::progress::ProgressManager;
use crate::io::render::render_with;
use crate::spatial::Grid;
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gridshape")]
#[command(
    author,
    version,
    about = "Resize, crop, shift, rotate and mirror PNG images as pixel grids"
)]
/// Command-line arguments for the grid transform tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Operation to apply, repeatable (e.g. resize:1,1,1,1 crop:0,0,8,8 rotate:ccw)
    #[arg(short = 'o', long = "op", value_name = "OP")]
    pub operations: Vec<Operation>,

    /// Drop content shifted past an edge instead of wrapping it around
    #[arg(long)]
    pub no_wrap: bool,

    /// Fill colour for exposed pixels as RRGGBB or RRGGBBAA hex
    #[arg(short, long, value_parser = parse_color, default_value = DEFAULT_BACKGROUND_HEX)]
    pub background: Pixel,

    /// Print each result as text after writing it
    #[arg(short, long)]
    pub ascii: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Pipeline described by the `--op` arguments
    pub fn pipeline(&self) -> Pipeline {
        Pipeline::new(self.operations.clone()).with_wrap(!self.no_wrap)
    }
}

/// Parse `RRGGBB` or `RRGGBBAA`, with an optional leading `#`
///
/// # Errors
///
/// Returns `InvalidParameter` for anything else
pub fn parse_color(text: &str) -> Result<Pixel> {
    let digits = text.trim().trim_start_matches('#');
    let invalid = || invalid_parameter("background", &text, &"expected RRGGBB or RRGGBBAA hex");

    if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
        return Err(invalid());
    }

    let mut pixel = [0, 0, 0, u8::MAX];
    for (channel, start) in pixel.iter_mut().zip((0..digits.len()).step_by(2)) {
        let pair = digits.get(start..start + 2).ok_or_else(invalid)?;
        *channel = u8::from_str_radix(pair, 16).map_err(|_parse_error| invalid())?;
    }
    Ok(pixel)
}

/// Orchestrates batch processing of PNG files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, loading, a transform or
    /// export fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let pipeline = self.cli.pipeline();
        for (index, file) in files.iter().enumerate() {
            self.process_file(&pipeline, file, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Output path for an input file: `<stem>_shaped.<ext>` alongside it
    pub fn output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = input_path.extension().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            extension.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;

        if target.is_file() {
            if !is_image(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"target file must be a PNG image",
                ));
            }
            Ok(if self.should_process_file(target) {
                vec![target.clone()]
            } else {
                vec![]
            })
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target)? {
                let path = entry?.path();
                if is_image(&path)
                    && !is_output(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"target must be a PNG file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, pipeline: &Pipeline, input_path: &Path, index: usize) -> Result<()> {
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, pipeline.len());
        }

        let mut grid = load_png(input_path, self.cli.background)?;

        let progress = self.progress_manager.as_ref();
        pipeline.run_with(&mut grid, |step, operation| {
            if let Some(pm) = progress {
                pm.update_step(index, step, operation);
            }
        })?;

        export_png(&grid, &Self::output_path(input_path))?;

        if self.cli.ascii {
            print_ascii(&grid)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file(index);
        }

        Ok(())
    }
}

fn is_image(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some(IMAGE_EXTENSION)
}

// Outputs land next to their inputs; don't feed them back in on the next run
fn is_output(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
}

fn print_ascii(grid: &Grid<Pixel>) -> Result<()> {
    let text = render_with(grid, |pixel, _, _| {
        let [_, _, _, alpha] = *pixel;
        if alpha >= ALPHA_THRESHOLD {
            ASCII_OPAQUE.to_string()
        } else {
            ASCII_TRANSPARENT.to_string()
        }
    });

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
