//! Textual transform pipelines
//!
//! Operations are written as `name` or `name:arg,arg,...`:
//!
//! | operation            | arguments                                   |
//! |----------------------|---------------------------------------------|
//! | `resize`             | 1 to 4 integers: left, top, right, bottom   |
//! | `crop`               | 4 integers: x, y, width, height             |
//! | `shift`              | 2 integers and an optional `true`/`false`   |
//! | `rotate`             | optional `cw`, `ccw`, `true` or `false`     |
//! | `invert-x`, `flip-x` | none                                        |
//! | `invert-y`, `flip-y` | none                                        |
//!
//! Missing trailing `resize` arguments and arguments that are not numbers
//! count as 0, though numbers too large for 32 bits are still rejected.
//! Every other operation rejects malformed arguments.

use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use crate::io::configuration::{ARGUMENT_SEPARATOR, DEFAULT_WRAP, OPERATION_SEPARATOR};
use crate::io::error::{GridError, Result, invalid_parameter};
use crate::spatial::{Area, Grid, Margins, Rotation};

/// A single grid transform parsed from text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Grow or shrink each edge
    Resize(Margins),
    /// Keep only the given rectangle
    Crop(Area),
    /// Move content; `wrap` of `None` defers to the pipeline
    Shift {
        /// Horizontal offset
        dx: i32,
        /// Vertical offset
        dy: i32,
        /// Explicit wrap flag, if one was given
        wrap: Option<bool>,
    },
    /// Quarter turn
    Rotate(Rotation),
    /// Mirror columns
    InvertX,
    /// Mirror rows
    InvertY,
}

impl Operation {
    /// Canonical operation name, as used in error messages
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Resize(_) => "resize",
            Self::Crop(_) => "crop",
            Self::Shift { .. } => "shift",
            Self::Rotate(_) => "rotate",
            Self::InvertX => "invert-x",
            Self::InvertY => "invert-y",
        }
    }

    /// Apply this operation to `grid`
    ///
    /// # Errors
    ///
    /// Returns whatever the underlying transform reports; the grid is left
    /// unchanged on error
    pub fn apply<T: Clone>(&self, grid: &mut Grid<T>, default_wrap: bool) -> Result<()> {
        match *self {
            Self::Resize(margins) => {
                grid.resize_by(margins)?;
            }
            Self::Crop(area) => {
                grid.crop(area.x, area.y, area.width, area.height)?;
            }
            Self::Shift { dx, dy, wrap } => {
                grid.shift(dx, dy, wrap.unwrap_or(default_wrap))?;
            }
            Self::Rotate(rotation) => {
                grid.rotate(rotation);
            }
            Self::InvertX => {
                grid.invert_x();
            }
            Self::InvertY => {
                grid.invert_y();
            }
        }
        Ok(())
    }
}

impl FromStr for Operation {
    type Err = GridError;

    fn from_str(text: &str) -> Result<Self> {
        let (name, rest) = text
            .split_once(OPERATION_SEPARATOR)
            .map_or((text, None), |(name, rest)| (name, Some(rest)));
        let name = name.trim().to_ascii_lowercase();
        let args: Vec<&str> = rest
            .map(|rest| rest.split(ARGUMENT_SEPARATOR).map(str::trim).collect())
            .unwrap_or_default();

        match name.as_str() {
            "resize" => {
                expect_count("resize", &args, &[1, 2, 3, 4])?;
                let mut deltas = [0; 4];
                for (delta, arg) in deltas.iter_mut().zip(&args) {
                    *delta = parse_lenient("resize", arg)?;
                }
                let [left, top, right, bottom] = deltas;
                Ok(Self::Resize(Margins::new(left, top, right, bottom)))
            }
            "crop" => {
                expect_count("crop", &args, &[4])?;
                let [x, y, width, height] = parse_integers::<4>("crop", &args)?;
                Ok(Self::Crop(Area::new(x, y, width, height)))
            }
            "shift" => {
                expect_count("shift", &args, &[2, 3])?;
                let [dx, dy] = parse_integers::<2>("shift", &args)?;
                let wrap = args
                    .get(2)
                    .map(|arg| parse_bool("shift", arg))
                    .transpose()?;
                Ok(Self::Shift { dx, dy, wrap })
            }
            "rotate" => {
                expect_count("rotate", &args, &[0, 1])?;
                let rotation = args
                    .first()
                    .map(|arg| parse_rotation(arg))
                    .transpose()?
                    .unwrap_or_default();
                Ok(Self::Rotate(rotation))
            }
            "invert-x" | "invertx" | "flip-x" => {
                expect_count("invert-x", &args, &[0])?;
                Ok(Self::InvertX)
            }
            "invert-y" | "inverty" | "flip-y" => {
                expect_count("invert-y", &args, &[0])?;
                Ok(Self::InvertY)
            }
            _ => Err(invalid_parameter(
                "operation",
                &text,
                &"expected one of resize, crop, shift, rotate, invert-x, invert-y",
            )),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resize(m) => write!(f, "resize:{},{},{},{}", m.left, m.top, m.right, m.bottom),
            Self::Crop(a) => write!(f, "crop:{},{},{},{}", a.x, a.y, a.width, a.height),
            Self::Shift { dx, dy, wrap: None } => write!(f, "shift:{dx},{dy}"),
            Self::Shift {
                dx,
                dy,
                wrap: Some(wrap),
            } => write!(f, "shift:{dx},{dy},{wrap}"),
            Self::Rotate(Rotation::Clockwise) => write!(f, "rotate:cw"),
            Self::Rotate(Rotation::CounterClockwise) => write!(f, "rotate:ccw"),
            Self::InvertX | Self::InvertY => write!(f, "{}", self.name()),
        }
    }
}

/// An ordered list of operations applied one after another
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    operations: Vec<Operation>,
    wrap: bool,
}

impl Pipeline {
    /// Create a pipeline; `shift` wraps unless overridden
    pub const fn new(operations: Vec<Operation>) -> Self {
        Self {
            operations,
            wrap: DEFAULT_WRAP,
        }
    }

    /// Set the wrap behaviour for shifts that don't specify one
    #[must_use]
    pub const fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Operations in application order
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Number of operations
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Whether the pipeline does nothing
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Apply every operation in order
    ///
    /// # Errors
    ///
    /// Stops at the first failing operation and returns its error; earlier
    /// operations stay applied
    pub fn run<T: Clone>(&self, grid: &mut Grid<T>) -> Result<()> {
        self.run_with(grid, |_, _| {})
    }

    /// Apply every operation, calling `on_step(index, operation)` after each
    ///
    /// # Errors
    ///
    /// Stops at the first failing operation and returns its error; earlier
    /// operations stay applied
    pub fn run_with<T, F>(&self, grid: &mut Grid<T>, mut on_step: F) -> Result<()>
    where
        T: Clone,
        F: FnMut(usize, &Operation),
    {
        for (index, operation) in self.operations.iter().enumerate() {
            operation.apply(grid, self.wrap)?;
            on_step(index, operation);
        }
        Ok(())
    }
}

impl FromStr for Pipeline {
    type Err = GridError;

    /// Operations separated by whitespace or `;`
    fn from_str(text: &str) -> Result<Self> {
        let operations = text
            .split(|c: char| c == ';' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(str::parse)
            .collect::<Result<Vec<Operation>>>()?;
        Ok(Self::new(operations))
    }
}

fn expect_count(
    operation: &'static str,
    args: &[&str],
    expected: &'static [usize],
) -> Result<()> {
    if expected.contains(&args.len()) {
        Ok(())
    } else {
        Err(GridError::InvalidArgumentCount {
            operation,
            expected,
            found: args.len(),
        })
    }
}

fn parse_integers<const N: usize>(operation: &'static str, args: &[&str]) -> Result<[i32; N]> {
    let mut values = [0; N];
    for (value, arg) in values.iter_mut().zip(args) {
        *value = arg.parse().map_err(|_parse_error| GridError::InvalidArgumentType {
            operation,
            value: (*arg).to_string(),
            expected: "integer",
        })?;
    }
    Ok(values)
}

// Text that isn't a number reads as 0; a number out of range is an error
fn parse_lenient(operation: &'static str, arg: &str) -> Result<i32> {
    match arg.parse::<i32>() {
        Ok(value) => Ok(value),
        Err(error)
            if matches!(
                error.kind(),
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
            ) =>
        {
            Err(GridError::InvalidArgumentType {
                operation,
                value: arg.to_string(),
                expected: "32-bit integer",
            })
        }
        Err(_) => Ok(0),
    }
}

fn parse_bool(operation: &'static str, arg: &str) -> Result<bool> {
    match arg.to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(GridError::InvalidArgumentType {
            operation,
            value: arg.to_string(),
            expected: "boolean",
        }),
    }
}

fn parse_rotation(arg: &str) -> Result<Rotation> {
    match arg.to_ascii_lowercase().as_str() {
        "cw" | "clockwise" | "true" => Ok(Rotation::Clockwise),
        "ccw" | "counterclockwise" | "false" => Ok(Rotation::CounterClockwise),
        _ => Err(GridError::InvalidArgumentType {
            operation: "rotate",
            value: arg.to_string(),
            expected: "rotation direction (cw or ccw)",
        }),
    }
}
