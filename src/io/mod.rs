//! Input/output, error handling and the command-line front end

/// Command-line parsing and batch file processing
pub mod cli;
/// Runtime configuration defaults
pub mod configuration;
/// Error types and context management
pub mod error;
/// PNG import and export for pixel grids
pub mod image;
/// Textual transform pipelines
pub mod pipeline;
/// Progress display for batch runs
pub mod progress;
/// Text rendering with injectable formatters and sinks
pub mod render;
