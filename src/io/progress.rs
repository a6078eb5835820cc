//! Per-file progress display for batch pipeline runs

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use crate::io::pipeline::Operation;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::collections::VecDeque;
use std::path::Path;
use std::sync::LazyLock;

static STEP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:>24} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Shows one bar per file being transformed, stepping once per operation
///
/// Only the most recent [`MAX_INDIVIDUAL_PROGRESS_BARS`] files keep a bar;
/// larger batches also get an overall file counter.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    /// (file index, bar) for files currently on screen, oldest first
    file_bars: VecDeque<(usize, ProgressBar)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with nothing on screen
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: VecDeque::new(),
        }
    }

    /// Prepare for `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }
    }

    /// Add a bar for a file about to run `step_count` operations
    pub fn start_file(&mut self, index: usize, path: &Path, step_count: usize) {
        if self.file_bars.len() >= MAX_INDIVIDUAL_PROGRESS_BARS {
            if let Some((_, oldest)) = self.file_bars.pop_front() {
                self.multi_progress.remove(&oldest);
            }
        }

        let bar = self.multi_progress.add(ProgressBar::new(step_count as u64));
        bar.set_style(STEP_STYLE.clone());
        bar.set_prefix(
            path.file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string(),
        );
        self.file_bars.push_back((index, bar));
    }

    /// Record that operation `step` of file `index` has been applied
    pub fn update_step(&self, index: usize, step: usize, operation: &Operation) {
        if let Some(bar) = self.bar_for(index) {
            bar.set_position(step as u64 + 1);
            bar.set_message(operation.to_string());
        }
    }

    /// Mark a file as written
    pub fn complete_file(&self, index: usize) {
        if let Some(bar) = self.bar_for(index) {
            bar.finish_with_message("✓");
        }
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files processed");
        }
        let _ = self.multi_progress.clear();
    }

    fn bar_for(&self, index: usize) -> Option<&ProgressBar> {
        self.file_bars
            .iter()
            .find(|(file_index, _)| *file_index == index)
            .map(|(_, bar)| bar)
    }
}
