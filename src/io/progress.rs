//! Multi-file progress tracking with automatic batching for large sets

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Stroke progress of one file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileProgress {
    /// Display name, prefixed with a check mark once complete
    pub name: String,
    /// Strokes applied so far
    pub applied: usize,
    /// Strokes the file will apply
    pub total: usize,
}

/// Coordinates progress display for batch stroke processing
///
/// Shows one bar per file for small batches and adds a single batch bar when
/// the file count exceeds the individual bar limit
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    /// Per-file state for the rolling window display
    file_states: Vec<FileProgress>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            file_states: Vec::new(),
        }
    }

    /// Initialize progress bars based on file count
    pub fn initialize(&mut self, file_count: usize) {
        // Switch to batch mode for large file sets to avoid terminal spam
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let bars_to_create = file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let pb = ProgressBar::new(0);
            pb.set_style(PROGRESS_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Configure progress for a new file
    pub fn start_file(&mut self, index: usize, path: &Path, strokes: usize) {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.file_states.len() {
            self.file_states.resize(index + 1, FileProgress::default());
        }
        if let Some(state) = self.file_states.get_mut(index) {
            *state = FileProgress {
                name,
                applied: 0,
                total: strokes,
            };
        }
        self.update_bars();
    }

    /// Report the number of strokes applied to a file so far
    pub fn update_strokes(&mut self, index: usize, applied: usize) {
        if let Some(state) = self.file_states.get_mut(index) {
            state.applied = applied.min(state.total);
        }
        self.update_bars();
    }

    /// Mark file as completed and update batch progress
    pub fn complete_file(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.file_states.get_mut(index) {
            state.name = format!("✓ {}", state.name);
            state.applied = state.total;
        }
        self.update_bars();
    }

    /// Progress state of a file, if it has been started
    pub fn file_state(&self, index: usize) -> Option<&FileProgress> {
        self.file_states.get(index)
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files processed");
        }
        let _ = self.multi_progress.clear();
    }

    /// Update all progress bars to show the last N active files
    fn update_bars(&self) {
        let active: Vec<&FileProgress> = self
            .file_states
            .iter()
            .filter(|state| !state.name.is_empty())
            .collect();

        let start_idx = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start_idx..).unwrap_or(&[]);

        for (bar, state) in self.file_bars.iter().zip(visible) {
            bar.set_length(state.total as u64);
            bar.set_position(state.applied as u64);
            let width = state.total.to_string().len();
            bar.set_message(format!("{:>width$}/{}", state.applied, state.total));
            bar.set_prefix(state.name.clone());
        }

        // Clear any unused bars
        for bar in self.file_bars.iter().skip(visible.len()) {
            bar.set_length(0);
            bar.set_position(0);
            bar.set_message(String::new());
            bar.set_prefix(String::new());
        }
    }
}
