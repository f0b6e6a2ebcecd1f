//! Per-file progress display for batch board generation

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use log::{Log, Metadata, Record};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

/// Stages every input file goes through, in order
pub const FILE_STAGES: [&str; 4] = ["load", "generate", "export", "done"];

/// Display state of one file
#[derive(Debug, Clone, Default)]
struct FileState {
    name: String,
    stage: usize,
    elapsed: Option<Duration>,
}

/// Coordinates progress display for a batch of input images
///
/// Small batches get one bar per file; larger batches add a file counter
/// and show only the most recent files.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    file_states: Vec<FileState>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:>24} [{bar:20.green/white}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Boards: [{bar:40.green/white}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create an empty progress manager
    pub fn new() -> Self {
        Self::with_multi_progress(MultiProgress::new())
    }

    /// Create a progress manager drawing into an existing display
    ///
    /// Share the display with a [`ProgressLogger`] so log lines are written
    /// between redraws.
    pub const fn with_multi_progress(multi_progress: MultiProgress) -> Self {
        Self {
            multi_progress,
            batch_bar: None,
            file_bars: Vec::new(),
            file_states: Vec::new(),
        }
    }

    /// Hide the bars while `f` writes to the terminal, then redraw them
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.multi_progress.suspend(f)
    }

    /// Create bars for `file_count` input files
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(FILE_STAGES.len() as u64 - 1);
            bar.set_style(STAGE_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Start tracking the file at `index`
    pub fn start_file(&mut self, index: usize, path: &Path) {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.file_states.len() {
            self.file_states.resize(index + 1, FileState::default());
        }
        if let Some(state) = self.file_states.get_mut(index) {
            *state = FileState {
                name,
                stage: 0,
                elapsed: None,
            };
        }
        self.update_bars();
    }

    /// Move the file at `index` to stage `stage` of [`FILE_STAGES`]
    pub fn advance(&mut self, index: usize, stage: usize) {
        if let Some(state) = self.file_states.get_mut(index) {
            state.stage = stage.min(FILE_STAGES.len() - 1);
        }
        self.update_bars();
    }

    /// Mark the file at `index` as finished
    pub fn complete_file(&mut self, index: usize, elapsed: Duration) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
        if let Some(state) = self.file_states.get_mut(index) {
            state.stage = FILE_STAGES.len() - 1;
            state.elapsed = Some(elapsed);
        }
        self.update_bars();
    }

    /// Clear every bar
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All boards generated");
        }
        let _ = self.multi_progress.clear();
    }

    /// Stage label shown for the file at `index`
    pub fn stage_of(&self, index: usize) -> Option<&'static str> {
        self.file_states
            .get(index)
            .filter(|state| !state.name.is_empty())
            .and_then(|state| FILE_STAGES.get(state.stage).copied())
    }

    fn update_bars(&self) {
        let active: Vec<&FileState> = self
            .file_states
            .iter()
            .filter(|state| !state.name.is_empty())
            .collect();

        let start = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start..).unwrap_or(&[]);

        for (bar_idx, state) in visible.iter().enumerate() {
            if let Some(bar) = self.file_bars.get(bar_idx) {
                bar.set_position(state.stage as u64);
                bar.set_prefix(state.name.clone());
                let stage = FILE_STAGES.get(state.stage).copied().unwrap_or_default();
                match state.elapsed {
                    Some(elapsed) => bar.set_message(format!("{stage} in {elapsed:.1?}")),
                    None => bar.set_message(stage),
                }
            }
        }

        for bar in self.file_bars.iter().skip(visible.len()) {
            bar.set_position(0);
            bar.set_message(String::new());
            bar.set_prefix(String::new());
        }
    }
}

/// Log sink that clears the progress bars around every record
pub struct ProgressLogger<L> {
    inner: L,
    multi_progress: MultiProgress,
}

impl<L: Log> ProgressLogger<L> {
    /// Wrap `inner` so its output does not tear through `multi_progress`
    pub const fn new(inner: L, multi_progress: MultiProgress) -> Self {
        Self {
            inner,
            multi_progress,
        }
    }
}

impl<L: Log> Log for ProgressLogger<L> {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.inner.enabled(metadata)
    }

    fn log(&self, record: &Record<'_>) {
        if self.inner.enabled(record.metadata()) {
            self.multi_progress.suspend(|| self.inner.log(record));
        }
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/io/progress.rs"]
mod unit_tests;
