//! Command-line interface for turning PNG artwork into board layouts

use crate::io::configuration::{DEFAULT_BLOCK_SPACING, DEFAULT_SEED, OUTPUT_SUFFIX};
use crate::io::error::{Result, WithPath, io_error};
use crate::io::image::{export_layout_png, load_png};
use crate::io::progress::ProgressManager;
use crate::io::summary::BoardSummary;
use crate::palette::Palette;
use crate::pipeline::{GenerationConfig, LevelGenerator};
use crate::placement::{ColumnPolicy, RowPolicy, SeededRandom};
use clap::Parser;
use indicatif::MultiProgress;
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "pigboard")]
#[command(
    author,
    version,
    about = "Generate block boards and shooter layouts from PNG artwork"
)]
/// Command-line arguments for board generation
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible layouts
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Board width in blocks (implies square if height not specified)
    #[arg(short = 'w', long)]
    pub width: Option<usize>,

    /// Board height in blocks
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Distance between neighbouring board blocks
    #[arg(long, default_value_t = DEFAULT_BLOCK_SPACING)]
    pub spacing: f32,

    /// Difficulty in [0, 1], overrides the level-derived value
    #[arg(short, long)]
    pub difficulty: Option<f64>,

    /// Level number; sets difficulty and draws columns from its tier
    #[arg(short, long)]
    pub level: Option<u32>,

    /// Fixed slot matrix column count
    #[arg(short, long)]
    pub columns: Option<usize>,

    /// Size the slot matrix to exactly fit every unit
    #[arg(long)]
    pub compact_rows: bool,

    /// Add primary units until every slot row is full
    #[arg(long)]
    pub pad_primary: bool,

    /// Suppress progress output and the per-board report
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if a preview already exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing previews should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Build the generation configuration from the parsed options
    ///
    /// A level sets both difficulty and column policy; an explicit
    /// difficulty or column count then overrides either.
    pub fn generation_config(&self) -> GenerationConfig {
        let mut config = self
            .level
            .map_or_else(GenerationConfig::default, GenerationConfig::for_level);

        match (self.width, self.height) {
            (Some(w), Some(h)) => {
                config.grid_width = w;
                config.grid_height = h;
            }
            (Some(side), None) | (None, Some(side)) => {
                config.grid_width = side;
                config.grid_height = side;
            }
            (None, None) => {}
        }

        config.block_spacing = self.spacing;
        if let Some(difficulty) = self.difficulty {
            config.difficulty = difficulty;
        }
        if let Some(columns) = self.columns {
            config.column_policy = ColumnPolicy::Fixed(columns);
        }
        if self.compact_rows {
            config.row_policy = RowPolicy::Computed;
        }
        config.pad_primary = self.pad_primary;
        config
    }
}

/// Orchestrates batch processing of PNG files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    palette: Palette,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a processor using the default palette
    pub fn new(cli: Cli) -> Self {
        Self::with_progress(cli, MultiProgress::new())
    }

    /// Create a processor whose bars draw into `multi_progress`
    pub fn with_progress(cli: Cli, multi_progress: MultiProgress) -> Self {
        let progress_manager = cli
            .should_show_progress()
            .then(|| ProgressManager::with_multi_progress(multi_progress));

        Self {
            cli,
            palette: Palette::default(),
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the target cannot be
    /// read, or any file fails to load, generate or export
    pub fn process(&mut self) -> Result<()> {
        let generator = LevelGenerator::new(self.palette.clone(), self.cli.generation_config())?;
        let files = self.collect_files()?;

        if files.is_empty() {
            info!("No PNG files to process in {}", self.cli.target.display());
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(&generator, file, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// PNG files named by the target, sorted, minus those already processed
    ///
    /// # Errors
    ///
    /// Returns an error if the target is neither a PNG file nor a readable
    /// directory
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !is_png(target) {
                return Err(io_error("Target file must be a PNG image"));
            }
            if self.should_process_file(target) {
                Ok(vec![target.clone()])
            } else {
                Ok(vec![])
            }
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).with_path(target)? {
                let path = entry.with_path(target)?.path();
                if is_png(&path) && !is_preview(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(io_error("Target must be a PNG file or directory"))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        if Self::get_output_path(input_path).exists() {
            warn!("Skipping {} (preview exists)", input_path.display());
            false
        } else {
            true
        }
    }

    // Allow print for the per-board report on stdout
    #[allow(clippy::print_stdout)]
    fn process_file(&mut self, generator: &LevelGenerator, input_path: &Path, index: usize) -> Result<()> {
        let start_time = Instant::now();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }
        let image = load_png(input_path)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.advance(index, 1);
        }
        let mut rng = SeededRandom::new(self.cli.seed);
        let generation = generator.generate(&image, &mut rng)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.advance(index, 2);
        }
        if generation.placed.is_empty() {
            warn!("{}: no units placed, preview not written", input_path.display());
        } else {
            export_layout_png(&generation, &self.palette, &Self::get_output_path(input_path))?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, start_time.elapsed());
        }

        if !self.cli.quiet {
            let name = input_path.display().to_string();
            let summary = BoardSummary::new(&name, &generation);
            let report = || println!("{summary}");
            self.progress_manager
                .as_ref()
                .map_or_else(report, |pm| pm.suspend(report));
        }

        Ok(())
    }

    /// Preview path written next to `input_path`
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.png", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

fn is_png(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("png")
}

fn is_preview(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
}

#[cfg(test)]
#[path = "../../tests/unit/io/cli.rs"]
mod unit_tests;
