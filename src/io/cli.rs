//! Command-line interface for batch painting stroke images into rendered tile maps

use crate::brush::area::AreaBrush;
use crate::brush::fringe::FringeBrush;
use crate::brush::stroke::{GridBrush, Stroke, apply_stroke};
use crate::io::configuration::{
    DEFAULT_CELL_SCALE, DEFAULT_LOG_LEVEL, DEFAULT_SCATTER, DEFAULT_SEED, ERASE_SUFFIX,
    MAX_CELL_SCALE, OUTPUT_SUFFIX,
};
use crate::io::error::{Result, TileError, invalid_parameter};
use crate::io::image::{export_layer_as_png, load_stroke_image};
use crate::io::progress::ProgressManager;
use crate::spatial::coord::Coord;
use crate::spatial::tilemap::TileMap;
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::path::{Path, PathBuf};

/// Brush family used to paint stroke images
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BrushKind {
    /// Fill with a self-maintaining fringe border
    Fringe,
    /// Tag-driven area with blended edges
    Area,
}

#[derive(Parser)]
#[command(name = "fringetile")]
#[command(
    author,
    version,
    about = "Paint stroke images with autotiling brushes and render the result"
)]
/// Command-line arguments for the stroke painting tool
pub struct Cli {
    /// Stroke PNG file or directory of stroke images to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Brush family to paint with
    #[arg(short, long, value_enum, default_value_t = BrushKind::Fringe)]
    pub brush: BrushKind,

    /// Random seed for reproducible scatter erasing
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of random painted cells to erase after painting
    #[arg(short = 'x', long, default_value_t = DEFAULT_SCATTER)]
    pub scatter: usize,

    /// Erase the opaque cells of <input>_erase.png after painting
    #[arg(short, long)]
    pub erase: bool,

    /// Output pixels per cell side
    #[arg(short = 'S', long, default_value_t = DEFAULT_CELL_SCALE)]
    pub scale: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Log level written to stderr (trace, debug, info, warn, error, off)
    #[arg(short, long, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
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

    /// Validate numeric arguments
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if the cell scale is zero or above
    /// the supported maximum
    pub fn validate(&self) -> Result<()> {
        if self.scale == 0 || self.scale > MAX_CELL_SCALE {
            return Err(invalid_parameter(
                "scale",
                &self.scale,
                &format!("must be between 1 and {MAX_CELL_SCALE}"),
            ));
        }
        Ok(())
    }
}

/// Orchestrates batch processing of stroke images with progress tracking
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
    /// Returns an error if argument validation, target validation or file
    /// processing fails
    pub fn process(&mut self) -> Result<()> {
        self.cli.validate()?;
        let files = self.collect_files()?;

        if files.is_empty() {
            log::info!("no stroke images to process");
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn is_png(path: &Path) -> bool {
        path.extension().and_then(|s| s.to_str()) == Some("png")
    }

    // Outputs and companion erase images live next to their inputs
    fn is_derived(path: &Path) -> bool {
        path.file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX) || stem.ends_with(ERASE_SUFFIX))
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !Self::is_png(target) {
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
            let entries = std::fs::read_dir(target).map_err(|e| TileError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            })?;
            let mut files = Vec::new();
            for entry in entries {
                let path = entry?.path();
                if Self::is_png(&path) && !Self::is_derived(&path) && self.should_process_file(&path)
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

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            log::info!("skipping {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    /// Build the stroke list for one input file
    ///
    /// Paints every cell of the stroke image, then erases the cells of the
    /// companion erase image when requested and present.
    ///
    /// # Errors
    ///
    /// Returns an error if either image cannot be loaded
    pub fn build_strokes(&self, input_path: &Path) -> Result<Vec<Stroke>> {
        let mut strokes: Vec<Stroke> = load_stroke_image(input_path)?
            .into_iter()
            .map(Stroke::Paint)
            .collect();

        if self.cli.erase {
            let erase_path = Self::get_erase_path(input_path);
            if erase_path.exists() {
                strokes.extend(load_stroke_image(&erase_path)?.into_iter().map(Stroke::Erase));
            } else {
                log::warn!(
                    "no erase image at {} (continuing without erasing)",
                    erase_path.display()
                );
            }
        }

        Ok(strokes)
    }

    /// Paint a stroke list into a fresh map and refresh every touched cell
    pub fn paint_map(&mut self, strokes: &[Stroke], index: usize) -> TileMap {
        match self.cli.brush {
            BrushKind::Fringe => self.paint_with(&FringeBrush::new(), strokes, index),
            BrushKind::Area => self.paint_with(&AreaBrush::new(), strokes, index),
        }
    }

    fn paint_with<B: GridBrush>(&mut self, brush: &B, strokes: &[Stroke], index: usize) -> TileMap {
        let mut map = TileMap::new();

        for (applied, stroke) in strokes.iter().enumerate() {
            apply_stroke(brush, Some(&mut map), stroke);
            if let Some(ref mut pm) = self.progress_manager {
                pm.update_strokes(index, applied + 1);
            }
        }

        if self.cli.scatter > 0 {
            let mut rng = StdRng::seed_from_u64(self.cli.seed);
            let mut painted = map.occupied_cells(0);
            painted.shuffle(&mut rng);
            let victims: Vec<Coord> = painted.into_iter().take(self.cli.scatter).collect();
            log::debug!("scatter erasing {} cells", victims.len());
            for at in victims {
                brush.erase(&mut map, at);
            }
        }

        let refreshed = map.refresh();
        log::debug!("refreshed {refreshed} cells after {} strokes", strokes.len());
        map
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let strokes = self.build_strokes(input_path)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, strokes.len());
        }

        let map = self.paint_map(&strokes, index);
        let output_path = Self::get_output_path(input_path);
        export_layer_as_png(&map, 0, self.cli.scale, &output_path)?;
        log::info!("wrote {}", output_path.display());

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        Ok(())
    }

    fn sibling_path(input_path: &Path, suffix: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let name = format!("{}{suffix}.png", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(name)
        } else {
            PathBuf::from(name)
        }
    }

    /// Path the render of `input_path` is written to
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        Self::sibling_path(input_path, OUTPUT_SUFFIX)
    }

    /// Path of the companion erase image of `input_path`
    pub fn get_erase_path(input_path: &Path) -> PathBuf {
        Self::sibling_path(input_path, ERASE_SUFFIX)
    }
}
