//! Command-line interface for batch masking of boundary files

use crate::algorithm::subdivision::{GridMasker, MaskOptions, SplitStrategy};
use crate::io::boundary::{FeatureSelector, load_boundary};
use crate::io::configuration::{
    BOUNDARY_EXTENSIONS, DEFAULT_LOG_LEVEL, DEFAULT_RESOLUTION, OUTPUT_SUFFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::export::{export_mask_as_png, export_mask_as_text};
use crate::io::progress::ProgressManager;
use crate::spatial::bounds::BoundsMargin;
use crate::spatial::grid::{Extent, Grid};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Bounds margin choices exposed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MarginArg {
    /// Bounds sit on the outermost samples
    Exact,
    /// Bounds extend half a grid spacing
    HalfCell,
}

impl From<MarginArg> for BoundsMargin {
    fn from(arg: MarginArg) -> Self {
        match arg {
            MarginArg::Exact => Self::Exact,
            MarginArg::HalfCell => Self::HalfCell,
        }
    }
}

/// Split strategy choices exposed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SplitArg {
    /// Halve the longer side
    Longest,
    /// Halve both sides
    Quadrants,
}

impl From<SplitArg> for SplitStrategy {
    fn from(arg: SplitArg) -> Self {
        match arg {
            SplitArg::Longest => Self::Longest,
            SplitArg::Quadrants => Self::Quadrants,
        }
    }
}

/// Output file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// PNG image, inside samples opaque
    Png,
    /// Text matrix of 1 and 0
    Text,
}

impl OutputFormat {
    /// File extension written for this format
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Text => "txt",
        }
    }
}

#[derive(Parser)]
#[command(name = "gridmask")]
#[command(
    author,
    version,
    about = "Mask regular lon/lat grids with GeoJSON boundaries"
)]
/// Command-line arguments for the masking tool
pub struct Cli {
    /// Input GeoJSON file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Grid extent as west,east,south,north
    #[arg(short, long, allow_hyphen_values = true, value_parser = parse_extent)]
    pub extent: Extent,

    /// Grid spacing in coordinate units
    #[arg(short, long, default_value_t = DEFAULT_RESOLUTION)]
    pub resolution: f64,

    /// Feature property used to select records (requires --region)
    #[arg(short, long, requires = "region")]
    pub property: Option<String>,

    /// Accepted property values, may be repeated
    #[arg(long = "region", requires = "property")]
    pub region: Vec<String>,

    /// Sub-grid bounds margin
    #[arg(short, long, value_enum, default_value_t = MarginArg::Exact)]
    pub margin: MarginArg,

    /// Split strategy for blocks crossing the boundary
    #[arg(short, long, value_enum, default_value_t = SplitArg::Longest)]
    pub split: SplitArg,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Png)]
    pub format: OutputFormat,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Log filter (overridden by RUST_LOG)
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

fn parse_extent(value: &str) -> std::result::Result<Extent, String> {
    value.parse::<Extent>().map_err(|e| e.to_string())
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

    /// Feature selector built from `--property` and `--region`
    pub fn selector(&self) -> Option<FeatureSelector> {
        self.property
            .as_ref()
            .map(|property| FeatureSelector::new(property.clone(), self.region.iter().cloned()))
    }

    /// Masking options built from `--margin` and `--split`
    pub fn mask_options(&self) -> MaskOptions {
        MaskOptions {
            margin: self.margin.into(),
            split: self.split.into(),
        }
    }
}

/// Orchestrates batch masking of boundary files with progress tracking
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

    /// Process files according to CLI arguments, returning the outputs written
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, grid construction, boundary
    /// loading, masking or export fails
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(Vec::new());
        }

        let grid = Grid::from_extent(self.cli.extent, self.cli.resolution)?;
        info!(
            width = grid.width(),
            height = grid.height(),
            files = files.len(),
            "grid prepared"
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut outputs = Vec::with_capacity(files.len());
        for file in &files {
            outputs.push(self.process_file(file, &grid)?);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(outputs)
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if is_boundary_file(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &"target file must be GeoJSON (.geojson or .json)",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if is_boundary_file(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"target must be a GeoJSON file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path, self.cli.format);
        if output_path.exists() {
            info!(input = %input_path.display(), "skipping, output exists");
            false
        } else {
            true
        }
    }

    fn process_file(&self, input_path: &Path, grid: &Grid) -> Result<PathBuf> {
        let start_time = Instant::now();
        let output_path = Self::get_output_path(input_path, self.cli.format);

        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let selector = self.cli.selector();
        let region = load_boundary(input_path, selector.as_ref())?;

        let (mask, stats) = GridMasker::new(&region, grid)
            .with_options(self.cli.mask_options())
            .run_with_stats()?;

        match self.cli.format {
            OutputFormat::Png => export_mask_as_png(&mask, &output_path)?,
            OutputFormat::Text => export_mask_as_text(&mask, &output_path)?,
        }

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            inside = mask.count_inside(),
            fraction = mask.fraction_inside(),
            predicate_calls = stats.predicate_calls(),
            elapsed_s = start_time.elapsed().as_secs_f64(),
            "mask written"
        );

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file();
        }

        Ok(output_path)
    }

    /// Output path next to `input_path`: `<stem>_mask.<ext>`
    pub fn get_output_path(input_path: &Path, format: OutputFormat) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            format.extension()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

fn is_boundary_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| BOUNDARY_EXTENSIONS.contains(&ext))
}
