//! Masking constants and runtime configuration defaults

/// Default grid spacing in degrees
pub const DEFAULT_RESOLUTION: f64 = 0.25;

// Tolerance when counting samples along an extent, absorbs float drift in (east - west) / step
/// Relative slack added before flooring the step count
pub const STEP_TOLERANCE: f64 = 1e-9;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed samples along one axis
pub const MAX_GRID_DIMENSION: usize = 100_000;
/// Maximum allowed samples in the whole grid (width x height)
pub const MAX_GRID_CELLS: usize = 100_000_000;

/// File extensions recognised as boundary files
pub const BOUNDARY_EXTENSIONS: &[&str] = &["geojson", "json"];

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_mask";
/// Pixel color for samples inside the region
pub const INSIDE_COLOR: [u8; 4] = [32, 96, 192, 255];
/// Pixel color for samples outside the region
pub const OUTSIDE_COLOR: [u8; 4] = [0, 0, 0, 0];
/// Character written for inside samples in text output
pub const INSIDE_CHAR: char = '1';
/// Character written for outside samples in text output
pub const OUTSIDE_CHAR: char = '0';

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Log filter used when neither `--log-level` nor `RUST_LOG` is given
pub const DEFAULT_LOG_LEVEL: &str = "info";
