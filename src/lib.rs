//! Boolean masks of regular coordinate grids against planar regions
//!
//! A region (typically a country or province outline) is tested against the
//! bounding rectangle of ever smaller blocks of grid samples, so blocks entirely
//! inside or outside are decided without testing each sample.

#![forbid(unsafe_code)]

/// Subdivision and pointwise masking
pub mod algorithm;
/// Boundary loading, export, CLI and error handling
pub mod io;
/// Grids, bounds, regions and masks
pub mod spatial;

pub use algorithm::{GridMasker, MaskOptions, SplitStrategy, mask_pointwise, mask_region};
pub use io::error::{MaskError, Result};
pub use spatial::{Bounds, BoundsMargin, Extent, Grid, Mask, Region};
