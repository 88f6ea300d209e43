//! Masking algorithms

/// Per-sample reference masking and outline rings
pub mod pointwise;
/// Recursive subdivision masking
pub mod subdivision;

pub use pointwise::{mask_from_outline, mask_pointwise};
pub use subdivision::{GridMasker, MaskOptions, SplitStrategy, TraversalStats, mask_region};
