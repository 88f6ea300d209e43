//! Spatial data structures for grid masking
//!
//! This module contains:
//! - Coordinate grids and extents
//! - Sub-grid bounds under a margin policy
//! - The region abstraction over `geo` polygons
//! - The mask matrix

/// Sub-grid bounds and probe geometries
pub mod bounds;
/// Validated coordinate axes
pub mod grid;
/// Inside/outside matrices
pub mod mask;
/// Region predicates over polygon geometry
pub mod region;

pub use bounds::{Bounds, BoundsMargin, CellBounds};
pub use grid::{CoordinateAxis, Extent, Grid};
pub use mask::Mask;
pub use region::Region;
