//! Input/output operations and error handling

/// Boundary loading from GeoJSON
pub mod boundary;
/// Command-line interface
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Mask export
pub mod export;
/// Progress display
pub mod progress;
