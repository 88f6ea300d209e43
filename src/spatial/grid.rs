//! Rectilinear coordinate grids
//!
//! A grid is the pair of ascending coordinate axes a gridded field is sampled on.
//! Construction validates both axes once so the masking routines can index freely.

use std::fmt;
use std::str::FromStr;

use geo::GeoFloat;

use crate::io::configuration::{MAX_GRID_CELLS, MAX_GRID_DIMENSION, STEP_TOLERANCE};
use crate::io::error::{MaskError, Result, invalid_parameter};

/// Identifies one of the two grid axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateAxis {
    /// Columns, typically longitude
    X,
    /// Rows, typically latitude
    Y,
}

impl fmt::Display for CoordinateAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
        }
    }
}

/// Geographic extent `[west, east] x [south, north]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent<T = f64> {
    /// Minimum x
    pub west: T,
    /// Maximum x
    pub east: T,
    /// Minimum y
    pub south: T,
    /// Maximum y
    pub north: T,
}

impl FromStr for Extent<f64> {
    type Err = MaskError;

    /// Parse `west,east,south,north`
    fn from_str(s: &str) -> Result<Self> {
        let values = s
            .split(',')
            .map(|part| part.trim().parse::<f64>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| invalid_parameter("extent", &s, &e))?;

        match values.as_slice() {
            [west, east, south, north] => Ok(Self {
                west: *west,
                east: *east,
                south: *south,
                north: *north,
            }),
            _ => Err(invalid_parameter(
                "extent",
                &s,
                &"expected four comma-separated values west,east,south,north",
            )),
        }
    }
}

/// Two validated, strictly ascending coordinate axes
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T = f64> {
    xs: Vec<T>,
    ys: Vec<T>,
}

impl<T: GeoFloat> Grid<T> {
    /// Create a grid from explicit axes
    ///
    /// # Errors
    ///
    /// Returns `EmptyGrid` if either axis has no samples, `InvalidCoordinates`
    /// if a value is not finite or the axis is not strictly ascending, and
    /// `InvalidParameter` if the grid would exceed `MAX_GRID_CELLS` samples
    pub fn new(xs: Vec<T>, ys: Vec<T>) -> Result<Self> {
        validate_axis(CoordinateAxis::X, &xs)?;
        validate_axis(CoordinateAxis::Y, &ys)?;

        let cells = xs.len().checked_mul(ys.len());
        if cells.is_none_or(|n| n > MAX_GRID_CELLS) {
            return Err(invalid_parameter(
                "grid",
                &format!("{}x{}", xs.len(), ys.len()),
                &format!("grid would exceed {MAX_GRID_CELLS} samples"),
            ));
        }

        Ok(Self { xs, ys })
    }

    /// Create a regular grid covering `extent` with the given spacing
    ///
    /// Samples start at the west/south edge; the east/north edge is included
    /// when it falls on a whole number of steps.
    ///
    /// # Errors
    ///
    /// Returns an error if the resolution is not a positive finite number,
    /// the extent is inverted, an axis would exceed `MAX_GRID_DIMENSION`, or the
    /// grid would exceed `MAX_GRID_CELLS`
    pub fn from_extent(extent: Extent<T>, resolution: T) -> Result<Self> {
        if !resolution.is_finite() || resolution <= T::zero() {
            return Err(invalid_parameter(
                "resolution",
                &format!("{resolution:?}"),
                &"must be a positive finite number",
            ));
        }

        let xs = regular_axis(CoordinateAxis::X, extent.west, extent.east, resolution)?;
        let ys = regular_axis(CoordinateAxis::Y, extent.south, extent.north, resolution)?;
        Self::new(xs, ys)
    }

    /// Samples along x
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Samples along y
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Number of samples along x
    pub fn width(&self) -> usize {
        self.xs.len()
    }

    /// Number of samples along y
    pub fn height(&self) -> usize {
        self.ys.len()
    }

    /// Coordinates of sample `(i, j)`, `None` if out of range
    pub fn point(&self, i: usize, j: usize) -> Option<(T, T)> {
        Some((*self.xs.get(i)?, *self.ys.get(j)?))
    }
}

fn validate_axis<T: GeoFloat>(axis: CoordinateAxis, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(MaskError::EmptyGrid { axis });
    }

    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(MaskError::InvalidCoordinates {
            axis,
            index,
            reason: "value is not finite".to_string(),
        });
    }

    let descending = values
        .iter()
        .zip(values.iter().skip(1))
        .position(|(previous, next)| next <= previous);
    if let Some(index) = descending {
        return Err(MaskError::InvalidCoordinates {
            axis,
            index: index + 1,
            reason: "axis must be strictly ascending".to_string(),
        });
    }

    Ok(())
}

fn regular_axis<T: GeoFloat>(
    axis: CoordinateAxis,
    start: T,
    end: T,
    resolution: T,
) -> Result<Vec<T>> {
    if !start.is_finite() || !end.is_finite() || end < start {
        return Err(invalid_parameter(
            "extent",
            &format!("{axis}: {start:?}..{end:?}"),
            &"bounds must be finite and ascending",
        ));
    }

    let tolerance = num_traits::cast::<f64, T>(STEP_TOLERANCE).unwrap_or_else(T::epsilon);
    let steps = ((end - start) / resolution + tolerance).floor();
    let count = num_traits::cast::<T, usize>(steps)
        .and_then(|s| s.checked_add(1))
        .filter(|&n| n <= MAX_GRID_DIMENSION)
        .ok_or_else(|| {
            invalid_parameter(
                "resolution",
                &format!("{resolution:?}"),
                &format!("{axis} axis would exceed {MAX_GRID_DIMENSION} samples"),
            )
        })?;

    (0..count)
        .map(|i| {
            num_traits::cast::<usize, T>(i)
                .map(|step| step.mul_add(resolution, start))
                .ok_or_else(|| invalid_parameter("extent", &i, &"sample index not representable"))
        })
        .collect()
}
