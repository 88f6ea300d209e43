//! Boolean inside/outside matrices

use ndarray::{Array2, Zip};

use crate::io::error::{MaskError, Result};

/// Inside/outside flag for every sample of a grid
///
/// Stored with shape `(height, width)` so rows follow the y axis, the same layout
/// as the gridded fields the mask is applied to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    cells: Array2<bool>,
}

impl Mask {
    /// Wrap a `(height, width)` matrix
    pub const fn from_array(cells: Array2<bool>) -> Self {
        Self { cells }
    }

    /// Number of samples along x
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of samples along y
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Whether sample `(xs[i], ys[j])` is inside, `None` if out of range
    pub fn get(&self, i: usize, j: usize) -> Option<bool> {
        self.cells.get([j, i]).copied()
    }

    /// Number of inside samples
    pub fn count_inside(&self) -> usize {
        self.cells.iter().filter(|&&inside| inside).count()
    }

    /// Share of inside samples in `[0, 1]`
    pub fn fraction_inside(&self) -> f64 {
        let total = self.cells.len();
        if total == 0 {
            return 0.0;
        }
        self.count_inside() as f64 / total as f64
    }

    /// Indices `(i, j)` of inside samples in row-major order
    pub fn iter_inside(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .indexed_iter()
            .filter_map(|((j, i), &inside)| inside.then_some((i, j)))
    }

    /// Whether every sample equals `value`
    pub fn is_uniform(&self, value: bool) -> bool {
        self.cells.iter().all(|&inside| inside == value)
    }

    /// Underlying `(height, width)` matrix
    pub const fn as_array(&self) -> &Array2<bool> {
        &self.cells
    }

    /// Consume the mask, returning the matrix
    pub fn into_array(self) -> Array2<bool> {
        self.cells
    }

    /// Copy `field`, replacing values outside the region with `fill`
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if `field` is not `(height, width)`
    pub fn apply<A: Clone>(&self, field: &Array2<A>, fill: A) -> Result<Array2<A>> {
        if field.dim() != self.cells.dim() {
            return Err(MaskError::ShapeMismatch {
                expected: self.cells.dim(),
                found: field.dim(),
            });
        }

        Ok(Zip::from(field)
            .and(&self.cells)
            .map_collect(|value, &inside| {
                if inside {
                    value.clone()
                } else {
                    fill.clone()
                }
            }))
    }
}
