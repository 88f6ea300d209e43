//! Per-sample masking
//!
//! One containment test per grid sample. This is the reference the subdivision
//! masker must agree with, and the path used for bare outline rings.

use geo::{Coord, GeoFloat, LineString, Polygon};
use ndarray::Array2;

use crate::io::error::{MaskError, Result, computation_error};
use crate::spatial::grid::Grid;
use crate::spatial::mask::Mask;
use crate::spatial::region::Region;

/// Mask `grid` by testing every sample with `contains_point`
///
/// # Errors
///
/// Propagates any error raised by the region predicate
pub fn mask_pointwise<T, R>(region: &R, grid: &Grid<T>) -> Result<Mask>
where
    T: GeoFloat,
    R: Region<T> + ?Sized,
{
    let mut cells = Array2::from_elem((grid.height(), grid.width()), false);

    for ((j, i), cell) in cells.indexed_iter_mut() {
        let (x, y) = grid
            .point(i, j)
            .ok_or_else(|| computation_error("pointwise", &format!("sample ({i}, {j})")))?;
        *cell = region.contains_point(x, y)?;
    }

    Ok(Mask::from_array(cells))
}

/// Mask `grid` against the area enclosed by a single outline ring
///
/// The ring is closed if its last vertex differs from the first.
///
/// # Errors
///
/// Returns `InvalidOutline` if the ring has fewer than three distinct vertices
pub fn mask_from_outline<T: GeoFloat>(outline: &[Coord<T>], grid: &Grid<T>) -> Result<Mask> {
    let vertices = distinct_vertices(outline, MIN_OUTLINE_VERTICES);
    if vertices < MIN_OUTLINE_VERTICES {
        return Err(MaskError::InvalidOutline { vertices });
    }

    let mut ring = LineString::from(outline.to_vec());
    ring.close();
    let polygon = Polygon::new(ring, Vec::new());
    mask_pointwise(&polygon, grid)
}

const MIN_OUTLINE_VERTICES: usize = 3;

// Counts distinct vertices, stopping at `limit`
fn distinct_vertices<T: GeoFloat>(outline: &[Coord<T>], limit: usize) -> usize {
    let mut seen: Vec<Coord<T>> = Vec::with_capacity(limit);
    for vertex in outline {
        if !seen.contains(vertex) {
            seen.push(*vertex);
            if seen.len() == limit {
                break;
            }
        }
    }
    seen.len()
}
