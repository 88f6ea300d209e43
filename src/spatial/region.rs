//! Planar regions the masker can query
//!
//! The masker only needs three predicates. Polygon geometry itself is delegated to
//! the `geo` crate; this module adapts its polygon types to the `Region` contract.

use geo::{Contains, GeoFloat, Intersects, MultiPolygon, Point, Polygon, Relate};

use crate::io::error::{Result, predicate_error};
use crate::spatial::bounds::{Bounds, Probe};

/// DE-9IM pattern for "every point of the probe lies in the region's interior"
///
/// Rows are the region's interior, boundary and exterior; columns the probe's.
const INTERIOR_CONTAINMENT: &str = "T**FF*FF*";

/// A closed planar shape queried by the masker
///
/// Implementations must be consistent with `contains_point`:
/// if `intersects(b)` is false no sample inside `b` may be contained, and if
/// `contains(b)` is true every sample inside `b` must be contained.
pub trait Region<T: GeoFloat> {
    /// Whether the region touches the (closed) bounds at all
    ///
    /// # Errors
    ///
    /// Returns `RegionPredicate` if the geometry cannot be evaluated
    fn intersects(&self, bounds: &Bounds<T>) -> Result<bool>;

    /// Whether every point of the bounds lies inside the region
    ///
    /// # Errors
    ///
    /// Returns `RegionPredicate` if the geometry cannot be evaluated
    fn contains(&self, bounds: &Bounds<T>) -> Result<bool>;

    /// Whether a single coordinate lies inside the region
    ///
    /// # Errors
    ///
    /// Returns `RegionPredicate` if the geometry cannot be evaluated
    fn contains_point(&self, x: T, y: T) -> Result<bool>;
}

// Polygon boundaries are not part of the interior: a sample exactly on an edge or
// vertex is outside, matching `Contains<Point>`.
impl<T: GeoFloat> Region<T> for Polygon<T> {
    fn intersects(&self, bounds: &Bounds<T>) -> Result<bool> {
        Ok(match bounds.probe() {
            Probe::Point(point) => Intersects::intersects(self, &point),
            Probe::Line(line) => Intersects::intersects(self, &line),
            Probe::Polygon(rect) => Intersects::intersects(self, &rect),
        })
    }

    fn contains(&self, bounds: &Bounds<T>) -> Result<bool> {
        let matrix = match bounds.probe() {
            Probe::Point(point) => self.relate(&point),
            Probe::Line(line) => self.relate(&line),
            Probe::Polygon(rect) => self.relate(&rect),
        };
        matrix
            .matches(INTERIOR_CONTAINMENT)
            .map_err(|e| predicate_error("contains", &format!("{e:?}")))
    }

    fn contains_point(&self, x: T, y: T) -> Result<bool> {
        Ok(Contains::contains(self, &Point::new(x, y)))
    }
}

/// Each part is queried on its own, so a sample is inside when it lies in the
/// interior of at least one part.
///
/// Parts sharing an edge keep that edge as boundary and samples on it stay
/// outside. Dissolve adjacent parts first (`io::boundary::dissolve`) to mask
/// them as one area.
impl<T: GeoFloat> Region<T> for MultiPolygon<T> {
    fn intersects(&self, bounds: &Bounds<T>) -> Result<bool> {
        any_part(self, |part| Region::intersects(part, bounds))
    }

    fn contains(&self, bounds: &Bounds<T>) -> Result<bool> {
        any_part(self, |part| Region::contains(part, bounds))
    }

    fn contains_point(&self, x: T, y: T) -> Result<bool> {
        any_part(self, |part| Region::contains_point(part, x, y))
    }
}

fn any_part<T, F>(parts: &MultiPolygon<T>, mut test: F) -> Result<bool>
where
    T: GeoFloat,
    F: FnMut(&Polygon<T>) -> Result<bool>,
{
    for part in parts {
        if test(part)? {
            return Ok(true);
        }
    }
    Ok(false)
}

impl<T: GeoFloat, R: Region<T> + ?Sized> Region<T> for &R {
    fn intersects(&self, bounds: &Bounds<T>) -> Result<bool> {
        (**self).intersects(bounds)
    }

    fn contains(&self, bounds: &Bounds<T>) -> Result<bool> {
        (**self).contains(bounds)
    }

    fn contains_point(&self, x: T, y: T) -> Result<bool> {
        (**self).contains_point(x, y)
    }
}
