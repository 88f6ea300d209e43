//! Unit tests mirroring the `src/` layout, plus regions shared between them


use geo::{Coord, LineString, Polygon};
use gridmask::io::error::predicate_error;
use gridmask::{Bounds, Region, Result};
use std::f64::consts::TAU;

/// Analytic closed disk: samples exactly on the circle count as inside
pub struct ClosedDisk {
    /// Centre x
    pub cx: f64,
    /// Centre y
    pub cy: f64,
    /// Radius
    pub radius: f64,
}

impl ClosedDisk {
    /// Radius one, centred on the origin
    pub const fn unit() -> Self {
        Self {
            cx: 0.0,
            cy: 0.0,
            radius: 1.0,
        }
    }
}

impl Region<f64> for ClosedDisk {
    fn intersects(&self, bounds: &Bounds<f64>) -> Result<bool> {
        let nearest_x = self.cx.clamp(bounds.min_x, bounds.max_x);
        let nearest_y = self.cy.clamp(bounds.min_y, bounds.max_y);
        Ok((nearest_x - self.cx).hypot(nearest_y - self.cy) <= self.radius)
    }

    fn contains(&self, bounds: &Bounds<f64>) -> Result<bool> {
        let far_x = (bounds.min_x - self.cx)
            .abs()
            .max((bounds.max_x - self.cx).abs());
        let far_y = (bounds.min_y - self.cy)
            .abs()
            .max((bounds.max_y - self.cy).abs());
        Ok(far_x.hypot(far_y) <= self.radius)
    }

    fn contains_point(&self, x: f64, y: f64) -> Result<bool> {
        Ok((x - self.cx).hypot(y - self.cy) <= self.radius)
    }
}

/// Region whose predicates always fail
pub struct BrokenRegion;

impl Region<f64> for BrokenRegion {
    fn intersects(&self, _bounds: &Bounds<f64>) -> Result<bool> {
        Err(predicate_error("intersects", &"self-intersecting ring"))
    }

    fn contains(&self, _bounds: &Bounds<f64>) -> Result<bool> {
        Err(predicate_error("contains", &"self-intersecting ring"))
    }

    fn contains_point(&self, _x: f64, _y: f64) -> Result<bool> {
        Err(predicate_error("contains_point", &"self-intersecting ring"))
    }
}

/// Axis-aligned square polygon
pub fn square(min: f64, max: f64) -> Polygon<f64> {
    Polygon::new(
        LineString::from(vec![(min, min), (max, min), (max, max), (min, max)]),
        Vec::new(),
    )
}

/// Regular polygon approximating a circle, first vertex on the positive x axis
pub fn disk_polygon(cx: f64, cy: f64, radius: f64, vertices: u32) -> Polygon<f64> {
    let ring: Vec<Coord<f64>> = (0..vertices)
        .map(|k| {
            let angle = TAU * f64::from(k) / f64::from(vertices);
            Coord {
                x: radius.mul_add(angle.cos(), cx),
                y: radius.mul_add(angle.sin(), cy),
            }
        })
        .collect();
    Polygon::new(LineString::from(ring), Vec::new())
}

/// Undissolved province parts: two squares sharing the edge x = 2 and an L-shape
/// overlapping the left one
pub fn overlapping_parts() -> Vec<Polygon<f64>> {
    vec![
        square(0.0, 2.0),
        Polygon::new(
            LineString::from(vec![(2.0, 0.0), (4.0, 0.0), (4.0, 2.0), (2.0, 2.0)]),
            Vec::new(),
        ),
        Polygon::new(
            LineString::from(vec![
                (0.0, 0.0),
                (3.0, 0.0),
                (3.0, 1.0),
                (1.0, 1.0),
                (1.0, 3.0),
                (0.0, 3.0),
            ]),
            Vec::new(),
        ),
    ]
}
