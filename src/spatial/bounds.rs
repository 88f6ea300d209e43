//! Axis-aligned bounds of sub-grids
//!
//! The masker asks the region about the rectangle spanned by a block of samples.
//! How far that rectangle reaches past the outermost samples is the margin policy.

use std::ops::Range;

use geo::{GeoFloat, Line, Point, Polygon, Rect, coord};

use crate::spatial::grid::Grid;

/// How far sub-grid bounds extend past their extreme samples
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoundsMargin {
    /// Bounds sit exactly on the extreme samples
    #[default]
    Exact,
    /// Bounds extend half the local sample spacing on each side
    HalfCell,
}

/// Axis-aligned rectangle, possibly degenerate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T = f64> {
    /// Minimum x
    pub min_x: T,
    /// Maximum x
    pub max_x: T,
    /// Minimum y
    pub min_y: T,
    /// Maximum y
    pub max_y: T,
}

/// Geometry handed to region predicates for a given `Bounds`
///
/// Collapsed rectangles are presented as the lower-dimensional shape they are,
/// since polygon predicates are undefined on zero-area rings.
#[derive(Debug, Clone, PartialEq)]
pub enum Probe<T: GeoFloat> {
    /// Zero width and zero height
    Point(Point<T>),
    /// Zero width or zero height
    Line(Line<T>),
    /// Proper rectangle
    Polygon(Polygon<T>),
}

impl<T: GeoFloat> Bounds<T> {
    /// Bounds enclosing a single coordinate
    pub const fn from_point(x: T, y: T) -> Self {
        Self {
            min_x: x,
            max_x: x,
            min_y: y,
            max_y: y,
        }
    }

    /// Whether `(x, y)` lies within the closed bounds
    pub fn contains(&self, x: T, y: T) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Horizontal extent
    pub fn width(&self) -> T {
        self.max_x - self.min_x
    }

    /// Vertical extent
    pub fn height(&self) -> T {
        self.max_y - self.min_y
    }

    /// Geometry matching the dimensionality of these bounds
    pub fn probe(&self) -> Probe<T> {
        let min = coord! { x: self.min_x, y: self.min_y };
        let max = coord! { x: self.max_x, y: self.max_y };
        let flat_x = self.width() <= T::zero();
        let flat_y = self.height() <= T::zero();

        match (flat_x, flat_y) {
            (true, true) => Probe::Point(Point::from(min)),
            (true, false) | (false, true) => Probe::Line(Line::new(min, max)),
            (false, false) => Probe::Polygon(Rect::new(min, max).to_polygon()),
        }
    }
}

/// Per-sample lower and upper cell edges along one axis
#[derive(Debug, Clone)]
struct AxisEdges<T> {
    lower: Vec<T>,
    upper: Vec<T>,
}

impl<T: GeoFloat> AxisEdges<T> {
    fn new(values: &[T], margin: BoundsMargin) -> Self {
        match margin {
            BoundsMargin::Exact => Self {
                lower: values.to_vec(),
                upper: values.to_vec(),
            },
            BoundsMargin::HalfCell => {
                let half = T::one() / (T::one() + T::one());
                let gaps: Vec<T> = values
                    .iter()
                    .zip(values.iter().skip(1))
                    .map(|(a, b)| *b - *a)
                    .collect();
                let first_gap = gaps.first().copied().unwrap_or_else(T::zero);
                let last_gap = gaps.last().copied().unwrap_or_else(T::zero);

                let lower = values
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| {
                        let gap = i
                            .checked_sub(1)
                            .and_then(|prev| gaps.get(prev).copied())
                            .unwrap_or(first_gap);
                        v - gap * half
                    })
                    .collect();
                let upper = values
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| v + gaps.get(i).copied().unwrap_or(last_gap) * half)
                    .collect();

                Self { lower, upper }
            }
        }
    }

    fn span(&self, range: &Range<usize>) -> Option<(T, T)> {
        let last = range.end.checked_sub(1)?;
        if range.start > last {
            return None;
        }
        Some((*self.lower.get(range.start)?, *self.upper.get(last)?))
    }
}

/// Precomputed cell edges for a grid under a margin policy
#[derive(Debug, Clone)]
pub struct CellBounds<T = f64> {
    x: AxisEdges<T>,
    y: AxisEdges<T>,
}

impl<T: GeoFloat> CellBounds<T> {
    /// Compute edges for every sample of `grid`
    pub fn new(grid: &Grid<T>, margin: BoundsMargin) -> Self {
        Self {
            x: AxisEdges::new(grid.xs(), margin),
            y: AxisEdges::new(grid.ys(), margin),
        }
    }

    /// Bounds of the block of samples `cols x rows`
    ///
    /// Returns `None` for empty or out-of-range index ranges.
    pub fn bounds(&self, cols: &Range<usize>, rows: &Range<usize>) -> Option<Bounds<T>> {
        let (min_x, max_x) = self.x.span(cols)?;
        let (min_y, max_y) = self.y.span(rows)?;
        Some(Bounds {
            min_x,
            max_x,
            min_y,
            max_y,
        })
    }
}
