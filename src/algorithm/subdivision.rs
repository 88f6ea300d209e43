//! Recursive subdivision masking
//!
//! The bounds of a block of samples are tested against the region. Blocks the
//! region misses or fully covers are filled in one step; blocks the boundary passes
//! through are split and retried, down to single samples.
//!
//! The top-level call owns the whole mask matrix. Recursive calls receive disjoint
//! mutable views split off it together with the index window they cover.

use std::ops::Range;

use geo::GeoFloat;
use ndarray::{Array2, ArrayViewMut2, Axis};
use tracing::debug;

use crate::io::error::{Result, computation_error};
use crate::spatial::bounds::{BoundsMargin, CellBounds};
use crate::spatial::grid::Grid;
use crate::spatial::mask::Mask;
use crate::spatial::region::Region;

/// How a straddling block is divided
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SplitStrategy {
    /// Halve the longer dimension (columns on ties)
    #[default]
    Longest,
    /// Halve both dimensions at once when both have more than one sample
    Quadrants,
}

/// Tuning knobs for a mask run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaskOptions {
    /// Bounds margin policy
    pub margin: BoundsMargin,
    /// Block splitting policy
    pub split: SplitStrategy,
}

/// Predicate call counts for a single mask run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalStats {
    /// Calls to `Region::intersects`
    pub intersects_calls: usize,
    /// Calls to `Region::contains`
    pub contains_calls: usize,
    /// Calls to `Region::contains_point`
    pub point_tests: usize,
    /// Blocks decided without further splitting by a bounds test
    pub uniform_fills: usize,
    /// Deepest recursion level reached (0 = whole grid)
    pub max_depth: usize,
}

impl TraversalStats {
    /// Total predicate evaluations
    pub const fn predicate_calls(&self) -> usize {
        self.intersects_calls + self.contains_calls + self.point_tests
    }
}

/// Index window of a block: columns index xs, rows index ys
#[derive(Debug, Clone)]
struct Window {
    cols: Range<usize>,
    rows: Range<usize>,
}

impl Window {
    fn width(&self) -> usize {
        self.cols.len()
    }

    fn height(&self) -> usize {
        self.rows.len()
    }

    fn split_cols(&self, mid: usize) -> (Self, Self) {
        let at = self.cols.start + mid;
        (
            Self {
                cols: self.cols.start..at,
                rows: self.rows.clone(),
            },
            Self {
                cols: at..self.cols.end,
                rows: self.rows.clone(),
            },
        )
    }

    fn split_rows(&self, mid: usize) -> (Self, Self) {
        let at = self.rows.start + mid;
        (
            Self {
                cols: self.cols.clone(),
                rows: self.rows.start..at,
            },
            Self {
                cols: self.cols.clone(),
                rows: at..self.rows.end,
            },
        )
    }
}

/// Split decision for a block of `width x height` samples (both not 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Split {
    Columns(usize),
    Rows(usize),
    Both { cols: usize, rows: usize },
}

impl SplitStrategy {
    const fn plan(self, width: usize, height: usize) -> Split {
        match self {
            Self::Longest => {
                if width >= height {
                    Split::Columns(width / 2)
                } else {
                    Split::Rows(height / 2)
                }
            }
            Self::Quadrants => {
                if width > 1 && height > 1 {
                    Split::Both {
                        cols: width / 2,
                        rows: height / 2,
                    }
                } else if width > 1 {
                    Split::Columns(width / 2)
                } else {
                    Split::Rows(height / 2)
                }
            }
        }
    }
}

/// Computes masks of one grid against one region
pub struct GridMasker<'a, T, R: ?Sized> {
    region: &'a R,
    grid: &'a Grid<T>,
    options: MaskOptions,
}

impl<'a, T, R> GridMasker<'a, T, R>
where
    T: GeoFloat,
    R: Region<T> + ?Sized,
{
    /// Create a masker with default options
    pub fn new(region: &'a R, grid: &'a Grid<T>) -> Self {
        Self {
            region,
            grid,
            options: MaskOptions::default(),
        }
    }

    /// Replace the options
    #[must_use]
    pub fn with_options(mut self, options: MaskOptions) -> Self {
        self.options = options;
        self
    }

    /// Compute the mask
    ///
    /// # Errors
    ///
    /// Propagates any error raised by the region predicates
    pub fn run(&self) -> Result<Mask> {
        self.run_with_stats().map(|(mask, _)| mask)
    }

    /// Compute the mask and report how many predicate calls it took
    ///
    /// # Errors
    ///
    /// Propagates any error raised by the region predicates
    pub fn run_with_stats(&self) -> Result<(Mask, TraversalStats)> {
        let mut cells = Array2::from_elem((self.grid.height(), self.grid.width()), false);
        let mut traversal = Traversal {
            region: self.region,
            grid: self.grid,
            cells: CellBounds::new(self.grid, self.options.margin),
            split: self.options.split,
            stats: TraversalStats::default(),
        };

        let window = Window {
            cols: 0..self.grid.width(),
            rows: 0..self.grid.height(),
        };
        traversal.fill(&window, cells.view_mut(), 0)?;

        let stats = traversal.stats;
        debug!(
            width = self.grid.width(),
            height = self.grid.height(),
            intersects = stats.intersects_calls,
            contains = stats.contains_calls,
            points = stats.point_tests,
            uniform = stats.uniform_fills,
            depth = stats.max_depth,
            "mask computed"
        );

        Ok((Mask::from_array(cells), stats))
    }
}

/// Mask `grid` against `region` with default options
///
/// # Errors
///
/// Propagates any error raised by the region predicates
pub fn mask_region<T, R>(region: &R, grid: &Grid<T>) -> Result<Mask>
where
    T: GeoFloat,
    R: Region<T> + ?Sized,
{
    GridMasker::new(region, grid).run()
}

struct Traversal<'a, T, R: ?Sized> {
    region: &'a R,
    grid: &'a Grid<T>,
    cells: CellBounds<T>,
    split: SplitStrategy,
    stats: TraversalStats,
}

impl<T, R> Traversal<'_, T, R>
where
    T: GeoFloat,
    R: Region<T> + ?Sized,
{
    fn fill(
        &mut self,
        window: &Window,
        mut view: ArrayViewMut2<'_, bool>,
        depth: usize,
    ) -> Result<()> {
        self.stats.max_depth = self.stats.max_depth.max(depth);

        let bounds = self
            .cells
            .bounds(&window.cols, &window.rows)
            .ok_or_else(|| computation_error("subdivision", &format!("empty window {window:?}")))?;

        self.stats.intersects_calls += 1;
        if !self.region.intersects(&bounds)? {
            self.stats.uniform_fills += 1;
            view.fill(false);
            return Ok(());
        }

        self.stats.contains_calls += 1;
        if self.region.contains(&bounds)? {
            self.stats.uniform_fills += 1;
            view.fill(true);
            return Ok(());
        }

        let (width, height) = (window.width(), window.height());
        if width == 1 && height == 1 {
            let (x, y) = self
                .grid
                .point(window.cols.start, window.rows.start)
                .ok_or_else(|| {
                    computation_error("subdivision", &format!("sample outside grid {window:?}"))
                })?;
            self.stats.point_tests += 1;
            view.fill(self.region.contains_point(x, y)?);
            return Ok(());
        }

        match self.split.plan(width, height) {
            Split::Columns(mid) => {
                let (left, right) = window.split_cols(mid);
                let (left_view, right_view) = view.split_at(Axis(1), mid);
                self.fill(&left, left_view, depth + 1)?;
                self.fill(&right, right_view, depth + 1)
            }
            Split::Rows(mid) => {
                let (lower, upper) = window.split_rows(mid);
                let (lower_view, upper_view) = view.split_at(Axis(0), mid);
                self.fill(&lower, lower_view, depth + 1)?;
                self.fill(&upper, upper_view, depth + 1)
            }
            Split::Both { cols, rows } => {
                let (lower, upper) = window.split_rows(rows);
                let (lower_view, upper_view) = view.split_at(Axis(0), rows);
                let (lower_left, lower_right) = lower.split_cols(cols);
                let (upper_left, upper_right) = upper.split_cols(cols);
                let (lower_left_view, lower_right_view) = lower_view.split_at(Axis(1), cols);
                let (upper_left_view, upper_right_view) = upper_view.split_at(Axis(1), cols);
                self.fill(&lower_left, lower_left_view, depth + 1)?;
                self.fill(&lower_right, lower_right_view, depth + 1)?;
                self.fill(&upper_left, upper_left_view, depth + 1)?;
                self.fill(&upper_right, upper_right_view, depth + 1)
            }
        }
    }
}
