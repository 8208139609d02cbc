//! Fixed-grid and ring layouts - index/angle to coordinate arithmetic.
//!
//! These helpers produce *preferred* coordinates only. Feed the result to
//! [`LayoutEngine::place`](super::LayoutEngine::place) to get the committed,
//! collision-free position; the grid itself performs no overlap checks.

use crate::geometry::Point;

/// Row-major grid of preferred positions.
///
/// # Example
/// ```
/// use board_mvp::layout::grid::GridLayout;
/// use board_mvp::geometry::Point;
///
/// let grid = GridLayout::new(Point::new(100.0, 100.0), 4);
/// assert_eq!(grid.position(0), Point::new(100.0, 100.0));
/// assert_eq!(grid.position(5), Point::new(280.0, 280.0));
/// ```
#[derive(Debug, Clone)]
pub struct GridLayout {
    pub origin: Point,
    pub cols: usize,
    pub spacing_x: f64,
    pub spacing_y: f64,
}

impl GridLayout {
    /// Grid with the default 180-unit spacing on both axes.
    pub fn new(origin: Point, cols: usize) -> Self {
        Self {
            origin,
            cols: cols.max(1),
            spacing_x: 180.0,
            spacing_y: 180.0,
        }
    }

    pub fn with_spacing(mut self, spacing_x: f64, spacing_y: f64) -> Self {
        self.spacing_x = spacing_x;
        self.spacing_y = spacing_y;
        self
    }

    /// Preferred position for the `index`-th cell, filling rows first.
    pub fn position(&self, index: usize) -> Point {
        let row = index / self.cols;
        let col = index % self.cols;
        self.origin.offset(
            col as f64 * self.spacing_x,
            row as f64 * self.spacing_y,
        )
    }

    pub fn positions(&self, count: usize) -> Vec<Point> {
        (0..count).map(|index| self.position(index)).collect()
    }
}

/// Preferred positions evenly spaced on a circle, first item at the top,
/// proceeding clockwise (the plane's `y` axis points down).
pub fn ring_positions(count: usize, center: Point, radius: f64) -> Vec<Point> {
    if count == 0 {
        return Vec::new();
    }

    let angle_step = std::f64::consts::TAU / count as f64;
    (0..count)
        .map(|i| {
            let angle = i as f64 * angle_step - std::f64::consts::FRAC_PI_2;
            center.offset(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}
