//! Geometric value types: [`Point`] and [`Rectangle`].

use std::cmp::Ordering;

/// A 2D point with `f64` coordinates.
///
/// Plain value type: two points with equal coordinates are interchangeable.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Returns the coordinate on the given axis (0 = x, 1 = y).
    #[inline]
    pub fn coord(self, axis: usize) -> f64 {
        if axis == 0 { self.x } else { self.y }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Total lexicographic ordering by (x, y), using [`f64::total_cmp`].
    ///
    /// Query results come back in traversal order; sort with this comparator
    /// when a canonical order is needed, e.g. for set comparison in tests.
    #[inline]
    pub fn total_cmp(&self, other: &Point) -> Ordering {
        self.x.total_cmp(&other.x).then(self.y.total_cmp(&other.y))
    }
}

/// An axis-aligned rectangle defined by two corner points.
///
/// Callers are expected to supply `lower.x <= upper.x` and
/// `lower.y <= upper.y`. The bounds are not validated: a rectangle with an
/// inverted axis is degenerate and [`contains`](Rectangle::contains) simply
/// returns `false` for every point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    /// Lower-left corner (inclusive)
    pub lower: Point,
    /// Upper-right corner (inclusive)
    pub upper: Point,
}

impl Rectangle {
    /// Creates a rectangle from its lower-left and upper-right corners.
    pub fn new(lower: Point, upper: Point) -> Self {
        Rectangle { lower, upper }
    }

    /// Returns whether the point lies inside the rectangle.
    ///
    /// Containment is inclusive on both axes and both bounds.
    ///
    /// # Examples
    /// ```
    /// use kd2d::{Point, Rectangle};
    ///
    /// let rect = Rectangle::new(Point::new(0.0, 0.0), Point::new(2.0, 2.0));
    /// assert!(rect.contains(Point::new(1.0, 1.0)));
    /// assert!(rect.contains(Point::new(2.0, 0.0)));
    /// assert!(!rect.contains(Point::new(2.1, 1.0)));
    /// ```
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.lower.x <= p.x && p.x <= self.upper.x && self.lower.y <= p.y && p.y <= self.upper.y
    }
}
