//! Static k-d tree over 2D points.
//!
//! The tree is built once from a full point collection by recursive median
//! partitioning and is immutable between rebuilds. Queries are pure
//! traversals; the only mutation is [`KDTree::insert`], which replaces the
//! whole tree.

use crate::point::{Point, Rectangle};

/// Tree node: one stored point plus two optional subtrees.
///
/// At depth `d` (root = 0) the discriminator axis is `d % 2`. Every point in
/// the left subtree is less-than-or-equal to the node's point on that axis;
/// the node's own point appears in neither child.
#[derive(Clone, Debug)]
struct Node {
    location: Point,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

/// Static k-d tree spatial index over 2D points.
///
/// Supports axis-aligned [range](KDTree::range) queries and all-ties
/// [nearest-neighbor](KDTree::nearest) queries. The point set is fixed at
/// build time: [`insert`](KDTree::insert) rebuilds the tree from scratch,
/// there is no incremental insertion or deletion.
///
/// Concurrent read-only queries on an unchanging tree are safe; interleaving
/// a rebuild with queries on the same instance needs external
/// synchronization.
#[derive(Clone, Debug, Default)]
pub struct KDTree {
    root: Option<Box<Node>>,
    count: usize,
}

impl KDTree {
    /// Creates a new empty tree.
    pub fn new() -> Self {
        KDTree { root: None, count: 0 }
    }

    /// Builds the tree from a point collection, replacing any prior content.
    ///
    /// This is a full rebuild, not an incremental add: points from earlier
    /// calls are discarded. Duplicate points are stored per occurrence.
    ///
    /// Construction recursively splits on alternating axes (x at even
    /// depths, y at odd): the points are sorted on the current axis, the
    /// median becomes the node and the halves before and after it become the
    /// children. For `n` points the tree has depth `O(log n)`.
    pub fn insert(&mut self, mut points: Vec<Point>) {
        self.count = points.len();
        self.root = build(&mut points, 0);
    }

    /// Returns the number of stored points.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns whether the tree holds no points.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Queries for all stored points contained in the rectangle.
    ///
    /// Returns exactly the stored points the rectangle contains (bounds
    /// inclusive), in unspecified traversal order. An empty tree or a
    /// degenerate rectangle yields an empty vector.
    ///
    /// # Examples
    /// ```
    /// use kd2d::{KDTree, Point, Rectangle};
    ///
    /// let mut tree = KDTree::new();
    /// tree.insert(vec![
    ///     Point::new(7.0, 2.0),
    ///     Point::new(5.0, 4.0),
    ///     Point::new(9.0, 6.0),
    ///     Point::new(4.0, 7.0),
    ///     Point::new(8.0, 1.0),
    ///     Point::new(2.0, 3.0),
    /// ]);
    ///
    /// let rect = Rectangle::new(Point::new(0.0, 0.0), Point::new(6.0, 6.0));
    /// let mut found = tree.range(&rect);
    /// found.sort_by(Point::total_cmp);
    /// assert_eq!(found, vec![Point::new(2.0, 3.0), Point::new(5.0, 4.0)]);
    /// ```
    pub fn range(&self, rectangle: &Rectangle) -> Vec<Point> {
        let mut result = Vec::new();
        range_search(self.root.as_deref(), rectangle, 0, &mut result);
        result
    }

    /// Queries for all stored points at minimum Euclidean distance from `p`.
    ///
    /// Every point tied for the minimum distance is returned, in unspecified
    /// order. An empty tree yields an empty vector.
    ///
    /// Ties are detected by exact `f64` equality, which is reliable for
    /// inputs whose distances are exactly representable (integer or lattice
    /// coordinates); real-valued inputs with rounding noise may split a tie.
    ///
    /// # Examples
    /// ```
    /// use kd2d::{KDTree, Point};
    ///
    /// let mut tree = KDTree::new();
    /// tree.insert(vec![
    ///     Point::new(0.0, 0.0),
    ///     Point::new(4.0, 0.0),
    ///     Point::new(0.0, 4.0),
    ///     Point::new(4.0, 4.0),
    /// ]);
    ///
    /// assert_eq!(tree.nearest(Point::new(1.0, 1.0)), vec![Point::new(0.0, 0.0)]);
    /// // Equidistant points all come back.
    /// assert_eq!(tree.nearest(Point::new(2.0, 2.0)).len(), 4);
    /// ```
    pub fn nearest(&self, p: Point) -> Vec<Point> {
        let mut best = Best { points: Vec::new(), distance: f64::INFINITY };
        nearest_search(self.root.as_deref(), p, 0, &mut best);
        best.points
    }
}

// --- Construction and traversal ---

/// Recursive median-split build over a mutable point slice.
///
/// The sort is stable, so points with equal coordinates on the split axis
/// keep their relative order. That tie-break is an implementation artifact,
/// not part of the query contract.
fn build(points: &mut [Point], depth: usize) -> Option<Box<Node>> {
    match points.len() {
        0 => None,
        1 => Some(Box::new(Node { location: points[0], left: None, right: None })),
        len => {
            let axis = depth % 2;
            points.sort_by(|a, b| a.coord(axis).total_cmp(&b.coord(axis)));
            let median = len / 2;
            let location = points[median];
            let (below, above) = points.split_at_mut(median);
            Some(Box::new(Node {
                location,
                left: build(below, depth + 1),
                right: build(&mut above[1..], depth + 1),
            }))
        }
    }
}

fn range_search(node: Option<&Node>, rectangle: &Rectangle, depth: usize, result: &mut Vec<Point>) {
    let Some(node) = node else {
        return;
    };
    if rectangle.contains(node.location) {
        result.push(node.location);
    }
    let axis = depth % 2;
    // The left subtree only holds points at or below the split coordinate,
    // the right only points at or above it.
    if rectangle.lower.coord(axis) <= node.location.coord(axis) {
        range_search(node.left.as_deref(), rectangle, depth + 1, result);
    }
    if rectangle.upper.coord(axis) >= node.location.coord(axis) {
        range_search(node.right.as_deref(), rectangle, depth + 1, result);
    }
}

/// Current minimum-distance candidate set. `distance` is `INFINITY` until
/// the first node is visited and only ever shrinks.
struct Best {
    points: Vec<Point>,
    distance: f64,
}

fn nearest_search(node: Option<&Node>, p: Point, depth: usize, best: &mut Best) {
    let Some(node) = node else {
        return;
    };
    let d = p.distance(node.location);
    if d < best.distance {
        best.points.clear();
        best.points.push(node.location);
        best.distance = d;
    } else if d == best.distance {
        best.points.push(node.location);
    }
    let axis = depth % 2;
    // Descend the near side first, then the far side only if the sphere of
    // radius `best.distance` around the query crosses the splitting line.
    // The bound is re-read after the near descent, so it reflects any closer
    // candidate found there.
    if p.coord(axis) < node.location.coord(axis) {
        nearest_search(node.left.as_deref(), p, depth + 1, best);
        if p.coord(axis) + best.distance >= node.location.coord(axis) {
            nearest_search(node.right.as_deref(), p, depth + 1, best);
        }
    } else {
        nearest_search(node.right.as_deref(), p, depth + 1, best);
        if p.coord(axis) - best.distance <= node.location.coord(axis) {
            nearest_search(node.left.as_deref(), p, depth + 1, best);
        }
    }
}
