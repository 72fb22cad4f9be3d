//! # kd2d - Static k-d Tree Spatial Index
//!
//! A Rust library providing a simple k-d tree implementation for spatial
//! queries on 2D points.
//!
//! ## Features
//!
//! - **Balanced Median Splits**: Construction recursively partitions points
//!   at the median on alternating axes for `O(log n)` depth
//! - **Range Queries**: Retrieve every point inside an axis-aligned rectangle
//! - **All-Ties Nearest Neighbor**: Retrieve every point at minimum distance
//!   from a query point, not just one of them
//! - **Simple API**: Build once from a point collection, query repeatedly
//! - **Static Optimization**: Efficient for fixed or rarely-changing point sets
//!
//! ## Quick Start
//!
//! ```rust
//! use kd2d::prelude::*;
//!
//! // Create a new spatial index
//! let mut tree = KDTree::new();
//!
//! // Build it from a point collection (required before querying)
//! tree.insert(vec![
//!     Point::new(7.0, 2.0),
//!     Point::new(5.0, 4.0),
//!     Point::new(9.0, 6.0),
//!     Point::new(4.0, 7.0),
//!     Point::new(8.0, 1.0),
//!     Point::new(2.0, 3.0),
//! ]);
//!
//! // Query for points inside a rectangle
//! let rect = Rectangle::new(Point::new(0.0, 0.0), Point::new(6.0, 6.0));
//! let found = tree.range(&rect);
//! println!("Found {} points in range: {:?}", found.len(), found);
//! // Output: Found 2 points in range
//!
//! // Query for the nearest stored point(s)
//! let nearest = tree.nearest(Point::new(9.0, 1.0));
//! assert_eq!(nearest, vec![Point::new(8.0, 1.0)]);
//! ```
//!
//! ## How It Works
//!
//! The tree stores one point per node and alternates the splitting axis with
//! depth (x at the root, then y, then x, ...). Each node's point is the
//! median of its subtree on the current axis, so both queries can prune any
//! subtree whose side of the splitting line cannot contain an answer: range
//! queries compare the rectangle bounds against the split coordinate, and
//! nearest-neighbor queries skip the far side whenever the best distance
//! found so far does not reach across the splitting line.
//!
//! The index is static: `insert` rebuilds the whole tree from the supplied
//! collection, and there is no per-point insertion or deletion.

pub mod kdtree;
pub mod point;
pub mod prelude;

pub use kdtree::KDTree;
pub use point::{Point, Rectangle};
