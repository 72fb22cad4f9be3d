//! Find the stored point(s) closest to a query point.
use kd2d::prelude::*;

fn main() {
    let mut tree = KDTree::new();
    tree.insert(vec![
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(0.0, 4.0),
        Point::new(4.0, 4.0),
    ]);

    // A unique nearest neighbor
    println!("Nearest to (1, 1): {:?}", tree.nearest(Point::new(1.0, 1.0)));

    // Four points tie at distance sqrt(8); all of them come back
    println!("Nearest to (2, 2): {:?}", tree.nearest(Point::new(2.0, 2.0)));
}
