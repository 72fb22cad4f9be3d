//! Find all points inside an axis-aligned rectangle.
use kd2d::prelude::*;

fn main() {
    let mut tree = KDTree::new();
    tree.insert(vec![
        Point::new(7.0, 2.0),
        Point::new(5.0, 4.0),
        Point::new(9.0, 6.0),
        Point::new(4.0, 7.0),
        Point::new(8.0, 1.0),
        Point::new(2.0, 3.0),
    ]);

    let rect = Rectangle::new(Point::new(0.0, 0.0), Point::new(6.0, 6.0));
    let found = tree.range(&rect);
    println!("Points in {rect:?}: {found:?}");
}
