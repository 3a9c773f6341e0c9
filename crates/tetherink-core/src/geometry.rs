//! Geometry helpers shared by attachment resolution and hit testing.

use crate::shapes::Shape;
use kurbo::{Point, Rect};

/// Closed-interval containment: points on the box edge count as inside.
pub fn contains_point(rect: Rect, x: f64, y: f64) -> bool {
    x >= rect.x0 && x <= rect.x1 && y >= rect.y0 && y <= rect.y1
}

/// The shape's rendered bounding box in scene coordinates.
pub fn bounding_box_of(shape: &Shape) -> Rect {
    shape.bounds()
}

/// The point an attached endpoint snaps to.
///
/// Rectangles use the center of their box; every other kind is already
/// positioned by its center.
pub fn anchor_of(shape: &Shape) -> Point {
    anchor_in_box(shape, bounding_box_of(shape))
}

/// Like [`anchor_of`], but with the bounding box supplied by the caller
/// (e.g. taken from render state instead of the stored model).
pub fn anchor_in_box(shape: &Shape, rect: Rect) -> Point {
    match shape {
        Shape::Rectangle(_) => rect.center(),
        Shape::Circle(c) => c.center,
        Shape::Star(s) => s.center,
        Shape::Triangle(t) => t.center,
    }
}

/// Distance from a point to a line segment (a→b).
pub fn point_to_segment_dist(point: Point, a: Point, b: Point) -> f64 {
    let seg = b - a;
    let pv = point - a;
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return pv.hypot();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    point.distance(a + seg * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Rectangle, Star, Triangle};

    fn square() -> Rect {
        Rect::new(100.0, 100.0, 200.0, 200.0)
    }

    #[test]
    fn test_contains_corner() {
        let rect = square();
        assert!(contains_point(rect, rect.x0, rect.y0));
        assert!(contains_point(rect, rect.x1, rect.y1));
    }

    #[test]
    fn test_contains_past_far_edge() {
        let rect = square();
        assert!(!contains_point(rect, rect.x0 + rect.width() + 1.0, rect.y0));
        assert!(!contains_point(rect, rect.x0, rect.y0 - 0.5));
    }

    #[test]
    fn test_rectangle_anchor_is_box_center() {
        let shape = Shape::Rectangle(Rectangle::new(Point::new(100.0, 100.0), 100.0, 100.0));
        assert_eq!(anchor_of(&shape), Point::new(150.0, 150.0));
    }

    #[test]
    fn test_round_anchors_are_position() {
        let circle = Shape::Circle(Circle::new(Point::new(300.0, 300.0), 50.0));
        let star = Shape::Star(Star::new(Point::new(10.0, 20.0), 20.0, 50.0));
        let tri = Shape::Triangle(Triangle::new(Point::new(-5.0, 7.0), 50.0));
        assert_eq!(anchor_of(&circle), Point::new(300.0, 300.0));
        assert_eq!(anchor_of(&star), Point::new(10.0, 20.0));
        assert_eq!(anchor_of(&tri), Point::new(-5.0, 7.0));
    }

    #[test]
    fn test_anchor_in_supplied_box() {
        let shape = Shape::Rectangle(Rectangle::new(Point::new(0.0, 0.0), 10.0, 10.0));
        let rendered = Rect::new(0.0, 0.0, 40.0, 20.0);
        assert_eq!(anchor_in_box(&shape, rendered), Point::new(20.0, 10.0));

        let circle = Shape::Circle(Circle::new(Point::new(5.0, 5.0), 5.0));
        assert_eq!(anchor_in_box(&circle, rendered), Point::new(5.0, 5.0));
    }

    #[test]
    fn test_point_to_segment_dist() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert!((point_to_segment_dist(Point::new(5.0, 3.0), a, b) - 3.0).abs() < 1e-12);
        assert!((point_to_segment_dist(Point::new(13.0, 4.0), a, b) - 5.0).abs() < 1e-12);
        // Degenerate segment falls back to point distance.
        assert!((point_to_segment_dist(Point::new(3.0, 4.0), a, a) - 5.0).abs() < 1e-12);
    }
}
