//! Circle shape.

use super::{ShapeColor, ShapeId, ShapeTrait};
use kurbo::{BezPath, Circle as KurboCircle, Point, Rect, Shape as KurboShape};
use uuid::Uuid;

/// A circle positioned by its center.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub(crate) id: ShapeId,
    /// Center point.
    pub center: Point,
    /// Radius.
    pub radius: f64,
    /// Fill color.
    pub fill: ShapeColor,
    pub(crate) is_dragging: bool,
}

impl Circle {
    /// Create a new circle.
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            center,
            radius,
            fill: ShapeColor::green(),
            is_dragging: false,
        }
    }

    /// Get as a kurbo Circle.
    pub fn as_kurbo(&self) -> KurboCircle {
        KurboCircle::new(self.center, self.radius.abs())
    }
}

impl ShapeTrait for Circle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn position(&self) -> Point {
        self.center
    }

    fn set_position(&mut self, position: Point) {
        self.center = position;
    }

    fn bounds(&self) -> Rect {
        let r = self.radius.abs();
        Rect::new(
            self.center.x - r,
            self.center.y - r,
            self.center.x + r,
            self.center.y + r,
        )
    }

    fn to_path(&self) -> BezPath {
        self.as_kurbo().to_path(0.1)
    }

    fn fill(&self) -> ShapeColor {
        self.fill
    }

    fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    fn set_dragging(&mut self, dragging: bool) {
        self.is_dragging = dragging;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_creation() {
        let circle = Circle::new(Point::new(50.0, 50.0), 30.0);
        assert!((circle.center.x - 50.0).abs() < f64::EPSILON);
        assert!((circle.radius - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bounds() {
        let circle = Circle::new(Point::new(300.0, 300.0), 50.0);
        let bounds = circle.bounds();
        assert!((bounds.x0 - 250.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 250.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 350.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 350.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_position_is_center() {
        let circle = Circle::new(Point::new(12.0, 34.0), 5.0);
        assert_eq!(circle.position(), Point::new(12.0, 34.0));
    }
}
