//! Triangle shape.

use super::{ShapeColor, ShapeId, ShapeTrait, polygon_path, vertices_bounds};
use kurbo::{BezPath, Point, Rect};
use std::f64::consts::PI;
use uuid::Uuid;

/// An upright equilateral triangle positioned by its circumcenter.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    pub(crate) id: ShapeId,
    /// Circumcenter.
    pub center: Point,
    /// Distance from the center to each vertex.
    pub radius: f64,
    /// Fill color.
    pub fill: ShapeColor,
    pub(crate) is_dragging: bool,
}

impl Triangle {
    /// Create a new triangle.
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            center,
            radius,
            fill: ShapeColor::orange(),
            is_dragging: false,
        }
    }

    /// Vertices clockwise from the top.
    pub fn vertices(&self) -> [Point; 3] {
        [0.0, 1.0, 2.0].map(|i: f64| {
            let angle = i * 2.0 * PI / 3.0;
            Point::new(
                self.center.x + self.radius * angle.sin(),
                self.center.y - self.radius * angle.cos(),
            )
        })
    }
}

impl ShapeTrait for Triangle {
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
        vertices_bounds(&self.vertices(), self.center)
    }

    fn to_path(&self) -> BezPath {
        polygon_path(&self.vertices())
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

    const EPS: f64 = 1e-9;

    #[test]
    fn test_bounds() {
        let tri = Triangle::new(Point::new(0.0, 0.0), 50.0);
        let bounds = tri.bounds();
        let half_width = 50.0 * (PI / 3.0).sin();
        assert!((bounds.y0 + 50.0).abs() < EPS);
        assert!((bounds.y1 - 25.0).abs() < EPS);
        assert!((bounds.x0 + half_width).abs() < EPS);
        assert!((bounds.x1 - half_width).abs() < EPS);
    }

    #[test]
    fn test_center_inside_bounds() {
        let tri = Triangle::new(Point::new(200.0, 80.0), 30.0);
        assert!(tri.bounds().contains(tri.center));
    }
}
