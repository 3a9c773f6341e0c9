//! Star shape.

use super::{ShapeColor, ShapeId, ShapeTrait, polygon_path, vertices_bounds};
use kurbo::{BezPath, Point, Rect};
use std::f64::consts::PI;
use uuid::Uuid;

/// A regular star positioned by its center, with the first spike pointing up.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub(crate) id: ShapeId,
    /// Center point.
    pub center: Point,
    /// Radius of the inner (concave) vertices.
    pub inner_radius: f64,
    /// Radius of the spike tips.
    pub outer_radius: f64,
    /// Number of spikes.
    pub num_points: u32,
    /// Fill color.
    pub fill: ShapeColor,
    pub(crate) is_dragging: bool,
}

impl Star {
    /// Default number of spikes.
    pub const DEFAULT_POINTS: u32 = 5;

    /// Largest number of spikes a star is drawn with.
    pub const MAX_POINTS: u32 = 64;

    /// Create a new five-pointed star.
    pub fn new(center: Point, inner_radius: f64, outer_radius: f64) -> Self {
        Self::with_points(center, inner_radius, outer_radius, Self::DEFAULT_POINTS)
    }

    /// Create a star with a specific number of spikes.
    pub fn with_points(center: Point, inner_radius: f64, outer_radius: f64, num_points: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            center,
            inner_radius,
            outer_radius,
            num_points,
            fill: ShapeColor::blue(),
            is_dragging: false,
        }
    }

    /// Vertices alternating tip/inner, clockwise from the top tip.
    ///
    /// The spike count is clamped to `2..=MAX_POINTS`.
    pub fn vertices(&self) -> Vec<Point> {
        let n = self.num_points.clamp(2, Self::MAX_POINTS);
        (0..n * 2)
            .map(|i| {
                let radius = if i % 2 == 0 {
                    self.outer_radius
                } else {
                    self.inner_radius
                };
                let angle = f64::from(i) * PI / f64::from(n);
                Point::new(
                    self.center.x + radius * angle.sin(),
                    self.center.y - radius * angle.cos(),
                )
            })
            .collect()
    }
}

impl ShapeTrait for Star {
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
    fn test_vertex_count() {
        let star = Star::new(Point::ZERO, 20.0, 50.0);
        assert_eq!(star.vertices().len(), 10);
    }

    #[test]
    fn test_spike_count_is_clamped() {
        let huge = Star::with_points(Point::ZERO, 1.0, 2.0, u32::MAX / 2 + 1);
        assert_eq!(huge.vertices().len(), 2 * Star::MAX_POINTS as usize);
        assert!(huge.bounds().contains(Point::ZERO));

        let single = Star::with_points(Point::ZERO, 1.0, 2.0, 1);
        assert_eq!(single.vertices().len(), 4);
    }

    #[test]
    fn test_first_vertex_points_up() {
        let star = Star::new(Point::new(100.0, 100.0), 20.0, 50.0);
        let top = star.vertices()[0];
        assert!((top.x - 100.0).abs() < EPS);
        assert!((top.y - 50.0).abs() < EPS);
    }

    #[test]
    fn test_tight_bounds() {
        let star = Star::new(Point::new(0.0, 0.0), 20.0, 50.0);
        let bounds = star.bounds();
        // Top tip reaches the full outer radius.
        assert!((bounds.y0 + 50.0).abs() < EPS);
        // Lower tips sit at outer * cos(36deg).
        let expected_bottom = 50.0 * (PI / 5.0).cos();
        assert!((bounds.y1 - expected_bottom).abs() < EPS);
        // Side tips sit at outer * sin(72deg).
        let expected_side = 50.0 * (2.0 * PI / 5.0).sin();
        assert!((bounds.x1 - expected_side).abs() < EPS);
        assert!((bounds.x0 + expected_side).abs() < EPS);
    }

    #[test]
    fn test_center_inside_bounds() {
        let star = Star::new(Point::new(40.0, -10.0), 20.0, 50.0);
        let bounds = star.bounds();
        assert!(bounds.contains(star.center));
    }
}
