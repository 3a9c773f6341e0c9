//! Rectangle shape.

use super::{ShapeColor, ShapeId, ShapeTrait};
use kurbo::{BezPath, Point, Rect, Shape as KurboShape};
use uuid::Uuid;

/// An axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub(crate) id: ShapeId,
    /// Top-left corner position.
    pub position: Point,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
    /// Fill color.
    pub fill: ShapeColor,
    pub(crate) is_dragging: bool,
}

impl Rectangle {
    /// Create a new rectangle.
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            width,
            height,
            fill: ShapeColor::red(),
            is_dragging: false,
        }
    }

    /// Get the rectangle as a kurbo Rect.
    ///
    /// Negative extents are normalized so the box is always well-formed.
    pub fn as_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
        .abs()
    }
}

impl ShapeTrait for Rectangle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    fn bounds(&self) -> Rect {
        self.as_rect()
    }

    fn to_path(&self) -> BezPath {
        self.as_rect().to_path(0.1)
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
