//! Shape and connector definitions for the diagram.

mod circle;
mod connector;
mod rectangle;
mod star;
mod triangle;

pub use circle::Circle;
pub use connector::{Attachment, ConnectorLine, Endpoint};
pub use rectangle::Rectangle;
pub use star::Star;
pub use triangle::Triangle;

use crate::tools::ShapeKind;
use kurbo::{BezPath, Point, Rect};
use peniko::Color;
use uuid::Uuid;

/// Fill color carried for the renderer (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ShapeColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn red() -> Self {
        Self::new(255, 0, 0, 255)
    }

    pub const fn green() -> Self {
        Self::new(0, 128, 0, 255)
    }

    pub const fn blue() -> Self {
        Self::new(0, 0, 255, 255)
    }

    pub const fn orange() -> Self {
        Self::new(255, 165, 0, 255)
    }

    /// Get the color as a peniko Color.
    pub fn to_color(self) -> Color {
        Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}

impl From<Color> for ShapeColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self::new(rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

impl From<ShapeColor> for Color {
    fn from(color: ShapeColor) -> Self {
        color.to_color()
    }
}

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Unique identifier for connector lines.
pub type LineId = Uuid;

/// Common trait for all placeable shapes.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Get the position: top-left for rectangles, center for everything else.
    fn position(&self) -> Point;

    /// Move the shape so that its position equals `position`.
    fn set_position(&mut self, position: Point);

    /// Get the tight bounding box in scene coordinates.
    fn bounds(&self) -> Rect;

    /// Get the outline path for rendering.
    fn to_path(&self) -> BezPath;

    /// Get the fill color.
    fn fill(&self) -> ShapeColor;

    /// Whether the pointer currently holds this shape.
    fn is_dragging(&self) -> bool;

    /// Set the transient dragging flag.
    fn set_dragging(&mut self, dragging: bool);
}

/// Enum wrapper for all shape kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
    Star(Star),
    Triangle(Triangle),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Rectangle(s) => s.id(),
            Shape::Circle(s) => s.id(),
            Shape::Star(s) => s.id(),
            Shape::Triangle(s) => s.id(),
        }
    }

    /// The kind tag of this shape.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Star(_) => ShapeKind::Star,
            Shape::Triangle(_) => ShapeKind::Triangle,
        }
    }

    pub fn position(&self) -> Point {
        match self {
            Shape::Rectangle(s) => s.position(),
            Shape::Circle(s) => s.position(),
            Shape::Star(s) => s.position(),
            Shape::Triangle(s) => s.position(),
        }
    }

    pub fn set_position(&mut self, position: Point) {
        match self {
            Shape::Rectangle(s) => s.set_position(position),
            Shape::Circle(s) => s.set_position(position),
            Shape::Star(s) => s.set_position(position),
            Shape::Triangle(s) => s.set_position(position),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Rectangle(s) => s.bounds(),
            Shape::Circle(s) => s.bounds(),
            Shape::Star(s) => s.bounds(),
            Shape::Triangle(s) => s.bounds(),
        }
    }

    pub fn to_path(&self) -> BezPath {
        match self {
            Shape::Rectangle(s) => s.to_path(),
            Shape::Circle(s) => s.to_path(),
            Shape::Star(s) => s.to_path(),
            Shape::Triangle(s) => s.to_path(),
        }
    }

    pub fn fill(&self) -> ShapeColor {
        match self {
            Shape::Rectangle(s) => s.fill(),
            Shape::Circle(s) => s.fill(),
            Shape::Star(s) => s.fill(),
            Shape::Triangle(s) => s.fill(),
        }
    }

    pub fn is_dragging(&self) -> bool {
        match self {
            Shape::Rectangle(s) => s.is_dragging(),
            Shape::Circle(s) => s.is_dragging(),
            Shape::Star(s) => s.is_dragging(),
            Shape::Triangle(s) => s.is_dragging(),
        }
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        match self {
            Shape::Rectangle(s) => s.set_dragging(dragging),
            Shape::Circle(s) => s.set_dragging(dragging),
            Shape::Star(s) => s.set_dragging(dragging),
            Shape::Triangle(s) => s.set_dragging(dragging),
        }
    }
}

/// Closed polygon path through `vertices`.
pub(crate) fn polygon_path(vertices: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let Some((first, rest)) = vertices.split_first() else {
        return path;
    };
    path.move_to(*first);
    for p in rest {
        path.line_to(*p);
    }
    path.close_path();
    path
}

/// Axis-aligned box enclosing `vertices`, or a zero-size box at `fallback`.
pub(crate) fn vertices_bounds(vertices: &[Point], fallback: Point) -> Rect {
    vertices
        .iter()
        .fold(None, |acc: Option<Rect>, p| {
            Some(match acc {
                Some(r) => r.union_pt(*p),
                None => Rect::from_points(*p, *p),
            })
        })
        .unwrap_or_else(|| Rect::from_points(fallback, fallback))
}
