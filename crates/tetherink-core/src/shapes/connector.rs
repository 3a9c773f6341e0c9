//! Connector line shape.

use super::{LineId, ShapeId};
use crate::geometry::point_to_segment_dist;
use kurbo::{BezPath, Line as KurboLine, Point, Rect, Vec2};
use uuid::Uuid;

/// Which end of a connector line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    End,
}

/// Attachment status of one connector endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Attachment {
    /// Not bound to any shape.
    #[default]
    Free,
    /// Bound to the anchor point of a shape.
    AttachedTo(ShapeId),
}

impl Attachment {
    pub fn is_free(self) -> bool {
        matches!(self, Attachment::Free)
    }

    /// The shape this endpoint is bound to, if any.
    pub fn shape_id(self) -> Option<ShapeId> {
        match self {
            Attachment::Free => None,
            Attachment::AttachedTo(id) => Some(id),
        }
    }
}

/// A straight two-point connector between (optionally) two shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorLine {
    pub(crate) id: LineId,
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
    /// Attachment of the start point.
    pub start_attachment: Attachment,
    /// Attachment of the end point.
    pub end_attachment: Attachment,
}

impl ConnectorLine {
    /// Create a zero-length line at `origin`, as at the start of a drawing gesture.
    pub fn new(origin: Point) -> Self {
        Self::from_points(origin, origin)
    }

    /// Create a free line between two points.
    pub fn from_points(start: Point, end: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            start,
            end,
            start_attachment: Attachment::Free,
            end_attachment: Attachment::Free,
        }
    }

    pub fn id(&self) -> LineId {
        self.id
    }

    /// The flat `(x1, y1, x2, y2)` coordinate list.
    pub fn points(&self) -> [f64; 4] {
        [self.start.x, self.start.y, self.end.x, self.end.y]
    }

    pub fn endpoint(&self, endpoint: Endpoint) -> Point {
        match endpoint {
            Endpoint::Start => self.start,
            Endpoint::End => self.end,
        }
    }

    pub fn set_endpoint(&mut self, endpoint: Endpoint, point: Point) {
        match endpoint {
            Endpoint::Start => self.start = point,
            Endpoint::End => self.end = point,
        }
    }

    pub fn attachment(&self, endpoint: Endpoint) -> Attachment {
        match endpoint {
            Endpoint::Start => self.start_attachment,
            Endpoint::End => self.end_attachment,
        }
    }

    pub fn set_attachment(&mut self, endpoint: Endpoint, attachment: Attachment) {
        match endpoint {
            Endpoint::Start => self.start_attachment = attachment,
            Endpoint::End => self.end_attachment = attachment,
        }
    }

    /// A line moves as a whole only while both of its endpoints are free.
    pub fn is_draggable(&self) -> bool {
        self.start_attachment.is_free() && self.end_attachment.is_free()
    }

    /// Whether either endpoint is bound to `shape_id`.
    pub fn is_attached_to(&self, shape_id: ShapeId) -> bool {
        self.start_attachment == Attachment::AttachedTo(shape_id)
            || self.end_attachment == Attachment::AttachedTo(shape_id)
    }

    /// Shift both endpoints by `delta`.
    pub fn translate(&mut self, delta: Vec2) {
        self.start += delta;
        self.end += delta;
    }

    /// Get the length of the line.
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Get the midpoint of the line.
    pub fn midpoint(&self) -> Point {
        self.start.midpoint(self.end)
    }

    /// Get as a kurbo Line.
    pub fn as_kurbo(&self) -> KurboLine {
        KurboLine::new(self.start, self.end)
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }

    /// Check if a point lies within `tolerance` of the segment.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        point_to_segment_dist(point, self.start, self.end) <= tolerance
    }

    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        if self.start == self.end {
            return path;
        }
        path.move_to(self.start);
        path.line_to(self.end);
        path
    }
}
