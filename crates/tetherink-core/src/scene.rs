//! Scene store: the authoritative shape and connector collections.
//!
//! Every mutation builds a fresh collection and swaps it in, so a snapshot
//! obtained from [`SceneStore::list_shapes`] or [`SceneStore::list_lines`]
//! never changes underneath its holder.

use crate::error::{SceneError, SceneResult};
use crate::shapes::{Attachment, ConnectorLine, Endpoint, LineId, Shape, ShapeId};
use kurbo::{Point, Rect};
use std::sync::Arc;

/// Shapes and connector lines, in listing (insertion) order.
#[derive(Debug, Clone, Default)]
pub struct SceneStore {
    shapes: Arc<Vec<Shape>>,
    lines: Arc<Vec<ConnectorLine>>,
}

impl SceneStore {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape.
    pub fn add_shape(&mut self, shape: Shape) -> SceneResult<ShapeId> {
        let id = shape.id();
        if self.shape(id).is_some() {
            return Err(SceneError::DuplicateShape(id));
        }
        let mut shapes = Vec::with_capacity(self.shapes.len() + 1);
        shapes.extend(self.shapes.iter().cloned());
        shapes.push(shape);
        self.shapes = Arc::new(shapes);
        Ok(id)
    }

    /// Append a connector line.
    pub fn add_line(&mut self, line: ConnectorLine) -> SceneResult<LineId> {
        let id = line.id();
        if self.line(id).is_some() {
            return Err(SceneError::DuplicateLine(id));
        }
        let mut lines = Vec::with_capacity(self.lines.len() + 1);
        lines.extend(self.lines.iter().cloned());
        lines.push(line);
        self.lines = Arc::new(lines);
        Ok(id)
    }

    /// Replace a line with the result of applying `mutator` to a copy of it.
    ///
    /// The line keeps its id even if the mutator overwrites it.
    pub fn update_line<F>(&mut self, id: LineId, mutator: F) -> SceneResult<()>
    where
        F: FnOnce(&mut ConnectorLine),
    {
        let index = self
            .lines
            .iter()
            .position(|l| l.id() == id)
            .ok_or(SceneError::UnknownLine(id))?;
        let mut updated = self.lines[index].clone();
        mutator(&mut updated);
        updated.id = id;
        self.lines = Arc::new(replace_at(&self.lines, index, updated));
        Ok(())
    }

    /// Move a shape so that its position is `(x, y)`.
    pub fn update_shape_position(&mut self, id: ShapeId, x: f64, y: f64) -> SceneResult<()> {
        let index = self.shape_index(id)?;
        let mut updated = self.shapes[index].clone();
        updated.set_position(Point::new(x, y));
        self.shapes = Arc::new(replace_at(&self.shapes, index, updated));
        Ok(())
    }

    /// Set the dragging flag on a shape. Raising it clears it on every other shape.
    pub fn set_dragging(&mut self, id: ShapeId, dragging: bool) -> SceneResult<()> {
        self.shape_index(id)?;
        let shapes = self
            .shapes
            .iter()
            .map(|shape| {
                let mut shape = shape.clone();
                if shape.id() == id {
                    shape.set_dragging(dragging);
                } else if dragging {
                    shape.set_dragging(false);
                }
                shape
            })
            .collect();
        self.shapes = Arc::new(shapes);
        Ok(())
    }

    /// Snapshot of all shapes in listing order.
    pub fn list_shapes(&self) -> Arc<Vec<Shape>> {
        Arc::clone(&self.shapes)
    }

    /// Snapshot of all lines in listing order.
    pub fn list_lines(&self) -> Arc<Vec<ConnectorLine>> {
        Arc::clone(&self.lines)
    }

    /// Get a shape by ID.
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    /// Get a line by ID.
    pub fn line(&self, id: LineId) -> Option<&ConnectorLine> {
        self.lines.iter().find(|l| l.id() == id)
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the scene holds neither shapes nor lines.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty() && self.lines.is_empty()
    }

    /// Get the bounding box of all shapes and lines.
    pub fn bounds(&self) -> Option<Rect> {
        self.shapes
            .iter()
            .map(Shape::bounds)
            .chain(self.lines.iter().map(ConnectorLine::bounds))
            .reduce(|a, b| a.union(b))
    }

    /// Move every endpoint attached to `shape_id` onto `anchor`.
    ///
    /// Returns the number of lines that changed.
    pub fn resnap_attached(&mut self, shape_id: ShapeId, anchor: Point) -> usize {
        let attached = Attachment::AttachedTo(shape_id);
        let mut changed = 0;
        let lines = self
            .lines
            .iter()
            .map(|line| {
                let mut line = line.clone();
                if !line.is_attached_to(shape_id) {
                    return line;
                }
                let mut touched = false;
                for endpoint in [Endpoint::Start, Endpoint::End] {
                    if line.attachment(endpoint) == attached && line.endpoint(endpoint) != anchor {
                        line.set_endpoint(endpoint, anchor);
                        touched = true;
                    }
                }
                if touched {
                    changed += 1;
                }
                line
            })
            .collect();
        if changed > 0 {
            self.lines = Arc::new(lines);
        }
        changed
    }

    fn shape_index(&self, id: ShapeId) -> SceneResult<usize> {
        self.shapes
            .iter()
            .position(|s| s.id() == id)
            .ok_or(SceneError::UnknownShape(id))
    }
}

/// Copy of `items` with the entry at `index` swapped for `value`.
fn replace_at<T: Clone>(items: &[T], index: usize, value: T) -> Vec<T> {
    let mut items = items.to_vec();
    items[index] = value;
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Rectangle};
    use kurbo::Vec2;

    fn rect() -> Shape {
        Shape::Rectangle(Rectangle::new(Point::new(100.0, 100.0), 100.0, 100.0))
    }

    #[test]
    fn test_store_creation() {
        let store = SceneStore::new();
        assert!(store.is_empty());
        assert_eq!(store.shape_count(), 0);
        assert!(store.bounds().is_none());
    }

    #[test]
    fn test_add_shape_keeps_listing_order() {
        let mut store = SceneStore::new();
        let a = store.add_shape(rect()).unwrap();
        let b = store
            .add_shape(Shape::Circle(Circle::new(Point::ZERO, 5.0)))
            .unwrap();
        let ids: Vec<_> = store.list_shapes().iter().map(Shape::id).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut store = SceneStore::new();
        let shape = rect();
        let id = store.add_shape(shape.clone()).unwrap();
        assert_eq!(store.add_shape(shape), Err(SceneError::DuplicateShape(id)));

        let line = ConnectorLine::new(Point::ZERO);
        let line_id = store.add_line(line.clone()).unwrap();
        assert_eq!(store.add_line(line), Err(SceneError::DuplicateLine(line_id)));
    }

    #[test]
    fn test_snapshot_is_not_affected_by_updates() {
        let mut store = SceneStore::new();
        let id = store.add_shape(rect()).unwrap();
        let before = store.list_shapes();
        store.update_shape_position(id, 0.0, 0.0).unwrap();
        assert_eq!(before[0].position(), Point::new(100.0, 100.0));
        assert_eq!(store.shape(id).unwrap().position(), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_update_line() {
        let mut store = SceneStore::new();
        let id = store
            .add_line(ConnectorLine::from_points(Point::ZERO, Point::new(50.0, 50.0)))
            .unwrap();
        let before = store.list_lines();
        store
            .update_line(id, |l| l.translate(Vec2::new(10.0, 10.0)))
            .unwrap();
        assert_eq!(store.line(id).unwrap().points(), [10.0, 10.0, 60.0, 60.0]);
        assert_eq!(before[0].points(), [0.0, 0.0, 50.0, 50.0]);
    }

    #[test]
    fn test_update_line_keeps_id() {
        let mut store = SceneStore::new();
        let a = store
            .add_line(ConnectorLine::from_points(Point::ZERO, Point::new(10.0, 0.0)))
            .unwrap();
        let other = ConnectorLine::from_points(Point::new(5.0, 5.0), Point::new(20.0, 20.0));
        let b = store.add_line(other.clone()).unwrap();

        store.update_line(a, |l| *l = other).unwrap();

        let ids: Vec<_> = store.list_lines().iter().map(ConnectorLine::id).collect();
        assert_eq!(ids, vec![a, b]);
        assert_eq!(store.line(a).unwrap().points(), [5.0, 5.0, 20.0, 20.0]);
        assert_eq!(store.line(b).unwrap().points(), [5.0, 5.0, 20.0, 20.0]);
    }

    #[test]
    fn test_unknown_ids() {
        let mut store = SceneStore::new();
        let missing = uuid::Uuid::new_v4();
        assert_eq!(
            store.update_shape_position(missing, 1.0, 1.0),
            Err(SceneError::UnknownShape(missing))
        );
        assert_eq!(
            store.set_dragging(missing, true),
            Err(SceneError::UnknownShape(missing))
        );
        assert_eq!(
            store.update_line(missing, |_| {}),
            Err(SceneError::UnknownLine(missing))
        );
    }

    #[test]
    fn test_set_dragging_is_exclusive() {
        let mut store = SceneStore::new();
        let a = store.add_shape(rect()).unwrap();
        let b = store.add_shape(rect()).unwrap();
        store.set_dragging(a, true).unwrap();
        store.set_dragging(b, true).unwrap();
        assert!(!store.shape(a).unwrap().is_dragging());
        assert!(store.shape(b).unwrap().is_dragging());
        store.set_dragging(b, false).unwrap();
        assert!(!store.shape(b).unwrap().is_dragging());
    }

    #[test]
    fn test_bounds_union() {
        let mut store = SceneStore::new();
        store.add_shape(rect()).unwrap();
        store
            .add_line(ConnectorLine::from_points(Point::ZERO, Point::new(10.0, 10.0)))
            .unwrap();
        let bounds = store.bounds().unwrap();
        assert!((bounds.x0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resnap_attached() {
        let mut store = SceneStore::new();
        let shape_id = store.add_shape(rect()).unwrap();
        let mut attached = ConnectorLine::from_points(Point::new(150.0, 150.0), Point::ZERO);
        attached.start_attachment = Attachment::AttachedTo(shape_id);
        let attached_id = store.add_line(attached).unwrap();
        let free_id = store
            .add_line(ConnectorLine::from_points(Point::new(150.0, 150.0), Point::ZERO))
            .unwrap();

        assert_eq!(store.resnap_attached(shape_id, Point::new(60.0, 70.0)), 1);
        assert_eq!(store.line(attached_id).unwrap().start, Point::new(60.0, 70.0));
        assert_eq!(store.line(free_id).unwrap().start, Point::new(150.0, 150.0));
        // Already at the anchor: nothing to do.
        assert_eq!(store.resnap_attached(shape_id, Point::new(60.0, 70.0)), 0);
    }
}
