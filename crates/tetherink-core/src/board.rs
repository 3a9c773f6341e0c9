//! Board: a scene together with the controller that edits it.

use crate::attachment::{BoundsQuery, ModelBounds};
use crate::config::InteractionConfig;
use crate::controller::InteractionController;
use crate::input::PointerEvent;
use crate::scene::SceneStore;
use crate::tools::{ShapeKind, ToolKind};

/// The diagram surface as seen by a host.
#[derive(Debug, Clone, Default)]
pub struct Board {
    /// The shapes and connectors on the board.
    scene: SceneStore,
    /// Gesture state and tool selection.
    controller: InteractionController,
}

impl Board {
    /// Create an empty board.
    pub fn new(config: InteractionConfig) -> Self {
        Self {
            scene: SceneStore::new(),
            controller: InteractionController::new(config),
        }
    }

    /// Create a board around an existing scene.
    pub fn with_scene(scene: SceneStore, config: InteractionConfig) -> Self {
        Self {
            scene,
            controller: InteractionController::new(config),
        }
    }

    pub fn scene(&self) -> &SceneStore {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut SceneStore {
        &mut self.scene
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    /// Switch tools. Returns `false` if a gesture is in progress.
    pub fn set_tool(&mut self, tool: ToolKind) -> bool {
        self.controller.set_tool(tool)
    }

    pub fn select_shape_kind(&mut self, kind: Option<ShapeKind>) {
        self.controller.select_shape_kind(kind);
    }

    /// Feed a pointer event, using the stored model for bounding boxes.
    ///
    /// Returns `true` when the host should redraw.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> bool {
        self.handle_pointer_event_with(event, &ModelBounds)
    }

    /// Feed a pointer event, taking bounding boxes from `bounds`.
    pub fn handle_pointer_event_with(
        &mut self,
        event: PointerEvent,
        bounds: &impl BoundsQuery,
    ) -> bool {
        self.controller
            .handle_pointer_event(event, &mut self.scene, bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Attachment, Shape};
    use crate::tools::CursorIcon;
    use kurbo::{Point, Rect};

    #[test]
    fn test_board_creation() {
        let board = Board::default();
        assert!(board.scene().is_empty());
        assert!(board.controller().state().is_idle());
        assert_eq!(board.controller().cursor_icon(), CursorIcon::Default);
    }

    #[test]
    fn test_place_shapes_then_connect_them() {
        let mut board = Board::new(InteractionConfig::default());
        board.set_tool(ToolKind::Shape);
        board.select_shape_kind(Some(ShapeKind::Rectangle));
        assert!(board.handle_pointer_event(PointerEvent::down(Point::new(100.0, 100.0))));
        board.select_shape_kind(Some(ShapeKind::Star));
        assert!(board.handle_pointer_event(PointerEvent::down(Point::new(400.0, 150.0))));
        assert_eq!(board.scene().shape_count(), 2);
        let ids: Vec<_> = board.scene().list_shapes().iter().map(Shape::id).collect();

        assert!(board.set_tool(ToolKind::Line));
        board.handle_pointer_event(PointerEvent::down(Point::new(110.0, 110.0)));
        board.handle_pointer_event(PointerEvent::moved(Point::new(300.0, 140.0)));
        board.handle_pointer_event(PointerEvent::up(Point::new(410.0, 140.0)));

        let line = &board.scene().list_lines()[0];
        assert_eq!(line.start_attachment, Attachment::AttachedTo(ids[0]));
        assert_eq!(line.end_attachment, Attachment::AttachedTo(ids[1]));
        assert_eq!(line.points(), [150.0, 150.0, 400.0, 150.0]);
    }

    #[test]
    fn test_custom_bounds_query() {
        let mut board = Board::default();
        board.set_tool(ToolKind::Shape);
        board.select_shape_kind(Some(ShapeKind::Rectangle));
        board.handle_pointer_event(PointerEvent::down(Point::ZERO));

        // A host that cannot measure anything: nothing attaches.
        let unmeasured = |_: &Shape| -> Option<Rect> { None };
        board.set_tool(ToolKind::Line);
        board.handle_pointer_event_with(PointerEvent::down(Point::new(10.0, 10.0)), &unmeasured);
        board.handle_pointer_event_with(PointerEvent::up(Point::new(50.0, 50.0)), &unmeasured);

        let line = &board.scene().list_lines()[0];
        assert!(line.is_draggable());
        assert_eq!(line.points(), [10.0, 10.0, 50.0, 50.0]);
    }
}
