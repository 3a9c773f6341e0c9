//! Pointer-driven interaction state machine.
//!
//! The controller turns pointer events into scene mutations: drawing new
//! connectors, dragging shapes, dragging whole free lines and dragging
//! individual endpoint handles. Attachment is only resolved when a gesture
//! that moves line endpoints is released.

use crate::attachment::{self, BoundsQuery};
use crate::config::{AttachmentTracking, InteractionConfig};
use crate::error::SceneError;
use crate::geometry::{anchor_in_box, anchor_of, contains_point};
use crate::input::{MouseButton, PointerEvent};
use crate::scene::SceneStore;
use crate::shapes::{ConnectorLine, Endpoint, LineId, ShapeId};
use crate::tools::{CursorIcon, ShapeKind, ToolKind, ToolManager};
use kurbo::{Point, Vec2};

/// Current gesture.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    /// A new connector follows the pointer; it is not in the scene yet.
    DrawingLine(ConnectorLine),
    /// A shape follows the pointer at a fixed grab offset.
    DraggingShape { shape_id: ShapeId, grab_offset: Vec2 },
    /// A free line is displaced by `offset` for rendering only.
    DraggingWholeLine {
        line_id: LineId,
        origin: Point,
        offset: Vec2,
    },
    /// One free endpoint follows the pointer.
    DraggingEndpoint { line_id: LineId, endpoint: Endpoint },
    /// The host is panning the stage.
    Panning,
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, InteractionState::Idle)
    }
}

/// What a pointer press landed on.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Hit {
    Handle(LineId, Endpoint),
    LineBody { line_id: LineId, draggable: bool },
    Shape(ShapeId),
}

/// Routes pointer events to scene mutations according to the active tool.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    state: InteractionState,
    tools: ToolManager,
    config: InteractionConfig,
}

impl InteractionController {
    pub fn new(config: InteractionConfig) -> Self {
        Self {
            state: InteractionState::Idle,
            tools: ToolManager::new(),
            config,
        }
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn tools(&self) -> &ToolManager {
        &self.tools
    }

    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    /// Switch tools. Ignored while a gesture is in progress.
    ///
    /// Returns whether the tool was applied.
    pub fn set_tool(&mut self, tool: ToolKind) -> bool {
        if !self.state.is_idle() {
            log::debug!("Ignoring tool change to {:?} during {:?}", tool, self.state);
            return false;
        }
        self.tools.set_tool(tool);
        true
    }

    /// Pick the shape kind placed by the shape tool.
    pub fn select_shape_kind(&mut self, kind: Option<ShapeKind>) {
        self.tools.select_shape(kind);
    }

    /// The connector being drawn, if any.
    pub fn drawing_preview(&self) -> Option<&ConnectorLine> {
        match &self.state {
            InteractionState::DrawingLine(line) => Some(line),
            _ => None,
        }
    }

    /// Render-only displacement of the line being dragged as a whole.
    pub fn active_line_offset(&self) -> Option<(LineId, Vec2)> {
        match self.state {
            InteractionState::DraggingWholeLine {
                line_id, offset, ..
            } => Some((line_id, offset)),
            _ => None,
        }
    }

    pub fn cursor_icon(&self) -> CursorIcon {
        self.tools
            .cursor_icon(matches!(self.state, InteractionState::Panning))
    }

    /// Process one pointer event.
    ///
    /// Returns `true` when the host should redraw.
    pub fn handle_pointer_event(
        &mut self,
        event: PointerEvent,
        scene: &mut SceneStore,
        bounds: &impl BoundsQuery,
    ) -> bool {
        match event {
            PointerEvent::Down {
                position,
                button: MouseButton::Left,
            } => self.on_pointer_down(position, scene, bounds),
            PointerEvent::Move { position } => self.on_pointer_move(position, scene, bounds),
            PointerEvent::Up {
                position,
                button: MouseButton::Left,
            } => self.on_pointer_up(position, scene, bounds),
            _ => false,
        }
    }

    fn on_pointer_down(
        &mut self,
        position: Point,
        scene: &mut SceneStore,
        bounds: &impl BoundsQuery,
    ) -> bool {
        if !self.state.is_idle() {
            log::debug!("Ignoring pointer down during {:?}", self.state);
            return false;
        }

        let tool = self.tools.current_tool;
        if tool == ToolKind::Hand {
            self.transition(InteractionState::Panning);
            return false;
        }

        if let Some(Hit::Handle(line_id, endpoint)) = self.hit_handle(position, scene) {
            self.transition(InteractionState::DraggingEndpoint { line_id, endpoint });
            return false;
        }

        match tool {
            ToolKind::Cursor => match self.hit_body(position, scene, bounds) {
                Some(Hit::LineBody {
                    line_id,
                    draggable: true,
                }) => {
                    self.transition(InteractionState::DraggingWholeLine {
                        line_id,
                        origin: position,
                        offset: Vec2::ZERO,
                    });
                    false
                }
                Some(Hit::Shape(shape_id)) => {
                    let Some(shape) = scene.shape(shape_id) else {
                        return false;
                    };
                    let grab_offset = position - shape.position();
                    if let Err(err) = scene.set_dragging(shape_id, true) {
                        return self.abandon(err);
                    }
                    self.transition(InteractionState::DraggingShape {
                        shape_id,
                        grab_offset,
                    });
                    true
                }
                // Attached line bodies swallow the press.
                Some(_) | None => false,
            },
            ToolKind::Line => {
                self.transition(InteractionState::DrawingLine(ConnectorLine::new(position)));
                true
            }
            ToolKind::Shape => {
                let Some(kind) = self.tools.selected_shape else {
                    return false;
                };
                let shape = self.config.shape_defaults.create(kind, position);
                match scene.add_shape(shape) {
                    Ok(id) => {
                        log::info!("Placed {:?} {} at {:?}", kind, id, position);
                        true
                    }
                    Err(err) => self.abandon(err),
                }
            }
            ToolKind::Hand => false,
        }
    }

    fn on_pointer_move(
        &mut self,
        position: Point,
        scene: &mut SceneStore,
        bounds: &impl BoundsQuery,
    ) -> bool {
        match &mut self.state {
            InteractionState::Idle | InteractionState::Panning => false,
            InteractionState::DrawingLine(line) => {
                line.end = position;
                true
            }
            InteractionState::DraggingShape {
                shape_id,
                grab_offset,
            } => {
                let (shape_id, target) = (*shape_id, position - *grab_offset);
                match self.move_shape(shape_id, target, scene, bounds) {
                    Ok(()) => true,
                    Err(err) => self.abandon(err),
                }
            }
            InteractionState::DraggingWholeLine { origin, offset, .. } => {
                *offset = position - *origin;
                true
            }
            InteractionState::DraggingEndpoint { line_id, endpoint } => {
                let endpoint = *endpoint;
                match scene.update_line(*line_id, |line| line.set_endpoint(endpoint, position)) {
                    Ok(()) => true,
                    Err(err) => self.abandon(err),
                }
            }
        }
    }

    fn on_pointer_up(
        &mut self,
        position: Point,
        scene: &mut SceneStore,
        bounds: &impl BoundsQuery,
    ) -> bool {
        match std::mem::take(&mut self.state) {
            InteractionState::Idle => false,
            InteractionState::Panning => {
                log::debug!("Pan finished");
                false
            }
            InteractionState::DrawingLine(mut line) => {
                line.end = position;
                let shapes = scene.list_shapes();
                let (line, outcome) = attachment::resolve(&line, &shapes, bounds);
                match scene.add_line(line) {
                    Ok(id) => {
                        log::info!("Committed line {} ({:?})", id, outcome);
                        true
                    }
                    Err(err) => self.abandon(err),
                }
            }
            InteractionState::DraggingShape {
                shape_id,
                grab_offset,
            } => {
                let result = self
                    .move_shape(shape_id, position - grab_offset, scene, bounds)
                    .and_then(|()| scene.set_dragging(shape_id, false));
                match result {
                    Ok(()) => {
                        log::debug!("Dropped shape {} at {:?}", shape_id, position - grab_offset);
                        true
                    }
                    Err(err) => self.abandon(err),
                }
            }
            InteractionState::DraggingWholeLine {
                line_id, origin, ..
            } => {
                let delta = position - origin;
                let shapes = scene.list_shapes();
                let result = scene.update_line(line_id, |line| {
                    line.translate(delta);
                    *line = attachment::resolve(line, &shapes, bounds).0;
                });
                match result {
                    Ok(()) => {
                        log::debug!("Moved line {} by {:?}", line_id, delta);
                        true
                    }
                    Err(err) => self.abandon(err),
                }
            }
            InteractionState::DraggingEndpoint { line_id, endpoint } => {
                let shapes = scene.list_shapes();
                let result = scene.update_line(line_id, |line| {
                    line.set_endpoint(endpoint, position);
                    *line = attachment::resolve_endpoint(line, endpoint, &shapes, bounds).0;
                });
                match result {
                    Ok(()) => true,
                    Err(err) => self.abandon(err),
                }
            }
        }
    }

    /// Reposition a dragged shape, following it with attached endpoints under live tracking.
    fn move_shape(
        &self,
        shape_id: ShapeId,
        target: Point,
        scene: &mut SceneStore,
        bounds: &impl BoundsQuery,
    ) -> Result<(), SceneError> {
        scene.update_shape_position(shape_id, target.x, target.y)?;
        if self.config.attachment_tracking == AttachmentTracking::Live {
            let shape = scene
                .shape(shape_id)
                .ok_or(SceneError::UnknownShape(shape_id))?;
            let anchor = bounds
                .bounding_box(shape)
                .map(|rect| anchor_in_box(shape, rect))
                .unwrap_or_else(|| anchor_of(shape));
            let moved = scene.resnap_attached(shape_id, anchor);
            if moved > 0 {
                log::debug!("Re-snapped {} line(s) to shape {}", moved, shape_id);
            }
        }
        Ok(())
    }

    /// Free endpoint handle under `point`, front-most line first.
    fn hit_handle(&self, point: Point, scene: &SceneStore) -> Option<Hit> {
        let radius = self.config.handle_radius;
        scene.list_lines().iter().rev().find_map(|line| {
            [Endpoint::Start, Endpoint::End]
                .into_iter()
                .find(|&ep| {
                    line.attachment(ep).is_free() && line.endpoint(ep).distance(point) <= radius
                })
                .map(|ep| Hit::Handle(line.id(), ep))
        })
    }

    /// Line body or shape under `point`; lines render above shapes.
    fn hit_body(
        &self,
        point: Point,
        scene: &SceneStore,
        bounds: &impl BoundsQuery,
    ) -> Option<Hit> {
        let tolerance = self.config.line_hit_tolerance;
        let line_hit = scene
            .list_lines()
            .iter()
            .rev()
            .find(|line| line.hit_test(point, tolerance))
            .map(|line| Hit::LineBody {
                line_id: line.id(),
                draggable: line.is_draggable(),
            });
        line_hit.or_else(|| {
            scene
                .list_shapes()
                .iter()
                .rev()
                .find(|shape| {
                    bounds
                        .bounding_box(shape)
                        .is_some_and(|rect| contains_point(rect, point.x, point.y))
                })
                .map(|shape| Hit::Shape(shape.id()))
        })
    }

    fn transition(&mut self, next: InteractionState) {
        log::debug!("Interaction {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// Drop the current gesture after a store error.
    fn abandon(&mut self, err: SceneError) -> bool {
        log::warn!("Abandoning gesture: {}", err);
        self.state = InteractionState::Idle;
        false
    }
}
