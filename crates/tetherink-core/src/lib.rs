//! TetherInk Core Library
//!
//! Platform-agnostic shapes, connectors and the pointer interaction logic
//! that attaches connector endpoints to shapes.

pub mod attachment;
pub mod board;
pub mod config;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod input;
pub mod scene;
pub mod shapes;
pub mod tools;

pub use attachment::{AttachmentOutcome, BoundsQuery, EndpointChange, ModelBounds, resolve, resolve_endpoint};
pub use board::Board;
pub use config::{AttachmentTracking, InteractionConfig, ShapeDefaults};
pub use controller::{InteractionController, InteractionState};
pub use error::{ConfigError, SceneError, SceneResult};
pub use input::{MouseButton, PointerEvent};
pub use scene::SceneStore;
pub use shapes::{Attachment, ConnectorLine, Endpoint, LineId, Shape, ShapeColor, ShapeId};
pub use tools::{CursorIcon, ShapeKind, ToolKind, ToolManager};
