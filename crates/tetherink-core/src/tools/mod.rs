//! Tool system for the diagram surface.

use serde::{Deserialize, Serialize};

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    /// Pans the stage (handled by the host).
    Hand,
    /// Drags shapes, whole lines and endpoint handles.
    #[default]
    Cursor,
    /// Places the selected shape kind.
    Shape,
    /// Draws connector lines.
    Line,
}

/// Placeable shape kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Star,
    Triangle,
}

/// Pointer cursor the host should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorIcon {
    Default,
    Grab,
    Grabbing,
    Cell,
    Crosshair,
}

impl CursorIcon {
    /// CSS `cursor` keyword.
    pub fn css_name(self) -> &'static str {
        match self {
            CursorIcon::Default => "default",
            CursorIcon::Grab => "grab",
            CursorIcon::Grabbing => "grabbing",
            CursorIcon::Cell => "cell",
            CursorIcon::Crosshair => "crosshair",
        }
    }
}

/// Manages the current tool and palette selection.
#[derive(Debug, Clone, Default)]
pub struct ToolManager {
    /// Currently selected tool.
    pub current_tool: ToolKind,
    /// Shape kind placed by the shape tool (None = nothing picked yet).
    pub selected_shape: Option<ShapeKind>,
}

impl ToolManager {
    /// Create a new tool manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current tool.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.current_tool = tool;
    }

    /// Pick the shape kind for the shape tool.
    pub fn select_shape(&mut self, kind: Option<ShapeKind>) {
        self.selected_shape = kind;
    }

    /// Cursor for the current tool; `panning` selects the closed hand.
    pub fn cursor_icon(&self, panning: bool) -> CursorIcon {
        match self.current_tool {
            ToolKind::Hand if panning => CursorIcon::Grabbing,
            ToolKind::Hand => CursorIcon::Grab,
            ToolKind::Cursor => CursorIcon::Default,
            ToolKind::Shape => CursorIcon::Cell,
            ToolKind::Line => CursorIcon::Crosshair,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_selection() {
        let mut tm = ToolManager::new();
        assert_eq!(tm.current_tool, ToolKind::Cursor);
        assert_eq!(tm.selected_shape, None);

        tm.set_tool(ToolKind::Line);
        assert_eq!(tm.current_tool, ToolKind::Line);
    }

    #[test]
    fn test_cursor_icons() {
        let mut tm = ToolManager::new();
        assert_eq!(tm.cursor_icon(false), CursorIcon::Default);
        tm.set_tool(ToolKind::Hand);
        assert_eq!(tm.cursor_icon(false).css_name(), "grab");
        assert_eq!(tm.cursor_icon(true).css_name(), "grabbing");
        tm.set_tool(ToolKind::Shape);
        assert_eq!(tm.cursor_icon(false), CursorIcon::Cell);
        tm.set_tool(ToolKind::Line);
        assert_eq!(tm.cursor_icon(true).css_name(), "crosshair");
    }

    #[test]
    fn test_tool_kind_names() {
        let tool: ToolKind = serde_json::from_str("\"line\"").unwrap();
        assert_eq!(tool, ToolKind::Line);
        let kind: ShapeKind = serde_json::from_str("\"triangle\"").unwrap();
        assert_eq!(kind, ShapeKind::Triangle);
    }
}
