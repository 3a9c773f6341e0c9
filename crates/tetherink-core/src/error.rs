//! Error types.

use crate::shapes::{LineId, ShapeId};
use thiserror::Error;

/// Scene store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("Unknown shape: {0}")]
    UnknownShape(ShapeId),
    #[error("Unknown line: {0}")]
    UnknownLine(LineId),
    #[error("Shape already exists: {0}")]
    DuplicateShape(ShapeId),
    #[error("Line already exists: {0}")]
    DuplicateLine(LineId),
}

/// Result type for scene store operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
