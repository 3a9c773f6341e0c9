//! Interaction configuration.

use crate::error::ConfigError;
use crate::shapes::{Circle, Rectangle, Shape, Star, Triangle};
use crate::tools::ShapeKind;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// When attached connector endpoints follow a moving shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentTracking {
    /// Endpoints are only re-snapped when their own line is next resolved.
    #[default]
    Deferred,
    /// Endpoints are re-snapped on every position update of the shape.
    Live,
}

/// Extents used when placing a new shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeDefaults {
    pub rectangle_width: f64,
    pub rectangle_height: f64,
    pub circle_radius: f64,
    pub star_inner_radius: f64,
    pub star_outer_radius: f64,
    pub star_points: u32,
    pub triangle_radius: f64,
}

impl Default for ShapeDefaults {
    fn default() -> Self {
        Self {
            rectangle_width: 100.0,
            rectangle_height: 100.0,
            circle_radius: 50.0,
            star_inner_radius: 20.0,
            star_outer_radius: 50.0,
            star_points: Star::DEFAULT_POINTS,
            triangle_radius: 50.0,
        }
    }
}

impl ShapeDefaults {
    /// Build a shape of `kind` at `position` (top-left for rectangles, center otherwise).
    pub fn create(&self, kind: ShapeKind, position: Point) -> Shape {
        match kind {
            ShapeKind::Rectangle => Shape::Rectangle(Rectangle::new(
                position,
                self.rectangle_width,
                self.rectangle_height,
            )),
            ShapeKind::Circle => Shape::Circle(Circle::new(position, self.circle_radius)),
            ShapeKind::Star => Shape::Star(Star::with_points(
                position,
                self.star_inner_radius,
                self.star_outer_radius,
                self.star_points,
            )),
            ShapeKind::Triangle => Shape::Triangle(Triangle::new(position, self.triangle_radius)),
        }
    }
}

/// Tunables for the interaction controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Grab radius of endpoint handles.
    pub handle_radius: f64,
    /// Distance from a line's axis that still counts as hitting it.
    pub line_hit_tolerance: f64,
    /// Whether attached endpoints follow shape drags live.
    pub attachment_tracking: AttachmentTracking,
    /// Extents of newly placed shapes.
    pub shape_defaults: ShapeDefaults,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            handle_radius: 5.0,
            line_hit_tolerance: 2.5,
            attachment_tracking: AttachmentTracking::default(),
            shape_defaults: ShapeDefaults::default(),
        }
    }
}

impl InteractionConfig {
    /// Parse and validate a configuration from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every extent and tolerance is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let d = &self.shape_defaults;
        let non_negative = [
            ("handle_radius", self.handle_radius),
            ("line_hit_tolerance", self.line_hit_tolerance),
            ("rectangle_width", d.rectangle_width),
            ("rectangle_height", d.rectangle_height),
            ("circle_radius", d.circle_radius),
            ("star_inner_radius", d.star_inner_radius),
            ("star_outer_radius", d.star_outer_radius),
            ("triangle_radius", d.triangle_radius),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        if !(2..=Star::MAX_POINTS).contains(&d.star_points) {
            return Err(ConfigError::Invalid(format!(
                "star_points must be between 2 and {}, got {}",
                Star::MAX_POINTS,
                d.star_points
            )));
        }
        if d.star_inner_radius > d.star_outer_radius {
            return Err(ConfigError::Invalid(
                "star_inner_radius must not exceed star_outer_radius".to_string(),
            ));
        }
        Ok(())
    }
}
