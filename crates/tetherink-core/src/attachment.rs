//! Connector attachment resolution.
//!
//! Decides which shape (if any) each endpoint of a connector is bound to,
//! and snaps bound endpoints onto the shape's anchor point.

use crate::geometry::{anchor_in_box, bounding_box_of, contains_point};
use crate::shapes::{Attachment, ConnectorLine, Endpoint, Shape};
use kurbo::{Point, Rect};

/// Source of shape bounding boxes used for containment tests.
///
/// Hosts whose rendered geometry can differ from the stored model supply
/// their own implementation; [`ModelBounds`] reads the stored model.
/// Returning `None` makes the resolver skip that shape.
pub trait BoundsQuery {
    fn bounding_box(&self, shape: &Shape) -> Option<Rect>;
}

/// Bounding boxes computed from the stored shape fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelBounds;

impl BoundsQuery for ModelBounds {
    fn bounding_box(&self, shape: &Shape) -> Option<Rect> {
        Some(bounding_box_of(shape))
    }
}

impl<F> BoundsQuery for F
where
    F: Fn(&Shape) -> Option<Rect>,
{
    fn bounding_box(&self, shape: &Shape) -> Option<Rect> {
        self(shape)
    }
}

/// How one endpoint's attachment changed during a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointChange {
    Unchanged,
    Attached,
    Detached,
    Reattached,
}

impl EndpointChange {
    fn between(before: Attachment, after: Attachment) -> Self {
        match (before, after) {
            (a, b) if a == b => EndpointChange::Unchanged,
            (Attachment::Free, _) => EndpointChange::Attached,
            (_, Attachment::Free) => EndpointChange::Detached,
            _ => EndpointChange::Reattached,
        }
    }
}

/// Summary of a resolution, for logging and callers that react to changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachmentOutcome {
    pub start: EndpointChange,
    pub end: EndpointChange,
}

impl AttachmentOutcome {
    pub fn is_unchanged(&self) -> bool {
        self.start == EndpointChange::Unchanged && self.end == EndpointChange::Unchanged
    }
}

/// Resolve both endpoints of `line` against `shapes` (in listing order).
///
/// An endpoint that is already attached keeps its shape as long as that
/// shape is still listed and its box still contains the endpoint. Otherwise
/// the first listed shape whose box contains it wins. Endpoints that find no
/// shape become free and keep their coordinates.
pub fn resolve(
    line: &ConnectorLine,
    shapes: &[Shape],
    bounds: &impl BoundsQuery,
) -> (ConnectorLine, AttachmentOutcome) {
    let mut resolved = line.clone();
    for endpoint in [Endpoint::Start, Endpoint::End] {
        resolve_into(&mut resolved, endpoint, shapes, bounds, true);
    }
    let outcome = outcome(line, &resolved);
    log::debug!(
        "Resolved line {}: start={:?} end={:?}",
        resolved.id(),
        resolved.start_attachment,
        resolved.end_attachment
    );
    (resolved, outcome)
}

/// Re-evaluate a single endpoint from scratch, leaving the other untouched.
pub fn resolve_endpoint(
    line: &ConnectorLine,
    endpoint: Endpoint,
    shapes: &[Shape],
    bounds: &impl BoundsQuery,
) -> (ConnectorLine, AttachmentOutcome) {
    let mut resolved = line.clone();
    resolve_into(&mut resolved, endpoint, shapes, bounds, false);
    let outcome = outcome(line, &resolved);
    log::debug!(
        "Resolved {:?} of line {}: {:?}",
        endpoint,
        resolved.id(),
        resolved.attachment(endpoint)
    );
    (resolved, outcome)
}

fn outcome(before: &ConnectorLine, after: &ConnectorLine) -> AttachmentOutcome {
    AttachmentOutcome {
        start: EndpointChange::between(before.start_attachment, after.start_attachment),
        end: EndpointChange::between(before.end_attachment, after.end_attachment),
    }
}

fn resolve_into(
    line: &mut ConnectorLine,
    endpoint: Endpoint,
    shapes: &[Shape],
    bounds: &impl BoundsQuery,
    keep_current: bool,
) {
    let point = line.endpoint(endpoint);

    let current = keep_current
        .then(|| line.attachment(endpoint).shape_id())
        .flatten()
        .and_then(|id| shapes.iter().find(|s| s.id() == id))
        .and_then(|shape| containing_anchor(shape, point, bounds).map(|anchor| (shape, anchor)));

    let hit = current.or_else(|| {
        shapes
            .iter()
            .find_map(|shape| containing_anchor(shape, point, bounds).map(|anchor| (shape, anchor)))
    });

    match hit {
        Some((shape, anchor)) => {
            line.set_endpoint(endpoint, anchor);
            line.set_attachment(endpoint, Attachment::AttachedTo(shape.id()));
        }
        None => line.set_attachment(endpoint, Attachment::Free),
    }
}

/// The shape's anchor, if its box contains `point`.
fn containing_anchor(shape: &Shape, point: Point, bounds: &impl BoundsQuery) -> Option<Point> {
    let rect = bounds.bounding_box(shape)?;
    contains_point(rect, point.x, point.y).then(|| anchor_in_box(shape, rect))
}
