//! Pointer-drag-to-reposition, one widget at a time.

use crate::constants::BOUNDARY_PADDING;
use crate::geometry::{Bounds, Point, Size};
use crate::input::PointerEvent;
use crate::widget::WidgetId;

/// State held across the pointer-move callbacks of one drag.
#[derive(Debug, Clone)]
pub struct DragSession {
    pub id: WidgetId,
    pointer_origin: Point,
    widget_origin: Bounds,
}

#[derive(Debug)]
pub struct DragManager {
    session: Option<DragSession>,
    boundary_padding: u16,
}

impl Default for DragManager {
    fn default() -> Self {
        Self::new()
    }
}

impl DragManager {
    pub fn new() -> Self {
        Self {
            session: None,
            boundary_padding: BOUNDARY_PADDING,
        }
    }

    pub fn with_boundary_padding(padding: u16) -> Self {
        Self {
            session: None,
            boundary_padding: padding,
        }
    }

    pub fn boundary_padding(&self) -> u16 {
        self.boundary_padding
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn dragging(&self) -> Option<&WidgetId> {
        self.session.as_ref().map(|session| &session.id)
    }

    /// Start a session. Refused while any session is active, including one
    /// on the same widget.
    pub fn begin(&mut self, id: WidgetId, origin: Bounds, pointer: PointerEvent) -> bool {
        if self.session.is_some() {
            return false;
        }
        tracing::debug!(widget = %id, "drag begin");
        self.session = Some(DragSession {
            id,
            pointer_origin: pointer.position(),
            widget_origin: origin,
        });
        true
    }

    /// Recompute the dragged widget's position for the current pointer,
    /// clamped so the boundary padding stays visible. No-op without an
    /// active session.
    pub fn update(&self, pointer: PointerEvent, viewport: Size) -> Option<(WidgetId, Bounds)> {
        let session = self.session.as_ref()?;
        let (dx, dy) = pointer.position().delta_from(session.pointer_origin);
        let moved = session
            .widget_origin
            .translated(dx, dy)
            .clamp_to_viewport(viewport, self.boundary_padding);
        Some((session.id.clone(), moved))
    }

    /// End the session, returning the dragged widget's id.
    pub fn end(&mut self) -> Option<WidgetId> {
        let session = self.session.take()?;
        tracing::debug!(widget = %session.id, "drag end");
        Some(session.id)
    }

    /// Drop the session if it belongs to `id` (widget closed mid-drag).
    pub fn cancel(&mut self, id: &WidgetId) {
        if self.session.as_ref().is_some_and(|session| session.id == *id) {
            tracing::debug!(widget = %id, "drag cancelled");
            self.session = None;
        }
    }
}
