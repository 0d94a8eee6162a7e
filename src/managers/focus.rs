//! Logical focus tracking.
//!
//! At most one widget holds focus. Focusing raises the widget through the
//! z-order manager, passed in explicitly so the dependency stays a public
//! method call rather than shared internals.

use crate::managers::zindex::ZIndexManager;
use crate::widget::WidgetId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusChange {
    pub previous: Option<WidgetId>,
    pub current: Option<WidgetId>,
}

#[derive(Debug, Default)]
pub struct FocusManager {
    current: Option<WidgetId>,
}

impl FocusManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> Option<&WidgetId> {
        self.current.as_ref()
    }

    pub fn is_focused(&self, id: &WidgetId) -> bool {
        self.current.as_ref() == Some(id)
    }

    /// Focus `id`, raising it to the front. Returns the change to announce,
    /// or `None` when the widget already held focus (the raise still
    /// happens, keeping the z counter monotonic).
    pub fn focus(&mut self, id: WidgetId, z_order: &mut ZIndexManager) -> Option<FocusChange> {
        z_order.bring_to_front(&id);
        if self.current.as_ref() == Some(&id) {
            return None;
        }
        let previous = self.current.replace(id.clone());
        tracing::debug!(widget = %id, previous = ?previous, "focus changed");
        Some(FocusChange {
            previous,
            current: Some(id),
        })
    }

    /// Clear focus only if `id` still holds it. A stale blur arriving after
    /// another widget gained focus is ignored.
    pub fn blur(&mut self, id: &WidgetId) -> Option<FocusChange> {
        if self.current.as_ref() != Some(id) {
            return None;
        }
        let previous = self.current.take();
        Some(FocusChange {
            previous,
            current: None,
        })
    }

    /// Drop focus on widget destruction, regardless of who asks.
    pub fn release(&mut self, id: &WidgetId) -> Option<FocusChange> {
        self.blur(id)
    }
}
