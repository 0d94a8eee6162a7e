//! Per-widget layout persistence.
//!
//! Geometry flows through the store only on session settles: continuous
//! drag/resize updates queue the widget as dirty and the settle commits one
//! write. Store failures are logged here and never escape; the runtime just
//! proceeds with in-memory state.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::constants::STATE_KEY_PREFIX;
use crate::drivers::StateStore;
use crate::geometry::Bounds;
use crate::widget::{Widget, WidgetId};

/// The layout entry written under `overlay-wm/widget/<id>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedWidgetState {
    pub bounds: Bounds,
    pub minimized: bool,
    pub visible: bool,
}

impl From<&Widget> for PersistedWidgetState {
    fn from(widget: &Widget) -> Self {
        Self {
            bounds: widget.bounds,
            minimized: widget.minimized,
            visible: widget.visible,
        }
    }
}

pub struct WidgetStateManager {
    store: Box<dyn StateStore>,
    dirty: BTreeSet<WidgetId>,
}

impl WidgetStateManager {
    pub fn new(store: Box<dyn StateStore>) -> Self {
        Self {
            store,
            dirty: BTreeSet::new(),
        }
    }

    fn key(id: &WidgetId) -> String {
        format!("{STATE_KEY_PREFIX}{id}")
    }

    /// Mark `id` dirty without touching the store. Called on every
    /// continuous geometry update; the matching [`commit`](Self::commit)
    /// performs the single write.
    pub fn queue_save(&mut self, id: &WidgetId) {
        self.dirty.insert(id.clone());
    }

    pub fn is_dirty(&self, id: &WidgetId) -> bool {
        self.dirty.contains(id)
    }

    /// Write the entry for `id` and clear its dirty mark.
    pub fn commit(&mut self, id: &WidgetId, state: &PersistedWidgetState) {
        self.dirty.remove(id);
        let payload = match serde_json::to_string(state) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(widget = %id, error = %err, "failed to encode layout entry");
                return;
            }
        };
        if let Err(err) = self.store.set(&Self::key(id), &payload) {
            tracing::warn!(widget = %id, error = %err, "failed to persist layout entry");
        }
    }

    /// Read back the entry for `id`. Absent or unreadable entries yield
    /// `None` and the caller falls back to its default.
    pub fn restore(&mut self, id: &WidgetId) -> Option<PersistedWidgetState> {
        let raw = match self.store.get(&Self::key(id)) {
            Ok(raw) => raw?,
            Err(err) => {
                tracing::warn!(widget = %id, error = %err, "failed to read layout entry");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(state) => Some(state),
            Err(err) => {
                tracing::warn!(widget = %id, error = %err, "discarding malformed layout entry");
                None
            }
        }
    }

    /// Drop the dirty mark for a widget that went away without a settle.
    pub fn discard(&mut self, id: &WidgetId) {
        self.dirty.remove(id);
    }

    /// Keys changed in the underlying store since the last drain.
    pub fn take_changed_keys(&mut self) -> Vec<String> {
        self.store.take_changed_keys()
    }
}

impl std::fmt::Debug for WidgetStateManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetStateManager")
            .field("dirty", &self.dirty)
            .finish_non_exhaustive()
    }
}
