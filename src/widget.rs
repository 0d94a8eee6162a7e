//! Widget identity, registration config, and the registry record.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BOUNDS, MAX_SIZE, MIN_SIZE};
use crate::drivers::HostElement;
use crate::geometry::{Bounds, Size};

/// Identity of a registered widget. Caller-supplied or generated from a
/// monotonic sequence at registration.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(String);

impl WidgetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WidgetId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for WidgetId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Registration parameters for a widget container.
pub struct WidgetConfig {
    pub id: Option<WidgetId>,
    pub element: Rc<dyn HostElement>,
    /// Initial bounds when no persisted layout entry exists.
    pub bounds: Option<Bounds>,
    pub draggable: bool,
    pub resizable: bool,
    pub min_size: Size,
    pub max_size: Size,
}

impl WidgetConfig {
    pub fn new(element: Rc<dyn HostElement>) -> Self {
        Self {
            id: None,
            element,
            bounds: None,
            draggable: true,
            resizable: true,
            min_size: MIN_SIZE,
            max_size: MAX_SIZE,
        }
    }

    pub fn with_id(mut self, id: impl Into<WidgetId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    pub fn resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    pub fn with_size_limits(mut self, min: Size, max: Size) -> Self {
        self.min_size = min;
        self.max_size = max;
        self
    }
}

/// Live registry entry. Mutated only by the owning manager; sub-managers
/// receive the fields a call needs and hand results back.
pub struct Widget {
    pub id: WidgetId,
    pub element: Rc<dyn HostElement>,
    pub bounds: Bounds,
    pub z_index: i32,
    pub minimized: bool,
    pub visible: bool,
    pub draggable: bool,
    pub resizable: bool,
    pub min_size: Size,
    pub max_size: Size,
    /// Dock position while minimized.
    pub(crate) dock_slot: Option<usize>,
}

impl Widget {
    pub(crate) fn from_config(id: WidgetId, config: WidgetConfig, z_index: i32) -> Self {
        let bounds = config.bounds.unwrap_or(DEFAULT_BOUNDS);
        Self {
            id,
            element: config.element,
            bounds,
            z_index,
            minimized: false,
            visible: true,
            draggable: config.draggable,
            resizable: config.resizable,
            min_size: config.min_size,
            max_size: config.max_size,
            dock_slot: None,
        }
    }
}

impl fmt::Debug for Widget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Widget")
            .field("id", &self.id)
            .field("bounds", &self.bounds)
            .field("z_index", &self.z_index)
            .field("minimized", &self.minimized)
            .field("visible", &self.visible)
            .field("draggable", &self.draggable)
            .field("resizable", &self.resizable)
            .finish_non_exhaustive()
    }
}
