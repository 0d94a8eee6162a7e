//! Shared crate-wide constants.

use crate::geometry::{Bounds, Size};

/// Minimum number of pixels of a widget that must stay inside the viewport
/// on each axis so the user can grab its chrome again.
pub const BOUNDARY_PADDING: u16 = 16;

/// Geometry used for widgets registered without explicit bounds and without
/// a persisted layout entry.
pub const DEFAULT_BOUNDS: Bounds = Bounds {
    x: 32,
    y: 32,
    width: 320,
    height: 240,
};

/// Default size constraints applied when a widget config does not override
/// them. Interactive and programmatic resizes clamp into this range.
pub const MIN_SIZE: Size = Size {
    width: 48,
    height: 32,
};
pub const MAX_SIZE: Size = Size {
    width: 3840,
    height: 2160,
};

/// Thickness, in pixels, of the hit zones for the eight resize handles.
pub const RESIZE_GRIP: u16 = 8;

/// Dock slot metrics for minimized widgets. Slots are laid out left to
/// right along the bottom viewport edge.
pub const DOCK_SLOT_WIDTH: u16 = 160;
pub const DOCK_SLOT_HEIGHT: u16 = 32;
pub const DOCK_GAP: u16 = 8;

/// Viewport assumed until the host reports a real one.
pub const DEFAULT_VIEWPORT: Size = Size {
    width: 1280,
    height: 800,
};

/// Key prefix for persisted per-widget layout entries.
pub const STATE_KEY_PREFIX: &str = "overlay-wm/widget/";
