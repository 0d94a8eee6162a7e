//! overlay-wm: a floating widget window manager for host-page overlays.
//!
//! The runtime coordinates multiple independently draggable, resizable,
//! focusable, stackable widget panels on top of a host surface: geometry and
//! z-order, layout persistence across reloads, keyboard shortcut routing,
//! theming, and a legacy-compatible adapter surface. The host surface and
//! the persistence backend stay behind driver traits, so the whole runtime
//! runs headless in tests.

pub mod constants;
pub mod drivers;
pub mod error;
pub mod events;
pub mod geometry;
pub mod input;
pub mod integration;
pub mod logging;
pub mod manager;
pub mod managers;
pub mod widget;

pub use drivers::{HeadlessElement, HostElement, MemoryStore, StateStore};
pub use error::{StoreError, WidgetError};
pub use events::{EventChannel, WidgetEvent, WidgetEventBus};
pub use geometry::{Bounds, Point, Size};
pub use input::PointerEvent;
pub use integration::{IntegrationStatus, WidgetManagerIntegration};
pub use manager::EnhancedWidgetManager;
pub use managers::{KeyCombo, ResizeEdge, ShortcutScope};
pub use widget::{Widget, WidgetConfig, WidgetId};
