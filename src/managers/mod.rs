//! Sub-managers owned by the enhanced widget manager.
//!
//! Each manager keeps only its own bookkeeping; the registry stays with the
//! owner, which passes a call the data it needs. Cross-manager dependencies
//! are explicit `&mut` parameters, never ambient lookups.

pub mod anchor;
pub mod drag;
pub mod focus;
pub mod keyboard;
pub mod resize;
pub mod state;
pub mod theme;
pub mod zindex;

pub use anchor::AnimationAnchorManager;
pub use drag::{DragManager, DragSession};
pub use focus::{FocusChange, FocusManager};
pub use keyboard::{KeyCombo, KeyboardManager, ShortcutScope};
pub use resize::{HandleZone, ResizeEdge, ResizeManager, ResizeSession};
pub use state::{PersistedWidgetState, WidgetStateManager};
pub use theme::{Theme, ThemeApplicationManager};
pub use zindex::ZIndexManager;
