//! Host surface driver.
//!
//! Each widget is backed by one container on the host surface. The runtime
//! never assumes anything about the host beyond this handle and the viewport
//! size reported to the manager.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::geometry::Bounds;

/// Handle to a widget's container on the host surface.
///
/// Methods take `&self`: handles are shared (`Rc`) between the registry and
/// host code, so implementations use interior mutability.
pub trait HostElement {
    /// Reposition/resize the container. Called on every settled geometry
    /// change and continuously during drag/resize sessions.
    fn apply_bounds(&self, bounds: Bounds);
    fn set_visible(&self, visible: bool);
    fn set_z_index(&self, z: i32);
    /// Swap the container's visual theme class.
    fn set_theme_class(&self, class: &str);
    /// Remove the container from the host. The handle is dead afterwards.
    fn detach(&self);
}

/// Recorded state of a [`HeadlessElement`].
#[derive(Debug, Clone, Default)]
pub struct ElementState {
    pub bounds: Option<Bounds>,
    pub visible: bool,
    pub z_index: i32,
    pub theme_class: Option<String>,
    pub detached: bool,
    /// Number of `apply_bounds` calls observed.
    pub bounds_writes: usize,
}

/// In-memory element for hosts without a real surface and for tests.
#[derive(Default)]
pub struct HeadlessElement {
    state: RefCell<ElementState>,
}

impl HeadlessElement {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn state(&self) -> ElementState {
        self.state.borrow().clone()
    }
}

impl fmt::Debug for HeadlessElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeadlessElement")
            .field("state", &self.state.borrow())
            .finish()
    }
}

impl HostElement for HeadlessElement {
    fn apply_bounds(&self, bounds: Bounds) {
        let mut state = self.state.borrow_mut();
        state.bounds = Some(bounds);
        state.bounds_writes += 1;
    }

    fn set_visible(&self, visible: bool) {
        self.state.borrow_mut().visible = visible;
    }

    fn set_z_index(&self, z: i32) {
        self.state.borrow_mut().z_index = z;
    }

    fn set_theme_class(&self, class: &str) {
        self.state.borrow_mut().theme_class = Some(class.to_string());
    }

    fn detach(&self) {
        self.state.borrow_mut().detached = true;
    }
}
