//! Input event types delivered by the host.
//!
//! Keyboard input reuses the crossterm event vocabulary; pointer input is a
//! plain position in host pixels (the host owns buttons and hit ordering).

pub use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub x: i32,
    pub y: i32,
}

impl PointerEvent {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl From<Point> for PointerEvent {
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}
