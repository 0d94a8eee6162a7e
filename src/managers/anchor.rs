//! Animation anchor rects for minimize/restore transitions.
//!
//! Pure geometry: the manager carries only dock metrics and computes target
//! rects from the widget state and viewport it is given.

use crate::constants::{DOCK_GAP, DOCK_SLOT_HEIGHT, DOCK_SLOT_WIDTH};
use crate::geometry::{Bounds, Size};
use crate::widget::Widget;

#[derive(Debug, Clone, Copy)]
pub struct AnimationAnchorManager {
    slot_width: u16,
    slot_height: u16,
    gap: u16,
}

impl Default for AnimationAnchorManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationAnchorManager {
    pub fn new() -> Self {
        Self {
            slot_width: DOCK_SLOT_WIDTH,
            slot_height: DOCK_SLOT_HEIGHT,
            gap: DOCK_GAP,
        }
    }

    pub fn with_slot_size(slot: Size, gap: u16) -> Self {
        Self {
            slot_width: slot.width,
            slot_height: slot.height,
            gap,
        }
    }

    /// Target rect of dock slot `slot` along the bottom viewport edge,
    /// slots running left to right.
    pub fn minimize_anchor(&self, slot: usize, viewport: Size) -> Bounds {
        let stride = i32::from(self.slot_width) + i32::from(self.gap);
        let x = i32::from(self.gap) + slot as i32 * stride;
        let y = i32::from(viewport.height) - i32::from(self.slot_height) - i32::from(self.gap);
        Bounds::new(x, y.max(0), self.slot_width, self.slot_height)
    }

    /// Target rect of a restore transition: the widget's full bounds.
    pub fn restore_anchor(&self, widget: &Widget) -> Bounds {
        widget.bounds
    }
}
