//! Pointer-drag-to-resize via eight directional handles.

use serde::{Deserialize, Serialize};

use crate::geometry::{Bounds, Point, Size};
use crate::input::PointerEvent;
use crate::widget::WidgetId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeEdge {
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 8] = [
        ResizeEdge::Left,
        ResizeEdge::Right,
        ResizeEdge::Top,
        ResizeEdge::Bottom,
        ResizeEdge::TopLeft,
        ResizeEdge::TopRight,
        ResizeEdge::BottomLeft,
        ResizeEdge::BottomRight,
    ];

    fn affects_left(self) -> bool {
        matches!(
            self,
            ResizeEdge::Left | ResizeEdge::TopLeft | ResizeEdge::BottomLeft
        )
    }

    fn affects_right(self) -> bool {
        matches!(
            self,
            ResizeEdge::Right | ResizeEdge::TopRight | ResizeEdge::BottomRight
        )
    }

    fn affects_top(self) -> bool {
        matches!(
            self,
            ResizeEdge::Top | ResizeEdge::TopLeft | ResizeEdge::TopRight
        )
    }

    fn affects_bottom(self) -> bool {
        matches!(
            self,
            ResizeEdge::Bottom | ResizeEdge::BottomLeft | ResizeEdge::BottomRight
        )
    }
}

/// Hit zone of one resize handle, in host pixels.
#[derive(Debug, Clone, Copy)]
pub struct HandleZone {
    pub edge: ResizeEdge,
    pub rect: Bounds,
}

/// The eight handle hit zones around `bounds`. Corner zones win over edge
/// zones on hit testing because they come first.
pub fn handle_zones(bounds: Bounds, grip: u16) -> Vec<HandleZone> {
    let g = i32::from(grip);
    let right = bounds.right() - g;
    let bottom = bounds.bottom() - g;
    let inner_w = bounds.width.saturating_sub(grip * 2);
    let inner_h = bounds.height.saturating_sub(grip * 2);
    vec![
        HandleZone {
            edge: ResizeEdge::TopLeft,
            rect: Bounds::new(bounds.x, bounds.y, grip, grip),
        },
        HandleZone {
            edge: ResizeEdge::TopRight,
            rect: Bounds::new(right, bounds.y, grip, grip),
        },
        HandleZone {
            edge: ResizeEdge::BottomLeft,
            rect: Bounds::new(bounds.x, bottom, grip, grip),
        },
        HandleZone {
            edge: ResizeEdge::BottomRight,
            rect: Bounds::new(right, bottom, grip, grip),
        },
        HandleZone {
            edge: ResizeEdge::Top,
            rect: Bounds::new(bounds.x + g, bounds.y, inner_w, grip),
        },
        HandleZone {
            edge: ResizeEdge::Bottom,
            rect: Bounds::new(bounds.x + g, bottom, inner_w, grip),
        },
        HandleZone {
            edge: ResizeEdge::Left,
            rect: Bounds::new(bounds.x, bounds.y + g, grip, inner_h),
        },
        HandleZone {
            edge: ResizeEdge::Right,
            rect: Bounds::new(right, bounds.y + g, grip, inner_h),
        },
    ]
}

pub fn hit_test_handle(zones: &[HandleZone], x: i32, y: i32) -> Option<ResizeEdge> {
    zones
        .iter()
        .find(|zone| zone.rect.contains(x, y))
        .map(|zone| zone.edge)
}

/// Resize `origin` by the pointer delta on `edge`, clamping each dimension
/// to `[min, max]`. The edge/corner opposite the handle stays fixed even at
/// the clamp: clamping a left/top resize re-anchors the origin.
pub fn apply_resize(
    origin: Bounds,
    edge: ResizeEdge,
    dx: i32,
    dy: i32,
    min: Size,
    max: Size,
) -> Bounds {
    let mut x = origin.x;
    let mut y = origin.y;
    let mut width = i32::from(origin.width);
    let mut height = i32::from(origin.height);

    if edge.affects_left() {
        x += dx;
        width -= dx;
    } else if edge.affects_right() {
        width += dx;
    }
    if edge.affects_top() {
        y += dy;
        height -= dy;
    } else if edge.affects_bottom() {
        height += dy;
    }

    let clamped_w = width.clamp(i32::from(min.width).max(1), i32::from(max.width));
    if edge.affects_left() {
        // keep the right edge fixed through the clamp
        x += width - clamped_w;
    }
    let clamped_h = height.clamp(i32::from(min.height).max(1), i32::from(max.height));
    if edge.affects_top() {
        y += height - clamped_h;
    }

    Bounds::new(x, y, clamped_w as u16, clamped_h as u16)
}

/// State held across the pointer-move callbacks of one resize.
#[derive(Debug, Clone)]
pub struct ResizeSession {
    pub id: WidgetId,
    pub edge: ResizeEdge,
    pointer_origin: Point,
    widget_origin: Bounds,
}

#[derive(Debug, Default)]
pub struct ResizeManager {
    session: Option<ResizeSession>,
}

impl ResizeManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_resizing(&self) -> bool {
        self.session.is_some()
    }

    pub fn resizing(&self) -> Option<&WidgetId> {
        self.session.as_ref().map(|session| &session.id)
    }

    pub fn active_edge(&self) -> Option<ResizeEdge> {
        self.session.as_ref().map(|session| session.edge)
    }

    pub fn begin(
        &mut self,
        id: WidgetId,
        edge: ResizeEdge,
        origin: Bounds,
        pointer: PointerEvent,
    ) -> bool {
        if self.session.is_some() {
            return false;
        }
        tracing::debug!(widget = %id, ?edge, "resize begin");
        self.session = Some(ResizeSession {
            id,
            edge,
            pointer_origin: pointer.position(),
            widget_origin: origin,
        });
        true
    }

    /// Recompute bounds for the current pointer, clamped to the widget's
    /// size limits. No-op without an active session.
    pub fn update(
        &self,
        pointer: PointerEvent,
        min: Size,
        max: Size,
    ) -> Option<(WidgetId, Bounds)> {
        let session = self.session.as_ref()?;
        let (dx, dy) = pointer.position().delta_from(session.pointer_origin);
        let bounds = apply_resize(session.widget_origin, session.edge, dx, dy, min, max);
        Some((session.id.clone(), bounds))
    }

    pub fn end(&mut self) -> Option<WidgetId> {
        let session = self.session.take()?;
        tracing::debug!(widget = %session.id, "resize end");
        Some(session.id)
    }

    pub fn cancel(&mut self, id: &WidgetId) {
        if self.session.as_ref().is_some_and(|session| session.id == *id) {
            tracing::debug!(widget = %id, "resize cancelled");
            self.session = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::RESIZE_GRIP;

    const MIN: Size = Size {
        width: 48,
        height: 32,
    };
    const MAX: Size = Size {
        width: 1000,
        height: 1000,
    };

    #[test]
    fn east_resize_never_moves_origin() {
        let origin = Bounds::new(50, 50, 300, 200);
        let resized = apply_resize(origin, ResizeEdge::Right, 40, 25, MIN, MAX);
        assert_eq!(resized, Bounds::new(50, 50, 340, 200));
    }

    #[test]
    fn south_east_resize_grows_both_dimensions() {
        let origin = Bounds::new(200, 120, 100, 100);
        let resized = apply_resize(origin, ResizeEdge::BottomRight, 50, 50, MIN, MAX);
        assert_eq!(resized, Bounds::new(200, 120, 150, 150));
    }

    #[test]
    fn north_west_resize_keeps_bottom_right_corner() {
        let origin = Bounds::new(100, 100, 200, 150);
        let resized = apply_resize(origin, ResizeEdge::TopLeft, -30, -20, MIN, MAX);
        assert_eq!(resized, Bounds::new(70, 80, 230, 170));
        assert_eq!(resized.right(), origin.right());
        assert_eq!(resized.bottom(), origin.bottom());
    }

    #[test]
    fn min_clamp_keeps_opposite_edge_fixed() {
        let origin = Bounds::new(100, 100, 200, 150);
        // drag the left edge far past the right edge
        let resized = apply_resize(origin, ResizeEdge::Left, 500, 0, MIN, MAX);
        assert_eq!(resized.width, MIN.width);
        assert_eq!(resized.right(), origin.right());
    }

    #[test]
    fn max_clamp_keeps_opposite_edge_fixed() {
        let origin = Bounds::new(100, 100, 200, 150);
        let resized = apply_resize(origin, ResizeEdge::TopLeft, -5000, -5000, MIN, MAX);
        assert_eq!(resized.size(), MAX);
        assert_eq!(resized.right(), origin.right());
        assert_eq!(resized.bottom(), origin.bottom());
    }

    #[test]
    fn top_resize_moves_origin_with_height() {
        let origin = Bounds::new(0, 50, 20, 20);
        let loose_min = Size::new(5, 5);
        let resized = apply_resize(origin, ResizeEdge::Top, 0, 5, loose_min, MAX);
        assert_eq!(resized, Bounds::new(0, 55, 20, 15));
        let resized = apply_resize(origin, ResizeEdge::Top, 0, -5, loose_min, MAX);
        assert_eq!(resized, Bounds::new(0, 45, 20, 25));
    }

    #[test]
    fn session_flow_mirrors_drag() {
        let mut resize = ResizeManager::new();
        let origin = Bounds::new(200, 120, 100, 100);
        assert!(resize.begin(
            WidgetId::from("w"),
            ResizeEdge::BottomRight,
            origin,
            PointerEvent::new(300, 220),
        ));
        assert!(!resize.begin(
            WidgetId::from("other"),
            ResizeEdge::Left,
            origin,
            PointerEvent::new(0, 0),
        ));
        let (id, bounds) = resize.update(PointerEvent::new(350, 270), MIN, MAX).unwrap();
        assert_eq!(id.as_str(), "w");
        assert_eq!(bounds, Bounds::new(200, 120, 150, 150));
        assert_eq!(resize.end().unwrap().as_str(), "w");
        assert!(resize.update(PointerEvent::new(0, 0), MIN, MAX).is_none());
    }

    #[test]
    fn eight_zones_cover_corners_and_edges() {
        let zones = handle_zones(Bounds::new(0, 0, 100, 80), RESIZE_GRIP);
        assert_eq!(zones.len(), 8);
        assert_eq!(hit_test_handle(&zones, 0, 0), Some(ResizeEdge::TopLeft));
        assert_eq!(hit_test_handle(&zones, 99, 79), Some(ResizeEdge::BottomRight));
        assert_eq!(hit_test_handle(&zones, 50, 0), Some(ResizeEdge::Top));
        assert_eq!(hit_test_handle(&zones, 0, 40), Some(ResizeEdge::Left));
        assert_eq!(hit_test_handle(&zones, 99, 40), Some(ResizeEdge::Right));
        assert_eq!(hit_test_handle(&zones, 50, 79), Some(ResizeEdge::Bottom));
        // interior is not a handle
        assert_eq!(hit_test_handle(&zones, 50, 40), None);
    }
}
