//! The unified widget lifecycle API.
//!
//! `EnhancedWidgetManager` owns the registry and one instance of every
//! sub-manager. Host code reports pointer/keyboard events here; the manager
//! orchestrates the sub-managers through their public methods and announces
//! the results on the event bus.

use std::collections::{BTreeMap, BTreeSet};

use crate::constants::{DEFAULT_VIEWPORT, RESIZE_GRIP};
use crate::drivers::StateStore;
use crate::error::WidgetError;
use crate::events::{WidgetEvent, WidgetEventBus};
use crate::geometry::{Bounds, Size};
use crate::input::{KeyEvent, PointerEvent};
use crate::managers::keyboard::ShortcutHandler;
use crate::managers::resize::{handle_zones, hit_test_handle};
use crate::managers::{
    AnimationAnchorManager, DragManager, FocusManager, HandleZone, KeyCombo, KeyboardManager,
    PersistedWidgetState, ResizeEdge, ResizeManager, ShortcutScope, ThemeApplicationManager,
    WidgetStateManager, ZIndexManager,
};
use crate::widget::{Widget, WidgetConfig, WidgetId};

enum PointerHit {
    Resize(WidgetId, ResizeEdge),
    Drag(WidgetId),
    Focus(WidgetId),
}

pub struct EnhancedWidgetManager {
    widgets: BTreeMap<WidgetId, Widget>,
    drag: DragManager,
    resize: ResizeManager,
    z_order: ZIndexManager,
    focus: FocusManager,
    state: WidgetStateManager,
    themes: ThemeApplicationManager,
    keyboard: KeyboardManager,
    anchors: AnimationAnchorManager,
    bus: WidgetEventBus,
    viewport: Size,
    next_widget_seq: usize,
}

impl EnhancedWidgetManager {
    pub fn new(store: Box<dyn StateStore>) -> Self {
        Self::with_viewport(store, DEFAULT_VIEWPORT)
    }

    pub fn with_viewport(store: Box<dyn StateStore>, viewport: Size) -> Self {
        Self {
            widgets: BTreeMap::new(),
            drag: DragManager::new(),
            resize: ResizeManager::new(),
            z_order: ZIndexManager::new(),
            focus: FocusManager::new(),
            state: WidgetStateManager::new(store),
            themes: ThemeApplicationManager::new(),
            keyboard: KeyboardManager::new(),
            anchors: AnimationAnchorManager::new(),
            bus: WidgetEventBus::new(),
            viewport,
            next_widget_seq: 0,
        }
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Register a widget container. Restores the persisted layout entry when
    /// one exists, assigns the initial z-index, and announces the widget on
    /// `widget:registered`. Returns the assigned id.
    pub fn register_widget(&mut self, config: WidgetConfig) -> WidgetId {
        let id = match config.id.clone() {
            Some(id) => id,
            None => self.generate_id(),
        };
        if self.widgets.contains_key(&id) {
            tracing::warn!(widget = %id, "widget id re-registered while live; closing previous instance");
            self.close(&id);
        }
        let z = self.z_order.assign(id.clone());
        let mut widget = Widget::from_config(id.clone(), config, z);
        if let Some(persisted) = self.state.restore(&id) {
            let size = Size::new(
                persisted
                    .bounds
                    .width
                    .clamp(widget.min_size.width, widget.max_size.width),
                persisted
                    .bounds
                    .height
                    .clamp(widget.min_size.height, widget.max_size.height),
            );
            widget.bounds = persisted
                .bounds
                .with_size(size)
                .clamp_to_viewport(self.viewport, self.drag.boundary_padding());
            widget.minimized = persisted.minimized;
            widget.visible = persisted.visible;
        }
        widget.element.apply_bounds(widget.bounds);
        widget.element.set_z_index(z);
        widget.element.set_theme_class(self.themes.active_class());
        widget.element.set_visible(widget.visible && !widget.minimized);
        let minimized = widget.minimized;
        self.widgets.insert(id.clone(), widget);
        if minimized {
            self.assign_dock_slot(&id);
        }
        tracing::debug!(widget = %id, z, "widget registered");
        self.bus
            .publish(&WidgetEvent::WidgetRegistered { id: id.clone() });
        id
    }

    /// Unregister a widget from every sub-manager, persist its final state
    /// if visible, and remove its host presence. Closing an unknown id is a
    /// no-op.
    pub fn close(&mut self, id: &WidgetId) {
        let Some(widget) = self.widgets.remove(id) else {
            tracing::debug!(widget = %id, "close on unknown widget ignored");
            return;
        };
        tracing::debug!(widget = %id, "closing widget");
        self.drag.cancel(id);
        self.resize.cancel(id);
        self.keyboard.release_widget(id);
        if widget.visible {
            self.state.commit(id, &PersistedWidgetState::from(&widget));
        } else {
            self.state.discard(id);
        }
        self.z_order.release(id);
        if let Some(change) = self.focus.release(id) {
            self.bus.publish(&WidgetEvent::FocusChanged {
                previous: change.previous,
                current: change.current,
            });
        }
        widget.element.detach();
        self.bus.publish(&WidgetEvent::WidgetClosed { id: id.clone() });
    }

    fn generate_id(&mut self) -> WidgetId {
        loop {
            self.next_widget_seq += 1;
            let id = WidgetId::new(format!("widget-{}", self.next_widget_seq));
            if !self.widgets.contains_key(&id) {
                return id;
            }
        }
    }

    // -----------------------------------------------------------------------
    // Drag
    // -----------------------------------------------------------------------

    /// Start dragging `id`. Focuses and raises the widget first. Refused
    /// while any pointer session is active, for non-draggable or minimized
    /// widgets, and for unknown ids.
    pub fn begin_drag(&mut self, id: &WidgetId, pointer: PointerEvent) -> Result<(), WidgetError> {
        if self.pointer_session_active() {
            return Err(WidgetError::SessionActive);
        }
        let Some(widget) = self.widgets.get(id) else {
            return Err(WidgetError::UnknownWidget(id.clone()));
        };
        if !widget.draggable || widget.minimized {
            return Err(WidgetError::NotDraggable(id.clone()));
        }
        let origin = widget.bounds;
        self.focus_widget(id);
        if !self.drag.begin(id.clone(), origin, pointer) {
            return Err(WidgetError::SessionActive);
        }
        self.bus.publish(&WidgetEvent::DragStart {
            id: id.clone(),
            bounds: origin,
        });
        Ok(())
    }

    /// Apply the current pointer to the active drag. Geometry lands on the
    /// host element before the call returns; the store write waits for the
    /// settle. No-op without an active session.
    pub fn update_drag(&mut self, pointer: PointerEvent) {
        let Some((id, bounds)) = self.drag.update(pointer, self.viewport) else {
            return;
        };
        if let Some(widget) = self.widgets.get_mut(&id) {
            widget.bounds = bounds;
            widget.element.apply_bounds(bounds);
        }
        self.state.queue_save(&id);
    }

    /// Settle the active drag: commit bounds to the store and announce
    /// `drag:end`.
    pub fn end_drag(&mut self) -> Option<WidgetId> {
        let id = self.drag.end()?;
        let bounds = self.commit_widget_state(&id)?;
        self.bus.publish(&WidgetEvent::DragEnd {
            id: id.clone(),
            bounds,
        });
        Some(id)
    }

    // -----------------------------------------------------------------------
    // Resize
    // -----------------------------------------------------------------------

    /// Start resizing `id` from `edge`. Same admission rules as
    /// [`begin_drag`](Self::begin_drag), plus the widget must be resizable.
    pub fn begin_resize(
        &mut self,
        id: &WidgetId,
        edge: ResizeEdge,
        pointer: PointerEvent,
    ) -> Result<(), WidgetError> {
        if self.pointer_session_active() {
            return Err(WidgetError::SessionActive);
        }
        let Some(widget) = self.widgets.get(id) else {
            return Err(WidgetError::UnknownWidget(id.clone()));
        };
        if !widget.resizable || widget.minimized {
            return Err(WidgetError::NotResizable(id.clone()));
        }
        let origin = widget.bounds;
        self.focus_widget(id);
        if !self.resize.begin(id.clone(), edge, origin, pointer) {
            return Err(WidgetError::SessionActive);
        }
        self.bus.publish(&WidgetEvent::ResizeStart {
            id: id.clone(),
            edge,
            bounds: origin,
        });
        Ok(())
    }

    /// Apply the current pointer to the active resize. No-op without an
    /// active session.
    pub fn update_resize(&mut self, pointer: PointerEvent) {
        let Some(limits) = self
            .resize
            .resizing()
            .and_then(|id| self.widgets.get(id))
            .map(|widget| (widget.min_size, widget.max_size))
        else {
            return;
        };
        let Some((id, bounds)) = self.resize.update(pointer, limits.0, limits.1) else {
            return;
        };
        if let Some(widget) = self.widgets.get_mut(&id) {
            widget.bounds = bounds;
            widget.element.apply_bounds(bounds);
        }
        self.state.queue_save(&id);
    }

    /// Settle the active resize: commit bounds and announce `resize:end`.
    pub fn end_resize(&mut self) -> Option<WidgetId> {
        let id = self.resize.end()?;
        let bounds = self.commit_widget_state(&id)?;
        self.bus.publish(&WidgetEvent::ResizeEnd {
            id: id.clone(),
            bounds,
        });
        Some(id)
    }

    fn commit_widget_state(&mut self, id: &WidgetId) -> Option<Bounds> {
        let widget = self.widgets.get(id)?;
        let snapshot = PersistedWidgetState::from(widget);
        self.state.commit(id, &snapshot);
        Some(snapshot.bounds)
    }

    // -----------------------------------------------------------------------
    // Pointer routing
    // -----------------------------------------------------------------------

    /// Route a pointer-down. The topmost widget under the pointer wins; a
    /// resize handle wins over the widget body. Returns true when consumed.
    pub fn pointer_down(&mut self, pointer: PointerEvent) -> bool {
        let mut hit = None;
        for id in self.stacking_order().iter().rev() {
            let Some(widget) = self.widgets.get(id) else {
                continue;
            };
            if widget.minimized || !widget.visible {
                continue;
            }
            if widget.resizable
                && let Some(edge) = hit_test_handle(
                    &handle_zones(widget.bounds, RESIZE_GRIP),
                    pointer.x,
                    pointer.y,
                )
            {
                hit = Some(PointerHit::Resize(id.clone(), edge));
                break;
            }
            if widget.bounds.contains(pointer.x, pointer.y) {
                hit = Some(if widget.draggable {
                    PointerHit::Drag(id.clone())
                } else {
                    PointerHit::Focus(id.clone())
                });
                break;
            }
        }
        match hit {
            Some(PointerHit::Resize(id, edge)) => self.begin_resize(&id, edge, pointer).is_ok(),
            Some(PointerHit::Drag(id)) => self.begin_drag(&id, pointer).is_ok(),
            Some(PointerHit::Focus(id)) => self.focus_widget(&id),
            None => false,
        }
    }

    /// Route a pointer-move into whichever session is active.
    pub fn pointer_move(&mut self, pointer: PointerEvent) {
        self.update_drag(pointer);
        self.update_resize(pointer);
    }

    /// Route a pointer-up: settles the active session, if any.
    pub fn pointer_up(&mut self) {
        if self.drag.is_dragging() {
            self.end_drag();
        }
        if self.resize.is_resizing() {
            self.end_resize();
        }
    }

    pub fn pointer_session_active(&self) -> bool {
        self.drag.is_dragging() || self.resize.is_resizing()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn is_resizing(&self) -> bool {
        self.resize.is_resizing()
    }

    // -----------------------------------------------------------------------
    // Focus and stacking
    // -----------------------------------------------------------------------

    /// Focus `id`, raising it to the front, and announce `focus:changed`.
    pub fn focus_widget(&mut self, id: &WidgetId) -> bool {
        if !self.widgets.contains_key(id) {
            return false;
        }
        let change = self.focus.focus(id.clone(), &mut self.z_order);
        self.sync_z(id);
        if let Some(change) = change {
            self.bus.publish(&WidgetEvent::FocusChanged {
                previous: change.previous,
                current: change.current,
            });
        }
        true
    }

    /// Clear focus if `id` still holds it; stale blurs are ignored.
    pub fn blur_widget(&mut self, id: &WidgetId) -> bool {
        match self.focus.blur(id) {
            Some(change) => {
                self.bus.publish(&WidgetEvent::FocusChanged {
                    previous: change.previous,
                    current: change.current,
                });
                true
            }
            None => false,
        }
    }

    pub fn bring_to_front(&mut self, id: &WidgetId) -> bool {
        if self.z_order.bring_to_front(id).is_none() {
            return false;
        }
        self.sync_z(id);
        true
    }

    fn sync_z(&mut self, id: &WidgetId) {
        if let Some(z) = self.z_order.z_index(id)
            && let Some(widget) = self.widgets.get_mut(id)
        {
            widget.z_index = z;
            widget.element.set_z_index(z);
        }
    }

    pub fn focused_widget(&self) -> Option<&WidgetId> {
        self.focus.focused()
    }

    /// Ids ordered back to front.
    pub fn stacking_order(&self) -> Vec<WidgetId> {
        self.z_order.stacking_order()
    }

    pub fn front_widget(&self) -> Option<&WidgetId> {
        self.z_order.front()
    }

    pub fn z_index(&self, id: &WidgetId) -> Option<i32> {
        self.z_order.z_index(id)
    }

    // -----------------------------------------------------------------------
    // Minimize / restore / programmatic geometry
    // -----------------------------------------------------------------------

    /// Minimize `id`: hide it, park it on a dock slot, persist. No-op for
    /// unknown or already-minimized ids.
    pub fn minimize_widget(&mut self, id: &WidgetId) {
        {
            let Some(widget) = self.widgets.get_mut(id) else {
                return;
            };
            if widget.minimized {
                return;
            }
            widget.minimized = true;
            widget.element.set_visible(false);
        }
        self.drag.cancel(id);
        self.resize.cancel(id);
        self.assign_dock_slot(id);
        self.commit_widget_state(id);
    }

    /// Reverse a minimize: show the widget at its full bounds, free the dock
    /// slot, persist, and bring it back to front.
    pub fn restore_widget(&mut self, id: &WidgetId) {
        {
            let Some(widget) = self.widgets.get_mut(id) else {
                return;
            };
            if !widget.minimized {
                return;
            }
            widget.minimized = false;
            widget.dock_slot = None;
            widget.visible = true;
            widget.element.set_visible(true);
            widget.element.apply_bounds(widget.bounds);
        }
        self.commit_widget_state(id);
        self.focus_widget(id);
    }

    /// Programmatic resize, clamped to the widget's size limits with the
    /// origin fixed. Persists on completion.
    pub fn resize_widget(&mut self, id: &WidgetId, size: Size) {
        {
            let Some(widget) = self.widgets.get_mut(id) else {
                return;
            };
            let clamped = Size::new(
                size.width.clamp(widget.min_size.width, widget.max_size.width),
                size.height
                    .clamp(widget.min_size.height, widget.max_size.height),
            );
            widget.bounds = widget.bounds.with_size(clamped);
            widget.element.apply_bounds(widget.bounds);
        }
        self.commit_widget_state(id);
    }

    /// Programmatic move/resize, clamped like an interactive session.
    pub fn set_widget_bounds(&mut self, id: &WidgetId, bounds: Bounds) {
        let pad = self.drag.boundary_padding();
        let viewport = self.viewport;
        {
            let Some(widget) = self.widgets.get_mut(id) else {
                return;
            };
            let size = Size::new(
                bounds
                    .width
                    .clamp(widget.min_size.width, widget.max_size.width),
                bounds
                    .height
                    .clamp(widget.min_size.height, widget.max_size.height),
            );
            widget.bounds = bounds.with_size(size).clamp_to_viewport(viewport, pad);
            widget.element.apply_bounds(widget.bounds);
        }
        self.commit_widget_state(id);
    }

    pub fn set_widget_visible(&mut self, id: &WidgetId, visible: bool) {
        {
            let Some(widget) = self.widgets.get_mut(id) else {
                return;
            };
            widget.visible = visible;
            widget.element.set_visible(visible && !widget.minimized);
        }
        self.commit_widget_state(id);
    }

    pub fn set_draggable(&mut self, id: &WidgetId, draggable: bool) -> bool {
        let Some(widget) = self.widgets.get_mut(id) else {
            return false;
        };
        widget.draggable = draggable;
        if !draggable {
            self.drag.cancel(id);
        }
        true
    }

    pub fn set_resizable(&mut self, id: &WidgetId, resizable: bool) -> bool {
        let Some(widget) = self.widgets.get_mut(id) else {
            return false;
        };
        widget.resizable = resizable;
        if !resizable {
            self.resize.cancel(id);
        }
        true
    }

    fn next_dock_slot(&self) -> usize {
        let used: BTreeSet<usize> = self
            .widgets
            .values()
            .filter_map(|widget| widget.dock_slot)
            .collect();
        let mut slot = 0;
        while used.contains(&slot) {
            slot += 1;
        }
        slot
    }

    fn assign_dock_slot(&mut self, id: &WidgetId) {
        let slot = self.next_dock_slot();
        if let Some(widget) = self.widgets.get_mut(id) {
            widget.dock_slot = Some(slot);
        }
    }

    /// Target rect for a minimize transition of `id`: its dock slot, or the
    /// slot it would take.
    pub fn minimize_anchor(&self, id: &WidgetId) -> Option<Bounds> {
        let widget = self.widgets.get(id)?;
        let slot = widget.dock_slot.unwrap_or_else(|| self.next_dock_slot());
        Some(self.anchors.minimize_anchor(slot, self.viewport))
    }

    /// Target rect for a restore transition of `id`: its full bounds.
    pub fn restore_anchor(&self, id: &WidgetId) -> Option<Bounds> {
        self.widgets.get(id).map(|w| self.anchors.restore_anchor(w))
    }

    // -----------------------------------------------------------------------
    // Theme / keyboard / viewport
    // -----------------------------------------------------------------------

    /// Apply a named theme to every registered widget container. Unknown
    /// names fall back to the default theme with a warning.
    pub fn apply_theme(&mut self, name: &str) {
        let theme = self.themes.activate(name);
        for widget in self.widgets.values() {
            widget.element.set_theme_class(&theme.class);
        }
    }

    pub fn active_theme(&self) -> &str {
        self.themes.active()
    }

    pub fn themes_mut(&mut self) -> &mut ThemeApplicationManager {
        &mut self.themes
    }

    pub fn register_shortcut(
        &mut self,
        combo: KeyCombo,
        scope: ShortcutScope,
        handler: ShortcutHandler,
    ) {
        if let ShortcutScope::Widget(id) = &scope
            && !self.widgets.contains_key(id)
        {
            tracing::warn!(widget = %id, "shortcut registered for a widget that is not registered");
        }
        self.keyboard.register(combo, scope, handler);
    }

    /// Dispatch a keyboard event: the focused widget's shortcuts first, then
    /// global ones. Returns whether a handler ran.
    pub fn dispatch_key(&mut self, key: &KeyEvent) -> bool {
        self.keyboard.dispatch(key, self.focus.focused())
    }

    /// Report a new viewport size. Visible widgets stranded outside the new
    /// viewport are pulled back to the visibility margin.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        let pad = self.drag.boundary_padding();
        let mut moved = Vec::new();
        for widget in self.widgets.values_mut() {
            if widget.minimized {
                continue;
            }
            let clamped = widget.bounds.clamp_to_viewport(viewport, pad);
            if clamped != widget.bounds {
                widget.bounds = clamped;
                widget.element.apply_bounds(clamped);
                moved.push(widget.id.clone());
            }
        }
        for id in moved {
            self.commit_widget_state(&id);
        }
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    // -----------------------------------------------------------------------
    // Introspection
    // -----------------------------------------------------------------------

    pub fn widget(&self, id: &WidgetId) -> Option<&Widget> {
        self.widgets.get(id)
    }

    pub fn widget_count(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_registered(&self, id: &WidgetId) -> bool {
        self.widgets.contains_key(id)
    }

    /// The eight resize handle hit zones for `id`; empty for non-resizable
    /// or minimized widgets.
    pub fn handle_zones(&self, id: &WidgetId) -> Vec<HandleZone> {
        match self.widgets.get(id) {
            Some(widget) if widget.resizable && !widget.minimized => {
                handle_zones(widget.bounds, RESIZE_GRIP)
            }
            _ => Vec::new(),
        }
    }

    /// The event bus carrying `drag:*`, `resize:*`, `focus:changed` and
    /// `widget:*` notifications.
    pub fn bus(&self) -> &WidgetEventBus {
        &self.bus
    }

    /// Store keys changed since the last drain.
    pub fn take_changed_keys(&mut self) -> Vec<String> {
        self.state.take_changed_keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::{HeadlessElement, MemoryStore};
    use crate::geometry::Bounds;
    use std::rc::Rc;

    fn manager() -> EnhancedWidgetManager {
        EnhancedWidgetManager::with_viewport(Box::new(MemoryStore::new()), Size::new(800, 600))
    }

    fn register(
        manager: &mut EnhancedWidgetManager,
        id: &str,
        bounds: Bounds,
    ) -> (WidgetId, Rc<HeadlessElement>) {
        let element = HeadlessElement::new();
        let config = WidgetConfig::new(element.clone())
            .with_id(id)
            .with_bounds(bounds);
        let id = manager.register_widget(config);
        (id, element)
    }

    #[test]
    fn generated_ids_are_unique() {
        let mut manager = manager();
        let a = manager.register_widget(WidgetConfig::new(HeadlessElement::new()));
        let b = manager.register_widget(WidgetConfig::new(HeadlessElement::new()));
        assert_ne!(a, b);
        assert_eq!(manager.widget_count(), 2);
    }

    #[test]
    fn close_is_idempotent_and_releases_everything() {
        let mut manager = manager();
        let (id, element) = register(&mut manager, "w", Bounds::new(10, 10, 100, 100));
        manager.focus_widget(&id);
        manager.close(&id);
        assert_eq!(manager.widget_count(), 0);
        assert_eq!(manager.focused_widget(), None);
        assert_eq!(manager.z_index(&id), None);
        assert!(element.state().detached);
        // second close and close of a never-registered id are no-ops
        manager.close(&id);
        manager.close(&WidgetId::from("never"));
        assert_eq!(manager.widget_count(), 0);
    }

    #[test]
    fn drag_and_resize_are_mutually_exclusive() {
        let mut manager = manager();
        let (a, _) = register(&mut manager, "a", Bounds::new(10, 10, 100, 100));
        let (b, _) = register(&mut manager, "b", Bounds::new(300, 10, 100, 100));
        assert!(manager.begin_drag(&a, PointerEvent::new(50, 50)).is_ok());
        assert!(matches!(
            manager.begin_resize(&b, ResizeEdge::Right, PointerEvent::new(399, 60)),
            Err(WidgetError::SessionActive)
        ));
        assert!(matches!(
            manager.begin_drag(&b, PointerEvent::new(320, 20)),
            Err(WidgetError::SessionActive)
        ));
        manager.end_drag();
        assert!(manager
            .begin_resize(&b, ResizeEdge::Right, PointerEvent::new(399, 60))
            .is_ok());
    }

    #[test]
    fn drag_start_focuses_and_raises() {
        let mut manager = manager();
        let (a, _) = register(&mut manager, "a", Bounds::new(10, 10, 100, 100));
        let (b, _) = register(&mut manager, "b", Bounds::new(300, 10, 100, 100));
        assert!(manager.z_index(&b) > manager.z_index(&a));
        manager.begin_drag(&a, PointerEvent::new(50, 50)).unwrap();
        assert_eq!(manager.focused_widget(), Some(&a));
        assert!(manager.z_index(&a) > manager.z_index(&b));
        manager.end_drag();
    }

    #[test]
    fn non_draggable_widget_refuses_drag() {
        let mut manager = manager();
        let element = HeadlessElement::new();
        let id = manager.register_widget(
            WidgetConfig::new(element)
                .with_id("fixed")
                .draggable(false),
        );
        assert!(matches!(
            manager.begin_drag(&id, PointerEvent::new(50, 50)),
            Err(WidgetError::NotDraggable(_))
        ));
        assert!(matches!(
            manager.begin_drag(&WidgetId::from("ghost"), PointerEvent::new(50, 50)),
            Err(WidgetError::UnknownWidget(_))
        ));
    }

    #[test]
    fn minimize_then_restore_roundtrips_geometry() {
        let mut manager = manager();
        let (id, element) = register(&mut manager, "w", Bounds::new(40, 40, 200, 150));
        manager.minimize_widget(&id);
        assert!(manager.widget(&id).unwrap().minimized);
        assert!(!element.state().visible);
        let anchor = manager.minimize_anchor(&id).unwrap();
        assert_eq!(anchor.size(), Size::new(160, 32));
        // minimizing again is a no-op
        manager.minimize_widget(&id);
        manager.restore_widget(&id);
        let widget = manager.widget(&id).unwrap();
        assert!(!widget.minimized);
        assert_eq!(widget.bounds, Bounds::new(40, 40, 200, 150));
        assert!(element.state().visible);
        assert_eq!(manager.restore_anchor(&id), Some(Bounds::new(40, 40, 200, 150)));
    }

    #[test]
    fn minimized_widgets_take_successive_dock_slots() {
        let mut manager = manager();
        let (a, _) = register(&mut manager, "a", Bounds::new(0, 0, 100, 100));
        let (b, _) = register(&mut manager, "b", Bounds::new(0, 0, 100, 100));
        manager.minimize_widget(&a);
        manager.minimize_widget(&b);
        let slot_a = manager.minimize_anchor(&a).unwrap();
        let slot_b = manager.minimize_anchor(&b).unwrap();
        assert_ne!(slot_a.x, slot_b.x);
    }

    #[test]
    fn register_close_register_yields_fresh_session() {
        let mut manager = manager();
        let (id, _) = register(&mut manager, "w", Bounds::new(10, 10, 100, 100));
        manager.begin_drag(&id, PointerEvent::new(20, 20)).unwrap();
        manager.close(&id);
        // the session died with the widget
        assert!(!manager.pointer_session_active());
        let (id2, _) = register(&mut manager, "w", Bounds::new(10, 10, 100, 100));
        assert!(manager.begin_drag(&id2, PointerEvent::new(20, 20)).is_ok());
        manager.end_drag();
    }

    #[test]
    fn theme_application_reaches_every_element() {
        let mut manager = manager();
        let (_, first) = register(&mut manager, "a", Bounds::new(0, 0, 100, 100));
        let (_, second) = register(&mut manager, "b", Bounds::new(0, 0, 100, 100));
        manager.apply_theme("dark");
        assert_eq!(first.state().theme_class.as_deref(), Some("owm-theme-dark"));
        assert_eq!(second.state().theme_class.as_deref(), Some("owm-theme-dark"));
        // unknown theme falls back without touching anything else
        manager.apply_theme("nonexistent");
        assert_eq!(manager.active_theme(), "default");
        assert_eq!(
            first.state().theme_class.as_deref(),
            Some("owm-theme-default")
        );
    }

    #[test]
    fn late_registration_inherits_active_theme() {
        let mut manager = manager();
        manager.apply_theme("light");
        let (_, element) = register(&mut manager, "late", Bounds::new(0, 0, 100, 100));
        assert_eq!(
            element.state().theme_class.as_deref(),
            Some("owm-theme-light")
        );
    }

    #[test]
    fn pointer_down_routes_to_handles_then_body() {
        let mut manager = manager();
        let (id, _) = register(&mut manager, "w", Bounds::new(100, 100, 200, 150));
        // corner handle
        assert!(manager.pointer_down(PointerEvent::new(100, 100)));
        assert!(manager.is_resizing());
        manager.pointer_up();
        // body
        assert!(manager.pointer_down(PointerEvent::new(200, 170)));
        assert!(manager.is_dragging());
        manager.pointer_up();
        // outside
        assert!(!manager.pointer_down(PointerEvent::new(700, 500)));
        assert!(manager.is_registered(&id));
    }

    #[test]
    fn viewport_shrink_reclamps_widgets() {
        let mut manager = manager();
        let (id, _) = register(&mut manager, "w", Bounds::new(700, 500, 100, 80));
        manager.set_viewport(Size::new(400, 300));
        let bounds = manager.widget(&id).unwrap().bounds;
        assert!(bounds.x <= 400 - 16);
        assert!(bounds.y <= 300 - 16);
    }

    #[test]
    fn handle_zones_empty_for_non_resizable() {
        let mut manager = manager();
        let fixed = manager.register_widget(
            WidgetConfig::new(HeadlessElement::new())
                .with_id("fixed")
                .resizable(false),
        );
        assert!(manager.handle_zones(&fixed).is_empty());
        let (sizable, _) = register(&mut manager, "sizable", Bounds::new(0, 0, 100, 100));
        assert_eq!(manager.handle_zones(&sizable).len(), 8);
    }
}
