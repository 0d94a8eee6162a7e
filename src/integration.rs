//! Adapter exposing the enhanced manager through the legacy widget-manager
//! surface.
//!
//! Old call sites keep their method names and shapes; the adapter maps each
//! legacy string key to the enhanced manager's widget id and delegates. Each
//! legacy key points at exactly one live enhanced id at a time.

use std::collections::HashMap;
use std::rc::Rc;

use crate::drivers::{HostElement, StateStore};
use crate::manager::EnhancedWidgetManager;
use crate::widget::{WidgetConfig, WidgetId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegrationStatus {
    pub initialized: bool,
    pub enhanced_manager: bool,
    pub widget_count: usize,
}

pub struct WidgetManagerIntegration {
    manager: EnhancedWidgetManager,
    legacy_ids: HashMap<String, WidgetId>,
    initialized: bool,
}

impl WidgetManagerIntegration {
    pub fn new(store: Box<dyn StateStore>) -> Self {
        Self::with_manager(EnhancedWidgetManager::new(store))
    }

    pub fn with_manager(manager: EnhancedWidgetManager) -> Self {
        Self {
            manager,
            legacy_ids: HashMap::new(),
            initialized: true,
        }
    }

    /// The legacy registration call: an element and a caller-chosen key.
    /// Legacy widgets start inert; `make_draggable`/`make_resizable` opt
    /// capabilities in, as the old manager did. Re-registering a live key
    /// closes the previous widget first.
    pub fn register_widget(&mut self, element: Rc<dyn HostElement>, legacy_key: &str) -> WidgetId {
        if let Some(previous) = self.resolve(legacy_key) {
            tracing::debug!(key = legacy_key, widget = %previous, "legacy key re-registered; closing previous widget");
            self.manager.close(&previous);
        }
        let id = self.manager.register_widget(
            WidgetConfig::new(element).draggable(false).resizable(false),
        );
        self.legacy_ids.insert(legacy_key.to_string(), id.clone());
        id
    }

    pub fn make_draggable(&mut self, legacy_key: &str) -> bool {
        self.resolve(legacy_key)
            .is_some_and(|id| self.manager.set_draggable(&id, true))
    }

    pub fn make_resizable(&mut self, legacy_key: &str) -> bool {
        self.resolve(legacy_key)
            .is_some_and(|id| self.manager.set_resizable(&id, true))
    }

    pub fn bring_to_front(&mut self, legacy_key: &str) -> bool {
        self.resolve(legacy_key)
            .is_some_and(|id| self.manager.bring_to_front(&id))
    }

    pub fn focus_widget(&mut self, legacy_key: &str) -> bool {
        self.resolve(legacy_key)
            .is_some_and(|id| self.manager.focus_widget(&id))
    }

    pub fn minimize_widget(&mut self, legacy_key: &str) {
        if let Some(id) = self.resolve(legacy_key) {
            self.manager.minimize_widget(&id);
        }
    }

    pub fn restore_widget(&mut self, legacy_key: &str) {
        if let Some(id) = self.resolve(legacy_key) {
            self.manager.restore_widget(&id);
        }
    }

    pub fn hide_widget(&mut self, legacy_key: &str) {
        if let Some(id) = self.resolve(legacy_key) {
            self.manager.set_widget_visible(&id, false);
        }
    }

    pub fn show_widget(&mut self, legacy_key: &str) {
        if let Some(id) = self.resolve(legacy_key) {
            self.manager.set_widget_visible(&id, true);
        }
    }

    pub fn close_widget(&mut self, legacy_key: &str) -> bool {
        match self.resolve(legacy_key) {
            Some(id) => {
                self.manager.close(&id);
                self.legacy_ids.remove(legacy_key);
                true
            }
            None => false,
        }
    }

    pub fn set_theme(&mut self, name: &str) {
        self.manager.apply_theme(name);
    }

    /// The enhanced id a legacy key currently maps to.
    pub fn widget_id(&self, legacy_key: &str) -> Option<&WidgetId> {
        self.legacy_ids.get(legacy_key)
    }

    pub fn get_status(&self) -> IntegrationStatus {
        IntegrationStatus {
            initialized: self.initialized,
            enhanced_manager: true,
            widget_count: self.manager.widget_count(),
        }
    }

    pub fn manager(&self) -> &EnhancedWidgetManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut EnhancedWidgetManager {
        &mut self.manager
    }

    /// Look up a legacy key, lazily pruning entries whose widget was closed
    /// through the enhanced surface.
    fn resolve(&mut self, legacy_key: &str) -> Option<WidgetId> {
        let id = self.legacy_ids.get(legacy_key)?.clone();
        if !self.manager.is_registered(&id) {
            self.legacy_ids.remove(legacy_key);
            return None;
        }
        Some(id)
    }
}
