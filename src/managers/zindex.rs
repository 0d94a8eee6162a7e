//! Stacking order bookkeeping.
//!
//! Every assignment comes from a monotonic counter, so no two live widgets
//! ever share a z-index and ties with freshly registered widgets cannot
//! occur.

use std::collections::BTreeMap;

use crate::widget::WidgetId;

#[derive(Debug)]
pub struct ZIndexManager {
    levels: BTreeMap<WidgetId, i32>,
    next: i32,
}

impl Default for ZIndexManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ZIndexManager {
    pub fn new() -> Self {
        Self {
            levels: BTreeMap::new(),
            next: 1,
        }
    }

    fn bump(&mut self) -> i32 {
        let z = self.next;
        self.next += 1;
        z
    }

    /// First assignment at registration.
    pub fn assign(&mut self, id: WidgetId) -> i32 {
        let z = self.bump();
        self.levels.insert(id, z);
        z
    }

    /// Reassign `id` the next counter value. The counter advances even when
    /// the widget is already frontmost, keeping values strictly monotonic.
    /// Unknown ids are left alone.
    pub fn bring_to_front(&mut self, id: &WidgetId) -> Option<i32> {
        if !self.levels.contains_key(id) {
            return None;
        }
        let z = self.bump();
        self.levels.insert(id.clone(), z);
        Some(z)
    }

    /// Drop bookkeeping for a destroyed widget; other levels are untouched.
    pub fn release(&mut self, id: &WidgetId) {
        self.levels.remove(id);
    }

    pub fn z_index(&self, id: &WidgetId) -> Option<i32> {
        self.levels.get(id).copied()
    }

    pub fn front(&self) -> Option<&WidgetId> {
        self.levels
            .iter()
            .max_by_key(|(_, z)| **z)
            .map(|(id, _)| id)
    }

    pub fn is_front(&self, id: &WidgetId) -> bool {
        self.front() == Some(id)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Ids ordered back to front.
    pub fn stacking_order(&self) -> Vec<WidgetId> {
        let mut ordered: Vec<(&WidgetId, i32)> =
            self.levels.iter().map(|(id, z)| (id, *z)).collect();
        ordered.sort_by_key(|(_, z)| *z);
        ordered.into_iter().map(|(id, _)| id.clone()).collect()
    }
}
