//! Keyboard shortcut registration and dispatch.
//!
//! Shortcuts are scoped either to a widget or globally. Dispatch resolves
//! the focused widget's shortcuts first, then global ones; the first match
//! wins and later handlers are not invoked. Registration order breaks ties.

use std::fmt;

use crate::input::{KeyCode, KeyEvent, KeyModifiers};
use crate::widget::WidgetId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl KeyCombo {
    pub fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.code == self.code && key.modifiers == self.mods
    }

    pub fn display(&self) -> String {
        let mut parts = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl".to_string());
        }
        if self.mods.contains(KeyModifiers::SHIFT) {
            parts.push("Shift".to_string());
        }
        if self.mods.contains(KeyModifiers::ALT) {
            parts.push("Alt".to_string());
        }
        let code = match self.code {
            KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::F(n) => format!("F{}", n),
            _ => format!("{:?}", self.code),
        };
        parts.push(code);
        parts.join("+")
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortcutScope {
    Global,
    Widget(WidgetId),
}

pub type ShortcutHandler = Box<dyn FnMut()>;

struct ShortcutEntry {
    combo: KeyCombo,
    scope: ShortcutScope,
    handler: ShortcutHandler,
}

#[derive(Default)]
pub struct KeyboardManager {
    shortcuts: Vec<ShortcutEntry>,
}

impl KeyboardManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, combo: KeyCombo, scope: ShortcutScope, handler: ShortcutHandler) {
        self.shortcuts.push(ShortcutEntry {
            combo,
            scope,
            handler,
        });
    }

    /// Invoke the first matching handler: focused-widget shortcuts before
    /// global ones, registration order within each pass. Returns whether a
    /// handler ran.
    pub fn dispatch(&mut self, key: &KeyEvent, focused: Option<&WidgetId>) -> bool {
        if let Some(focused) = focused {
            let scoped = ShortcutScope::Widget(focused.clone());
            for entry in &mut self.shortcuts {
                if entry.scope == scoped && entry.combo.matches(key) {
                    (entry.handler)();
                    return true;
                }
            }
        }
        for entry in &mut self.shortcuts {
            if entry.scope == ShortcutScope::Global && entry.combo.matches(key) {
                (entry.handler)();
                return true;
            }
        }
        false
    }

    /// Remove every shortcut scoped to `id` (widget unregistered).
    pub fn release_widget(&mut self, id: &WidgetId) {
        self.shortcuts
            .retain(|entry| entry.scope != ShortcutScope::Widget(id.clone()));
    }

    pub fn shortcut_count(&self) -> usize {
        self.shortcuts.len()
    }

    /// Display strings of the combos registered for `scope`.
    pub fn combos_for(&self, scope: &ShortcutScope) -> Vec<String> {
        self.shortcuts
            .iter()
            .filter(|entry| entry.scope == *scope)
            .map(|entry| entry.combo.display())
            .collect()
    }
}

impl fmt::Debug for KeyboardManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyboardManager")
            .field("shortcuts", &self.shortcuts.len())
            .finish()
    }
}
