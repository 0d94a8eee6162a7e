//! Named visual themes applied to every registered widget container.

use std::collections::BTreeMap;

/// A theme is carried to the host as a class name on each container; the
/// host's stylesheet owns the actual colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub class: String,
}

impl Theme {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
        }
    }
}

pub const DEFAULT_THEME: &str = "default";

#[derive(Debug)]
pub struct ThemeApplicationManager {
    themes: BTreeMap<String, Theme>,
    active: String,
}

impl Default for ThemeApplicationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeApplicationManager {
    pub fn new() -> Self {
        let mut themes = BTreeMap::new();
        themes.insert(DEFAULT_THEME.to_string(), Theme::new("owm-theme-default"));
        themes.insert("dark".to_string(), Theme::new("owm-theme-dark"));
        themes.insert("light".to_string(), Theme::new("owm-theme-light"));
        themes.insert(
            "high-contrast".to_string(),
            Theme::new("owm-theme-high-contrast"),
        );
        Self {
            themes,
            active: DEFAULT_THEME.to_string(),
        }
    }

    pub fn register_theme(&mut self, name: impl Into<String>, theme: Theme) {
        self.themes.insert(name.into(), theme);
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn active_class(&self) -> &str {
        // the default theme is always present
        &self.themes[&self.active].class
    }

    /// Resolve `name`, falling back to the default theme with a warning when
    /// it is unknown. Returns the name that actually resolved.
    pub fn resolve<'a>(&'a self, name: &'a str) -> (&'a str, &'a Theme) {
        match self.themes.get(name) {
            Some(theme) => (name, theme),
            None => {
                tracing::warn!(theme = name, "unknown theme, falling back to default");
                (DEFAULT_THEME, &self.themes[DEFAULT_THEME])
            }
        }
    }

    /// Resolve and remember `name` as the active theme.
    pub fn activate(&mut self, name: &str) -> Theme {
        let (resolved, theme) = self.resolve(name);
        let theme = theme.clone();
        self.active = resolved.to_string();
        theme
    }

    pub fn theme_names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }
}
