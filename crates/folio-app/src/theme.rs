//! Theme controller
//!
//! Resolves the initial theme once (persisted choice > system preference >
//! light), applies it to the document root, and flips it on toggle. Reading and
//! writing the persisted value happens in [`crate::process`]; this module only
//! decides.

use folio_core::prelude::*;
use folio_core::ThemePreference;

/// Storage key of the persisted "is dark" flag
pub const DARK_MODE_KEY: &str = "darkMode";

/// Two-phase theme lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeState {
    /// Deterministic default is shown; theme-dependent controls are hidden
    #[default]
    Uninitialized,
    /// Environment-dependent theme has been resolved
    Resolved(ThemePreference),
}

impl ThemeState {
    pub fn is_resolved(&self) -> bool {
        matches!(self, ThemeState::Resolved(_))
    }

    pub fn preference(&self) -> Option<ThemePreference> {
        match self {
            ThemeState::Uninitialized => None,
            ThemeState::Resolved(pref) => Some(*pref),
        }
    }
}

/// The root flag the renderer reads its palette from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DocumentRoot {
    dark: bool,
}

impl DocumentRoot {
    pub fn is_dark(&self) -> bool {
        self.dark
    }
}

/// Apply a theme to the document root.
///
/// The only writer of [`DocumentRoot`]; called on initialization and toggle.
pub fn apply_theme(root: &mut DocumentRoot, preference: ThemePreference) {
    root.dark = preference.is_dark();
    debug!("Applied {} theme to document root", preference);
}

/// Interpret a persisted value.
///
/// Absent or empty values mean "no explicit choice". `"true"` is dark; any
/// other non-empty value is light.
pub fn parse_persisted(raw: Option<&str>) -> Option<ThemePreference> {
    match raw {
        None | Some("") => None,
        Some(value) => Some(ThemePreference::from_dark(value == "true")),
    }
}

/// Resolve the initial theme from the persisted value and system preference.
pub fn resolve(persisted: Option<&str>, system_prefers_dark: Option<bool>) -> ThemePreference {
    if let Some(explicit) = parse_persisted(persisted) {
        return explicit;
    }
    system_prefers_dark
        .map(ThemePreference::from_dark)
        .unwrap_or_default()
}

/// Theme state plus the document root it drives
#[derive(Debug, Clone, Default)]
pub struct ThemeController {
    state: ThemeState,
    root: DocumentRoot,
    initialize_requested: bool,
}

impl ThemeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ThemeState {
        self.state
    }

    pub fn root(&self) -> DocumentRoot {
        self.root
    }

    pub fn is_resolved(&self) -> bool {
        self.state.is_resolved()
    }

    /// Theme in effect for rendering (light until resolved)
    pub fn effective(&self) -> ThemePreference {
        ThemePreference::from_dark(self.root.is_dark())
    }

    /// Record that the view is interactive.
    ///
    /// Returns `true` only the first time, when resolution should start.
    pub fn mount(&mut self) -> bool {
        if self.initialize_requested || self.state.is_resolved() {
            debug!("Theme initialization already requested, ignoring mount");
            return false;
        }
        self.initialize_requested = true;
        true
    }

    /// Complete initialization with the resolved preference.
    ///
    /// Returns `false` if the theme was already resolved.
    pub fn finish_initialize(&mut self, preference: ThemePreference) -> bool {
        if self.state.is_resolved() {
            debug!("Theme already resolved, ignoring {}", preference);
            return false;
        }
        self.initialize_requested = true;
        self.state = ThemeState::Resolved(preference);
        apply_theme(&mut self.root, preference);
        info!("Theme resolved: {}", preference);
        true
    }

    /// Flip the resolved theme.
    ///
    /// Returns the new preference to persist, or `None` while unresolved.
    pub fn toggle(&mut self) -> Option<ThemePreference> {
        let current = self.state.preference()?;
        let next = current.toggled();
        self.state = ThemeState::Resolved(next);
        apply_theme(&mut self.root, next);
        Some(next)
    }
}
