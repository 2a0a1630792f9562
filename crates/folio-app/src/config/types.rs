//! Configuration types for folio
//!
//! Defines:
//! - `Settings` - Global application settings
//! - Related sub-types and enums

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Global application settings (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub theme: ThemeSettings,
}

/// Layout and input settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Terminal width (columns) from which the sidebar layout is used
    #[serde(default = "default_wide_breakpoint")]
    pub wide_breakpoint: u16,

    /// Event poll timeout; also the reveal animation step
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Capture mouse clicks
    #[serde(default = "default_true")]
    pub mouse: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            wide_breakpoint: default_wide_breakpoint(),
            tick_rate_ms: default_tick_rate_ms(),
            mouse: true,
        }
    }
}

impl UiSettings {
    /// Tick interval, never shorter than 10ms
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }
}

fn default_wide_breakpoint() -> u16 {
    80
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_true() -> bool {
    true
}

/// Theme settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeSettings {
    /// Where the system color-scheme preference comes from
    #[serde(default)]
    pub system: SystemTheme,
}

/// Source of the system color-scheme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemTheme {
    /// Detect from the terminal environment
    #[default]
    Auto,
    Light,
    Dark,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.ui.wide_breakpoint, 80);
        assert_eq!(settings.ui.tick_rate_ms, 50);
        assert!(settings.ui.mouse);
        assert_eq!(settings.theme.system, SystemTheme::Auto);
    }

    #[test]
    fn test_partial_ui_section() {
        let settings: Settings = toml::from_str("[ui]\nmouse = false\n").unwrap();
        assert!(!settings.ui.mouse);
        assert_eq!(settings.ui.wide_breakpoint, 80);
    }

    #[test]
    fn test_system_theme_lowercase() {
        let settings: Settings = toml::from_str("[theme]\nsystem = \"dark\"\n").unwrap();
        assert_eq!(settings.theme.system, SystemTheme::Dark);
    }

    #[test]
    fn test_tick_rate_floor() {
        let ui = UiSettings {
            tick_rate_ms: 0,
            ..Default::default()
        };
        assert_eq!(ui.tick_rate(), Duration::from_millis(10));
    }
}
