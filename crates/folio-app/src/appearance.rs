//! Operating-system color-scheme preference
//!
//! Terminals expose no reliable `prefers-color-scheme`; the conventional hint
//! is `COLORFGBG` ("fg;bg" with ANSI color indices). Configuration can also pin
//! the answer.

use folio_core::prelude::*;

use crate::config::SystemTheme;

/// Environment variable carrying the terminal's foreground/background colors
pub const COLORFGBG_VAR: &str = "COLORFGBG";

/// Read-only source of the system color-scheme preference
pub trait SystemAppearance {
    /// `Some(true)` for dark, `Some(false)` for light, `None` if unknown
    fn prefers_dark(&self) -> Option<bool>;
}

/// Reads `COLORFGBG` from the process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvAppearance;

impl SystemAppearance for EnvAppearance {
    fn prefers_dark(&self) -> Option<bool> {
        let value = std::env::var(COLORFGBG_VAR).ok()?;
        let prefers_dark = parse_colorfgbg(&value);
        debug!("{}={:?} -> prefers_dark={:?}", COLORFGBG_VAR, value, prefers_dark);
        prefers_dark
    }
}

/// A fixed answer (configuration override, tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedAppearance(pub Option<bool>);

impl SystemAppearance for FixedAppearance {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}

/// Interpret a `COLORFGBG` value by its last (background) field.
///
/// Backgrounds 7 and 9-15 are light; 0-6 and 8 are dark.
pub fn parse_colorfgbg(value: &str) -> Option<bool> {
    let background = value.rsplit(';').next()?.trim();
    match background.parse::<u8>().ok()? {
        0..=6 | 8 => Some(true),
        7 | 9..=15 => Some(false),
        _ => None,
    }
}

/// Appearance source for the configured system theme mode
pub fn appearance_for(system: SystemTheme) -> Box<dyn SystemAppearance> {
    match system {
        SystemTheme::Auto => Box::new(EnvAppearance),
        SystemTheme::Light => Box::new(FixedAppearance(Some(false))),
        SystemTheme::Dark => Box::new(FixedAppearance(Some(true))),
    }
}
