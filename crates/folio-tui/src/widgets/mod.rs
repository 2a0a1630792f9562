//! Custom widget components

pub mod about;
mod header;
mod menu;
pub mod projects;
mod sidebar;

pub use about::AboutSection;
pub use header::MobileHeader;
pub use menu::MobileMenu;
pub use projects::ProjectList;
pub use sidebar::Sidebar;

use folio_core::{Link, Tab, ThemePreference};
use ratatui::text::{Line, Span};

use crate::theme::{styles, Palette};

/// Marker in front of the active tab
pub const ACTIVE_MARKER: &str = "→ ";

/// Glyph of the theme toggle: what a press switches to
pub fn toggle_icon(current: ThemePreference) -> &'static str {
    match current {
        ThemePreference::Light => "☾",
        ThemePreference::Dark => "☀",
    }
}

/// One navigation entry, marked when active
fn nav_line(tab: Tab, active: bool, p: &Palette) -> Line<'static> {
    let marker = if active { ACTIVE_MARKER } else { "  " };
    Line::from(vec![
        Span::styled(marker, styles::accent(p)),
        Span::styled(tab.label(), styles::nav_item(p, active)),
    ])
}

/// Two rows per contact: label, then the url underneath
fn contact_lines(contacts: &[Link], p: &Palette) -> Vec<Line<'static>> {
    contacts
        .iter()
        .flat_map(|link| {
            [
                Line::styled(link.label, styles::text_secondary(p)),
                Line::styled(link.url, styles::text_muted(p)),
            ]
        })
        .collect()
}
