//! Color palettes for the light and dark modes.
//!
//! The view never picks colors directly: it asks [`for_root`] for the palette
//! matching the document root and passes it to every widget.

use folio_app::theme::DocumentRoot;
use ratatui::style::Color;

/// One complete set of colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    pub background: Color,
    pub surface: Color,

    // --- Borders ---
    pub border: Color,

    // --- Accent ---
    pub accent: Color,

    // --- Text ---
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // --- Tags ---
    pub tag_fg: Color,
    pub tag_bg: Color,
}

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(250, 250, 249),
    surface: Color::Rgb(245, 245, 244),
    border: Color::Rgb(214, 211, 209),
    accent: Color::Rgb(234, 88, 12),
    text_primary: Color::Rgb(28, 25, 23),
    text_secondary: Color::Rgb(87, 83, 78),
    text_muted: Color::Rgb(168, 162, 158),
    tag_fg: Color::Rgb(68, 64, 60),
    tag_bg: Color::Rgb(231, 229, 228),
};

pub const DARK: Palette = Palette {
    background: Color::Rgb(12, 10, 9),
    surface: Color::Rgb(28, 25, 23),
    border: Color::Rgb(68, 64, 60),
    accent: Color::Rgb(251, 146, 60),
    text_primary: Color::Rgb(250, 250, 249),
    text_secondary: Color::Rgb(168, 162, 158),
    text_muted: Color::Rgb(120, 113, 108),
    tag_fg: Color::Rgb(214, 211, 209),
    tag_bg: Color::Rgb(41, 37, 36),
};

/// Palette selected by the document root's dark flag
pub fn for_root(root: DocumentRoot) -> &'static Palette {
    if root.is_dark() {
        &DARK
    } else {
        &LIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_app::theme::apply_theme;
    use folio_core::ThemePreference;

    #[test]
    fn test_default_root_is_light() {
        assert_eq!(for_root(DocumentRoot::default()), &LIGHT);
    }

    #[test]
    fn test_dark_root_selects_dark() {
        let mut root = DocumentRoot::default();
        apply_theme(&mut root, ThemePreference::Dark);
        assert_eq!(for_root(root), &DARK);
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(LIGHT.background, DARK.background);
        assert_ne!(LIGHT.text_primary, DARK.text_primary);
    }
}
