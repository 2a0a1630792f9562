//! Narrow-layout header bar
//!
//! Name on the left; theme toggle and menu button on the right.

use folio_core::ThemePreference;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Borders, Widget},
};

use crate::layout;
use crate::theme::{styles, Palette};

use super::toggle_icon;

pub struct MobileHeader<'a> {
    name: &'a str,
    theme: Option<ThemePreference>,
    menu_open: bool,
    palette: &'a Palette,
}

impl<'a> MobileHeader<'a> {
    pub fn new(name: &'a str, palette: &'a Palette) -> Self {
        Self {
            name,
            theme: None,
            menu_open: false,
            palette,
        }
    }

    pub fn theme(mut self, theme: Option<ThemePreference>) -> Self {
        self.theme = theme;
        self
    }

    pub fn menu_open(mut self, open: bool) -> Self {
        self.menu_open = open;
        self
    }
}

impl Widget for MobileHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        styles::edge_block(p, Borders::BOTTOM).render(area, buf);

        let slots = layout::header_slots(area);
        Line::styled(self.name, styles::heading(p)).render(slots.name, buf);

        if let Some(current) = self.theme {
            Line::styled(format!(" {} ", toggle_icon(current)), styles::accent(p))
                .render(slots.toggle, buf);
        }

        let menu_glyph = if self.menu_open { " × " } else { " ≡ " };
        Line::styled(menu_glyph, styles::text_primary(p)).render(slots.menu_button, buf);
    }
}
