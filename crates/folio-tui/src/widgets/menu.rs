//! Narrow-layout dropdown menu

use folio_core::{Content, Tab};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Borders, Paragraph, Widget},
};

use crate::layout;
use crate::theme::{styles, Palette};

use super::{contact_lines, nav_line};

pub struct MobileMenu<'a> {
    content: &'a Content,
    active: Tab,
    palette: &'a Palette,
}

impl<'a> MobileMenu<'a> {
    pub fn new(content: &'a Content, active: Tab, palette: &'a Palette) -> Self {
        Self {
            content,
            active,
            palette,
        }
    }
}

impl Widget for MobileMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        styles::edge_block(p, Borders::BOTTOM).render(area, buf);

        let slots = layout::menu_slots(area, self.content.contacts.len());
        for (tab, rect) in slots.tabs {
            nav_line(tab, tab == self.active, p).render(rect, buf);
        }
        Paragraph::new(contact_lines(self.content.contacts, p)).render(slots.contacts, buf);
    }
}
