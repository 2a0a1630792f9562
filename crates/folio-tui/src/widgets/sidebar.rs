//! Wide-layout sidebar: identity, tab navigation, contacts and theme toggle

use folio_core::{Content, Tab, ThemePreference};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Borders, Paragraph, Widget},
};

use crate::layout;
use crate::theme::{styles, Palette};

use super::{contact_lines, nav_line, toggle_icon};

pub struct Sidebar<'a> {
    content: &'a Content,
    active: Tab,
    theme: Option<ThemePreference>,
    palette: &'a Palette,
}

impl<'a> Sidebar<'a> {
    pub fn new(content: &'a Content, palette: &'a Palette) -> Self {
        Self {
            content,
            active: Tab::default(),
            theme: None,
            palette,
        }
    }

    pub fn active(mut self, tab: Tab) -> Self {
        self.active = tab;
        self
    }

    /// Show the theme toggle; `None` keeps it hidden
    pub fn theme(mut self, theme: Option<ThemePreference>) -> Self {
        self.theme = theme;
        self
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        styles::edge_block(p, Borders::RIGHT).render(area, buf);

        let slots = layout::sidebar_slots(area, self.content.contacts.len());

        Line::styled(self.content.name, styles::heading(p)).render(slots.name, buf);
        Line::styled(self.content.tagline, styles::text_muted(p)).render(slots.tagline, buf);

        for (tab, rect) in slots.tabs {
            nav_line(tab, tab == self.active, p).render(rect, buf);
        }

        Paragraph::new(contact_lines(self.content.contacts, p)).render(slots.contacts, buf);

        if let Some(current) = self.theme {
            Line::from(vec![
                Span::styled(toggle_icon(current), styles::accent(p)),
                Span::raw(" "),
                Span::styled(current.toggle_label(), styles::text_secondary(p)),
            ])
            .render(slots.toggle, buf);
        }
    }
}
