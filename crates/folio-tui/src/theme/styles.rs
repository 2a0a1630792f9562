//! Semantic style builders.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders};

use super::Palette;

// --- Surfaces ---
pub fn page(p: &Palette) -> Style {
    Style::default().bg(p.background).fg(p.text_primary)
}

// --- Text styles ---
pub fn text_primary(p: &Palette) -> Style {
    Style::default().fg(p.text_primary)
}

pub fn text_secondary(p: &Palette) -> Style {
    Style::default().fg(p.text_secondary)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

pub fn heading(p: &Palette) -> Style {
    Style::default()
        .fg(p.text_primary)
        .add_modifier(Modifier::BOLD)
}

// --- Accent styles ---
pub fn accent(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

pub fn accent_bold(p: &Palette) -> Style {
    accent(p).add_modifier(Modifier::BOLD)
}

// --- Navigation ---
pub fn nav_item(p: &Palette, active: bool) -> Style {
    if active {
        accent_bold(p)
    } else {
        text_secondary(p)
    }
}

// --- Tags ---
pub fn tag(p: &Palette) -> Style {
    Style::default().fg(p.tag_fg).bg(p.tag_bg)
}

// --- Borders ---
pub fn border(p: &Palette) -> Style {
    Style::default().fg(p.border)
}

/// Block drawing a single separator edge
pub fn edge_block(p: &Palette, borders: Borders) -> Block<'static> {
    Block::default()
        .borders(borders)
        .border_style(border(p))
        .style(page(p))
}
