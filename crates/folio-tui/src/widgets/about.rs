//! About section: headline, paragraphs and skill categories
//!
//! Rendered at the full height [`layout::about_height`] reports; the main
//! pane scrolls over it.

use folio_core::{Content, SkillCategory};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::layout;
use crate::theme::{styles, Palette};

/// Heading above the skill categories
pub const SKILLS_HEADING: &str = "SKILLS";

pub struct AboutSection<'a> {
    content: &'a Content,
    palette: &'a Palette,
}

impl<'a> AboutSection<'a> {
    pub fn new(content: &'a Content, palette: &'a Palette) -> Self {
        Self { content, palette }
    }

    fn text_lines(&self, width: u16) -> Vec<Line<'static>> {
        let p = self.palette;
        let mut lines = vec![Line::styled(self.content.headline, styles::heading(p))];

        for paragraph in self.content.about {
            lines.push(Line::default());
            lines.extend(
                layout::wrap(paragraph, width)
                    .into_iter()
                    .map(|l| Line::styled(l, styles::text_secondary(p))),
            );
        }
        lines
    }

    fn render_skills(&self, area: Rect, buf: &mut Buffer) {
        let categories = self.content.skills;
        if categories.is_empty() || area.is_empty() {
            return;
        }

        let p = self.palette;
        if layout::skills_in_columns(categories, area.width) {
            let columns =
                Layout::horizontal(vec![Constraint::Fill(1); categories.len()]).split(area);
            for (category, column) in categories.iter().zip(columns.iter()) {
                let mut lines = vec![Line::styled(category.name, styles::accent_bold(p))];
                lines.extend(
                    category
                        .skills
                        .iter()
                        .map(|skill| Line::styled(*skill, styles::text_secondary(p))),
                );
                Paragraph::new(lines).render(*column, buf);
            }
        } else {
            Paragraph::new(stacked_lines(categories, area.width, p)).render(area, buf);
        }
    }
}

/// Category name followed by its skills as one wrapped list
fn stacked_lines(categories: &[SkillCategory], width: u16, p: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, category) in categories.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::styled(category.name, styles::accent_bold(p)));
        lines.extend(
            layout::wrap(&category.skills.join(", "), width)
                .into_iter()
                .map(|l| Line::styled(l, styles::text_secondary(p))),
        );
    }
    lines
}

impl Widget for AboutSection<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let lines = self.text_lines(area.width);
        let [text, _, rule, _, heading, _, skills] = Layout::vertical([
            Constraint::Length(lines.len() as u16),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        Paragraph::new(lines).render(text, buf);
        Line::styled("─".repeat(rule.width as usize), styles::border(p)).render(rule, buf);
        Line::styled(SKILLS_HEADING, styles::text_muted(p)).render(heading, buf);
        self.render_skills(skills, buf);
    }
}
