//! Projects section: the disclosure list of case studies
//!
//! Drawn into the content-coordinate rectangles [`layout::project_regions`]
//! computed, so the rows on screen are exactly the rows mouse clicks resolve
//! against once the scroll offset is applied.

use folio_app::disclosure::DisclosureState;
use folio_core::Project;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::layout::{self, DetailRow, ProjectRegion};
use crate::theme::{styles, Palette};

/// Marker on a collapsed entry
pub const COLLAPSED_MARKER: &str = "+";
/// Marker on the expanded entry
pub const EXPANDED_MARKER: &str = "×";

pub struct ProjectList<'a> {
    projects: &'a [Project],
    regions: &'a [ProjectRegion],
    disclosure: &'a DisclosureState,
    palette: &'a Palette,
}

impl<'a> ProjectList<'a> {
    pub fn new(
        projects: &'a [Project],
        regions: &'a [ProjectRegion],
        disclosure: &'a DisclosureState,
        palette: &'a Palette,
    ) -> Self {
        Self {
            projects,
            regions,
            disclosure,
            palette,
        }
    }

    fn render_title(&self, project: &Project, region: &ProjectRegion, buf: &mut Buffer) {
        let p = self.palette;
        let expanded = self.disclosure.disclosure().is_expanded(project.id);
        let focused = self.disclosure.cursor() == region.index;

        let title_style = if focused {
            styles::accent_bold(p)
        } else {
            styles::heading(p)
        };
        Line::from(vec![
            Span::styled(format!("{:02}", region.index + 1), styles::text_muted(p)),
            Span::raw("  "),
            Span::styled(project.title, title_style),
        ])
        .render(region.title, buf);

        let marker = if expanded {
            EXPANDED_MARKER
        } else {
            COLLAPSED_MARKER
        };
        Line::styled(marker, styles::accent(p))
            .right_aligned()
            .render(region.title, buf);
    }

    fn render_details(&self, project: &Project, region: &ProjectRegion, buf: &mut Buffer) {
        let p = self.palette;
        let visible = self.disclosure.visible_details(project.details.len());

        let lines: Vec<Line> = layout::detail_rows(project, visible, region.details.width)
            .into_iter()
            .map(|row| match row {
                DetailRow::Blank => Line::default(),
                DetailRow::Meta(text) => Line::styled(text, styles::text_muted(p)),
                DetailRow::Bullet(text) => Line::from(vec![
                    Span::styled("– ", styles::accent(p)),
                    Span::styled(text, styles::text_primary(p)),
                ]),
                DetailRow::Continuation(text) => Line::from(vec![
                    Span::raw("  "),
                    Span::styled(text, styles::text_primary(p)),
                ]),
                DetailRow::Tech(text) => tech_line(&text, p),
            })
            .collect();

        Paragraph::new(lines).render(region.details, buf);
    }
}

/// Tags keep their own background; the gaps between them do not
fn tech_line(text: &str, p: &Palette) -> Line<'static> {
    let mut spans = Vec::new();
    for chunk in text.split_inclusive(']') {
        let tag = chunk.trim_start();
        if tag.len() < chunk.len() {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(tag.to_string(), styles::tag(p)));
    }
    Line::from(spans)
}

impl Widget for ProjectList<'_> {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        for region in self.regions {
            let Some(project) = self.projects.get(region.index) else {
                continue;
            };

            self.render_title(project, region, buf);

            let summary: Vec<Line> = layout::wrap(project.summary, region.summary.width)
                .into_iter()
                .map(|l| Line::styled(l, styles::text_secondary(p)))
                .collect();
            Paragraph::new(summary).render(region.summary, buf);

            if !region.details.is_empty() {
                self.render_details(project, region, buf);
            }
        }
    }
}
