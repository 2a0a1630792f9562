//! Main render/view function (View in TEA pattern)


use folio_app::state::AppState;
use folio_core::Tab;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Widget};
use ratatui::Frame;

use crate::layout::{self, Regions};
use crate::theme::{palette, styles};
use crate::widgets;

/// Render the complete UI (View function in TEA)
///
/// Drawing is pure with respect to the model. Afterwards the main pane's
/// content size and the offset it was drawn at are recorded, so scroll
/// commands and mouse hits work against this frame.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    let regions = draw(area, frame.buffer_mut(), state);
    state
        .scroll
        .update_content_size(regions.content.height, regions.main.height, regions.scroll);
}

/// Draw the whole portfolio into `buf`, returning the layout it used
pub fn draw(area: Rect, buf: &mut Buffer, state: &AppState) -> Regions {
    let p = palette::for_root(state.theme.root());
    let content = state.content;
    let active = state.navigation.active_tab();
    // Only known once resolved; until then the toggle is not drawn
    let theme = state.theme.state().preference();

    Block::default().style(styles::page(p)).render(area, buf);

    let regions = layout::regions(area, state);

    if let Some(sidebar) = regions.sidebar {
        widgets::Sidebar::new(content, p)
            .active(active)
            .theme(theme)
            .render(sidebar, buf);
    }

    if let Some(header) = regions.header {
        widgets::MobileHeader::new(content.name, p)
            .theme(theme)
            .menu_open(state.navigation.is_menu_open())
            .render(header, buf);
    }

    if let Some(menu) = regions.menu {
        widgets::MobileMenu::new(content, active, p).render(menu, buf);
    }

    let page = styles::page(p);
    match active {
        Tab::About => {
            render_scrolled(widgets::AboutSection::new(content, p), &regions, page, buf)
        }
        Tab::Projects => render_scrolled(
            widgets::ProjectList::new(content.projects, &regions.projects, &state.disclosure, p),
            &regions,
            page,
            buf,
        ),
    }

    regions
}

/// Render `widget` off-screen at full content height, then copy the rows
/// the scroll offset leaves inside the main pane
fn render_scrolled<W: Widget>(widget: W, regions: &Regions, style: Style, buf: &mut Buffer) {
    let content = regions.content;
    let main = regions.main;
    if content.is_empty() || main.is_empty() {
        return;
    }

    let mut scratch = Buffer::empty(content);
    scratch.set_style(content, style);
    widget.render(content, &mut scratch);

    let right = main.right().min(content.right());
    for row in 0..main.height {
        let y = content.y.saturating_add(regions.scroll).saturating_add(row);
        if y >= content.bottom() {
            break;
        }
        for x in main.left()..right {
            buf[(x, main.y + row)] = scratch[(x, y)].clone();
        }
    }
}

/// Render one frame off-screen and return its text, one line per row
///
/// Trailing blanks are trimmed from every row.
pub fn render_to_string(state: &AppState, width: u16, height: u16) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    draw(area, &mut buf, state);

    let mut out = String::new();
    for y in 0..area.height {
        let mut line = String::new();
        for x in 0..area.width {
            line.push_str(buf[(x, y)].symbol());
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
