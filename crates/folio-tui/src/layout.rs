//! Screen layout definitions for the TUI
//!
//! Every rectangle the view draws into is computed here, from the area and
//! the model alone. Mouse hit testing uses the same [`regions`], scroll
//! offset included, so a click always lands on what was rendered.

use folio_app::message::Message;
use folio_app::state::AppState;
use folio_core::{Content, Project, ProjectId, SkillCategory, Tab};
use ratatui::layout::{Constraint, Layout, Position, Rect};
use unicode_width::UnicodeWidthStr;

/// Width of the wide-layout sidebar, including its right border
pub const SIDEBAR_WIDTH: u16 = 32;

/// Narrow header: content row plus bottom border
pub const HEADER_HEIGHT: u16 = 2;

/// Left indent of project summaries and details under the index column
pub const PROJECT_INDENT: u16 = 4;

/// Width of the bullet prefix in front of a project detail
pub const BULLET_WIDTH: u16 = 2;

/// Header buttons are one glyph padded by a space on each side
pub const BUTTON_WIDTH: u16 = 3;

const PAD_X: u16 = 2;
const PAD_Y: u16 = 1;

// ─────────────────────────────────────────────────────────────────────────────
// Slot layouts for individual surfaces
// ─────────────────────────────────────────────────────────────────────────────

/// Rows of the wide-layout sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarSlots {
    pub name: Rect,
    pub tagline: Rect,
    pub tabs: Vec<(Tab, Rect)>,
    /// Two rows per contact: label, then url
    pub contacts: Rect,
    pub toggle: Rect,
}

/// Cells of the narrow-layout header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderSlots {
    pub name: Rect,
    pub toggle: Rect,
    pub menu_button: Rect,
}

/// Rows of the narrow-layout dropdown menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSlots {
    pub tabs: Vec<(Tab, Rect)>,
    pub contacts: Rect,
}

pub fn sidebar_slots(area: Rect, contact_count: usize) -> SidebarSlots {
    // Right border is drawn by the sidebar block
    let inner = Rect::new(
        area.x.saturating_add(PAD_X),
        area.y.saturating_add(PAD_Y),
        area.width.saturating_sub(PAD_X * 2 + 1),
        area.height.saturating_sub(PAD_Y * 2),
    );

    let tabs = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| (*tab, row(inner, 3 + i as u16)))
        .collect();

    SidebarSlots {
        name: row(inner, 0),
        tagline: row(inner, 1),
        tabs,
        contacts: rows(inner, 4 + Tab::ALL.len() as u16, contact_count as u16 * 2),
        toggle: row(inner, inner.height.saturating_sub(1)),
    }
}

pub fn header_slots(area: Rect) -> HeaderSlots {
    let right = area.x.saturating_add(area.width);
    let menu_x = right.saturating_sub(PAD_X + BUTTON_WIDTH).max(area.x);
    let toggle_x = menu_x.saturating_sub(BUTTON_WIDTH + 1).max(area.x);
    let name_x = area.x.saturating_add(PAD_X).min(toggle_x);

    HeaderSlots {
        name: Rect::new(name_x, area.y, toggle_x - name_x, area.height.min(1)),
        toggle: Rect::new(toggle_x, area.y, BUTTON_WIDTH.min(right - toggle_x), area.height.min(1)),
        menu_button: Rect::new(menu_x, area.y, BUTTON_WIDTH.min(right - menu_x), area.height.min(1)),
    }
}

/// Rows the dropdown menu occupies: tabs, a gap, contacts and a bottom border
pub fn menu_height(contact_count: usize) -> u16 {
    Tab::ALL.len() as u16 + 1 + contact_count as u16 * 2 + 1
}

pub fn menu_slots(area: Rect, contact_count: usize) -> MenuSlots {
    let inner = Rect::new(
        area.x.saturating_add(PAD_X),
        area.y,
        area.width.saturating_sub(PAD_X * 2),
        area.height.saturating_sub(1),
    );

    let tabs = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| (*tab, row(inner, i as u16)))
        .collect();

    MenuSlots {
        tabs,
        contacts: rows(inner, Tab::ALL.len() as u16 + 1, contact_count as u16 * 2),
    }
}

/// Padded content area of the main pane
pub fn main_inner(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(PAD_X),
        area.y.saturating_add(PAD_Y),
        area.width.saturating_sub(PAD_X * 2),
        area.height.saturating_sub(PAD_Y),
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Project list
// ─────────────────────────────────────────────────────────────────────────────

/// Rectangles of one project entry in the projects section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectRegion {
    pub id: ProjectId,
    pub index: usize,
    /// Index, title and marker row
    pub title: Rect,
    pub summary: Rect,
    /// Empty unless the project is expanded
    pub details: Rect,
    /// Row below the entry once every detail is revealed
    pub extent: u16,
}

/// One line of an expanded project's body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailRow {
    Blank,
    Meta(String),
    Bullet(String),
    Continuation(String),
    Tech(String),
}

/// Lines of an expanded project, showing the first `visible` details
pub fn detail_rows(project: &Project, visible: usize, width: u16) -> Vec<DetailRow> {
    let mut out = vec![DetailRow::Blank];

    let meta = format!("{} · {}", project.role, project.period);
    out.extend(wrap(&meta, width).into_iter().map(DetailRow::Meta));
    out.push(DetailRow::Blank);

    let text_width = width.saturating_sub(BULLET_WIDTH);
    for detail in project.details.iter().take(visible) {
        for (i, line) in wrap(detail, text_width).into_iter().enumerate() {
            out.push(if i == 0 {
                DetailRow::Bullet(line)
            } else {
                DetailRow::Continuation(line)
            });
        }
    }

    out.push(DetailRow::Blank);
    let tags = project
        .tech
        .iter()
        .map(|tag| format!("[{}]", tag))
        .collect::<Vec<_>>()
        .join(" ");
    out.extend(wrap(&tags, width).into_iter().map(DetailRow::Tech));
    out
}

/// Lay out the project list top to bottom in content coordinates
///
/// The list starts at row 0 of an unbounded column `width` cells wide at `x`;
/// the main pane shows a window of it at the current scroll offset.
pub fn project_regions(x: u16, width: u16, state: &AppState) -> Vec<ProjectRegion> {
    let body_width = width.saturating_sub(PROJECT_INDENT);
    let body_x = x.saturating_add(PROJECT_INDENT);
    let mut y: u16 = 0;

    state
        .content
        .projects
        .iter()
        .enumerate()
        .map(|(index, project)| {
            let title = Rect::new(x, y, width, 1);
            y = y.saturating_add(1);

            let summary_rows = wrap(project.summary, body_width).len() as u16;
            let summary = Rect::new(body_x, y, body_width, summary_rows);
            y = y.saturating_add(summary_rows);

            let (detail_height, full_height) =
                if state.disclosure.disclosure().is_expanded(project.id) {
                    let visible = state.disclosure.visible_details(project.details.len());
                    (
                        detail_rows(project, visible, body_width).len() as u16,
                        detail_rows(project, project.details.len(), body_width).len() as u16,
                    )
                } else {
                    (0, 0)
                };
            let details = Rect::new(body_x, y, body_width, detail_height);
            let extent = y.saturating_add(full_height);
            y = y.saturating_add(detail_height);

            // Gap between entries
            y = y.saturating_add(1);

            ProjectRegion {
                id: project.id,
                index,
                title,
                summary,
                details,
                extent,
            }
        })
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// About section
// ─────────────────────────────────────────────────────────────────────────────

/// Narrowest column before skills fall back to a stacked list
pub const SKILL_COLUMN_MIN: u16 = 16;

/// Rows between the about text and the skills: gap, rule, gap, heading, gap
pub const SKILLS_HEADER_HEIGHT: u16 = 5;

pub fn skills_in_columns(categories: &[SkillCategory], width: u16) -> bool {
    !categories.is_empty() && width >= SKILL_COLUMN_MIN.saturating_mul(categories.len() as u16)
}

/// Headline plus each paragraph behind a blank line
pub fn about_text_height(content: &Content, width: u16) -> u16 {
    content.about.iter().fold(1u16, |rows, paragraph| {
        rows.saturating_add(1)
            .saturating_add(wrap(paragraph, width).len() as u16)
    })
}

pub fn skills_height(categories: &[SkillCategory], width: u16) -> u16 {
    if skills_in_columns(categories, width) {
        let longest = categories.iter().map(|c| c.skills.len()).max().unwrap_or(0);
        return 1 + longest as u16;
    }

    // Stacked: name, wrapped list, blank line between categories
    categories.iter().enumerate().fold(0u16, |rows, (i, category)| {
        rows.saturating_add(u16::from(i > 0))
            .saturating_add(1)
            .saturating_add(wrap(&category.skills.join(", "), width).len() as u16)
    })
}

/// Full height of the about section at `width`
pub fn about_height(content: &Content, width: u16) -> u16 {
    about_text_height(content, width)
        .saturating_add(SKILLS_HEADER_HEIGHT)
        .saturating_add(skills_height(content.skills, width))
}

// ─────────────────────────────────────────────────────────────────────────────
// Whole screen
// ─────────────────────────────────────────────────────────────────────────────

/// Every interactive and drawable area of one frame
///
/// Screen surfaces are in terminal coordinates. The main pane's contents
/// (`content`, `projects`) are in content coordinates: row 0 is the first row
/// of the section, and `scroll` of them are above the top of `main`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regions {
    /// Wide layout only
    pub sidebar: Option<Rect>,
    /// Narrow layout only
    pub header: Option<Rect>,
    /// Narrow layout with the menu open
    pub menu: Option<Rect>,
    /// Padded main pane
    pub main: Rect,
    /// The active section at full height
    pub content: Rect,
    /// Content rows above the top of `main`
    pub scroll: u16,
    /// Absent until the theme is resolved
    pub theme_toggle: Option<Rect>,
    /// Narrow layout only
    pub menu_button: Option<Rect>,
    /// Tab entries of whichever navigation surface is visible
    pub tabs: Vec<(Tab, Rect)>,
    /// Populated while the projects tab is active
    pub projects: Vec<ProjectRegion>,
}

impl Regions {
    /// Content coordinates of a screen position inside the main pane
    pub fn to_content(&self, column: u16, row: u16) -> Option<Position> {
        let pos = Position::new(column, row);
        self.main.contains(pos).then(|| {
            Position::new(column, (row - self.main.y).saturating_add(self.scroll))
        })
    }

    /// The on-screen part of a content rectangle, if any of it is visible
    pub fn on_screen(&self, rect: Rect) -> Option<Rect> {
        let top = rect.y.max(self.scroll);
        let bottom = rect
            .bottom()
            .min(self.scroll.saturating_add(self.main.height));
        (top < bottom && rect.width > 0).then(|| {
            Rect::new(
                rect.x,
                self.main.y + (top - self.scroll),
                rect.width,
                bottom - top,
            )
        })
    }
}

pub fn regions(area: Rect, state: &AppState) -> Regions {
    let contact_count = state.content.contacts.len();
    let resolved = state.theme.is_resolved();

    let mut regions = if state.is_wide() {
        let [sidebar, main] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .areas(area);
        let slots = sidebar_slots(sidebar, contact_count);

        Regions {
            sidebar: Some(sidebar),
            header: None,
            menu: None,
            main: main_inner(main),
            content: Rect::default(),
            scroll: 0,
            theme_toggle: resolved.then_some(slots.toggle),
            menu_button: None,
            tabs: slots.tabs,
            projects: Vec::new(),
        }
    } else {
        let menu_rows = if state.navigation.is_menu_open() {
            menu_height(contact_count)
        } else {
            0
        };
        let [header, menu, main] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(menu_rows),
            Constraint::Min(0),
        ])
        .areas(area);
        let slots = header_slots(header);
        let menu = state.navigation.is_menu_open().then_some(menu);
        let tabs = menu
            .map(|menu| menu_slots(menu, contact_count).tabs)
            .unwrap_or_default();

        Regions {
            sidebar: None,
            header: Some(header),
            menu,
            main: main_inner(main),
            content: Rect::default(),
            scroll: 0,
            theme_toggle: resolved.then_some(slots.toggle),
            menu_button: Some(slots.menu_button),
            tabs,
            projects: Vec::new(),
        }
    };

    let main = regions.main;
    let content_height = match state.navigation.active_tab() {
        Tab::About => about_height(state.content, main.width),
        Tab::Projects => {
            regions.projects = project_regions(main.x, main.width, state);
            // The expanded entry counts at its final height so the scroll
            // range does not shrink under a reveal in progress
            regions
                .projects
                .iter()
                .map(|p| p.extent)
                .max()
                .unwrap_or(0)
        }
    };
    regions.content = Rect::new(main.x, 0, main.width, content_height);
    regions.scroll = scroll_offset(state, &regions);

    regions
}

/// The offset this frame draws at: a pending reveal wins over the stored
/// offset, and either is clamped so the last row never rises above the bottom
fn scroll_offset(state: &AppState, regions: &Regions) -> u16 {
    let visible = regions.main.height;
    let scroll = &state.scroll;

    let offset = scroll
        .reveal
        .and_then(|id| regions.projects.iter().find(|p| p.id == id))
        .map(|p| scroll.offset_showing(p.title.y, p.extent, visible))
        .unwrap_or(scroll.offset);

    offset.min(regions.content.height.saturating_sub(visible))
}

/// Map a left click at (`column`, `row`) to the message it triggers
pub fn hit_test(regions: &Regions, state: &AppState, column: u16, row: u16) -> Option<Message> {
    let pos = Position::new(column, row);

    if regions.theme_toggle.is_some_and(|r| r.contains(pos)) {
        return Some(Message::ToggleTheme);
    }

    if regions.menu_button.is_some_and(|r| r.contains(pos)) {
        return Some(Message::ToggleMenu);
    }

    if let Some((tab, _)) = regions.tabs.iter().find(|(_, r)| r.contains(pos)) {
        return Some(Message::SelectTab {
            tab: *tab,
            surface: state.nav_surface(),
        });
    }

    let inner = regions.to_content(column, row)?;
    regions
        .projects
        .iter()
        .find(|p| p.title.contains(inner) || p.summary.contains(inner))
        .map(|p| Message::ToggleProject(p.id))
}

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Greedy word wrap by display width; overlong words are split
pub fn wrap(text: &str, width: u16) -> Vec<String> {
    let width = width as usize;
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word.to_string();

        loop {
            let current_width = current.width();
            let gap = usize::from(!current.is_empty());
            if current_width + gap + word.width() <= width {
                if gap == 1 {
                    current.push(' ');
                }
                current.push_str(&word);
                break;
            }
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                continue;
            }
            // Word alone is wider than the line
            let (head, tail) = split_at_width(&word, width);
            lines.push(head);
            word = tail;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn split_at_width(word: &str, width: usize) -> (String, String) {
    let mut head = String::new();
    let mut used = 0;
    for (i, ch) in word.char_indices() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width && !head.is_empty() {
            return (head, word[i..].to_string());
        }
        head.push(ch);
        used += w;
    }
    (head, String::new())
}

fn row(area: Rect, offset: u16) -> Rect {
    rows(area, offset, 1)
}

fn rows(area: Rect, offset: u16, count: u16) -> Rect {
    Rect::new(area.x, area.y.saturating_add(offset), area.width, count).intersection(area)
}
