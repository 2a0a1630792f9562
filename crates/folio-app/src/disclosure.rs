//! Disclosure state: which single project is expanded
//!
//! "At most one expanded" is carried by the [`Disclosure`] sum type rather
//! than a per-project flag.

use std::time::Duration;

use folio_core::prelude::*;
use folio_core::ProjectId;

/// Delay between consecutive detail lines appearing after expansion
pub const DETAIL_STAGGER: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Disclosure {
    #[default]
    Collapsed,
    Expanded(ProjectId),
}

impl Disclosure {
    /// Toggle `id`: collapse it if expanded, otherwise expand it alone
    pub fn toggled(self, id: ProjectId) -> Self {
        match self {
            Disclosure::Expanded(current) if current == id => Disclosure::Collapsed,
            _ => Disclosure::Expanded(id),
        }
    }

    pub fn expanded(self) -> Option<ProjectId> {
        match self {
            Disclosure::Collapsed => None,
            Disclosure::Expanded(id) => Some(id),
        }
    }

    pub fn is_expanded(self, id: ProjectId) -> bool {
        self.expanded() == Some(id)
    }
}

/// Disclosure plus the cosmetic reveal clock and keyboard cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisclosureState {
    disclosure: Disclosure,
    /// Time since the last toggle, drives the staggered reveal
    reveal: Duration,
    /// Project under the keyboard cursor
    cursor: usize,
}

impl DisclosureState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn disclosure(&self) -> Disclosure {
        self.disclosure
    }

    pub fn expanded(&self) -> Option<ProjectId> {
        self.disclosure.expanded()
    }

    pub fn toggle_project(&mut self, id: ProjectId) {
        self.disclosure = self.disclosure.toggled(id);
        self.reveal = Duration::ZERO;
        match self.disclosure {
            Disclosure::Expanded(id) => debug!("Expanded project {}", id),
            Disclosure::Collapsed => debug!("Collapsed project {}", id),
        }
    }

    /// Advance the reveal clock
    pub fn tick(&mut self, elapsed: Duration) {
        self.reveal = self.reveal.saturating_add(elapsed);
    }

    /// Skip the staggered reveal (one-shot rendering)
    pub fn reveal_all(&mut self) {
        self.reveal = Duration::MAX;
    }

    /// Number of leading details currently visible out of `total`
    pub fn visible_details(&self, total: usize) -> usize {
        let steps = self.reveal.as_millis() / DETAIL_STAGGER.as_millis();
        let steps = usize::try_from(steps).unwrap_or(usize::MAX);
        steps.saturating_add(1).min(total)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_cursor(&mut self, index: usize, len: usize) {
        self.cursor = index.min(len.saturating_sub(1));
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self, len: usize) {
        self.set_cursor(self.cursor.saturating_add(1), len);
    }
}
