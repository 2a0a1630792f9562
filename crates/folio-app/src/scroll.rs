//! Main pane scroll state
//!
//! Used by the handler layer (scroll commands) and by the TUI layer, which
//! lays out against the offset and reports the content size after each frame.

use folio_core::ProjectId;

/// Vertical scroll position of the main pane
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollState {
    /// Rows scrolled off the top
    pub offset: u16,
    /// Content height (set during render)
    pub total_lines: u16,
    /// Visible rows (set during render)
    pub visible_lines: u16,
    /// Project to bring into view on the next frame
    pub reveal: Option<ProjectId>,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_offset(&self) -> u16 {
        self.total_lines.saturating_sub(self.visible_lines)
    }

    /// Scroll up by n rows
    pub fn scroll_up(&mut self, n: u16) {
        self.reveal = None;
        self.offset = self.offset.saturating_sub(n);
    }

    /// Scroll down by n rows, stopping where the last row is at the bottom
    pub fn scroll_down(&mut self, n: u16) {
        self.reveal = None;
        self.offset = self.offset.saturating_add(n).min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.reveal = None;
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.reveal = None;
        self.offset = self.max_offset();
    }

    /// Page up, keeping two rows of context
    pub fn page_up(&mut self) {
        self.scroll_up(self.page());
    }

    /// Page down, keeping two rows of context
    pub fn page_down(&mut self) {
        self.scroll_down(self.page());
    }

    fn page(&self) -> u16 {
        self.visible_lines.saturating_sub(2).max(1)
    }

    /// Ask the next frame to scroll `id` into view
    pub fn reveal(&mut self, id: ProjectId) {
        self.reveal = Some(id);
    }

    /// Offset that shows rows `start..end` in a view of `visible` rows
    ///
    /// Moves as little as possible. When the span is taller than the view its
    /// first row wins.
    pub fn offset_showing(&self, start: u16, end: u16, visible: u16) -> u16 {
        if start < self.offset {
            start
        } else if end > self.offset.saturating_add(visible) {
            end.saturating_sub(visible).min(start)
        } else {
            self.offset
        }
    }

    /// Record the frame just drawn: its content size and the offset it used
    pub fn update_content_size(&mut self, total: u16, visible: u16, offset: u16) {
        self.total_lines = total;
        self.visible_lines = visible;
        self.offset = offset.min(self.max_offset());
        self.reveal = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized(total: u16, visible: u16) -> ScrollState {
        let mut state = ScrollState::new();
        state.update_content_size(total, visible, 0);
        state
    }

    #[test]
    fn test_scroll_down_stops_at_bottom() {
        let mut state = sized(50, 20);
        state.scroll_down(25);
        assert_eq!(state.offset, 25);
        state.scroll_down(25);
        assert_eq!(state.offset, 30);
    }

    #[test]
    fn test_scroll_up_stops_at_top() {
        let mut state = sized(50, 20);
        state.scroll_down(3);
        state.scroll_up(10);
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn test_content_that_fits_never_scrolls() {
        let mut state = sized(10, 20);
        state.scroll_down(5);
        state.page_down();
        state.scroll_to_bottom();
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn test_page_keeps_context() {
        let mut state = sized(100, 20);
        state.page_down();
        assert_eq!(state.offset, 18);
        state.page_down();
        assert_eq!(state.offset, 36);
        state.page_up();
        assert_eq!(state.offset, 18);
    }

    #[test]
    fn test_page_on_tiny_view_still_moves() {
        let mut state = sized(10, 1);
        state.page_down();
        assert_eq!(state.offset, 1);
    }

    #[test]
    fn test_top_and_bottom() {
        let mut state = sized(40, 15);
        state.scroll_to_bottom();
        assert_eq!(state.offset, 25);
        state.scroll_to_top();
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn test_offset_showing_moves_minimally() {
        let mut state = sized(100, 20);
        state.offset = 10;

        // Already visible
        assert_eq!(state.offset_showing(12, 25, 20), 10);
        // Below: bottom of the span lands on the last row
        assert_eq!(state.offset_showing(32, 40, 20), 20);
        // Above: first row lands on the top
        assert_eq!(state.offset_showing(4, 8, 20), 4);
        // Taller than the view: first row wins
        assert_eq!(state.offset_showing(30, 80, 20), 30);
    }

    #[test]
    fn test_manual_scroll_cancels_pending_reveal() {
        let mut state = sized(100, 20);
        state.reveal(ProjectId("frame"));
        state.scroll_down(1);
        assert_eq!(state.reveal, None);
    }

    #[test]
    fn test_frame_report_clears_reveal_and_clamps() {
        let mut state = ScrollState::new();
        state.reveal(ProjectId("floppa"));
        state.update_content_size(30, 20, 25);
        assert_eq!(state.reveal, None);
        assert_eq!(state.offset, 10);
    }
}
