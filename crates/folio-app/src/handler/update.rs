//! Main update function - handles state transitions (TEA pattern)

use folio_core::prelude::*;

use crate::message::Message;
use crate::state::{AppPhase, AppState, Viewport};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Resize { width, height } => {
            state.viewport = Viewport { width, height };
            UpdateResult::none()
        }

        Message::Tick => {
            let step = state.settings.ui.tick_rate();
            state.disclosure.tick(step);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Theme
        // ─────────────────────────────────────────────────────────
        Message::Mounted => {
            if state.theme.mount() {
                UpdateResult::action(UpdateAction::ResolveTheme)
            } else {
                UpdateResult::none()
            }
        }

        Message::ThemeResolved(preference) => {
            state.theme.finish_initialize(preference);
            UpdateResult::none()
        }

        Message::ToggleTheme => match state.theme.toggle() {
            Some(preference) => UpdateResult::action(UpdateAction::PersistTheme(preference)),
            None => {
                debug!("Theme toggle ignored before resolution");
                UpdateResult::none()
            }
        },

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::SelectTab { tab, surface } => {
            let previous = state.navigation.active_tab();
            state.navigation.select_tab(tab, surface);
            if previous != tab {
                state.scroll.scroll_to_top();
            }
            UpdateResult::none()
        }

        Message::ToggleMenu => {
            state.navigation.toggle_menu();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Disclosure
        // ─────────────────────────────────────────────────────────
        Message::ToggleProject(id) => {
            match state.content.project_index(id) {
                Some(index) => {
                    let len = state.content.projects.len();
                    state.disclosure.set_cursor(index, len);
                    state.disclosure.toggle_project(id);
                    state.scroll.reveal(id);
                }
                None => warn!("Toggle for unknown project {}", id),
            }
            UpdateResult::none()
        }

        Message::ToggleFocusedProject => match state.focused_project() {
            Some(project) => UpdateResult::message(Message::ToggleProject(project.id)),
            None => UpdateResult::none(),
        },

        Message::CursorUp => {
            state.disclosure.cursor_up();
            reveal_focused(state);
            UpdateResult::none()
        }

        Message::CursorDown => {
            let len = state.content.projects.len();
            state.disclosure.cursor_down(len);
            reveal_focused(state);
            UpdateResult::none()
        }

        Message::CursorFirst => {
            let len = state.content.projects.len();
            state.disclosure.set_cursor(0, len);
            reveal_focused(state);
            UpdateResult::none()
        }

        Message::CursorLast => {
            let len = state.content.projects.len();
            state.disclosure.set_cursor(usize::MAX, len);
            reveal_focused(state);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Main pane scrolling
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => {
            state.scroll.scroll_up(1);
            UpdateResult::none()
        }

        Message::ScrollDown => {
            state.scroll.scroll_down(1);
            UpdateResult::none()
        }

        Message::ScrollToTop => {
            state.scroll.scroll_to_top();
            UpdateResult::none()
        }

        Message::ScrollToBottom => {
            state.scroll.scroll_to_bottom();
            UpdateResult::none()
        }

        Message::PageUp => {
            state.scroll.page_up();
            UpdateResult::none()
        }

        Message::PageDown => {
            state.scroll.page_down();
            UpdateResult::none()
        }
    }
}

/// Keep the keyboard cursor on screen
fn reveal_focused(state: &mut AppState) {
    if let Some(project) = state.focused_project() {
        state.scroll.reveal(project.id);
    }
}
