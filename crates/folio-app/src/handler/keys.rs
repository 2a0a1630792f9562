//! Key event handlers

use folio_core::Tab;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert key events to messages based on current state
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        // Hidden until the theme is resolved
        InputKey::Char('t') if state.theme.is_resolved() => Some(Message::ToggleTheme),

        // Only the narrow layout has a menu
        InputKey::Char('m') if !state.is_wide() => Some(Message::ToggleMenu),

        InputKey::Char('1' | 'a') => select(state, Tab::About),
        InputKey::Char('2' | 'p') => select(state, Tab::Projects),
        InputKey::Tab | InputKey::Right => select(state, state.navigation.active_tab().next()),
        InputKey::BackTab | InputKey::Left => {
            select(state, state.navigation.active_tab().prev())
        }

        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),

        _ => match state.navigation.active_tab() {
            Tab::About => handle_key_about(key),
            Tab::Projects => handle_key_projects(key),
        },
    }
}

fn select(state: &AppState, tab: Tab) -> Option<Message> {
    Some(Message::SelectTab {
        tab,
        surface: state.nav_surface(),
    })
}

/// The about tab has nothing to focus; vertical keys scroll
fn handle_key_about(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::ScrollToTop),
        InputKey::End | InputKey::Char('G') => Some(Message::ScrollToBottom),
        _ => None,
    }
}

/// Handle key events on the projects tab
fn handle_key_projects(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::CursorUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::CursorDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::CursorFirst),
        InputKey::End | InputKey::Char('G') => Some(Message::CursorLast),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::ToggleFocusedProject),
        _ => None,
    }
}
