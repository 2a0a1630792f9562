//! Terminal event polling

use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use folio_app::message::Message;
use folio_app::state::AppState;
use folio_app::InputKey;
use folio_core::prelude::*;
use ratatui::layout::Rect;
use std::time::Duration;

use crate::layout;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        _ => None, // Unsupported keys ignored
    }
}

/// Wheel scrolls the main pane; a left click resolves against the layout of
/// the current frame
pub fn mouse_event_to_message(mouse: MouseEvent, state: &AppState) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::ScrollUp => Some(Message::ScrollUp),
        MouseEventKind::ScrollDown => Some(Message::ScrollDown),
        MouseEventKind::Down(MouseButton::Left) => {
            let area = Rect::new(0, 0, state.viewport.width, state.viewport.height);
            let regions = layout::regions(area, state);
            layout::hit_test(&regions, state, mouse.column, mouse.row)
        }
        _ => None,
    }
}

/// Translate one terminal event
pub fn translate(event: Event, state: &AppState) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            key_event_to_input(key).map(Message::Key)
        }
        Event::Mouse(mouse) => mouse_event_to_message(mouse, state),
        Event::Resize(width, height) => Some(Message::Resize { width, height }),
        _ => None,
    }
}

/// Poll for terminal events with timeout
///
/// A timeout produces [`Message::Tick`], which drives the detail reveal.
pub fn poll(state: &AppState, timeout: Duration) -> Result<Option<Message>> {
    if event::poll(timeout)? {
        let event = event::read()?;
        Ok(translate(event, state))
    } else {
        Ok(Some(Message::Tick))
    }
}
