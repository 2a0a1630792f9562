//! Message types for the application (TEA pattern)

use folio_core::{ProjectId, Tab, ThemePreference};

use crate::input_key::InputKey;
use crate::navigation::NavSurface;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Terminal was resized
    Resize { width: u16, height: u16 },

    /// Periodic tick (poll timeout), advances the reveal animation
    Tick,

    /// Force quit
    Quit,

    // ─────────────────────────────────────────────────────────
    // Theme
    // ─────────────────────────────────────────────────────────
    /// The first frame is on screen; start theme resolution
    Mounted,
    /// Theme resolution finished
    ThemeResolved(ThemePreference),
    /// Flip the resolved theme and persist it
    ToggleTheme,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    SelectTab { tab: Tab, surface: NavSurface },
    ToggleMenu,

    // ─────────────────────────────────────────────────────────
    // Disclosure
    // ─────────────────────────────────────────────────────────
    ToggleProject(ProjectId),
    /// Toggle the project under the keyboard cursor
    ToggleFocusedProject,
    CursorUp,
    CursorDown,
    CursorFirst,
    CursorLast,

    // ─────────────────────────────────────────────────────────
    // Main pane scrolling
    // ─────────────────────────────────────────────────────────
    /// Scroll the main pane up one row
    ScrollUp,
    /// Scroll the main pane down one row
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
    PageUp,
    PageDown,
}
