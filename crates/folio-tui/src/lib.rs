//! folio-tui - Terminal UI for folio
//!
//! This crate provides the ratatui-based view of the portfolio: palettes,
//! the pure layout shared by rendering and mouse hit testing, widgets,
//! crossterm event translation and the terminal runner.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use render::{render_to_string, view};
pub use runner::run;
