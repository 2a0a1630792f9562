//! Terminal setup and restoration

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use folio_core::prelude::*;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::execute!(std::io::stdout(), DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Enter the alternate screen in raw mode, optionally capturing the mouse
pub fn init(mouse: bool) -> Result<ratatui::DefaultTerminal> {
    let terminal = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    if mouse {
        crossterm::execute!(std::io::stdout(), EnableMouseCapture)
            .map_err(|e| Error::TerminalInit(e.to_string()))?;
    }
    Ok(terminal)
}

/// Leave the alternate screen and raw mode
pub fn restore(mouse: bool) -> Result<()> {
    if mouse {
        crossterm::execute!(std::io::stdout(), DisableMouseCapture)
            .map_err(|e| Error::TerminalRestore(e.to_string()))?;
    }
    ratatui::try_restore().map_err(|e| Error::TerminalRestore(e.to_string()))
}
