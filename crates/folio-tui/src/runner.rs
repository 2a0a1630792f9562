//! Main TUI runner - entry point and event loop

use folio_app::message::Message;
use folio_app::process::{process_message, Environment};
use folio_app::state::AppState;
use folio_core::prelude::*;

use super::{event, render, terminal};

/// Run the portfolio until the user quits
pub fn run(mut state: AppState, mut env: Environment) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mouse = state.settings.ui.mouse;
    let mut term = terminal::init(mouse)?;
    info!("Terminal initialized (mouse capture: {})", mouse);

    let result = run_loop(&mut term, &mut state, &mut env);

    if let Err(e) = terminal::restore(mouse) {
        warn!("Failed to restore terminal: {}", e);
    }

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    env: &mut Environment,
) -> Result<()> {
    let size = terminal.size().context("Failed to read terminal size")?;
    process_message(
        state,
        Message::Resize {
            width: size.width,
            height: size.height,
        },
        env,
    );

    // First paint happens before the theme is known
    terminal.draw(|frame| render::view(frame, state))?;
    process_message(state, Message::Mounted, env);

    let tick_rate = state.settings.ui.tick_rate();
    while !state.should_quit() {
        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll(state, tick_rate)? {
            process_message(state, message, env);
        }
    }

    info!("Quitting");
    Ok(())
}
