//! folio Library
//!
//! Wires the workspace crates together: picks the preference store and the
//! system appearance source, loads settings, then either runs the TUI or
//! renders a single frame.

use std::path::PathBuf;

use folio_app::config::{self, Settings};
use folio_app::message::Message;
use folio_app::preferences::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
use folio_app::process::{process_message, Environment};
use folio_app::state::AppState;
use folio_app::{appearance_for, FixedAppearance, SystemAppearance, DARK_MODE_KEY};
use folio_core::logging;
use folio_core::prelude::*;
use folio_core::Tab;

/// Choices made on the command line
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Overrides `<config_dir>/folio`
    pub config_dir: Option<PathBuf>,
    /// Use the in-memory preference store
    pub ephemeral: bool,
    /// Replaces the configured system appearance source
    pub system_override: Option<bool>,
}

impl Options {
    pub fn config_dir(&self) -> Result<PathBuf> {
        match &self.config_dir {
            Some(dir) => Ok(dir.clone()),
            None => config::default_config_dir(),
        }
    }
}

/// Install error reporting and file logging
///
/// With `--config-dir` the log files land in `<dir>/logs`, beside that run's
/// config and preferences.
pub fn init(options: &Options) -> Result<()> {
    color_eyre::install().map_err(|e| Error::diagnostics(e.to_string()))?;

    let log_dir = logging::log_dir(options.config_dir.as_deref());
    logging::init(&log_dir)
}

/// Build the environment the message processor talks to
pub fn environment(options: &Options, settings: &Settings) -> Result<Environment> {
    let store: Box<dyn PreferenceStore> = if options.ephemeral {
        Box::new(MemoryPreferenceStore::new())
    } else {
        Box::new(FilePreferenceStore::in_dir(&options.config_dir()?))
    };

    let appearance: Box<dyn SystemAppearance> = match options.system_override {
        Some(dark) => Box::new(FixedAppearance(Some(dark))),
        None => appearance_for(settings.theme.system),
    };

    Ok(Environment::new(store, appearance))
}

/// How a run treats the config directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigAccess {
    /// Interactive session: write a commented default config once
    Seed,
    /// One-shot output: read whatever is there, write nothing
    ReadOnly,
}

fn load_settings(options: &Options, access: ConfigAccess) -> Result<Settings> {
    let dir = options.config_dir()?;
    if access == ConfigAccess::Seed && !options.ephemeral {
        if let Err(e) = config::init_config_dir(&dir) {
            warn!("Could not write default config to {}: {}", dir.display(), e);
        }
    }
    Ok(config::load_settings(&dir))
}

/// Run the interactive portfolio
pub fn run(options: &Options) -> Result<()> {
    let settings = load_settings(options, ConfigAccess::Seed)?;
    info!(
        "Loaded settings: wide_breakpoint={} tick_rate_ms={} mouse={}",
        settings.ui.wide_breakpoint, settings.ui.tick_rate_ms, settings.ui.mouse
    );
    let env = environment(options, &settings)?;
    let state = AppState::with_settings(settings);

    let result = folio_tui::run(state, env);

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("folio exiting");
    result
}

/// Render one fully revealed frame of `tab` as text
///
/// The theme is resolved exactly as the interactive session would resolve it.
/// Nothing is written to the config directory.
pub fn print_frame(
    options: &Options,
    tab: Tab,
    expand: Option<&str>,
    width: u16,
    height: u16,
) -> Result<String> {
    let settings = load_settings(options, ConfigAccess::ReadOnly)?;
    let mut env = environment(options, &settings)?;
    let mut state = AppState::with_settings(settings);

    process_message(&mut state, Message::Resize { width, height }, &mut env);
    process_message(&mut state, Message::Mounted, &mut env);

    let surface = state.nav_surface();
    process_message(&mut state, Message::SelectTab { tab, surface }, &mut env);

    if let Some(id) = expand {
        let project = state
            .content
            .project(id)
            .ok_or_else(|| Error::unknown_project(id))?;
        process_message(&mut state, Message::ToggleProject(project.id), &mut env);
    }
    state.disclosure.reveal_all();

    Ok(folio_tui::render_to_string(&state, width, height))
}

/// Remove the persisted theme preference
pub fn reset_theme(options: &Options) -> Result<()> {
    let dir = options.config_dir()?;
    let mut store = FilePreferenceStore::in_dir(&dir);
    store
        .remove(DARK_MODE_KEY)
        .context("Failed to clear theme preference")?;
    info!("Cleared theme preference in {}", store.path().display());
    Ok(())
}

