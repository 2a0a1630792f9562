//! Integration tests driving folio through its library entry points

use std::fs;

use folio::Options;
use folio_app::config::{load_settings, CONFIG_FILENAME};
use folio_app::message::Message;
use folio_app::preferences::{FilePreferenceStore, PreferenceStore, PREFERENCES_FILENAME};
use folio_app::process::process_message;
use folio_app::state::AppState;
use folio_app::DARK_MODE_KEY;
use folio_core::Tab;
use tempfile::TempDir;

fn options_in(dir: &TempDir) -> Options {
    Options {
        config_dir: Some(dir.path().to_path_buf()),
        ephemeral: false,
        system_override: None,
    }
}

#[test]
fn test_print_uses_system_preference_without_saved_value() {
    let options = Options {
        ephemeral: true,
        system_override: Some(true),
        config_dir: Some(TempDir::new().unwrap().path().to_path_buf()),
    };
    let frame = folio::print_frame(&options, Tab::About, None, 100, 30).unwrap();
    assert!(frame.contains("☀ light mode"));
    assert!(frame.contains("gtm, growth, crypto."));
}

#[test]
fn test_saved_preference_beats_system() {
    let dir = TempDir::new().unwrap();
    FilePreferenceStore::in_dir(dir.path())
        .set(DARK_MODE_KEY, "true")
        .unwrap();

    let options = Options {
        system_override: Some(false),
        ..options_in(&dir)
    };
    let frame = folio::print_frame(&options, Tab::About, None, 100, 30).unwrap();
    assert!(frame.contains("light mode"));
    assert!(!frame.contains("dark mode"));
}

#[test]
fn test_print_expanded_project() {
    let dir = TempDir::new().unwrap();
    let frame =
        folio::print_frame(&options_in(&dir), Tab::Projects, Some("floppa"), 140, 50).unwrap();

    assert!(frame.contains("founder / product & growth lead · mar 2024 – present"));
    assert!(frame.contains("scaled project-owned socials to 50k+ followers."));
    assert!(frame.contains("[token design]"));
    assert!(!frame.contains("founder / product lead"));
}

#[test]
fn test_print_scrolls_to_expanded_project_on_small_terminal() {
    let dir = TempDir::new().unwrap();
    let frame =
        folio::print_frame(&options_in(&dir), Tab::Projects, Some("floppa"), 80, 24).unwrap();

    assert!(frame.contains("03  floppa"));
    assert!(frame.contains("scaled project-owned socials"));
    assert!(!frame.contains("01  sukuri protocol"));
}

#[test]
fn test_print_unknown_project_is_fatal() {
    let dir = TempDir::new().unwrap();
    let err = folio::print_frame(&options_in(&dir), Tab::Projects, Some("nope"), 100, 30)
        .unwrap_err();
    assert!(err.is_fatal());
}

#[test]
fn test_print_leaves_config_dir_untouched() {
    let dir = TempDir::new().unwrap();
    folio::print_frame(&options_in(&dir), Tab::About, None, 100, 30).unwrap();
    folio::print_frame(&options_in(&dir), Tab::Projects, Some("frame"), 100, 30).unwrap();
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);

    fs::write(
        dir.path().join(CONFIG_FILENAME),
        "[ui]\nwide_breakpoint = 200\n",
    )
    .unwrap();
    folio::print_frame(&options_in(&dir), Tab::About, None, 100, 30).unwrap();
    assert_eq!(load_settings(dir.path()).ui.wide_breakpoint, 200);
}

#[test]
fn test_breakpoint_from_config_selects_layout() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILENAME),
        "[ui]\nwide_breakpoint = 200\n",
    )
    .unwrap();

    let frame = folio::print_frame(&options_in(&dir), Tab::About, None, 100, 30).unwrap();
    assert!(frame.contains('≡'));
    assert!(!frame.contains("→ about"));
}

#[test]
fn test_ephemeral_persists_nothing() {
    let dir = TempDir::new().unwrap();
    let options = Options {
        ephemeral: true,
        ..options_in(&dir)
    };
    let settings = load_settings(dir.path());
    let mut env = folio::environment(&options, &settings).unwrap();
    let mut state = AppState::with_settings(settings);

    process_message(&mut state, Message::Mounted, &mut env);
    process_message(&mut state, Message::ToggleTheme, &mut env);

    assert!(!dir.path().join(PREFERENCES_FILENAME).exists());
}

#[test]
fn test_toggle_survives_restart() {
    let dir = TempDir::new().unwrap();
    let options = Options {
        system_override: Some(false),
        ..options_in(&dir)
    };

    let settings = load_settings(dir.path());
    let mut env = folio::environment(&options, &settings).unwrap();
    let mut state = AppState::with_settings(settings.clone());
    process_message(&mut state, Message::Mounted, &mut env);
    assert!(!state.theme.root().is_dark());
    process_message(&mut state, Message::ToggleTheme, &mut env);

    let saved = fs::read_to_string(dir.path().join(PREFERENCES_FILENAME)).unwrap();
    assert!(saved.contains("darkMode = \"true\""));

    // Restart
    let mut env = folio::environment(&options, &settings).unwrap();
    let mut state = AppState::with_settings(settings);
    process_message(&mut state, Message::Mounted, &mut env);
    assert!(state.theme.root().is_dark());
}

#[test]
fn test_reset_theme_forgets_preference() {
    let dir = TempDir::new().unwrap();
    let mut store = FilePreferenceStore::in_dir(dir.path());
    store.set(DARK_MODE_KEY, "true").unwrap();

    folio::reset_theme(&options_in(&dir)).unwrap();
    assert_eq!(store.get(DARK_MODE_KEY).unwrap(), None);

    // Nothing saved is not an error
    let empty = TempDir::new().unwrap();
    folio::reset_theme(&options_in(&empty)).unwrap();
}
