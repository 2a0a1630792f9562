//! Message processing with side-effect execution
//!
//! Runs the TEA update loop to completion for one incoming message and
//! performs the [`UpdateAction`]s it returns against the [`Environment`].

use std::collections::VecDeque;

use folio_core::prelude::*;

use crate::appearance::SystemAppearance;
use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::preferences::PreferenceStore;
use crate::state::AppState;
use crate::theme::{self, DARK_MODE_KEY};

/// The only I/O the core performs: preference storage and system appearance
pub struct Environment {
    pub store: Box<dyn PreferenceStore>,
    pub appearance: Box<dyn SystemAppearance>,
}

impl Environment {
    pub fn new(store: Box<dyn PreferenceStore>, appearance: Box<dyn SystemAppearance>) -> Self {
        Self { store, appearance }
    }
}

/// Process a message through the TEA update function
///
/// Every follow-up message and action is handled before returning, so the
/// next input event always sees fully updated state.
pub fn process_message(state: &mut AppState, message: Message, env: &mut Environment) {
    let mut queue = VecDeque::from([message]);

    while let Some(msg) = queue.pop_front() {
        trace!("Processing {:?}", msg);
        let result = handler::update(state, msg);

        if let Some(action) = result.action {
            if let Some(reply) = handle_action(action, env) {
                queue.push_back(reply);
            }
        }

        if let Some(follow_up) = result.message {
            queue.push_back(follow_up);
        }
    }
}

/// Perform a side effect, optionally producing a message
fn handle_action(action: UpdateAction, env: &mut Environment) -> Option<Message> {
    match action {
        UpdateAction::ResolveTheme => {
            let persisted = match env.store.get(DARK_MODE_KEY) {
                Ok(value) => value,
                Err(e) => {
                    warn!("Failed to read theme preference: {}", e);
                    None
                }
            };
            let system = env.appearance.prefers_dark();
            let preference = theme::resolve(persisted.as_deref(), system);
            debug!(
                "Resolving theme: persisted={:?} system={:?} -> {}",
                persisted, system, preference
            );
            Some(Message::ThemeResolved(preference))
        }

        UpdateAction::PersistTheme(preference) => {
            if let Err(e) = env.store.set(DARK_MODE_KEY, preference.as_stored()) {
                warn!("Failed to persist theme preference: {}", e);
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appearance::FixedAppearance;
    use crate::preferences::{FilePreferenceStore, MemoryPreferenceStore};
    use crate::theme::ThemeState;
    use folio_core::ThemePreference;
    use std::cell::Cell;
    use std::rc::Rc;

    fn env_with(store: impl PreferenceStore + 'static, system: Option<bool>) -> Environment {
        Environment::new(Box::new(store), Box::new(FixedAppearance(system)))
    }

    fn mount(env: &mut Environment) -> AppState {
        let mut state = AppState::new();
        process_message(&mut state, Message::Mounted, env);
        state
    }

    /// Store that counts reads
    struct CountingStore {
        inner: MemoryPreferenceStore,
        reads: Rc<Cell<usize>>,
    }

    impl PreferenceStore for CountingStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.reads.set(self.reads.get() + 1);
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            self.inner.set(key, value)
        }

        fn remove(&mut self, key: &str) -> Result<()> {
            self.inner.remove(key)
        }
    }

    /// Store whose every operation fails
    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(Error::preferences("unavailable"))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::preferences("unavailable"))
        }

        fn remove(&mut self, _key: &str) -> Result<()> {
            Err(Error::preferences("unavailable"))
        }
    }

    #[test]
    fn test_fallback_to_system_preference() {
        let mut env = env_with(MemoryPreferenceStore::new(), Some(true));
        let state = mount(&mut env);
        assert_eq!(state.theme.state(), ThemeState::Resolved(ThemePreference::Dark));
        assert!(state.theme.root().is_dark());

        let mut env = env_with(MemoryPreferenceStore::new(), Some(false));
        let state = mount(&mut env);
        assert_eq!(
            state.theme.state(),
            ThemeState::Resolved(ThemePreference::Light)
        );
    }

    #[test]
    fn test_no_preference_anywhere_is_light() {
        let mut env = env_with(MemoryPreferenceStore::new(), None);
        let state = mount(&mut env);
        assert_eq!(
            state.theme.state(),
            ThemeState::Resolved(ThemePreference::Light)
        );
    }

    #[test]
    fn test_empty_persisted_value_falls_back() {
        let mut env = env_with(MemoryPreferenceStore::with_entry(DARK_MODE_KEY, ""), Some(true));
        let state = mount(&mut env);
        assert_eq!(state.theme.state(), ThemeState::Resolved(ThemePreference::Dark));
    }

    #[test]
    fn test_toggle_then_reload_round_trip() {
        for system in [Some(true), Some(false), None] {
            for start in [ThemePreference::Light, ThemePreference::Dark] {
                let temp = tempfile::tempdir().unwrap();
                let mut store = FilePreferenceStore::in_dir(temp.path());
                store.set(DARK_MODE_KEY, start.as_stored()).unwrap();

                let mut env = env_with(store.clone(), system);
                let mut state = mount(&mut env);
                assert_eq!(state.theme.state().preference(), Some(start));

                process_message(&mut state, Message::ToggleTheme, &mut env);
                let toggled = start.toggled();
                assert_eq!(
                    store.get(DARK_MODE_KEY).unwrap().as_deref(),
                    Some(toggled.as_stored())
                );

                // Simulated reload: fresh state, same storage
                let mut env = env_with(FilePreferenceStore::in_dir(temp.path()), system);
                let reloaded = mount(&mut env);
                assert_eq!(reloaded.theme.state().preference(), Some(toggled));
                assert_eq!(reloaded.theme.root().is_dark(), toggled.is_dark());
            }
        }
    }

    #[test]
    fn test_mount_twice_reads_store_once() {
        let reads = Rc::new(Cell::new(0));
        let store = CountingStore {
            inner: MemoryPreferenceStore::new(),
            reads: Rc::clone(&reads),
        };
        let mut env = env_with(store, Some(true));
        let mut state = mount(&mut env);
        process_message(&mut state, Message::Mounted, &mut env);
        assert_eq!(reads.get(), 1);
    }

    #[test]
    fn test_toggle_before_mount_persists_nothing() {
        let reads = Rc::new(Cell::new(0));
        let store = CountingStore {
            inner: MemoryPreferenceStore::new(),
            reads: Rc::clone(&reads),
        };
        let mut env = env_with(store, Some(false));
        let mut state = AppState::new();
        process_message(&mut state, Message::ToggleTheme, &mut env);

        // Nothing was resolved, so the store was never consulted
        assert_eq!(reads.get(), 0);
        assert_eq!(state.theme.state(), ThemeState::Uninitialized);
        assert_eq!(env.store.get(DARK_MODE_KEY).unwrap(), None);
    }

    #[test]
    fn test_broken_store_degrades_gracefully() {
        let mut env = env_with(BrokenStore, None);
        let mut state = mount(&mut env);
        assert_eq!(
            state.theme.state(),
            ThemeState::Resolved(ThemePreference::Light)
        );

        // Failed write is lost, state still flips
        process_message(&mut state, Message::ToggleTheme, &mut env);
        assert!(state.theme.root().is_dark());
    }

    #[test]
    fn test_key_follow_up_is_processed() {
        let mut env = env_with(MemoryPreferenceStore::new(), None);
        let mut state = mount(&mut env);
        process_message(
            &mut state,
            Message::Key(crate::input_key::InputKey::Char('t')),
            &mut env,
        );
        assert!(state.theme.root().is_dark());
        assert_eq!(
            env.store.get(DARK_MODE_KEY).unwrap().as_deref(),
            Some("true")
        );
    }
}
