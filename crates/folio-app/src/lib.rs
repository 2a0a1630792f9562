//! folio-app - Application state and orchestration for folio
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! portfolio's view state: the theme controller, navigation and disclosure
//! state, the update function, and the environment seams (preference storage,
//! system appearance) that the message processor drives.

pub mod appearance;
pub mod config;
pub mod disclosure;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod navigation;
pub mod preferences;
pub mod process;
pub mod scroll;
pub mod state;
pub mod theme;

// Re-export primary types
pub use appearance::{appearance_for, EnvAppearance, FixedAppearance, SystemAppearance};
pub use disclosure::{Disclosure, DisclosureState, DETAIL_STAGGER};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use navigation::{NavSurface, NavigationState};
pub use preferences::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use process::{process_message, Environment};
pub use scroll::ScrollState;
pub use state::{AppState, Viewport};
pub use theme::{DocumentRoot, ThemeController, ThemeState, DARK_MODE_KEY};
