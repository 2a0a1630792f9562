//! Configuration file parsing for folio
//!
//! Supports:
//! - `<config_dir>/folio/config.toml` - UI and theme settings
//! - `<config_dir>/folio/preferences.toml` - persisted theme choice (see [`crate::preferences`])

pub mod settings;
pub mod types;

pub use settings::{default_config_dir, init_config_dir, load_settings, CONFIG_FILENAME};
pub use types::*;
