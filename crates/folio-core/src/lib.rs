//! # folio-core - Core Domain Types
//!
//! Foundation crate for folio. Provides domain types, the static portfolio
//! content, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (thiserror, toml, tracing, dirs).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Tab`] - Top-level content view (about, projects)
//! - [`ThemePreference`] - Light/dark mode
//! - [`Project`], [`ProjectId`] - Project case study records
//! - [`SkillCategory`], [`Link`], [`Content`] - Remaining static copy
//!
//! ### Content (`content`)
//! - [`CONTENT`] - The compiled-in portfolio
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use folio_core::prelude::*;
//! ```

pub mod content;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod types;

pub use content::{portfolio, CONTENT};
pub use error::{Error, Result, ResultExt};
pub use types::{Content, Link, Project, ProjectId, SkillCategory, Tab, ThemePreference};
