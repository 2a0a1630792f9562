//! Centralized theme system for the portfolio view.
//!
//! This module provides:
//! - `palette`: the light and dark color sets
//! - `styles`: semantic style builder functions over a palette

pub mod palette;
pub mod styles;

pub use palette::Palette;
