//! Utility functions.
//!
//! This module provides color mapping and viewer layout settings.

pub mod colormaps;
pub mod layout_config;

pub use colormaps::{interpolate, parse_hex};
pub use layout_config::ScatterLayoutConfig;
