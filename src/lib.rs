//! Colorscatter - color-mapped scatter figures in the Plotly JSON schema.
//!
//! Colorscatter generates a small synthetic data set, builds a scatter
//! figure whose marker colors run through a continuous color axis, titles
//! the color bar, writes the figure as JSON and shows it in the terminal.
//!
//! # Features
//!
//! - Exact synthetic data (integer squares, rational ratios)
//! - Plotly-compatible figure JSON, readable back into a [`Figure`]
//! - Layout patches with "magic underscore" keys
//! - Interactive terminal viewer with a color bar and point cursor
//!
//! # Example
//!
//! ```no_run
//! use colorscatter::{express, export};
//! use serde_json::json;
//! use std::path::Path;
//!
//! let mut fig = express::scatter([0, 1, 2], [0, 1, 4], [0.0, 0.5, 1.0])?;
//! fig.update_layout(json!({ "coloraxis_colorbar": { "title": "qwe" } }))?;
//! export::write_json(&fig, Path::new("plotly_example.json"), export::Style::Compact)?;
//! # Ok::<(), colorscatter::FigureError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod data;
pub mod error;
pub mod export;
pub mod express;
pub mod figure;
pub mod pipeline;
pub mod present;
pub mod ui;
pub mod util;

pub use error::{FigureError, Result};
pub use figure::Figure;
