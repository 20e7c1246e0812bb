//! Synthetic input data.
//!
//! This module generates the index-aligned sequences that feed the
//! scatter figure.

mod synthetic;

pub use synthetic::{ratio_to_f64, Ratio, SyntheticData, DEFAULT_POINTS, RATIO_OFFSET};
