//! Scatter traces.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::data::{ratio_to_f64, Ratio};

/// A single numeric value as stored in figure JSON.
///
/// Integers stay integers through an export/import round trip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Datum {
    /// Integral value.
    Int(i64),
    /// Floating point value.
    Float(f64),
}

impl Datum {
    /// Value as `f64`.
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) => num_traits::cast(v).unwrap_or(f64::NAN),
            Self::Float(v) => v,
        }
    }
}

impl From<i64> for Datum {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Datum {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for Datum {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<Ratio> for Datum {
    fn from(r: Ratio) -> Self {
        Self::Float(ratio_to_f64(r))
    }
}

/// Marker styling for a scatter trace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Marker {
    /// Per-point color values, mapped through the referenced color axis.
    pub color: Vec<Datum>,
    /// Id of the shared color axis (`"coloraxis"`).
    pub coloraxis: String,
    /// Marker symbol name.
    pub symbol: String,
    /// Keys not modelled here, kept verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A scatter trace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Trace {
    /// Trace type, always `"scatter"` for traces built here.
    #[serde(rename = "type")]
    pub kind: String,
    /// Drawing mode (`"markers"`).
    pub mode: String,
    /// X coordinates.
    pub x: Vec<Datum>,
    /// Y coordinates.
    pub y: Vec<Datum>,
    /// Marker styling, including per-point colors.
    pub marker: Marker,
    /// Hover label template.
    pub hovertemplate: String,
    /// Legend group.
    pub legendgroup: String,
    /// Trace name.
    pub name: String,
    /// Orientation (`"v"`).
    pub orientation: String,
    /// Whether the trace is listed in the legend.
    pub showlegend: bool,
    /// Id of the x axis.
    pub xaxis: String,
    /// Id of the y axis.
    pub yaxis: String,
    /// Keys not modelled here, kept verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Trace {
    /// Iterate `(x, y, color)` triples as floats.
    ///
    /// Stops at the shortest of the three sequences.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.x
            .iter()
            .zip(&self.y)
            .zip(&self.marker.color)
            .map(|((x, y), c)| (x.as_f64(), y.as_f64(), c.as_f64()))
    }

    /// Number of points in the trace.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Check if the trace has no points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}
