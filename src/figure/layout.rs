//! Figure layout: axes, color axis and spacing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A title. A bare string in JSON is read as `{ "text": ... }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "TitleRepr")]
pub struct Title {
    /// Title text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Placement relative to its owner, e.g. `"top"` for a color bar.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
    /// Keys not modelled here (`font`, ...), kept verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Title {
    /// Create a title with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Title text, or an empty string.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TitleRepr {
    Text(String),
    Object(TitleFields),
}

#[derive(Deserialize)]
struct TitleFields {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    side: Option<String>,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

impl From<TitleRepr> for Title {
    fn from(repr: TitleRepr) -> Self {
        match repr {
            TitleRepr::Text(text) => Self::new(text),
            TitleRepr::Object(TitleFields { text, side, extra }) => Self { text, side, extra },
        }
    }
}

/// A cartesian axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Axis {
    /// Id of the axis this one is anchored to.
    pub anchor: String,
    /// Fraction of the plot area covered by the axis.
    pub domain: [f64; 2],
    /// Axis title.
    pub title: Title,
    /// Keys not modelled here, kept verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Axis {
    /// Create an axis anchored to `anchor` with the given title.
    pub fn new(anchor: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            anchor: anchor.into(),
            title: Title::new(title),
            ..Self::default()
        }
    }
}

impl Default for Axis {
    fn default() -> Self {
        Self {
            anchor: String::new(),
            domain: [0.0, 1.0],
            title: Title::default(),
            extra: BTreeMap::new(),
        }
    }
}

/// The color bar legend of a color axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorBar {
    /// Color bar title.
    pub title: Title,
    /// Keys not modelled here, kept verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A shared continuous color axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorAxis {
    /// Legend describing the color mapping.
    pub colorbar: ColorBar,
    /// `(position, "#rrggbb")` stops, positions ascending from 0.0 to 1.0.
    pub colorscale: Vec<(f64, String)>,
    /// Lower bound of the mapped range; derived from the data when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmin: Option<f64>,
    /// Upper bound of the mapped range; derived from the data when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmax: Option<f64>,
    /// Keys not modelled here, kept verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Legend settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Legend {
    /// Gap between legend groups in pixels.
    pub tracegroupgap: u32,
    /// Keys not modelled here, kept verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Plot margins in pixels. Only the top margin is set by default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    /// Top margin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub t: Option<u32>,
    /// Bottom margin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b: Option<u32>,
    /// Left margin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l: Option<u32>,
    /// Right margin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r: Option<u32>,
    /// Keys not modelled here (`pad`, `autoexpand`), kept verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Figure layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    /// Primary x axis.
    pub xaxis: Axis,
    /// Primary y axis.
    pub yaxis: Axis,
    /// Shared color axis referenced by trace markers.
    pub coloraxis: ColorAxis,
    /// Legend settings.
    pub legend: Legend,
    /// Plot margins.
    pub margin: Margin,
    /// Keys not modelled here, kept verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}
