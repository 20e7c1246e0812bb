//! Figure model in the Plotly JSON schema.
//!
//! A [`Figure`] holds scatter traces and a layout. It serializes to the
//! `{ "data": [...], "layout": {...} }` shape that Plotly reads.

mod layout;
mod trace;
mod update;

pub use layout::{Axis, ColorAxis, ColorBar, Layout, Legend, Margin, Title};
pub use trace::{Datum, Marker, Trace};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{FigureError, Result};

/// Continuous color scale for the color axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorScale {
    /// Plasma (perceptually uniform, the default for continuous color).
    #[default]
    Plasma,
    /// Viridis (perceptually uniform, colorblind-friendly).
    Viridis,
    /// Rainbow (traditional, high contrast).
    Rainbow,
    /// Blue-to-red.
    #[value(name = "bluered")]
    BlueRed,
}

impl ColorScale {
    /// Get the next scale in cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Plasma => Self::Viridis,
            Self::Viridis => Self::Rainbow,
            Self::Rainbow => Self::BlueRed,
            Self::BlueRed => Self::Plasma,
        }
    }

    /// Get scale name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Plasma => "Plasma",
            Self::Viridis => "Viridis",
            Self::Rainbow => "Rainbow",
            Self::BlueRed => "Blue-Red",
        }
    }
}

/// A chart: traces plus layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Figure {
    /// Traces, drawn in order.
    pub data: Vec<Trace>,
    /// Layout and styling.
    pub layout: Layout,
}

impl Figure {
    /// Apply a layout patch.
    ///
    /// `patch` must be a JSON object. Nested objects are merged, keys with
    /// underscores address nested properties, and a string `title` sets
    /// the title text. The layout is left untouched if the result does not
    /// form a valid layout.
    pub fn update_layout(&mut self, patch: Value) -> Result<()> {
        let patch = match patch {
            Value::Object(map) => map,
            other => {
                return Err(FigureError::InvalidPatch {
                    kind: update::json_kind(&other),
                })
            }
        };

        let mut current = match serde_json::to_value(&self.layout)? {
            Value::Object(map) => map,
            _ => serde_json::Map::new(),
        };
        update::merge_patch(&mut current, patch);

        self.layout = serde_json::from_value(Value::Object(current))?;
        tracing::debug!("Layout updated");
        Ok(())
    }

    /// Set the color bar title text.
    pub fn set_colorbar_title(&mut self, text: impl Into<String>) {
        self.layout.coloraxis.colorbar.title.text = Some(text.into());
    }

    /// Color bar title text.
    pub fn colorbar_title(&self) -> &str {
        self.layout.coloraxis.colorbar.title.text()
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a figure from JSON and [`validate`](Self::validate) it.
    pub fn from_json(input: &str) -> Result<Self> {
        let figure: Self = serde_json::from_str(input)?;
        figure.validate()?;
        Ok(figure)
    }

    /// Check that every trace has index-aligned `x`, `y` and marker colors.
    ///
    /// A trace without marker colors passes as long as `x` and `y` agree.
    pub fn validate(&self) -> Result<()> {
        for trace in &self.data {
            let (x, y, color) = (trace.x.len(), trace.y.len(), trace.marker.color.len());
            if x != y || (color != 0 && color != x) {
                return Err(FigureError::length_mismatch(x, y, color));
            }
        }
        Ok(())
    }

    /// Range of the color values, honoring `cmin`/`cmax` when set.
    ///
    /// Returns `None` when the figure has no finite color values and no
    /// explicit bounds.
    pub fn color_range(&self) -> Option<(f64, f64)> {
        let (lo, hi) = self
            .data
            .iter()
            .flat_map(|t| t.marker.color.iter())
            .map(|d| d.as_f64())
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
                (min.min(v), max.max(v))
            });

        let axis = &self.layout.coloraxis;
        let lo = axis.cmin.unwrap_or(lo);
        let hi = axis.cmax.unwrap_or(hi);
        (lo.is_finite() && hi.is_finite()).then_some((lo, hi))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn colored(values: &[f64]) -> Figure {
        let mut fig = Figure::default();
        fig.data.push(Trace {
            marker: Marker {
                color: values.iter().map(|&v| Datum::Float(v)).collect(),
                ..Marker::default()
            },
            ..Trace::default()
        });
        fig
    }

    #[test]
    fn update_layout_sets_colorbar_title() {
        let mut fig = Figure::default();
        fig.set_colorbar_title("color");
        fig.update_layout(json!({ "coloraxis_colorbar": { "title": "qwe" } }))
            .unwrap();
        assert_eq!(fig.colorbar_title(), "qwe");
    }

    #[test]
    fn update_layout_rejects_non_objects() {
        let mut fig = Figure::default();
        let err = fig.update_layout(json!(["nope"])).unwrap_err();
        assert!(matches!(err, FigureError::InvalidPatch { kind: "an array" }));
    }

    #[test]
    fn invalid_patch_leaves_layout_untouched() {
        let mut fig = Figure::default();
        fig.set_colorbar_title("keep");
        let err = fig.update_layout(json!({ "legend_tracegroupgap": "wide" }));
        assert!(matches!(err, Err(FigureError::Json(_))));
        assert_eq!(fig.colorbar_title(), "keep");
    }

    #[test]
    fn update_layout_keeps_unmodelled_nested_keys() {
        let mut fig = crate::express::scatter([0, 1], [0, 1], [0.0, 0.5]).unwrap();
        fig.update_layout(json!({
            "legend_orientation": "h",
            "margin_pad": 4,
            "coloraxis_colorbar_title_font_size": 20,
        }))
        .unwrap();

        let out: Value = serde_json::from_str(&fig.to_json().unwrap()).unwrap();
        let layout = &out["layout"];
        assert_eq!(layout["legend"]["orientation"], "h");
        assert_eq!(layout["legend"]["tracegroupgap"], 0);
        assert_eq!(layout["margin"]["pad"], 4);
        assert_eq!(layout["margin"]["t"], 60);
        assert_eq!(layout["coloraxis"]["colorbar"]["title"]["font"]["size"], 20);
        assert_eq!(layout["coloraxis"]["colorbar"]["title"]["text"], "color");
    }

    #[test]
    fn update_layout_sets_background_colors() {
        let mut fig = Figure::default();
        assert!(!fig.layout.extra.contains_key("paper_bgcolor"));

        fig.update_layout(json!({ "paper_bgcolor": "#fff", "plot_bgcolor": "#eee" }))
            .unwrap();

        assert_eq!(fig.layout.extra["paper_bgcolor"], json!("#fff"));
        assert_eq!(fig.layout.extra["plot_bgcolor"], json!("#eee"));
        assert!(!fig.layout.extra.contains_key("paper"));
        assert!(!fig.layout.extra.contains_key("plot"));
    }

    #[test]
    fn from_json_rejects_misaligned_traces() {
        let err = Figure::from_json(r#"{ "data": [ { "x": [1, 2, 3], "y": [1, 2] } ] }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            FigureError::LengthMismatch { x: 3, y: 2, color: 0 }
        ));

        let err = Figure::from_json(
            r#"{ "data": [ { "x": [1, 2], "y": [1, 2], "marker": { "color": [0.5] } } ] }"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            FigureError::LengthMismatch { x: 2, y: 2, color: 1 }
        ));
    }

    #[test]
    fn color_range_spans_data() {
        let fig = colored(&[0.25, 0.0, 0.75]);
        assert_eq!(fig.color_range(), Some((0.0, 0.75)));
        assert_eq!(Figure::default().color_range(), None);
    }

    #[test]
    fn color_range_prefers_explicit_bounds() {
        let mut fig = colored(&[0.25, 0.5]);
        fig.layout.coloraxis.cmin = Some(0.0);
        fig.layout.coloraxis.cmax = Some(1.0);
        assert_eq!(fig.color_range(), Some((0.0, 1.0)));
    }

    #[test]
    fn json_round_trip() {
        let mut fig = colored(&[0.5]);
        fig.set_colorbar_title("qwe");
        let back = Figure::from_json(&fig.to_json().unwrap()).unwrap();
        assert_eq!(back, fig);
    }

    #[test]
    fn scale_cycle_returns_to_start() {
        let mut scale = ColorScale::default();
        for _ in 0..4 {
            scale = scale.next();
        }
        assert_eq!(scale, ColorScale::Plasma);
    }
}
