//! High-level figure constructors.
//!
//! [`scatter`] turns three index-aligned sequences into a marker scatter
//! figure whose point colors are mapped through a shared color axis.

use crate::error::{FigureError, Result};
use crate::figure::{
    Axis, ColorAxis, ColorBar, ColorScale, Datum, Figure, Layout, Legend, Margin, Marker, Title,
    Trace,
};

/// Labels and color scale used by [`scatter_with`].
#[derive(Debug, Clone)]
pub struct ScatterOptions {
    /// X axis title and hover label.
    pub x_label: String,
    /// Y axis title and hover label.
    pub y_label: String,
    /// Color bar title and hover label.
    pub color_label: String,
    /// Continuous color scale.
    pub color_scale: ColorScale,
}

impl Default for ScatterOptions {
    fn default() -> Self {
        Self {
            x_label: "x".to_string(),
            y_label: "y".to_string(),
            color_label: "color".to_string(),
            color_scale: ColorScale::default(),
        }
    }
}

/// Build a scatter figure with default labels and color scale.
pub fn scatter<X, Y, C>(
    x: impl IntoIterator<Item = X>,
    y: impl IntoIterator<Item = Y>,
    color: impl IntoIterator<Item = C>,
) -> Result<Figure>
where
    X: Into<Datum>,
    Y: Into<Datum>,
    C: Into<Datum>,
{
    scatter_with(x, y, color, &ScatterOptions::default())
}

/// Build a scatter figure.
///
/// Fails with [`FigureError::LengthMismatch`] unless all three sequences
/// have the same length.
pub fn scatter_with<X, Y, C>(
    x: impl IntoIterator<Item = X>,
    y: impl IntoIterator<Item = Y>,
    color: impl IntoIterator<Item = C>,
    options: &ScatterOptions,
) -> Result<Figure>
where
    X: Into<Datum>,
    Y: Into<Datum>,
    C: Into<Datum>,
{
    let x: Vec<Datum> = x.into_iter().map(Into::into).collect();
    let y: Vec<Datum> = y.into_iter().map(Into::into).collect();
    let color: Vec<Datum> = color.into_iter().map(Into::into).collect();

    if x.len() != y.len() || x.len() != color.len() {
        return Err(FigureError::length_mismatch(x.len(), y.len(), color.len()));
    }

    tracing::debug!(
        points = x.len(),
        scale = options.color_scale.name(),
        "Building scatter figure"
    );

    let trace = Trace {
        kind: "scatter".to_string(),
        mode: "markers".to_string(),
        x,
        y,
        marker: Marker {
            color,
            coloraxis: "coloraxis".to_string(),
            symbol: "circle".to_string(),
            ..Marker::default()
        },
        hovertemplate: format!(
            "{}=%{{x}}<br>{}=%{{y}}<br>{}=%{{marker.color}}<extra></extra>",
            options.x_label, options.y_label, options.color_label
        ),
        legendgroup: String::new(),
        name: String::new(),
        orientation: "v".to_string(),
        showlegend: false,
        xaxis: "x".to_string(),
        yaxis: "y".to_string(),
        ..Trace::default()
    };

    let layout = Layout {
        xaxis: Axis::new("y", options.x_label.as_str()),
        yaxis: Axis::new("x", options.y_label.as_str()),
        coloraxis: ColorAxis {
            colorbar: ColorBar {
                title: Title::new(options.color_label.as_str()),
                ..ColorBar::default()
            },
            colorscale: options.color_scale.stops(),
            ..ColorAxis::default()
        },
        legend: Legend {
            tracegroupgap: 0,
            ..Legend::default()
        },
        margin: Margin {
            t: Some(60),
            ..Margin::default()
        },
        ..Layout::default()
    };

    Ok(Figure {
        data: vec![trace],
        layout,
    })
}
