//! Layout configuration constants for the terminal scatter view.

/// Configuration for the scatter view layout.
#[derive(Debug, Clone)]
pub struct ScatterLayoutConfig {
    /// Padding factor for both axes (0.15 = 15% margin).
    pub axis_padding_factor: f64,
    /// Maximum width of the color bar in characters.
    pub colorbar_width: usize,
    /// Columns kept free on each side of the color bar for min/max labels.
    pub colorbar_label_margin: usize,
    /// Rows reserved above the chart for the color bar and its title.
    pub colorbar_height: u16,
}

impl Default for ScatterLayoutConfig {
    fn default() -> Self {
        Self {
            axis_padding_factor: 0.15,
            colorbar_width: 40,
            colorbar_label_margin: 10,
            colorbar_height: 2,
        }
    }
}

impl ScatterLayoutConfig {
    /// Pad a `[min, max]` range so points do not sit on the chart border.
    ///
    /// A degenerate range is widened by one unit on each side.
    pub fn padded_bounds(&self, min: f64, max: f64) -> [f64; 2] {
        if !min.is_finite() || !max.is_finite() {
            return [0.0, 1.0];
        }
        let span = max - min;
        if span.abs() < 1e-10 {
            return [min - 1.0, max + 1.0];
        }
        let pad = span * self.axis_padding_factor;
        [min - pad, max + pad]
    }
}
