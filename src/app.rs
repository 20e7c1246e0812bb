//! Viewer state.

use crate::figure::Figure;
use crate::ui::Theme;
use crate::util::ScatterLayoutConfig;

/// State of the interactive figure viewer.
#[derive(Debug)]
pub struct App {
    /// Figure being shown.
    pub figure: Figure,
    /// All points of all traces as `(x, y, color)`.
    points: Vec<(f64, f64, f64)>,
    /// Index of the selected point.
    pub cursor: usize,
    /// Current theme.
    pub theme: Theme,
    /// Layout settings.
    pub layout: ScatterLayoutConfig,
    /// Status message.
    pub status: String,
}

impl App {
    /// Create a viewer for `figure`.
    pub fn new(figure: Figure, theme: Theme) -> Self {
        let points = figure.data.iter().flat_map(|t| t.points()).collect();
        Self {
            figure,
            points,
            cursor: 0,
            theme,
            layout: ScatterLayoutConfig::default(),
            status: "Ready".to_string(),
        }
    }

    /// Points as `(x, y, color)`.
    pub fn points(&self) -> &[(f64, f64, f64)] {
        &self.points
    }

    /// The selected point, if there is one.
    pub fn cursor_point(&self) -> Option<(f64, f64, f64)> {
        self.points.get(self.cursor).copied()
    }

    /// Move the point cursor to the next point.
    pub fn cursor_next(&mut self) {
        if self.cursor + 1 < self.points.len() {
            self.cursor += 1;
        }
    }

    /// Move the point cursor to the previous point.
    pub fn cursor_prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Switch to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }
}
