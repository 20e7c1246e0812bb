//! Status bar UI component.

use crate::app::App;
use crate::ui::formatters::format_stat_value;
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the status bar with the selected point readout.
pub(super) fn draw_status(
    f: &mut Frame<'_>,
    area: Rect,
    app: &App,
    colors: &ThemeColors,
) {
    let text = match app.cursor_point() {
        Some((x, y, c)) => format!(
            "Point {}/{}: x={}, y={}, {}={} | {}",
            app.cursor + 1,
            app.points().len(),
            format_stat_value(x),
            format_stat_value(y),
            color_label(app),
            format_stat_value(c),
            app.status
        ),
        None => format!("No points | {}", app.status),
    };

    let paragraph =
        Paragraph::new(text).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}

fn color_label(app: &App) -> &str {
    match app.figure.colorbar_title() {
        "" => "color",
        title => title,
    }
}
