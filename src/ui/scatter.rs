//! Scatter chart rendering.

use crate::app::App;
use crate::ui::formatters::{format_axis_label, format_stat_value};
use crate::ui::ThemeColors;
use crate::util::colormaps::interpolate;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

/// Draw all points, each colored through the figure's color axis.
pub(super) fn draw_scatter(
    f: &mut Frame<'_>,
    area: Rect,
    app: &App,
    colors: &ThemeColors,
) {
    let points = app.points();
    let finite: Vec<(f64, f64, f64)> = points
        .iter()
        .copied()
        .filter(|(x, y, _)| x.is_finite() && y.is_finite())
        .collect();

    if finite.is_empty() {
        let para = Paragraph::new("No data to display")
            .style(Style::default().fg(colors.text))
            .alignment(Alignment::Center);
        f.render_widget(para, area);
        return;
    }

    let (x_min, x_max, y_min, y_max) = finite.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY),
        |(x0, x1, y0, y1), &(x, y, _)| (x0.min(x), x1.max(x), y0.min(y), y1.max(y)),
    );
    let x_bounds = app.layout.padded_bounds(x_min, x_max);
    let y_bounds = app.layout.padded_bounds(y_min, y_max);

    let (c_min, c_max) = app.figure.color_range().unwrap_or((0.0, 1.0));
    let c_span = if (c_max - c_min).abs() < 1e-10 {
        1.0
    } else {
        c_max - c_min
    };
    let scale = &app.figure.layout.coloraxis.colorscale;

    // Vertical line through the selected point.
    let selected = app.cursor_point();
    let cursor_line: Vec<(f64, f64)> = selected
        .filter(|(x, _, _)| x.is_finite())
        .map(|(x, _, _)| vec![(x, y_bounds[0]), (x, y_bounds[1])])
        .unwrap_or_default();

    // One single-point dataset per marker so each gets its own color.
    let singles: Vec<[(f64, f64); 1]> = finite.iter().map(|&(x, y, _)| [(x, y)]).collect();
    let mut datasets: Vec<Dataset<'_>> = singles
        .iter()
        .zip(&finite)
        .map(|(single, &(_, _, c))| {
            Dataset::default()
                .marker(Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(interpolate(scale, (c - c_min) / c_span)))
                .data(single)
        })
        .collect();

    if !cursor_line.is_empty() {
        datasets.push(
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(colors.accent))
                .data(&cursor_line),
        );
    }

    let layout = &app.figure.layout;
    let x_axis = Axis::default()
        .title(layout.xaxis.title.text().to_string())
        .style(Style::default().fg(colors.text))
        .bounds(x_bounds)
        .labels(axis_labels(x_bounds));
    let y_axis = Axis::default()
        .title(layout.yaxis.title.text().to_string())
        .style(Style::default().fg(colors.text))
        .bounds(y_bounds)
        .labels(axis_labels(y_bounds));

    let readout = match selected {
        Some((x, y, _)) => format!(
            " {}={}, {}={} ",
            layout.xaxis.title.text(),
            format_stat_value(x),
            layout.yaxis.title.text(),
            format_stat_value(y)
        ),
        None => String::new(),
    };

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .title(readout)
                .title_style(Style::default().fg(colors.accent)),
        )
        .x_axis(x_axis)
        .y_axis(y_axis)
        .legend_position(None);

    f.render_widget(chart, area);
}

fn axis_labels([lo, hi]: [f64; 2]) -> Vec<String> {
    vec![
        format_axis_label(lo),
        format_axis_label((lo + hi) / 2.0),
        format_axis_label(hi),
    ]
}
