//! Color bar rendering.

use crate::app::App;
use crate::ui::formatters::format_axis_label;
use crate::ui::ThemeColors;
use crate::util::colormaps::interpolate;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Draw the color bar: title on the first row, gradient with min/max
/// labels on the second.
pub(super) fn draw_colorbar(
    f: &mut Frame<'_>,
    area: Rect,
    app: &App,
    colors: &ThemeColors,
) {
    if area.height < 2 || area.width < 4 {
        return;
    }

    let title = app.figure.colorbar_title();
    let title_width = title.width() as u16;
    let title_x = area.x + area.width.saturating_sub(title_width) / 2;
    f.buffer_mut().set_string(
        title_x,
        area.y,
        title,
        Style::default()
            .fg(colors.heading)
            .add_modifier(Modifier::BOLD),
    );

    let Some((min_val, max_val)) = app.figure.color_range() else {
        return;
    };

    let margin = app.layout.colorbar_label_margin;
    let bar_width = app
        .layout
        .colorbar_width
        .min((area.width as usize).saturating_sub(2 * margin));
    if bar_width == 0 {
        return;
    }

    let bar_y = area.y + 1;
    let bar_start = area.x + (area.width - bar_width as u16) / 2;
    let scale = &app.figure.layout.coloraxis.colorscale;

    for i in 0..bar_width {
        let t = i as f64 / (bar_width.max(2) - 1) as f64;
        if let Some(cell) = f.buffer_mut().cell_mut((bar_start + i as u16, bar_y)) {
            cell.set_char('█').set_fg(interpolate(scale, t));
        }
    }

    let label_style = Style::default().fg(colors.text);

    let min_label = format_axis_label(min_val);
    let min_x = bar_start.saturating_sub(min_label.width() as u16 + 1);
    f.buffer_mut()
        .set_string(min_x.max(area.x), bar_y, &min_label, label_style);

    let max_label = format_axis_label(max_val);
    let max_x = bar_start + bar_width as u16 + 1;
    if max_x < area.x + area.width {
        f.buffer_mut().set_string(max_x, bar_y, &max_label, label_style);
    }
}
