//! User interface rendering.

mod colorbar;
pub mod formatters;
mod keymap_bar;
mod scatter;
mod status_bar;
mod theme;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

pub use theme::{Theme, ThemeColors};

/// Draw the viewer.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(app.theme);

    f.render_widget(Block::default().style(Style::default().bg(colors.bg)), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(app.layout.colorbar_height),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    colorbar::draw_colorbar(f, chunks[0], app, &colors);
    scatter::draw_scatter(f, chunks[1], app, &colors);
    status_bar::draw_status(f, chunks[2], app, &colors);
    keymap_bar::draw_keymap(f, chunks[3], &colors);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::express;
    use crate::figure::Figure;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn shows_colorbar_title_and_selected_point() {
        let mut fig = express::scatter([0, 1, 2], [0, 1, 4], [0.0, 0.5, 1.0]).unwrap();
        fig.set_colorbar_title("qwe");
        let mut app = App::new(fig, Theme::default());
        app.cursor_next();

        let screen = render(&app);
        assert!(screen.contains("qwe"));
        assert!(screen.contains("Point 2/3: x=1, y=1, qwe=0.50000"));
        assert!(screen.contains('█'));
    }

    #[test]
    fn empty_figure_renders_placeholder() {
        let app = App::new(Figure::default(), Theme::GruvboxLight);
        let screen = render(&app);
        assert!(screen.contains("No data to display"));
        assert!(screen.contains("No points"));
    }
}
