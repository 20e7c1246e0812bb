//! Figure presenters.
//!
//! A [`Presenter`] shows a finished figure to a human. The terminal
//! presenter takes over the screen until the user quits.

use std::io::{self, IsTerminal};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::App;
use crate::error::Result;
use crate::figure::Figure;
use crate::ui::{self, Theme};

/// Something that can display a figure.
pub trait Presenter {
    /// Show `figure`. Returns once the user is done with it.
    fn present(&mut self, figure: &Figure) -> Result<()>;
}

/// Presenter that shows nothing.
#[derive(Debug, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn present(&mut self, _figure: &Figure) -> Result<()> {
        tracing::debug!("Display disabled");
        Ok(())
    }
}

/// Interactive full-screen terminal viewer.
#[derive(Debug, Default)]
pub struct TerminalPresenter {
    theme: Theme,
}

impl TerminalPresenter {
    /// Create a terminal presenter starting with `theme`.
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }
}

impl Presenter for TerminalPresenter {
    fn present(&mut self, figure: &Figure) -> Result<()> {
        if !io::stdout().is_terminal() {
            tracing::warn!("stdout is not a terminal, skipping display");
            return Ok(());
        }

        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            disable_raw_mode()?;
            return Err(err.into());
        }
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = match Terminal::new(backend) {
            Ok(terminal) => terminal,
            Err(err) => {
                let _ = first_error([
                    disable_raw_mode(),
                    execute!(io::stdout(), LeaveAlternateScreen),
                ]);
                return Err(err.into());
            }
        };

        let app = App::new(figure.clone(), self.theme);
        let res = run_viewer(&mut terminal, app);

        // Restore terminal, every step even if an earlier one fails
        let restored = first_error([
            disable_raw_mode(),
            execute!(terminal.backend_mut(), LeaveAlternateScreen),
            terminal.show_cursor(),
        ]);

        let app = res?;
        restored?;
        self.theme = app.theme;
        tracing::info!("Viewer closed");
        Ok(())
    }
}

/// First failure among steps that have all already run.
fn first_error(steps: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    steps.into_iter().fold(Ok(()), |acc, step| acc.and(step))
}

fn run_viewer<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<App> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match (key.modifiers, key.code) {
            // Quit
            (KeyModifiers::NONE, KeyCode::Char('q'))
            | (KeyModifiers::NONE, KeyCode::Esc)
            | (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(app),

            // Point cursor
            (KeyModifiers::NONE, KeyCode::Left) | (KeyModifiers::NONE, KeyCode::Char('h')) => {
                app.cursor_prev();
            }
            (KeyModifiers::NONE, KeyCode::Right) | (KeyModifiers::NONE, KeyCode::Char('l')) => {
                app.cursor_next();
            }

            // Theme
            (KeyModifiers::SHIFT, KeyCode::Char('T')) | (KeyModifiers::NONE, KeyCode::Char('T')) => {
                app.cycle_theme();
            }

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_error_runs_every_step() {
        let mut ran = Vec::new();
        let steps = (0..3).map(|i| {
            ran.push(i);
            if i == 0 {
                Ok(())
            } else {
                Err(io::Error::new(io::ErrorKind::Other, format!("step {i}")))
            }
        });

        let err = first_error(steps).unwrap_err();
        assert_eq!(err.to_string(), "step 1");
        assert_eq!(ran, vec![0, 1, 2]);
    }

    #[test]
    fn first_error_passes_when_all_succeed() {
        assert!(first_error([Ok(()), Ok(())]).is_ok());
    }

    #[test]
    fn null_presenter_does_nothing() {
        assert!(NullPresenter.present(&Figure::default()).is_ok());
    }
}
