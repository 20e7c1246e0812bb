//! Figure files.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{FigureError, Result};
use crate::figure::Figure;

/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "plotly_example.json";

/// JSON formatting for [`write_json`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// Single line, no extra whitespace.
    #[default]
    Compact,
    /// Two-space indentation.
    Pretty,
}

/// Write `figure` as JSON, creating or truncating the file at `path`.
///
/// The file is written in place; an interrupted write leaves a truncated
/// file behind.
pub fn write_json(figure: &Figure, path: &Path, style: Style) -> Result<()> {
    let file = File::create(path).map_err(|e| FigureError::write(path, e))?;
    let mut writer = BufWriter::new(file);

    let written = match style {
        Style::Compact => serde_json::to_writer(&mut writer, figure),
        Style::Pretty => serde_json::to_writer_pretty(&mut writer, figure),
    };
    written.map_err(|e| {
        if e.is_io() {
            FigureError::write(path, e.into())
        } else {
            FigureError::Json(e)
        }
    })?;
    writer.flush().map_err(|e| FigureError::write(path, e))?;

    tracing::info!("Wrote figure to {}", path.display());
    Ok(())
}

/// Read a figure written by [`write_json`].
///
/// Other Plotly figure files load too when their traces are scatter traces
/// with index-aligned `x`, `y` and marker colors; misaligned traces fail
/// with [`FigureError::LengthMismatch`]. Properties not modelled by
/// [`Figure`] are kept as raw JSON.
pub fn read_json(path: &Path) -> Result<Figure> {
    let file = File::open(path).map_err(|e| FigureError::read(path, e))?;
    let figure: Figure = serde_json::from_reader(BufReader::new(file))?;
    figure.validate()?;
    tracing::debug!("Read figure from {}", path.display());
    Ok(figure)
}
