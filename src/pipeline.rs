//! The generate → build → customize → export → present sequence.
//!
//! Each step depends on the one before it: the export and the display
//! both see the customized color bar title.

use std::path::PathBuf;

use serde_json::json;

use crate::data::{SyntheticData, DEFAULT_POINTS};
use crate::error::Result;
use crate::export::{self, Style, DEFAULT_OUTPUT};
use crate::express::{self, ScatterOptions};
use crate::figure::{ColorScale, Figure};
use crate::present::Presenter;

/// Color bar title applied by the customize step.
pub const DEFAULT_COLORBAR_TITLE: &str = "qwe";

/// Settings for one run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Number of synthetic points.
    pub points: usize,
    /// Output file, relative paths resolve against the working directory.
    pub output: PathBuf,
    /// Color bar title.
    pub colorbar_title: String,
    /// Color scale of the color axis.
    pub color_scale: ColorScale,
    /// JSON formatting of the output file.
    pub style: Style,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            points: DEFAULT_POINTS,
            output: PathBuf::from(DEFAULT_OUTPUT),
            colorbar_title: DEFAULT_COLORBAR_TITLE.to_string(),
            color_scale: ColorScale::default(),
            style: Style::default(),
        }
    }
}

/// Run all five steps in order and return the exported figure.
pub fn run(config: &PipelineConfig, presenter: &mut dyn Presenter) -> Result<Figure> {
    let data = SyntheticData::generate(config.points);
    tracing::info!("Generated {} points", data.len());

    let options = ScatterOptions {
        color_scale: config.color_scale,
        ..ScatterOptions::default()
    };
    let mut figure = express::scatter_with(data.index, data.square, data.ratio, &options)?;
    tracing::info!("Built scatter figure");

    figure.update_layout(json!({
        "coloraxis_colorbar": { "title": config.colorbar_title }
    }))?;
    tracing::info!("Set color bar title to {:?}", config.colorbar_title);

    export::write_json(&figure, &config.output, config.style)?;

    presenter.present(&figure)?;

    Ok(figure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::present::NullPresenter;

    /// Records what it was asked to show.
    #[derive(Default)]
    struct Recorder {
        shown: Vec<Figure>,
    }

    impl Presenter for Recorder {
        fn present(&mut self, figure: &Figure) -> Result<()> {
            self.shown.push(figure.clone());
            Ok(())
        }
    }

    fn config_in(dir: &tempfile::TempDir) -> PipelineConfig {
        PipelineConfig {
            output: dir.path().join(DEFAULT_OUTPUT),
            ..PipelineConfig::default()
        }
    }

    #[test]
    fn exports_customized_figure_then_presents_it() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        let mut recorder = Recorder::default();

        let figure = run(&config, &mut recorder).unwrap();

        assert_eq!(figure.colorbar_title(), "qwe");
        assert_eq!(figure.data[0].len(), 10);
        assert_eq!(recorder.shown, vec![figure.clone()]);
        assert_eq!(export::read_json(&config.output).unwrap(), figure);
    }

    #[test]
    fn repeated_runs_are_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);

        run(&config, &mut NullPresenter).unwrap();
        let first = std::fs::read(&config.output).unwrap();
        run(&config, &mut NullPresenter).unwrap();
        let second = std::fs::read(&config.output).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn exported_values_match_generated_data() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        run(&config, &mut NullPresenter).unwrap();

        let text = std::fs::read_to_string(&config.output).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        let trace = &json["data"][0];

        assert_eq!(trace["x"], json!([0, 1, 2, 3, 4, 5, 6, 7, 8, 9]));
        assert_eq!(trace["y"], json!([0, 1, 4, 9, 16, 25, 36, 49, 64, 81]));
        assert_eq!(trace["marker"]["color"][0], json!(0.0));
        assert_eq!(trace["marker"]["color"][5], json!(0.5));
        assert_eq!(json["layout"]["coloraxis"]["colorbar"]["title"]["text"], "qwe");
    }

    #[test]
    fn failed_export_skips_presentation() {
        let dir = tempfile::tempdir().unwrap();
        let config = PipelineConfig {
            output: dir.path().join("missing").join("out.json"),
            ..PipelineConfig::default()
        };
        let mut recorder = Recorder::default();

        assert!(run(&config, &mut recorder).is_err());
        assert!(recorder.shown.is_empty());
    }
}
