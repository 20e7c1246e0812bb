//! Colorscatter - build, export and view a color-mapped scatter figure.

use anyhow::{Context, Result};
use clap::Parser;
use colorscatter::export::{Style, DEFAULT_OUTPUT};
use colorscatter::figure::ColorScale;
use colorscatter::pipeline::{self, PipelineConfig, DEFAULT_COLORBAR_TITLE};
use colorscatter::present::{NullPresenter, Presenter, TerminalPresenter};
use colorscatter::ui::Theme;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "colorscatter")]
#[command(about = "Build a color-mapped scatter figure, export it as JSON and view it", long_about = None)]
struct Args {
    /// Where to write the figure JSON (relative to the working directory)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Number of synthetic points
    #[arg(short = 'n', long, default_value_t = colorscatter::data::DEFAULT_POINTS)]
    points: usize,

    /// Color bar title
    #[arg(short, long, default_value = DEFAULT_COLORBAR_TITLE)]
    title: String,

    /// Color scale of the color axis
    #[arg(long, value_enum, default_value_t = ColorScale::Plasma)]
    colorscale: ColorScale,

    /// Write indented JSON
    #[arg(long)]
    pretty: bool,

    /// Export only, do not open the viewer
    #[arg(long)]
    no_show: bool,

    /// Viewer theme
    #[arg(long, value_enum, default_value_t = Theme::GruvboxDark)]
    theme: Theme,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::File::create(log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting colorscatter");
    }

    let config = PipelineConfig {
        points: args.points,
        output: args.output,
        colorbar_title: args.title,
        color_scale: args.colorscale,
        style: if args.pretty {
            Style::Pretty
        } else {
            Style::Compact
        },
    };

    let mut presenter: Box<dyn Presenter> = if args.no_show {
        Box::new(NullPresenter)
    } else {
        Box::new(TerminalPresenter::new(args.theme))
    };

    pipeline::run(&config, presenter.as_mut())
        .with_context(|| format!("Failed to produce {}", config.output.display()))?;

    tracing::info!("colorscatter exited");
    Ok(())
}
