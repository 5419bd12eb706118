use clap::{Parser, ValueEnum};
use color_eyre::Result;
use std::path::PathBuf;
use std::sync::Arc;

use bracket_colorizer::config::{self, ColorMode, ConfigResult, Settings};
use bracket_colorizer::document::DocumentState;
use bracket_colorizer::input::InputReader;
use bracket_colorizer::report::{render_json, render_text};

/// How color ranges are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Color name to ranges, as JSON
    Json,
    /// One `line:col color` line per bracket
    Text,
}

/// Bracket pair colorizer
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Match bracket pairs in source text and assign each a color by nesting depth"
)]
struct Args {
    /// Input file (if not provided, reads from stdin)
    input: Option<PathBuf>,

    /// Configuration file to use instead of ~/.config/bracket-colorizer/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured color mode (consecutive or independent)
    #[arg(long)]
    mode: Option<ColorMode>,

    /// Only report brackets on this zero-based line
    #[arg(long)]
    line: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    init_logging();
    color_eyre::install()?;

    let args = Args::parse();

    let ConfigResult { mut config, warning } = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    if let Some(warning) = warning {
        eprintln!("Warning: {}", warning);
    }
    if let Some(mode) = args.mode {
        config.colorizer.color_mode = mode;
    }

    // Validation warnings are logged by from_config
    let settings = Settings::from_config(&config).settings;

    let lines = InputReader::read_lines(args.input.as_deref())?;
    let document = DocumentState::parse(&lines, Arc::new(settings));

    let output = match args.format {
        OutputFormat::Json => match args.line {
            Some(line) => render_json(&document.line_color_ranges(line))?,
            None => render_json(&document.color_ranges())?,
        },
        OutputFormat::Text => render_text(&document, args.line),
    };

    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}

/// Log to stderr, level from RUST_LOG (warn by default)
fn init_logging() {
    use std::io::Write;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();
}
