//! Tailfeather CLI Application
//!
//! Reprints delimited input with every field colored by value, so repeated
//! values look the same from line to line. It uses the tailfeather-core
//! library and adds:
//! - Command-line and TOML file configuration
//! - Colored terminal rendering
//! - Terminal color restoration on exit and interrupt

use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;

mod config;
mod pipeline;
mod render;
mod terminal;

use config::AppConfig;
use pipeline::Colorizer;
use terminal::TerminalGuard;

/// Tailfeather - Color fields of delimited input by value
#[derive(Parser, Debug)]
#[command(name = "tailfeather")]
#[command(about = "Print fields of delimited input in colors based on their values", long_about = None)]
#[command(version)]
struct Args {
    /// Input field delimiter [default: " "]
    #[arg(long, value_name = "DELIM", allow_hyphen_values = true)]
    input_delimiter: Option<String>,

    /// Output field delimiter [default: "\t"]
    #[arg(long, value_name = "DELIM", allow_hyphen_values = true)]
    output_delimiter: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all diagnostics except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Tailfeather CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using core library v{}", tailfeather_core::VERSION);

    let app_config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => AppConfig::default(),
    };

    let format = app_config.line_format(
        args.input_delimiter.as_deref(),
        args.output_delimiter.as_deref(),
    );
    format.validate()?;
    log::debug!(
        "Input delimiter {:?}, output delimiter {:?}",
        format.input_delimiter,
        format.output_delimiter
    );

    let _guard = TerminalGuard::install();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut colorizer = Colorizer::new(&format, stdout.lock());

    match colorizer.run(stdin.lock()) {
        Ok(stats) => {
            log::info!(
                "Done: {} lines, {} line shape changes",
                stats.lines,
                stats.shape_changes
            );
            Ok(())
        }
        // Reader went away (e.g. piped into `head`); nothing left to do.
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            log::debug!("Output closed: {}", e);
            Ok(())
        }
        Err(e) => Err(anyhow::Error::new(e).context("Failed to process input")),
    }
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::{Builder, Target};
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .target(Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
