mod application;
mod domain;
mod infrastructure;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use serde_json::json;

use crate::application::transparency_service::BackgroundRemovalService;
use crate::domain::report::ConversionReport;
use crate::domain::threshold::Threshold;
use crate::infrastructure::file_storage::LocalFileStorage;
use crate::infrastructure::image_processor::DefaultImageProcessor;

#[derive(Parser, Debug)]
#[command(author, version, about = "Make the near-white background of an image transparent and save it as PNG")]
struct Args {
    /// Input image path (png/jpg/etc)
    #[arg(short, long, default_value = "logo.PNG")]
    input: PathBuf,

    /// Output PNG path; missing directories are created
    #[arg(short, long, default_value = "public/logo.png")]
    output: PathBuf,

    /// Pixels with red, green and blue all above this become transparent (0-255)
    #[arg(short, long, default_value_t = 240, allow_negative_numbers = true)]
    threshold: i64,

    /// Print a JSON report instead of progress lines
    #[arg(long)]
    json: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

/// What the process prints and how it exits, kept apart from the printing itself.
#[derive(Debug, PartialEq)]
struct Outcome {
    stdout: Vec<String>,
    stderr: Vec<String>,
    status: u8,
}

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(args: &Args) -> Result<ConversionReport> {
    // Validate before touching the filesystem
    let threshold = Threshold::try_from(args.threshold).context("Invalid --threshold")?;

    let service = BackgroundRemovalService::new(
        Arc::new(DefaultImageProcessor::new()),
        Arc::new(LocalFileStorage::new()),
    );

    if !args.json {
        println!("🔄 Processing: {}", args.input.display());
    }
    let report = service.convert(&args.input, &args.output, threshold)?;
    Ok(report)
}

fn render(result: &Result<ConversionReport>, json: bool) -> Outcome {
    match result {
        Ok(report) if json => match serde_json::to_string_pretty(report) {
            Ok(body) => Outcome {
                stdout: vec![body],
                stderr: vec![],
                status: 0,
            },
            // Only non-UTF-8 paths can get here
            Err(e) => Outcome {
                stdout: vec![],
                stderr: vec![format!("❌ Error: failed to serialize report: {e}")],
                status: 1,
            },
        },
        Ok(report) => Outcome {
            stdout: vec![
                format!(
                    "✅ Background removed: {} of {} pixels ({}x{}) made transparent",
                    report.transparent_pixels,
                    report.total_pixels(),
                    report.width,
                    report.height
                ),
                format!("📁 Saved: {}", report.output.display()),
            ],
            stderr: vec![],
            status: 0,
        },
        Err(e) => {
            // The full chain goes to stderr in both modes; JSON callers also get it on stdout
            let message = format!("{e:#}");
            let stdout = if json {
                vec![json!({ "error": message }).to_string()]
            } else {
                vec![]
            };
            Outcome {
                stdout,
                stderr: vec![format!("❌ Error: {message}")],
                status: 1,
            }
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    let result = run(&args);
    if let Err(e) = &result {
        debug!("{e:?}");
    }

    let outcome = render(&result, args.json);
    for line in &outcome.stdout {
        println!("{line}");
    }
    for line in &outcome.stderr {
        eprintln!("{line}");
    }
    ExitCode::from(outcome.status)
}
