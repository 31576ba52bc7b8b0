use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use polydraw_app_lib::{Controller, Key};
use polydraw_core::{ParseMode, SessionConfig};
use polydraw_renderer::RecordingDriver;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Load a .dat polyline file headlessly and print what would be drawn"
)]
struct Args {
    /// Path to the .dat file.
    file: PathBuf,
    /// Accept malformed numbers and counts instead of rejecting the file.
    #[arg(long)]
    lenient: bool,
    /// Session settings as JSON.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Keys to press after loading, e.g. "cc" to cycle the color twice.
    #[arg(long, default_value = "")]
    keys: String,
    /// Print the driver call log instead of the final frame.
    #[arg(long)]
    ops: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            SessionConfig::from_json(&json)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => SessionConfig::default(),
    };
    if args.lenient {
        config.parse_mode = ParseMode::Lenient;
    }

    let driver = RecordingDriver::new(config.canvas);
    let mut controller = Controller::new(driver, config)?;

    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    controller
        .load_file(&text)
        .with_context(|| format!("failed to load {}", args.file.display()))?;

    for c in args.keys.chars() {
        controller.key_down(Key::from(c));
        controller.key_up(Key::from(c));
    }

    let frame = controller.driver().frame();
    log::info!(
        "{} line strips, {} markers",
        frame.line_strips().count(),
        frame.markers().count()
    );

    let output = if args.ops {
        serde_json::to_string_pretty(controller.driver().ops())?
    } else {
        frame.to_json()?
    };
    println!("{}", output);
    Ok(())
}
