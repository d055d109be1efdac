//! tabjump - Entry Point

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tabjump::host::SnapshotRegistry;
use tabjump::model::{AppError, HostError};
use tracing::info;

/// Terminal tab switcher: filter the host's open tabs, switch to or close them
#[derive(Parser, Debug)]
#[command(name = "tabjump")]
#[command(version)]
#[command(about = "Filterable popup for switching between open browser tabs")]
pub struct Args {
    /// Path to a JSON tab snapshot (reads from stdin if not provided)
    pub snapshot: Option<PathBuf>,

    /// Start with this text in the search box
    #[arg(short, long)]
    pub query: Option<String>,

    /// Popup width multiplier (the popup is 40 columns per unit)
    #[arg(long)]
    pub width_scale: Option<f64>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write issued commands to this file instead of stdout
    #[arg(long)]
    pub journal: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run(Args::parse())?;
    Ok(())
}

fn run(args: Args) -> Result<(), AppError> {
    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = tabjump::config::load_config_with_precedence(args.config.clone())?;
        let merged = tabjump::config::merge_config(config_file);
        let with_env = tabjump::config::apply_env_overrides(merged);
        tabjump::config::apply_cli_overrides(with_env, args.width_scale, args.query.clone())
    };
    config.validate()?;

    tabjump::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    // Read the snapshot before touching the terminal so errors print normally
    let registry = SnapshotRegistry::load(args.snapshot.clone())?;

    let colors = tabjump::view::ColorConfig::from_env_and_args(args.no_color);
    let registry = tabjump::view::run_popup(registry, config, colors)?;

    info!(commands = registry.journal().len(), "Popup closed");

    match &args.journal {
        Some(path) => {
            let file = std::fs::File::create(path).map_err(HostError::Journal)?;
            registry.write_journal(std::io::BufWriter::new(file))?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            registry.write_journal(&mut out)?;
            out.flush().map_err(HostError::Journal)?;
        }
    }

    Ok(())
}
