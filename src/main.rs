use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;

use tipbind::config::{self, ConfigResult};
use tipbind::scenario;

/// Replay a tooltip scenario against the headless engine
#[derive(Debug, Parser)]
#[command(name = "tipbind", version, about)]
struct Cli {
    /// Scenario file (TOML)
    scenario: PathBuf,

    /// Config file to use instead of ~/.config/tipbind/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let ConfigResult { config, warning } = match &cli.config {
        Some(path) => config::load_config_from_path(path),
        None => config::load_config(),
    };
    if let Some(warning) = warning {
        eprintln!("warning: {}", warning);
    }

    let scenario = scenario::load_scenario(&cli.scenario)?;
    for line in scenario::run_scenario(&scenario, &config)? {
        println!("{}", line);
    }

    Ok(())
}
