#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use tvlog_config::Config;

use command::{
    CommandStrategy, InfoInput, InfoStrategy, InitStrategy, RunInput, RunStrategy,
    VersionStrategy,
};

#[derive(Parser)]
#[command(name = "tvlog")]
#[command(about = "Keep a list of the series you watch", long_about = None)]
struct Cli {
    /// Config file to use instead of ~/tvlog/config.json
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Start the interactive series menu (default)
    Run,
    /// Initialize configuration
    Init,
    /// Show the effective configuration
    Info,
    /// Show version
    Version,
}

fn init_tracing(default_level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // Menus own stdout, logs go to stderr.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => Config::default_path()?,
    };
    let config = Config::load_from(&config_path);

    let level = config
        .as_ref()
        .map_or("warn", |config| config.logging.level.as_str());
    init_tracing(level)?;
    debug!("Config path: {}", config_path.display());

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => RunStrategy.execute(RunInput {
            display: config?.display,
        }),
        Commands::Init => InitStrategy.execute(config_path),
        Commands::Info => InfoStrategy.execute(InfoInput {
            path: config_path,
            config: config?,
        }),
        Commands::Version => VersionStrategy.execute(()),
    }
}
