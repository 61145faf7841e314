use anyhow::{Context, Result};
use clap::Parser;
use solid_core::Config;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Parse CLI arguments first to get verbosity level
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        None => Config::default(),
    };

    let filter = match cli.verbose {
        0 => config.verbosity.as_str(),
        1 => "debug",
        2.. => "trace",
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    match &cli.config {
        Some(path) => debug!("Loaded {} scenario(s) from {:?}", config.scenarios.len(), path),
        None => debug!("Using built-in scenarios"),
    }

    match cli.command {
        Commands::Describe(args) => {
            info!("Describe command: {:?}", args);
            cli::commands::describe::execute(args)?;
        }
        Commands::Resize(args) => {
            info!("Resize command: {:?}", args);
            cli::commands::resize::execute(args)?;
        }
        Commands::Demo => {
            info!("Running {} scenario(s)", config.scenarios.len());
            cli::commands::demo::execute(&config)?;
        }
        Commands::Init(args) => {
            info!("Init command: {:?}", args);
            cli::commands::init::execute(args)?;
        }
    }

    Ok(())
}
