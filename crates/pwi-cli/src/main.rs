//! packwiz-installer CLI
//!
//! Command-line interface for the packwiz-installer tools.

mod cli;

use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up CURSEFORGE_* overrides from a local .env, if any
    dotenv().ok();

    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();

    let config_path = cli.config_path();

    match cli.command {
        Commands::Info => {
            cli::info::run(&config_path)?;
        }
        Commands::Resolve { index, pack_folder } => {
            cli::resolve::run(&config_path, &index, pack_folder).await?;
        }
        Commands::InitConfig { force } => {
            cli::init_config::run(&config_path, force)?;
        }
    }

    Ok(())
}
