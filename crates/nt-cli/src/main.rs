use std::io::stdout;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use nt_cli::commands::{config, energy, export, session, summary};
use nt_cli::input::resolve_profile;
use nt_cli::{Cli, Commands, Config};

/// Load config from the default locations plus an optional explicit file.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config_path = cli.config.as_deref();
    match cli.command {
        Some(Commands::Energy { profile, json }) => {
            let config = load_config(config_path)?;
            let profile = resolve_profile(&config.profile, &profile)?;
            energy::run(&mut stdout().lock(), &profile, json)?;
        }
        Some(Commands::Summary {
            profile,
            meals,
            json,
        }) => {
            let config = load_config(config_path)?;
            let profile = resolve_profile(&config.profile, &profile)?;
            summary::run(&mut stdout().lock(), &profile, &meals, json)?;
        }
        Some(Commands::Export {
            profile,
            meals,
            format,
            output,
        }) => {
            let config = load_config(config_path)?;
            let profile = resolve_profile(&config.profile, &profile)?;
            export::run(
                &mut stdout().lock(),
                &profile,
                &meals,
                format.unwrap_or(config.export.format),
                output.as_deref(),
                &config.export,
            )?;
        }
        Some(Commands::Session { profile }) => {
            let config = load_config(config_path)?;
            let profile = resolve_profile(&config.profile, &profile)?;
            session::run(profile, config.export)?;
        }
        Some(Commands::Config) => {
            let config = load_config(config_path)?;
            config::run(&mut stdout().lock(), &config)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
