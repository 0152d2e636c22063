use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use log::info;

use demasker::DemaskError;
use demasker::cli::CliArgs;
use demasker::config::{LoadedConfig, Settings};
use demasker::pipeline::Demasker;

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        // Use eprintln instead of error! because logger may not be initialized
        // (e.g., config loading fails before logger init)
        eprintln!("Error: {:#}", e);
        if matches!(
            e.downcast_ref::<DemaskError>(),
            Some(DemaskError::MissingArgument(_))
        ) {
            eprintln!("\n{}", CliArgs::command().render_usage());
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse();

    let loaded_config = match &args.config {
        Some(path) => Some(
            LoadedConfig::load(path)
                .with_context(|| format!("failed to load config: {}", path.display()))?,
        ),
        None => None,
    };

    let settings = Settings::merge(&args, loaded_config.as_ref())?;

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(if settings.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    info!("demasker v{}", env!("CARGO_PKG_VERSION"));

    let written = Demasker::new()
        .tile(settings.cell)
        .premultiply(settings.premultiply)
        .absolute_paths(settings.absolute_paths)
        .compress(settings.compress)
        .run(&settings.input, &settings.mask, &settings.output)?;

    info!("Done! {} file(s) written", written.len());

    Ok(())
}
