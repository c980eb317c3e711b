use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use simpleweather::{
    BatchLoader, LoggingConfig, SimpleWeatherConfig, TerminalSurface, WeatherApiClient,
    WeatherListScreen,
};

/// Current weather for a fixed list of cities
#[derive(Debug, Parser)]
#[command(name = "simpleweather", version, about)]
struct Cli {
    /// Path to the configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Exit on failure instead of offering an interactive retry
    #[arg(long)]
    no_input: bool,
}

fn init_tracing(logging: &LoggingConfig, verbose: bool) {
    let level = if verbose { "debug" } else { &logging.level };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if logging.format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Ask whether to retry the batch; EOF or anything but "y"/"yes" declines
fn prompt_retry() -> Result<bool> {
    print!("Retry? [y/N]: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    let read = io::stdin().lock().read_line(&mut answer)?;
    if read == 0 {
        return Ok(false);
    }

    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = SimpleWeatherConfig::load_from_path(cli.config.clone())
        .with_context(|| "Failed to load configuration")?;
    init_tracing(&config.logging, cli.verbose);

    let client = WeatherApiClient::new(&config.api)?;
    let loader = BatchLoader::new(client);
    let mut screen = WeatherListScreen::new(loader, config.cities.clone(), TerminalSurface::stdout());

    let mut outcome = screen.load().await;
    while let Err(err) = &outcome {
        debug!("Load cycle failed: {}", err);
        if cli.no_input || !prompt_retry()? {
            std::process::exit(1);
        }
        outcome = screen.retry().await;
    }

    Ok(())
}
