//! Busking TUI entry point.

use std::{fs::File, path::PathBuf, sync::Mutex};

use busking_client::{HttpBookingService, MemoryBookingService, ServiceConfig};
use busking_tui::{Runtime, TerminalDriver};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Busking terminal client
#[derive(Parser, Debug)]
#[command(name = "busking-tui")]
#[command(about = "Book bus seats from the terminal")]
#[command(version)]
struct Args {
    /// Base URL of the booking service (e.g. `https://example.com/api/`)
    ///
    /// Falls back to `EXPO_PUBLIC_API_URL` when neither is set.
    #[arg(long, env = "BUSKING_API_URL")]
    api_url: Option<String>,

    /// Run against an in-memory service with sample buses (ignores the URL)
    #[arg(long)]
    demo: bool,

    /// Log file (the terminal itself belongs to the UI)
    #[arg(long, default_value = "busking-tui.log")]
    log_file: PathBuf,

    /// Log level (trace, debug, info, warn, error); `RUST_LOG` overrides
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_file = File::create(&args.log_file)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(log_file)))
        .with(filter)
        .init();

    if args.demo {
        tracing::info!("Busking starting in demo mode");
        let driver = TerminalDriver::new()?;
        return Ok(Runtime::new(driver, MemoryBookingService::demo()).run().await?);
    }

    let config = match &args.api_url {
        Some(url) => ServiceConfig::new(url)?,
        None => ServiceConfig::from_env()?,
    };
    tracing::info!("Busking starting against {}", config.base_url());
    let service = HttpBookingService::new(config)?;

    let driver = TerminalDriver::new()?;
    Ok(Runtime::new(driver, service).run().await?)
}
