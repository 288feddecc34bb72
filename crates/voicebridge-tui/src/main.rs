//! VoiceBridge TUI entry point.

use std::{
    fs::File,
    path::{Path, PathBuf},
    sync::Mutex,
    time::Duration,
};

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use voicebridge_app::{PairingCompletion, Runtime, RuntimeConfig};
use voicebridge_core::SystemEnv;
use voicebridge_tui::TerminalDriver;

/// VoiceBridge terminal prototype
#[derive(Parser, Debug)]
#[command(name = "voicebridge-tui")]
#[command(about = "Terminal prototype of the VoiceBridge voice translation app")]
#[command(version)]
struct Args {
    /// Latency of the mock translator in milliseconds
    #[arg(long, default_value_t = 1500)]
    translation_delay_ms: u64,

    /// What happens after a device starts connecting ("hold" or "backend")
    #[arg(long, default_value_t = PairingCompletion::Hold)]
    pairing: PairingCompletion,

    /// Latency of the mock pairing backend in milliseconds
    #[arg(long, default_value_t = 2000)]
    pairing_delay_ms: u64,

    /// Upper bound on one pairing attempt in milliseconds
    #[arg(long, default_value_t = 10_000)]
    pairing_timeout_ms: u64,

    /// Write logs to this file
    ///
    /// The terminal belongs to the UI, so nothing is logged without it.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            translation_delay: Duration::from_millis(self.translation_delay_ms),
            pairing: self.pairing,
            pairing_delay: Duration::from_millis(self.pairing_delay_ms),
            pairing_timeout: Duration::from_millis(self.pairing_timeout_ms),
        }
    }
}

fn init_logging(path: &Path, level: &str) -> std::io::Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path, &args.log_level)?;
    }

    let config = args.runtime_config();
    tracing::info!(?config, "VoiceBridge starting");

    let driver = TerminalDriver::new()?;
    let app = Runtime::with_mocks(driver, SystemEnv::new(), &config).run().await?;

    tracing::info!(messages = app.state().messages.len(), "VoiceBridge stopped");
    Ok(())
}
