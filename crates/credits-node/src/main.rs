//! Credits Node - credits page server
//!
//! This binary serves:
//! - The credits page with its scrolling `#container`
//! - The compiled scroller bundle under `/pkg`
//! - REST and WebSocket APIs for the roster of credited names

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use credits_core::config::LogLevel;
use credits_core::{CreditsConfig, ScrollVariant};
use credits_node::{server, spawn_heartbeat, AppState};

#[derive(Parser)]
#[command(name = "credits-node")]
#[command(about = "Credits page server with a scrolling credits roll")]
struct Args {
    /// Configuration file (JSON)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Bind address
    #[arg(long)]
    host: Option<String>,

    /// HTTP server port (0 = auto-assign)
    #[arg(long, short)]
    port: Option<u16>,

    /// Scroll variant: padded or flush
    #[arg(long)]
    variant: Option<ScrollVariant>,

    /// Directory holding the compiled scroller bundle
    #[arg(long)]
    pkg_dir: Option<PathBuf>,

    /// Directory of static assets
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    verbose: bool,
}

impl Args {
    /// Layer command-line flags over the loaded configuration
    fn apply(self, mut config: CreditsConfig) -> CreditsConfig {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(variant) = self.variant {
            config.scroll.variant = variant;
        }
        if let Some(dir) = self.pkg_dir {
            config.server.pkg_dir = dir;
        }
        if let Some(dir) = self.static_dir {
            config.server.static_dir = dir;
        }
        if self.verbose {
            config.logging.level = LogLevel::Debug;
        }
        config
    }
}

fn level_for(level: LogLevel) -> Level {
    match level {
        LogLevel::Trace => Level::TRACE,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Info => Level::INFO,
        LogLevel::Warn => Level::WARN,
        LogLevel::Error => Level::ERROR,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match args.config.as_deref() {
        Some(path) => CreditsConfig::load(path)?,
        None => CreditsConfig::default(),
    };
    let config = args.apply(config);

    // Initialize logging; RUST_LOG takes precedence over the configured level
    let level = level_for(config.logging.level);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting credits node: {}", config.server.title);
    info!("Scroll variant: {}", config.scroll.variant);

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let state = Arc::new(AppState::new(config));
    spawn_heartbeat(state.clone());

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    // Get the actual bound address (important when port was 0)
    let actual_port = listener.local_addr()?.port();

    info!("═══════════════════════════════════════════════════════════");
    info!("  Credits page: http://127.0.0.1:{}/", actual_port);
    info!("  WebSocket endpoint: ws://127.0.0.1:{}/ws", actual_port);
    info!("  REST API: http://127.0.0.1:{}/api/", actual_port);
    info!("═══════════════════════════════════════════════════════════");

    let app = server::create_router(state);
    axum::serve(listener, app).await?;

    Ok(())
}
