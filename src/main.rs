//! Pokedex - a PokeAPI REPL backed by an expiring response cache

use std::io;
use std::sync::Arc;

use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{repl, Cache, Config, PokeApiClient, Session};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Create the response cache, which starts its reaper
/// 4. Build the PokeAPI client and the REPL session
/// 5. Run the REPL until `exit`, end of input, or SIGINT/SIGTERM
/// 6. Shut the cache down and wait for its reaper
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_interval={}s, base_url={}, page_size={}, http_timeout={}s",
        config.cache_interval, config.base_url, config.page_size, config.http_timeout
    );

    let cache = Arc::new(Cache::new(config.cache_interval()));
    let client = PokeApiClient::new(&config.base_url, config.http_timeout(), cache.clone())?;
    let mut session = Session::new(client, config.page_size);

    // Stdin is read on its own thread so a pending read can't stall shutdown.
    let input = repl::spawn_line_reader(io::BufReader::new(io::stdin()))?;
    let mut output = io::stdout();

    tokio::select! {
        result = repl::run(&mut session, input, &mut output) => result?,
        _ = shutdown_signal() => {}
    }

    cache.shutdown().await;
    let stats = cache.stats();
    info!(
        "Pokedex shutdown complete: hits={}, misses={}, reaped={}, hit_rate={:.2}",
        stats.hits,
        stats.misses,
        stats.reaped,
        stats.hit_rate()
    );
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
