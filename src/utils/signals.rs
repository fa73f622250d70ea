//! Signal handling for graceful shutdown

use futures::stream::StreamExt;
use signal_hook_tokio::Signals;
use tracing::info;

/// Wait for a shutdown signal (SIGTERM, SIGINT)
pub async fn shutdown_signal() {
    let mut signals = Signals::new([
        signal_hook::consts::SIGTERM,
        signal_hook::consts::SIGINT,
    ])
    .expect("Failed to create signal handler");

    if let Some(signal) = signals.next().await {
        info!("Shutdown signal received: {}", signal);
    }
}
