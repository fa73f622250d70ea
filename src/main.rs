//! Digital Timer - A state-managed countdown timer widget
//!
//! This is the main entry point for the digital-timer application.

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use digital_timer::{
    commands::Command,
    config::Config,
    state::{TimerController, TimerSnapshot},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level. Logs go to stderr;
    // stdout belongs to the rendered snapshots.
    tracing_subscriber::fmt()
        .with_env_filter(format!("digital_timer={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting digital-timer v0.1.0");
    info!("Configuration: limit={}min, json={}", config.limit, config.json);

    let controller = TimerController::with_limit(config.limit);

    // Presenter task: render every published snapshot until the channel closes
    let json = config.json;
    let presenter = tokio::spawn(presenter_loop(controller.subscribe(), move |snapshot| {
        render(snapshot, json)
    }));

    info!("Commands:");
    info!("  p | start | pause - Toggle between running and paused");
    info!("  r | reset         - Restore the defaults");
    info!("  + | inc           - Raise the limit by one minute");
    info!("  - | dec           - Lower the limit by one minute");
    info!("  s | status        - Show detailed status");
    info!("  q | quit          - Exit");

    // Read commands until quit, end of input, or a shutdown signal
    tokio::select! {
        _ = command_loop(&controller) => {}
        _ = shutdown_signal() => {}
    }

    controller.dispose();
    // Dropping the controller closes the snapshot channel; the presenter
    // renders any pending snapshot and exits.
    drop(controller);
    if let Err(e) = presenter.await {
        warn!("Presenter task failed: {}", e);
    }
    info!("Shutdown complete");
    Ok(())
}

/// Render snapshots as they arrive, including the value left pending when
/// the channel closes.
async fn presenter_loop(
    mut snapshots: watch::Receiver<TimerSnapshot>,
    mut render: impl FnMut(&TimerSnapshot),
) {
    loop {
        let snapshot = snapshots.borrow_and_update().clone();
        render(&snapshot);
        if snapshots.changed().await.is_err() {
            break;
        }
    }
}

/// Dispatch stdin lines to the controller until quit or end of input.
async fn command_loop(controller: &TimerController) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => match Command::parse(&line) {
                Some(Command::TogglePlay) => controller.toggle_play(),
                Some(Command::Reset) => controller.reset(),
                Some(Command::IncrementLimit) => controller.increment_limit(),
                Some(Command::DecrementLimit) => controller.decrement_limit(),
                Some(Command::Status) => print_status(controller),
                Some(Command::Quit) => {
                    info!("Quit requested");
                    break;
                }
                None => {
                    if !line.trim().is_empty() {
                        debug!("Ignoring unknown command: {}", line.trim());
                    }
                }
            },
            Ok(None) => {
                info!("Input closed");
                break;
            }
            Err(e) => {
                warn!("Failed to read input: {}", e);
                break;
            }
        }
    }
}

/// Render one snapshot to stdout.
fn render(snapshot: &TimerSnapshot, json: bool) {
    if json {
        match serde_json::to_string(snapshot) {
            Ok(line) => println!("{}", line),
            Err(e) => warn!("Failed to encode snapshot: {}", e),
        }
    } else {
        println!(
            "{}  {}  [{}]  limit {}m  {:.0}%",
            snapshot.formatted_time,
            snapshot.status_label,
            snapshot.start_pause_label,
            snapshot.limit_minutes,
            snapshot.progress * 100.0
        );
    }
}

/// Print the detailed status block for the `status` command.
fn print_status(controller: &TimerController) {
    let snapshot = controller.snapshot();
    println!("Time remaining: {}", snapshot.formatted_time);
    println!("Status: {}", snapshot.status_label);
    println!("Limit: {} minutes", snapshot.limit_minutes);
    println!("Elapsed: {} seconds", snapshot.elapsed_seconds);
    println!("Progress: {:.0}%", snapshot.progress * 100.0);
    println!("Uptime: {}", controller.uptime());
    match controller.last_command() {
        Some((command, at)) => println!(
            "Last command: {} at {}",
            command,
            at.format("%Y-%m-%d %H:%M:%S UTC")
        ),
        None => println!("Last command: none"),
    }
}
