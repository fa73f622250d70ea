//! Configuration and CLI argument handling

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser)]
#[command(name = "digital-timer")]
#[command(about = "A state-managed countdown timer driven from the terminal")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Countdown limit in minutes
    #[arg(short, long, default_value = "25")]
    pub limit: u64,

    /// Emit snapshots as JSON lines instead of formatted text
    #[arg(short, long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
