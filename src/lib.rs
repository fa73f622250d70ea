//! Digital Timer - A state-managed countdown timer widget
//!
//! This library provides a single countdown timer instance: a state machine
//! with play/pause, reset, and limit adjustment, a snapshot channel for
//! presenters, and a recurring one-second tick schedule.

pub mod commands;
pub mod config;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use commands::Command;
pub use config::Config;
pub use state::{TimerController, TimerSnapshot, TimerState};
pub use utils::signals::shutdown_signal;
