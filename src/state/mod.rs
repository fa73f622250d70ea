//! State management module
//!
//! This module contains the timer state machine, the snapshot type published
//! to presenters, and the controller that ties them to the tick schedule.

pub mod controller;
pub mod snapshot;
pub mod timer_state;

// Re-export main types
pub use controller::TimerController;
pub use snapshot::TimerSnapshot;
pub use timer_state::{TickOutcome, TimerState, DEFAULT_LIMIT_MINUTES, MIN_LIMIT_MINUTES};
