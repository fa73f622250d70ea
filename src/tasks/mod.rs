//! Background tasks module
//!
//! This module contains the recurring tick schedule that advances a running
//! countdown.

pub mod tick;

// Re-export main items
pub use tick::TICK_PERIOD;
