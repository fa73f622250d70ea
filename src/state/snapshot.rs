//! Read-only snapshot published to the presenter

use serde::{Deserialize, Serialize};

use super::timer_state::TimerState;

/// Everything the presenter needs to render the widget: the formatted
/// remaining time plus the control labels and flags for the current state.
///
/// A fresh snapshot is published on the controller's watch channel after
/// every state change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub formatted_time: String,
    pub status_label: String,
    pub start_pause_label: String,
    pub limit_minutes: u64,
    pub elapsed_seconds: u64,
    pub remaining_seconds: u64,
    pub is_running: bool,
    pub controls_disabled: bool,
    pub progress: f64,
}

impl From<&TimerState> for TimerSnapshot {
    fn from(state: &TimerState) -> Self {
        Self {
            formatted_time: state.formatted_time(),
            status_label: state.status_label().to_string(),
            start_pause_label: state.start_pause_label().to_string(),
            limit_minutes: state.limit_minutes(),
            elapsed_seconds: state.elapsed_seconds(),
            remaining_seconds: state.remaining_seconds(),
            is_running: state.is_running(),
            controls_disabled: state.controls_disabled(),
            progress: state.progress(),
        }
    }
}
