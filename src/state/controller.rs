//! Timer controller: owns the widget state, publishes snapshots, and manages
//! the recurring tick schedule

use std::sync::{Arc, Mutex};
use std::time::Instant;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::tasks::tick::{spawn_tick_schedule, ScheduleHandle};

use super::snapshot::TimerSnapshot;
use super::timer_state::{TickOutcome, TimerState, DEFAULT_LIMIT_MINUTES};

/// State and snapshot channel shared with the tick schedule.
pub(crate) struct ControllerShared {
    state: Mutex<TimerState>,
    snapshot_tx: watch::Sender<TimerSnapshot>,
    /// Keeps the channel open so publishing can never fail.
    _snapshot_rx: watch::Receiver<TimerSnapshot>,
}

impl ControllerShared {
    /// Apply one scheduled tick and publish the result. The outcome tells
    /// the schedule whether to keep firing.
    pub(crate) fn apply_tick(&self) -> TickOutcome {
        let mut state = match self.state.lock() {
            Ok(state) => state,
            Err(e) => {
                warn!("Failed to lock timer state for tick: {}", e);
                return TickOutcome::Ignored;
            }
        };
        let outcome = state.tick();
        match outcome {
            TickOutcome::Advanced => self.publish(&state),
            TickOutcome::Completed => {
                self.publish(&state);
                info!("Countdown reached its limit, stopping");
            }
            TickOutcome::Ignored => {}
        }
        outcome
    }

    /// Publish a snapshot of the given state. Called with the state lock
    /// held so snapshot order matches mutation order.
    fn publish(&self, state: &TimerState) {
        if let Err(e) = self.snapshot_tx.send(TimerSnapshot::from(state)) {
            warn!("Failed to publish timer snapshot: {}", e);
        }
    }
}

/// Owns a single timer widget instance: its [`TimerState`], the watch
/// channel presenters subscribe to, and the tick-schedule handle.
///
/// All operations are synchronous. Starting the countdown spawns the tick
/// task, so [`toggle_play`](Self::toggle_play) must be called within a Tokio
/// runtime. Each controller is independent; two widget instances never share
/// state or schedules.
pub struct TimerController {
    shared: Arc<ControllerShared>,
    /// At most one active schedule, owned exclusively by the controller.
    schedule: Mutex<Option<ScheduleHandle>>,
    /// Most recent accepted command and when it arrived.
    last_command: Mutex<Option<(String, DateTime<Utc>)>>,
    created_at: Instant,
}

impl TimerController {
    /// Create a paused controller with the standard 25-minute limit.
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_LIMIT_MINUTES)
    }

    /// Create a paused controller with a custom default limit in minutes.
    pub fn with_limit(limit_minutes: u64) -> Self {
        let state = TimerState::with_limit(limit_minutes);
        let (snapshot_tx, snapshot_rx) = watch::channel(TimerSnapshot::from(&state));
        Self {
            shared: Arc::new(ControllerShared {
                state: Mutex::new(state),
                snapshot_tx,
                _snapshot_rx: snapshot_rx,
            }),
            schedule: Mutex::new(None),
            last_command: Mutex::new(None),
            created_at: Instant::now(),
        }
    }

    /// Toggle between running and paused.
    ///
    /// Starting schedules the recurring tick, with the first increment one
    /// second from now; pausing cancels the schedule. Toggling a completed
    /// countdown replays it from zero.
    pub fn toggle_play(&self) {
        let now_running = {
            let mut state = match self.shared.state.lock() {
                Ok(state) => state,
                Err(e) => {
                    warn!("Failed to lock timer state: {}", e);
                    return;
                }
            };
            let now_running = state.toggle_play();
            self.shared.publish(&state);
            now_running
        };

        if now_running {
            self.start_schedule();
            info!("Countdown started");
        } else {
            self.stop_schedule();
            info!("Countdown paused");
        }
        self.record_command(if now_running { "start" } else { "pause" });
    }

    /// Cancel any scheduled tick and restore the defaults: paused, no
    /// elapsed time, the construction limit.
    pub fn reset(&self) {
        self.stop_schedule();
        match self.shared.state.lock() {
            Ok(mut state) => {
                state.reset();
                self.shared.publish(&state);
            }
            Err(e) => {
                warn!("Failed to lock timer state: {}", e);
                return;
            }
        }
        info!("Timer reset to defaults");
        self.record_command("reset");
    }

    /// Raise the limit by one minute. Ignored once the countdown has
    /// progressed.
    pub fn increment_limit(&self) {
        self.adjust_limit("increment-limit", TimerState::increment_limit);
    }

    /// Lower the limit by one minute. Ignored once the countdown has
    /// progressed or the limit is at the floor.
    pub fn decrement_limit(&self) {
        self.adjust_limit("decrement-limit", TimerState::decrement_limit);
    }

    /// Apply one tick of the countdown. Driven by the running schedule;
    /// exposed so hosts and tests can step simulated time by hand.
    pub fn tick(&self) {
        if self.shared.apply_tick() == TickOutcome::Completed {
            // The schedule stops itself at the boundary; drop its handle.
            self.stop_schedule();
        }
    }

    /// Current state snapshot.
    pub fn snapshot(&self) -> TimerSnapshot {
        self.shared.snapshot_tx.borrow().clone()
    }

    /// Subscribe to snapshots. A new value arrives after every state change.
    pub fn subscribe(&self) -> watch::Receiver<TimerSnapshot> {
        self.shared.snapshot_tx.subscribe()
    }

    /// Teardown hook for the hosting environment: cancels any pending
    /// schedule. Safe to call more than once; cancelling an absent schedule
    /// is a no-op.
    pub fn dispose(&self) {
        self.stop_schedule();
        debug!("Timer controller disposed");
    }

    /// Most recent accepted command with its arrival time.
    pub fn last_command(&self) -> Option<(String, DateTime<Utc>)> {
        self.last_command.lock().ok().and_then(|last| last.clone())
    }

    /// How long this controller has existed, as a short human string.
    pub fn uptime(&self) -> String {
        let total = self.created_at.elapsed().as_secs();
        let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);
        match (hours, minutes) {
            (0, 0) => format!("{seconds}s"),
            (0, _) => format!("{minutes}m {seconds}s"),
            _ => format!("{hours}h {minutes}m {seconds}s"),
        }
    }

    /// Shared body of the limit commands: apply the guarded transition and
    /// publish only when the state actually changed.
    fn adjust_limit(&self, command: &'static str, apply: fn(&mut TimerState) -> bool) {
        let (applied, limit) = {
            let mut state = match self.shared.state.lock() {
                Ok(state) => state,
                Err(e) => {
                    warn!("Failed to lock timer state: {}", e);
                    return;
                }
            };
            let applied = apply(&mut state);
            if applied {
                self.shared.publish(&state);
            }
            (applied, state.limit_minutes())
        };

        if applied {
            debug!("Limit adjusted to {} minutes", limit);
            self.record_command(command);
        } else {
            debug!("Limit adjustment ignored");
        }
    }

    fn start_schedule(&self) {
        self.stop_schedule();
        let handle = spawn_tick_schedule(Arc::clone(&self.shared));
        match self.schedule.lock() {
            Ok(mut slot) => *slot = Some(handle),
            Err(e) => {
                warn!("Failed to lock schedule slot: {}", e);
                handle.cancel();
            }
        }
    }

    fn stop_schedule(&self) {
        let handle = match self.schedule.lock() {
            Ok(mut slot) => slot.take(),
            Err(e) => {
                warn!("Failed to lock schedule slot: {}", e);
                None
            }
        };
        if let Some(handle) = handle {
            handle.cancel();
        }
    }

    fn record_command(&self, command: &str) {
        if let Ok(mut last) = self.last_command.lock() {
            *last = Some((command.to_string(), Utc::now()));
        }
    }
}

impl Default for TimerController {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TimerController {
    fn drop(&mut self) {
        self.stop_schedule();
    }
}
