//! Recurring tick schedule for a running countdown

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::debug;

use crate::state::controller::ControllerShared;
use crate::state::TickOutcome;

/// Period of the recurring countdown tick.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Handle to a spawned tick schedule, owned by the controller. At most one
/// exists per widget instance.
pub(crate) struct ScheduleHandle {
    cancel_tx: watch::Sender<bool>,
    _task: JoinHandle<()>,
}

impl ScheduleHandle {
    /// Signal the schedule to stop. The task exits on the signal; a tick
    /// that already fired is discarded by the running guard in the state.
    /// Safe to call on a schedule that already finished on its own.
    pub(crate) fn cancel(self) {
        let _ = self.cancel_tx.send(true);
    }
}

/// Spawn the recurring tick schedule for a countdown that just started.
/// The first elapsed second lands one full period after the spawn.
pub(crate) fn spawn_tick_schedule(shared: Arc<ControllerShared>) -> ScheduleHandle {
    let (cancel_tx, cancel_rx) = watch::channel(false);
    let task = tokio::spawn(run_tick_schedule(shared, cancel_rx));
    ScheduleHandle {
        cancel_tx,
        _task: task,
    }
}

async fn run_tick_schedule(shared: Arc<ControllerShared>, mut cancel_rx: watch::Receiver<bool>) {
    let mut interval = time::interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    debug!("Tick schedule started");

    loop {
        tokio::select! {
            _ = interval.tick() => {
                match shared.apply_tick() {
                    TickOutcome::Advanced => {}
                    TickOutcome::Completed => {
                        debug!("Tick schedule stopped at the completion boundary");
                        break;
                    }
                    TickOutcome::Ignored => {
                        debug!("Tick discarded, countdown no longer running");
                        break;
                    }
                }
            }
            _ = cancel_rx.changed() => {
                debug!("Tick schedule cancelled");
                break;
            }
        }
    }
}
