//! Countdown state machine and its derived display values

/// Default countdown length in minutes for a fresh widget.
pub const DEFAULT_LIMIT_MINUTES: u64 = 25;

/// Floor for the limit; the decrement control never goes below this.
pub const MIN_LIMIT_MINUTES: u64 = 1;

/// Outcome of applying one tick to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// One second was counted and the countdown keeps running.
    Advanced,
    /// The countdown is at its limit; running stopped in this step.
    Completed,
    /// The state was not running, so the tick was discarded unchanged.
    Ignored,
}

/// Countdown state for a single timer widget.
///
/// All mutation goes through the command transitions plus [`tick`](Self::tick);
/// derived display values are computed on demand and never stored. The type
/// does no I/O and reads no clock, so every transition is testable directly.
#[derive(Debug, Clone)]
pub struct TimerState {
    limit_minutes: u64,
    elapsed_seconds: u64,
    is_running: bool,
    /// Limit restored by [`reset`](Self::reset).
    default_limit_minutes: u64,
}

impl TimerState {
    /// Create a paused state with the standard 25-minute limit.
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_LIMIT_MINUTES)
    }

    /// Create a paused state with a custom default limit in minutes.
    /// Values below the floor are clamped to it.
    pub fn with_limit(limit_minutes: u64) -> Self {
        let limit = limit_minutes.max(MIN_LIMIT_MINUTES);
        Self {
            limit_minutes: limit,
            elapsed_seconds: 0,
            is_running: false,
            default_limit_minutes: limit,
        }
    }

    /// Configured limit in whole minutes.
    pub fn limit_minutes(&self) -> u64 {
        self.limit_minutes
    }

    /// Seconds counted since the countdown last started from zero.
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// True while the recurring tick is active.
    pub fn is_running(&self) -> bool {
        self.is_running
    }

    /// Configured limit in seconds.
    pub fn limit_seconds(&self) -> u64 {
        self.limit_minutes.saturating_mul(60)
    }

    /// Seconds left before the countdown completes.
    pub fn remaining_seconds(&self) -> u64 {
        self.limit_seconds().saturating_sub(self.elapsed_seconds)
    }

    /// True once elapsed time has reached the limit.
    pub fn is_completed(&self) -> bool {
        self.elapsed_seconds == self.limit_seconds()
    }

    /// Toggle between running and paused, returning the new running flag.
    ///
    /// Toggling a completed countdown first rewinds elapsed time to zero, so
    /// the same control replays the timer from a finished state.
    pub fn toggle_play(&mut self) -> bool {
        if self.is_completed() {
            self.elapsed_seconds = 0;
        }
        self.is_running = !self.is_running;
        self.is_running
    }

    /// Count one elapsed second.
    ///
    /// Ticks are discarded while paused. A tick that lands exactly on the
    /// completion boundary stops running in the same step; a tick arriving
    /// when the boundary was already reached only stops running.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running {
            return TickOutcome::Ignored;
        }
        if self.is_completed() {
            self.is_running = false;
            return TickOutcome::Completed;
        }
        self.elapsed_seconds += 1;
        if self.is_completed() {
            self.is_running = false;
            TickOutcome::Completed
        } else {
            TickOutcome::Advanced
        }
    }

    /// Restore the defaults: paused, no elapsed time, the construction limit.
    pub fn reset(&mut self) {
        self.is_running = false;
        self.elapsed_seconds = 0;
        self.limit_minutes = self.default_limit_minutes;
    }

    /// Raise the limit by one minute. Returns false (state unchanged) once
    /// the countdown has progressed.
    pub fn increment_limit(&mut self) -> bool {
        if self.elapsed_seconds > 0 {
            return false;
        }
        self.limit_minutes = self.limit_minutes.saturating_add(1);
        true
    }

    /// Lower the limit by one minute. Returns false (state unchanged) once
    /// the countdown has progressed or the limit is at the floor.
    pub fn decrement_limit(&mut self) -> bool {
        if self.elapsed_seconds > 0 || self.limit_minutes <= MIN_LIMIT_MINUTES {
            return false;
        }
        self.limit_minutes -= 1;
        true
    }

    /// Remaining time as MM:SS, both fields zero-padded to two digits.
    pub fn formatted_time(&self) -> String {
        let remaining = self.remaining_seconds();
        format!("{:02}:{:02}", remaining / 60, remaining % 60)
    }

    /// Status text shown next to the time display.
    pub fn status_label(&self) -> &'static str {
        if self.is_running {
            "Running"
        } else {
            "Paused"
        }
    }

    /// Label for the start/pause control.
    pub fn start_pause_label(&self) -> &'static str {
        if self.is_running {
            "Pause"
        } else {
            "Start"
        }
    }

    /// True while the limit +/- controls are disabled.
    pub fn controls_disabled(&self) -> bool {
        self.elapsed_seconds > 0
    }

    /// Completed fraction of the countdown, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        let limit = self.limit_seconds();
        if limit == 0 {
            return 1.0;
        }
        self.elapsed_seconds as f64 / limit as f64
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(state: &mut TimerState) {
        state.toggle_play();
        while state.tick() == TickOutcome::Advanced {}
    }

    #[test]
    fn test_initial_state() {
        let state = TimerState::new();
        assert_eq!(state.limit_minutes(), 25);
        assert_eq!(state.elapsed_seconds(), 0);
        assert!(!state.is_running());
        assert_eq!(state.formatted_time(), "25:00");
        assert_eq!(state.status_label(), "Paused");
        assert_eq!(state.start_pause_label(), "Start");
        assert!(!state.controls_disabled());
    }

    #[test]
    fn test_formatted_time_zero_padded_over_full_range() {
        let mut state = TimerState::with_limit(2);
        state.toggle_play();
        loop {
            let text = state.formatted_time();
            let bytes = text.as_bytes();
            assert_eq!(bytes.len(), 5, "unexpected width: {}", text);
            assert_eq!(bytes[2], b':');
            for index in [0, 1, 3, 4] {
                assert!(bytes[index].is_ascii_digit(), "not zero-padded: {}", text);
            }
            if state.tick() != TickOutcome::Advanced {
                break;
            }
        }
        assert_eq!(state.formatted_time(), "00:00");
    }

    #[test]
    fn test_formatted_time_fixed_points() {
        let mut state = TimerState::with_limit(2);
        state.toggle_play();
        for _ in 0..55 {
            state.tick();
        }
        // 120 - 55 = 65 seconds remaining
        assert_eq!(state.formatted_time(), "01:05");
    }

    #[test]
    fn test_formatted_time_minutes_grow_past_two_digits() {
        let state = TimerState::with_limit(100);
        assert_eq!(state.formatted_time(), "100:00");
    }

    #[test]
    fn test_elapsed_never_exceeds_limit() {
        let mut state = TimerState::with_limit(1);
        state.toggle_play();
        for _ in 0..200 {
            state.tick();
            assert!(state.elapsed_seconds() <= state.limit_seconds());
        }
        assert_eq!(state.elapsed_seconds(), 60);
        assert!(!state.is_running());
    }

    #[test]
    fn test_tick_is_discarded_while_paused() {
        let mut state = TimerState::new();
        assert_eq!(state.tick(), TickOutcome::Ignored);
        assert_eq!(state.elapsed_seconds(), 0);

        state.toggle_play();
        state.tick();
        state.toggle_play();
        assert_eq!(state.tick(), TickOutcome::Ignored);
        assert_eq!(state.elapsed_seconds(), 1);
    }

    #[test]
    fn test_tick_at_boundary_only_stops_running() {
        let mut state = TimerState::with_limit(1);
        state.elapsed_seconds = 60;
        state.is_running = true;
        assert_eq!(state.tick(), TickOutcome::Completed);
        assert_eq!(state.elapsed_seconds(), 60);
        assert!(!state.is_running());
    }

    #[test]
    fn test_limit_never_drops_below_floor() {
        let mut state = TimerState::new();
        for _ in 0..24 {
            assert!(state.decrement_limit());
        }
        assert_eq!(state.limit_minutes(), 1);
        for _ in 0..10 {
            assert!(!state.decrement_limit());
        }
        assert_eq!(state.limit_minutes(), 1);
    }

    #[test]
    fn test_limit_increment_has_no_upper_bound() {
        let mut state = TimerState::new();
        for _ in 0..100 {
            assert!(state.increment_limit());
        }
        assert_eq!(state.limit_minutes(), 125);
    }

    #[test]
    fn test_limit_locked_once_countdown_progressed() {
        let mut state = TimerState::new();
        state.toggle_play();
        state.tick();
        state.toggle_play();

        assert!(state.controls_disabled());
        for _ in 0..5 {
            assert!(!state.increment_limit());
            assert!(!state.decrement_limit());
        }
        assert_eq!(state.limit_minutes(), 25);

        state.reset();
        assert!(!state.controls_disabled());
        assert!(state.increment_limit());
        assert_eq!(state.limit_minutes(), 26);
    }

    #[test]
    fn test_pause_keeps_elapsed_time() {
        let mut state = TimerState::new();
        state.toggle_play();
        for _ in 0..10 {
            state.tick();
        }
        assert!(!state.toggle_play());
        assert_eq!(state.elapsed_seconds(), 10);
        assert_eq!(state.status_label(), "Paused");
        assert_eq!(state.start_pause_label(), "Start");
    }

    #[test]
    fn test_scenario_five_ticks_from_defaults() {
        let mut state = TimerState::new();
        state.toggle_play();
        for _ in 0..5 {
            state.tick();
        }
        assert_eq!(state.formatted_time(), "24:55");
        assert_eq!(state.status_label(), "Running");
    }

    #[test]
    fn test_scenario_one_minute_countdown_stops_itself() {
        let mut state = TimerState::new();
        for _ in 0..24 {
            state.decrement_limit();
        }
        assert_eq!(state.limit_minutes(), 1);

        state.toggle_play();
        for second in 1..=60 {
            let outcome = state.tick();
            if second < 60 {
                assert_eq!(outcome, TickOutcome::Advanced);
            } else {
                assert_eq!(outcome, TickOutcome::Completed);
            }
        }
        assert_eq!(state.formatted_time(), "00:00");
        assert!(!state.is_running());
        assert!(state.is_completed());
    }

    #[test]
    fn test_toggle_replays_from_completed() {
        let mut state = TimerState::with_limit(1);
        run_to_completion(&mut state);
        assert!(state.is_completed());

        assert!(state.toggle_play());
        assert_eq!(state.elapsed_seconds(), 0);
        assert!(state.is_running());
        assert_eq!(state.tick(), TickOutcome::Advanced);
        assert_eq!(state.elapsed_seconds(), 1);
    }

    #[test]
    fn test_reset_restores_defaults_from_any_state() {
        let mut state = TimerState::new();
        for _ in 0..5 {
            state.increment_limit();
        }
        state.toggle_play();
        for _ in 0..3 {
            state.tick();
        }

        state.reset();
        assert_eq!(state.limit_minutes(), 25);
        assert_eq!(state.elapsed_seconds(), 0);
        assert!(!state.is_running());

        // Resetting an already-default state changes nothing.
        state.reset();
        assert_eq!(state.limit_minutes(), 25);
        assert_eq!(state.elapsed_seconds(), 0);
        assert!(!state.is_running());
    }

    #[test]
    fn test_reset_restores_custom_default_limit() {
        let mut state = TimerState::with_limit(10);
        state.increment_limit();
        assert_eq!(state.limit_minutes(), 11);
        state.reset();
        assert_eq!(state.limit_minutes(), 10);
    }

    #[test]
    fn test_with_limit_clamps_to_floor() {
        let state = TimerState::with_limit(0);
        assert_eq!(state.limit_minutes(), 1);
    }

    #[test]
    fn test_progress_fraction() {
        let mut state = TimerState::with_limit(1);
        assert_eq!(state.progress(), 0.0);
        state.toggle_play();
        for _ in 0..30 {
            state.tick();
        }
        assert!((state.progress() - 0.5).abs() < f64::EPSILON);
        while state.tick() == TickOutcome::Advanced {}
        assert_eq!(state.progress(), 1.0);
    }

    #[test]
    fn test_remaining_seconds_arithmetic() {
        let mut state = TimerState::new();
        assert_eq!(state.remaining_seconds(), 25 * 60);
        state.toggle_play();
        state.tick();
        assert_eq!(state.remaining_seconds(), 25 * 60 - 1);
    }
}
