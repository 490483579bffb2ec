use std::num::NonZeroU32;

/// Where the countdown currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Expired,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    remaining_seconds: u32,
    total_seconds: NonZeroU32,
    running: bool,
    fullscreen: bool,
}

impl TimerState {
    pub fn new(total_seconds: NonZeroU32) -> Self {
        Self {
            remaining_seconds: total_seconds.get(),
            total_seconds,
            running: false,
            fullscreen: false,
        }
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn total_seconds(&self) -> u32 {
        self.total_seconds.get()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn phase(&self) -> Phase {
        if self.running {
            Phase::Running
        } else if self.remaining_seconds == 0 {
            Phase::Expired
        } else {
            Phase::Idle
        }
    }

    /// Fraction of the session left, exactly 1.0 when full and 0.0 when out
    pub fn fraction_remaining(&self) -> f64 {
        self.remaining_seconds as f64 / self.total_seconds.get() as f64
    }

    /// `mm:ss` of the remaining time
    pub fn clock(&self) -> String {
        format_clock(self.remaining_seconds)
    }

    pub(super) fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    pub(super) fn toggle_fullscreen(&mut self) -> bool {
        self.fullscreen = !self.fullscreen;
        self.fullscreen
    }

    /// Take one second off. Returns the new remaining time, or `None` when
    /// there was nothing left to take.
    pub(super) fn decrement(&mut self) -> Option<u32> {
        self.remaining_seconds = self.remaining_seconds.checked_sub(1)?;
        Some(self.remaining_seconds)
    }

    pub(super) fn reset(&mut self) {
        self.running = false;
        self.remaining_seconds = self.total_seconds.get();
    }
}

/// Render seconds as zero-padded `mm:ss`. Minutes are not wrapped into
/// hours, so 100 minutes reads `100:00`.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod test {
    use super::*;

    fn state(total: u32) -> TimerState {
        TimerState::new(NonZeroU32::new(total).unwrap())
    }

    mod format_clock {
        use super::*;

        #[test]
        fn should_pad_minutes_and_seconds_to_two_digits() {
            assert_eq!(format_clock(1500), "25:00");
            assert_eq!(format_clock(1435), "23:55");
            assert_eq!(format_clock(59), "00:59");
            assert_eq!(format_clock(0), "00:00");
        }

        #[test]
        fn should_keep_counting_minutes_past_the_hour() {
            assert_eq!(format_clock(6000), "100:00");
        }
    }

    mod new {
        use super::*;

        #[test]
        fn should_start_idle_with_full_time() {
            let state = state(1500);

            assert_eq!(state.remaining_seconds(), 1500);
            assert_eq!(state.phase(), Phase::Idle);
            assert!(!state.is_fullscreen());
            assert_eq!(state.fraction_remaining(), 1.0);
        }
    }

    mod decrement {
        use super::*;

        #[test]
        fn should_stop_at_zero() {
            let mut state = state(2);

            assert_eq!(state.decrement(), Some(1));
            assert_eq!(state.decrement(), Some(0));
            assert_eq!(state.decrement(), None);
            assert_eq!(state.remaining_seconds(), 0);
            assert_eq!(state.fraction_remaining(), 0.0);
        }
    }

    mod phase {
        use super::*;

        #[test]
        fn should_report_expired_once_time_runs_out_and_not_running() {
            let mut state = state(1);
            state.set_running(true);
            state.decrement();
            assert_eq!(state.phase(), Phase::Running);

            state.set_running(false);
            assert_eq!(state.phase(), Phase::Expired);
        }
    }

    mod reset {
        use super::*;

        #[test]
        fn should_restore_total_and_stop() {
            let mut state = state(10);
            state.set_running(true);
            state.decrement();
            state.toggle_fullscreen();

            state.reset();

            assert_eq!(state.remaining_seconds(), 10);
            assert!(!state.is_running());
            assert!(state.is_fullscreen());
        }
    }
}
