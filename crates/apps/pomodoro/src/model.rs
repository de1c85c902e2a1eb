use serde::{Deserialize, Serialize};

pub const WORK_SECONDS: u32 = 25 * 60;
pub const SHORT_BREAK_SECONDS: u32 = 5 * 60;
pub const LONG_BREAK_SECONDS: u32 = 15 * 60;
/// Every this many completed work phases, the next break is a long one.
pub const CYCLES_BEFORE_LONG_BREAK: u32 = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerPhase {
    #[default]
    Work,
    #[serde(rename = "Short Break")]
    ShortBreak,
    #[serde(rename = "Long Break")]
    LongBreak,
}

impl TimerPhase {
    /// Full length of the phase in seconds.
    pub fn duration(self) -> u32 {
        match self {
            Self::Work => WORK_SECONDS,
            Self::ShortBreak => SHORT_BREAK_SECONDS,
            Self::LongBreak => LONG_BREAK_SECONDS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::ShortBreak => "Short Break",
            Self::LongBreak => "Long Break",
        }
    }
}

/// Timer state as stored under `lifetool-pomodoro`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PomodoroState {
    #[serde(rename = "timeLeft")]
    pub seconds_remaining: u32,
    #[serde(rename = "currentPhase")]
    pub phase: TimerPhase,
    #[serde(rename = "completedCycles")]
    pub completed_cycles: u32,
    #[serde(rename = "isRunning")]
    pub running: bool,
}

impl Default for PomodoroState {
    fn default() -> Self {
        Self {
            seconds_remaining: WORK_SECONDS,
            phase: TimerPhase::Work,
            completed_cycles: 0,
            running: false,
        }
    }
}

impl PomodoroState {
    /// Restored state always starts paused and never exceeds the phase length.
    pub fn restored(mut self) -> Self {
        self.running = false;
        self.seconds_remaining = self.seconds_remaining.min(self.phase.duration());
        self
    }

    /// Remaining time as `MM:SS`.
    pub fn formatted_time(&self) -> String {
        format!(
            "{:02}:{:02}",
            self.seconds_remaining / 60,
            self.seconds_remaining % 60
        )
    }

    /// Elapsed share of the current phase, `0.0..=100.0`.
    pub fn progress_percentage(&self) -> f64 {
        let total = f64::from(self.phase.duration());
        (total - f64::from(self.seconds_remaining)) / total * 100.0
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn wire_format_uses_storage_names() {
        let state = PomodoroState {
            seconds_remaining: 42,
            phase: TimerPhase::LongBreak,
            completed_cycles: 4,
            running: true,
        };
        assert_eq!(
            serde_json::to_value(&state).expect("serialize"),
            json!({
                "timeLeft": 42,
                "currentPhase": "Long Break",
                "completedCycles": 4,
                "isRunning": true
            })
        );
    }

    #[test]
    fn restored_state_is_paused_and_bounded() {
        let state = PomodoroState {
            seconds_remaining: 9_999,
            phase: TimerPhase::ShortBreak,
            completed_cycles: 2,
            running: true,
        }
        .restored();
        assert!(!state.running);
        assert_eq!(state.seconds_remaining, SHORT_BREAK_SECONDS);
    }

    #[test]
    fn formatted_time_pads_minutes_and_seconds() {
        let mut state = PomodoroState::default();
        assert_eq!(state.formatted_time(), "25:00");
        state.seconds_remaining = 65;
        assert_eq!(state.formatted_time(), "01:05");
        state.seconds_remaining = 0;
        assert_eq!(state.formatted_time(), "00:00");
    }

    #[test]
    fn progress_runs_from_zero_to_hundred() {
        let mut state = PomodoroState::default();
        assert_eq!(state.progress_percentage(), 0.0);
        state.seconds_remaining = WORK_SECONDS / 2;
        assert_eq!(state.progress_percentage(), 50.0);
        state.seconds_remaining = 0;
        assert_eq!(state.progress_percentage(), 100.0);
    }
}
