//! Pomodoro timer transitions and the side effects they request.

use crate::model::{PomodoroState, TimerPhase, CYCLES_BEFORE_LONG_BREAK};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PomodoroAction {
    Start,
    Pause,
    Toggle,
    /// One second elapsed on the tick source.
    Tick,
    /// Pause and refill the current phase.
    Reset,
    /// Pause and move to the next phase.
    Skip,
    CompletePhase,
    SwitchPhase(TimerPhase),
    /// Back to a fresh work phase with no completed cycles.
    ResetAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEffect {
    Persist,
    StartTicking,
    StopTicking,
    /// A phase ended; carries the phase that follows.
    PhaseCompleted(TimerPhase),
}

/// Applies `action` to `state` and returns the effects the owner must run, in order.
pub fn reduce_pomodoro(state: &mut PomodoroState, action: PomodoroAction) -> Vec<TimerEffect> {
    match action {
        PomodoroAction::Start => {
            if state.running {
                return Vec::new();
            }
            state.running = true;
            vec![TimerEffect::StartTicking, TimerEffect::Persist]
        }
        PomodoroAction::Pause => pause(state),
        PomodoroAction::Toggle => {
            let next = if state.running {
                PomodoroAction::Pause
            } else {
                PomodoroAction::Start
            };
            reduce_pomodoro(state, next)
        }
        PomodoroAction::Tick => {
            if !state.running {
                return Vec::new();
            }
            state.seconds_remaining = state.seconds_remaining.saturating_sub(1);
            if state.seconds_remaining == 0 {
                complete_phase(state)
            } else {
                vec![TimerEffect::Persist]
            }
        }
        PomodoroAction::Reset => {
            let effects = pause(state);
            state.seconds_remaining = state.phase.duration();
            effects
        }
        PomodoroAction::Skip | PomodoroAction::CompletePhase => complete_phase(state),
        PomodoroAction::SwitchPhase(phase) => {
            let effects = pause(state);
            state.phase = phase;
            state.seconds_remaining = phase.duration();
            effects
        }
        PomodoroAction::ResetAll => {
            *state = PomodoroState::default();
            vec![TimerEffect::StopTicking, TimerEffect::Persist]
        }
    }
}

fn pause(state: &mut PomodoroState) -> Vec<TimerEffect> {
    state.running = false;
    vec![TimerEffect::StopTicking, TimerEffect::Persist]
}

fn complete_phase(state: &mut PomodoroState) -> Vec<TimerEffect> {
    let mut effects = pause(state);
    state.phase = match state.phase {
        TimerPhase::Work => {
            state.completed_cycles = state.completed_cycles.saturating_add(1);
            if state.completed_cycles % CYCLES_BEFORE_LONG_BREAK == 0 {
                TimerPhase::LongBreak
            } else {
                TimerPhase::ShortBreak
            }
        }
        TimerPhase::ShortBreak | TimerPhase::LongBreak => TimerPhase::Work,
    };
    state.seconds_remaining = state.phase.duration();
    effects.push(TimerEffect::PhaseCompleted(state.phase));
    effects
}
