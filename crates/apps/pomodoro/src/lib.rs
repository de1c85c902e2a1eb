//! Pomodoro timer widget state.
//!
//! Work and break phases alternate, with a long break after every fourth work phase. The
//! timer persists under `lifetool-pomodoro` on every change and always restores paused.
//!
//! Transitions live in a pure reducer ([`reduce_pomodoro`]); [`PomodoroTimer`] applies it and
//! runs the requested effects against a [`TickSource`].

#![warn(rustdoc::broken_intra_doc_links)]

mod model;
mod reducer;
mod ticker;
mod timer;

pub use model::{
    PomodoroState, TimerPhase, CYCLES_BEFORE_LONG_BREAK, LONG_BREAK_SECONDS, SHORT_BREAK_SECONDS,
    WORK_SECONDS,
};
pub use reducer::{reduce_pomodoro, PomodoroAction, TimerEffect};
pub use ticker::{IntervalTickSource, ManualTickSource, TickSource, TICK_PERIOD};
pub use timer::{interval_pomodoro_timer, PomodoroTimer, SharedIntervalTimer, POMODORO_KEY};
