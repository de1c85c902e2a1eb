//! Persisted pomodoro timer that executes reducer effects against a tick source.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use leptos::logging;
use platform_storage::{load_or, Persisted, SharedPrefsStore};

use crate::model::{PomodoroState, TimerPhase};
use crate::reducer::{reduce_pomodoro, PomodoroAction, TimerEffect};
use crate::ticker::{IntervalTickSource, ManualTickSource, TickSource};

/// Storage key holding the timer state.
pub const POMODORO_KEY: &str = "lifetool-pomodoro";

pub struct PomodoroTimer<S: TickSource = ManualTickSource> {
    state: Persisted<PomodoroState>,
    source: S,
    on_tick: Rc<dyn Fn()>,
}

impl PomodoroTimer<ManualTickSource> {
    /// Restores a timer driven by [`ManualTickSource`].
    pub fn load(store: SharedPrefsStore) -> Self {
        Self::with_source(store, ManualTickSource::default(), Rc::new(|| {}))
    }
}

impl<S: TickSource> PomodoroTimer<S> {
    /// Restores the timer, paused, with `source` calling `on_tick` while running.
    pub fn with_source(store: SharedPrefsStore, source: S, on_tick: Rc<dyn Fn()>) -> Self {
        let restored = load_or(&*store, POMODORO_KEY, PomodoroState::default).restored();
        Self {
            state: Persisted::with_value(store, POMODORO_KEY, restored),
            source,
            on_tick,
        }
    }

    pub fn state(&self) -> &PomodoroState {
        self.state.get()
    }

    pub fn phase(&self) -> TimerPhase {
        self.state().phase
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.state().seconds_remaining
    }

    pub fn completed_cycles(&self) -> u32 {
        self.state().completed_cycles
    }

    pub fn is_running(&self) -> bool {
        self.state().running
    }

    pub fn tick_source(&self) -> &S {
        &self.source
    }

    pub fn formatted_time(&self) -> String {
        self.state().formatted_time()
    }

    pub fn progress_percentage(&self) -> f64 {
        self.state().progress_percentage()
    }

    pub fn start(&mut self) {
        self.dispatch(PomodoroAction::Start);
    }

    pub fn pause(&mut self) {
        self.dispatch(PomodoroAction::Pause);
    }

    pub fn toggle(&mut self) {
        self.dispatch(PomodoroAction::Toggle);
    }

    /// Advances a running timer by one second. Returns the next phase if this tick ended one.
    pub fn tick(&mut self) -> Option<TimerPhase> {
        self.dispatch(PomodoroAction::Tick)
    }

    pub fn reset(&mut self) {
        self.dispatch(PomodoroAction::Reset);
    }

    /// Ends the current phase early and returns the phase that follows.
    pub fn skip(&mut self) -> TimerPhase {
        self.dispatch(PomodoroAction::Skip);
        self.phase()
    }

    pub fn complete_phase(&mut self) -> TimerPhase {
        self.dispatch(PomodoroAction::CompletePhase);
        self.phase()
    }

    pub fn switch_phase(&mut self, phase: TimerPhase) {
        self.dispatch(PomodoroAction::SwitchPhase(phase));
    }

    pub fn reset_all(&mut self) {
        self.dispatch(PomodoroAction::ResetAll);
    }

    /// Runs `action` through the reducer and executes its effects.
    pub fn dispatch(&mut self, action: PomodoroAction) -> Option<TimerPhase> {
        let mut next = self.state().clone();
        let effects = reduce_pomodoro(&mut next, action);
        let mut next = Some(next);
        let mut completed = None;
        for effect in effects {
            match effect {
                TimerEffect::Persist => {
                    if let Some(next) = next.take() {
                        self.state.set(next);
                    }
                }
                TimerEffect::StartTicking => self.source.start(self.on_tick.clone()),
                TimerEffect::StopTicking => self.source.stop(),
                TimerEffect::PhaseCompleted(phase) => completed = Some(phase),
            }
        }
        completed
    }
}

impl<S: TickSource> Drop for PomodoroTimer<S> {
    fn drop(&mut self) {
        self.source.stop();
    }
}

impl<S: TickSource + std::fmt::Debug> std::fmt::Debug for PomodoroTimer<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PomodoroTimer")
            .field("state", self.state())
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// Shared timer driven by a browser interval.
pub type SharedIntervalTimer = Rc<RefCell<PomodoroTimer<IntervalTickSource>>>;

/// Restores a timer whose interval ticks it once per second while running.
///
/// The interval holds only a weak handle, so dropping the last [`SharedIntervalTimer`] stops
/// ticking.
pub fn interval_pomodoro_timer(store: SharedPrefsStore) -> SharedIntervalTimer {
    Rc::new_cyclic(|weak: &Weak<RefCell<PomodoroTimer<IntervalTickSource>>>| {
        let weak = weak.clone();
        let on_tick: Rc<dyn Fn()> = Rc::new(move || {
            let Some(timer) = weak.upgrade() else {
                return;
            };
            let Ok(mut timer) = timer.try_borrow_mut() else {
                logging::warn!("pomodoro tick skipped: timer busy");
                return;
            };
            timer.tick();
        });
        RefCell::new(PomodoroTimer::with_source(
            store,
            IntervalTickSource::default(),
            on_tick,
        ))
    })
}
