//! One-second tick sources that drive a running timer.

use std::rc::Rc;
use std::time::Duration;

use leptos::leptos_dom::helpers::IntervalHandle;
use leptos::{logging, set_interval_with_handle};

/// Tick period of a running timer.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Something that calls `on_tick` once per [`TICK_PERIOD`] until stopped.
pub trait TickSource {
    /// Begins ticking. Any previous schedule is replaced.
    fn start(&mut self, on_tick: Rc<dyn Fn()>);
    /// Stops ticking. Safe to call when already stopped.
    fn stop(&mut self);
    fn is_active(&self) -> bool;
}

/// Tick source driven by hand, for native hosts and tests.
///
/// It only tracks whether ticking was requested; callers advance the timer directly.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ManualTickSource {
    active: bool,
    starts: usize,
}

impl ManualTickSource {
    /// How many times ticking has been started.
    pub fn starts(&self) -> usize {
        self.starts
    }
}

impl TickSource for ManualTickSource {
    fn start(&mut self, _on_tick: Rc<dyn Fn()>) {
        self.active = true;
        self.starts += 1;
    }

    fn stop(&mut self) {
        self.active = false;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

/// Browser interval tick source.
#[derive(Default)]
pub struct IntervalTickSource {
    handle: Option<IntervalHandle>,
}

impl TickSource for IntervalTickSource {
    fn start(&mut self, on_tick: Rc<dyn Fn()>) {
        self.stop();
        match set_interval_with_handle(move || on_tick(), TICK_PERIOD) {
            Ok(handle) => self.handle = Some(handle),
            Err(err) => logging::warn!("pomodoro interval failed to start: {err:?}"),
        }
    }

    fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.clear();
        }
    }

    fn is_active(&self) -> bool {
        self.handle.is_some()
    }
}

impl std::fmt::Debug for IntervalTickSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntervalTickSource")
            .field("active", &self.is_active())
            .finish()
    }
}
