//! Top-level widget desktop: the window registry plus each widget's store, sharing one
//! preference store.

use std::cell::RefCell;
use std::rc::Rc;

use desktop_app_ambient::AmbientVideoStore;
use desktop_app_pomodoro::{
    interval_pomodoro_timer, IntervalTickSource, ManualTickSource, PomodoroTimer, TickSource,
};
use desktop_app_todo::TodoStore;
use platform_storage::{local_prefs_store, SharedPrefsStore};

use crate::host::viewport_or_default;
use crate::model::WidgetKind;
use crate::registry::WindowRegistry;

/// Every widget's state, restored from one preference store.
pub struct DesktopRuntime<T: TickSource = ManualTickSource> {
    pub store: SharedPrefsStore,
    pub windows: WindowRegistry,
    pub todos: TodoStore,
    pub video: AmbientVideoStore,
    pub pomodoro: Rc<RefCell<PomodoroTimer<T>>>,
}

impl DesktopRuntime<ManualTickSource> {
    /// Restores all widget state from `store` and makes sure every widget has a window.
    pub fn boot(store: SharedPrefsStore) -> Self {
        let pomodoro = Rc::new(RefCell::new(PomodoroTimer::load(store.clone())));
        Self::assemble(store, pomodoro)
    }
}

impl DesktopRuntime<IntervalTickSource> {
    /// Boots against browser storage with an interval-driven pomodoro timer.
    pub fn boot_browser() -> Self {
        let store = local_prefs_store();
        let pomodoro = interval_pomodoro_timer(store.clone());
        let mut runtime = Self::assemble(store, pomodoro);
        runtime.windows.set_viewport(viewport_or_default());
        runtime
    }
}

impl<T: TickSource> DesktopRuntime<T> {
    fn assemble(store: SharedPrefsStore, pomodoro: Rc<RefCell<PomodoroTimer<T>>>) -> Self {
        let mut windows = WindowRegistry::load(store.clone());
        for kind in WidgetKind::ALL {
            windows.ensure(kind);
        }
        Self {
            todos: TodoStore::load(store.clone()),
            video: AmbientVideoStore::load(store.clone()),
            pomodoro,
            windows,
            store,
        }
    }

    /// Clears every widget back to its defaults and recreates the windows.
    pub fn reset_all(&mut self) {
        self.pomodoro.borrow_mut().reset_all();
        self.todos.reset();
        self.video.reset();
        self.windows.reset();
        for kind in WidgetKind::ALL {
            self.windows.ensure(kind);
        }
    }
}
