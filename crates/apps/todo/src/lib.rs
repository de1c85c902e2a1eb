//! Todo list widget state: tagged todos, filtered views, and edit/form helpers.
//!
//! [`TodoStore`] persists todos under `lifetool-todos` and the active filter under
//! `lifetool-active-tag`. The edit, form, and tag-menu helpers are UI scratch state and are
//! never persisted.

mod edit;
mod form;
mod model;
mod store;

pub use edit::TodoEditSessions;
pub use form::{TagMenus, TodoForm, EMPTY_INPUT_MESSAGE};
pub use model::{normalize_tags, ScopeCounts, TagFilter, TodoError, TodoRecord, MAX_TODO_CHARS};
pub use store::{TodoStore, ACTIVE_TAG_KEY, TODOS_KEY};
