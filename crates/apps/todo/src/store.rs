//! Persisted todo list with tag scopes.

use std::collections::BTreeSet;

use platform_storage::{
    generate_unique_id, load_raw_or, save_raw_logged, utc_now, Persisted, SharedPrefsStore,
};

use crate::model::{normalize_tags, ScopeCounts, TagFilter, TodoError, TodoRecord, MAX_TODO_CHARS};

/// Storage key holding the todo array.
pub const TODOS_KEY: &str = "lifetool-todos";
/// Storage key holding the raw active filter string.
pub const ACTIVE_TAG_KEY: &str = "lifetool-active-tag";

/// Todo list state plus the active tag filter.
///
/// Every mutation writes both storage keys before returning.
pub struct TodoStore {
    todos: Persisted<Vec<TodoRecord>>,
    active_filter: TagFilter,
    store: SharedPrefsStore,
}

impl TodoStore {
    /// Restores todos and the active filter from `store`.
    pub fn load(store: SharedPrefsStore) -> Self {
        let todos = Persisted::load(store.clone(), TODOS_KEY, Vec::new);
        let active_filter = TagFilter::from_raw(&load_raw_or(&*store, ACTIVE_TAG_KEY, "all"));
        Self {
            todos,
            active_filter,
            store,
        }
    }

    pub fn todos(&self) -> &[TodoRecord] {
        self.todos.get()
    }

    pub fn get(&self, id: &str) -> Option<&TodoRecord> {
        self.todos().iter().find(|todo| todo.id == id)
    }

    pub fn active_filter(&self) -> &TagFilter {
        &self.active_filter
    }

    pub fn set_active_filter(&mut self, filter: TagFilter) {
        self.active_filter = filter;
        self.commit();
    }

    /// Adds a todo and returns its id.
    ///
    /// Duplicates are checked against the scope of the given tags: todos sharing any of them,
    /// or untagged todos when none are given. A todo added without tags while a tag filter is
    /// active inherits that tag.
    pub fn add<I, S>(&mut self, text: &str, tags: I) -> Result<String, TodoError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let text = text.trim();
        if text.is_empty() {
            return Err(TodoError::Empty);
        }
        if text.chars().count() > MAX_TODO_CHARS {
            return Err(TodoError::TooLong);
        }

        let tags = normalize_tags(tags);
        let needle = text.to_lowercase();
        let duplicate = self
            .todos()
            .iter()
            .filter(|todo| {
                if tags.is_empty() {
                    todo.is_untagged()
                } else {
                    todo.tags.iter().any(|tag| tags.contains(tag))
                }
            })
            .any(|todo| todo.text.to_lowercase() == needle);
        if duplicate {
            return Err(TodoError::Duplicate);
        }

        let tags = if tags.is_empty() {
            self.active_filter
                .inherited_tag()
                .map(|tag| vec![tag.to_string()])
                .unwrap_or_default()
        } else {
            tags
        };
        let record = TodoRecord {
            id: generate_unique_id(),
            text: text.to_string(),
            completed: false,
            created_at: utc_now(),
            completed_at: None,
            tags,
        };
        let id = record.id.clone();
        self.mutate(|todos| todos.push(record));
        Ok(id)
    }

    pub fn remove(&mut self, id: &str) {
        if let Some(index) = self.position(id) {
            self.mutate(|todos| {
                todos.remove(index);
            });
        }
    }

    /// Flips completion, stamping or clearing `completed_at`.
    pub fn toggle(&mut self, id: &str) {
        self.update_todo(id, |todo| {
            todo.completed = !todo.completed;
            todo.completed_at = todo.completed.then(utc_now);
        });
    }

    /// Replaces the text with its trimmed form. Blank text is ignored.
    pub fn rename(&mut self, id: &str, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        self.update_todo(id, |todo| todo.text = text.to_string());
    }

    pub fn set_tags(&mut self, id: &str, tags: Vec<String>) {
        self.update_todo(id, |todo| todo.tags = tags);
    }

    pub fn add_tag(&mut self, id: &str, tag: &str) {
        if self.get(id).is_some_and(|todo| !todo.has_tag(tag)) {
            self.update_todo(id, |todo| todo.tags.push(tag.to_string()));
        }
    }

    pub fn remove_tag(&mut self, id: &str, tag: &str) {
        self.update_todo(id, |todo| todo.tags.retain(|t| t != tag));
    }

    /// Completes every open todo in the current view with one shared timestamp.
    pub fn mark_all_visible_complete(&mut self) {
        let now = utc_now();
        let filter = self.active_filter.clone();
        self.mutate(|todos| {
            for todo in todos
                .iter_mut()
                .filter(|todo| filter.matches(todo) && !todo.completed)
            {
                todo.completed = true;
                todo.completed_at = Some(now);
            }
        });
    }

    /// Removes completed todos, but only those in the current view.
    pub fn clear_completed(&mut self) {
        let filter = self.active_filter.clone();
        self.mutate(|todos| todos.retain(|todo| !(todo.completed && filter.matches(todo))));
    }

    /// Strips `tag` from every todo. An active filter on that tag falls back to all todos.
    pub fn delete_tag(&mut self, tag: &str) {
        if self.active_filter.inherited_tag() == Some(tag) {
            self.active_filter = TagFilter::All;
        }
        self.mutate(|todos| {
            for todo in todos.iter_mut() {
                todo.tags.retain(|t| t != tag);
            }
        });
    }

    /// Drops every todo and resets the filter.
    pub fn reset(&mut self) {
        self.active_filter = TagFilter::All;
        self.mutate(Vec::clear);
    }

    /// Todos in the current view, in insertion order.
    pub fn filtered(&self) -> Vec<&TodoRecord> {
        self.todos()
            .iter()
            .filter(|todo| self.active_filter.matches(todo))
            .collect()
    }

    pub fn completed_count(&self) -> usize {
        self.filtered().iter().filter(|todo| todo.completed).count()
    }

    pub fn remaining_count(&self) -> usize {
        self.filtered().iter().filter(|todo| !todo.completed).count()
    }

    /// Whether the current view is non-empty and fully completed.
    pub fn all_completed(&self) -> bool {
        let filtered = self.filtered();
        !filtered.is_empty() && filtered.iter().all(|todo| todo.completed)
    }

    /// Every tag in use, sorted and distinct.
    pub fn all_tags(&self) -> Vec<String> {
        self.todos()
            .iter()
            .flat_map(|todo| todo.tags.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Totals for all todos, untagged todos, and each tag, in that order.
    pub fn counts_by_scope(&self) -> Vec<(TagFilter, ScopeCounts)> {
        [TagFilter::All, TagFilter::Untagged]
            .into_iter()
            .chain(self.all_tags().into_iter().map(TagFilter::Tag))
            .map(|filter| {
                let counts = self
                    .todos()
                    .iter()
                    .filter(|todo| filter.matches(todo))
                    .fold(ScopeCounts::default(), |mut acc, todo| {
                        acc.total += 1;
                        acc.completed += usize::from(todo.completed);
                        acc
                    });
                (filter, counts)
            })
            .collect()
    }

    /// Whether `id` is in the current view.
    pub fn is_visible(&self, id: &str) -> bool {
        self.get(id)
            .is_some_and(|todo| self.active_filter.matches(todo))
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.todos().iter().position(|todo| todo.id == id)
    }

    fn update_todo(&mut self, id: &str, change: impl FnOnce(&mut TodoRecord)) {
        if let Some(index) = self.position(id) {
            self.mutate(|todos| change(&mut todos[index]));
        }
    }

    fn mutate<R>(&mut self, change: impl FnOnce(&mut Vec<TodoRecord>) -> R) -> R {
        let out = self.todos.update(change);
        save_raw_logged(&*self.store, ACTIVE_TAG_KEY, self.active_filter.as_raw());
        out
    }

    fn commit(&self) {
        self.todos.save();
        save_raw_logged(&*self.store, ACTIVE_TAG_KEY, self.active_filter.as_raw());
    }
}

impl std::fmt::Debug for TodoStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoStore")
            .field("todos", self.todos.get())
            .field("active_filter", &self.active_filter)
            .finish_non_exhaustive()
    }
}
