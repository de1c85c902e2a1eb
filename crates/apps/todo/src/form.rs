use std::collections::BTreeSet;

use crate::store::TodoStore;

/// Shown when the new-todo input is submitted blank.
pub const EMPTY_INPUT_MESSAGE: &str = "Todo text cannot be empty";

/// New-todo input state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoForm {
    pub new_todo: String,
    pub new_todo_tags: Vec<String>,
    input_error: String,
}

impl TodoForm {
    /// Adds the entered todo. Clears the inputs on success; records the message on failure.
    pub fn submit(&mut self, store: &mut TodoStore) -> Option<String> {
        if self.new_todo.trim().is_empty() {
            self.input_error = EMPTY_INPUT_MESSAGE.to_string();
            return None;
        }
        match store.add(&self.new_todo, &self.new_todo_tags) {
            Ok(id) => {
                self.new_todo.clear();
                self.new_todo_tags.clear();
                self.input_error.clear();
                Some(id)
            }
            Err(err) => {
                self.input_error = err.to_string();
                None
            }
        }
    }

    pub fn input_error(&self) -> Option<&str> {
        (!self.input_error.is_empty()).then_some(self.input_error.as_str())
    }

    pub fn clear_input_error(&mut self) {
        self.input_error.clear();
    }
}

/// Per-todo tag menus and the shared new-tag input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagMenus {
    open: BTreeSet<String>,
    pub new_tag: String,
}

impl TagMenus {
    pub fn toggle_menu(&mut self, id: &str, open: bool) {
        if open {
            self.open.insert(id.to_string());
        } else {
            self.open.remove(id);
        }
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.contains(id)
    }

    /// Adds an existing tag and closes the todo's menu.
    pub fn add_tag(&mut self, store: &mut TodoStore, id: &str, tag: &str) {
        store.add_tag(id, tag);
        self.open.remove(id);
    }

    pub fn remove_tag(&mut self, store: &mut TodoStore, id: &str, tag: &str) {
        store.remove_tag(id, tag);
    }

    /// Adds the trimmed new-tag input to the todo. Blank input is ignored.
    pub fn add_new_tag(&mut self, store: &mut TodoStore, id: &str) -> bool {
        let tag = self.new_tag.trim();
        if tag.is_empty() {
            return false;
        }
        store.add_tag(id, tag);
        self.new_tag.clear();
        self.open.remove(id);
        true
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use platform_storage::MemoryPrefsStore;
    use pretty_assertions::assert_eq;

    use super::*;

    fn todos() -> TodoStore {
        TodoStore::load(Rc::new(MemoryPrefsStore::default()))
    }

    #[test]
    fn submit_clears_inputs_on_success() {
        let mut store = todos();
        let mut form = TodoForm {
            new_todo: "walk dog".into(),
            new_todo_tags: vec!["pets".into()],
            ..TodoForm::default()
        };

        let id = form.submit(&mut store).expect("added");
        assert_eq!(store.get(&id).expect("todo").tags, vec!["pets"]);
        assert_eq!(form, TodoForm::default());
        assert_eq!(form.input_error(), None);
    }

    #[test]
    fn submit_reports_errors_and_keeps_inputs() {
        let mut store = todos();
        let mut form = TodoForm::default();

        form.new_todo = "  ".into();
        assert_eq!(form.submit(&mut store), None);
        assert_eq!(form.input_error(), Some(EMPTY_INPUT_MESSAGE));

        store.add("dup", ["x"]).expect("seed");
        form.new_todo = "DUP".into();
        form.new_todo_tags = vec!["x".into()];
        assert_eq!(form.submit(&mut store), None);
        assert_eq!(
            form.input_error(),
            Some("This todo already exists in the selected scope")
        );
        assert_eq!(form.new_todo, "DUP");

        form.clear_input_error();
        assert_eq!(form.input_error(), None);
    }

    #[test]
    fn adding_tags_closes_menu() {
        let mut store = todos();
        let id = store.add("task", ["a"]).expect("add");
        let mut menus = TagMenus::default();

        menus.toggle_menu(&id, true);
        menus.add_tag(&mut store, &id, "b");
        assert!(!menus.is_open(&id));
        assert_eq!(store.get(&id).expect("todo").tags, vec!["a", "b"]);

        menus.toggle_menu(&id, true);
        menus.new_tag = "  fresh ".into();
        assert!(menus.add_new_tag(&mut store, &id));
        assert!(!menus.is_open(&id));
        assert!(menus.new_tag.is_empty());
        assert_eq!(store.get(&id).expect("todo").tags, vec!["a", "b", "fresh"]);

        menus.remove_tag(&mut store, &id, "a");
        assert_eq!(store.get(&id).expect("todo").tags, vec!["b", "fresh"]);
    }

    #[test]
    fn blank_new_tag_is_ignored() {
        let mut store = todos();
        let id = store.add("task", ["a"]).expect("add");
        let mut menus = TagMenus::default();
        menus.toggle_menu(&id, true);
        menus.new_tag = "   ".into();

        assert!(!menus.add_new_tag(&mut store, &id));
        assert!(menus.is_open(&id));
        assert_eq!(store.get(&id).expect("todo").tags, vec!["a"]);
    }
}
