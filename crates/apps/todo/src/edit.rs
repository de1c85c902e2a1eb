use std::collections::HashMap;

use crate::store::TodoStore;

/// In-progress text edits keyed by todo id. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoEditSessions {
    drafts: HashMap<String, String>,
}

impl TodoEditSessions {
    /// Opens an edit seeded with the todo's current text.
    ///
    /// Only todos in the store's current view can be edited. Returns whether a session opened.
    pub fn start(&mut self, store: &TodoStore, id: &str) -> bool {
        self.prune(store);
        if !store.is_visible(id) {
            return false;
        }
        let Some(todo) = store.get(id) else {
            return false;
        };
        self.drafts.insert(id.to_string(), todo.text.clone());
        true
    }

    pub fn set_draft(&mut self, id: &str, text: impl Into<String>) {
        if let Some(draft) = self.drafts.get_mut(id) {
            *draft = text.into();
        }
    }

    /// Closes the session, renaming the todo when the draft is not blank.
    pub fn save(&mut self, store: &mut TodoStore, id: &str) {
        self.prune(store);
        let Some(draft) = self.drafts.remove(id) else {
            return;
        };
        if store.is_visible(id) && !draft.trim().is_empty() {
            store.rename(id, &draft);
        }
    }

    pub fn cancel(&mut self, id: &str) {
        self.drafts.remove(id);
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.drafts.contains_key(id)
    }

    pub fn draft(&self, id: &str) -> Option<&str> {
        self.drafts.get(id).map(String::as_str)
    }

    /// Drops drafts whose todo has since been removed.
    fn prune(&mut self, store: &TodoStore) {
        self.drafts.retain(|id, _| store.get(id).is_some());
    }
}
