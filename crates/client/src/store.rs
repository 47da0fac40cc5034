//! In-memory mirror of one resource's collection.
//!
//! A [`Store`] is an ordinary value owned by whoever renders it; every change
//! goes through [`Store::dispatch`]. It holds no network handle, so callers
//! must serialize writes to the same id themselves (see [`crate::sync`]).

use crm_core::types::DbId;

use crate::filter::{filter_records, Record};

/// A state change applied to a [`Store`].
#[derive(Debug, Clone, PartialEq)]
pub enum Action<T> {
    /// Replace the collection wholesale.
    SetItems(Vec<T>),
    /// Append one entity.
    AddItem(T),
    /// Replace the entity with the same id in place; no-op if absent.
    UpdateItem(T),
    /// Drop the entity with this id; no-op if absent.
    RemoveItem(DbId),
    SetSearchTerm(String),
    SetLoading(bool),
    SetError(Option<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Store<T> {
    items: Vec<T>,
    loading: bool,
    error: Option<String>,
    search_term: String,
}

impl<T> Default for Store<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            search_term: String::new(),
        }
    }
}

impl<T: Record> Store<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&mut self, action: Action<T>) {
        match action {
            Action::SetItems(items) => self.items = items,
            Action::AddItem(item) => self.items.push(item),
            Action::UpdateItem(item) => {
                if let Some(slot) = self.items.iter_mut().find(|i| i.id() == item.id()) {
                    *slot = item;
                }
            }
            Action::RemoveItem(id) => self.items.retain(|i| i.id() != id),
            Action::SetSearchTerm(term) => self.search_term = term,
            Action::SetLoading(loading) => self.loading = loading,
            Action::SetError(error) => self.error = error,
        }
    }

    pub fn set_items(&mut self, items: Vec<T>) {
        self.dispatch(Action::SetItems(items));
    }

    pub fn add_item(&mut self, item: T) {
        self.dispatch(Action::AddItem(item));
    }

    pub fn update_item(&mut self, item: T) {
        self.dispatch(Action::UpdateItem(item));
    }

    pub fn remove_item(&mut self, id: DbId) {
        self.dispatch(Action::RemoveItem(id));
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.dispatch(Action::SetSearchTerm(term.into()));
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.dispatch(Action::SetLoading(loading));
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.dispatch(Action::SetError(error));
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Items matching the current search term.
    pub fn filtered(&self) -> Vec<&T> {
        filter_records(&self.items, &self.search_term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: DbId,
        name: String,
    }

    impl Record for Item {
        fn id(&self) -> DbId {
            self.id
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![self.name.as_str()]
        }
    }

    fn item(id: DbId, name: &str) -> Item {
        Item {
            id,
            name: name.to_string(),
        }
    }

    fn seeded() -> Store<Item> {
        let mut store = Store::new();
        store.set_items(vec![item(1, "Acme"), item(2, "Globex"), item(3, "Initech")]);
        store
    }

    #[test]
    fn starts_empty_and_idle() {
        let store: Store<Item> = Store::new();
        assert!(store.items().is_empty());
        assert!(!store.loading());
        assert_eq!(store.error(), None);
        assert_eq!(store.search_term(), "");
    }

    #[test]
    fn add_appends() {
        let mut store = seeded();
        store.add_item(item(4, "Umbrella"));
        assert_eq!(store.items().last(), Some(&item(4, "Umbrella")));
        assert_eq!(store.items().len(), 4);
    }

    #[test]
    fn update_replaces_in_place() {
        let mut store = seeded();
        store.update_item(item(2, "Globex Corp"));
        assert_eq!(store.items()[1], item(2, "Globex Corp"));
        assert_eq!(store.items().len(), 3);
    }

    #[test]
    fn update_of_unknown_id_is_noop() {
        let mut store = seeded();
        let before = store.clone();
        store.update_item(item(99, "Ghost"));
        assert_eq!(store, before);
    }

    #[test]
    fn remove_drops_matching_id_only() {
        let mut store = seeded();
        store.remove_item(1);
        store.remove_item(99);
        let ids: Vec<DbId> = store.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn search_term_drives_filtered_view() {
        let mut store = seeded();
        store.set_search_term("INI");
        let names: Vec<&str> = store.filtered().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Initech"]);

        store.set_search_term("");
        assert_eq!(store.filtered().len(), 3);
    }

    #[test]
    fn dispatch_sets_flags() {
        let mut store = seeded();
        store.dispatch(Action::SetLoading(true));
        store.dispatch(Action::SetError(Some("API Error: Not Found".into())));
        assert!(store.loading());
        assert_eq!(store.error(), Some("API Error: Not Found"));

        store.dispatch(Action::SetError(None));
        assert_eq!(store.error(), None);
    }
}
