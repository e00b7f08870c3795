//! Per-screen notes session.
//!
//! # Responsibility
//! - Own one note service, its search query and the add-note dialog flag.
//! - Notify registered listeners after each state change.
//!
//! # Invariants
//! - One session per screen context; sessions are passed explicitly.
//! - Listeners run synchronously, after the change is applied.
//! - A rejected add leaves store, dialog flag and listeners untouched.

use crate::model::note::{Note, NoteId};
use crate::repo::note_repo::{InMemoryNoteRepository, NoteRepository};
use crate::service::note_service::{NoteService, NoteServiceError};
use log::debug;
use std::collections::BTreeMap;

/// State change delivered to session listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotesChange {
    /// A note was prepended to the store.
    NoteAdded(NoteId),
    /// The search query changed to the contained value.
    SearchQueryChanged(String),
    /// The add-note dialog was opened (`true`) or closed (`false`).
    AddDialogVisibility(bool),
}

/// Handle returned by [`NotesSession::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&NotesChange) + Send>;

/// Screen-level controller over one note store.
pub struct NotesSession<R: NoteRepository = InMemoryNoteRepository> {
    service: NoteService<R>,
    search_query: String,
    add_dialog_open: bool,
    listeners: BTreeMap<SubscriptionId, Listener>,
    next_subscription: u64,
}

impl NotesSession<InMemoryNoteRepository> {
    /// Creates an in-memory session seeded with the sample notes.
    pub fn with_sample_notes() -> Result<Self, NoteServiceError> {
        let service = NoteService::with_sample_notes(InMemoryNoteRepository::new())?;
        Ok(Self::new(service))
    }

    /// Creates an empty in-memory session.
    pub fn empty() -> Self {
        Self::new(NoteService::new(InMemoryNoteRepository::new()))
    }
}

impl<R: NoteRepository> NotesSession<R> {
    pub fn new(service: NoteService<R>) -> Self {
        Self {
            service,
            search_query: String::new(),
            add_dialog_open: false,
            listeners: BTreeMap::new(),
            next_subscription: 0,
        }
    }

    /// Current search query as bound to the search field.
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Replaces the search query; notifies only when the value changes.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query == self.search_query {
            return;
        }
        self.search_query = query;
        let change = NotesChange::SearchQueryChanged(self.search_query.clone());
        self.notify(&change);
    }

    /// Notes matching the current query, newest first.
    pub fn visible_notes(&self) -> Vec<Note> {
        self.service.filter_notes(&self.search_query)
    }

    /// All notes regardless of the query, newest first.
    pub fn all_notes(&self) -> Vec<Note> {
        self.service.list_notes()
    }

    pub fn note_count(&self) -> usize {
        self.service.note_count()
    }

    /// Adds a note and notifies listeners on success.
    pub fn add_note(&mut self, content: impl Into<String>) -> Result<NoteId, NoteServiceError> {
        let id = self.service.add_note(content)?;
        self.notify(&NotesChange::NoteAdded(id));
        Ok(id)
    }

    pub fn is_add_dialog_open(&self) -> bool {
        self.add_dialog_open
    }

    pub fn open_add_dialog(&mut self) {
        self.set_add_dialog_open(true);
    }

    pub fn dismiss_add_dialog(&mut self) {
        self.set_add_dialog_open(false);
    }

    /// Saves the dialog content and closes the dialog.
    ///
    /// Blank content is rejected and the dialog stays as it was.
    pub fn submit_add_dialog(
        &mut self,
        content: impl Into<String>,
    ) -> Result<NoteId, NoteServiceError> {
        let id = self.add_note(content)?;
        self.set_add_dialog_open(false);
        Ok(id)
    }

    /// Registers a change listener.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&NotesChange) + Send + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.insert(id, Box::new(listener));
        debug!(
            "event=session_subscribe module=session status=ok listeners={}",
            self.listeners.len()
        );
        id
    }

    /// Removes a listener. Returns `false` for unknown ids.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(&id).is_some()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn set_add_dialog_open(&mut self, open: bool) {
        if self.add_dialog_open == open {
            return;
        }
        self.add_dialog_open = open;
        self.notify(&NotesChange::AddDialogVisibility(open));
    }

    fn notify(&mut self, change: &NotesChange) {
        for listener in self.listeners.values_mut() {
            listener(change);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{NotesChange, NotesSession};
    use std::sync::{Arc, Mutex};

    #[test]
    fn unchanged_query_does_not_notify() {
        let mut session = NotesSession::empty();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        session.subscribe(move |change| sink.lock().unwrap().push(change.clone()));

        session.set_search_query("abc");
        session.set_search_query("abc");

        assert_eq!(
            *seen.lock().unwrap(),
            vec![NotesChange::SearchQueryChanged("abc".to_string())]
        );
    }

    #[test]
    fn subscription_ids_are_not_reused() {
        let mut session = NotesSession::empty();
        let first = session.subscribe(|_| {});
        assert!(session.unsubscribe(first));
        let second = session.subscribe(|_| {});
        assert_ne!(first, second);
        assert!(!session.unsubscribe(first));
    }
}
