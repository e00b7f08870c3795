//! Note repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Hold the ordered note sequence for one session.
//! - Reject writes that would break identity uniqueness.
//!
//! # Invariants
//! - `insert_front` prepends, so index 0 is always the newest note.
//! - `list` returns a snapshot; later writes are never observed through it.
//! - Notes live only as long as the repository value.

use crate::model::note::{Note, NoteId, NoteValidationError};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for note writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// A note with the same id is already stored.
    DuplicateId(NoteId),
    /// The note breaks a model invariant.
    Validation(NoteValidationError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "note id already stored: {id}"),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DuplicateId(_) => None,
            Self::Validation(err) => Some(err),
        }
    }
}

impl From<NoteValidationError> for RepoError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for note storage.
pub trait NoteRepository {
    /// Prepends one note so it sorts first.
    fn insert_front(&mut self, note: Note) -> RepoResult<NoteId>;
    /// Returns all notes, newest first.
    fn list(&self) -> Vec<Note>;
    /// Number of stored notes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-local note storage.
///
/// Notes are kept oldest-first internally so inserts are amortized O(1);
/// reads reverse into newest-first order.
#[derive(Debug, Default)]
pub struct InMemoryNoteRepository {
    notes: Vec<Note>,
    ids: HashSet<NoteId>,
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NoteRepository for InMemoryNoteRepository {
    fn insert_front(&mut self, note: Note) -> RepoResult<NoteId> {
        note.validate()?;
        if !self.ids.insert(note.id) {
            return Err(RepoError::DuplicateId(note.id));
        }
        let id = note.id;
        self.notes.push(note);
        Ok(id)
    }

    fn list(&self) -> Vec<Note> {
        self.notes.iter().rev().cloned().collect()
    }

    fn len(&self) -> usize {
        self.notes.len()
    }
}
