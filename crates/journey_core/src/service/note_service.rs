//! Note use-case service.
//!
//! # Responsibility
//! - Provide the add/list/filter APIs the notes screen is built on.
//! - Seed the demonstration notes shown on first launch.
//!
//! # Invariants
//! - Blank content is rejected before anything is written.
//! - Content is stored exactly as submitted (no trimming).
//! - List and filter results are newest first.

use crate::model::note::{is_blank, Note, NoteId, NoteValidationError};
use crate::repo::note_repo::{NoteRepository, RepoError};
use crate::search::filter::filter_notes;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Demonstration notes, in the order they are displayed.
pub const SAMPLE_NOTES: [&str; 3] = [
    "这是第一条笔记内容。\n\n它包含多行文本。",
    "第二条笔记，用于测试卡片显示效果。",
    "这是一条很长的笔记，用于测试文本截断和展开功能。\n\n\
     Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod \
     tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, \
     quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo \
     consequat. Duis aute irure dolor in reprehenderit in voluptate velit esse \
     cillum dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non \
     proident, sunt in culpa qui officia deserunt mollit anim id est laborum.",
];

/// Service error for note use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteServiceError {
    /// Submitted content is empty or whitespace-only.
    BlankContent,
    /// Storage-layer failure.
    Repo(RepoError),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankContent => write!(f, "note content cannot be blank"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::BlankContent => None,
        }
    }
}

impl From<RepoError> for NoteServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<NoteValidationError> for NoteServiceError {
    fn from(value: NoteValidationError) -> Self {
        match value {
            NoteValidationError::BlankContent => Self::BlankContent,
            other => Self::Repo(RepoError::Validation(other)),
        }
    }
}

/// Note service facade over repository implementations.
pub struct NoteService<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a service and seeds it with [`SAMPLE_NOTES`].
    ///
    /// After seeding, `list_notes()` returns the samples in declaration order.
    pub fn with_sample_notes(repo: R) -> Result<Self, NoteServiceError> {
        let mut service = Self::new(repo);
        for content in SAMPLE_NOTES.iter().rev() {
            service.add_note(*content)?;
        }
        debug!(
            "event=notes_seed module=service status=ok count={}",
            SAMPLE_NOTES.len()
        );
        Ok(service)
    }

    /// Creates one note and prepends it to the store.
    ///
    /// # Errors
    /// - `BlankContent` when `content` is empty or whitespace-only; the store
    ///   is left unchanged.
    /// - `Repo` when storage rejects the write.
    pub fn add_note(&mut self, content: impl Into<String>) -> Result<NoteId, NoteServiceError> {
        let content = content.into();
        if is_blank(&content) {
            debug!("event=note_add module=service status=rejected reason=blank_content");
            return Err(NoteServiceError::BlankContent);
        }

        let note = Note::new(content)?;
        let content_chars = note.content.chars().count();
        match self.repo.insert_front(note) {
            Ok(id) => {
                info!(
                    "event=note_add module=service status=ok content_chars={} total={}",
                    content_chars,
                    self.repo.len()
                );
                Ok(id)
            }
            Err(err) => {
                warn!("event=note_add module=service status=error error={err}");
                Err(err.into())
            }
        }
    }

    /// Returns all notes, newest first.
    pub fn list_notes(&self) -> Vec<Note> {
        self.repo.list()
    }

    /// Returns notes whose content contains `query`, ignoring case.
    ///
    /// Blank queries return `list_notes()` unchanged.
    pub fn filter_notes(&self, query: &str) -> Vec<Note> {
        filter_notes(self.repo.list(), query)
    }

    /// Number of stored notes.
    pub fn note_count(&self) -> usize {
        self.repo.len()
    }
}
