//! Core domain logic for the Journey notes app.
//! This crate is the single source of truth for note invariants.

pub mod card;
pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use card::state::{CardAffordance, CardExpansion, NoteCardState, DISPLAY_LINE_CAP};
pub use config::CoreConfig;
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::note::{Note, NoteId, NoteValidationError};
pub use repo::note_repo::{InMemoryNoteRepository, NoteRepository, RepoError, RepoResult};
pub use search::filter::{filter_notes, matches_query};
pub use service::note_service::{NoteService, NoteServiceError, SAMPLE_NOTES};
pub use service::notes_session::{NotesChange, NotesSession, SubscriptionId};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
