//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the notes screen operations to Dart via FRB.
//! - Own the process-level notes session the bridge calls into.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - All calls are serialized through one session lock.
//! - Note ids cross the boundary as hyphenated UUID strings.

use journey_core::{
    core_version as core_version_inner, init_logging as init_logging_inner,
    init_logging_from_config, ping as ping_inner, CoreConfig, Note, NoteServiceError,
    NotesSession, DISPLAY_LINE_CAP,
};
use log::warn;
use once_cell::sync::Lazy;
use std::sync::{Mutex, MutexGuard, PoisonError};

static SESSION: Lazy<Mutex<NotesSession>> = Lazy::new(|| Mutex::new(build_session()));

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Initializes logging from `JOURNEY_LOG_*` environment variables.
///
/// Returns empty string on success (including "no directory configured").
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging_from_env() -> String {
    match CoreConfig::from_env().and_then(|config| init_logging_from_config(&config)) {
        Ok(_) => String::new(),
        Err(err) => err,
    }
}

/// Line cap applied to collapsed note cards.
#[flutter_rust_bridge::frb(sync)]
pub fn display_line_cap() -> u32 {
    DISPLAY_LINE_CAP
}

/// Note projection for list rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteItem {
    /// Stable note ID in string form.
    pub note_id: String,
    /// Raw note text.
    pub content: String,
    /// Creation time in epoch milliseconds.
    pub created_at_ms: i64,
    /// Card header text, `yyyy-MM-dd HH:mm` in local time.
    pub formatted_date: String,
}

/// Filtered list envelope for the notes screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesListResponse {
    /// Visible notes, newest first.
    pub items: Vec<NoteItem>,
    /// Human-readable response message for diagnostics.
    pub message: String,
    /// Query the items were filtered with.
    pub query: String,
}

/// Result envelope for note writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteActionResponse {
    /// Whether the note was saved.
    pub ok: bool,
    /// Created note ID on success.
    pub note_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

/// Adds a note from the add-note dialog.
///
/// # FFI contract
/// - Content is stored exactly as given.
/// - Blank content returns `ok=false`; the caller keeps its dialog open.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_add(content: String) -> NoteActionResponse {
    match lock_session().add_note(content) {
        Ok(id) => NoteActionResponse {
            ok: true,
            note_id: Some(id.to_string()),
            message: "Note saved.".to_string(),
        },
        Err(NoteServiceError::BlankContent) => NoteActionResponse {
            ok: false,
            note_id: None,
            message: "Note content is blank.".to_string(),
        },
        Err(err) => NoteActionResponse {
            ok: false,
            note_id: None,
            message: format!("notes_add failed: {err}"),
        },
    }
}

/// Lists all notes, ignoring the search query.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_list() -> Vec<NoteItem> {
    lock_session().all_notes().iter().map(to_note_item).collect()
}

/// Binds the search field text to the session query.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_set_search_query(query: String) {
    lock_session().set_search_query(query);
}

/// Current session search query.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_search_query() -> String {
    lock_session().search_query().to_string()
}

/// Notes visible under the current search query.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_visible() -> NotesListResponse {
    let session = lock_session();
    let items = session
        .visible_notes()
        .iter()
        .map(to_note_item)
        .collect::<Vec<_>>();
    let message = if items.is_empty() {
        "No notes.".to_string()
    } else {
        format!("{} note(s).", items.len())
    };
    NotesListResponse {
        items,
        message,
        query: session.search_query().to_string(),
    }
}

fn build_session() -> NotesSession {
    let config = CoreConfig::from_env().unwrap_or_else(|err| {
        warn!("event=session_init module=ffi status=fallback error={err}");
        CoreConfig::default()
    });
    if !config.seed_sample_notes {
        return NotesSession::empty();
    }
    NotesSession::with_sample_notes().unwrap_or_else(|err| {
        warn!("event=session_init module=ffi status=fallback error={err}");
        NotesSession::empty()
    })
}

fn lock_session() -> MutexGuard<'static, NotesSession> {
    SESSION.lock().unwrap_or_else(PoisonError::into_inner)
}

fn to_note_item(note: &Note) -> NoteItem {
    NoteItem {
        note_id: note.id.to_string(),
        content: note.content.clone(),
        created_at_ms: note.created_at,
        formatted_date: note.formatted_date(),
    }
}
