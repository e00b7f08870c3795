//! Domain model for journal notes.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//!
//! # Invariants
//! - Every note is identified by a stable, non-nil `NoteId`.
//! - Notes are immutable once created; there is no edit or delete path.

pub mod note;
