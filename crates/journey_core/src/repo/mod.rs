//! Repository layer abstractions and in-memory implementation.
//!
//! # Responsibility
//! - Define the data access contract used by note services.
//! - Keep storage details out of service/business orchestration.
//!
//! # Invariants
//! - Stored notes are ordered newest first.
//! - Note ids are unique within one repository instance.

pub mod note_repo;
