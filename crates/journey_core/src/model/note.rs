//! Note domain model.
//!
//! # Responsibility
//! - Define the immutable note record rendered by the notes list.
//! - Validate note content and identity at construction time.
//!
//! # Invariants
//! - `id` is a non-nil UUID and is never reused for another note.
//! - `content` is never empty or whitespace-only.
//! - `created_at` is Unix epoch milliseconds from the platform clock.

use chrono::{Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Card header format, e.g. `2026-02-13 10:00`.
pub const NOTE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Stable identifier for one note.
pub type NoteId = Uuid;

/// Validation failures for note construction and decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    /// Content is empty or consists only of whitespace.
    BlankContent,
    /// Identifier is the nil UUID.
    NilId,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankContent => write!(f, "note content cannot be blank"),
            Self::NilId => write!(f, "note id cannot be nil"),
        }
    }
}

impl Error for NoteValidationError {}

/// One user-authored note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawNote")]
pub struct Note {
    /// Stable id, serialized as a hyphenated UUID string.
    pub id: NoteId,
    /// Free-form text exactly as the user submitted it.
    pub content: String,
    /// Creation time in Unix epoch milliseconds.
    pub created_at: i64,
}

#[derive(Deserialize)]
struct RawNote {
    id: NoteId,
    content: String,
    created_at: i64,
}

impl TryFrom<RawNote> for Note {
    type Error = NoteValidationError;

    fn try_from(value: RawNote) -> Result<Self, Self::Error> {
        Note::with_id(value.id, value.content, value.created_at)
    }
}

impl Note {
    /// Creates a note with a fresh v4 id and the current timestamp.
    ///
    /// # Errors
    /// - `BlankContent` when `content` is empty or whitespace-only.
    pub fn new(content: impl Into<String>) -> Result<Self, NoteValidationError> {
        Self::with_id(Uuid::new_v4(), content, now_epoch_ms())
    }

    /// Creates a note with caller-provided identity and timestamp.
    ///
    /// Used by seeding and decoding paths where both already exist.
    ///
    /// # Errors
    /// - `NilId` when `id` is the nil UUID.
    /// - `BlankContent` when `content` is empty or whitespace-only.
    pub fn with_id(
        id: NoteId,
        content: impl Into<String>,
        created_at: i64,
    ) -> Result<Self, NoteValidationError> {
        let note = Self {
            id,
            content: content.into(),
            created_at,
        };
        note.validate()?;
        Ok(note)
    }

    /// Checks identity and content invariants.
    ///
    /// Fields are public, so write paths re-check before storing.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        if self.id.is_nil() {
            return Err(NoteValidationError::NilId);
        }
        if is_blank(&self.content) {
            return Err(NoteValidationError::BlankContent);
        }
        Ok(())
    }

    /// Renders `created_at` in local time using [`NOTE_DATE_FORMAT`].
    pub fn formatted_date(&self) -> String {
        self.formatted_date_in(&Local)
    }

    /// Renders `created_at` in the given time zone using [`NOTE_DATE_FORMAT`].
    ///
    /// Falls back to the UNIX epoch for out-of-range timestamps.
    pub fn formatted_date_in<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        match tz.timestamp_millis_opt(self.created_at).single() {
            Some(at) => at.format(NOTE_DATE_FORMAT).to_string(),
            None => tz
                .from_utc_datetime(&chrono::DateTime::<Utc>::UNIX_EPOCH.naive_utc())
                .format(NOTE_DATE_FORMAT)
                .to_string(),
        }
    }
}

/// Returns whether `value` is empty or whitespace-only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Current platform time in Unix epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::{is_blank, Note, NoteValidationError};
    use chrono::{FixedOffset, Utc};
    use uuid::Uuid;

    #[test]
    fn blank_detection_covers_whitespace_variants() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\n\t \r\n"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn formatted_date_uses_minute_precision() {
        let note = Note::with_id(Uuid::new_v4(), "x", 1_700_000_000_000).unwrap();
        assert_eq!(note.formatted_date_in(&Utc), "2023-11-14 22:13");

        let east8 = FixedOffset::east_opt(8 * 3600).unwrap();
        assert_eq!(note.formatted_date_in(&east8), "2023-11-15 06:13");
    }

    #[test]
    fn formatted_date_falls_back_for_out_of_range_timestamp() {
        let note = Note::with_id(Uuid::new_v4(), "x", i64::MAX).unwrap();
        assert_eq!(note.formatted_date_in(&Utc), "1970-01-01 00:00");
    }

    #[test]
    fn validate_catches_content_blanked_after_construction() {
        let mut note = Note::new("valid").unwrap();
        assert_eq!(note.validate(), Ok(()));
        note.content = " \n ".to_string();
        assert_eq!(note.validate(), Err(NoteValidationError::BlankContent));
    }

    #[test]
    fn with_id_checks_id_before_content() {
        let err = Note::with_id(Uuid::nil(), "  ", 0).unwrap_err();
        assert_eq!(err, NoteValidationError::NilId);
    }
}
